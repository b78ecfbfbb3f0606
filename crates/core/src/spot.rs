//! Parking spot model.

use crate::types::DbId;
use crate::vehicle::VehicleType;

/// A single physical parking unit of a fixed vehicle type.
///
/// Spots are owned by the [`crate::allocator::SpotAllocator`]; the
/// availability flag is toggled only through its assign, release, and
/// allocate operations. Spots are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Spot {
    pub id: DbId,
    pub vehicle_type: VehicleType,
    pub available: bool,
}

impl Spot {
    pub fn new(id: DbId, vehicle_type: VehicleType, available: bool) -> Self {
        Self {
            id,
            vehicle_type,
            available,
        }
    }
}
