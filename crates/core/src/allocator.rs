//! Typed spot table with availability bookkeeping.

use std::collections::BTreeMap;

use crate::error::CoreError;
use crate::spot::Spot;
use crate::types::DbId;
use crate::vehicle::VehicleType;

/// Tracks which typed spots are free or occupied.
///
/// The table is keyed by spot id in a `BTreeMap`, so scans visit spots
/// in ascending id order and the lowest-id match wins deterministically.
/// Failed operations leave the table untouched.
#[derive(Debug, Default)]
pub struct SpotAllocator {
    spots: BTreeMap<DbId, Spot>,
}

impl SpotAllocator {
    pub fn new(spots: impl IntoIterator<Item = Spot>) -> Self {
        Self {
            spots: spots.into_iter().map(|spot| (spot.id, spot)).collect(),
        }
    }

    /// Lowest-id available spot of the given type, or `None` when the
    /// lot has no matching free spot. A full lot is a normal outcome the
    /// caller branches on, not an error.
    pub fn find_available(&self, vehicle_type: VehicleType) -> Option<DbId> {
        self.spots
            .values()
            .find(|spot| spot.vehicle_type == vehicle_type && spot.available)
            .map(|spot| spot.id)
    }

    /// Mark a spot occupied.
    ///
    /// Double-assignment is a caller bug and is surfaced as
    /// [`CoreError::SpotStateConflict`] rather than treated as idempotent.
    pub fn assign(&mut self, spot_id: DbId) -> Result<(), CoreError> {
        let spot = self
            .spots
            .get_mut(&spot_id)
            .ok_or(CoreError::UnknownSpot(spot_id))?;
        if !spot.available {
            return Err(CoreError::SpotStateConflict {
                id: spot_id,
                state: "occupied",
            });
        }
        spot.available = false;
        Ok(())
    }

    /// Mark a spot free again. Mirrors [`SpotAllocator::assign`]: fails
    /// if the spot is unknown or already free.
    pub fn release(&mut self, spot_id: DbId) -> Result<(), CoreError> {
        let spot = self
            .spots
            .get_mut(&spot_id)
            .ok_or(CoreError::UnknownSpot(spot_id))?;
        if spot.available {
            return Err(CoreError::SpotStateConflict {
                id: spot_id,
                state: "free",
            });
        }
        spot.available = true;
        Ok(())
    }

    /// Find and claim the lowest-id available spot of the given type as
    /// a single step.
    ///
    /// The scan and the claim share one mutable borrow, so no other
    /// operation can interleave between them; callers running concurrent
    /// workflows serialise access behind a lock and get at most one
    /// ticket per spot.
    pub fn allocate(&mut self, vehicle_type: VehicleType) -> Option<DbId> {
        let spot = self
            .spots
            .values_mut()
            .find(|spot| spot.vehicle_type == vehicle_type && spot.available)?;
        spot.available = false;
        Some(spot.id)
    }

    /// All spots, in id order.
    pub fn spots(&self) -> impl Iterator<Item = &Spot> {
        self.spots.values()
    }

    /// Free and total spot counts for one vehicle type.
    pub fn availability(&self, vehicle_type: VehicleType) -> (usize, usize) {
        let mut free = 0;
        let mut total = 0;
        for spot in self
            .spots
            .values()
            .filter(|spot| spot.vehicle_type == vehicle_type)
        {
            total += 1;
            if spot.available {
                free += 1;
            }
        }
        (free, total)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn small_lot() -> SpotAllocator {
        SpotAllocator::new([
            Spot::new(1, VehicleType::Car, true),
            Spot::new(2, VehicleType::Car, true),
            Spot::new(3, VehicleType::Car, true),
            Spot::new(4, VehicleType::Bike, true),
            Spot::new(5, VehicleType::Bike, true),
        ])
    }

    #[test]
    fn find_returns_lowest_id_of_matching_type() {
        let allocator = small_lot();
        assert_eq!(allocator.find_available(VehicleType::Car), Some(1));
        assert_eq!(allocator.find_available(VehicleType::Bike), Some(4));
    }

    #[test]
    fn find_skips_occupied_spots() {
        let mut allocator = small_lot();
        allocator.assign(1).unwrap();
        assert_eq!(allocator.find_available(VehicleType::Car), Some(2));
    }

    #[test]
    fn single_spot_cycle() {
        // One car spot: find it, take it, see the lot full, free it,
        // find it again.
        let mut allocator = SpotAllocator::new([Spot::new(1, VehicleType::Car, true)]);

        assert_eq!(allocator.find_available(VehicleType::Car), Some(1));
        allocator.assign(1).unwrap();
        assert_eq!(allocator.find_available(VehicleType::Car), None);
        allocator.release(1).unwrap();
        assert_eq!(allocator.find_available(VehicleType::Car), Some(1));
    }

    #[test]
    fn assign_then_release_restores_availability() {
        let mut allocator = small_lot();
        let before: Vec<Spot> = allocator.spots().copied().collect();

        allocator.assign(2).unwrap();
        allocator.release(2).unwrap();

        let after: Vec<Spot> = allocator.spots().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn assign_unknown_spot_fails() {
        let mut allocator = small_lot();
        assert_matches!(allocator.assign(99).unwrap_err(), CoreError::UnknownSpot(99));
    }

    #[test]
    fn double_assign_fails_and_leaves_state_unchanged() {
        let mut allocator = small_lot();
        allocator.assign(1).unwrap();

        let err = allocator.assign(1).unwrap_err();
        assert_matches!(
            err,
            CoreError::SpotStateConflict { id: 1, state: "occupied" }
        );
        // Still occupied, and the other spots are untouched.
        assert_eq!(allocator.find_available(VehicleType::Car), Some(2));
    }

    #[test]
    fn release_free_spot_fails() {
        let mut allocator = small_lot();
        let err = allocator.release(1).unwrap_err();
        assert_matches!(err, CoreError::SpotStateConflict { id: 1, state: "free" });
        assert_eq!(allocator.find_available(VehicleType::Car), Some(1));
    }

    #[test]
    fn allocate_claims_lowest_id_atomically() {
        let mut allocator = small_lot();
        assert_eq!(allocator.allocate(VehicleType::Car), Some(1));
        assert_eq!(allocator.allocate(VehicleType::Car), Some(2));
        assert_eq!(allocator.allocate(VehicleType::Car), Some(3));
        assert_eq!(allocator.allocate(VehicleType::Car), None);
        // Bike spots are unaffected by car allocations.
        assert_eq!(allocator.allocate(VehicleType::Bike), Some(4));
    }

    #[test]
    fn availability_counts_free_and_total() {
        let mut allocator = small_lot();
        assert_eq!(allocator.availability(VehicleType::Car), (3, 3));
        allocator.assign(1).unwrap();
        allocator.assign(3).unwrap();
        assert_eq!(allocator.availability(VehicleType::Car), (1, 3));
        assert_eq!(allocator.availability(VehicleType::Bike), (2, 2));
    }
}
