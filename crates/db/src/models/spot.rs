//! Spot row model.

use sqlx::FromRow;

use parkside_core::error::CoreError;
use parkside_core::spot::Spot;
use parkside_core::types::DbId;

/// A row from the `parking_spots` table.
#[derive(Debug, Clone, FromRow)]
pub struct SpotRow {
    pub id: DbId,
    pub vehicle_type: String,
    pub available: bool,
}

impl SpotRow {
    /// Convert into the domain type, rejecting unknown vehicle types.
    pub fn into_spot(self) -> Result<Spot, CoreError> {
        Ok(Spot::new(self.id, self.vehicle_type.parse()?, self.available))
    }
}
