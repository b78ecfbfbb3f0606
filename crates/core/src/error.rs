use crate::types::DbId;
use crate::vehicle::VehicleType;

/// Domain error taxonomy shared by the fare calculator, the spot
/// allocator, and the parking workflow.
///
/// Every failure surfaces synchronously to the caller; no operation
/// retries or leaves partial state behind (a failed fare calculation
/// stores no price, a failed assign leaves the spot's flag untouched).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Exit timestamp missing, or strictly earlier than the entry timestamp.
    #[error("Invalid parking interval: exit time missing or earlier than entry time")]
    InvalidInterval,

    /// A vehicle type outside the closed set reached a parse boundary.
    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    /// No free spot of the requested type. The lot being full is a
    /// business outcome, distinct from any storage failure.
    #[error("No {0} spot available")]
    SpotUnavailable(VehicleType),

    /// Assign or release hit a spot already in the target state.
    #[error("Spot {id} is already {state}")]
    SpotStateConflict { id: DbId, state: &'static str },

    /// Spot identifier not present in the allocator's table.
    #[error("Unknown spot: {0}")]
    UnknownSpot(DbId),

    /// The registration already has an open ticket.
    #[error("Vehicle {0} is already parked")]
    AlreadyParked(String),

    /// No open ticket for the registration.
    #[error("No active ticket for vehicle {0}")]
    TicketNotFound(String),

    /// The backing store failed.
    #[error("Storage error: {0}")]
    Storage(String),
}
