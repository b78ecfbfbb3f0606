//! Parking session record.

use crate::types::{DbId, Timestamp};
use crate::vehicle::VehicleType;

/// The record of one parking session for one vehicle, from entry to exit
/// and billing.
///
/// A ticket is opened at entry with `out_time` and `price` absent. Both
/// are set together by [`Ticket::close`] during the exit transaction, so
/// the half-updated state (an exit time without a price, or the reverse)
/// is never observable outside it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Ticket {
    /// Store-assigned identifier; `0` until the ticket has been saved.
    pub id: DbId,
    pub vehicle_reg_number: String,
    /// Identifier of the assigned spot. The ticket references the spot,
    /// it does not own the mutable spot itself.
    pub spot_id: DbId,
    pub vehicle_type: VehicleType,
    /// Recurring-customer flag, resolved from the store at entry time.
    pub regular_customer: bool,
    pub in_time: Timestamp,
    pub out_time: Option<Timestamp>,
    pub price: Option<f64>,
}

impl Ticket {
    /// Open a new ticket at entry time.
    pub fn open(
        vehicle_reg_number: impl Into<String>,
        spot_id: DbId,
        vehicle_type: VehicleType,
        regular_customer: bool,
        in_time: Timestamp,
    ) -> Self {
        Self {
            id: 0,
            vehicle_reg_number: vehicle_reg_number.into(),
            spot_id,
            vehicle_type,
            regular_customer,
            in_time,
            out_time: None,
            price: None,
        }
    }

    /// Whether the vehicle is still parked.
    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Close the ticket: record the exit time and the computed price as
    /// one transition.
    pub fn close(&mut self, out_time: Timestamp, price: f64) {
        self.out_time = Some(out_time);
        self.price = Some(price);
    }
}
