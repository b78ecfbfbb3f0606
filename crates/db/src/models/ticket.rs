//! Ticket row model and insert DTO.

use sqlx::FromRow;

use parkside_core::error::CoreError;
use parkside_core::ticket::Ticket;
use parkside_core::types::{DbId, Timestamp};

/// A row from the `tickets` table.
#[derive(Debug, Clone, FromRow)]
pub struct TicketRow {
    pub id: DbId,
    pub spot_id: DbId,
    pub vehicle_reg_number: String,
    pub vehicle_type: String,
    pub regular_customer: bool,
    pub in_time: Timestamp,
    pub out_time: Option<Timestamp>,
    pub price: Option<f64>,
}

impl TicketRow {
    /// Convert into the domain type, rejecting unknown vehicle types.
    pub fn into_ticket(self) -> Result<Ticket, CoreError> {
        Ok(Ticket {
            id: self.id,
            vehicle_reg_number: self.vehicle_reg_number,
            spot_id: self.spot_id,
            vehicle_type: self.vehicle_type.parse()?,
            regular_customer: self.regular_customer,
            in_time: self.in_time,
            out_time: self.out_time,
            price: self.price,
        })
    }
}

/// DTO for inserting a freshly opened ticket.
pub struct NewTicket {
    pub spot_id: DbId,
    pub vehicle_reg_number: String,
    pub vehicle_type: String,
    pub regular_customer: bool,
    pub in_time: Timestamp,
}
