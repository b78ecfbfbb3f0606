//! `TicketStore` implementation over PostgreSQL.

use async_trait::async_trait;

use parkside_core::error::CoreError;
use parkside_core::spot::Spot;
use parkside_core::store::TicketStore;
use parkside_core::ticket::Ticket;
use parkside_core::types::DbId;

use crate::models::ticket::NewTicket;
use crate::repositories::{SpotRepo, TicketRepo};
use crate::DbPool;

/// Store backed by the `tickets` and `parking_spots` tables.
pub struct PgTicketStore {
    pool: DbPool,
}

impl PgTicketStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Load the full spot table for seeding the in-memory allocator.
pub async fn load_spots(pool: &DbPool) -> Result<Vec<Spot>, CoreError> {
    let rows = SpotRepo::list_all(pool).await.map_err(storage_err)?;
    rows.into_iter().map(|row| row.into_spot()).collect()
}

/// Map a database failure into the storage error the workflow expects.
fn storage_err(err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, "Database error");
    CoreError::Storage(err.to_string())
}

#[async_trait]
impl TicketStore for PgTicketStore {
    async fn save_ticket(&self, ticket: Ticket) -> Result<Ticket, CoreError> {
        let input = NewTicket {
            spot_id: ticket.spot_id,
            vehicle_reg_number: ticket.vehicle_reg_number.clone(),
            vehicle_type: ticket.vehicle_type.as_str().to_string(),
            regular_customer: ticket.regular_customer,
            in_time: ticket.in_time,
        };
        let row = TicketRepo::create(&self.pool, &input)
            .await
            .map_err(storage_err)?;
        row.into_ticket()
    }

    async fn get_open_ticket(
        &self,
        vehicle_reg_number: &str,
    ) -> Result<Option<Ticket>, CoreError> {
        match TicketRepo::find_open_by_reg(&self.pool, vehicle_reg_number)
            .await
            .map_err(storage_err)?
        {
            Some(row) => Ok(Some(row.into_ticket()?)),
            None => Ok(None),
        }
    }

    async fn update_ticket(&self, ticket: &Ticket) -> Result<(), CoreError> {
        // The closed pair must be written together.
        let (out_time, price) = match (ticket.out_time, ticket.price) {
            (Some(out_time), Some(price)) => (out_time, price),
            _ => return Err(CoreError::InvalidInterval),
        };
        let updated = TicketRepo::close(&self.pool, ticket.id, out_time, price)
            .await
            .map_err(storage_err)?;
        if !updated {
            return Err(CoreError::TicketNotFound(ticket.vehicle_reg_number.clone()));
        }
        Ok(())
    }

    async fn is_already_parked(&self, vehicle_reg_number: &str) -> Result<bool, CoreError> {
        TicketRepo::has_open_ticket(&self.pool, vehicle_reg_number)
            .await
            .map_err(storage_err)
    }

    async fn is_regular_customer(&self, vehicle_reg_number: &str) -> Result<bool, CoreError> {
        TicketRepo::has_completed_stay(&self.pool, vehicle_reg_number)
            .await
            .map_err(storage_err)
    }

    async fn mark_spot(&self, spot_id: DbId, available: bool) -> Result<(), CoreError> {
        SpotRepo::set_available(&self.pool, spot_id, available)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}
