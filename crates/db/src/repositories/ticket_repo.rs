//! Repository for the `tickets` table.

use sqlx::PgPool;

use parkside_core::types::{DbId, Timestamp};

use crate::models::ticket::{NewTicket, TicketRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, spot_id, vehicle_reg_number, vehicle_type, regular_customer, \
                       in_time, out_time, price";

/// Persistence for parking session tickets.
pub struct TicketRepo;

impl TicketRepo {
    /// Insert an open ticket, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewTicket) -> Result<TicketRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO tickets (spot_id, vehicle_reg_number, vehicle_type, regular_customer, in_time)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(input.spot_id)
            .bind(&input.vehicle_reg_number)
            .bind(&input.vehicle_type)
            .bind(input.regular_customer)
            .bind(input.in_time)
            .fetch_one(pool)
            .await
    }

    /// Most recent open ticket for a registration, if any.
    pub async fn find_open_by_reg(
        pool: &PgPool,
        vehicle_reg_number: &str,
    ) -> Result<Option<TicketRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets
             WHERE vehicle_reg_number = $1 AND out_time IS NULL
             ORDER BY in_time DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, TicketRow>(&query)
            .bind(vehicle_reg_number)
            .fetch_optional(pool)
            .await
    }

    /// Close a ticket: set exit time and price in one UPDATE, never one
    /// without the other. Returns `true` if a row changed.
    pub async fn close(
        pool: &PgPool,
        id: DbId,
        out_time: Timestamp,
        price: f64,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tickets SET out_time = $2, price = $3 WHERE id = $1 AND out_time IS NULL",
        )
        .bind(id)
        .bind(out_time)
        .bind(price)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether an open ticket exists for the registration.
    pub async fn has_open_ticket(
        pool: &PgPool,
        vehicle_reg_number: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM tickets
                 WHERE vehicle_reg_number = $1 AND out_time IS NULL
             )",
        )
        .bind(vehicle_reg_number)
        .fetch_one(pool)
        .await
    }

    /// Whether the registration has at least one completed stay, which
    /// is what qualifies it for the recurring-customer reduction.
    pub async fn has_completed_stay(
        pool: &PgPool,
        vehicle_reg_number: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                 SELECT 1 FROM tickets
                 WHERE vehicle_reg_number = $1 AND out_time IS NOT NULL
             )",
        )
        .bind(vehicle_reg_number)
        .fetch_one(pool)
        .await
    }
}
