//! Repository for the `parking_spots` table.

use sqlx::PgPool;

use parkside_core::types::DbId;

use crate::models::spot::SpotRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, vehicle_type, available";

/// Persistence for the facility's spot table.
pub struct SpotRepo;

impl SpotRepo {
    /// All spots, in id order. Used to seed the in-memory allocator at
    /// startup.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<SpotRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parking_spots ORDER BY id");
        sqlx::query_as::<_, SpotRow>(&query).fetch_all(pool).await
    }

    /// Set a spot's availability flag. Returns `true` if the row changed.
    pub async fn set_available(
        pool: &PgPool,
        id: DbId,
        available: bool,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE parking_spots SET available = $2 WHERE id = $1 AND available <> $2")
                .bind(id)
                .bind(available)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
