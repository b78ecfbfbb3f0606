//! Persistence capability consumed by the parking workflow.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::ticket::Ticket;
use crate::types::DbId;

/// Abstract ticket and spot store.
///
/// The workflow treats these as fallible remote calls: failures surface
/// as [`CoreError::Storage`] and are never retried here. Implementations
/// live outside the core (PostgreSQL in `parkside-db`, in-memory fakes
/// in tests).
#[async_trait]
pub trait TicketStore: Send + Sync {
    /// Persist a freshly opened ticket, returning it with its
    /// store-assigned identifier.
    async fn save_ticket(&self, ticket: Ticket) -> Result<Ticket, CoreError>;

    /// Most recent open ticket for a registration, if any.
    async fn get_open_ticket(&self, vehicle_reg_number: &str)
        -> Result<Option<Ticket>, CoreError>;

    /// Persist a closed ticket (exit time and price set).
    async fn update_ticket(&self, ticket: &Ticket) -> Result<(), CoreError>;

    /// Whether the registration currently has an open ticket.
    async fn is_already_parked(&self, vehicle_reg_number: &str) -> Result<bool, CoreError>;

    /// Whether the registration qualifies for the recurring-customer
    /// reduction.
    async fn is_regular_customer(&self, vehicle_reg_number: &str) -> Result<bool, CoreError>;

    /// Persist a spot's availability flag.
    async fn mark_spot(&self, spot_id: DbId, available: bool) -> Result<(), CoreError>;
}
