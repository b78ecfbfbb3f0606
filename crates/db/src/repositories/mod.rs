//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod spot_repo;
pub mod ticket_repo;

pub use spot_repo::SpotRepo;
pub use ticket_repo::TicketRepo;
