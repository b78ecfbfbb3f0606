//! Domain core for the parking facility service.
//!
//! Business rules (fare policy, spot allocation, ticket lifecycle) plus
//! the capability traits the entry/exit workflow depends on
//! ([`store::TicketStore`], [`clock::Clock`]). No database or HTTP
//! dependencies live here; those belong to `parkside-db` and
//! `parkside-api`.

pub mod allocator;
pub mod clock;
pub mod error;
pub mod fare;
pub mod service;
pub mod spot;
pub mod store;
pub mod ticket;
pub mod types;
pub mod vehicle;

pub use error::CoreError;
