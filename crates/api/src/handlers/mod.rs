//! Request handlers.
//!
//! Handlers delegate to the workflow service in `parkside_core` and map
//! errors via [`crate::error::AppError`].

pub mod parking;
