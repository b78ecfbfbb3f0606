//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` struct matching the database row
//! and a conversion into the corresponding `parkside-core` domain type.
//! Conversions are fallible where the row carries free text the domain
//! constrains (the vehicle type column).

pub mod spot;
pub mod ticket;
