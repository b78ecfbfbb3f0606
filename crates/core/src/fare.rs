//! Fare policy: duration-based billing with a free initial period,
//! per-type hourly rates, and a recurring-customer reduction.

use crate::error::CoreError;
use crate::ticket::Ticket;
use crate::types::Timestamp;
use crate::vehicle::VehicleType;

// ---------------------------------------------------------------------------
// Rates
// ---------------------------------------------------------------------------

/// Hourly rate for cars, in currency units.
pub const CAR_RATE_PER_HOUR: f64 = 1.50;
/// Hourly rate for bikes, in currency units.
pub const BIKE_RATE_PER_HOUR: f64 = 1.00;
/// Initial window of a stay that is never billed, in hours.
pub const FREE_PERIOD_HOURS: f64 = 0.5;
/// Rate factor applied for recurring customers (5% reduction).
pub const REGULAR_CUSTOMER_FACTOR: f64 = 0.95;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

// ---------------------------------------------------------------------------
// Rate lookup
// ---------------------------------------------------------------------------

/// Hourly rate for a vehicle type.
///
/// The match is exhaustive over the closed enum; an out-of-set category
/// cannot reach this point because it is rejected where vehicle types
/// are parsed.
pub fn hourly_rate(vehicle_type: VehicleType) -> f64 {
    match vehicle_type {
        VehicleType::Car => CAR_RATE_PER_HOUR,
        VehicleType::Bike => BIKE_RATE_PER_HOUR,
    }
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Round to two decimals with arithmetic (half-up) rounding.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Price a completed stay described by an explicit interval.
///
/// Fails with [`CoreError::InvalidInterval`] when the exit time is
/// strictly earlier than the entry time; equal timestamps are a valid
/// zero-duration stay.
///
/// The first [`FREE_PERIOD_HOURS`] of the stay are never billed, so any
/// stay of thirty minutes or less prices at exactly zero for every
/// vehicle type. Longer stays scale linearly with no cap.
pub fn price_stay(
    vehicle_type: VehicleType,
    in_time: Timestamp,
    out_time: Timestamp,
    regular_customer: bool,
) -> Result<f64, CoreError> {
    if out_time < in_time {
        return Err(CoreError::InvalidInterval);
    }

    let duration_hours = (out_time - in_time).num_milliseconds() as f64 / MILLIS_PER_HOUR;
    let billable_hours = (duration_hours - FREE_PERIOD_HOURS).max(0.0);

    let raw = billable_hours * hourly_rate(vehicle_type);
    let mut price = round2(raw);

    // The reduction re-rounds the raw product; it is not applied to the
    // already-rounded base price. A zero price is never reduced further.
    if regular_customer && price > 0.0 {
        price = round2(raw * REGULAR_CUSTOMER_FACTOR);
    }

    Ok(price)
}

/// Price a completed stay recorded on a ticket.
///
/// Fails with [`CoreError::InvalidInterval`] when the ticket has no exit
/// time yet. Pure: the ticket is not mutated; the caller stores the
/// returned price alongside the exit time via [`Ticket::close`].
pub fn calculate_fare(ticket: &Ticket) -> Result<f64, CoreError> {
    let out_time = ticket.out_time.ok_or(CoreError::InvalidInterval)?;
    price_stay(
        ticket.vehicle_type,
        ticket.in_time,
        out_time,
        ticket.regular_customer,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
