//! Handlers for the `/parking` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use parkside_core::ticket::Ticket;
use parkside_core::vehicle::VehicleType;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for vehicle entry.
///
/// The vehicle type arrives as free text and is parsed against the
/// closed set, so an out-of-set value maps to the unknown-vehicle-type
/// error rather than a generic deserialization failure.
#[derive(Debug, Deserialize, Validate)]
pub struct EntryRequest {
    pub vehicle_type: String,
    #[validate(length(min = 1, max = 20))]
    pub vehicle_reg_number: String,
}

/// POST /api/v1/parking/entry
pub async fn entry(
    State(state): State<AppState>,
    Json(input): Json<EntryRequest>,
) -> AppResult<(StatusCode, Json<Ticket>)> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;
    let vehicle_type: VehicleType = input.vehicle_type.parse()?;

    let ticket = state
        .service
        .park_vehicle(vehicle_type, &input.vehicle_reg_number)
        .await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Request body for vehicle exit.
#[derive(Debug, Deserialize, Validate)]
pub struct ExitRequest {
    #[validate(length(min = 1, max = 20))]
    pub vehicle_reg_number: String,
}

/// POST /api/v1/parking/exit
pub async fn exit(
    State(state): State<AppState>,
    Json(input): Json<ExitRequest>,
) -> AppResult<Json<Ticket>> {
    input
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let ticket = state.service.exit_vehicle(&input.vehicle_reg_number).await?;
    Ok(Json(ticket))
}

/// Query parameters for the spot availability endpoint.
#[derive(Debug, Deserialize)]
pub struct SpotsQuery {
    /// Restrict the summary to one vehicle type.
    pub vehicle_type: Option<String>,
}

/// Free/total spot counts for one vehicle type.
#[derive(Debug, Serialize)]
pub struct SpotAvailability {
    pub vehicle_type: VehicleType,
    pub free: usize,
    pub total: usize,
}

/// GET /api/v1/parking/spots
pub async fn spots(
    State(state): State<AppState>,
    Query(query): Query<SpotsQuery>,
) -> AppResult<Json<Vec<SpotAvailability>>> {
    let filter = match &query.vehicle_type {
        Some(raw) => Some(raw.parse::<VehicleType>()?),
        None => None,
    };

    let mut summary = Vec::new();
    for vehicle_type in VehicleType::ALL {
        if filter.is_none_or(|wanted| wanted == vehicle_type) {
            let (free, total) = state.service.availability(vehicle_type).await;
            summary.push(SpotAvailability {
                vehicle_type,
                free,
                total,
            });
        }
    }
    Ok(Json(summary))
}
