use std::sync::Arc;

use parkside_core::service::ParkingService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Entry/exit workflow over the allocator, store, and clock.
    pub service: Arc<ParkingService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
