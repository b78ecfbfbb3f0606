//! Shared helpers for API integration tests.
//!
//! Builds the full application router (the production middleware stack)
//! over an in-memory ticket store and a pinned clock, so tests exercise
//! the same code paths as the binary without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use parkside_api::config::ServerConfig;
use parkside_api::router::build_app_router;
use parkside_api::state::AppState;
use parkside_core::allocator::SpotAllocator;
use parkside_core::clock::Clock;
use parkside_core::error::CoreError;
use parkside_core::service::ParkingService;
use parkside_core::spot::Spot;
use parkside_core::store::TicketStore;
use parkside_core::ticket::Ticket;
use parkside_core::types::{DbId, Timestamp};
use parkside_core::vehicle::VehicleType;

// ---------------------------------------------------------------------------
// Fakes
// ---------------------------------------------------------------------------

/// In-memory `TicketStore` over a plain vector of tickets.
#[derive(Default)]
pub struct InMemoryTicketStore {
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    next_id: DbId,
    tickets: Vec<Ticket>,
}

#[async_trait]
impl TicketStore for InMemoryTicketStore {
    async fn save_ticket(&self, mut ticket: Ticket) -> Result<Ticket, CoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        ticket.id = inner.next_id;
        inner.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn get_open_ticket(
        &self,
        vehicle_reg_number: &str,
    ) -> Result<Option<Ticket>, CoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .tickets
            .iter()
            .rev()
            .find(|t| t.vehicle_reg_number == vehicle_reg_number && t.is_open())
            .cloned())
    }

    async fn update_ticket(&self, ticket: &Ticket) -> Result<(), CoreError> {
        let mut inner = self.inner.lock().unwrap();
        let stored = inner
            .tickets
            .iter_mut()
            .find(|t| t.id == ticket.id)
            .ok_or_else(|| CoreError::TicketNotFound(ticket.vehicle_reg_number.clone()))?;
        *stored = ticket.clone();
        Ok(())
    }

    async fn is_already_parked(&self, vehicle_reg_number: &str) -> Result<bool, CoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .tickets
            .iter()
            .any(|t| t.vehicle_reg_number == vehicle_reg_number && t.is_open()))
    }

    async fn is_regular_customer(&self, vehicle_reg_number: &str) -> Result<bool, CoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .tickets
            .iter()
            .any(|t| t.vehicle_reg_number == vehicle_reg_number && !t.is_open()))
    }

    async fn mark_spot(&self, _spot_id: DbId, _available: bool) -> Result<(), CoreError> {
        Ok(())
    }
}

/// Pinned clock the tests advance explicitly.
pub struct TestClock(Mutex<Timestamp>);

impl TestClock {
    pub fn starting_at(now: Timestamp) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.0.lock().unwrap();
        *now = *now + delta;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Timestamp {
        *self.0.lock().unwrap()
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Entry timestamp every test starts from.
pub fn start_time() -> Timestamp {
    Utc.with_ymd_and_hms(2026, 3, 14, 8, 0, 0).unwrap()
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// The facility layout used by tests: spots 1-3 for cars, 4-5 for bikes.
pub fn five_spot_lot() -> SpotAllocator {
    SpotAllocator::new([
        Spot::new(1, VehicleType::Car, true),
        Spot::new(2, VehicleType::Car, true),
        Spot::new(3, VehicleType::Car, true),
        Spot::new(4, VehicleType::Bike, true),
        Spot::new(5, VehicleType::Bike, true),
    ])
}

/// Build the full application router over in-memory fakes, returning
/// the clock handle so tests can move time forward between requests.
pub fn build_test_app() -> (Router, Arc<TestClock>) {
    let clock = Arc::new(TestClock::starting_at(start_time()));
    let store = Arc::new(InMemoryTicketStore::default());
    let service = Arc::new(ParkingService::new(five_spot_lot(), store, clock.clone()));

    let config = test_config();
    let state = AppState {
        service,
        config: Arc::new(config.clone()),
    };
    (build_app_router(state, &config), clock)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert an error response: status code plus the machine-readable
/// `code` field in the JSON body.
pub async fn assert_error(response: Response, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code);
}
