use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use parkside_api::config::ServerConfig;
use parkside_api::router::build_app_router;
use parkside_api::state::AppState;
use parkside_core::allocator::SpotAllocator;
use parkside_core::clock::SystemClock;
use parkside_core::service::ParkingService;
use parkside_db::store::{load_spots, PgTicketStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parkside_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = parkside_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    parkside_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    parkside_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Spot table ---
    let spots = load_spots(&pool).await.context("Failed to load parking spots")?;
    tracing::info!(count = spots.len(), "Loaded parking spots");

    // --- Workflow service ---
    let allocator = SpotAllocator::new(spots);
    let store = Arc::new(PgTicketStore::new(pool));
    let service = Arc::new(ParkingService::new(allocator, store, Arc::new(SystemClock)));

    // --- Router ---
    let state = AppState {
        service,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("Invalid bind address")?;
    tracing::info!(%addr, "Starting parking service");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
