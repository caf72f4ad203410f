pub mod config;
pub mod controllers;
pub mod engine;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use engine::ReservationEngine;
use store::{BookingStore, Catalog, SeatLedger};

// Shared state for the whole application.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub engine: ReservationEngine,
    pub config: config::Config,
}

impl AppState {
    /// Builds the stores, seeds the sample programme and wires the engine.
    /// The process entry point owns the result; nothing here is global.
    pub async fn new(config: config::Config) -> Arc<Self> {
        let catalog = Arc::new(Catalog::new());
        let seats = Arc::new(SeatLedger::new());
        let bookings = Arc::new(BookingStore::new());

        seed::seed_sample_data(&catalog, &seats, &config.hall).await;

        let engine = ReservationEngine::new(catalog.clone(), seats, bookings);
        Arc::new(AppState {
            catalog,
            engine,
            config,
        })
    }
}

// GET / - name of the service plus a directory of the API surface.
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "app": "CineBook API v1.0",
        "endpoints": [
            {"GET": "/api/cinemas"},
            {"GET": "/api/movies"},
            {"GET": "/api/cinemas/{cinema_id}/shows"},
            {"GET": "/api/shows/{show_id}/seats"},
            {"POST": "/api/book"},
            {"GET": "/api/bookings"}
        ]
    }))
}

/// The full application router: endpoint directory and health at the root,
/// the API mounted under /api, request tracing and permissive CORS on
/// everything.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", controllers::routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
