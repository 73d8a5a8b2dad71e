pub mod config;
pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::LedgerError;
use crate::services::BookingLedger;

// Shared state для всего приложения
pub struct AppState {
    pub ledger: BookingLedger,
    pub config: config::Config,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, LedgerError> {
        let ledger = BookingLedger::new(config.shows.iter().copied())?;
        Ok(Arc::new(Self { ledger, config }))
    }
}

/// Router со всеми маршрутами, трассировкой и (если включено) CORS.
pub fn build_router(state: Arc<AppState>) -> Router {
    let enable_cors = state.config.features.enable_cors;

    let app = controllers::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
