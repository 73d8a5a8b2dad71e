pub mod bookings;
pub mod shows;

use axum::{routing::get, Router};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .route("/", get(|| async { "Show Booking API v1.0" }))
        .route("/health", get(|| async { "OK" }))
        .merge(shows::routes())
        .merge(bookings::routes())
}

/// `{"message": "..."}`, общий ответ для успешных операций и пустых выборок.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
