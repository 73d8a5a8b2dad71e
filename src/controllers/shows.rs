use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::MessageResponse;
use crate::error::{ApiError, ShowNotFound};
use crate::models::{ShowId, ShowStatus};
use crate::AppState;

pub const NO_AVAILABLE_SHOWS: &str = "No next available shows at the moment";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/show/{show_number}", get(get_show_status))
        .route("/shows/{show_number}/seats", get(get_booked_seats))
        .route("/nextAvailableShows", get(list_available_shows))
        .route("/nextAvailableShow", get(next_available_show))
}

// Невалидный идентификатор в пути - тот же 404, что и неизвестный показ
fn parse_show(raw: &str) -> Result<ShowId, ShowNotFound> {
    raw.parse().map_err(|_| ShowNotFound)
}

// GET /show/{show_number}
async fn get_show_status(
    State(state): State<Arc<AppState>>,
    Path(show_number): Path<String>,
) -> Result<Json<ShowStatus>, ApiError> {
    let show = parse_show(&show_number)?;
    Ok(Json(state.ledger.status(show)?))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BookedSeatsResponse {
    show: ShowId,
    booked_seats: Vec<String>,
}

// GET /shows/{show_number}/seats
async fn get_booked_seats(
    State(state): State<Arc<AppState>>,
    Path(show_number): Path<String>,
) -> Result<Json<BookedSeatsResponse>, ApiError> {
    let show = parse_show(&show_number)?;
    let booked_seats = state.ledger.booked_seats(show)?;
    Ok(Json(BookedSeatsResponse { show, booked_seats }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AvailableShowsResponse {
    available_shows: Vec<ShowId>,
}

// GET /nextAvailableShows
async fn list_available_shows(State(state): State<Arc<AppState>>) -> Response {
    let available_shows = state.ledger.available_shows();
    if available_shows.is_empty() {
        return Json(MessageResponse::new(NO_AVAILABLE_SHOWS)).into_response();
    }
    Json(AvailableShowsResponse { available_shows }).into_response()
}

#[derive(Debug, Serialize)]
struct NextShowResponse {
    show: ShowId,
}

// GET /nextAvailableShow
async fn next_available_show(State(state): State<Arc<AppState>>) -> Response {
    match state.ledger.next_available_show() {
        Some(show) => Json(NextShowResponse { show }).into_response(),
        None => Json(MessageResponse::new(NO_AVAILABLE_SHOWS)).into_response(),
    }
}
