use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tracing::debug;

use super::MessageResponse;
use crate::error::{ApiError, BookingError, CancelError};
use crate::middleware::SeatRequest;
use crate::models::ShowId;
use crate::AppState;

pub const CANCELED_MESSAGE: &str = "Ticket canceled successfully";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/book", post(book_seat))
        .route("/cancel", post(cancel_seat))
}

// POST /book
async fn book_seat(
    State(state): State<Arc<AppState>>,
    req: SeatRequest,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = req
        .fields()
        .ok_or(BookingError::MissingField)
        .and_then(|(show, seat)| {
            let show: ShowId = show.parse().map_err(|_| BookingError::UnknownShow)?;
            state.ledger.book(show, seat)
        });

    match result {
        Ok(booking) => Ok(Json(MessageResponse::new(booking.to_string()))),
        Err(e) => {
            debug!(error = %e, show = ?req.show, seat = ?req.seat, "Booking rejected");
            Err(e.into())
        }
    }
}

// POST /cancel
async fn cancel_seat(
    State(state): State<Arc<AppState>>,
    req: SeatRequest,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = req
        .fields()
        .ok_or(CancelError::MissingField)
        .and_then(|(show, seat)| {
            let show: ShowId = show.parse().map_err(|_| CancelError::UnknownShow)?;
            state.ledger.cancel(show, seat)
        });

    match result {
        Ok(()) => Ok(Json(MessageResponse::new(CANCELED_MESSAGE))),
        Err(e) => {
            debug!(error = %e, show = ?req.show, seat = ?req.seat, "Cancellation rejected");
            Err(e.into())
        }
    }
}
