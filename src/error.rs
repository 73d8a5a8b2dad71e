use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ShowId;

/// Отказы при бронировании, в порядке проверки.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Missing show or seat information")]
    MissingField,
    #[error("Invalid show number")]
    UnknownShow,
    #[error("Invalid seat format for Show {show}. Please provide a valid seat number or label.")]
    InvalidFormat { show: ShowId },
    #[error("Invalid seat number for Show {show}. Choose a seat between 1 and {capacity}.")]
    SeatNumberOutOfRange { show: ShowId, capacity: u32 },
    #[error("Invalid seat label for Show {show}. Choose a valid seat label between A1 and {top_row}99.")]
    SeatLabelOutOfRange { show: ShowId, top_row: char },
    #[error("Seat {seat} is already booked for Show {show}.")]
    AlreadyBooked { show: ShowId, seat: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CancelError {
    #[error("Missing show or seat information")]
    MissingField,
    #[error("Invalid show number")]
    UnknownShow,
    #[error("Seat not found or already canceled")]
    SeatNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Show not found")]
pub struct ShowNotFound;

/// Ошибки сборки реестра показов при старте.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("show {0} is registered more than once")]
    DuplicateShow(ShowId),
    #[error("show {0} must have a positive seat capacity")]
    ZeroCapacity(ShowId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{var} must be a valid number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("SHOWS entry {0:?} must look like <show>:<capacity>")]
    InvalidShowEntry(String),
    #[error("SHOWS must list at least one show")]
    NoShows,
}

/// Everything a handler can answer with besides success. Rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Booking(#[from] BookingError),
    #[error(transparent)]
    Cancel(#[from] CancelError),
    #[error(transparent)]
    ShowNotFound(#[from] ShowNotFound),
    #[error("Invalid JSON body")]
    InvalidBody,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ShowNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Booking(_) | ApiError::Cancel(_) | ApiError::InvalidBody => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_messages_name_show_and_seat() {
        let show = ShowId::new(1);
        assert_eq!(
            BookingError::InvalidFormat { show }.to_string(),
            "Invalid seat format for Show 1. Please provide a valid seat number or label."
        );
        assert_eq!(
            BookingError::SeatNumberOutOfRange { show, capacity: 45 }.to_string(),
            "Invalid seat number for Show 1. Choose a seat between 1 and 45."
        );
        assert_eq!(
            BookingError::SeatLabelOutOfRange { show, top_row: 'm' }.to_string(),
            "Invalid seat label for Show 1. Choose a valid seat label between A1 and m99."
        );
        assert_eq!(
            BookingError::AlreadyBooked { show, seat: "A1".into() }.to_string(),
            "Seat A1 is already booked for Show 1."
        );
    }

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::from(ShowNotFound).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::from(BookingError::UnknownShow).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::from(CancelError::SeatNotFound).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
    }
}
