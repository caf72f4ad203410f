use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde_json::json;
use thiserror::Error;

/// Everything a reservation attempt can fail with. All variants are
/// recoverable at the request boundary; none of them leave partial state
/// behind in the ledger or the booking log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationError {
    /// Malformed request: empty seat list, duplicate labels, blank customer.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Show not found")]
    ShowNotFound,

    #[error("Cinema not found")]
    CinemaNotFound,

    /// The label is not part of the show's seat layout.
    #[error("Seat {0} does not exist")]
    InvalidSeat(String),

    /// The seat was taken first, often by a concurrent request. Expected
    /// under contention; the caller picks different seats.
    #[error("Seat {0} is already booked")]
    SeatTaken(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ReservationError {
    pub fn status(&self) -> StatusCode {
        match self {
            ReservationError::InvalidInput(_) | ReservationError::InvalidSeat(_) => {
                StatusCode::BAD_REQUEST
            }
            ReservationError::ShowNotFound | ReservationError::CinemaNotFound => {
                StatusCode::NOT_FOUND
            }
            ReservationError::SeatTaken(_) => StatusCode::CONFLICT,
            ReservationError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ReservationError {
    fn into_response(self) -> Response {
        if let ReservationError::Storage(ref detail) = self {
            tracing::error!("storage failure: {}", detail);
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
