use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ReservationError;
use crate::models::SeatStatus;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows/{show_id}/seats", get(seats_for_show))
        .route("/book", post(book_seats))
        .route("/bookings", get(list_bookings))
}

/* ---------- SEATS ---------- */

#[derive(Debug, Serialize)]
struct SeatEntry {
    seat_label: String,
    status: SeatStatus,
}

#[derive(Debug, Serialize)]
struct SeatsResponse {
    show_id: i64,
    seats: Vec<SeatEntry>,
}

// GET /api/shows/{show_id}/seats
async fn seats_for_show(
    State(state): State<Arc<AppState>>,
    Path(show_id): Path<i64>,
) -> Result<impl IntoResponse, ReservationError> {
    let statuses = state.engine.seat_statuses(show_id).await?;
    let seats = statuses
        .into_iter()
        .map(|(seat_label, status)| SeatEntry { seat_label, status })
        .collect();
    Ok(Json(SeatsResponse { show_id, seats }))
}

/* ---------- BOOKING ---------- */

#[derive(Debug, Deserialize)]
struct BookRequest {
    show_id: i64,
    customer_name: String,
    seats: Vec<String>,
}

#[derive(Debug, Serialize)]
struct BookResponse {
    booking_id: i64,
    show_id: i64,
    seats: Vec<String>,
    total_price: i64,
}

// POST /api/book
async fn book_seats(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookRequest>,
) -> Result<impl IntoResponse, ReservationError> {
    let booking = state
        .engine
        .reserve(req.show_id, &req.customer_name, &req.seats)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            booking_id: booking.id,
            show_id: booking.show_id,
            seats: booking.seats,
            total_price: booking.total_price,
        }),
    ))
}

/* ---------- BOOKING LIST ---------- */

#[derive(Debug, Serialize)]
struct BookingEntry {
    id: i64,
    show_id: i64,
    customer_name: String,
    seats: Vec<String>,
    total_price: i64,
    created_at: NaiveDateTime,
    movie_title: String,
    cinema_name: String,
}

// GET /api/bookings
async fn list_bookings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let bookings = state.engine.bookings().await;
    let mut entries = Vec::with_capacity(bookings.len());
    for b in bookings {
        let (movie_title, cinema_name) = state
            .catalog
            .show_context(b.show_id)
            .await
            .unwrap_or_default();
        entries.push(BookingEntry {
            id: b.id,
            show_id: b.show_id,
            customer_name: b.customer_name,
            seats: b.seats,
            total_price: b.total_price,
            created_at: b.created_at,
            movie_title,
            cinema_name,
        });
    }
    Json(entries)
}
