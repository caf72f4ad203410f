use axum::{
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::ReservationError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/cinemas", get(list_cinemas))
        .route("/movies", get(list_movies))
        .route("/cinemas/{cinema_id}/shows", get(shows_for_cinema))
}

// GET /api/cinemas
async fn list_cinemas(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.list_cinemas().await)
}

// GET /api/movies
async fn list_movies(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.list_movies().await)
}

// GET /api/cinemas/{cinema_id}/shows
async fn shows_for_cinema(
    State(state): State<Arc<AppState>>,
    Path(cinema_id): Path<i64>,
) -> Result<impl IntoResponse, ReservationError> {
    let listings = state.catalog.shows_for_cinema(cinema_id).await?;
    Ok(Json(listings))
}
