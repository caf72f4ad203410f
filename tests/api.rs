//! HTTP-level tests: the full router driven through tower's oneshot.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use cinebook::{app, config::Config, AppState};

async fn test_app() -> Router {
    app(AppState::new(Config::default()).await)
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn index_lists_the_api_endpoints() {
    let router = test_app().await;
    let (status, body) = get(&router, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app"], "CineBook API v1.0");

    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.iter().any(|e| e["POST"] == "/api/book"));
    assert!(endpoints.iter().any(|e| e["GET"] == "/api/bookings"));
}

#[tokio::test]
async fn health_is_ok() {
    let router = test_app().await;
    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_is_seeded() {
    let router = test_app().await;

    let (status, cinemas) = get(&router, "/api/cinemas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cinemas.as_array().unwrap().len(), 3);

    let (status, movies) = get(&router, "/api/movies").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(movies.as_array().unwrap().len(), 3);

    let (status, shows) = get(&router, "/api/cinemas/1/shows").await;
    assert_eq!(status, StatusCode::OK);
    // 3 movies x 3 slots at this cinema, each with a joined movie title.
    let shows = shows.as_array().unwrap();
    assert_eq!(shows.len(), 9);
    assert!(shows.iter().all(|s| s["movie_title"].is_string()));

    let (status, _) = get(&router, "/api/cinemas/999/shows").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn seat_listing_shows_the_full_grid() {
    let router = test_app().await;
    let (status, body) = get(&router, "/api/shows/1/seats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["show_id"], 1);

    let seats = body["seats"].as_array().unwrap();
    assert_eq!(seats.len(), 30);
    assert_eq!(seats[0]["seat_label"], "A1");
    assert!(seats.iter().all(|s| s["status"] == "available"));

    let (status, _) = get(&router, "/api/shows/999/seats").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_round_trip() {
    let router = test_app().await;

    let (status, body) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 1, "customer_name": "Asha", "seats": ["A1", "A2"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["booking_id"], 1);
    assert_eq!(body["total_price"], 300);
    assert_eq!(body["seats"], json!(["A1", "A2"]));

    // The booked seats show up in the listing.
    let (_, seats) = get(&router, "/api/shows/1/seats").await;
    let booked: Vec<&str> = seats["seats"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|s| s["status"] == "booked")
        .map(|s| s["seat_label"].as_str().unwrap())
        .collect();
    assert_eq!(booked, ["A1", "A2"]);

    // And in the booking log, enriched with catalog context.
    let (status, bookings) = get(&router, "/api/bookings").await;
    assert_eq!(status, StatusCode::OK);
    let bookings = bookings.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["customer_name"], "Asha");
    assert_eq!(bookings[0]["movie_title"], "Flight of Fancy");
    assert_eq!(bookings[0]["cinema_name"], "Innovative Filmplex");
}

#[tokio::test]
async fn booking_errors_map_to_http_statuses() {
    let router = test_app().await;

    // Unknown show -> 404.
    let (status, body) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 999, "customer_name": "Asha", "seats": ["A1"]}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Show not found");

    // Duplicate label -> 400, seat untouched.
    let (status, _) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 1, "customer_name": "Ravi", "seats": ["A1", "A1"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown seat -> 400 naming the label.
    let (status, body) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 1, "customer_name": "Ravi", "seats": ["Z9"]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Seat Z9 does not exist");

    // Empty seat list -> 400.
    let (status, _) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 1, "customer_name": "Ravi", "seats": []}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Taking a seat twice -> 409 for the second caller.
    let (status, _) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 1, "customer_name": "Asha", "seats": ["B1"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = post_json(
        &router,
        "/api/book",
        json!({"show_id": 1, "customer_name": "Ravi", "seats": ["B1", "B2"]}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Seat B1 is already booked");

    // The losing request must not have touched B2.
    let (_, seats) = get(&router, "/api/shows/1/seats").await;
    let b2 = seats["seats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["seat_label"] == "B2")
        .unwrap();
    assert_eq!(b2["status"], "available");
}
