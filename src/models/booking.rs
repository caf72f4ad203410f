use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A completed reservation. Created only by the reservation engine's commit
/// step and never mutated afterwards. `seats` keeps the labels in the order
/// the customer requested them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub show_id: i64,
    pub customer_name: String,
    pub seats: Vec<String>,
    pub total_price: i64,
    pub created_at: NaiveDateTime,
}

/// Booking data before the store assigns an id and timestamp.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub show_id: i64,
    pub customer_name: String,
    pub seats: Vec<String>,
    pub total_price: i64,
}
