use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled screening. Immutable after seeding; the price is an integer
/// in minor currency units and applies flat to every seat of the show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: i64,
    pub cinema_id: i64,
    pub movie_id: i64,
    pub show_time: NaiveDateTime,
    pub screen: String,
    pub price: i64,
}
