use serde::{Deserialize, Serialize};

/// Lifecycle of a seat within a show. The only legal transition is
/// Available -> Booked; there is no cancellation path, so Booked is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
}

impl SeatStatus {
    pub fn is_available(self) -> bool {
        matches!(self, SeatStatus::Available)
    }
}
