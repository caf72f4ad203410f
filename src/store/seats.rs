use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::error::ReservationError;
use crate::models::SeatStatus;

/// Seat map of a single show, guarded by its own mutex. The reservation
/// engine holds this lock for the whole validate-and-commit sequence, so
/// two requests contending for seats of the same show serialize here while
/// requests for different shows never meet.
///
/// BTreeMap keeps seat labels sorted, which is the order listings use.
pub type ShowSeats = Arc<Mutex<BTreeMap<String, SeatStatus>>>;

/// Per-show seat state for every show in the system. The outer RwLock only
/// protects the registry of shows; once a caller has the `ShowSeats` cell,
/// all reads and writes of seat status go through the per-show mutex.
pub struct SeatLedger {
    shows: RwLock<HashMap<i64, ShowSeats>>,
}

impl SeatLedger {
    pub fn new() -> Self {
        SeatLedger {
            shows: RwLock::new(HashMap::new()),
        }
    }

    /// Registers the seat layout of a new show, every seat available.
    /// Called by the bootstrap seeder only; the engine never creates seats.
    pub async fn create_show_seats(&self, show_id: i64, labels: impl IntoIterator<Item = String>) {
        let seats = labels
            .into_iter()
            .map(|label| (label, SeatStatus::Available))
            .collect();
        self.shows
            .write()
            .await
            .insert(show_id, Arc::new(Mutex::new(seats)));
    }

    /// Hands out the per-show cell. `None` means the show has no seats
    /// recorded at all, which callers treat as show-not-found.
    pub async fn show_cell(&self, show_id: i64) -> Option<ShowSeats> {
        self.shows.read().await.get(&show_id).cloned()
    }

    /// Snapshot of every seat's status for a show, sorted by label.
    pub async fn statuses(
        &self,
        show_id: i64,
    ) -> Result<BTreeMap<String, SeatStatus>, ReservationError> {
        let cell = self
            .show_cell(show_id)
            .await
            .ok_or(ReservationError::ShowNotFound)?;
        let seats = cell.lock().await;
        Ok(seats.clone())
    }
}

impl Default for SeatLedger {
    fn default() -> Self {
        Self::new()
    }
}
