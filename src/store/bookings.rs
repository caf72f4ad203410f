use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::ReservationError;
use crate::models::{Booking, NewBooking};

/// Append-only log of completed bookings. Ids are assigned sequentially
/// under the write lock, so they are monotonic in append order. Nothing in
/// the system updates or deletes a booking once it is in here.
pub struct BookingStore {
    log: RwLock<Vec<Booking>>,
    #[cfg(test)]
    fail_next_append: std::sync::atomic::AtomicBool,
}

impl BookingStore {
    pub fn new() -> Self {
        BookingStore {
            log: RwLock::new(Vec::new()),
            #[cfg(test)]
            fail_next_append: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Appends a booking, assigning the next id and the commit timestamp.
    pub async fn append(&self, new: NewBooking) -> Result<Booking, ReservationError> {
        #[cfg(test)]
        if self
            .fail_next_append
            .swap(false, std::sync::atomic::Ordering::SeqCst)
        {
            return Err(ReservationError::Storage("booking log unavailable".into()));
        }

        let mut log = self.log.write().await;
        let booking = Booking {
            id: log.len() as i64 + 1,
            show_id: new.show_id,
            customer_name: new.customer_name,
            seats: new.seats,
            total_price: new.total_price,
            created_at: Utc::now().naive_utc(),
        };
        log.push(booking.clone());
        Ok(booking)
    }

    /// All bookings, most recent first.
    pub async fn list_all(&self) -> Vec<Booking> {
        let log = self.log.read().await;
        log.iter().rev().cloned().collect()
    }

    /// Makes the next append fail, to exercise the engine's rollback path.
    #[cfg(test)]
    pub fn fail_next_append(&self) {
        self.fail_next_append
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
