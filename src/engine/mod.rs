use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::ReservationError;
use crate::models::{Booking, NewBooking, SeatStatus};
use crate::store::{BookingStore, Catalog, SeatLedger};

/// The reservation engine: validates a requested set of seats against the
/// current ledger state and commits the whole batch as one atomic unit.
///
/// Atomicity comes from the ledger's per-show mutex. `reserve` takes that
/// lock before re-validating seat existence and availability and releases it
/// only after the seats are flipped and the booking is appended (or rolled
/// back), so among concurrent requests contending for a seat exactly one can
/// win and every loser observes the seat as already booked.
pub struct ReservationEngine {
    catalog: Arc<Catalog>,
    seats: Arc<SeatLedger>,
    bookings: Arc<BookingStore>,
}

impl ReservationEngine {
    pub fn new(catalog: Arc<Catalog>, seats: Arc<SeatLedger>, bookings: Arc<BookingStore>) -> Self {
        ReservationEngine {
            catalog,
            seats,
            bookings,
        }
    }

    /// Books `seat_labels` of `show_id` for `customer_name`.
    ///
    /// Validation order is fixed so error responses are deterministic:
    /// malformed input, then unknown show, then unknown seat label, then
    /// seat already booked. On any failure the ledger and the booking log
    /// are left exactly as they were.
    pub async fn reserve(
        &self,
        show_id: i64,
        customer_name: &str,
        seat_labels: &[String],
    ) -> Result<Booking, ReservationError> {
        // 1. Malformed input: empty list, duplicate labels, blank customer.
        let customer = customer_name.trim();
        if customer.is_empty() {
            return Err(ReservationError::InvalidInput(
                "Customer name must not be empty".to_string(),
            ));
        }
        if seat_labels.is_empty() {
            return Err(ReservationError::InvalidInput(
                "Seats must be a non-empty list like [\"A1\",\"A2\"]".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for label in seat_labels {
            if !seen.insert(label.as_str()) {
                return Err(ReservationError::InvalidInput(format!(
                    "Seat {label} requested more than once"
                )));
            }
        }

        // 2. The show must exist. Shows are immutable after seeding, so the
        // price read here cannot go stale while we wait for the seat lock.
        let price = self
            .catalog
            .show_price(show_id)
            .await
            .ok_or(ReservationError::ShowNotFound)?;
        let cell = self
            .seats
            .show_cell(show_id)
            .await
            .ok_or(ReservationError::ShowNotFound)?;

        // 3-5. Everything from re-validation to commit happens under the
        // show's mutex. Pre-lock reads cannot be trusted: another request
        // may have booked any of these seats in the meantime.
        let mut seats = cell.lock().await;

        for label in seat_labels {
            if !seats.contains_key(label) {
                return Err(ReservationError::InvalidSeat(label.clone()));
            }
        }
        for label in seat_labels {
            if !seats[label].is_available() {
                debug!(show_id, seat = %label, "reservation lost the seat");
                return Err(ReservationError::SeatTaken(label.clone()));
            }
        }

        for label in seat_labels {
            seats.insert(label.clone(), SeatStatus::Booked);
        }

        let total_price = price * seat_labels.len() as i64;
        let appended = self
            .bookings
            .append(NewBooking {
                show_id,
                customer_name: customer.to_string(),
                seats: seat_labels.to_vec(),
                total_price,
            })
            .await;

        match appended {
            Ok(booking) => {
                info!(
                    booking_id = booking.id,
                    show_id,
                    seats = seat_labels.len(),
                    total_price,
                    "booking committed"
                );
                Ok(booking)
            }
            Err(err) => {
                // The booking log rejected the record; the flips above must
                // not survive it. The lock is still held, so nobody can
                // have observed the seats as booked.
                for label in seat_labels {
                    seats.insert(label.clone(), SeatStatus::Available);
                }
                Err(err)
            }
        }
    }

    /// Current status of every seat of a show, sorted by label.
    pub async fn seat_statuses(
        &self,
        show_id: i64,
    ) -> Result<BTreeMap<String, SeatStatus>, ReservationError> {
        self.seats.statuses(show_id).await
    }

    /// All committed bookings, most recent first.
    pub async fn bookings(&self) -> Vec<Booking> {
        self.bookings.list_all().await
    }
}
