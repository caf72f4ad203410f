pub mod bookings;
pub mod catalog;
pub mod seats;

pub use bookings::BookingStore;
pub use catalog::Catalog;
pub use seats::SeatLedger;
