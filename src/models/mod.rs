pub mod booking;
pub mod cinema;
pub mod movie;
pub mod seat;
pub mod show;

pub use booking::{Booking, NewBooking};
pub use cinema::Cinema;
pub use movie::Movie;
pub use seat::SeatStatus;
pub use show::Show;
