pub mod auth;
pub mod bookings;
pub mod destinations;
pub mod expenses;
pub mod favorites;
pub mod payments;
pub mod trips;
pub mod weather;
