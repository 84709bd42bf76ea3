pub mod bookings;
pub mod destinations;
pub mod expenses;
pub mod favorites;
pub mod trips;
pub mod users;
