pub mod bookings;
pub mod destinations;
pub mod enums;
pub mod expenses;
pub mod favorites;
pub mod iam;
pub mod payments;
pub mod trips;
pub mod weather;
