//! Mobile-facing API client: a thin reqwest wrapper with a shared session
//! store for the bearer token, per-resource modules, and the checkout
//! orchestration state machine.

pub mod ai;
pub mod auth;
pub mod bookings;
pub mod checkout;
pub mod expenses;
pub mod favorites;
pub mod http;
pub mod payments;
pub mod session;
pub mod trips;
pub mod weather;
