pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod payments;
pub mod weather;
