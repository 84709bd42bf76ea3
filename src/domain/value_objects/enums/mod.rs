pub mod booking_statuses;
pub mod booking_types;
pub mod expense_categories;
pub mod trip_statuses;
