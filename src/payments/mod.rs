pub mod omise_client;
