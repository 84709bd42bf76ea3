pub mod openweather_client;
