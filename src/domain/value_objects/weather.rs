use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeatherModel {
    pub temp: f64,
    pub feels_like: f64,
    pub description: String,
    pub humidity: i64,
    pub rainfall: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSampleModel {
    pub date: String,
    pub temp: f64,
    pub description: String,
    pub rainfall: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BestTravelTimeModel {
    pub city: String,
    pub recommendation: String,
}
