use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::destinations::DestinationEntity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyWeatherModel {
    pub month: String,
    pub avg_temp: f64,
    pub rainfall_mm: f64,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationModel {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
    pub best_seasons: Vec<String>,
    pub activity_tags: Vec<String>,
    pub average_daily_cost_minor: i64,
    pub monthly_weather: Vec<MonthlyWeatherModel>,
    pub tags: Vec<String>,
    pub popularity: i32,
}

impl From<DestinationEntity> for DestinationModel {
    fn from(entity: DestinationEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country: entity.country,
            description: entity.description,
            image_url: entity.image_url,
            latitude: entity.latitude,
            longitude: entity.longitude,
            best_seasons: from_json_list(entity.best_seasons),
            activity_tags: from_json_list(entity.activity_tags),
            average_daily_cost_minor: entity.average_daily_cost_minor,
            monthly_weather: serde_json::from_value(entity.monthly_weather).unwrap_or_default(),
            tags: from_json_list(entity.tags),
            popularity: entity.popularity,
        }
    }
}

fn from_json_list(value: serde_json::Value) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSearchFilter {
    pub q: Option<String>,
    pub limit: Option<i64>,
}
