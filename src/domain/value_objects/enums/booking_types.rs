use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingType {
    Hotel,
    Flight,
    Restaurant,
    Activity,
}

impl BookingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingType::Hotel => "hotel",
            BookingType::Flight => "flight",
            BookingType::Restaurant => "restaurant",
            BookingType::Activity => "activity",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "hotel" => Some(BookingType::Hotel),
            "flight" => Some(BookingType::Flight),
            "restaurant" => Some(BookingType::Restaurant),
            "activity" => Some(BookingType::Activity),
            _ => None,
        }
    }
}

impl Display for BookingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
