use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Accommodation,
    Food,
    Transport,
    Activities,
    Shopping,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Transport => "transport",
            ExpenseCategory::Activities => "activities",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Other => "other",
        }
    }

    pub fn from_str(value: &str) -> Self {
        match value {
            "accommodation" => ExpenseCategory::Accommodation,
            "food" => ExpenseCategory::Food,
            "transport" => ExpenseCategory::Transport,
            "activities" => ExpenseCategory::Activities,
            "shopping" => ExpenseCategory::Shopping,
            _ => ExpenseCategory::Other,
        }
    }
}

impl Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
