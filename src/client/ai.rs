use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::http::{ApiClient, ApiError};

/// AI endpoints return free-form JSON shaped by the model prompt, so the
/// data stays a `serde_json::Value` and the UI layer decides what to render.
pub struct AiClient {
    api: Arc<ApiClient>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestDestinationsRequest {
    pub interests: Vec<String>,
    pub budget_minor: Option<i64>,
    pub duration_days: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateItineraryRequest {
    pub destination: String,
    pub duration_days: u32,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl AiClient {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn suggest_destinations(
        &self,
        request: &SuggestDestinationsRequest,
    ) -> Result<Value, ApiError> {
        let response = self
            .api
            .post::<_, Value>("api/v1/ai/suggest-destinations", request)
            .await?;
        Ok(response.data)
    }

    pub async fn generate_itinerary(
        &self,
        request: &GenerateItineraryRequest,
    ) -> Result<Value, ApiError> {
        let response = self
            .api
            .post::<_, Value>("api/v1/ai/generate-itinerary", request)
            .await?;
        Ok(response.data)
    }

    pub async fn best_travel_time(&self, destination: &str) -> Result<Value, ApiError> {
        let response = self
            .api
            .post::<_, Value>(
                "api/v1/ai/best-travel-time",
                &serde_json::json!({ "destination": destination }),
            )
            .await?;
        Ok(response.data)
    }

    pub async fn chat(&self, request: &ChatRequest) -> Result<Value, ApiError> {
        let response = self.api.post::<_, Value>("api/v1/ai/chat", request).await?;
        Ok(response.data)
    }

    pub async fn search_destinations(&self, query: &str) -> Result<Value, ApiError> {
        let response = self
            .api
            .post::<_, Value>(
                "api/v1/ai/search-destinations",
                &serde_json::json!({ "query": query }),
            )
            .await?;
        Ok(response.data)
    }
}
