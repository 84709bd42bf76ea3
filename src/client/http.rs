use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::client::session::SessionStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Envelope the server wraps every success body in.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: Url, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers({
                let mut headers = header::HeaderMap::new();
                headers.insert(
                    header::CONTENT_TYPE,
                    header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url,
            http,
            session,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::GET, path, None::<&()>).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::POST, path, Some(body)).await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<ApiResponse<T>, ApiError> {
        self.execute(Method::DELETE, path, None::<&()>).await
    }

    async fn execute<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let mut request = self.http.request(method, url);
        if let Some(token) = self.session.get() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            if status == StatusCode::UNAUTHORIZED {
                warn!("client: 401 response, clearing session token");
                self.session.clear();
            }
            let message = extract_error_message(&raw)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str::<ApiResponse<T>>(&raw)
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

fn extract_error_message(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value
        .get("message")
        .and_then(|message| message.as_str())
        .map(|message| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::session::InMemorySessionStore;
    use axum::{Json, Router, http::StatusCode as AxumStatus, routing::get};
    use serde_json::json;

    async fn spawn_server(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{}", addr)).unwrap()
    }

    #[tokio::test]
    async fn a_401_response_clears_the_session_token() {
        let router = Router::new().route(
            "/api/v1/trips",
            get(|| async {
                (
                    AxumStatus::UNAUTHORIZED,
                    Json(json!({ "code": 401, "message": "token expired" })),
                )
            }),
        );
        let base_url = spawn_server(router).await;

        let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        session.set("stale-token".to_string());

        let client = ApiClient::new(base_url, Arc::clone(&session)).unwrap();
        let result = client.get::<serde_json::Value>("api/v1/trips").await;

        match result {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "token expired");
            }
            other => panic!("expected api error, got {:?}", other.map(|r| r.success)),
        }
        assert_eq!(session.get(), None);
    }

    #[tokio::test]
    async fn a_non_401_error_keeps_the_session_token() {
        let router = Router::new().route(
            "/api/v1/trips",
            get(|| async {
                (
                    AxumStatus::NOT_FOUND,
                    Json(json!({ "code": 404, "message": "trip not found" })),
                )
            }),
        );
        let base_url = spawn_server(router).await;

        let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        session.set("good-token".to_string());

        let client = ApiClient::new(base_url, Arc::clone(&session)).unwrap();
        let result = client.get::<serde_json::Value>("api/v1/trips").await;

        assert!(matches!(result, Err(ApiError::Api { status: 404, .. })));
        assert_eq!(session.get(), Some("good-token".to_string()));
    }

    #[tokio::test]
    async fn success_bodies_parse_into_the_envelope() {
        let router = Router::new().route(
            "/api/v1/health",
            get(|| async { Json(json!({ "success": true, "data": { "ok": true } })) }),
        );
        let base_url = spawn_server(router).await;

        let session: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let client = ApiClient::new(base_url, session).unwrap();

        let response = client.get::<serde_json::Value>("api/v1/health").await.unwrap();
        assert!(response.success);
        assert_eq!(response.data, json!({ "ok": true }));
    }
}
