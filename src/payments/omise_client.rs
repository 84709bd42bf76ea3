use std::collections::HashMap;

use anyhow::Result;
use serde::Deserialize;
use tracing::error;

const OMISE_API_BASE: &str = "https://api.omise.co";

/// Minimal Omise client built on reqwest.
pub struct OmiseClient {
    http: reqwest::Client,
    secret_key: String,
    source_type: String,
    return_uri: String,
}

/// Charge object as returned by the Omise API, reduced to the fields the
/// payment flow relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct OmiseCharge {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub status: Option<String>,
    pub authorize_uri: Option<String>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct OmiseErrorBody {
    object: Option<String>,
    location: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

impl OmiseClient {
    pub fn new(secret_key: String, source_type: String, return_uri: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            secret_key,
            source_type,
            return_uri,
        }
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (omise_error_code, omise_error_message) =
            match serde_json::from_str::<OmiseErrorBody>(&body) {
                Ok(parsed) if parsed.object.as_deref() == Some("error") => {
                    (parsed.code, parsed.message)
                }
                Ok(parsed) => {
                    let _ = parsed.location;
                    (None, None)
                }
                Err(_) => (None, None),
            };

        error!(
            status = %status,
            omise_error_code = ?omise_error_code,
            omise_error_message = ?omise_error_message,
            response_body = %body,
            context = %context,
            "omise api request failed"
        );

        anyhow::bail!(
            "Omise API request failed: {} ({})",
            context,
            omise_error_message.unwrap_or_else(|| format!("status {}", status)),
        );
    }

    /// Creates a charge for the aggregate amount and returns it, including
    /// the hosted-checkout `authorize_uri`.
    /// https://docs.opn.ooo/charges-api
    pub async fn create_charge(
        &self,
        amount_minor: i64,
        metadata: HashMap<String, String>,
    ) -> Result<OmiseCharge> {
        let mut body: Vec<(String, String)> = vec![
            ("amount".to_string(), amount_minor.to_string()),
            ("currency".to_string(), "thb".to_string()),
            ("source[type]".to_string(), self.source_type.clone()),
            ("return_uri".to_string(), self.return_uri.clone()),
        ];

        for (key, value) in metadata {
            body.push((format!("metadata[{}]", key), value));
        }

        let resp = self
            .http
            .post(format!("{}/charges", OMISE_API_BASE))
            .basic_auth(&self.secret_key, Some(""))
            .form(&body)
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "create charge").await?;

        let charge: OmiseCharge = resp.json().await?;
        Ok(charge)
    }

    /// https://docs.opn.ooo/charges-api#retrieve-a-charge
    pub async fn retrieve_charge(&self, charge_id: &str) -> Result<OmiseCharge> {
        let resp = self
            .http
            .get(format!("{}/charges/{}", OMISE_API_BASE, charge_id))
            .basic_auth(&self.secret_key, Some(""))
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "retrieve charge").await?;

        let charge: OmiseCharge = resp.json().await?;
        Ok(charge)
    }
}
