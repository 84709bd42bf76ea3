use anyhow::Result;
use serde::Deserialize;
use tracing::error;

use crate::domain::value_objects::weather::{CurrentWeatherModel, ForecastSampleModel};

const OPENWEATHER_API_BASE: &str = "https://api.openweathermap.org/data/2.5";

/// Thin OpenWeather client. Responses are reshaped into the simplified
/// weather models; upstream errors propagate and are absorbed one layer up.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainSection,
    weather: Vec<ConditionSection>,
    rain: Option<RainSection>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    #[serde(default)]
    feels_like: f64,
    #[serde(default)]
    humidity: i64,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct RainSection {
    #[serde(rename = "1h", default)]
    one_hour: Option<f64>,
    #[serde(rename = "3h", default)]
    three_hours: Option<f64>,
}

impl RainSection {
    fn rainfall(&self) -> f64 {
        self.one_hour.or(self.three_hours).unwrap_or(0.0)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
struct ForecastEntry {
    dt_txt: String,
    main: MainSection,
    weather: Vec<ConditionSection>,
    rain: Option<RainSection>,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
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

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "openweather api request failed"
        );

        anyhow::bail!(
            "OpenWeather API request failed: {} (status {})",
            context,
            status
        );
    }

    /// https://openweathermap.org/current
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeatherModel> {
        let resp = self
            .http
            .get(format!("{}/weather", OPENWEATHER_API_BASE))
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("lang", "th"),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "current weather").await?;

        let parsed: CurrentWeatherResponse = resp.json().await?;
        Ok(CurrentWeatherModel {
            temp: parsed.main.temp,
            feels_like: parsed.main.feels_like,
            description: parsed
                .weather
                .first()
                .map(|condition| condition.description.clone())
                .unwrap_or_default(),
            humidity: parsed.main.humidity,
            rainfall: parsed.rain.as_ref().map(RainSection::rainfall).unwrap_or(0.0),
        })
    }

    /// https://openweathermap.org/forecast5 (3-hour samples)
    pub async fn forecast(&self, city: &str, samples: u32) -> Result<Vec<ForecastSampleModel>> {
        let count = samples.to_string();
        let resp = self
            .http
            .get(format!("{}/forecast", OPENWEATHER_API_BASE))
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("lang", "th"),
                ("cnt", count.as_str()),
                ("appid", &self.api_key),
            ])
            .send()
            .await?;
        let resp = Self::ensure_success(resp, "forecast").await?;

        let parsed: ForecastResponse = resp.json().await?;
        Ok(parsed
            .list
            .into_iter()
            .map(|entry| ForecastSampleModel {
                date: entry.dt_txt,
                temp: entry.main.temp,
                description: entry
                    .weather
                    .first()
                    .map(|condition| condition.description.clone())
                    .unwrap_or_default(),
                rainfall: entry.rain.as_ref().map(RainSection::rainfall).unwrap_or(0.0),
            })
            .collect())
    }
}
