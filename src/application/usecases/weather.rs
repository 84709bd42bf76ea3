use std::sync::Arc;

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::value_objects::weather::{
    BestTravelTimeModel, CurrentWeatherModel, ForecastSampleModel,
};
use crate::weather::openweather_client::OpenWeatherClient;

/// Samples per forecast day (3-hour steps).
const SAMPLES_PER_DAY: u32 = 8;
const DEFAULT_FORECAST_DAYS: u32 = 5;
const MAX_FORECAST_DAYS: u32 = 5;

const MSG_UNAVAILABLE: &str = "ไม่สามารถดึงข้อมูลสภาพอากาศได้ กรุณาลองใหม่อีกครั้ง";
const MSG_UNSUITABLE: &str =
    "ช่วงนี้สภาพอากาศอาจไม่เหมาะกับการเดินทาง ลองตรวจสอบอีกครั้งสัปดาห์หน้า";

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait WeatherGateway: Send + Sync {
    async fn current_weather(&self, city: &str) -> AnyResult<CurrentWeatherModel>;
    async fn forecast(&self, city: &str, samples: u32) -> AnyResult<Vec<ForecastSampleModel>>;
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> AnyResult<CurrentWeatherModel> {
        self.current_weather(city).await
    }

    async fn forecast(&self, city: &str, samples: u32) -> AnyResult<Vec<ForecastSampleModel>> {
        self.forecast(city, samples).await
    }
}

pub struct WeatherUseCase<G>
where
    G: WeatherGateway + Send + Sync + 'static,
{
    weather_client: Arc<G>,
}

impl<G> WeatherUseCase<G>
where
    G: WeatherGateway + Send + Sync + 'static,
{
    pub fn new(weather_client: Arc<G>) -> Self {
        Self { weather_client }
    }

    /// Upstream failures are absorbed: the caller always gets a well-typed
    /// (possibly empty) value and never an error.
    pub async fn get_current_weather(&self, city: &str) -> Option<CurrentWeatherModel> {
        match self.weather_client.current_weather(city).await {
            Ok(weather) => Some(weather),
            Err(err) => {
                warn!(city = %city, error = ?err, "weather: current weather unavailable");
                None
            }
        }
    }

    pub async fn get_forecast(&self, city: &str, days: u32) -> Vec<ForecastSampleModel> {
        // The free forecast endpoint covers 5 days; days is caller input.
        let days = days.clamp(1, MAX_FORECAST_DAYS);
        match self
            .weather_client
            .forecast(city, days * SAMPLES_PER_DAY)
            .await
        {
            Ok(samples) => samples,
            Err(err) => {
                warn!(city = %city, days, error = ?err, "weather: forecast unavailable");
                Vec::new()
            }
        }
    }

    /// Fixed threshold rule over the 5-day forecast: the first sample with
    /// 20 < temp < 32 and rainfall < 2 drives the recommendation.
    pub async fn best_travel_time(&self, city: &str) -> BestTravelTimeModel {
        let forecast = self.get_forecast(city, DEFAULT_FORECAST_DAYS).await;

        let recommendation = if forecast.is_empty() {
            MSG_UNAVAILABLE.to_string()
        } else {
            match forecast.iter().find(|sample| is_good_sample(sample)) {
                Some(sample) => {
                    info!(
                        city = %city,
                        date = %sample.date,
                        temp = sample.temp,
                        "weather: good travel window found"
                    );
                    format!(
                        "ช่วง 5 วันข้างหน้าอากาศกำลังดี อุณหภูมิประมาณ {:.0}°C เหมาะกับการเดินทาง",
                        sample.temp
                    )
                }
                None => MSG_UNSUITABLE.to_string(),
            }
        };

        BestTravelTimeModel {
            city: city.to_string(),
            recommendation,
        }
    }
}

fn is_good_sample(sample: &ForecastSampleModel) -> bool {
    sample.temp > 20.0 && sample.temp < 32.0 && sample.rainfall < 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn sample(temp: f64, rainfall: f64) -> ForecastSampleModel {
        ForecastSampleModel {
            date: "2026-09-01 09:00:00".to_string(),
            temp,
            description: "ท้องฟ้าแจ่มใส".to_string(),
            rainfall,
        }
    }

    #[tokio::test]
    async fn recommends_when_a_sample_is_in_range() {
        let mut gateway = MockWeatherGateway::new();
        gateway.expect_forecast().returning(|_, samples| {
            assert_eq!(samples, 40);
            Box::pin(async {
                Ok(vec![sample(35.0, 0.0), sample(28.0, 0.5), sample(22.0, 0.0)])
            })
        });

        let usecase = WeatherUseCase::new(Arc::new(gateway));
        let result = usecase.best_travel_time("Bangkok").await;

        assert!(result.recommendation.contains("28°C"));
    }

    #[tokio::test]
    async fn boundary_samples_are_not_good() {
        // 20 and 32 are excluded, as is rainfall exactly 2.
        assert!(!is_good_sample(&sample(20.0, 0.0)));
        assert!(!is_good_sample(&sample(32.0, 0.0)));
        assert!(!is_good_sample(&sample(25.0, 2.0)));
        assert!(is_good_sample(&sample(20.1, 1.9)));
    }

    #[tokio::test]
    async fn falls_back_when_no_sample_is_suitable() {
        let mut gateway = MockWeatherGateway::new();
        gateway.expect_forecast().returning(|_, _| {
            Box::pin(async { Ok(vec![sample(35.0, 0.0), sample(25.0, 5.0)]) })
        });

        let usecase = WeatherUseCase::new(Arc::new(gateway));
        let result = usecase.best_travel_time("Bangkok").await;

        assert_eq!(result.recommendation, MSG_UNSUITABLE);
    }

    #[tokio::test]
    async fn reports_unavailable_when_forecast_is_empty() {
        let mut gateway = MockWeatherGateway::new();
        gateway
            .expect_forecast()
            .returning(|_, _| Box::pin(async { Ok(Vec::new()) }));

        let usecase = WeatherUseCase::new(Arc::new(gateway));
        let result = usecase.best_travel_time("Bangkok").await;

        assert_eq!(result.recommendation, MSG_UNAVAILABLE);
    }

    #[tokio::test]
    async fn forecast_days_are_clamped_to_the_five_day_window() {
        let mut gateway = MockWeatherGateway::new();
        gateway.expect_forecast().returning(|_, samples| {
            assert_eq!(samples, 40);
            Box::pin(async { Ok(Vec::new()) })
        });

        let usecase = WeatherUseCase::new(Arc::new(gateway));
        usecase.get_forecast("Bangkok", u32::MAX).await;

        let mut gateway = MockWeatherGateway::new();
        gateway.expect_forecast().returning(|_, samples| {
            assert_eq!(samples, 8);
            Box::pin(async { Ok(Vec::new()) })
        });

        let usecase = WeatherUseCase::new(Arc::new(gateway));
        usecase.get_forecast("Bangkok", 0).await;
    }

    #[tokio::test]
    async fn upstream_errors_become_none_and_empty() {
        let mut gateway = MockWeatherGateway::new();
        gateway
            .expect_current_weather()
            .returning(|_| Box::pin(async { Err(anyhow!("upstream 500")) }));
        gateway
            .expect_forecast()
            .returning(|_, _| Box::pin(async { Err(anyhow!("upstream 500")) }));

        let usecase = WeatherUseCase::new(Arc::new(gateway));

        assert!(usecase.get_current_weather("Bangkok").await.is_none());
        assert!(usecase.get_forecast("Bangkok", 5).await.is_empty());
    }
}
