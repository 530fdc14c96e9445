use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{city::CityEntry, error::LookupError, model::WeatherResult};

use super::WeatherProvider;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Format of `current_weather.time` (local time, minute precision).
const OBSERVATION_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Open-Meteo forecast API, queried for the `current_weather` block only.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    endpoint: String,
    http: Client,
}

impl Default for OpenMeteoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl OpenMeteoProvider {
    pub fn new() -> Self {
        Self::with_endpoint(FORECAST_URL)
    }

    fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: Client::new(),
        }
    }

    /// Point the provider at a mock forecast endpoint.
    #[cfg(any(test, feature = "test-support"))]
    pub fn with_base_url(endpoint: impl Into<String>) -> Self {
        Self::with_endpoint(endpoint)
    }
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    /// WMO code; some responses encode it as a float such as `3.0`.
    weathercode: f64,
    time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current_weather: Option<OmCurrentWeather>,
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn current_weather(&self, city: &CityEntry) -> Result<WeatherResult, LookupError> {
        debug!(
            city = city.display_name,
            latitude = city.latitude,
            longitude = city.longitude,
            endpoint = %self.endpoint,
            "requesting current weather"
        );

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("latitude", city.latitude.to_string()),
                ("longitude", city.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, city = city.display_name, "weather service rejected request");
            return Err(LookupError::ApiError { status });
        }

        let body = res.text().await?;
        parse_current_weather(city, &body)
    }
}

fn parse_current_weather(city: &CityEntry, body: &str) -> Result<WeatherResult, LookupError> {
    let parsed: OmForecastResponse = serde_json::from_str(body)
        .map_err(|e| LookupError::no_data(format!("unreadable response body: {e}")))?;

    let current = parsed
        .current_weather
        .ok_or_else(|| LookupError::no_data("response has no `current_weather` object"))?;

    if current.weathercode.fract() != 0.0 {
        return Err(LookupError::no_data(format!(
            "weather code {} is not a whole number",
            current.weathercode
        )));
    }

    let observed_at = current
        .time
        .as_deref()
        .and_then(|t| NaiveDateTime::parse_from_str(t, OBSERVATION_TIME_FORMAT).ok());

    Ok(WeatherResult {
        city: city.display_name.to_string(),
        temperature: current.temperature,
        wind_speed: current.windspeed,
        // Saturates outside the i32 range, which classifies the same way.
        weather_code: current.weathercode as i32,
        observed_at,
    })
}
