use chrono::NaiveDateTime;
use serde::Serialize;

/// Current conditions for a resolved city, copied verbatim from the service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherResult {
    pub city: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Kilometres per hour.
    pub wind_speed: f64,
    pub weather_code: i32,
    /// Local observation time reported by the service, when it sent one.
    pub observed_at: Option<NaiveDateTime>,
}
