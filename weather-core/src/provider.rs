use async_trait::async_trait;
use std::fmt::Debug;

use crate::{city::CityEntry, error::LookupError, model::WeatherResult};

pub mod open_meteo;

pub use open_meteo::OpenMeteoProvider;

/// Source of current weather for a resolved city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, city: &CityEntry) -> Result<WeatherResult, LookupError>;
}

