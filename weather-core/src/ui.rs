//! Search state machine shared by every front-end.
//!
//! `Idle -> Loading -> {Result, Error}`, and back to `Loading` on the next
//! submit. Front-ends implement [`Surface`] and receive a [`DisplayModel`]
//! after every transition.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    city::{normalize, resolve},
    classify::{WeatherCategory, alt_text_for_code, classify},
    error::{EMPTY_INPUT_MESSAGE, LookupError},
    icon::icon_for,
    model::WeatherResult,
    provider::WeatherProvider,
};

/// Rendered fields of a successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub city: String,
    /// Degrees Celsius, one decimal place.
    pub temperature: String,
    /// Kilometres per hour, one decimal place.
    pub wind_speed: String,
    pub category: WeatherCategory,
    pub icon_uri: String,
    pub icon_alt: String,
    pub observed_at: Option<String>,
}

impl ResultView {
    pub fn from_result(result: &WeatherResult) -> Self {
        let category = classify(result.weather_code);
        let icon = icon_for(category);

        Self {
            city: result.city.clone(),
            temperature: one_decimal(result.temperature),
            wind_speed: one_decimal(result.wind_speed),
            category,
            icon_uri: icon.data_uri,
            icon_alt: format!("{} icon", alt_text_for_code(result.weather_code)),
            observed_at: result
                .observed_at
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

/// One decimal place, exact halves rounded away from zero.
///
/// Works on the exact binary value, so `0.15` (stored just below) rounds down.
fn one_decimal(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.1}")
        }
        None => format!("{value:.1}"),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Result(ResultView),
    Error(String),
}

/// What a front-end should show. At most one of `result` and `error` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    pub loading: bool,
    pub submit_enabled: bool,
    pub result: Option<ResultView>,
    pub error: Option<String>,
}

impl UiState {
    pub fn display(&self) -> DisplayModel {
        let loading = matches!(self, UiState::Loading);
        let (result, error) = match self {
            UiState::Idle | UiState::Loading => (None, None),
            UiState::Result(view) => (Some(view.clone()), None),
            UiState::Error(message) => (None, Some(message.clone())),
        };

        DisplayModel {
            loading,
            submit_enabled: !loading,
            result,
            error,
        }
    }
}

/// Output side of a front-end.
pub trait Surface {
    fn render(&mut self, display: &DisplayModel);
}

/// Drives a search from raw input to a rendered result or error.
#[derive(Debug)]
pub struct WeatherLookup<P, S> {
    provider: P,
    surface: S,
    state: UiState,
}

impl<P: WeatherProvider, S: Surface> WeatherLookup<P, S> {
    pub fn new(provider: P, surface: S) -> Self {
        Self {
            provider,
            surface,
            state: UiState::Idle,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Run one search. Failures end in [`UiState::Error`]; nothing propagates.
    pub async fn submit(&mut self, raw: &str) -> &UiState {
        if normalize(raw).is_empty() {
            self.transition(UiState::Error(EMPTY_INPUT_MESSAGE.to_string()));
            return &self.state;
        }

        let in_flight = InFlight::begin(self);
        let next = match in_flight.owner.run(raw).await {
            Ok(view) => {
                info!(city = %view.city, category = %view.category, "lookup complete");
                UiState::Result(view)
            }
            Err(err) => {
                warn!(input = raw, error = %err, "lookup failed");
                UiState::Error(err.user_message().to_string())
            }
        };
        in_flight.settle(next);

        &self.state
    }

    async fn run(&self, raw: &str) -> Result<ResultView, LookupError> {
        let city = resolve(raw)?;
        let result = self.provider.current_weather(city).await?;
        Ok(ResultView::from_result(&result))
    }

    fn transition(&mut self, next: UiState) {
        debug!(from = state_name(&self.state), to = state_name(&next), "ui transition");
        self.state = next;
        self.surface.render(&self.state.display());
    }
}

fn state_name(state: &UiState) -> &'static str {
    match state {
        UiState::Idle => "idle",
        UiState::Loading => "loading",
        UiState::Result(_) => "result",
        UiState::Error(_) => "error",
    }
}

/// Holds the lookup in `Loading` while a request is in flight.
///
/// Dropping it unsettled (the submit future was cancelled) returns the
/// surface to `Idle` so submit is enabled again.
struct InFlight<'a, P: WeatherProvider, S: Surface> {
    owner: &'a mut WeatherLookup<P, S>,
    settled: bool,
}

impl<'a, P: WeatherProvider, S: Surface> InFlight<'a, P, S> {
    fn begin(owner: &'a mut WeatherLookup<P, S>) -> Self {
        owner.transition(UiState::Loading);
        Self {
            owner,
            settled: false,
        }
    }

    fn settle(mut self, next: UiState) {
        self.settled = true;
        self.owner.transition(next);
    }
}

impl<P: WeatherProvider, S: Surface> Drop for InFlight<'_, P, S> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("lookup abandoned before completion");
            self.owner.transition(UiState::Idle);
        }
    }
}
