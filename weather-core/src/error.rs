use reqwest::StatusCode;

/// Shown when the submitted city name is blank after normalisation.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a city name.";

/// Failure kinds of a single lookup.
///
/// `Display` carries diagnostic detail for logs; [`LookupError::user_message`]
/// is the fixed sentence shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("city is not in the lookup table")]
    NotFound,

    #[error("weather service returned status {status}")]
    ApiError { status: StatusCode },

    #[error("weather service response has no current weather: {reason}")]
    NoData { reason: String },

    #[error("failed to reach the weather service: {0}")]
    Network(#[from] reqwest::Error),
}

impl LookupError {
    pub fn no_data(reason: impl Into<String>) -> Self {
        LookupError::NoData {
            reason: reason.into(),
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::NotFound => {
                "City not found. Try Nairobi, London, New York, Tokyo, Paris, or Sydney."
            }
            LookupError::ApiError { .. } => {
                "The weather service did not respond. Please try again in a moment."
            }
            LookupError::NoData { .. } => {
                "Weather data is missing right now. Please try another city."
            }
            LookupError::Network(_) => "Network error. Check your connection and try again.",
        }
    }
}
