use serde::Serialize;
use thiserror::Error;

/// Classified, caller-facing pipeline errors.
///
/// Geocoding transport failures and "no results" are surfaced identically;
/// weather retrieval failures never appear here (they are absorbed into a
/// sentinel snapshot instead, see `WeatherSnapshot::sentinel`).
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("city '{city}' not found or geocoding failed")]
    CityNotFound { city: String },

    #[error("location (city or coordinates) must be provided")]
    MissingLocation,
}

impl PredictError {
    /// The location label echoed back to the caller, when one exists.
    pub fn location_label(&self) -> Option<&str> {
        match self {
            PredictError::CityNotFound { city } => Some(city),
            PredictError::MissingLocation => None,
        }
    }
}

/// Error shape serialized back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_location: Option<String>,
}

impl From<&PredictError> for ErrorBody {
    fn from(err: &PredictError) -> Self {
        Self {
            error: err.to_string(),
            weather_location: err.location_label().map(str::to_owned),
        }
    }
}
