use anyhow::Result;

use crate::config::Config;
use crate::error::PredictError;
use crate::irrigation::calculate_irrigation_needs;
use crate::model::{Prediction, PredictionRequest, WeatherSnapshot};
use crate::provider::openweather::{GEOCODING_BASE_URL, OpenWeatherClient, WEATHER_BASE_URL};
use crate::provider::{Geocoder, WeatherSource};
use crate::resolver::resolve_location;

/// The prediction pipeline: resolve → fetch → calculate, strictly sequential.
///
/// Provider seams are trait objects so tests can substitute in-memory fakes.
#[derive(Debug)]
pub struct Predictor {
    geocoder: Box<dyn Geocoder>,
    weather: Box<dyn WeatherSource>,
}

impl Predictor {
    pub fn new(geocoder: Box<dyn Geocoder>, weather: Box<dyn WeatherSource>) -> Self {
        Self { geocoder, weather }
    }

    /// Wire an OpenWeatherMap client for both provider roles, honoring
    /// endpoint overrides from the config file.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key()?.to_owned();
        let weather_url =
            config.weather_url.clone().unwrap_or_else(|| WEATHER_BASE_URL.to_string());
        let geocoding_url =
            config.geocoding_url.clone().unwrap_or_else(|| GEOCODING_BASE_URL.to_string());

        let client = OpenWeatherClient::with_endpoints(api_key, weather_url, geocoding_url);

        Ok(Self::new(Box::new(client.clone()), Box::new(client)))
    }

    /// Run one prediction. Exactly one of success or error per invocation.
    ///
    /// A location-resolution failure short-circuits before any weather call.
    /// A weather-retrieval failure does not: it is absorbed into a sentinel
    /// snapshot and the calculation proceeds from that placeholder data.
    pub async fn predict(&self, request: PredictionRequest) -> Result<Prediction, PredictError> {
        let coords = resolve_location(
            self.geocoder.as_ref(),
            request.city.as_deref(),
            request.latitude,
            request.longitude,
        )
        .await?;

        let weather = match self.weather.current_weather(coords).await {
            Ok(snapshot) => snapshot,
            Err(err) => WeatherSnapshot::sentinel(coords, &format!("{err:#}")),
        };

        let irrigation = calculate_irrigation_needs(&weather, request.field_size_sq_meter);

        Ok(Prediction {
            weather_location: weather.location,
            weather_description: weather.description,
            weather_temp: format!("{:.1}°C", weather.temperature_c),
            field_size: format_grouped(irrigation.field_size_sq_meter),
            required_water: format!("{} Liters", format_grouped(irrigation.required_water_liters)),
            reasoning: irrigation.reasoning,
        })
    }
}

/// Two decimals with thousands grouping, e.g. `1234567.891` → `"1,234,567.89"`.
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (rest, "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}{grouped}.{frac_part}")
}
