use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::model::{Coordinates, WeatherSnapshot};

use super::{Geocoder, WeatherSource};

pub const WEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const GEOCODING_BASE_URL: &str = "http://api.openweathermap.org/geo/1.0/direct";

/// OpenWeatherMap client covering both the geocoding and the current-weather
/// endpoints. Endpoints are injectable so tests can point at a local stub.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    weather_url: String,
    geocoding_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoints(
            api_key,
            WEATHER_BASE_URL.to_string(),
            GEOCODING_BASE_URL.to_string(),
        )
    }

    pub fn with_endpoints(api_key: String, weather_url: String, geocoding_url: String) -> Self {
        Self {
            api_key,
            weather_url,
            geocoding_url,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwGeoEntry {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl Geocoder for OpenWeatherClient {
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>> {
        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .context("Failed to send request to OpenWeather (geocoding)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather geocoding response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather geocoding request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: Vec<OwGeoEntry> =
            serde_json::from_str(&body).context("Failed to parse OpenWeather geocoding JSON")?;

        Ok(parsed.first().map(|entry| Coordinates::new(entry.lat, entry.lon)))
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn current_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        let res = self
            .http
            .get(&self.weather_url)
            .query(&[
                ("lat", coords.latitude.to_string()),
                ("lon", coords.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .context("Failed to send request to OpenWeather (current weather)")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read OpenWeather current response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        let parsed: OwCurrentResponse =
            serde_json::from_str(&body).context("Failed to parse OpenWeather current JSON")?;

        let description = parsed
            .weather
            .first()
            .map(|w| capitalize(&w.description))
            .ok_or_else(|| anyhow!("OpenWeather current response contained no conditions"))?;

        // OpenWeatherMap puts the city name in `name`; it can be missing for
        // points over open water.
        let location = parsed
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| coords.label());

        Ok(WeatherSnapshot {
            location,
            description,
            temperature_c: parsed.main.temp,
        })
    }
}

/// Python-style capitalization: first letter upper, the rest lower.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_lowercases_the_tail() {
        assert_eq!(capitalize("light rain"), "Light rain");
        assert_eq!(capitalize("RAIN"), "Rain");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn truncate_body_cuts_long_payloads() {
        let long = "x".repeat(500);
        let cut = truncate_body(&long);

        assert_eq!(cut.len(), 203);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn geocoding_payload_takes_first_entry() {
        let body = r#"[{"name":"London","lat":51.5073,"lon":-0.1276,"country":"GB"},
                       {"name":"London","lat":42.9836,"lon":-81.2497,"country":"CA"}]"#;
        let parsed: Vec<OwGeoEntry> = serde_json::from_str(body).expect("parse");
        let coords = parsed.first().map(|e| Coordinates::new(e.lat, e.lon));

        let coords = coords.expect("one match");
        assert_eq!(coords.latitude, 51.5073);
        assert_eq!(coords.longitude, -0.1276);
    }

    #[test]
    fn current_payload_extracts_expected_fields() {
        let body = r#"{"name":"London","main":{"temp":25.0,"humidity":60},
                       "weather":[{"id":500,"main":"Rain","description":"light rain"}]}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).expect("parse");

        assert_eq!(parsed.name.as_deref(), Some("London"));
        assert_eq!(parsed.main.temp, 25.0);
        assert_eq!(parsed.weather[0].description, "light rain");
    }
}
