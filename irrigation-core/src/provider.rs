use crate::model::{Coordinates, WeatherSnapshot};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Forward geocoding: free-text place name to coordinates.
///
/// Implementations query with a limit of one result; `Ok(None)` means the
/// provider answered but had no match.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn geocode(&self, city: &str) -> anyhow::Result<Option<Coordinates>>;
}

/// Current-conditions retrieval for a coordinate pair, metric units.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn current_weather(&self, coords: Coordinates) -> anyhow::Result<WeatherSnapshot>;
}
