use crate::error::PredictError;
use crate::model::Coordinates;
use crate::provider::Geocoder;

/// Turn a city name into coordinates, or pass explicit coordinates through.
///
/// A blank city string counts as absent, matching the inbound contract.
/// First answer is final; nothing is retried.
pub async fn resolve_location(
    geocoder: &dyn Geocoder,
    city: Option<&str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Coordinates, PredictError> {
    if let Some(city) = city.filter(|c| !c.trim().is_empty()) {
        return match geocoder.geocode(city).await {
            Ok(Some(coords)) => Ok(coords),
            // Zero matches and transport failure are surfaced identically.
            Ok(None) | Err(_) => Err(PredictError::CityNotFound { city: city.to_string() }),
        };
    }

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
        _ => Err(PredictError::MissingLocation),
    }
}
