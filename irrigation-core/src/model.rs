use serde::{Deserialize, Serialize};

/// A geographic point. Latitude in [-90, 90], longitude in [-180, 180];
/// ranges are enforced by the caller before the pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Display label used when no place name is available.
    pub fn label(&self) -> String {
        format!("Lat {:.2}, Lon {:.2}", self.latitude, self.longitude)
    }
}

/// Pre-validated input to the prediction pipeline.
///
/// Exactly one of `city` or the `latitude`/`longitude` pair is expected;
/// the resolver re-derives a compatible error if the constraint is violated.
#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub field_size_sq_meter: f64,
}

/// A single current-conditions observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: String,
    pub description: String,
    pub temperature_c: f64,
}

impl WeatherSnapshot {
    /// Failure-absorbing placeholder built when the weather fetch fails.
    ///
    /// The pipeline keeps going with this snapshot instead of erroring out,
    /// so callers must treat a 0.0 temperature together with an
    /// "Error retrieving weather:" description as a failure signal.
    pub fn sentinel(coords: Coordinates, detail: &str) -> Self {
        Self {
            location: coords.label(),
            description: format!("Error retrieving weather: {detail}"),
            temperature_c: 0.0,
        }
    }
}

/// Output of the irrigation calculation. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrigationResult {
    pub field_size_sq_meter: f64,
    pub required_water_liters: f64,
    pub reasoning: String,
}

/// The successful caller-facing bundle, with display-formatted strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub weather_location: String,
    pub weather_description: String,
    /// Temperature with unit, e.g. `"21.3°C"`.
    pub weather_temp: String,
    /// Field area with thousands grouping, e.g. `"1,500.00"`.
    pub field_size: String,
    /// Total volume with unit, e.g. `"825.50 Liters"`.
    pub required_water: String,
    pub reasoning: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_label_uses_two_decimals() {
        let coords = Coordinates::new(40.0, -74.006);
        assert_eq!(coords.label(), "Lat 40.00, Lon -74.01");
    }

    #[test]
    fn sentinel_snapshot_masks_failure_as_data() {
        let snapshot = WeatherSnapshot::sentinel(Coordinates::new(51.5, -0.1), "connection refused");

        assert_eq!(snapshot.location, "Lat 51.50, Lon -0.10");
        assert_eq!(
            snapshot.description,
            "Error retrieving weather: connection refused"
        );
        assert_eq!(snapshot.temperature_c, 0.0);
    }
}
