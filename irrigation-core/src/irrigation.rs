use crate::model::{IrrigationResult, WeatherSnapshot};

/// Baseline water requirement in liters per square meter.
const BASELINE_L_PER_SQM: f64 = 5.0;

/// Extra requirement per degree above this threshold, 5% each.
const TEMP_THRESHOLD_C: f64 = 20.0;
const TEMP_STEP: f64 = 0.05;

/// Flat reduction applied under rain-like conditions.
const RAIN_FACTOR: f64 = 0.6;

/// Compute the water requirement for a field from one weather observation.
///
/// Pure and total: no error conditions, identical inputs give identical
/// output. Non-positive areas are the caller's concern.
pub fn calculate_irrigation_needs(
    weather: &WeatherSnapshot,
    field_size_sq_meter: f64,
) -> IrrigationResult {
    let temp_factor = 1.0 + (weather.temperature_c - TEMP_THRESHOLD_C).max(0.0) * TEMP_STEP;

    let is_rainy = {
        let description = weather.description.to_lowercase();
        description.contains("rain") || description.contains("shower")
    };
    let rain_factor = if is_rainy { RAIN_FACTOR } else { 1.0 };

    let adjusted_l_per_sqm = BASELINE_L_PER_SQM * temp_factor * rain_factor;
    let required_water_liters = adjusted_l_per_sqm * field_size_sq_meter;

    let reasoning = format!(
        "Weather: {} at {:.1}°C. Baseline ({BASELINE_L_PER_SQM:.1} L/m²) adjusted for temp \
         ({temp_factor:.2}x) and rain ({rain_factor:.2}x). Final need is \
         {adjusted_l_per_sqm:.2} L/m².",
        weather.description, weather.temperature_c,
    );

    IrrigationResult {
        field_size_sq_meter,
        required_water_liters,
        reasoning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(description: &str, temperature_c: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Testville".to_string(),
            description: description.to_string(),
            temperature_c,
        }
    }

    #[test]
    fn temp_factor_floors_at_one_below_threshold() {
        for temp in [-10.0, 0.0, 15.0, 20.0] {
            let result = calculate_irrigation_needs(&snapshot("Clear sky", temp), 1.0);
            assert_eq!(result.required_water_liters, 5.0, "temp {temp} must not reduce need");
        }
    }

    #[test]
    fn temp_factor_adds_five_percent_per_degree() {
        // 30°C → factor 1.5 → 7.5 L/m².
        let result = calculate_irrigation_needs(&snapshot("Clear sky", 30.0), 1.0);
        assert!((result.required_water_liters - 7.5).abs() < 1e-9);

        let result = calculate_irrigation_needs(&snapshot("Clear sky", 21.0), 1.0);
        assert!((result.required_water_liters - 5.25).abs() < 1e-9);
    }

    #[test]
    fn rain_like_conditions_cut_need_by_forty_percent() {
        for description in ["light rain", "Heavy RAIN", "Scattered showers", "drizzle shower"] {
            let result = calculate_irrigation_needs(&snapshot(description, 20.0), 1.0);
            assert!(
                (result.required_water_liters - 3.0).abs() < 1e-9,
                "'{description}' must count as rainy"
            );
        }
    }

    #[test]
    fn dry_conditions_keep_full_rate() {
        for description in ["Clear sky", "Overcast clouds", "Mist"] {
            let result = calculate_irrigation_needs(&snapshot(description, 20.0), 1.0);
            assert_eq!(result.required_water_liters, 5.0);
        }
    }

    #[test]
    fn factors_combine_multiplicatively() {
        // 25°C rainy, 100 m²: 5.0 * 1.25 * 0.6 * 100 = 375.
        let result = calculate_irrigation_needs(&snapshot("Light rain", 25.0), 100.0);

        assert!((result.required_water_liters - 375.0).abs() < 1e-9);
        assert_eq!(result.field_size_sq_meter, 100.0);
    }

    #[test]
    fn result_scales_linearly_with_area() {
        let weather = snapshot("Clear sky", 30.0);
        let small = calculate_irrigation_needs(&weather, 10.0);
        let large = calculate_irrigation_needs(&weather, 1000.0);

        assert!((large.required_water_liters - small.required_water_liters * 100.0).abs() < 1e-6);
    }

    #[test]
    fn calculation_is_idempotent() {
        let weather = snapshot("Light rain", 25.0);
        let first = calculate_irrigation_needs(&weather, 100.0);
        let second = calculate_irrigation_needs(&weather, 100.0);

        assert_eq!(first, second);
    }

    #[test]
    fn reasoning_states_conditions_and_factors() {
        let result = calculate_irrigation_needs(&snapshot("Light rain", 25.0), 100.0);

        assert_eq!(
            result.reasoning,
            "Weather: Light rain at 25.0°C. Baseline (5.0 L/m²) adjusted for temp (1.25x) \
             and rain (0.60x). Final need is 3.75 L/m²."
        );
    }
}
