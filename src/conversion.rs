//! Temperature scale conversion and the response record
//!
//! Pure functions, no I/O and no failure mode. All three scales are reported
//! as plain f64 values.

use serde::{Deserialize, Serialize};

/// Derive Fahrenheit from Celsius
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Derive Kelvin from Celsius
#[must_use]
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.0
}

/// Final per-request result, serialized directly as the response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl TemperatureReport {
    /// Build the report for a Celsius reading
    #[must_use]
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            temp_c: celsius,
            temp_f: celsius_to_fahrenheit(celsius),
            temp_k: celsius_to_kelvin(celsius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(27.6, 81.68)]
    #[case(25.5, 77.9)]
    #[case(0.0, 32.0)]
    #[case(-40.0, -40.0)]
    fn test_celsius_to_fahrenheit(#[case] celsius: f64, #[case] expected: f64) {
        assert!((celsius_to_fahrenheit(celsius) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(23.8, 296.8)]
    #[case(25.5, 298.5)]
    #[case(0.0, 273.0)]
    fn test_celsius_to_kelvin(#[case] celsius: f64, #[case] expected: f64) {
        assert!((celsius_to_kelvin(celsius) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_report_from_celsius() {
        let report = TemperatureReport::from_celsius(25.5);
        assert_eq!(report.temp_c, 25.5);
        assert!((report.temp_f - 77.9).abs() < 1e-9);
        assert!((report.temp_k - 298.5).abs() < 1e-9);
    }

    #[test]
    fn test_report_field_names() {
        let json = serde_json::to_value(TemperatureReport::from_celsius(0.0)).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("temp_C"));
        assert!(object.contains_key("temp_F"));
        assert!(object.contains_key("temp_K"));
        assert_eq!(object.len(), 3);
    }
}
