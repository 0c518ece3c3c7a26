use serde::{Deserialize, Serialize};

/// One normalized weather observation for one location at fetch time.
///
/// Field declaration order is load-bearing: the CSV writer derives the header
/// row from it, so every record in a run shares the same column layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// "<name>, <country>" composed from the provider's resolved place.
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Provider-supplied local time label, e.g. "12:14 PM".
    pub observation_time: String,
    /// Degrees Celsius.
    pub temperature: f64,
    /// First entry of the provider's description list, or empty.
    pub weather_descriptions: String,
    /// km/h.
    pub wind_speed: f64,
    /// Compass abbreviation, e.g. "WSW".
    pub wind_dir: String,
    /// Millibars.
    pub pressure: f64,
    /// Percent.
    pub humidity: f64,
    /// Degrees Celsius.
    pub feels_like: f64,
    pub uv_index: f64,
    /// km.
    pub visibility: f64,
    /// "yes" or "no" as reported by the provider.
    pub is_day: String,
    /// mm.
    pub precipitation: f64,
    /// Percent.
    pub cloudcover: f64,
    /// Local wall clock when the record was assembled, "YYYY-MM-DD HH:MM:SS".
    /// Distinct from `observation_time`, which is the provider's own label.
    pub timestamp: String,
}

#[cfg(test)]
pub(crate) fn sample_record(location: &str) -> WeatherRecord {
    WeatherRecord {
        location: location.to_string(),
        latitude: 51.517,
        longitude: -0.106,
        observation_time: "12:14 PM".to_string(),
        temperature: 13.0,
        weather_descriptions: "Partly cloudy".to_string(),
        wind_speed: 11.0,
        wind_dir: "WSW".to_string(),
        pressure: 1009.0,
        humidity: 77.0,
        feels_like: 12.0,
        uv_index: 3.0,
        visibility: 10.0,
        is_day: "yes".to_string(),
        precipitation: 0.1,
        cloudcover: 75.0,
        timestamp: "2026-08-30 14:00:00".to_string(),
    }
}
