use async_trait::async_trait;
use chrono::Local;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer};

use crate::{error::FetchError, model::WeatherRecord};

use super::WeatherProvider;

const BASE_URL: &str = "http://api.weatherstack.com/current";

/// Client for the WeatherStack current-conditions endpoint.
#[derive(Debug, Clone)]
pub struct WeatherstackProvider {
    api_key: String,
    http: Client,
    base_url: String,
}

impl WeatherstackProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new(), base_url: BASE_URL.to_string() }
    }

    /// Point the provider at a different endpoint, e.g. a local test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for WeatherstackProvider {
    async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError> {
        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("access_key", self.api_key.as_str()),
                ("query", location),
                ("units", "m"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        record_from_response(status, &body)
    }
}

/// Turn one raw provider response into a record, or into the reason this
/// location is skipped. Pure so it can be exercised without a network.
pub(crate) fn record_from_response(
    status: StatusCode,
    body: &str,
) -> Result<WeatherRecord, FetchError> {
    if status != StatusCode::OK {
        return Err(FetchError::HttpStatus(status));
    }

    let envelope: WsEnvelope =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    // WeatherStack signals API-level failures inside a 200 body.
    if let Some(err) = envelope.error {
        return Err(FetchError::Provider(err.info));
    }

    let location = envelope
        .location
        .ok_or_else(|| FetchError::Malformed("missing `location` object".to_string()))?;
    let current = envelope
        .current
        .ok_or_else(|| FetchError::Malformed("missing `current` object".to_string()))?;

    let assembled_at = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    Ok(assemble_record(location, current, assembled_at))
}

fn assemble_record(location: WsLocation, current: WsCurrent, timestamp: String) -> WeatherRecord {
    let description = current.weather_descriptions.into_iter().next().unwrap_or_default();

    WeatherRecord {
        location: format!("{}, {}", location.name, location.country),
        latitude: location.lat,
        longitude: location.lon,
        observation_time: current.observation_time,
        temperature: current.temperature,
        weather_descriptions: description,
        wind_speed: current.wind_speed,
        wind_dir: current.wind_dir,
        pressure: current.pressure,
        humidity: current.humidity,
        feels_like: current.feelslike,
        uv_index: current.uv_index,
        visibility: current.visibility,
        is_day: current.is_day,
        precipitation: current.precip,
        cloudcover: current.cloudcover,
        timestamp,
    }
}

#[derive(Debug, Deserialize)]
struct WsEnvelope {
    error: Option<WsApiError>,
    location: Option<WsLocation>,
    current: Option<WsCurrent>,
}

#[derive(Debug, Deserialize)]
struct WsApiError {
    info: String,
}

#[derive(Debug, Deserialize)]
struct WsLocation {
    name: String,
    country: String,
    #[serde(deserialize_with = "flexible_f64")]
    lat: f64,
    #[serde(deserialize_with = "flexible_f64")]
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WsCurrent {
    observation_time: String,
    temperature: f64,
    weather_descriptions: Vec<String>,
    wind_speed: f64,
    wind_dir: String,
    pressure: f64,
    humidity: f64,
    feelslike: f64,
    uv_index: f64,
    visibility: f64,
    is_day: String,
    precip: f64,
    cloudcover: f64,
}

/// WeatherStack encodes `lat`/`lon` as JSON strings; accept both forms.
fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_BODY: &str = r#"{
        "location": {
            "name": "London",
            "country": "United Kingdom",
            "lat": "51.517",
            "lon": "-0.106"
        },
        "current": {
            "observation_time": "12:14 PM",
            "temperature": 13,
            "weather_descriptions": ["Sunny"],
            "wind_speed": 11,
            "wind_dir": "WSW",
            "pressure": 1009,
            "humidity": 77,
            "feelslike": 12,
            "uv_index": 3,
            "visibility": 10,
            "is_day": "yes",
            "precip": 0.1,
            "cloudcover": 75
        }
    }"#;

    #[test]
    fn success_body_becomes_record() {
        let record = record_from_response(StatusCode::OK, SUCCESS_BODY).expect("valid body");

        assert_eq!(record.location, "London, United Kingdom");
        assert_eq!(record.latitude, 51.517);
        assert_eq!(record.longitude, -0.106);
        assert_eq!(record.observation_time, "12:14 PM");
        assert_eq!(record.temperature, 13.0);
        assert_eq!(record.weather_descriptions, "Sunny");
        assert_eq!(record.wind_dir, "WSW");
        assert_eq!(record.is_day, "yes");
        // Fetch-time stamp, independent of observation_time.
        assert_eq!(record.timestamp.len(), "2026-08-30 14:00:00".len());
    }

    #[test]
    fn numeric_lat_lon_also_accepted() {
        let body = SUCCESS_BODY.replace("\"51.517\"", "51.517").replace("\"-0.106\"", "-0.106");
        let record = record_from_response(StatusCode::OK, &body).expect("valid body");

        assert_eq!(record.latitude, 51.517);
        assert_eq!(record.longitude, -0.106);
    }

    #[test]
    fn empty_description_list_yields_empty_string() {
        let body = SUCCESS_BODY.replace("[\"Sunny\"]", "[]");
        let record = record_from_response(StatusCode::OK, &body).expect("valid body");

        assert_eq!(record.weather_descriptions, "");
    }

    #[test]
    fn non_200_status_is_reported() {
        let err = record_from_response(StatusCode::INTERNAL_SERVER_ERROR, SUCCESS_BODY)
            .expect_err("must fail");

        assert!(matches!(err, FetchError::HttpStatus(s) if s.as_u16() == 500));
    }

    #[test]
    fn provider_error_payload_carries_info_message() {
        let body = r#"{
            "success": false,
            "error": {
                "code": 615,
                "type": "request_failed",
                "info": "Your API request failed. Please try again or contact support."
            }
        }"#;

        let err = record_from_response(StatusCode::OK, body).expect_err("must fail");

        match err {
            FetchError::Provider(info) => assert!(info.contains("Your API request failed")),
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[test]
    fn missing_current_object_is_malformed() {
        let body = r#"{"location": {"name": "X", "country": "Y", "lat": 0.0, "lon": 0.0}}"#;

        let err = record_from_response(StatusCode::OK, body).expect_err("must fail");
        assert!(matches!(err, FetchError::Malformed(msg) if msg.contains("current")));
    }

    #[test]
    fn missing_expected_key_is_malformed_not_a_panic() {
        let body = SUCCESS_BODY.replace("\"wind_dir\": \"WSW\",", "");

        let err = record_from_response(StatusCode::OK, &body).expect_err("must fail");
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let err = record_from_response(StatusCode::OK, "<html>not json</html>")
            .expect_err("must fail");

        assert!(matches!(err, FetchError::Malformed(_)));
    }
}
