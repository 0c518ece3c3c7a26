use log::{info, warn};
use std::time::Duration;
use tokio::time::sleep;

use crate::{error::FetchError, model::WeatherRecord, provider::WeatherProvider};

/// Pause applied after every successful fetch to stay under the provider's
/// rate limit.
pub const RATE_LIMIT_PAUSE: Duration = Duration::from_secs(1);

/// Outcome of one full pass over the location list.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Successful observations, in the order their locations were processed.
    pub records: Vec<WeatherRecord>,
    /// Locations that contributed no record, with the reason each was skipped.
    pub failures: Vec<LocationFailure>,
}

#[derive(Debug)]
pub struct LocationFailure {
    pub location: String,
    pub error: FetchError,
}

/// Fetch current conditions for every location, strictly one at a time and in
/// input order. Failures never abort the pass: a location that errors is
/// recorded in `failures` and the loop moves on. Duplicate locations are
/// fetched (and reported) once per occurrence.
///
/// The pacing delay follows successes only; failed locations fall straight
/// through to the next iteration.
pub async fn fetch_all(
    provider: &dyn WeatherProvider,
    locations: &[String],
    pacing: Duration,
) -> FetchReport {
    info!("fetching weather data for {} locations", locations.len());

    let mut report = FetchReport::default();

    for location in locations {
        match provider.current(location).await {
            Ok(record) => {
                info!("fetched data for {location}");
                report.records.push(record);
                sleep(pacing).await;
            }
            Err(error) => {
                warn!("skipping {location}: {error}");
                report.failures.push(LocationFailure { location: location.clone(), error });
            }
        }
    }

    report
}
