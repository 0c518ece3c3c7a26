use crate::{error::FetchError, model::WeatherRecord};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherstack;

pub use weatherstack::WeatherstackProvider;

/// A source of current-conditions observations, one location per call.
///
/// The fetch loop only depends on this trait, which keeps it testable with a
/// stub implementation and leaves room for further providers.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, location: &str) -> Result<WeatherRecord, FetchError>;
}
