//! Core library for the `weathersheet` batch exporter.
//!
//! This crate defines:
//! - The normalized weather record and its CSV serialization
//! - The WeatherStack provider client
//! - The sequential, error-tolerant fetch loop
//! - Configuration & credential handling
//!
//! It is used by `weathersheet-cli`, but can also be reused by other binaries
//! or services.

pub mod config;
pub mod error;
pub mod fetch;
pub mod locations;
pub mod model;
pub mod output;
pub mod provider;

pub use config::Config;
pub use error::{FetchError, OutputError};
pub use fetch::{FetchReport, LocationFailure, RATE_LIMIT_PAUSE, fetch_all};
pub use locations::{DEFAULT_LOCATIONS, default_locations, parse_list};
pub use model::WeatherRecord;
pub use output::{SaveOutcome, save_to_csv};
pub use provider::{WeatherProvider, WeatherstackProvider};
