use log::info;
use std::path::Path;

use crate::{error::OutputError, model::WeatherRecord};

/// What happened to the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No records were collected; the destination was not touched.
    NothingToSave,
    /// Header plus `rows` data rows were written.
    Saved { rows: usize },
}

/// Serialize the collected records to CSV at `path`, overwriting any existing
/// file. The header row comes from the record's field names in declaration
/// order, identical for every row. An empty input writes nothing at all.
pub fn save_to_csv(records: &[WeatherRecord], path: &Path) -> Result<SaveOutcome, OutputError> {
    if records.is_empty() {
        info!("no weather data to save");
        return Ok(SaveOutcome::NothingToSave);
    }

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|source| OutputError::Csv { path: path.to_path_buf(), source })?;

    for record in records {
        wtr.serialize(record)
            .map_err(|source| OutputError::Csv { path: path.to_path_buf(), source })?;
    }

    wtr.flush().map_err(|source| OutputError::Flush { path: path.to_path_buf(), source })?;

    info!("weather data saved to {}", path.display());
    Ok(SaveOutcome::Saved { rows: records.len() })
}
