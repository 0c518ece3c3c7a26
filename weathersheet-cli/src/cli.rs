use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use weathersheet_core::{
    Config, DEFAULT_LOCATIONS, RATE_LIMIT_PAUSE, SaveOutcome, WeatherstackProvider,
    default_locations, fetch_all, parse_list, save_to_csv,
};

const DEFAULT_OUTPUT: &str = "weatherdata.csv";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weathersheet", version, about = "Batch weather-to-CSV exporter")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherStack API key for later runs.
    Configure,

    /// Fetch current conditions for a list of locations and save them as CSV.
    Fetch {
        /// WeatherStack API key; falls back to the stored config, then a prompt.
        #[arg(long)]
        api_key: Option<String>,

        /// Comma-separated location names; skips the interactive prompt.
        #[arg(long)]
        locations: Option<String>,

        /// Destination CSV path; skips the interactive prompt.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => run_configure(),
            Command::Fetch { api_key, locations, output } => {
                run_fetch(api_key, locations, output).await
            }
        }
    }
}

fn run_configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Password::new("WeatherStack API key:")
        .without_confirmation()
        .prompt()
        .context("API key prompt failed")?;

    config.set_api_key(key);
    config.save()?;

    println!("API key saved to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn run_fetch(
    api_key: Option<String>,
    locations: Option<String>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = Config::load()?;

    let api_key = match api_key.or_else(|| config.api_key().map(str::to_string)) {
        Some(key) => key,
        None => inquire::Password::new("Enter your WeatherStack API key:")
            .without_confirmation()
            .prompt()
            .context("API key prompt failed")?,
    };

    let locations = resolve_locations(locations)?;

    let provider = WeatherstackProvider::new(api_key);
    let report = fetch_all(&provider, &locations, RATE_LIMIT_PAUSE).await;

    if report.records.is_empty() {
        println!("No weather data was fetched. Please check your API key and try again.");
        return Ok(());
    }

    // The destination is only asked for once there is something to save.
    let destination = resolve_output(output)?;

    let outcome = save_to_csv(&report.records, &destination)
        .with_context(|| format!("Failed to save weather data to {}", destination.display()))?;

    if let SaveOutcome::Saved { rows } = outcome {
        println!(
            "Process completed. {rows} location(s) data saved to {} ({} skipped).",
            destination.display(),
            report.failures.len(),
        );
    }

    Ok(())
}

/// Flag value if given, otherwise an interactive prompt; blank answers fall
/// back to the built-in default list.
fn resolve_locations(flag: Option<String>) -> anyhow::Result<Vec<String>> {
    let raw = match flag {
        Some(raw) => raw,
        None => {
            println!("Default locations: {}", DEFAULT_LOCATIONS.join(", "));
            inquire::Text::new("Enter custom locations (comma-separated) or leave blank for defaults:")
                .prompt()
                .context("Location prompt failed")?
        }
    };

    let parsed = parse_list(&raw);
    Ok(if parsed.is_empty() { default_locations() } else { parsed })
}

fn resolve_output(flag: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let entered = inquire::Text::new("Enter filename to save data:")
        .with_default(DEFAULT_OUTPUT)
        .prompt()
        .context("Output path prompt failed")?;

    let trimmed = entered.trim();
    if trimmed.is_empty() {
        Ok(PathBuf::from(DEFAULT_OUTPUT))
    } else {
        Ok(PathBuf::from(trimmed))
    }
}
