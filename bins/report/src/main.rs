//! Cash-flow report CLI.
//!
//! Reads a JSON array of entries, as delivered by the data layer, and prints
//! the derived dashboard report as JSON on stdout.
//!
//! ```text
//! cashflow-report <PATH> [--year <YEAR>] [--strict]
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cashflow_core::cashflow::{Entry, aggregate, try_aggregate};
use cashflow_core::report::{ReportOptions, ReportService};
use cashflow_shared::config::LoggingConfig;
use cashflow_shared::types::Money;
use cashflow_shared::{AppConfig, AppError, AppResult};

/// Derives the cash-flow dashboard report from a JSON entry list.
#[derive(Debug, Parser)]
#[command(name = "cashflow-report", version)]
struct Args {
    /// JSON array of entries.
    path: PathBuf,

    /// Keep only entries of this year. Defaults to the latest year present.
    #[arg(long)]
    year: Option<i32>,

    /// Reject entries with an out-of-range month or a blank category.
    #[arg(long)]
    strict: bool,
}

fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.filter.as_str().into());

    tracing_subscriber::registry()
        .with(filter)
        .with(config.json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!config.json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

fn load_entries(path: &Path) -> AppResult<Vec<Entry>> {
    let data = std::fs::read_to_string(path)
        .map_err(|err| AppError::NotFound(format!("{}: {err}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|err| AppError::InvalidInput(format!("{}: {err}", path.display())))
}

fn run(args: &Args) -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(AppError::from)?;
    init_tracing(&config.logging);

    let mut entries = load_entries(&args.path)?;
    info!(path = %args.path.display(), entries = entries.len(), "Loaded entries");

    let year = match args.year {
        Some(year) => {
            let before = entries.len();
            entries.retain(|entry| entry.year == year);
            if entries.len() < before {
                warn!(year, dropped = before - entries.len(), "Dropped entries from other years");
            }
            year
        }
        None => entries
            .iter()
            .map(|entry| entry.year)
            .max()
            .ok_or_else(|| AppError::Validation("no entries and no --year given".into()))?,
    };

    let matrix = if args.strict {
        try_aggregate(&entries).map_err(AppError::from)?
    } else {
        aggregate(&entries)
    };

    let report = ReportService::from_matrix(year, &matrix, ReportOptions::from(&config.report));
    let currency = config.report.currency;
    info!(
        year,
        categories = report.rows.len(),
        planned = %Money::new(report.net_result.planned, currency),
        actual = %Money::new(report.net_result.actual, currency),
        "Net result"
    );

    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| AppError::Internal(format!("Failed to serialize report: {err}")))?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Report failed");
            match err.downcast_ref::<AppError>() {
                Some(app_err) => {
                    eprintln!("error[{}]: {app_err}", app_err.error_code());
                    ExitCode::from(u8::try_from(app_err.exit_code()).unwrap_or(1))
                }
                None => {
                    eprintln!("error: {err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("cashflow-report").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_path_and_flags() {
        let args = parse(&["entries.json", "--year", "2024", "--strict"]).unwrap();
        assert_eq!(args.path, PathBuf::from("entries.json"));
        assert_eq!(args.year, Some(2024));
        assert!(args.strict);
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&["entries.json"]).unwrap();
        assert_eq!(args.year, None);
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_requires_path() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_rejects_bad_year() {
        let err = parse(&["entries.json", "--year", "soon"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        let err = parse(&["entries.json", "--csv"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_load_entries_missing_file_is_not_found() {
        let err = load_entries(Path::new("does/not/exist.json")).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
