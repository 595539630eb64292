//! Ad Manager orders CLI - order reports from captured result pages.
//!
//! # Usage
//!
//! ```bash
//! # Export orders ending in January 2024
//! ao-cli report --input orders.json --start 2024-01-01 --end 2024-02-01
//!
//! # Force the SOAP shape, skip bad records, add admin links
//! ao-cli report --input orders.json --start 2024-01-01 --end 2024-02-01 \
//!     --shape soap-object --skip-malformed --admin-urls --network-code 1234
//!
//! # Show the statement a window would run
//! ao-cli statement --start 2024-01-01 --end 2024-02-01 --limit 100
//! ```
//!
//! # Commands
//!
//! - `report` - Normalize orders and write the CSV report
//! - `statement` - Log the query statement for a date window

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use admanager_orders_core::NetworkCode;
use admanager_orders_report::admanager::{OrderQuery, QueryError, RawShape};
use admanager_orders_report::config::{LogFormat, ReportConfig};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "ao-cli")]
#[command(author, version, about = "Ad Manager order report tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize orders from a result page and write the CSV report
    Report(ReportArgs),
    /// Log the statement a date window renders to
    Statement(WindowArgs),
}

/// Date window and page size.
#[derive(clap::Args)]
struct WindowArgs {
    /// First end date included (YYYY-MM-DD)
    #[arg(long)]
    start: NaiveDate,

    /// First end date excluded (YYYY-MM-DD)
    #[arg(long)]
    end: NaiveDate,

    /// Maximum number of orders (default: `ADMANAGER_QUERY_LIMIT`)
    #[arg(long)]
    limit: Option<u32>,
}

impl WindowArgs {
    /// The query for this window, falling back to the configured limit.
    fn query(&self, config: &ReportConfig) -> Result<OrderQuery, QueryError> {
        OrderQuery::new(
            self.start,
            self.end,
            self.limit.unwrap_or(config.query_limit),
        )
    }
}

#[derive(clap::Args)]
struct ReportArgs {
    #[command(flatten)]
    window: WindowArgs,

    /// JSON result page captured from the order service
    #[arg(short, long)]
    input: PathBuf,

    /// Record shape, or `auto` to detect it per record
    #[arg(long, value_enum, default_value_t = ShapeArg::Auto)]
    shape: ShapeArg,

    /// CSV destination (default: `REPORT_OUTPUT`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Network code for admin links (default: `ADMANAGER_NETWORK_CODE`)
    #[arg(long)]
    network_code: Option<NetworkCode>,

    /// Append an `adminUrl` column
    #[arg(long)]
    admin_urls: bool,

    /// Leave malformed records out instead of failing
    #[arg(long)]
    skip_malformed: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Auto,
    LegacyDict,
    OauthDict,
    SoapObject,
}

impl ShapeArg {
    const fn shape(self) -> Option<RawShape> {
        match self {
            Self::Auto => None,
            Self::LegacyDict => Some(RawShape::LegacyDict),
            Self::OauthDict => Some(RawShape::OAuthDict),
            Self::SoapObject => Some(RawShape::SoapObject),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = ReportConfig::from_env();

    init_tracing(config.as_ref().map_or(LogFormat::Text, |c| c.log_format));

    let result: Result<(), Box<dyn std::error::Error>> = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Log filter used when `RUST_LOG` is not set: the library crates and this
/// binary at info.
const DEFAULT_LOG_FILTER: &str = "admanager_orders=info,ao_cli=info";

/// Install the subscriber, defaulting to [`DEFAULT_LOG_FILTER`].
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let is_json = format == LogFormat::Json;
    let json_layer = is_json.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_json).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli, config: ReportConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Report(args) => commands::report::run(args, &config).await?,
        Commands::Statement(window) => commands::statement::run(&window, &config)?,
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn logged_with_default_filter(emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_filter_shows_binary_events() {
        let output = logged_with_default_filter(|| {
            tracing::info!(query = "WHERE endDateTime >= :start", "Statement");
            tracing::error!("Command failed: cannot read orders.json");
        });
        assert!(output.contains("Statement"));
        assert!(output.contains("Command failed: cannot read orders.json"));
    }

    #[test]
    fn test_default_filter_shows_library_events() {
        let output = logged_with_default_filter(|| {
            tracing::info!(target: "admanager_orders_report::report", "Report complete");
            tracing::debug!(target: "admanager_orders_report::normalize", "Ignoring unmapped order fields");
        });
        assert!(output.contains("Report complete"));
        assert!(!output.contains("Ignoring unmapped order fields"));
    }

    #[test]
    fn test_shape_names_match_cli_values() {
        for (arg, shape) in [
            (ShapeArg::LegacyDict, RawShape::LegacyDict),
            (ShapeArg::OauthDict, RawShape::OAuthDict),
            (ShapeArg::SoapObject, RawShape::SoapObject),
        ] {
            let value = arg.to_possible_value().unwrap();
            assert_eq!(value.get_name(), shape.as_str());
            assert_eq!(arg.shape(), Some(shape));
        }
        assert_eq!(ShapeArg::Auto.shape(), None);
    }
}

