//! Generate a CSV report from a captured result page.

use admanager_orders_report::ReportError;
use admanager_orders_report::admanager::DumpOrderSource;
use admanager_orders_report::config::ReportConfig;
use admanager_orders_report::export::CsvExporter;
use admanager_orders_report::generate_report;
use admanager_orders_report::normalize::{BatchPolicy, IanaTimeZones};
use tracing::{info, warn};

use crate::ReportArgs;

/// Normalize the orders in `args.input` and write the report.
///
/// # Errors
///
/// Returns an error if the window is invalid, admin links are requested
/// without a network code, the input cannot be read, a record is malformed
/// (unless skipping), or the report cannot be written.
pub async fn run(args: ReportArgs, config: &ReportConfig) -> Result<(), ReportError> {
    let query = args.window.query(config)?;

    let mut exporter = CsvExporter::new();
    if args.admin_urls {
        let network = match args.network_code {
            Some(code) => code,
            None => config.require_network_code()?.clone(),
        };
        exporter = exporter.with_admin_urls(config.admin_host.clone(), network);
    }

    let policy = if args.skip_malformed {
        BatchPolicy::Skip
    } else {
        BatchPolicy::Abort
    };
    let destination = args.output.unwrap_or_else(|| config.output.clone());
    let source = DumpOrderSource::new(args.input, args.shape.shape());

    info!(input = %source.path().display(), %query, "Generating order report");

    let summary = generate_report(
        &source,
        &query,
        &IanaTimeZones,
        policy,
        &exporter,
        &destination,
    )
    .await?;

    if summary.skipped > 0 {
        warn!(skipped = summary.skipped, "Some orders were left out of the report");
    }
    info!(
        exported = summary.exported,
        destination = %summary.destination.display(),
        "Report written"
    );
    Ok(())
}
