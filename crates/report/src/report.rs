//! A full report run: fetch, normalize, export.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::admanager::{OrderQuery, OrderSource};
use crate::error::ReportError;
use crate::export::CsvExporter;
use crate::normalize::{BatchPolicy, TimeZoneResolver, normalize_batch};

/// Counts from a finished report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Raw records the source returned.
    pub fetched: usize,
    /// Rows written to the report.
    pub exported: usize,
    /// Records left out as malformed.
    pub skipped: usize,
    /// Where the report was written.
    pub destination: PathBuf,
}

/// Fetch the orders in `query`'s window and write them to `destination`.
///
/// # Errors
///
/// Returns [`ReportError::Source`] if the source fails,
/// [`ReportError::Record`] if a record is malformed under
/// [`BatchPolicy::Abort`], and [`ReportError::Export`] if nothing is left to
/// export or the file cannot be written.
#[instrument(skip_all, fields(query = %query, destination = %destination.display()))]
pub async fn generate_report<S, Z>(
    source: &S,
    query: &OrderQuery,
    zones: &Z,
    policy: BatchPolicy,
    exporter: &CsvExporter,
    destination: &Path,
) -> Result<ReportSummary, ReportError>
where
    S: OrderSource + Sync,
    Z: TimeZoneResolver + ?Sized,
{
    let records = source
        .get_orders_by_date_range(query)
        .await
        .map_err(ReportError::from_source)?;
    let fetched = records.len();

    let batch = normalize_batch(records, zones, policy)?;
    exporter.export_csv(&batch.orders, destination)?;

    let summary = ReportSummary {
        fetched,
        exported: batch.orders.len(),
        skipped: batch.skipped.len(),
        destination: destination.to_path_buf(),
    };
    info!(
        fetched = summary.fetched,
        exported = summary.exported,
        skipped = summary.skipped,
        "Report complete"
    );
    Ok(summary)
}
