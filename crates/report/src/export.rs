//! CSV export of canonical orders.
//!
//! Columns are the canonical field names in a fixed order. `totalBudget` is
//! written as its micro-amount alone; absent optional fields are empty cells.
//! Files are written to a temporary sibling and renamed into place, so a
//! failed export never leaves a partial report behind.

use std::io::Write;
use std::path::{Path, PathBuf};

use admanager_orders_core::{CanonicalOrder, NetworkCode, OrderStatus, OrderTimestamp};
use csv::WriterBuilder;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

/// Errors from writing a report.
#[derive(Debug, Error)]
pub enum ExportError {
    /// There are no records to derive the header from.
    #[error("Nothing to export: the order list is empty")]
    EmptyInput,

    /// The destination could not be created or written.
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A row could not be encoded.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// One report row, fields in column order.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow<'a> {
    id: i64,
    name: &'a str,
    advertiser_id: i64,
    creator_id: i64,
    trafficker_id: i64,
    currency_code: &'a str,
    external_order_id: &'a str,
    notes: Option<&'a str>,
    po_number: Option<&'a str>,
    last_modified_by_app: &'a str,
    status: &'a OrderStatus,
    is_archived: bool,
    unlimited_end_date_time: bool,
    total_clicks_delivered: i64,
    total_impressions_delivered: i64,
    start_date_time: &'a OrderTimestamp,
    end_date_time: Option<&'a OrderTimestamp>,
    last_modified_date_time: &'a OrderTimestamp,
    total_budget: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    admin_url: Option<String>,
}

/// Where the optional `adminUrl` column points.
#[derive(Debug, Clone)]
struct AdminLinks {
    host: String,
    network: NetworkCode,
}

/// Writes canonical orders as CSV.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    admin_links: Option<AdminLinks>,
}

impl CsvExporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `adminUrl` column linking each order in the Ad Manager UI.
    #[must_use]
    pub fn with_admin_urls(mut self, host: impl Into<String>, network: NetworkCode) -> Self {
        self.admin_links = Some(AdminLinks {
            host: host.into(),
            network,
        });
        self
    }

    fn row<'a>(&self, order: &'a CanonicalOrder) -> CsvRow<'a> {
        CsvRow {
            id: order.id.as_i64(),
            name: &order.name,
            advertiser_id: order.advertiser_id.as_i64(),
            creator_id: order.creator_id.as_i64(),
            trafficker_id: order.trafficker_id.as_i64(),
            currency_code: &order.currency_code,
            external_order_id: &order.external_order_id,
            notes: order.notes.as_deref(),
            po_number: order.po_number.as_deref(),
            last_modified_by_app: &order.last_modified_by_app,
            status: &order.status,
            is_archived: order.is_archived,
            unlimited_end_date_time: order.unlimited_end_date_time,
            total_clicks_delivered: order.total_clicks_delivered,
            total_impressions_delivered: order.total_impressions_delivered,
            start_date_time: &order.start_date_time,
            end_date_time: order.end_date_time.as_ref(),
            last_modified_date_time: &order.last_modified_date_time,
            total_budget: order.total_budget.micro_amount,
            admin_url: self
                .admin_links
                .as_ref()
                .map(|links| order.admin_url(&links.host, &links.network)),
        }
    }

    /// Write the header and one row per order to `w`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyInput`] for an empty slice, or
    /// [`ExportError::Csv`] if writing fails.
    pub fn write<W: Write>(&self, records: &[CanonicalOrder], w: W) -> Result<(), ExportError> {
        if records.is_empty() {
            return Err(ExportError::EmptyInput);
        }

        let mut writer = WriterBuilder::new().has_headers(true).from_writer(w);
        for order in records {
            writer.serialize(self.row(order))?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// [`write`](Self::write), reporting I/O failures against `path`.
    fn write_at<W: Write>(
        &self,
        records: &[CanonicalOrder],
        w: W,
        path: &Path,
    ) -> Result<(), ExportError> {
        match self.write(records, w) {
            Err(ExportError::Csv(err)) => {
                let csv::ErrorKind::Io(io) = err.kind() else {
                    return Err(ExportError::Csv(err));
                };
                let kind = io.kind();
                Err(ExportError::Io {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(kind, err),
                })
            }
            other => other,
        }
    }

    /// Export `records` to a CSV file at `destination`, replacing it.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::EmptyInput`] without touching the filesystem
    /// when `records` is empty, [`ExportError::Io`] when the file cannot be
    /// created or written, and [`ExportError::Csv`] when a row cannot be
    /// encoded.
    #[instrument(skip(self, records), fields(records = records.len(), destination = %destination.display()))]
    pub fn export_csv(
        &self,
        records: &[CanonicalOrder],
        destination: &Path,
    ) -> Result<(), ExportError> {
        if records.is_empty() {
            return Err(ExportError::EmptyInput);
        }

        let io_error = |source| ExportError::Io {
            path: destination.to_path_buf(),
            source,
        };

        let parent = match destination.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut staged = tempfile::Builder::new()
            .prefix(".orders-")
            .suffix(".csv.tmp")
            .tempfile_in(parent)
            .map_err(io_error)?;

        self.write_at(records, staged.as_file_mut(), destination)?;
        staged.as_file().sync_all().map_err(io_error)?;
        staged
            .persist(destination)
            .map_err(|err| io_error(err.error))?;

        info!("Wrote order report");
        Ok(())
    }
}
