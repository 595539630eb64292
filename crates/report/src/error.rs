//! Unified error handling for report runs.

use thiserror::Error;

use crate::admanager::QueryError;
use crate::config::ConfigError;
use crate::export::ExportError;
use crate::normalize::RecordError;

/// Error type for a report run, one variant per stage.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Settings could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The date window or limit was rejected.
    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    /// The order source failed; its error is passed through unchanged.
    #[error("Order source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A record could not be normalized.
    #[error("Malformed order {0}")]
    Record(#[from] RecordError),

    /// The report could not be written.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

impl ReportError {
    /// Wrap an order source error.
    pub fn from_source<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Source(Box::new(error))
    }
}
