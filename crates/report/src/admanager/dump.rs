//! Order source backed by a captured result page.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use super::{EndDate, OrderQuery, OrderSource, RawOrderRecord, RawShape};

/// Errors reading a result page from disk.
#[derive(Debug, Error)]
pub enum DumpSourceError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a JSON array or result page.
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A result page as the order service returns it, or just its records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultPage {
    Records(Vec<Value>),
    Page {
        #[serde(default)]
        results: Vec<Value>,
    },
}

impl ResultPage {
    fn into_records(self) -> Vec<Value> {
        match self {
            Self::Records(records) => records,
            Self::Page { results } => results,
        }
    }
}

/// Reads orders from a JSON file captured from the order service.
///
/// The file holds either an array of order records or a result page object
/// with a `results` array. Records are tagged with `shape` when given, and
/// sniffed one by one otherwise.
#[derive(Debug, Clone)]
pub struct DumpOrderSource {
    path: PathBuf,
    shape: Option<RawShape>,
}

impl DumpOrderSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, shape: Option<RawShape>) -> Self {
        Self {
            path: path.into(),
            shape,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tag(&self, payload: Value) -> RawOrderRecord {
        match self.shape {
            Some(shape) => RawOrderRecord::new(shape, payload),
            None => RawOrderRecord::sniffed(payload),
        }
    }
}

impl OrderSource for DumpOrderSource {
    type Error = DumpSourceError;

    #[instrument(skip(self), fields(path = %self.path.display(), statement = %query.statement()))]
    async fn get_orders_by_date_range(
        &self,
        query: &OrderQuery,
    ) -> Result<Vec<RawOrderRecord>, Self::Error> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| DumpSourceError::Io {
                path: self.path.clone(),
                source,
            })?;
        let page: ResultPage =
            serde_json::from_str(&content).map_err(|source| DumpSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let all = page.into_records();
        let total = all.len();
        let limit = usize::try_from(query.limit()).unwrap_or(usize::MAX);

        // Orders without an end date never match `endDateTime >= :start`.
        // Records whose end date cannot be read are passed on so that
        // normalization reports them.
        let records: Vec<RawOrderRecord> = all
            .into_iter()
            .map(|payload| self.tag(payload))
            .enumerate()
            .filter(|(position, record)| match record.end_date() {
                EndDate::On(end) => query.contains(end),
                EndDate::Missing => false,
                EndDate::Unreadable => {
                    warn!(
                        position,
                        shape = %record.shape(),
                        "Order end date is unreadable, passing record on as malformed"
                    );
                    true
                }
            })
            .map(|(_, record)| record)
            .take(limit)
            .collect();

        debug!(total, matched = records.len(), "Filtered captured orders");
        info!(count = records.len(), "Fetched orders");
        Ok(records)
    }
}
