//! Record normalization: raw order records to [`CanonicalOrder`]s.
//!
//! Every API generation goes through [`normalize`]. The record's
//! [`RawShape`] picks the typed wire struct it is decoded into, and a
//! per-shape conversion maps that struct field by field onto the canonical
//! order. Coercion rules:
//!
//! - Text flags are `true` only when they read exactly `"true"`.
//! - Numeric text must parse as an integer, or the record is malformed.
//! - Timestamps whose zone cannot be resolved stay naive (logged, not fatal).
//! - A missing `endDateTime` stays missing.
//! - Budgets keep their integer micro-amount.

mod conversions;
mod timezone;

use admanager_orders_core::{CanonicalOrder, OrderInvariantError};
use thiserror::Error;
use tracing::{info, warn};

use crate::admanager::{RawOrderRecord, RawShape};

pub use timezone::{IanaTimeZones, TimeZoneResolver, UnknownTimeZone};

/// A raw record that cannot become a canonical order.
#[derive(Debug, Error)]
pub enum MalformedRecordError {
    /// A required field is missing or has the wrong JSON type for the shape.
    #[error("record does not match the {shape} shape: {source}")]
    Shape {
        shape: RawShape,
        source: serde_json::Error,
    },

    /// A field is present but its value cannot be converted.
    #[error("field `{field}`: cannot read {value:?} as {expected}")]
    InvalidValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// The converted values break an order invariant.
    #[error(transparent)]
    Invariant(#[from] OrderInvariantError),
}

/// Normalize one raw record.
///
/// # Errors
///
/// Returns [`MalformedRecordError`] if a required field is absent, a value
/// cannot be converted, or the result breaks an order invariant.
pub fn normalize<Z>(
    record: RawOrderRecord,
    zones: &Z,
) -> Result<CanonicalOrder, MalformedRecordError>
where
    Z: TimeZoneResolver + ?Sized,
{
    let (shape, payload) = record.into_parts();
    let fields = match shape {
        RawShape::LegacyDict => conversions::convert_legacy_order(decode(shape, payload)?, zones)?,
        RawShape::OAuthDict => conversions::convert_oauth_order(decode(shape, payload)?, zones)?,
        RawShape::SoapObject => conversions::convert_soap_order(decode(shape, payload)?, zones)?,
    };
    Ok(CanonicalOrder::try_from(fields)?)
}

fn decode<T: serde::de::DeserializeOwned>(
    shape: RawShape,
    payload: serde_json::Value,
) -> Result<T, MalformedRecordError> {
    serde_json::from_value(payload).map_err(|source| MalformedRecordError::Shape { shape, source })
}

// =============================================================================
// Batches
// =============================================================================

/// What to do when a record in a batch is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchPolicy {
    /// Stop at the first malformed record.
    #[default]
    Abort,
    /// Log the record, leave it out, and carry on.
    Skip,
}

/// A malformed record and its position in the batch.
#[derive(Debug, Error)]
#[error("record #{index}: {source}")]
pub struct RecordError {
    pub index: usize,
    pub source: MalformedRecordError,
}

/// Outcome of normalizing a batch.
#[derive(Debug, Default)]
pub struct NormalizedBatch {
    /// Canonical orders, in input order.
    pub orders: Vec<CanonicalOrder>,
    /// Records left out under [`BatchPolicy::Skip`].
    pub skipped: Vec<RecordError>,
}

/// Normalize every record of a batch.
///
/// # Errors
///
/// Under [`BatchPolicy::Abort`], returns the first malformed record.
/// [`BatchPolicy::Skip`] never fails.
pub fn normalize_batch<I, Z>(
    records: I,
    zones: &Z,
    policy: BatchPolicy,
) -> Result<NormalizedBatch, RecordError>
where
    I: IntoIterator<Item = RawOrderRecord>,
    Z: TimeZoneResolver + ?Sized,
{
    let mut batch = NormalizedBatch::default();

    for (index, record) in records.into_iter().enumerate() {
        match normalize(record, zones) {
            Ok(order) => batch.orders.push(order),
            Err(source) => {
                let error = RecordError { index, source };
                match policy {
                    BatchPolicy::Abort => return Err(error),
                    BatchPolicy::Skip => {
                        warn!(%error, "Skipping malformed order record");
                        batch.skipped.push(error);
                    }
                }
            }
        }
    }

    info!(
        normalized = batch.orders.len(),
        skipped = batch.skipped.len(),
        "Normalized order records"
    );
    Ok(batch)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn legacy(id: &str, archived: &str) -> RawOrderRecord {
        let date_time = |day: &str| {
            json!({
                "date": {"year": "2024", "month": "4", "day": day},
                "hour": "0", "minute": "0", "second": "0",
                "timeZoneID": "UTC"
            })
        };
        RawOrderRecord::new(
            RawShape::LegacyDict,
            json!({
                "id": id,
                "name": "Order",
                "advertiserId": "1",
                "creatorId": "2",
                "traffickerId": "3",
                "currencyCode": "USD",
                "externalOrderId": "0",
                "lastModifiedByApp": "Goog_DFPUI",
                "status": "APPROVED",
                "isArchived": archived,
                "unlimitedEndDateTime": "false",
                "totalClicksDelivered": "0",
                "totalImpressionsDelivered": "0",
                "startDateTime": date_time("1"),
                "lastModifiedDateTime": date_time("2"),
                "totalBudget": {"currencyCode": "USD", "microAmount": "0"}
            }),
        )
    }

    #[test]
    fn test_truthy_string_rule() {
        for (raw, expected) in [
            ("true", true),
            ("false", false),
            ("True", false),
            ("TRUE", false),
            ("1", false),
            ("", false),
            (" true", false),
        ] {
            let order = normalize(legacy("7", raw), &IanaTimeZones).unwrap();
            assert_eq!(order.is_archived, expected, "isArchived = {raw:?}");
        }
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let record = RawOrderRecord::new(RawShape::SoapObject, legacy("7", "true").payload().clone());
        let err = normalize(record, &IanaTimeZones).unwrap_err();
        assert!(matches!(
            err,
            MalformedRecordError::Shape {
                shape: RawShape::SoapObject,
                ..
            }
        ));
    }

    #[test]
    fn test_batch_abort_reports_index() {
        let records = vec![legacy("1", "false"), legacy("x", "false"), legacy("3", "false")];
        let err = normalize_batch(records, &IanaTimeZones, BatchPolicy::Abort).unwrap_err();
        assert_eq!(err.index, 1);
        assert!(matches!(
            err.source,
            MalformedRecordError::InvalidValue { field: "id", .. }
        ));
    }

    #[test]
    fn test_batch_skip_keeps_the_rest_in_order() {
        let records = vec![legacy("1", "false"), legacy("x", "false"), legacy("3", "false")];
        let batch = normalize_batch(records, &IanaTimeZones, BatchPolicy::Skip).unwrap();
        let ids: Vec<i64> = batch.orders.iter().map(|o| o.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].index, 1);
    }

    #[test]
    fn test_non_positive_id_breaks_invariant() {
        let err = normalize(legacy("0", "false"), &IanaTimeZones).unwrap_err();
        assert!(matches!(
            err,
            MalformedRecordError::Invariant(OrderInvariantError::NonPositiveId(0))
        ));
    }
}
