//! Conversions from wire shapes to canonical order fields.
//!
//! One module per API generation; the helpers below carry the coercion
//! rules they share.

mod legacy;
mod oauth;
mod soap;

use std::collections::BTreeMap;

use admanager_orders_core::{Money, OrderTimestamp};
use chrono::{NaiveDate, NaiveDateTime, TimeZone};
use tracing::{debug, warn};

use super::{MalformedRecordError, TimeZoneResolver};
use crate::admanager::RawShape;
use crate::admanager::types::{RawDateTime, RawMoney, WireBool, WireInt};

pub use legacy::convert_legacy_order;
pub use oauth::convert_oauth_order;
pub use soap::convert_soap_order;

// =============================================================================
// Scalars
// =============================================================================

/// An integer as some generation puts it on the wire.
pub trait WireInteger {
    /// The integer value, or the raw text that failed to parse.
    fn to_i64(&self) -> Result<i64, String>;
}

impl WireInteger for i64 {
    fn to_i64(&self) -> Result<i64, String> {
        Ok(*self)
    }
}

impl WireInteger for String {
    fn to_i64(&self) -> Result<i64, String> {
        self.trim().parse().map_err(|_| self.clone())
    }
}

impl WireInteger for WireInt {
    fn to_i64(&self) -> Result<i64, String> {
        match self {
            Self::Native(n) => Ok(*n),
            Self::Text(text) => text.to_i64(),
        }
    }
}

/// Read an integer field.
pub fn int<N: WireInteger>(field: &'static str, raw: &N) -> Result<i64, MalformedRecordError> {
    raw.to_i64()
        .map_err(|value| MalformedRecordError::InvalidValue {
            field,
            value,
            expected: "an integer",
        })
}

/// The text-flag rule: only the exact text `"true"` is true.
pub fn truthy(raw: &str) -> bool {
    raw == "true"
}

/// Read a flag that may be native or text.
pub fn flag(raw: &WireBool) -> bool {
    match raw {
        WireBool::Native(value) => *value,
        WireBool::Text(text) => truthy(text),
    }
}

// =============================================================================
// Structured values
// =============================================================================

/// Rebuild a timestamp from its wall-clock fields and zone identifier.
///
/// A missing or unknown zone, or a wall-clock time the zone skips over,
/// leaves the timestamp naive and logs a warning.
pub fn convert_date_time<N, Z>(
    field: &'static str,
    raw: &RawDateTime<N>,
    zones: &Z,
) -> Result<OrderTimestamp, MalformedRecordError>
where
    N: WireInteger,
    Z: TimeZoneResolver + ?Sized,
{
    let year = int(field, &raw.date.year)?;
    let month = int(field, &raw.date.month)?;
    let day = int(field, &raw.date.day)?;
    let hour = int(field, &raw.hour)?;
    let minute = int(field, &raw.minute)?;
    let second = int(field, &raw.second)?;

    let wall_clock = wall_clock(year, month, day, hour, minute, second).ok_or_else(|| {
        MalformedRecordError::InvalidValue {
            field,
            value: format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"),
            expected: "a calendar date and time",
        }
    })?;

    Ok(attach_zone(field, wall_clock, raw.time_zone_id.as_deref(), zones))
}

fn wall_clock(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    second: i64,
) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(
        i32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )?
    .and_hms_opt(
        u32::try_from(hour).ok()?,
        u32::try_from(minute).ok()?,
        u32::try_from(second).ok()?,
    )
}

fn attach_zone<Z>(
    field: &'static str,
    wall_clock: NaiveDateTime,
    zone_id: Option<&str>,
    zones: &Z,
) -> OrderTimestamp
where
    Z: TimeZoneResolver + ?Sized,
{
    let Some(zone_id) = zone_id else {
        warn!(field, "Timestamp has no time zone, keeping it naive");
        return OrderTimestamp::Naive(wall_clock);
    };

    let zone = match zones.resolve(zone_id) {
        Ok(zone) => zone,
        Err(error) => {
            warn!(field, %error, "Keeping timestamp naive");
            return OrderTimestamp::Naive(wall_clock);
        }
    };

    // Ambiguous times (clocks going back) take the earlier instant.
    zone.from_local_datetime(&wall_clock).earliest().map_or_else(
        || {
            warn!(field, %zone, %wall_clock, "Wall-clock time does not exist in zone, keeping it naive");
            OrderTimestamp::Naive(wall_clock)
        },
        OrderTimestamp::Zoned,
    )
}

/// Flatten a money payload, keeping the micro-amount as an integer.
pub fn convert_money<N: WireInteger>(raw: &RawMoney<N>) -> Result<Money, MalformedRecordError> {
    Ok(Money::new(
        raw.currency_code.clone(),
        int("totalBudget.microAmount", &raw.micro_amount)?,
    ))
}

/// Note wire fields that the canonical order has no place for.
pub fn log_unmapped(shape: RawShape, unmapped: &BTreeMap<String, serde_json::Value>) {
    if !unmapped.is_empty() {
        debug!(
            %shape,
            fields = ?unmapped.keys().collect::<Vec<_>>(),
            "Ignoring unmapped order fields"
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Timelike;
    use serde_json::json;
    use tracing_test::traced_test;

    use super::*;
    use crate::normalize::IanaTimeZones;

    fn date_time(zone: &str, hour: i64) -> RawDateTime<i64> {
        serde_json::from_value(json!({
            "date": {"year": 2024, "month": 3, "day": 10},
            "hour": hour, "minute": 30, "second": 15,
            "timeZoneID": zone
        }))
        .unwrap()
    }

    #[test]
    fn test_integer_text_is_trimmed() {
        assert_eq!(int("id", &" 42 ".to_string()).unwrap(), 42);
    }

    #[test]
    fn test_non_numeric_text_is_malformed() {
        let err = int("totalClicksDelivered", &"12a".to_string()).unwrap_err();
        assert!(matches!(
            err,
            MalformedRecordError::InvalidValue {
                field: "totalClicksDelivered",
                ref value,
                ..
            } if value == "12a"
        ));
    }

    #[test]
    fn test_known_zone_gives_zoned_timestamp() {
        let ts = convert_date_time("startDateTime", &date_time("America/Chicago", 9), &IanaTimeZones)
            .unwrap();
        assert_eq!(ts.zone(), Some(chrono_tz::America::Chicago));
        assert_eq!(ts.to_string(), "2024-03-10 09:30:15-05:00");
    }

    #[test]
    #[traced_test]
    fn test_unknown_zone_keeps_wall_clock() {
        let ts = convert_date_time("startDateTime", &date_time("Not/AZone", 9), &IanaTimeZones)
            .unwrap();
        assert!(ts.zone().is_none());
        let local = ts.local();
        assert_eq!(local.date(), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!((local.hour(), local.minute(), local.second()), (9, 30, 15));
        assert!(logs_contain("Keeping timestamp naive"));
        assert!(logs_contain("Not/AZone"));
    }

    #[test]
    #[traced_test]
    fn test_missing_zone_is_logged() {
        let mut raw = date_time("UTC", 9);
        raw.time_zone_id = None;
        let ts = convert_date_time("lastModifiedDateTime", &raw, &IanaTimeZones).unwrap();
        assert!(ts.zone().is_none());
        assert!(logs_contain("Timestamp has no time zone"));
    }

    #[test]
    #[traced_test]
    fn test_skipped_wall_clock_stays_naive() {
        // 2024-03-10 02:30 never happened in Chicago (DST starts at 02:00).
        let ts = convert_date_time("startDateTime", &date_time("America/Chicago", 2), &IanaTimeZones)
            .unwrap();
        assert!(ts.zone().is_none());
        assert_eq!(ts.to_string(), "2024-03-10 02:30:15");
        assert!(logs_contain("does not exist in zone"));
    }

    #[test]
    fn test_impossible_date_is_malformed() {
        let raw: RawDateTime<i64> = serde_json::from_value(json!({
            "date": {"year": 2023, "month": 2, "day": 29},
            "hour": 0, "minute": 0, "second": 0,
            "timeZoneID": "UTC"
        }))
        .unwrap();
        assert!(matches!(
            convert_date_time("endDateTime", &raw, &IanaTimeZones),
            Err(MalformedRecordError::InvalidValue {
                field: "endDateTime",
                ..
            })
        ));
    }

    #[test]
    fn test_money_keeps_large_micro_amounts_exact() {
        let raw = RawMoney {
            currency_code: "USD".to_string(),
            micro_amount: "1000000000000123".to_string(),
        };
        let money = convert_money(&raw).unwrap();
        assert_eq!(money.micro_amount, 1_000_000_000_000_123);
    }
}
