//! Raw order records and the wire shapes of each API generation.
//!
//! A [`RawOrderRecord`] is the record exactly as the order source received
//! it, tagged with the [`RawShape`] it should be read as. Decoding into one
//! of the typed shapes happens during normalization, so a record that does
//! not fit its shape is reported as malformed rather than as a source error.

mod common;
mod legacy;
mod oauth;
mod soap;

pub use common::{RawDate, RawDateTime, RawMoney, WireBool, WireInt, WireText};
pub use legacy::LegacyOrder;
pub use oauth::OAuthOrder;
pub use soap::SoapOrder;

use chrono::NaiveDate;
use serde_json::Value;

/// Which API generation a raw record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawShape {
    /// Client-path library: dicts with every scalar as text.
    LegacyDict,
    /// OAuth2 library: dicts with a mix of text and native scalars.
    OAuthDict,
    /// SOAP bindings: natively typed objects with wrapped text.
    SoapObject,
}

impl RawShape {
    /// Guess the generation of a record from its structure.
    ///
    /// - A `timeZoneId` key (lower-case `d`) only exists in SOAP objects.
    /// - A text `id` means the all-text client-path dicts.
    /// - Anything else is read as an OAuth2 dict, the most lenient shape.
    #[must_use]
    pub fn sniff(value: &Value) -> Self {
        if value
            .get("startDateTime")
            .and_then(|dt| dt.get("timeZoneId"))
            .is_some()
        {
            Self::SoapObject
        } else if value.get("id").is_some_and(Value::is_string) {
            Self::LegacyDict
        } else {
            Self::OAuthDict
        }
    }

    /// Short name used in logs and errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LegacyDict => "legacy-dict",
            Self::OAuthDict => "oauth-dict",
            Self::SoapObject => "soap-object",
        }
    }
}

impl std::fmt::Display for RawShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order record as received, plus the shape to read it as.
#[derive(Debug, Clone, PartialEq)]
pub struct RawOrderRecord {
    shape: RawShape,
    payload: Value,
}

impl RawOrderRecord {
    /// Wrap a payload that is known to come from `shape`.
    #[must_use]
    pub const fn new(shape: RawShape, payload: Value) -> Self {
        Self { shape, payload }
    }

    /// Wrap a payload whose shape is guessed with [`RawShape::sniff`].
    #[must_use]
    pub fn sniffed(payload: Value) -> Self {
        let shape = RawShape::sniff(&payload);
        Self { shape, payload }
    }

    #[must_use]
    pub const fn shape(&self) -> RawShape {
        self.shape
    }

    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    /// Split into shape and payload.
    #[must_use]
    pub fn into_parts(self) -> (RawShape, Value) {
        (self.shape, self.payload)
    }

    /// Calendar date of `endDateTime`, read leniently from any shape.
    #[must_use]
    pub fn end_date(&self) -> EndDate {
        let Some(order) = self.payload.as_object() else {
            return EndDate::Unreadable;
        };
        match order.get("endDateTime") {
            None | Some(Value::Null) => EndDate::Missing,
            Some(end) => read_date(end).map_or(EndDate::Unreadable, EndDate::On),
        }
    }
}

/// What a record says about its end date before it is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndDate {
    /// The order has no end date.
    Missing,
    /// The order ends on this calendar date.
    On(NaiveDate),
    /// `endDateTime` is present but not a valid date, or the record is not
    /// an object at all.
    Unreadable,
}

fn read_date(end: &Value) -> Option<NaiveDate> {
    let date = end.get("date")?;
    let field = |name: &str| -> Option<i64> {
        match date.get(name)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    };
    NaiveDate::from_ymd_opt(
        i32::try_from(field("year")?).ok()?,
        u32::try_from(field("month")?).ok()?,
        u32::try_from(field("day")?).ok()?,
    )
}
