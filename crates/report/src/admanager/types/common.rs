//! Wire building blocks shared by every API generation.

use serde::Deserialize;

// =============================================================================
// Scalars
// =============================================================================

/// A boolean that arrives either natively or as the text `"true"`/`"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireBool {
    Native(bool),
    Text(String),
}

/// An integer that arrives either natively or as numeric text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WireInt {
    Native(i64),
    Text(String),
}

/// Text as the transport delivers it: plain, numeric, or wrapped in a
/// `{"value": ...}` object by the SOAP bindings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireText {
    Plain(String),
    Number(serde_json::Number),
    Wrapped { value: String },
}

impl WireText {
    /// Unwrap to plain text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Plain(text) | Self::Wrapped { value: text } => text,
            Self::Number(n) => n.to_string(),
        }
    }
}

// =============================================================================
// Structured values
// =============================================================================

/// Calendar date as year/month/day fields.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDate<N> {
    pub year: N,
    pub month: N,
    pub day: N,
}

/// Wall-clock date and time plus the zone it was recorded in.
///
/// The dict generations spell the zone key `timeZoneID`, the SOAP bindings
/// `timeZoneId`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDateTime<N> {
    pub date: RawDate<N>,
    pub hour: N,
    pub minute: N,
    pub second: N,
    #[serde(rename = "timeZoneID", alias = "timeZoneId", default)]
    pub time_zone_id: Option<String>,
}

/// Money as a currency code and an amount in micros.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMoney<N> {
    pub currency_code: String,
    pub micro_amount: N,
}
