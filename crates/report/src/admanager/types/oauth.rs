//! Orders as returned by the OAuth2 (refresh-token) library.
//!
//! Still dict-shaped, but the transport started decoding some scalars: a
//! flag may be `true` or `"true"`, a counter `42` or `"42"`, depending on
//! the field and the library release.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::common::{RawDateTime, RawMoney, WireBool, WireInt, WireText};

/// One order record from the OAuth2 library.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthOrder {
    pub id: WireInt,
    pub name: String,
    pub advertiser_id: WireInt,
    pub creator_id: WireInt,
    pub trafficker_id: WireInt,
    pub currency_code: String,
    pub external_order_id: WireText,
    pub notes: Option<String>,
    pub po_number: Option<String>,
    pub last_modified_by_app: String,
    pub status: String,
    pub is_archived: WireBool,
    pub unlimited_end_date_time: WireBool,
    pub total_clicks_delivered: WireInt,
    pub total_impressions_delivered: WireInt,
    pub start_date_time: RawDateTime<WireInt>,
    pub end_date_time: Option<RawDateTime<WireInt>>,
    pub last_modified_date_time: RawDateTime<WireInt>,
    pub total_budget: RawMoney<WireInt>,
    /// Fields present on the wire that the canonical order does not carry.
    #[serde(flatten)]
    pub unmapped: BTreeMap<String, serde_json::Value>,
}
