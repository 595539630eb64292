//! Orders as returned by the client-path (pre-OAuth) library.
//!
//! This generation hands back plain dicts in which every scalar is text:
//! ids are `"12345"`, flags are `"true"`/`"false"`, and counters are numeric
//! strings. Dates are nested dicts whose fields are numeric strings too.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::common::{RawDateTime, RawMoney};

/// One order record from the client-path library.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyOrder {
    pub id: String,
    pub name: String,
    pub advertiser_id: String,
    pub creator_id: String,
    pub trafficker_id: String,
    pub currency_code: String,
    pub external_order_id: String,
    pub notes: Option<String>,
    pub po_number: Option<String>,
    pub last_modified_by_app: String,
    pub status: String,
    pub is_archived: String,
    pub unlimited_end_date_time: String,
    pub total_clicks_delivered: String,
    pub total_impressions_delivered: String,
    pub start_date_time: RawDateTime<String>,
    pub end_date_time: Option<RawDateTime<String>>,
    pub last_modified_date_time: RawDateTime<String>,
    pub total_budget: RawMoney<String>,
    /// Fields present on the wire that the canonical order does not carry.
    #[serde(flatten)]
    pub unmapped: BTreeMap<String, serde_json::Value>,
}
