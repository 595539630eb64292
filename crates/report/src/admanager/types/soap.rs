//! Orders as returned by the SOAP object bindings.
//!
//! Scalars are natively typed. Text fields may come wrapped in a
//! `{"value": ...}` object, and the zone key is spelled `timeZoneId`.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::common::{RawDateTime, RawMoney, WireText};

/// One order object from the SOAP bindings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoapOrder {
    pub id: i64,
    pub name: WireText,
    pub advertiser_id: i64,
    pub creator_id: i64,
    pub trafficker_id: i64,
    pub currency_code: WireText,
    pub external_order_id: WireText,
    pub notes: Option<WireText>,
    pub po_number: Option<WireText>,
    pub last_modified_by_app: WireText,
    pub status: WireText,
    pub is_archived: bool,
    pub unlimited_end_date_time: bool,
    pub total_clicks_delivered: i64,
    pub total_impressions_delivered: i64,
    pub start_date_time: RawDateTime<i64>,
    pub end_date_time: Option<RawDateTime<i64>>,
    pub last_modified_date_time: RawDateTime<i64>,
    pub total_budget: RawMoney<i64>,
    /// Fields present on the wire that the canonical order does not carry.
    #[serde(flatten)]
    pub unmapped: BTreeMap<String, serde_json::Value>,
}
