//! The canonical, version-independent order record.

use thiserror::Error;

use super::{CompanyId, Money, NetworkCode, OrderId, OrderStatus, OrderTimestamp, UserId};

/// An order invariant that a record failed to satisfy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderInvariantError {
    #[error("order id must be positive (got {0})")]
    NonPositiveId(i64),

    #[error("{field} must be non-negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("totalBudget micro amount must be non-negative (got {0})")]
    NegativeBudget(i64),

    #[error("endDateTime {end} is before startDateTime {start}")]
    EndBeforeStart { start: String, end: String },
}

/// Field values of an order, before invariants are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFields {
    pub id: OrderId,
    pub name: String,
    pub advertiser_id: CompanyId,
    pub creator_id: UserId,
    pub trafficker_id: UserId,
    pub currency_code: String,
    pub external_order_id: String,
    pub notes: Option<String>,
    pub po_number: Option<String>,
    pub last_modified_by_app: String,
    pub status: OrderStatus,
    pub is_archived: bool,
    pub unlimited_end_date_time: bool,
    pub total_clicks_delivered: i64,
    pub total_impressions_delivered: i64,
    pub start_date_time: OrderTimestamp,
    pub end_date_time: Option<OrderTimestamp>,
    pub last_modified_date_time: OrderTimestamp,
    pub total_budget: Money,
}

/// A normalized order.
///
/// Only obtainable through [`TryFrom<OrderFields>`], so every value of this
/// type satisfies the order invariants. Fields are readable through `Deref`
/// and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalOrder(OrderFields);

impl TryFrom<OrderFields> for CanonicalOrder {
    type Error = OrderInvariantError;

    fn try_from(fields: OrderFields) -> Result<Self, Self::Error> {
        if fields.id.as_i64() <= 0 {
            return Err(OrderInvariantError::NonPositiveId(fields.id.as_i64()));
        }
        for (field, value) in [
            ("totalClicksDelivered", fields.total_clicks_delivered),
            ("totalImpressionsDelivered", fields.total_impressions_delivered),
        ] {
            if value < 0 {
                return Err(OrderInvariantError::NegativeCount { field, value });
            }
        }
        if fields.total_budget.micro_amount < 0 {
            return Err(OrderInvariantError::NegativeBudget(
                fields.total_budget.micro_amount,
            ));
        }
        if let Some(end) = &fields.end_date_time
            && end.is_before(&fields.start_date_time)
        {
            return Err(OrderInvariantError::EndBeforeStart {
                start: fields.start_date_time.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self(fields))
    }
}

impl std::ops::Deref for CanonicalOrder {
    type Target = OrderFields;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CanonicalOrder {
    /// Link to this order's detail page in the Ad Manager web UI.
    ///
    /// `admin_host` is the UI host and path prefix, usually
    /// [`DEFAULT_ADMIN_HOST`](super::DEFAULT_ADMIN_HOST).
    #[must_use]
    pub fn admin_url(&self, admin_host: &str, network: &NetworkCode) -> String {
        format!(
            "https://{}/{network}#delivery/OrderDetail/orderId={}",
            admin_host.trim_end_matches('/'),
            self.id
        )
    }
}
