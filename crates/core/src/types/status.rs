//! Order workflow status.

use serde::{Serialize, Serializer};

/// Approval status of an order.
///
/// Maps to Ad Manager's `OrderStatus` values. Values the enum does not know
/// about are kept verbatim in [`OrderStatus::Other`] so they still reach the
/// report unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Draft,
    PendingApproval,
    Approved,
    Disapproved,
    Paused,
    Canceled,
    Deleted,
    Other(String),
}

impl OrderStatus {
    /// The wire spelling of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "DRAFT",
            Self::PendingApproval => "PENDING_APPROVAL",
            Self::Approved => "APPROVED",
            Self::Disapproved => "DISAPPROVED",
            Self::Paused => "PAUSED",
            Self::Canceled => "CANCELED",
            Self::Deleted => "DELETED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "DRAFT" => Self::Draft,
            "PENDING_APPROVAL" => Self::PendingApproval,
            "APPROVED" => Self::Approved,
            "DISAPPROVED" => Self::Disapproved,
            "PAUSED" => Self::Paused,
            "CANCELED" => Self::Canceled,
            "DELETED" => Self::Deleted,
            _ => Self::Other(raw),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OrderStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
