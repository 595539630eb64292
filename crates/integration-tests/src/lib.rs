//! Integration tests for Ad Manager order reports.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p admanager-orders-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `end_to_end` - raw records through normalization to a CSV file
//! - `dump_source` - captured result pages through a full report run
//!
//! This library holds the order fixtures the tests share: the same order
//! rendered the way each API generation puts it on the wire.

use serde_json::{Value, json};

/// One order, independent of wire shape.
#[derive(Debug, Clone)]
pub struct OrderFixture {
    pub id: i64,
    pub name: String,
    /// `(year, month, day)` of the start date.
    pub start: (i64, i64, i64),
    /// `(year, month, day)` of the end date, if the order has one.
    pub end: Option<(i64, i64, i64)>,
    pub zone: String,
    pub micro_amount: i64,
}

impl OrderFixture {
    #[must_use]
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            start: (2024, 1, 2),
            end: Some((2024, 1, 20)),
            zone: "America/New_York".to_string(),
            micro_amount: 2_500_000_000,
        }
    }

    #[must_use]
    pub fn starting(mut self, year: i64, month: i64, day: i64) -> Self {
        self.start = (year, month, day);
        self
    }

    #[must_use]
    pub fn ending(mut self, year: i64, month: i64, day: i64) -> Self {
        self.end = Some((year, month, day));
        self
    }

    #[must_use]
    pub fn open_ended(mut self) -> Self {
        self.end = None;
        self
    }

    /// Client-path rendering: every scalar is text.
    #[must_use]
    pub fn legacy(&self) -> Value {
        let at = |(year, month, day): (i64, i64, i64)| {
            json!({
                "date": {"year": year.to_string(), "month": month.to_string(), "day": day.to_string()},
                "hour": "9", "minute": "15", "second": "0",
                "timeZoneID": self.zone
            })
        };
        let mut value = json!({
            "id": self.id.to_string(),
            "name": self.name,
            "advertiserId": "4001",
            "creatorId": "5001",
            "traffickerId": "5002",
            "currencyCode": "USD",
            "externalOrderId": "0",
            "notes": "Q1 flight",
            "lastModifiedByApp": "Goog_DFPUI",
            "status": "APPROVED",
            "isArchived": "false",
            "unlimitedEndDateTime": "false",
            "totalClicksDelivered": "12",
            "totalImpressionsDelivered": "3400",
            "startDateTime": at(self.start),
            "lastModifiedDateTime": at((2024, 1, 3)),
            "totalBudget": {"currencyCode": "USD", "microAmount": self.micro_amount.to_string()}
        });
        if let Some(end) = self.end {
            value["endDateTime"] = at(end);
        }
        value
    }

    /// OAuth2 rendering: native numbers and flags, text where the SDK kept it.
    #[must_use]
    pub fn oauth(&self) -> Value {
        let at = |(year, month, day): (i64, i64, i64)| {
            json!({
                "date": {"year": year, "month": month, "day": day},
                "hour": 9, "minute": 15, "second": 0,
                "timeZoneID": self.zone
            })
        };
        let mut value = json!({
            "id": self.id,
            "name": self.name,
            "advertiserId": 4001,
            "creatorId": 5001,
            "traffickerId": "5002",
            "currencyCode": "USD",
            "externalOrderId": 0,
            "notes": "Q1 flight",
            "lastModifiedByApp": "Goog_DFPUI",
            "status": "APPROVED",
            "isArchived": false,
            "unlimitedEndDateTime": "false",
            "totalClicksDelivered": 12,
            "totalImpressionsDelivered": 3400,
            "startDateTime": at(self.start),
            "lastModifiedDateTime": at((2024, 1, 3)),
            "totalBudget": {"currencyCode": "USD", "microAmount": self.micro_amount}
        });
        if let Some(end) = self.end {
            value["endDateTime"] = at(end);
        }
        value
    }

    /// SOAP object rendering: native scalars, wrapped text, `timeZoneId`.
    #[must_use]
    pub fn soap(&self) -> Value {
        let at = |(year, month, day): (i64, i64, i64)| {
            json!({
                "date": {"year": year, "month": month, "day": day},
                "hour": 9, "minute": 15, "second": 0,
                "timeZoneId": self.zone
            })
        };
        let mut value = json!({
            "id": self.id,
            "name": {"value": self.name},
            "advertiserId": 4001,
            "creatorId": 5001,
            "traffickerId": 5002,
            "currencyCode": "USD",
            "externalOrderId": {"value": "0"},
            "notes": {"value": "Q1 flight"},
            "lastModifiedByApp": "Goog_DFPUI",
            "status": "APPROVED",
            "isArchived": false,
            "unlimitedEndDateTime": false,
            "totalClicksDelivered": 12,
            "totalImpressionsDelivered": 3400,
            "startDateTime": at(self.start),
            "lastModifiedDateTime": at((2024, 1, 3)),
            "totalBudget": {"currencyCode": "USD", "microAmount": self.micro_amount},
            "appliedTeamIds": [],
            "programmatic": false
        });
        if let Some(end) = self.end {
            value["endDateTime"] = at(end);
        }
        value
    }
}
