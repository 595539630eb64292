//! Date-window queries and the statement the order service executes.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use thiserror::Error;

/// Format of bound date values in a statement.
const BOUND_VALUE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors building an [`OrderQuery`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The window is empty or inverted.
    #[error("query window is empty: start {start} must be before end {end}")]
    EmptyWindow { start: NaiveDate, end: NaiveDate },

    /// A limit of zero would never return anything.
    #[error("query limit must be positive")]
    ZeroLimit,
}

/// Orders whose end date falls in `[start, end)`, at most `limit` of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderQuery {
    start: NaiveDate,
    end: NaiveDate,
    limit: u32,
}

impl OrderQuery {
    /// Build a query over an explicit window.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyWindow`] unless `start < end`, and
    /// [`QueryError::ZeroLimit`] for a zero limit.
    pub fn new(start: NaiveDate, end: NaiveDate, limit: u32) -> Result<Self, QueryError> {
        if start >= end {
            return Err(QueryError::EmptyWindow { start, end });
        }
        if limit == 0 {
            return Err(QueryError::ZeroLimit);
        }
        Ok(Self { start, end, limit })
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Whether an order ending on `end_date` falls inside the window.
    #[must_use]
    pub fn contains(&self, end_date: NaiveDate) -> bool {
        self.start <= end_date && end_date < self.end
    }

    /// Render the query as a filter statement with bound values.
    #[must_use]
    pub fn statement(&self) -> Statement {
        let bind = |key: &'static str, date: NaiveDate| BoundValue {
            key,
            value: TextValue {
                xsi_type: "TextValue",
                value: date
                    .and_time(NaiveTime::MIN)
                    .format(BOUND_VALUE_FORMAT)
                    .to_string(),
            },
        };
        Statement {
            query: format!(
                "WHERE endDateTime >= :start AND endDateTime < :end LIMIT {}",
                self.limit
            ),
            values: vec![bind("start", self.start), bind("end", self.end)],
        }
    }
}

/// A filter statement in the form the order service accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    pub query: String,
    pub values: Vec<BoundValue>,
}

/// A named value bound into a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundValue {
    pub key: &'static str,
    pub value: TextValue,
}

/// Text payload of a bound value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextValue {
    pub xsi_type: &'static str,
    pub value: String,
}

impl std::fmt::Display for OrderQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}) limit {}", self.start, self.end, self.limit)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.query)?;
        for bound in &self.values {
            write!(f, " [{}={}]", bound.key, bound.value.value)?;
        }
        Ok(())
    }
}
