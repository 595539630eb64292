//! Ad Manager order retrieval.
//!
//! # Architecture
//!
//! - [`OrderSource`] is the seam to the remote order service. Auth,
//!   transport and retries live behind it; callers only see raw records or
//!   the source's own error, which is passed along untouched.
//! - [`OrderQuery`] / [`Statement`] describe the date window being fetched.
//! - [`DumpOrderSource`] serves a captured result page from disk, applying
//!   the statement's filter locally.
//!
//! # Example
//!
//! ```rust,ignore
//! use admanager_orders_report::admanager::{DumpOrderSource, OrderQuery, OrderSource};
//!
//! let source = DumpOrderSource::new("orders.json", None);
//! let query = OrderQuery::new(start, end, 500)?;
//! let records = source.get_orders_by_date_range(&query).await?;
//! ```

mod dump;
mod statement;
pub mod types;

use std::future::Future;

pub use dump::{DumpOrderSource, DumpSourceError};
pub use statement::{BoundValue, OrderQuery, QueryError, Statement, TextValue};
pub use types::{EndDate, RawOrderRecord, RawShape};

/// A service that returns the orders matching a query.
pub trait OrderSource {
    /// Error surfaced when the service cannot be reached or answers badly.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch one bounded page of orders whose end date falls in the window.
    ///
    /// # Errors
    ///
    /// Returns the source's own error type; it is never retried here.
    fn get_orders_by_date_range(
        &self,
        query: &OrderQuery,
    ) -> impl Future<Output = Result<Vec<RawOrderRecord>, Self::Error>> + Send;
}
