//! Show the statement a date window renders to.

use admanager_orders_report::admanager::QueryError;
use admanager_orders_report::config::ReportConfig;
use tracing::info;

use crate::WindowArgs;

/// Log the rendered statement and its bound values.
///
/// # Errors
///
/// Returns an error if the window is empty or the limit is zero.
pub fn run(window: &WindowArgs, config: &ReportConfig) -> Result<(), QueryError> {
    let query = window.query(config)?;
    let statement = query.statement();

    info!(query = %statement.query, "Statement");
    for bound in &statement.values {
        info!(key = %bound.key, value = %bound.value.value, "Bound value");
    }
    Ok(())
}
