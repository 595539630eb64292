//! Ad Manager order report library.
//!
//! Turns order records from any of the three Ad Manager API generations
//! into [`CanonicalOrder`](admanager_orders_core::CanonicalOrder)s and writes
//! them as a CSV report.
//!
//! - [`admanager`] - raw wire shapes, the order source seam and queries
//! - [`normalize`] - per-generation conversion to canonical orders
//! - [`export`] - CSV writing
//! - [`report`] - the fetch, normalize, export run
//! - [`config`] - environment configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admanager;
pub mod config;
pub mod error;
pub mod export;
pub mod normalize;
pub mod report;

pub use error::ReportError;
pub use report::{ReportSummary, generate_report};
