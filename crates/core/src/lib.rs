//! Ad Manager Orders Core - Shared types library.
//!
//! This crate provides the canonical order model used across all components:
//! - `report` - Order sources, normalization and CSV export
//! - `cli` - Command-line entry point
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no network access.
//! Every API generation is normalized into these types, so nothing here knows
//! about wire shapes.
//!
//! # Modules
//!
//! - [`types`] - Typed ids, money, timestamps, statuses and the canonical order

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
