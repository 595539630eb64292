//! Core types for Ad Manager orders.
//!
//! This module provides type-safe wrappers for the order domain.

pub mod id;
pub mod money;
pub mod network;
pub mod order;
pub mod status;
pub mod timestamp;

pub use id::*;
pub use money::Money;
pub use network::{DEFAULT_ADMIN_HOST, NetworkCode, NetworkCodeError};
pub use order::{CanonicalOrder, OrderFields, OrderInvariantError};
pub use status::OrderStatus;
pub use timestamp::OrderTimestamp;
