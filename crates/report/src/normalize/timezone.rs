//! Time-zone resolution for order timestamps.

use chrono_tz::Tz;
use thiserror::Error;

/// A zone identifier the resolver does not know.
///
/// Never propagated: normalization logs it and keeps the timestamp naive.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time zone {0:?}")]
pub struct UnknownTimeZone(pub String);

/// Resolves zone identifiers such as `America/New_York`.
pub trait TimeZoneResolver {
    /// Look up a zone by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownTimeZone`] when the identifier is not recognised.
    fn resolve(&self, zone_id: &str) -> Result<Tz, UnknownTimeZone>;
}

/// Resolver backed by the IANA time-zone database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IanaTimeZones;

impl TimeZoneResolver for IanaTimeZones {
    fn resolve(&self, zone_id: &str) -> Result<Tz, UnknownTimeZone> {
        zone_id
            .trim()
            .parse::<Tz>()
            .map_err(|_| UnknownTimeZone(zone_id.to_owned()))
    }
}
