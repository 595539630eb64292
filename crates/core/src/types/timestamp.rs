//! Order timestamps, with or without a resolved time zone.

use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// Wall-clock format shared by both timestamp variants.
const WALL_CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in time attached to an order.
///
/// Ad Manager sends wall-clock fields plus a zone identifier. When the
/// identifier resolves, the timestamp is [`Zoned`](Self::Zoned); otherwise
/// the wall-clock fields are kept as [`Naive`](Self::Naive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTimestamp {
    Zoned(DateTime<Tz>),
    Naive(NaiveDateTime),
}

impl OrderTimestamp {
    /// The wall-clock reading in the timestamp's own zone.
    #[must_use]
    pub fn local(&self) -> NaiveDateTime {
        match self {
            Self::Zoned(dt) => dt.naive_local(),
            Self::Naive(dt) => *dt,
        }
    }

    /// The resolved zone, if any.
    #[must_use]
    pub fn zone(&self) -> Option<Tz> {
        match self {
            Self::Zoned(dt) => Some(dt.timezone()),
            Self::Naive(_) => None,
        }
    }

    /// Whether `self` is strictly earlier than `other`.
    ///
    /// Two zoned timestamps compare as instants. If either side is naive
    /// there is no offset to correct for, so wall-clock readings are used.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Zoned(a), Self::Zoned(b)) => a < b,
            _ => self.local() < other.local(),
        }
    }
}

impl std::fmt::Display for OrderTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Zoned(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%:z")),
            Self::Naive(dt) => write!(f, "{}", dt.format(WALL_CLOCK_FORMAT)),
        }
    }
}

impl Serialize for OrderTimestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
