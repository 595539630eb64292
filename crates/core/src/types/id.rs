//! Newtype IDs for type-safe entity references.
//!
//! Ad Manager identifies every entity with a 64-bit integer. Use the
//! `define_id!` macro to create wrappers that keep order, company and user
//! ids from being mixed up.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
/// - `Display` as plain digits
///
/// # Example
///
/// ```rust
/// # use admanager_orders_core::define_id;
/// define_id!(LineItemId);
/// define_id!(CreativeId);
///
/// let line_item = LineItemId::new(1);
/// let creative = CreativeId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: LineItemId = creative;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(OrderId);
// Advertisers are companies on the wire.
define_id!(CompanyId);
// Creators and traffickers are both users.
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_plain_digits() {
        assert_eq!(OrderId::new(123_456_789_012).to_string(), "123456789012");
    }

    #[test]
    fn test_id_round_trips_through_i64() {
        let id = UserId::from(42);
        assert_eq!(i64::from(id), 42);
        assert_eq!(id.as_i64(), 42);
    }
}
