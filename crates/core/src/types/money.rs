//! Monetary amounts in micro units.
//!
//! Ad Manager expresses money as an integer number of micros (one millionth
//! of the currency unit). The amount is kept as that integer end to end.

/// A budget or price with its currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    /// ISO 4217 currency code (e.g., "USD").
    pub currency_code: String,
    /// Amount multiplied by 1,000,000.
    pub micro_amount: i64,
}

impl Money {
    /// Create a new money value.
    #[must_use]
    pub fn new(currency_code: impl Into<String>, micro_amount: i64) -> Self {
        Self {
            currency_code: currency_code.into(),
            micro_amount,
        }
    }
}
