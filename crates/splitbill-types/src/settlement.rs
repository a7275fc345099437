//! Settlement types produced by the netting engine.
//!
//! A [`Settlement`] is one directed payer → recipient transfer. Applying
//! every settlement in a run drives all participant balances to zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One directed money transfer between two participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settlement {
    /// Name of the paying participant (a debtor).
    pub payer: String,
    /// Name of the receiving participant (a creditor).
    pub recipient: String,
    /// Positive transfer amount, at most 2 decimal places.
    pub amount: Decimal,
}

impl Settlement {
    #[must_use]
    pub fn new(payer: impl Into<String>, recipient: impl Into<String>, amount: Decimal) -> Self {
        Self {
            payer: payer.into(),
            recipient: recipient.into(),
            amount,
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.payer, self.recipient, self.amount)
    }
}
