//! Participant model.
//!
//! A participant carries the share they are responsible for (`expense`)
//! and what they actually paid (`payment`). The signed difference is the
//! balance the engine nets out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// One person in a bill split.
///
/// Name uniqueness within a group is enforced by the roster, not here.
/// Both amounts are non-negative with 2-digit currency precision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    /// Opaque unique identifier, stable across the session.
    pub id: ParticipantId,
    /// Display name, unique among current participants.
    pub name: String,
    /// Amount this person is responsible for.
    pub expense: Decimal,
    /// Amount this person actually paid.
    pub payment: Decimal,
}

impl Participant {
    /// Create a participant with a fresh ID.
    #[must_use]
    pub fn new(name: impl Into<String>, expense: Decimal, payment: Decimal) -> Self {
        Self {
            id: ParticipantId::new(),
            name: name.into(),
            expense,
            payment,
        }
    }

    /// Net balance: `expense - payment`.
    ///
    /// Positive means this person still owes money into the pool (debtor),
    /// negative means they are owed money (creditor).
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.expense - self.payment
    }

    /// Whether this participant is already settled (balance of zero).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.balance().is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_sign_convention() {
        let debtor = Participant::new("Bob", Decimal::new(50, 0), Decimal::ZERO);
        assert_eq!(debtor.balance(), Decimal::new(50, 0));

        let creditor = Participant::new("Alice", Decimal::new(50, 0), Decimal::new(100, 0));
        assert_eq!(creditor.balance(), Decimal::new(-50, 0));
    }

    #[test]
    fn settled_when_expense_equals_payment() {
        let p = Participant::new("Eve", Decimal::new(2857, 2), Decimal::new(2857, 2));
        assert!(p.is_settled());
        assert_eq!(p.balance(), Decimal::ZERO);
    }

    #[test]
    fn participant_serde_roundtrip() {
        let p = Participant::new("Charlie", Decimal::new(4500, 2), Decimal::new(30, 0));
        let json = serde_json::to_string(&p).unwrap();
        let back: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
