//! Pure deterministic greedy netting.
//!
//! The core settlement function: takes a bill total and a participant
//! list and produces a `Vec<Settlement>`. This is the **only** function
//! the engine exposes — no side effects, no persistence, no caller-data
//! mutation.
//!
//! ```text
//! settle(total_expense, participants) -> Vec<Settlement>
//! ```
//!
//! ## Ordering
//!
//! Creditors and debtors are walked strictly in the order participants
//! were supplied (filtered, not re-sorted). Reordering the input changes
//! the transfer list; the tests pin this exactly.

use rust_decimal::Decimal;
use splitbill_types::money::{emit_amount, round_unit};
use splitbill_types::{Participant, Result, Settlement, SplitError};
use tracing::{debug, warn};

/// Per-call working copy of one participant's running balance.
///
/// The engine never touches the caller's [`Participant`] records; all
/// mutation happens on these.
struct WorkingBalance {
    name: String,
    balance: Decimal,
}

/// Deterministic greedy netting: compute the transfers that zero every
/// participant's balance.
///
/// ## Algorithm
///
/// 1. Validate that expenses and payments both reconcile with
///    `total_expense` (nearest whole currency unit)
/// 2. Compute `balance = expense - payment` per participant on a local
///    working copy
/// 3. Stable-partition into creditors (balance < 0) and debtors
///    (balance > 0), preserving input order
/// 4. For each creditor in order, drain debtors in order with
///    `transfer = min(owed, debtor.balance)` until the creditor is whole
/// 5. Round each transfer only at emission; running balances stay at
///    full precision so the last transfer touching a participant absorbs
///    any fractional-cent leftover
///
/// ## Errors
///
/// [`SplitError::TotalsMismatch`] if either sum fails to reconcile.
/// Past validation the computation cannot fail: creditor deficits equal
/// debtor surpluses by construction. Empty and singleton inputs yield an
/// empty transfer list.
pub fn settle(total_expense: Decimal, participants: &[Participant]) -> Result<Vec<Settlement>> {
    let total = round_unit(total_expense);

    let expense_sum: Decimal = participants.iter().map(|p| p.expense).sum();
    if round_unit(expense_sum) != total {
        warn!(%total_expense, %expense_sum, "expense sum does not reconcile with bill total");
        return Err(SplitError::TotalsMismatch);
    }

    let payment_sum: Decimal = participants.iter().map(|p| p.payment).sum();
    if round_unit(payment_sum) != total {
        warn!(%total_expense, %payment_sum, "payment sum does not reconcile with bill total");
        return Err(SplitError::TotalsMismatch);
    }

    let mut working: Vec<WorkingBalance> = participants
        .iter()
        .map(|p| WorkingBalance {
            name: p.name.clone(),
            balance: p.balance(),
        })
        .collect();

    // Stable partition: index lists keep input order, zero balances drop out.
    let creditors: Vec<usize> = working
        .iter()
        .enumerate()
        .filter(|(_, w)| w.balance < Decimal::ZERO)
        .map(|(i, _)| i)
        .collect();
    let debtors: Vec<usize> = working
        .iter()
        .enumerate()
        .filter(|(_, w)| w.balance > Decimal::ZERO)
        .map(|(i, _)| i)
        .collect();

    let mut settlements = Vec::new();

    for &ci in &creditors {
        let mut owed = working[ci].balance.abs();

        for &di in &debtors {
            if owed.is_zero() {
                break;
            }
            let available = working[di].balance;
            if available <= Decimal::ZERO {
                continue;
            }

            let transfer = owed.min(available);
            let amount = emit_amount(transfer);
            debug!(
                payer = %working[di].name,
                recipient = %working[ci].name,
                %amount,
                "transfer"
            );
            settlements.push(Settlement::new(
                working[di].name.clone(),
                working[ci].name.clone(),
                amount,
            ));

            owed -= transfer;
            working[di].balance -= transfer;
            working[ci].balance += transfer;
        }
    }

    debug!(
        participants = participants.len(),
        transfers = settlements.len(),
        "settlement complete"
    );
    Ok(settlements)
}
