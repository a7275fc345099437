//! # splitbill-engine
//!
//! **Pure deterministic debt-settlement engine for SplitBill.**
//!
//! The engine takes a bill total and a group of participants and produces
//! the list of payer → recipient transfers that zeroes every balance. It
//! has:
//!
//! - **Zero side effects**: no I/O, no shared state, no mutation of caller data
//! - **Deterministic output**: same input -> same transfer list, every call
//! - **Stable ordering**: creditors and debtors are walked in input order,
//!   never re-sorted
//! - **Exact money**: full-precision decimal balances, rounded only at emission
//!
//! [`Roster`] is the caller-side support layer: an ordered participant
//! collection with name validation, equal-share derivation, and the
//! single-payer flow.

pub mod netting;
pub mod roster;

pub use netting::settle;
pub use roster::Roster;
