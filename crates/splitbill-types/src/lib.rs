//! # splitbill-types
//!
//! Shared types and errors for the **SplitBill** settlement engine.
//!
//! This crate is the leaf dependency of the workspace — the engine crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`]
//! - **Participant model**: [`Participant`]
//! - **Settlement model**: [`Settlement`]
//! - **Monetary rounding**: [`money::round_unit`], [`money::round_cents`], [`money::emit_amount`]
//! - **Errors**: [`SplitError`] with `SB_ERR_` prefix codes

pub mod error;
pub mod ids;
pub mod money;
pub mod participant;
pub mod settlement;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitbill_types::{Participant, Settlement, SplitError, ...};

pub use error::*;
pub use ids::*;
pub use participant::*;
pub use settlement::*;
