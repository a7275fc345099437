//! Error types for the SplitBill settlement engine.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Settlement / validation errors
//! - 2xx: Roster errors

use thiserror::Error;

use crate::ParticipantId;

/// Central error enum for all SplitBill operations.
///
/// Errors are returned as values, never panicked: the caller surfaces the
/// message to the user and re-invokes after the input is corrected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    // =================================================================
    // Settlement / Validation Errors (1xx)
    // =================================================================
    /// The declared bill total does not reconcile with the sum of
    /// individual expenses or the sum of individual payments.
    #[error("SB_ERR_100: Total expenses and payments do not match")]
    TotalsMismatch,

    // =================================================================
    // Roster Errors (2xx)
    // =================================================================
    /// A participant name was empty (after trimming).
    #[error("SB_ERR_200: Please enter a participant name!")]
    EmptyParticipantName,

    /// A participant with this name already exists in the roster.
    #[error("SB_ERR_201: Participant already exists: {name}")]
    DuplicateParticipantName { name: String },

    /// The requested participant is not in the roster.
    #[error("SB_ERR_202: Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_mismatch_display() {
        let msg = format!("{}", SplitError::TotalsMismatch);
        assert!(msg.starts_with("SB_ERR_100"), "Got: {msg}");
        assert!(msg.contains("Total expenses and payments do not match"));
    }

    #[test]
    fn duplicate_name_display_carries_name() {
        let err = SplitError::DuplicateParticipantName {
            name: "Alice".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("SB_ERR_201"));
        assert!(msg.contains("Alice"));
    }

    #[test]
    fn all_errors_have_sb_err_prefix() {
        let errors: Vec<SplitError> = vec![
            SplitError::TotalsMismatch,
            SplitError::EmptyParticipantName,
            SplitError::DuplicateParticipantName { name: "x".into() },
            SplitError::ParticipantNotFound(ParticipantId::new()),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("SB_ERR_"),
                "Error missing SB_ERR_ prefix: {msg}"
            );
        }
    }
}
