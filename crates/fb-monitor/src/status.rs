//! Solution and validation status enums.
//!
//! Both are snapshots of the host's last attempt, not live streams, and
//! neither has terminal states: an external re-solve or re-validate can
//! move the flowsheet back into any value at any time.

use serde::{Deserialize, Serialize};

/// Outcome of the host's last solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolutionStatus {
    Solved,
    NotSolved,
    FailedToConverge,
    TimedOut,
    OutOfMemory,
    FailedInitialization,
    SolvingError,
    InvalidOperation,
    BadInvocationOrder,
    ComputationError,
}

impl SolutionStatus {
    /// True only for a fully converged flowsheet.
    pub fn is_solved(self) -> bool {
        matches!(self, SolutionStatus::Solved)
    }

    /// True when the last solve attempt ran and failed. `NotSolved` means
    /// no attempt has concluded, which is not a failure.
    pub fn is_failure(self) -> bool {
        !matches!(self, SolutionStatus::Solved | SolutionStatus::NotSolved)
    }
}

/// Outcome of the host's last validation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStatus {
    NotValidated,
    Invalid,
    Valid,
}

impl ValidationStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, ValidationStatus::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SOLUTION: [SolutionStatus; 10] = [
        SolutionStatus::Solved,
        SolutionStatus::NotSolved,
        SolutionStatus::FailedToConverge,
        SolutionStatus::TimedOut,
        SolutionStatus::OutOfMemory,
        SolutionStatus::FailedInitialization,
        SolutionStatus::SolvingError,
        SolutionStatus::InvalidOperation,
        SolutionStatus::BadInvocationOrder,
        SolutionStatus::ComputationError,
    ];

    #[test]
    fn only_solved_is_solved() {
        for status in ALL_SOLUTION {
            assert_eq!(status.is_solved(), status == SolutionStatus::Solved);
        }
    }

    #[test]
    fn not_solved_is_not_a_failure() {
        assert!(!SolutionStatus::NotSolved.is_failure());
        assert!(!SolutionStatus::Solved.is_failure());
        assert!(SolutionStatus::FailedToConverge.is_failure());
        assert!(SolutionStatus::TimedOut.is_failure());
    }

    #[test]
    fn validation_predicate() {
        assert!(ValidationStatus::Valid.is_valid());
        assert!(!ValidationStatus::Invalid.is_valid());
        assert!(!ValidationStatus::NotValidated.is_valid());
    }

    #[test]
    fn statuses_serialize_by_variant_name() {
        let json = serde_json::to_string(&SolutionStatus::FailedToConverge).unwrap();
        assert_eq!(json, "\"FailedToConverge\"");
        let json = serde_json::to_string(&ValidationStatus::NotValidated).unwrap();
        assert_eq!(json, "\"NotValidated\"");
    }
}
