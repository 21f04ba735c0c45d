//! Shared error taxonomy for the capability bridge.
//!
//! Every operation in the bridge surfaces one of these four kinds
//! synchronously to its immediate caller. Retry policy belongs to the host
//! or plugin layered above; nothing here retries.

use thiserror::Error;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Closed error taxonomy used uniformly across the bridge.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A supplied name or value is empty, unrecognized, or malformed.
    /// Recoverable by the caller supplying a corrected argument.
    #[error("Invalid argument: {what}")]
    InvalidArgument { what: String },

    /// A recognized target exists but could not be brought into a usable
    /// state (resource, dependency, configuration). Retry only after
    /// remediation.
    #[error("Failed to initialize: {what}")]
    FailedInitialization { what: String },

    /// An expected capability is deliberately stubbed by this
    /// implementation. Distinct from capability absence, which is modeled
    /// as `None` on the simulation context.
    #[error("Not implemented: {what}")]
    NotImplemented { what: String },

    /// Catch-all for failures with no more specific kind. Carries the
    /// lower-level failure's message, never raw internal state.
    #[error("Unknown failure: {message}")]
    Unknown { message: String },
}

impl BridgeError {
    pub fn invalid_argument(what: impl Into<String>) -> Self {
        BridgeError::InvalidArgument { what: what.into() }
    }

    pub fn failed_initialization(what: impl Into<String>) -> Self {
        BridgeError::FailedInitialization { what: what.into() }
    }

    pub fn not_implemented(what: impl Into<String>) -> Self {
        BridgeError::NotImplemented { what: what.into() }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        BridgeError::Unknown {
            message: message.into(),
        }
    }

    /// True for errors the caller can fix by correcting its input.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, BridgeError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_context() {
        let err = BridgeError::invalid_argument("package name is empty");
        assert!(err.to_string().contains("package name is empty"));

        let err = BridgeError::unknown("sink unavailable");
        assert!(err.to_string().contains("sink unavailable"));
    }

    #[test]
    fn caller_error_classification() {
        assert!(BridgeError::invalid_argument("x").is_caller_error());
        assert!(!BridgeError::failed_initialization("x").is_caller_error());
        assert!(!BridgeError::unknown("x").is_caller_error());
    }
}
