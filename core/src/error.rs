//! Error types for the Folio site.
//!
//! - [`ConfigError`] - Missing relay credentials
//! - [`RelayError`] - Email relay failures
//! - [`SubmitError`] - Contact submission failures (top-level)
//!
//! Conversion into [`SubmitError`] is automatic via `From`,
//! so `?` works across the config and relay boundaries.

use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// A required relay credential is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A credential was not provided at build time.
    #[error("Missing EmailJS configuration: {0}. Please check your environment variables.")]
    Missing(&'static str),
}

// =============================================================================
// Relay Errors
// =============================================================================

/// Errors reported by an [`EmailRelay`](crate::contact::EmailRelay).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The relay answered with a failure status.
    #[error("{text}")]
    Rejected { status: u16, text: String },
}

impl RelayError {
    /// HTTP-like status code, when the relay provided one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RelayError::Transport(_) => None,
            RelayError::Rejected { status, .. } => Some(*status),
        }
    }
}

// =============================================================================
// Submission Errors (top-level)
// =============================================================================

/// Why a contact submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Credentials missing, no network call was attempted.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The relay call failed.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// A submission is already in flight.
    #[error("A message is already being sent")]
    InFlight,
}

impl SubmitError {
    /// Best human readable description of the failure.
    ///
    /// Falls back to `"Unknown error"` when the relay gave nothing useful.
    pub fn description(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            text
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for relay calls.
pub type RelayResult<T> = Result<T, RelayError>;

/// Result type for contact submissions.
pub type SubmitResult<T> = Result<T, SubmitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let config_err = ConfigError::Missing("service id");
        let submit_err: SubmitError = config_err.into();
        assert!(submit_err.to_string().contains("service id"));

        let relay_err = RelayError::Rejected {
            status: 400,
            text: "The user_id parameter is required".into(),
        };
        let submit_err: SubmitError = relay_err.into();
        assert_eq!(submit_err.to_string(), "The user_id parameter is required");
    }

    #[test]
    fn test_blank_relay_text_falls_back() {
        let err = SubmitError::Relay(RelayError::Rejected {
            status: 500,
            text: "  ".into(),
        });
        assert_eq!(err.description(), "Unknown error");
    }

    #[test]
    fn test_relay_status() {
        assert_eq!(RelayError::Transport("offline".into()).status(), None);
        assert_eq!(
            RelayError::Rejected { status: 412, text: String::new() }.status(),
            Some(412)
        );
    }
}
