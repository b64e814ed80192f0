//! Error types for trogon-env

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, EnvError>;

pub(crate) const EMPTY_PREFIX: &str = "You must provide a non-empty prefix to search for.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Absent, blank, or the literal `null`.
    #[error("Required environment variable: {name}, not found.")]
    NotFound { name: String },

    /// The provider only supports single-name lookups.
    #[error("The list of environment variables is not available on this host.")]
    ListNotAvailable,

    #[error("{0}")]
    Precondition(&'static str),
}

impl EnvError {
    pub(crate) fn not_found(name: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_variable() {
        assert_eq!(
            EnvError::not_found("DATABASE_URL").to_string(),
            "Required environment variable: DATABASE_URL, not found."
        );
    }

    #[test]
    fn precondition_message_is_verbatim() {
        assert_eq!(
            EnvError::Precondition(EMPTY_PREFIX).to_string(),
            "You must provide a non-empty prefix to search for."
        );
    }
}
