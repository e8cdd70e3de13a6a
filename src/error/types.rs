//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for poyo operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoyoError {
    /// No alias is stored under the requested key
    #[error("No command found for '{key}'.{}", hint_suffix(.hint.as_deref()))]
    AliasNotFound { key: String, hint: Option<String> },

    /// An alias with this key is already stored
    #[error("Key '{key}' already exists. Use 'poyo update {key} \"new command\"' to modify it.")]
    AliasAlreadyExists { key: String },

    /// Key or command rejected before touching the store
    #[error("Invalid alias: {message}")]
    InvalidAlias { message: String },

    /// Unbalanced braces or an invalid field inside a template
    #[error("Malformed template: {message}")]
    MalformedTemplate { message: String },

    /// A placeholder reached expansion without a value
    #[error("Missing value for placeholder '{name}'")]
    MissingPlaceholder { name: String },

    /// Configuration Error - store location could not be determined
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Store Error - the alias file could not be read or written
    #[error("Store error: {message}")]
    Store { message: String },

    /// Command Error - the shell could not be spawned
    #[error("Command error: {message}")]
    Command { message: String },
}

impl PoyoError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::AliasNotFound { .. } | Self::AliasAlreadyExists { .. } => 0,
            Self::InvalidAlias { .. } | Self::Configuration { .. } => 1,
            Self::MalformedTemplate { .. } => 2,
            Self::MissingPlaceholder { .. } => 3,
            Self::Store { .. } => 4,
            Self::Command { .. } => 5,
        }
    }

    /// Whether the error is a notice for the user rather than a failure
    #[must_use]
    #[inline]
    pub const fn is_notice(&self) -> bool {
        matches!(
            *self,
            Self::AliasNotFound { .. } | Self::AliasAlreadyExists { .. }
        )
    }

    /// Create an alias-not-found error
    #[inline]
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        Self::AliasNotFound {
            key: key.into(),
            hint: None,
        }
    }

    /// Create an alias-not-found error with a follow-up suggestion
    #[inline]
    pub fn not_found_with_hint<S: Into<String>, H: Into<String>>(key: S, hint: H) -> Self {
        Self::AliasNotFound {
            key: key.into(),
            hint: Some(hint.into()),
        }
    }

    /// Create an alias-already-exists error
    #[inline]
    pub fn already_exists<S: Into<String>>(key: S) -> Self {
        Self::AliasAlreadyExists { key: key.into() }
    }

    /// Create an invalid alias error
    #[inline]
    pub fn invalid_alias<S: Into<String>>(message: S) -> Self {
        Self::InvalidAlias {
            message: message.into(),
        }
    }

    /// Create a malformed template error
    #[inline]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedTemplate {
            message: message.into(),
        }
    }

    /// Create a missing placeholder error
    #[inline]
    pub fn missing_placeholder<S: Into<String>>(name: S) -> Self {
        Self::MissingPlaceholder { name: name.into() }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a store error
    #[inline]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create a command error
    #[inline]
    pub fn command<S: Into<String>>(message: S) -> Self {
        Self::Command {
            message: message.into(),
        }
    }
}

fn hint_suffix(hint: Option<&str>) -> String {
    hint.map(|hint| format!(" {hint}")).unwrap_or_default()
}
