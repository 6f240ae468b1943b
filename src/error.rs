//! Error handling for alias-forge

use thiserror::Error;

/// Main error type for alias-forge
#[derive(Error, Debug, Clone)]
pub enum AliasForgeError {
    #[error("Invalid email address: '{address}'")]
    InvalidFormat { address: String },

    #[error("Username '{username}' is too short to vary")]
    UsernameTooShort { username: String },

    #[error("Username '{username}' is too long for exhaustive generation (max {max} characters)")]
    UsernameTooLong { username: String, max: usize },

    #[error("Invalid quantity '{input}': expected a positive whole number")]
    InvalidQuantity { input: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("CLI error: {message}")]
    Cli { message: String },
}

impl AliasForgeError {
    /// Create an invalid-format error
    pub fn invalid_format(address: impl Into<String>) -> Self {
        Self::InvalidFormat {
            address: address.into(),
        }
    }

    /// Create a too-short username error
    pub fn username_too_short(username: impl Into<String>) -> Self {
        Self::UsernameTooShort {
            username: username.into(),
        }
    }

    /// Create a too-long username error
    pub fn username_too_long(username: impl Into<String>, max: usize) -> Self {
        Self::UsernameTooLong {
            username: username.into(),
            max,
        }
    }

    /// Create an invalid-quantity error
    pub fn invalid_quantity(input: impl Into<String>) -> Self {
        Self::InvalidQuantity {
            input: input.into(),
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a CLI error
    pub fn cli(message: impl Into<String>) -> Self {
        Self::Cli {
            message: message.into(),
        }
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidFormat { address } => {
                format!(
                    "❌ Invalid email address: '{}'\n💡 Expected something like user@example.com",
                    address
                )
            }
            Self::UsernameTooShort { username } => {
                format!(
                    "❌ Username '{}' is too short to vary\n💡 The dot trick needs at least two characters in the local part",
                    username
                )
            }
            Self::UsernameTooLong { username, max } => {
                format!(
                    "❌ Username '{}' is too long to enumerate exhaustively (max {} characters)\n💡 Use --count to sample a bounded number of aliases instead",
                    username, max
                )
            }
            Self::InvalidQuantity { input } => {
                format!(
                    "❌ Invalid quantity '{}'\n💡 Pass a whole number greater than zero",
                    input
                )
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!(
                    "❌ File error{}: {}\n💡 Check file permissions and paths",
                    path_info, message
                )
            }
            Self::Internal { message } => {
                format!(
                    "❌ Internal error: {}\n💡 This is a bug, please report it",
                    message
                )
            }
            Self::Cli { message } => {
                format!(
                    "❌ Command error: {}\n💡 Use --help for usage information",
                    message
                )
            }
        }
    }
}

/// Convert from common error types
impl From<std::io::Error> for AliasForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

impl From<serde_json::Error> for AliasForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AliasForgeError>;
