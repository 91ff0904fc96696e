// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Dispatch(DispatchError),
}

/// Rejections produced while turning an email draft into a `mailto:` link.
///
/// The user fixes the input and retries; nothing is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Recipient is blank or lacks an `@`.
    InvalidRecipient,
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::InvalidRecipient => "email-error-invalid-recipient",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidRecipient => {
                write!(f, "Please enter a valid recipient email.")
            }
        }
    }
}

/// Failures reported by the URI-opening collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The platform launcher could not be spawned.
    Launch(String),

    /// The launcher ran but reported failure (`None` when killed by a signal).
    ExitStatus(Option<i32>),

    /// The worker running the launcher was cancelled or panicked.
    Interrupted(String),
}

impl DispatchError {
    /// Returns the i18n message key for this error type.
    ///
    /// All variants share one user-facing message; the detail only goes to logs.
    pub fn i18n_key(&self) -> &'static str {
        "email-error-open-client"
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Launch(msg) => write!(f, "Failed to launch URI handler: {}", msg),
            DispatchError::ExitStatus(Some(code)) => {
                write!(f, "URI handler exited with status {}", code)
            }
            DispatchError::ExitStatus(None) => write!(f, "URI handler was terminated"),
            DispatchError::Interrupted(msg) => write!(f, "URI dispatch interrupted: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Dispatch(e) => write!(f, "Dispatch Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<DispatchError> for Error {
    fn from(err: DispatchError) -> Self {
        Error::Dispatch(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
