// SPDX-License-Identifier: MPL-2.0
//! Crate-level error type for startup and settings I/O.
//!
//! Scanner failures never surface here: selection problems are
//! [`SelectionError`](crate::domain::scan::SelectionError)s shown inline and
//! analysis problems collapse into one user message inside the session.

use crate::application::port::TransportError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Reading `settings.toml` failed.
    Io(String),
    /// `settings.toml` could not be parsed.
    Config(String),
    /// The prediction client could not be set up.
    Transport(TransportError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "Settings I/O failed: {e}"),
            Error::Config(e) => write!(f, "Invalid settings: {e}"),
            Error::Transport(e) => write!(f, "Prediction client unavailable: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            Error::Io(_) | Error::Config(_) => None,
        }
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

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_failure_mentions_settings() {
        let err: Error = std::io::Error::other("disk full").into();
        assert_eq!(err.to_string(), "Settings I/O failed: disk full");
    }

    #[test]
    fn toml_parse_error_is_config_error() {
        let parse = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: Error = parse.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Invalid settings: "));
    }

    #[test]
    fn transport_error_is_kept_as_source() {
        let err: Error = TransportError::Request("bad url".into()).into();
        assert_eq!(err, Error::Transport(TransportError::Request("bad url".into())));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("bad url"));
    }
}
