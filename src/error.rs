// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Variants carry the rendered source message rather than the source error
//! so that results can travel inside cloneable iced messages.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    /// `settings.toml` could not be parsed or serialized.
    Config(String),
    /// Transport failure or non-success HTTP status.
    Http(String),
    /// Response body did not match the expected JSON shape.
    Decode(String),
    /// Local key-value mirror could not be read or written.
    Storage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// i18n key of the message shown when the error reaches the UI.
    ///
    /// Transport and decode failures share one key; the screen offers a
    /// retry either way.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::Http(_) | Self::Decode(_) => "error-request-failed",
            Self::Io(_) | Self::Storage(_) => "error-storage",
            Self::Config(_) => "error-config",
        }
    }

    fn parts(&self) -> (&'static str, &str) {
        match self {
            Self::Io(detail) => ("i/o", detail),
            Self::Config(detail) => ("config", detail),
            Self::Http(detail) => ("http", detail),
            Self::Decode(detail) => ("decode", detail),
            Self::Storage(detail) => ("storage", detail),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, detail) = self.parts();
        write!(f, "{kind} error: {detail}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_kind_then_the_detail() {
        assert_eq!(
            Error::Storage("locked".into()).to_string(),
            "storage error: locked"
        );
        assert_eq!(Error::Http("503".into()).to_string(), "http error: 503");
    }

    #[test]
    fn io_errors_keep_their_message() {
        let err = Error::from(std::io::Error::other("disk unplugged"));

        assert_eq!(err, Error::Io("disk unplugged".into()));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        let err: Error = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err().into();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err: Error = toml::from_str::<toml::Table>("a = = b").unwrap_err().into();

        assert_eq!(err.i18n_key(), "error-config");
    }

    #[test]
    fn remote_failures_share_one_message() {
        assert_eq!(
            Error::Http("503".into()).i18n_key(),
            Error::Decode("eof".into()).i18n_key()
        );
        assert_eq!(Error::Storage("locked".into()).i18n_key(), "error-storage");
    }
}
