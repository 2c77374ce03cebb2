//! Error types for Artigos-Grid
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Transport-level HTTP failure (connect, timeout, body read)
    #[snafu(display("HTTP error: {source}"))]
    Http { source: reqwest::Error },

    /// The server answered with a non-success status
    #[snafu(display("Unexpected HTTP status {status} from {url}"))]
    Status { status: u16, url: String },

    /// JSON serialization/deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether the fetch binding should retry the request that produced this error
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::Status { .. } | Error::Json { .. }
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Error::Http { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_are_retryable() {
        let err = Error::Status {
            status: 503,
            url: "https://example.test/api/artigos".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(
            err.to_string(),
            "Unexpected HTTP status 503 from https://example.test/api/artigos"
        );
    }

    #[test]
    fn decode_errors_are_retryable() {
        let source = serde_json::from_str::<u32>("not json").expect_err("must fail");
        assert!(Error::from(source).is_retryable());
    }

    #[test]
    fn local_errors_are_not_retryable() {
        let err = Error::Invalid {
            message: "bad base url".to_string(),
        };
        assert!(!err.is_retryable());

        let err = Error::from(std::io::Error::other("disk"));
        assert!(!err.is_retryable());
    }
}
