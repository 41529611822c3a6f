// src/errors/mod.rs
use thiserror::Error;

/// Main error type for dbtap operations
#[derive(Error, Debug)]
pub enum DbtapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid header name: {0}")]
    HeaderName(#[from] http::header::InvalidHeaderName),

    #[error("Invalid header value: {0}")]
    HeaderValue(#[from] http::header::InvalidHeaderValue),

    #[error("JSON serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),

    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Auth error: {0}")]
    AuthError(String),
}

/// Convenience Result type that uses DbtapError
pub type Result<T> = std::result::Result<T, DbtapError>;
