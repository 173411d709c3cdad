use reqwest::Method;
use thiserror::Error;

/// Failure of a request against the item endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        source: reqwest::Error,
    },
    #[error("{method} {url} returned status {status}")]
    Status {
        method: Method,
        url: String,
        status: u16,
    },
    #[error("could not decode item list from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid endpoint {endpoint:?}: {source}")]
    Parse {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("endpoint {0} must use http or https")]
    UnsupportedScheme(String),
}
