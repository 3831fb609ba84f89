//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The error enum for every vendor call
//! - [`RetryClass`]: Classification for the vendor transport's retries

mod retry;

pub use retry::{is_retryable_status, RetryClass, RETRY_STATUSES};

use thiserror::Error;

/// Errors that can occur while talking to the market data vendor.
///
/// Errors are propagated unchanged to the caller once the transport has
/// exhausted its own retries. Nothing above the transport recovers from them.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The vendor answered 404 for the requested resource.
    /// For daily open/close this usually means a non-trading day.
    #[error("Not found: {path}")]
    NotFound {
        /// Request path that returned 404
        path: String,
    },

    /// The vendor rate limited the request (HTTP 429).
    #[error("Rate limited by vendor: {path}")]
    RateLimited {
        /// Request path that was rejected
        path: String,
    },

    /// The request timed out before the vendor answered.
    #[error("Timeout: {path}")]
    Timeout {
        /// Request path that timed out
        path: String,
    },

    /// The vendor answered with a non-success status.
    #[error("HTTP {status} from vendor: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response for {path}: {message}")]
    Deserialize {
        /// Request path whose body failed to decode
        path: String,
        /// Decoder error message
        message: String,
    },

    /// The request could not be built (bad base URL, bad API key header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Pagination was cut short after following too many `next_url` links.
    #[error("Pagination limit of {max_pages} pages reached for {path}")]
    PaginationLimit {
        /// First request path of the paginated listing
        path: String,
        /// The configured page cap
        max_pages: usize,
    },

    /// A network error occurred while communicating with the vendor.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// ```
    /// use stockbase_market_data::errors::{MarketDataError, RetryClass};
    ///
    /// let error = MarketDataError::RateLimited { path: "/v1/open-close/AAPL/2023-04-06".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::Retry);
    ///
    /// let error = MarketDataError::NotFound { path: "/v1/open-close/AAPL/2023-04-08".to_string() };
    /// assert_eq!(error.retry_class(), RetryClass::Never);
    /// ```
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::Retry,

            Self::Http { status, .. } if is_retryable_status(*status) => RetryClass::Retry,

            Self::Network(e) if e.is_connect() || e.is_timeout() => RetryClass::Retry,

            Self::NotFound { .. }
            | Self::Http { .. }
            | Self::Deserialize { .. }
            | Self::InvalidRequest(_)
            | Self::PaginationLimit { .. }
            | Self::Network(_) => RetryClass::Never,
        }
    }

    /// True for a 404 from the vendor.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
