/// Classification for the vendor transport's retry policy.
///
/// The HTTP transport consults this after every failed attempt to decide
/// whether to try the same request again.
///
/// | Class | Retried by the transport? |
/// |-------|---------------------------|
/// | `Retry` | Yes, with exponential backoff, up to the configured retry count |
/// | `Never` | No, the error is returned to the caller unchanged |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Transient failure: timeout, connection reset, 429 or a 5xx status.
    Retry,

    /// Terminal failure: bad request, missing resource, undecodable payload.
    /// Retrying would return the same answer.
    Never,
}

/// HTTP statuses the vendor client retries on.
///
/// Mirrors the status list of the vendor's own client: payload too large,
/// too many requests, client closed request, and the usual gateway errors.
pub const RETRY_STATUSES: &[u16] = &[413, 429, 499, 500, 502, 503, 504];

/// Returns true if the status code is one the transport retries on.
pub fn is_retryable_status(status: u16) -> bool {
    RETRY_STATUSES.contains(&status)
}
