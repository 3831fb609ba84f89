//! Transport layer: the single `get` primitive every endpoint is built on.
//!
//! ```text
//! PolygonClient ──▶ RateLimitedTransport ──▶ HttpTransport ──▶ vendor REST API
//!                     (CallGate spacing)      (vendor retries)
//! ```
//!
//! Endpoints never talk to HTTP directly; they go through an [`ApiTransport`],
//! so the rate-limit gate can be layered in as a decorator and tests can swap
//! in canned responses.

mod http;
mod rate_limited;

pub use http::{ClientConfig, HttpTransport, PRODUCTION_BASE_URL};
pub use rate_limited::RateLimitedTransport;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::MarketDataError;

/// Query parameters of a vendor request, in order.
pub type QueryParams = Vec<(String, String)>;

/// A way of issuing GET requests against the vendor API.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    /// Issues `GET path?params` and returns the decoded JSON body.
    ///
    /// `path` is either relative to the base URL (`/v3/reference/dividends`)
    /// or an absolute URL handed out by the vendor for pagination.
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, MarketDataError>;
}

#[async_trait]
impl<T: ApiTransport + ?Sized> ApiTransport for std::sync::Arc<T> {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, MarketDataError> {
        (**self).get(path, params).await
    }
}
