//! Rate-limited decorator over any [`ApiTransport`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::{ApiTransport, QueryParams};
use crate::errors::MarketDataError;
use crate::throttle::CallGate;

/// Wraps a transport so that every call passes through a [`CallGate`].
///
/// The wrapped transport is called exactly once per `get`; the gate only
/// decides *when*. Errors from the inner transport come back unchanged.
pub struct RateLimitedTransport<T> {
    inner: T,
    gate: Arc<CallGate>,
}

impl<T: ApiTransport> RateLimitedTransport<T> {
    /// Decorates `inner` with the process-wide gate.
    pub fn new(inner: T) -> Self {
        Self::with_gate(inner, CallGate::shared())
    }

    /// Decorates `inner` with a specific gate.
    pub fn with_gate(inner: T, gate: Arc<CallGate>) -> Self {
        Self { inner, gate }
    }

    pub fn gate(&self) -> &Arc<CallGate> {
        &self.gate
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: ApiTransport> ApiTransport for RateLimitedTransport<T> {
    async fn get(&self, path: &str, params: &QueryParams) -> Result<Value, MarketDataError> {
        self.gate.run(|| self.inner.get(path, params)).await
    }
}
