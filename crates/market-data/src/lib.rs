//! Stockbase Market Data Crate
//!
//! Fetches market data from the Polygon.io REST API while respecting the
//! free tier's call quota.
//!
//! # Architecture
//!
//! ```text
//! +----------------------+
//! |   IngestService      |  (stockbase-core)
//! +----------------------+
//!            |
//!            v
//! +----------------------+
//! | MarketDataProvider   |  (trait; PolygonClient implements it)
//! +----------------------+
//!            |
//!            v
//! +----------------------+
//! | RateLimitedTransport |  (waits on the process-wide CallGate)
//! +----------------------+
//!            |
//!            v
//! +----------------------+
//! |    HttpTransport     |  (reqwest; timeouts, pool, vendor retries)
//! +----------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CallGate`] - Minimum spacing between outbound calls, shared process-wide
//! - [`ApiTransport`] - The `get(path, params)` primitive all endpoints use
//! - [`PolygonClient`] - Typed endpoints with cursor pagination
//! - [`ClientConfig`] - Vendor client settings

pub mod errors;
pub mod models;
pub mod provider;
pub mod throttle;
pub mod transport;

pub use errors::{MarketDataError, RetryClass};
pub use models::{
    DailyOpenClose, DataPoint, Dividend, FinancialReport, Financials, LineItems, MarketHoliday,
    Page, Timeframe,
};
pub use provider::polygon::{PolygonClient, PolygonFreeClient, DEFAULT_MAX_PAGES};
pub use provider::MarketDataProvider;
pub use throttle::{CallGate, GateState, DEFAULT_MIN_INTERVAL};
pub use transport::{
    ApiTransport, ClientConfig, HttpTransport, QueryParams, RateLimitedTransport,
    PRODUCTION_BASE_URL,
};
