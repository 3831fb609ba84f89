//! Market data provider abstraction and the Polygon implementation.

mod traits;

pub mod polygon;

pub use traits::MarketDataProvider;
