//! Outbound call throttling.
//!
//! The vendor's free tier is enforced with a single process-wide
//! [`CallGate`]: a minimum spacing between calls rather than a bucket.

mod call_gate;

pub use call_gate::{CallGate, GateState, DEFAULT_MIN_INTERVAL};
