//! Minimum-spacing gate for outbound vendor calls.
//!
//! The free tier of the vendor API allows 5 calls per minute. Instead of a
//! token bucket the gate keeps a single "last completed call" instant and
//! makes every call wait until `min_interval` has passed since then.
//!
//! One gate is shared by the whole process ([`CallGate::shared`]), so every
//! client built on top of it draws from the same budget. The timestamp lives
//! behind an async mutex that is held across the wait *and* the delegated
//! call: callers going through the same gate are served one at a time.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use lazy_static::lazy_static;
use log::debug;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Spacing used for the free tier: 5 calls/minute rounded up to 13 seconds.
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(13);

lazy_static! {
    static ref SHARED_GATE: Arc<CallGate> = Arc::new(CallGate::new(DEFAULT_MIN_INTERVAL));
}

/// Observable state of the gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// The next call goes out immediately.
    Ready,
    /// The next call waits for the contained duration first.
    CoolingDown(Duration),
}

#[derive(Debug)]
struct GateInner {
    /// Completion instant of the last successful call.
    /// `None` when the start-of-day instant predates the monotonic clock.
    last_call: Option<Instant>,
    min_interval: Duration,
}

/// Process-wide rate-limit gate.
#[derive(Debug)]
pub struct CallGate {
    inner: Mutex<GateInner>,
}

impl CallGate {
    /// Creates a gate whose last call is "today at local midnight".
    pub fn new(min_interval: Duration) -> Self {
        Self::with_last_call(min_interval, start_of_today())
    }

    /// Creates a gate with an explicit last-call instant.
    pub fn with_last_call(min_interval: Duration, last_call: Option<Instant>) -> Self {
        Self {
            inner: Mutex::new(GateInner {
                last_call,
                min_interval,
            }),
        }
    }

    /// The gate shared by every client in this process.
    pub fn shared() -> Arc<CallGate> {
        Arc::clone(&SHARED_GATE)
    }

    /// Current minimum spacing between calls.
    pub async fn min_interval(&self) -> Duration {
        self.inner.lock().await.min_interval
    }

    /// Changes the minimum spacing. Takes effect for the next call.
    pub async fn set_min_interval(&self, min_interval: Duration) {
        self.inner.lock().await.min_interval = min_interval;
    }

    /// Completion instant of the last successful call.
    pub async fn last_call(&self) -> Option<Instant> {
        self.inner.lock().await.last_call
    }

    /// Whether a call issued now would have to wait.
    pub async fn state(&self) -> GateState {
        let inner = self.inner.lock().await;
        let wait = cooldown_remaining(inner.last_call, inner.min_interval, Instant::now());
        if wait.is_zero() {
            GateState::Ready
        } else {
            GateState::CoolingDown(wait)
        }
    }

    /// Runs `call` once the cooldown has elapsed.
    ///
    /// The last-call timestamp is only advanced when `call` succeeds; a
    /// failed call leaves the budget untouched.
    pub async fn run<F, Fut, T, E>(&self, call: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut inner = self.inner.lock().await;

        let wait = cooldown_remaining(inner.last_call, inner.min_interval, Instant::now());
        if !wait.is_zero() {
            debug!("Call gate: cooling down for {:?}", wait);
            sleep(wait).await;
        }

        let result = call().await;

        if result.is_ok() {
            let now = Instant::now();
            // Never move backwards, even if the clock is coarse.
            inner.last_call = Some(match inner.last_call {
                Some(previous) if previous > now => previous,
                _ => now,
            });
        }

        result
    }
}

/// How long a call issued at `now` still has to wait.
fn cooldown_remaining(last_call: Option<Instant>, min_interval: Duration, now: Instant) -> Duration {
    match last_call {
        Some(last) => min_interval.saturating_sub(now.saturating_duration_since(last)),
        None => Duration::ZERO,
    }
}

/// Monotonic instant corresponding to today's local midnight.
fn start_of_today() -> Option<Instant> {
    midnight_instant(Instant::now(), Local::now().naive_local())
}

/// Maps the local midnight preceding `local_now` onto the monotonic clock,
/// given that `now` and `local_now` describe the same moment. `None` when
/// the monotonic clock started after that midnight.
fn midnight_instant(now: Instant, local_now: NaiveDateTime) -> Option<Instant> {
    now.checked_sub(since_midnight(local_now)?)
}

fn since_midnight(local_now: NaiveDateTime) -> Option<Duration> {
    let midnight = local_now.date().and_hms_opt(0, 0, 0)?;
    (local_now - midnight).to_std().ok()
}
