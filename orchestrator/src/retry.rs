//! Bounded retry for read-only listing calls.
//!
//! Read-all operations retry immediately on failure and degrade to an
//! empty result when the budget is exhausted; callers never see an error
//! from this path. The exhaustion flag lets a caller distinguish "truly
//! empty" from "all retries failed" when it cares.

use std::future::Future;

use tracing::warn;

use crate::error::Result;

/// Retry budget for read-all operations.
pub const FETCH_ATTEMPTS: u32 = 10;

/// Outcome of a retried read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    /// The fetched value, or `T::default()` when the budget was exhausted
    pub items: T,
    /// True when every attempt failed and `items` is the degraded default
    pub exhausted: bool,
}

impl<T> Fetched<T> {
    /// Unwrap the value, discarding the exhaustion flag.
    pub fn into_inner(self) -> T {
        self.items
    }
}

/// Invoke `fetch` up to [`FETCH_ATTEMPTS`] times with no delay between
/// attempts, logging each failure. Returns the first success, or the
/// default value with `exhausted = true` once the budget runs out.
pub async fn fetch_with_retry<T, F, Fut>(resource: &str, mut fetch: F) -> Fetched<T>
where
    T: Default,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 1..=FETCH_ATTEMPTS {
        match fetch().await {
            Ok(items) => {
                return Fetched {
                    items,
                    exhausted: false,
                }
            }
            Err(e) => {
                warn!(
                    resource = resource,
                    attempt = attempt,
                    error = %e,
                    "fetch_attempt_failed"
                );
            }
        }
    }

    warn!(
        resource = resource,
        attempts = FETCH_ATTEMPTS,
        "fetch_retries_exhausted"
    );

    Fetched {
        items: T::default(),
        exhausted: true,
    }
}
