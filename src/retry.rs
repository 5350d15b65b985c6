//! Retry strategies and predicates for handling transient failures.
//!
//! How many attempts a request gets is set on the client
//! ([`ClientBuilder::max_attempts`](crate::ClientBuilder::max_attempts)). This
//! module decides how long to wait between attempts ([`RetryStrategy`]) and
//! whether a failure is worth another attempt at all ([`RetryPredicate`]).

use crate::Error;
use rand::Rng;
use std::time::Duration;

/// Defines how long to wait between attempts.
///
/// # Examples
///
/// ```
/// use coingecko_client::RetryStrategy;
/// use std::time::Duration;
///
/// // Exponential backoff: 100ms, 200ms, 400ms, 800ms...
/// let exponential = RetryStrategy::ExponentialBackoff {
///     initial_delay: Duration::from_millis(100),
///     max_delay: Duration::from_secs(30),
///     jitter: true,
/// };
///
/// // Linear backoff: 1s, 1s, 1s...
/// let linear = RetryStrategy::Linear {
///     delay: Duration::from_secs(1),
/// };
///
/// assert_eq!(RetryStrategy::Immediate.delay_for_attempt(3), Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub enum RetryStrategy {
    /// Retry straight away.
    Immediate,

    /// Retry with exponentially increasing delays.
    ///
    /// Each retry waits for `initial_delay * 2^(attempt - 1)` (capped at `max_delay`).
    /// Optional jitter scales the delay to a random 50-100% of that value.
    ExponentialBackoff {
        /// The delay before the first retry.
        initial_delay: Duration,
        /// The maximum delay between retries.
        max_delay: Duration,
        /// Whether to add random jitter to delays.
        jitter: bool,
    },

    /// Retry with a fixed delay between attempts.
    Linear {
        /// The delay between attempts.
        delay: Duration,
    },
}

impl Default for RetryStrategy {
    fn default() -> Self {
        RetryStrategy::ExponentialBackoff {
            initial_delay: Duration::from_millis(250),
            max_delay: Duration::from_secs(5),
            jitter: true,
        }
    }
}

impl RetryStrategy {
    /// Returns the delay to wait after the given failed attempt.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt that just failed (1-indexed)
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        match self {
            RetryStrategy::Immediate => Duration::ZERO,
            RetryStrategy::ExponentialBackoff {
                initial_delay,
                max_delay,
                jitter,
            } => {
                let multiplier = 2u32.saturating_pow(attempt.saturating_sub(1) as u32);
                let delay = initial_delay.saturating_mul(multiplier).min(*max_delay);

                if *jitter {
                    let jitter_factor = rand::thread_rng().gen_range(0.5..=1.0);
                    delay.mul_f64(jitter_factor)
                } else {
                    delay
                }
            }
            RetryStrategy::Linear { delay } => *delay,
        }
    }
}

/// Decides whether a failed request should be retried.
///
/// # Examples
///
/// ```
/// use coingecko_client::{Error, RetryPredicate};
///
/// struct RetryOnRateLimit;
///
/// impl RetryPredicate for RetryOnRateLimit {
///     fn should_retry(&self, error: &Error, _attempt: usize) -> bool {
///         matches!(error.status(), Some(status) if status.as_u16() == 429)
///     }
/// }
/// ```
pub trait RetryPredicate: Send + Sync {
    /// Returns `true` if the request should be attempted again.
    ///
    /// # Arguments
    ///
    /// * `error` - The error from the attempt that just failed
    /// * `attempt` - The attempt number (1-indexed)
    fn should_retry(&self, error: &Error, attempt: usize) -> bool;
}

/// Retry transient transport failures only. This is the default.
///
/// Uses [`Error::is_retryable`]: timeouts, failed connections, failed sends and
/// interrupted bodies. HTTP statuses are never retried.
#[derive(Debug, Clone, Copy)]
pub struct RetryOnTransient;

impl RetryPredicate for RetryOnTransient {
    fn should_retry(&self, error: &Error, _attempt: usize) -> bool {
        error.is_retryable()
    }
}

/// Retry 5xx responses.
///
/// Not enabled by default; combine with [`RetryOnTransient`] through
/// [`OrPredicate`] to opt in.
#[derive(Debug, Clone, Copy)]
pub struct RetryOn5xx;

impl RetryPredicate for RetryOn5xx {
    fn should_retry(&self, error: &Error, _attempt: usize) -> bool {
        matches!(error, Error::Http { status, .. } if status.is_server_error())
    }
}

/// Combine multiple retry predicates with OR logic.
///
/// # Examples
///
/// ```
/// use coingecko_client::retry::{OrPredicate, RetryOn5xx, RetryOnTransient};
///
/// let predicate = OrPredicate::new(vec![
///     Box::new(RetryOnTransient),
///     Box::new(RetryOn5xx),
/// ]);
/// ```
pub struct OrPredicate {
    predicates: Vec<Box<dyn RetryPredicate>>,
}

impl OrPredicate {
    /// Creates a new `OrPredicate` from a list of predicates.
    pub fn new(predicates: Vec<Box<dyn RetryPredicate>>) -> Self {
        Self { predicates }
    }
}

impl RetryPredicate for OrPredicate {
    fn should_retry(&self, error: &Error, attempt: usize) -> bool {
        self.predicates
            .iter()
            .any(|p| p.should_retry(error, attempt))
    }
}
