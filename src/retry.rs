//! Fixed-delay bounded retry.

use std::{error::Error as StdError, fmt, future::Future, num::NonZeroUsize, time::Duration};

use tokio::time::sleep;

use crate::{DateTimeError, Result};

/// Fixed-delay retry policy: at most `max_attempts` attempts, `delay` apart.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    delay: Duration,
    max_attempts: NonZeroUsize,
}

impl RetryPolicy {
    /// Creates a policy.
    ///
    /// `max_attempts` counts the initial attempt, so `1` means "never retry".
    /// Zero attempts is rejected with [`DateTimeError::Config`].
    pub fn new(delay: Duration, max_attempts: usize) -> Result<Self> {
        let max_attempts = NonZeroUsize::new(max_attempts).ok_or_else(|| {
            DateTimeError::Config("retry policy requires at least one attempt".to_owned())
        })?;
        Ok(Self {
            delay,
            max_attempts,
        })
    }

    /// Wait between a failed attempt and the next one.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Total number of attempts, including the first.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts.get()
    }
}

const DEFAULT_MAX_ATTEMPTS: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(attempts) => attempts,
    None => panic!("default attempt count must be non-zero"),
};

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Runs an operation until it succeeds or the policy's attempts are used up.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Retrier {
    policy: RetryPolicy,
}

impl Retrier {
    pub fn new(policy: RetryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Invokes `operation` sequentially until it returns `Ok`.
    ///
    /// After every failed attempt except the last, waits for the policy delay.
    /// The first `Ok` is returned as-is without further attempts. When every
    /// attempt fails, all errors are returned in [`RetriesExhausted`].
    pub async fn run<T, E, F, Fut>(
        &self,
        mut operation: F,
    ) -> std::result::Result<T, RetriesExhausted<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        let max_attempts = self.policy.max_attempts();
        let mut attempts = Vec::with_capacity(max_attempts);

        for attempt in 1..=max_attempts {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempts.push(err);

                    #[cfg(feature = "tracing")]
                    tracing::debug!(attempt, max_attempts, "attempt failed");

                    if attempt < max_attempts {
                        #[cfg(feature = "tracing")]
                        tracing::debug!("retrying after {} ms", self.policy.delay.as_millis());

                        sleep(self.policy.delay).await;
                    }
                }
            }
        }

        Err(RetriesExhausted { attempts })
    }
}

/// Terminal error after every allotted attempt failed.
///
/// Keeps the individual attempt errors, oldest first. [`StdError::source`]
/// points at the last one.
#[derive(Debug)]
pub struct RetriesExhausted<E> {
    attempts: Vec<E>,
}

impl<E> RetriesExhausted<E> {
    /// Per-attempt errors in the order they occurred.
    pub fn attempts(&self) -> &[E] {
        &self.attempts
    }

    /// Error from the final attempt.
    pub fn last(&self) -> Option<&E> {
        self.attempts.last()
    }

    /// Number of failed attempts.
    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn into_attempts(self) -> Vec<E> {
        self.attempts
    }
}

impl<E> fmt::Display for RetriesExhausted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reached maximum retries ({}) with no established connection",
            self.attempts.len()
        )
    }
}

impl<E> StdError for RetriesExhausted<E>
where
    E: StdError + 'static,
{
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.attempts
            .last()
            .map(|err| err as &(dyn StdError + 'static))
    }
}
