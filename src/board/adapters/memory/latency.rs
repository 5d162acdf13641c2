//! Artificial response delay for the in-memory backend.
//!
//! The delay only imitates a network round trip so the presentation layer
//! exercises its loading states; it has no effect on results.

use std::time::Duration;

/// Lower bound of the default simulated round trip, in milliseconds.
pub const DEFAULT_MIN_LATENCY_MS: u64 = 200;

/// Upper bound of the default simulated round trip, in milliseconds.
pub const DEFAULT_MAX_LATENCY_MS: u64 = 400;

/// Uniformly jittered delay applied before every repository operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedLatency {
    min: Duration,
    max: Duration,
}

impl SimulatedLatency {
    /// No delay at all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    /// Delay drawn from `[min_ms, max_ms]`; the bounds are swapped when given
    /// in the wrong order.
    #[must_use]
    pub const fn between_millis(min_ms: u64, max_ms: u64) -> Self {
        let (low, high) = if min_ms <= max_ms {
            (min_ms, max_ms)
        } else {
            (max_ms, min_ms)
        };
        Self {
            min: Duration::from_millis(low),
            max: Duration::from_millis(high),
        }
    }

    /// Returns the lower bound.
    #[must_use]
    pub const fn min(&self) -> Duration {
        self.min
    }

    /// Returns the upper bound.
    #[must_use]
    pub const fn max(&self) -> Duration {
        self.max
    }

    /// Draws one delay from the configured range.
    ///
    /// Falls back to the lower bound when no entropy is available.
    #[must_use]
    pub fn sample(&self) -> Duration {
        let span_ms = u64::try_from(self.max.saturating_sub(self.min).as_millis())
            .unwrap_or(u64::MAX);
        if span_ms == 0 {
            return self.min;
        }
        let jitter_ms = random_u64()
            .and_then(|value| value.checked_rem(span_ms.saturating_add(1)))
            .unwrap_or(0);
        self.min.saturating_add(Duration::from_millis(jitter_ms))
    }

    /// Sleeps for one sampled delay.
    pub async fn wait(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::between_millis(DEFAULT_MIN_LATENCY_MS, DEFAULT_MAX_LATENCY_MS)
    }
}

fn random_u64() -> Option<u64> {
    let mut bytes = [0_u8; std::mem::size_of::<u64>()];
    getrandom::fill(&mut bytes).ok()?;
    Some(
        bytes
            .iter()
            .fold(0_u64, |acc, byte| (acc << 8) | u64::from(*byte)),
    )
}
