// clarity-core/src/infrastructure/fixtures/latency.rs

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

use crate::domain::fixtures::FixtureKind;
use crate::domain::settings::LatencyConfig;
use crate::error::ClarityError;
use crate::ports::FixtureSource;

/// Delays every load by a uniformly sampled duration in `[min, max)` ms.
/// An empty window (`min == max`) always waits `min`.
#[derive(Debug, Clone)]
pub struct SimulatedLatency<S> {
    inner: S,
    window: LatencyConfig,
}

impl<S> SimulatedLatency<S> {
    pub fn new(inner: S, window: LatencyConfig) -> Self {
        Self { inner, window }
    }

    pub fn window(&self) -> LatencyConfig {
        self.window
    }

    pub fn sample_delay(&self) -> Duration {
        if self.window.is_disabled() {
            return Duration::ZERO;
        }
        let LatencyConfig { min_ms, max_ms } = self.window;
        let ms = if min_ms >= max_ms {
            min_ms
        } else {
            rand::rng().random_range(min_ms..max_ms)
        };
        Duration::from_millis(ms)
    }
}

#[async_trait]
impl<S: FixtureSource> FixtureSource for SimulatedLatency<S> {
    async fn load_raw(&self, kind: FixtureKind) -> Result<serde_json::Value, ClarityError> {
        let delay = self.sample_delay();
        if !delay.is_zero() {
            debug!(fixture = %kind, delay_ms = delay.as_millis() as u64, "Simulating network latency");
            tokio::time::sleep(delay).await;
        }
        self.inner.load_raw(kind).await
    }
}
