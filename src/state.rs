use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime};

use crate::config::Config;

/// Toggles read on every request; adjustable without a restart.
#[derive(Debug)]
pub struct RuntimeConfig {
    pub assess_delay_ms: AtomicU64,
    pub fallback_enabled: AtomicBool,
}

impl RuntimeConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            assess_delay_ms: AtomicU64::new(config.assess_delay_ms),
            fallback_enabled: AtomicBool::new(config.fallback_enabled),
        }
    }

    pub fn is_fallback_enabled(&self) -> bool {
        self.fallback_enabled.load(Ordering::Relaxed)
    }

    pub fn assess_delay(&self) -> Duration {
        Duration::from_millis(self.assess_delay_ms.load(Ordering::Relaxed))
    }

    pub async fn maybe_assess_delay(&self) {
        let delay = self.assess_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    runtime: Arc<RuntimeConfig>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            runtime: Arc::new(RuntimeConfig::from_config(config)),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn runtime(&self) -> Arc<RuntimeConfig> {
        Arc::clone(&self.runtime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let runtime = RuntimeConfig::default();
        let started = Instant::now();
        runtime.maybe_assess_delay().await;
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn test_runtime_follows_config() {
        let config = Config {
            assess_delay_ms: 250,
            fallback_enabled: true,
            ..Config::default()
        };
        let state = AppState::new(&config);
        assert!(state.runtime().is_fallback_enabled());
        assert_eq!(state.runtime().assess_delay(), Duration::from_millis(250));
    }
}
