//! Retry policy for idempotent API calls. Only list endpoints go through
//! here; mutations are never replayed.

use anyhow::Result;
use log::{debug, warn};
use std::time::Duration;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(20),
            backoff_multiplier: 2.0,
        }
    }
}

pub async fn retry_with_exponential_backoff<T, F, Fut>(
    config: &RetryConfig,
    operation: F,
) -> Result<T>
where
    F: Fn() -> Fut,
    Fut: std::future::Future<Output = Result<T>> + Send + 'static,
{
    let mut delay = config.base_delay;
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!("Succeeded on attempt {}", attempt);
                }
                return Ok(value);
            }
            Err(e) if attempt < config.max_attempts && is_transient_error(&e) => {
                debug!("Attempt {} failed, retrying in {:?}: {}", attempt, delay, e);
                tokio::time::sleep(delay).await;
                let scaled = (delay.as_millis() as f64 * config.backoff_multiplier) as u64;
                delay = Duration::from_millis(scaled).min(config.max_delay);
                attempt += 1;
            }
            Err(e) => {
                if attempt > 1 {
                    warn!("Giving up after {} attempts: {}", attempt, e);
                }
                return Err(e);
            }
        }
    }
}

/// Only failures worth a second attempt: connection-level transport errors
/// and the HTTP statuses the backend emits while overloaded or restarting.
/// Everything else (auth, validation, 404s, conflicts) fails immediately.
fn is_transient_error(error: &anyhow::Error) -> bool {
    match error.downcast_ref::<AppError>() {
        Some(AppError::Network(e)) => e.is_timeout() || e.is_connect(),
        Some(AppError::Api { status, .. }) => matches!(*status, 408 | 429),
        // 5xx responses are mapped to OperationFailed by the send layer
        Some(AppError::OperationFailed(_)) => true,
        _ => false,
    }
}
