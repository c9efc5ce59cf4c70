use std::time::Duration;

use futures_util::future::join_all;
use tokio::sync::Semaphore;

use crate::alias::EntityId;
use crate::constants::{DEFAULT_MAX_CONCURRENCY, DEFAULT_ORACLE_TIMEOUT_MS};
use crate::oracle::{OracleError, PairingOracle};

/// Bounds for one fan-out of oracle calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOutConfig {
    /// Calls allowed in flight at once. `0` is treated as `1`.
    pub max_concurrency: usize,
    /// Deadline for a single call, not counting time spent waiting for a permit.
    pub call_timeout: Duration,
}

impl Default for FanOutConfig {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            call_timeout: Duration::from_millis(DEFAULT_ORACLE_TIMEOUT_MS),
        }
    }
}

/// Runs `future` under the per-call deadline.
pub async fn with_deadline<T>(
    timeout: Duration,
    future: impl std::future::Future<Output = Result<T, OracleError>>,
) -> Result<T, OracleError> {
    match tokio::time::timeout(timeout, future).await {
        Ok(result) => result,
        Err(_) => Err(OracleError::Timeout {
            after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        }),
    }
}

/// Scores every `(liquor_id, ingredient_id)` pair concurrently.
///
/// Results are returned in input order. A failed or timed-out call yields an `Err` in its slot
/// and never cancels its siblings.
pub async fn score_pairs<O: PairingOracle>(
    oracle: &O,
    pairs: &[(EntityId, EntityId)],
    config: &FanOutConfig,
) -> Vec<Result<f64, OracleError>> {
    if pairs.is_empty() {
        return Vec::new();
    }

    let permits = Semaphore::new(config.max_concurrency.max(1));

    let calls = pairs.iter().map(|&(liquor_id, ingredient_id)| {
        let permits = &permits;
        async move {
            let _permit = permits
                .acquire()
                .await
                .map_err(|_| OracleError::Unavailable {
                    reason: "fan-out permit pool closed".to_string(),
                })?;
            with_deadline(config.call_timeout, oracle.score(liquor_id, ingredient_id)).await
        }
    });

    join_all(calls).await
}
