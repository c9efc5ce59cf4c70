use std::sync::Arc;
use tracing::{debug, warn};

use crate::alias::EntityId;
use crate::oracle::PairingOracle;

use super::fanout::{FanOutConfig, score_pairs};
use super::types::{Anchor, BatchScore};

/// Scores one fixed entity against many candidates in parallel.
///
/// Best effort: each candidate gets its own [`BatchScore`], failures included, in request order.
/// No filtering or ranking happens here.
pub struct BatchScorer<O> {
    oracle: Arc<O>,
    fanout: FanOutConfig,
}

impl<O> Clone for BatchScorer<O> {
    fn clone(&self) -> Self {
        Self {
            oracle: Arc::clone(&self.oracle),
            fanout: self.fanout,
        }
    }
}

impl<O: PairingOracle> BatchScorer<O> {
    pub fn new(oracle: Arc<O>, fanout: FanOutConfig) -> Self {
        Self { oracle, fanout }
    }

    pub async fn score(&self, anchor: Anchor, candidate_ids: &[EntityId]) -> Vec<BatchScore> {
        let pairs: Vec<_> = candidate_ids.iter().map(|&id| anchor.orient(id)).collect();
        let outcomes = score_pairs(self.oracle.as_ref(), &pairs, &self.fanout).await;

        let results: Vec<BatchScore> = candidate_ids
            .iter()
            .zip(outcomes)
            .map(|(&candidate_id, outcome)| match outcome {
                Ok(raw) => BatchScore::scored(candidate_id, raw),
                Err(e) => {
                    warn!(
                        anchor_id = anchor.id,
                        anchor_kind = %anchor.kind,
                        candidate_id,
                        kind = e.kind(),
                        error = %e,
                        "Batch scoring call failed"
                    );
                    BatchScore::failed(candidate_id, e.to_string())
                }
            })
            .collect();

        debug!(
            anchor_id = anchor.id,
            anchor_kind = %anchor.kind,
            requested = candidate_ids.len(),
            succeeded = results.iter().filter(|r| r.success).count(),
            "Batch scored"
        );

        results
    }
}
