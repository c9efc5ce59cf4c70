use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::alias::{EntityId, EntityKind};
use crate::oracle::{EntityListing, Explanation, OracleError, PairingOracle};

#[derive(Debug, Clone)]
enum PairOutcome {
    Score(f64),
    Fail(String),
}

/// In-memory oracle for tests.
///
/// Unconfigured pairs get a deterministic score from [`MockOracle::default_score`]. Every call
/// is recorded so tests can assert on call counts and peak concurrency.
#[derive(Debug, Default)]
pub struct MockOracle {
    outcomes: HashMap<(EntityId, EntityId), PairOutcome>,
    pair_delays: HashMap<(EntityId, EntityId), Duration>,
    delay: Option<Duration>,
    listings: HashMap<EntityKind, Vec<EntityListing>>,
    fail_explanations: bool,
    calls: RwLock<Vec<(EntityId, EntityId)>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

struct InFlightGuard<'a>(&'a AtomicUsize);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl MockOracle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic score in `[-5.0, 5.9]` for unconfigured pairs.
    pub fn default_score(liquor_id: EntityId, ingredient_id: EntityId) -> f64 {
        let mixed = liquor_id
            .wrapping_mul(31)
            .wrapping_add(ingredient_id.wrapping_mul(17))
            % 110;
        mixed as f64 / 10.0 - 5.0
    }

    pub fn with_score(mut self, liquor_id: EntityId, ingredient_id: EntityId, score: f64) -> Self {
        self.outcomes
            .insert((liquor_id, ingredient_id), PairOutcome::Score(score));
        self
    }

    pub fn with_failure(
        mut self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
        reason: &str,
    ) -> Self {
        self.outcomes.insert(
            (liquor_id, ingredient_id),
            PairOutcome::Fail(reason.to_string()),
        );
        self
    }

    /// Delay applied to every score call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Delay applied to one pair, on top of [`MockOracle::with_delay`].
    pub fn with_pair_delay(
        mut self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
        delay: Duration,
    ) -> Self {
        self.pair_delays.insert((liquor_id, ingredient_id), delay);
        self
    }

    pub fn with_listing(mut self, kind: EntityKind, listing: Vec<EntityListing>) -> Self {
        self.listings.insert(kind, listing);
        self
    }

    pub fn failing_explanations(mut self) -> Self {
        self.fail_explanations = true;
        self
    }

    /// Number of score calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().map(|c| c.len()).unwrap_or(0)
    }

    /// `(liquor_id, ingredient_id)` of every score call, in start order.
    pub fn calls(&self) -> Vec<(EntityId, EntityId)> {
        self.calls.read().map(|c| c.clone()).unwrap_or_default()
    }

    /// Highest number of score calls observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl PairingOracle for MockOracle {
    async fn score(&self, liquor_id: EntityId, ingredient_id: EntityId) -> Result<f64, OracleError> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push((liquor_id, ingredient_id));
        }

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        let _guard = InFlightGuard(&self.in_flight);

        let delay = self.delay.unwrap_or_default()
            + self
                .pair_delays
                .get(&(liquor_id, ingredient_id))
                .copied()
                .unwrap_or_default();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match self.outcomes.get(&(liquor_id, ingredient_id)) {
            Some(PairOutcome::Score(score)) => Ok(*score),
            Some(PairOutcome::Fail(reason)) => Err(OracleError::Unavailable {
                reason: reason.clone(),
            }),
            None => Ok(Self::default_score(liquor_id, ingredient_id)),
        }
    }

    async fn explain(
        &self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
        score: Option<f64>,
    ) -> Result<Explanation, OracleError> {
        if self.fail_explanations {
            return Err(OracleError::Unavailable {
                reason: "explanations disabled".to_string(),
            });
        }

        let score = score.unwrap_or_else(|| Self::default_score(liquor_id, ingredient_id));
        Ok(Explanation {
            explanation: format!(
                "liquor {} and ingredient {} scored {:.2}",
                liquor_id, ingredient_id, score
            ),
            gpt_explanation: None,
        })
    }

    async fn list_entities(&self, kind: EntityKind) -> Result<Vec<EntityListing>, OracleError> {
        self.listings
            .get(&kind)
            .cloned()
            .ok_or_else(|| OracleError::Unavailable {
                reason: format!("no {} listing configured", kind),
            })
    }
}
