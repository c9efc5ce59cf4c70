//! Pairing service: the resolver, searches and oracle wired together behind one handle.

use std::sync::Arc;
use tracing::instrument;

use crate::alias::{AliasIndex, EntityId, EntityKind, KindFilter};
use crate::oracle::{Explanation, OracleError, PairingOracle};
use crate::resolver::{Candidate, EntityResolver, PriorityTable};
use crate::search::{
    Anchor, BatchScore, BatchScorer, CombinationSearch, FanOutConfig, RecommendConfig,
    RecommendationSet, Recommender, SearchResult, Unresolvable, with_deadline,
};

/// Tunables for a [`PairingService`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSettings {
    pub fanout: FanOutConfig,
    pub recommend: RecommendConfig,
    pub priorities: Option<PriorityTable>,
}

pub struct PairingService<O> {
    resolver: Arc<EntityResolver>,
    oracle: Arc<O>,
    search: CombinationSearch<O>,
    batch: BatchScorer<O>,
    recommender: Recommender<O>,
    fanout: FanOutConfig,
}

impl<O> std::fmt::Debug for PairingService<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairingService")
            .field("search", &self.search)
            .field("recommender", &self.recommender)
            .finish_non_exhaustive()
    }
}

impl<O: PairingOracle> PairingService<O> {
    pub fn new(index: Arc<AliasIndex>, oracle: Arc<O>, settings: ServiceSettings) -> Self {
        let resolver = Arc::new(match settings.priorities {
            Some(priorities) => EntityResolver::with_priorities(index, priorities),
            None => EntityResolver::new(index),
        });
        let fanout = settings.fanout;

        Self {
            search: CombinationSearch::new(Arc::clone(&resolver), Arc::clone(&oracle), fanout),
            batch: BatchScorer::new(Arc::clone(&oracle), fanout),
            recommender: Recommender::new(
                Arc::clone(&resolver),
                Arc::clone(&oracle),
                fanout,
                settings.recommend,
            ),
            resolver,
            oracle,
            fanout,
        }
    }

    pub fn index(&self) -> &AliasIndex {
        self.resolver.index()
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    #[instrument(skip(self))]
    pub fn resolve(&self, term: &str, filter: KindFilter) -> Vec<Candidate> {
        self.resolver.resolve(term, filter)
    }

    #[instrument(skip(self))]
    pub async fn find_best_pairing(
        &self,
        liquor_term: &str,
        ingredient_term: &str,
    ) -> Result<SearchResult, Unresolvable> {
        self.search
            .find_best_pairing(liquor_term, ingredient_term)
            .await
    }

    #[instrument(skip(self, candidate_ids), fields(candidates = candidate_ids.len()))]
    pub async fn batch_score(
        &self,
        entity_id: EntityId,
        kind: EntityKind,
        candidate_ids: &[EntityId],
    ) -> Vec<BatchScore> {
        self.batch
            .score(Anchor::new(entity_id, kind), candidate_ids)
            .await
    }

    #[instrument(skip(self))]
    pub async fn recommend(
        &self,
        term: &str,
        kind: EntityKind,
        limit: usize,
    ) -> Result<RecommendationSet, Unresolvable> {
        self.recommender.recommend(term, kind, limit).await
    }

    /// Forwards to the oracle's explanation endpoint under the per-call deadline.
    #[instrument(skip(self))]
    pub async fn explain(
        &self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
        score: Option<f64>,
    ) -> Result<Explanation, OracleError> {
        with_deadline(
            self.fanout.call_timeout,
            self.oracle.explain(liquor_id, ingredient_id, score),
        )
        .await
    }
}
