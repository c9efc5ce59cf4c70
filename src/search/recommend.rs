use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::alias::{Entity, EntityId, EntityKind};
use crate::constants::{DEFAULT_MAX_PARTNERS, MAX_RANKED};
use crate::oracle::PairingOracle;
use crate::resolver::{Candidate, EntityResolver};
use crate::scoring::Scored;

use super::batch::BatchScorer;
use super::error::{Unresolvable, UnresolvableReason};
use super::fanout::{FanOutConfig, with_deadline};
use super::types::{Anchor, PartnerSource, Recommendation, RecommendationSet};

/// Where recommendation partners come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendConfig {
    /// Upper bound on partners scored per request.
    pub max_partners: usize,
    /// Liquor ids used as partners when recommending for an ingredient.
    pub sample_liquor_ids: Vec<EntityId>,
    /// Ingredient ids used as partners when recommending for a liquor.
    pub sample_ingredient_ids: Vec<EntityId>,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            max_partners: DEFAULT_MAX_PARTNERS,
            sample_liquor_ids: Vec::new(),
            sample_ingredient_ids: Vec::new(),
        }
    }
}

impl RecommendConfig {
    fn samples(&self, kind: EntityKind) -> &[EntityId] {
        match kind {
            EntityKind::Liquor => &self.sample_liquor_ids,
            EntityKind::Ingredient => &self.sample_ingredient_ids,
        }
    }
}

/// Recommends partners of the opposite kind for one free-text term.
pub struct Recommender<O> {
    resolver: Arc<EntityResolver>,
    oracle: Arc<O>,
    scorer: BatchScorer<O>,
    fanout: FanOutConfig,
    config: RecommendConfig,
}

impl<O> std::fmt::Debug for Recommender<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("fanout", &self.fanout)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

struct Partners {
    source: PartnerSource,
    ids: Vec<EntityId>,
    listed_names: Vec<(EntityId, String)>,
}

impl<O: PairingOracle> Recommender<O> {
    pub fn new(
        resolver: Arc<EntityResolver>,
        oracle: Arc<O>,
        fanout: FanOutConfig,
        config: RecommendConfig,
    ) -> Self {
        let scorer = BatchScorer::new(Arc::clone(&oracle), fanout);
        Self {
            resolver,
            oracle,
            scorer,
            fanout,
            config,
        }
    }

    /// Resolves `term` within `kind`, then scores its top candidate against partner entities.
    ///
    /// Returns at most `limit` recommendations (clamped to `1..=MAX_RANKED`), best raw score
    /// first.
    pub async fn recommend(
        &self,
        term: &str,
        kind: EntityKind,
        limit: usize,
    ) -> Result<RecommendationSet, Unresolvable> {
        let candidates = self.resolver.resolve(term, kind.into());
        let Some(anchor) = candidates.first().cloned() else {
            let reason = match kind {
                EntityKind::Liquor => UnresolvableReason::NoLiquorMatch,
                EntityKind::Ingredient => UnresolvableReason::NoIngredientMatch,
            };
            debug!(term, kind = %kind, "No anchor for recommendation");
            return Err(Unresolvable::new(reason));
        };

        let partner_kind = kind.opposite();
        let partners = self.partners(partner_kind).await;
        if partners.ids.is_empty() {
            return Err(Self::unresolvable(UnresolvableReason::NoPartners, kind, candidates));
        }

        let attempted = partners.ids.len();
        let results = self
            .scorer
            .score(Anchor::new(anchor.id(), kind), &partners.ids)
            .await;

        let mut recommendations: Vec<Recommendation> = results
            .into_iter()
            .filter_map(|r| {
                let raw = r.score.filter(|_| r.success)?;
                Some(Recommendation {
                    partner: self.partner_entity(partner_kind, r.candidate_id, &partners),
                    score: Scored::from_raw(raw),
                })
            })
            .collect();

        if recommendations.is_empty() {
            error!(
                term,
                anchor_id = anchor.id(),
                attempted,
                "Every partner failed to score"
            );
            return Err(Self::unresolvable(
                UnresolvableReason::AllPairsFailed { attempted },
                kind,
                candidates,
            ));
        }

        let tested_count = recommendations.len();
        recommendations.sort_by(|a, b| b.score.raw_score.total_cmp(&a.score.raw_score));
        recommendations.truncate(limit.clamp(1, MAX_RANKED));

        debug!(
            term,
            anchor = anchor.name(),
            partner_source = ?partners.source,
            tested_count,
            attempted,
            returned = recommendations.len(),
            "Recommendations ready"
        );

        Ok(RecommendationSet {
            anchor,
            partner_kind,
            partner_source: partners.source,
            tested_count,
            attempted,
            recommendations,
        })
    }

    /// Partner ids: configured samples, then the oracle listing, then the local catalog.
    async fn partners(&self, kind: EntityKind) -> Partners {
        let samples = self.config.samples(kind);
        if !samples.is_empty() {
            return self.capped(PartnerSource::Configured, samples.to_vec(), Vec::new());
        }

        match with_deadline(self.fanout.call_timeout, self.oracle.list_entities(kind)).await {
            Ok(listing) if !listing.is_empty() => {
                let ids = listing.iter().map(|l| l.id).collect();
                let names = listing.into_iter().map(|l| (l.id, l.name)).collect();
                return self.capped(PartnerSource::Oracle, ids, names);
            }
            Ok(_) => debug!(kind = %kind, "Oracle listing empty, using local catalog"),
            Err(e) => warn!(
                kind = %kind,
                error = %e,
                "Oracle listing unavailable, using local catalog"
            ),
        }

        let ids = self
            .resolver
            .index()
            .entities(kind)
            .map(|e| e.id)
            .collect();
        self.capped(PartnerSource::Catalog, ids, Vec::new())
    }

    fn capped(
        &self,
        source: PartnerSource,
        ids: Vec<EntityId>,
        listed_names: Vec<(EntityId, String)>,
    ) -> Partners {
        let mut seen = HashSet::new();
        let ids = ids
            .into_iter()
            .filter(|id| seen.insert(*id))
            .take(self.config.max_partners)
            .collect();
        Partners {
            source,
            ids,
            listed_names,
        }
    }

    fn partner_entity(&self, kind: EntityKind, id: EntityId, partners: &Partners) -> Entity {
        if let Some(entity) = self.resolver.index().entity(kind, id) {
            return entity;
        }
        let name = partners
            .listed_names
            .iter()
            .find(|(listed, name)| *listed == id && !name.is_empty())
            .map(|(_, name)| name.clone())
            .unwrap_or_else(|| format!("{}_{}", kind, id));
        Entity::new(id, name, kind)
    }

    fn unresolvable(
        reason: UnresolvableReason,
        kind: EntityKind,
        candidates: Vec<Candidate>,
    ) -> Unresolvable {
        match kind {
            EntityKind::Liquor => Unresolvable::new(reason).with_candidates(candidates, Vec::new()),
            EntityKind::Ingredient => {
                Unresolvable::new(reason).with_candidates(Vec::new(), candidates)
            }
        }
    }
}
