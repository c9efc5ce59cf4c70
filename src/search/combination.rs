use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::alias::KindFilter;
use crate::constants::MAX_RANKED;
use crate::oracle::PairingOracle;
use crate::resolver::{Candidate, EntityResolver};

use super::error::{Unresolvable, UnresolvableReason};
use super::fanout::{FanOutConfig, score_pairs};
use super::types::{Combination, SearchResult};

/// Two-term pairing search: resolve both sides, score the bounded cross-product, rank.
pub struct CombinationSearch<O> {
    resolver: Arc<EntityResolver>,
    oracle: Arc<O>,
    fanout: FanOutConfig,
}

impl<O> std::fmt::Debug for CombinationSearch<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinationSearch")
            .field("fanout", &self.fanout)
            .finish_non_exhaustive()
    }
}

impl<O: PairingOracle> CombinationSearch<O> {
    pub fn new(resolver: Arc<EntityResolver>, oracle: Arc<O>, fanout: FanOutConfig) -> Self {
        Self {
            resolver,
            oracle,
            fanout,
        }
    }

    /// Finds the best-scoring pairing of `liquor_term` and `ingredient_term`.
    ///
    /// At most `MAX_CANDIDATES²` oracle calls are made. Pairs whose call fails are logged and
    /// left out; the search only fails when a side resolves to nothing or every call fails.
    pub async fn find_best_pairing(
        &self,
        liquor_term: &str,
        ingredient_term: &str,
    ) -> Result<SearchResult, Unresolvable> {
        let liquors = self.resolver.resolve(liquor_term, KindFilter::Liquor);
        let ingredients = self.resolver.resolve(ingredient_term, KindFilter::Ingredient);

        let missing = match (liquors.is_empty(), ingredients.is_empty()) {
            (true, true) => Some(UnresolvableReason::NoMatch),
            (true, false) => Some(UnresolvableReason::NoLiquorMatch),
            (false, true) => Some(UnresolvableReason::NoIngredientMatch),
            (false, false) => None,
        };
        if let Some(reason) = missing {
            debug!(liquor_term, ingredient_term, reason = reason.code(), "Unresolvable pairing");
            return Err(Unresolvable::new(reason).with_candidates(liquors, ingredients));
        }

        let pairs: Vec<(&Candidate, &Candidate)> = liquors
            .iter()
            .flat_map(|l| ingredients.iter().map(move |i| (l, i)))
            .collect();
        let ids: Vec<_> = pairs.iter().map(|(l, i)| (l.id(), i.id())).collect();
        let attempted = ids.len();

        debug!(
            liquor_term,
            ingredient_term,
            liquors = liquors.len(),
            ingredients = ingredients.len(),
            attempted,
            "Scoring candidate pairs"
        );

        let outcomes = score_pairs(self.oracle.as_ref(), &ids, &self.fanout).await;

        let mut scored = Vec::with_capacity(attempted);
        for ((liquor, ingredient), outcome) in pairs.into_iter().zip(outcomes) {
            match outcome {
                Ok(raw) => scored.push(Combination::new(liquor.clone(), ingredient.clone(), raw)),
                Err(e) => warn!(
                    liquor_id = liquor.id(),
                    ingredient_id = ingredient.id(),
                    kind = e.kind(),
                    error = %e,
                    "Pair scoring failed"
                ),
            }
        }

        if scored.is_empty() {
            error!(
                liquor_term,
                ingredient_term, attempted, "Every pair failed to score"
            );
            return Err(
                Unresolvable::new(UnresolvableReason::AllPairsFailed { attempted })
                    .with_candidates(liquors, ingredients),
            );
        }

        let best = scored
            .iter()
            .fold(None::<&Combination>, |best, c| match best {
                Some(b) if c.raw_score().total_cmp(&b.raw_score()).is_le() => Some(b),
                _ => Some(c),
            })
            .cloned();

        let tested_count = scored.len();
        let mut ranked = scored;
        ranked.sort_by(|a, b| b.raw_score().total_cmp(&a.raw_score()));
        ranked.truncate(MAX_RANKED);

        if let Some(best) = &best {
            debug!(
                tested_count,
                attempted,
                liquor = best.liquor.name(),
                ingredient = best.ingredient.name(),
                raw_score = best.raw_score(),
                normalized = best.normalized_score(),
                "Pairing search complete"
            );
        }

        Ok(SearchResult {
            best,
            ranked,
            tested_count,
            attempted,
            liquor_candidates: liquors,
            ingredient_candidates: ingredients,
        })
    }
}
