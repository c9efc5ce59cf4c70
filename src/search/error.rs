use serde::Serialize;
use thiserror::Error;

use crate::resolver::Candidate;

/// Why a search produced no result.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum UnresolvableReason {
    #[error("no liquor matches the query")]
    NoLiquorMatch,

    #[error("no ingredient matches the query")]
    NoIngredientMatch,

    #[error("neither term matches a known entity")]
    NoMatch,

    #[error("all {attempted} oracle calls failed")]
    AllPairsFailed { attempted: usize },

    #[error("no partner entities available")]
    NoPartners,
}

impl UnresolvableReason {
    pub fn code(&self) -> &'static str {
        match self {
            UnresolvableReason::NoLiquorMatch => "no_liquor_match",
            UnresolvableReason::NoIngredientMatch => "no_ingredient_match",
            UnresolvableReason::NoMatch => "no_match",
            UnresolvableReason::AllPairsFailed { .. } => "all_pairs_failed",
            UnresolvableReason::NoPartners => "no_partners",
        }
    }
}

/// A query that could not be answered, with whatever candidates were found on the way so the
/// caller can refine it.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[error("unresolvable: {reason}")]
pub struct Unresolvable {
    pub reason: UnresolvableReason,
    pub liquor_candidates: Vec<Candidate>,
    pub ingredient_candidates: Vec<Candidate>,
}

impl Unresolvable {
    pub fn new(reason: UnresolvableReason) -> Self {
        Self {
            reason,
            liquor_candidates: Vec::new(),
            ingredient_candidates: Vec::new(),
        }
    }

    pub fn with_candidates(
        mut self,
        liquor_candidates: Vec<Candidate>,
        ingredient_candidates: Vec<Candidate>,
    ) -> Self {
        self.liquor_candidates = liquor_candidates;
        self.ingredient_candidates = ingredient_candidates;
        self
    }
}
