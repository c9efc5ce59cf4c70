use serde::{Deserialize, Serialize};

use crate::alias::{EntityId, EntityKind, KindFilter};
use crate::resolver::Candidate;
use crate::search::BatchScore;

#[derive(Debug, Clone, Deserialize)]
pub struct ResolveQuery {
    pub term: String,
    #[serde(default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveResponse {
    pub term: String,
    pub kind: KindFilter,
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub liquor: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub candidate_ids: Vec<EntityId>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub succeeded: usize,
    pub results: Vec<BatchScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub term: String,
    pub kind: EntityKind,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub liquor_id: EntityId,
    pub ingredient_id: EntityId,
    #[serde(default)]
    pub score: Option<f64>,
}
