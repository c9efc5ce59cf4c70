use serde::{Deserialize, Serialize};

use crate::alias::EntityId;

/// Body of `POST /score-only`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub liquor_id: EntityId,
    pub ingredient_id: EntityId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: f64,
}

/// Body of `POST /explanation-only`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    pub liquor_id: EntityId,
    pub ingredient_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Oracle explanation, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpt_explanation: Option<String>,
}

/// One row of `GET /liquors` or `GET /ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityListing {
    pub id: EntityId,
    #[serde(default)]
    pub name: String,
}
