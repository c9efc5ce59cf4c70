use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::alias::KindFilter;
use crate::constants::MAX_RANKED;
use crate::oracle::PairingOracle;

use super::error::GatewayError;
use super::payload::{
    BatchRequest, BatchResponse, ExplainRequest, RecommendRequest, ResolveQuery,
    ResolveResponse, SearchRequest,
};
use super::state::HandlerState;
use super::status::{PAIRING_STATUS_HEADER, PairingStatus};

/// Largest candidate list accepted by the batch endpoint.
pub const MAX_BATCH_CANDIDATES: usize = 1000;

pub(crate) fn make_response<T: Serialize>(status: PairingStatus, body: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        PAIRING_STATUS_HEADER,
        HeaderValue::from_static(status.as_header_value()),
    );
    (StatusCode::OK, headers, Json(body)).into_response()
}

/// Extractor rejections and schema errors both become [`GatewayError::InvalidRequest`], so they
/// carry the status header.
fn parse_body<T: DeserializeOwned>(
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<T, GatewayError> {
    let Json(body) = body.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;
    serde_json::from_value(body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))
}

fn require_term(field: &str, value: &str) -> Result<(), GatewayError> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(format!(
            "'{}' must not be empty",
            field
        )));
    }
    Ok(())
}

#[instrument(skip(state), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn resolve_handler<O>(
    State(state): State<HandlerState<O>>,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    O: PairingOracle + 'static,
{
    let Query(query) = query.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid query: {}", rejection.body_text()))
    })?;
    let kind: KindFilter = query
        .kind
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(GatewayError::InvalidRequest)?;

    let candidates = state.service.resolve(&query.term, kind);
    debug!(found = candidates.len(), "Resolve request served");

    Ok(make_response(
        PairingStatus::Resolved,
        ResolveResponse {
            term: query.term,
            kind,
            candidates,
        },
    ))
}

/// Search both terms. Empty terms are not rejected here: they resolve to nothing and come back
/// as an unresolvable 404 with the other side's candidates.
#[instrument(skip(state, body), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn search_handler<O>(
    State(state): State<HandlerState<O>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    O: PairingOracle + 'static,
{
    let request: SearchRequest = parse_body(body)?;

    let result = state
        .service
        .find_best_pairing(&request.liquor, &request.ingredient)
        .await?;

    Ok(make_response(PairingStatus::Found, result))
}

#[instrument(skip(state, body), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn batch_handler<O>(
    State(state): State<HandlerState<O>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    O: PairingOracle + 'static,
{
    let request: BatchRequest = parse_body(body)?;
    if request.candidate_ids.len() > MAX_BATCH_CANDIDATES {
        return Err(GatewayError::InvalidRequest(format!(
            "at most {} candidate_ids per batch, got {}",
            MAX_BATCH_CANDIDATES,
            request.candidate_ids.len()
        )));
    }

    let results = state
        .service
        .batch_score(request.entity_id, request.kind, &request.candidate_ids)
        .await;

    Ok(make_response(
        PairingStatus::Scored,
        BatchResponse {
            entity_id: request.entity_id,
            kind: request.kind,
            succeeded: results.iter().filter(|r| r.success).count(),
            results,
        },
    ))
}

#[instrument(skip(state, body), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn recommend_handler<O>(
    State(state): State<HandlerState<O>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    O: PairingOracle + 'static,
{
    let request: RecommendRequest = parse_body(body)?;
    require_term("term", &request.term)?;

    let set = state
        .service
        .recommend(
            &request.term,
            request.kind,
            request.limit.unwrap_or(MAX_RANKED),
        )
        .await?;

    Ok(make_response(PairingStatus::Recommended, set))
}

#[instrument(skip(state, body), fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn explain_handler<O>(
    State(state): State<HandlerState<O>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    O: PairingOracle + 'static,
{
    let request: ExplainRequest = parse_body(body)?;

    let explanation = state
        .service
        .explain(request.liquor_id, request.ingredient_id, request.score)
        .await?;

    Ok(make_response(PairingStatus::Explained, explanation))
}
