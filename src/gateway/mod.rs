//! HTTP gateway (Axum) over the pairing service.
//!
//! Every response, errors included, carries an [`PAIRING_STATUS_HEADER`] naming the outcome.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;
pub mod status;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{
    batch_handler, explain_handler, recommend_handler, resolve_handler, search_handler,
};
pub use state::HandlerState;
pub use status::{PAIRING_STATUS_HEADER, PairingStatus};

use crate::alias::{EntityKind, TableOrigins};
use crate::oracle::PairingOracle;

pub fn create_router_with_state<O>(state: HandlerState<O>) -> Router
where
    O: PairingOracle + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<O>))
        .route("/v1/resolve", get(resolve_handler::<O>))
        .route("/v1/pairings/search", post(search_handler::<O>))
        .route("/v1/pairings/batch", post(batch_handler::<O>))
        .route("/v1/pairings/recommend", post(recommend_handler::<O>))
        .route("/v1/pairings/explain", post(explain_handler::<O>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub alias_tables: TableOrigins,
    pub liquors: usize,
    pub ingredients: usize,
    pub aliases: usize,
    pub oracle_url: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        PAIRING_STATUS_HEADER,
        HeaderValue::from_static(PairingStatus::Healthy.as_header_value()),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// Always ready once serving: the alias index is built before the listener starts and
/// the oracle is only reached per request.
#[tracing::instrument(skip(state))]
pub async fn ready_handler<O>(State(state): State<HandlerState<O>>) -> Response
where
    O: PairingOracle + 'static,
{
    let index = state.service.index();

    let components = ComponentStatus {
        http: "ready",
        alias_tables: index.origins(),
        liquors: index.entity_count(EntityKind::Liquor),
        ingredients: index.entity_count(EntityKind::Ingredient),
        aliases: index.alias_count(),
        oracle_url: state.oracle_url.clone(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        PAIRING_STATUS_HEADER,
        HeaderValue::from_static(PairingStatus::Ready.as_header_value()),
    );

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
