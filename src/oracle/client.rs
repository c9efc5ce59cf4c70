use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::OracleError;
use super::model::{
    EntityListing, Explanation, ExplanationRequest, ScoreRequest, ScoreResponse,
};
use crate::alias::{EntityId, EntityKind};

const SCORE_PATH: &str = "score-only";
const EXPLANATION_PATH: &str = "explanation-only";
const LIQUORS_PATH: &str = "liquors";
const INGREDIENTS_PATH: &str = "ingredients";

/// Longest error body kept in [`OracleError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// The external compatibility-scoring service.
///
/// Implementations must be safe to call concurrently; the search layer fans out many calls at
/// once and applies its own per-call deadline on top of any transport timeout.
pub trait PairingOracle: Send + Sync {
    /// Raw compatibility score of a `(liquor, ingredient)` pair.
    fn score(
        &self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
    ) -> impl std::future::Future<Output = Result<f64, OracleError>> + Send;

    /// Natural-language explanation for a pair. `score` avoids a second scoring call.
    fn explain(
        &self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
        score: Option<f64>,
    ) -> impl std::future::Future<Output = Result<Explanation, OracleError>> + Send;

    /// Every entity of `kind` the oracle can score.
    fn list_entities(
        &self,
        kind: EntityKind,
    ) -> impl std::future::Future<Output = Result<Vec<EntityListing>, OracleError>> + Send;
}

#[derive(Clone, Debug)]
/// HTTP oracle client.
pub struct HttpOracle {
    http: HttpClient,
    base_url: String,
}

impl HttpOracle {
    /// Creates a client for `base_url` with a transport-level `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, OracleError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(OracleError::InvalidConfig {
                reason: format!("base URL must be http(s): '{}'", base_url),
            });
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OracleError::InvalidConfig {
                reason: e.to_string(),
            })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, OracleError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let endpoint = self.endpoint(path);
        let request = self.http.post(&endpoint).json(body);
        Self::send(request, endpoint).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, OracleError> {
        let endpoint = self.endpoint(path);
        let request = self.http.get(&endpoint);
        Self::send(request, endpoint).await
    }

    async fn send<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
        endpoint: String,
    ) -> Result<T, OracleError> {
        let resp = request.send().await.map_err(|e| OracleError::Transport {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let status = resp.status();
        if !status.is_success() {
            debug!(endpoint = %endpoint, status = status.as_u16(), "Oracle returned error status");
            let mut body = resp.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|&i| body.is_char_boundary(i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(OracleError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| OracleError::Transport {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        serde_json::from_slice(&bytes).map_err(|e| OracleError::MalformedPayload {
            endpoint,
            reason: e.to_string(),
        })
    }
}

impl PairingOracle for HttpOracle {
    async fn score(&self, liquor_id: EntityId, ingredient_id: EntityId) -> Result<f64, OracleError> {
        let response: ScoreResponse = self
            .post_json(
                SCORE_PATH,
                &ScoreRequest {
                    liquor_id,
                    ingredient_id,
                },
            )
            .await?;

        if !response.score.is_finite() {
            return Err(OracleError::MalformedPayload {
                endpoint: self.endpoint(SCORE_PATH),
                reason: format!("non-finite score {}", response.score),
            });
        }

        Ok(response.score)
    }

    async fn explain(
        &self,
        liquor_id: EntityId,
        ingredient_id: EntityId,
        score: Option<f64>,
    ) -> Result<Explanation, OracleError> {
        self.post_json(
            EXPLANATION_PATH,
            &ExplanationRequest {
                liquor_id,
                ingredient_id,
                score,
            },
        )
        .await
    }

    async fn list_entities(&self, kind: EntityKind) -> Result<Vec<EntityListing>, OracleError> {
        let path = match kind {
            EntityKind::Liquor => LIQUORS_PATH,
            EntityKind::Ingredient => INGREDIENTS_PATH,
        };
        self.get_json(path).await
    }
}
