use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::oracle::OracleError;
use crate::resolver::Candidate;
use crate::search::{Unresolvable, UnresolvableReason};

use super::status::{PAIRING_STATUS_HEADER, PairingStatus};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Unresolvable(#[from] Unresolvable),

    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),
}

impl GatewayError {
    pub fn status(&self) -> PairingStatus {
        match self {
            GatewayError::InvalidRequest(_) => PairingStatus::InvalidRequest,
            GatewayError::Unresolvable(_) => PairingStatus::Unresolvable,
            GatewayError::Oracle(_) => PairingStatus::OracleError,
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// 404 body: the reason plus whatever candidates were found, so clients can refine the query.
#[derive(serde::Serialize)]
pub struct UnresolvableResponse {
    pub error: String,
    pub code: u16,
    pub reason: UnresolvableReason,
    pub liquor_candidates: Vec<Candidate>,
    pub ingredient_candidates: Vec<Candidate>,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let pairing_status = self.status();

        let mut headers = HeaderMap::new();
        headers.insert(
            PAIRING_STATUS_HEADER,
            HeaderValue::from_static(pairing_status.as_header_value()),
        );

        match self {
            GatewayError::Unresolvable(unresolvable) => {
                let status = StatusCode::NOT_FOUND;
                let body = Json(UnresolvableResponse {
                    error: unresolvable.reason.to_string(),
                    code: status.as_u16(),
                    reason: unresolvable.reason,
                    liquor_candidates: unresolvable.liquor_candidates,
                    ingredient_candidates: unresolvable.ingredient_candidates,
                });
                (status, headers, body).into_response()
            }
            other => {
                let status = match other {
                    GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                    _ => StatusCode::BAD_GATEWAY,
                };
                let body = Json(ErrorResponse {
                    error: other.to_string(),
                    code: status.as_u16(),
                });
                (status, headers, body).into_response()
            }
        }
    }
}
