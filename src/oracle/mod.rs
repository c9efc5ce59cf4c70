//! External compatibility oracle.
//!
//! [`PairingOracle`] is the seam between the search layer and the scoring service.
//! [`HttpOracle`] talks to the real service over JSON/HTTP:
//!
//! - `POST /score-only {liquor_id, ingredient_id}` → `{score}`
//! - `POST /explanation-only {liquor_id, ingredient_id, score?}` → `{explanation, gpt_explanation?}`
//! - `GET /liquors`, `GET /ingredients` → `[{id, name}]`

pub mod client;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod model;


pub use client::{HttpOracle, PairingOracle};
pub use error::OracleError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockOracle;
pub use model::{EntityListing, Explanation, ExplanationRequest, ScoreRequest, ScoreResponse};
