//! Pairing library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Resolution
//! - [`AliasIndex`], [`AliasDataSource`], [`FileDataSource`] - Korean alias and catalog tables
//! - [`EntityResolver`], [`Candidate`], [`PriorityTable`] - free text → ranked candidates
//!
//! ## Search
//! - [`CombinationSearch`], [`SearchResult`] - best pairing of two terms
//! - [`BatchScorer`], [`BatchScore`] - one entity against many candidates
//! - [`Recommender`], [`RecommendationSet`] - best partners for one term
//! - [`normalize`], [`CompatibilityLevel`] - display scale for raw scores
//!
//! ## Oracle
//! - [`PairingOracle`], [`HttpOracle`] - external scoring service
//!
//! ## Server
//! - [`Config`], [`PairingService`], [`gateway`] - HTTP surface
//!
//! ## Test/Mock Support
//! [`MockOracle`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod alias;
pub mod config;
pub mod constants;
pub mod gateway;
pub mod oracle;
pub mod resolver;
pub mod scoring;
pub mod search;
pub mod service;

pub use alias::{
    AliasDataSource, AliasError, AliasIndex, EmbeddedDataSource, Entity, EntityId, EntityKind,
    FileDataSource, KindFilter, TableOrigin,
};
pub use config::{Config, ConfigError};
pub use constants::{MAX_CANDIDATES, MAX_PAIRS, MAX_RANKED, RAW_SCORE_MAX, RAW_SCORE_MIN};
#[cfg(any(test, feature = "mock"))]
pub use oracle::MockOracle;
pub use oracle::{EntityListing, Explanation, HttpOracle, OracleError, PairingOracle};
pub use resolver::{Candidate, EntityResolver, MatchType, PriorityTable};
pub use scoring::{CompatibilityLevel, Scored, normalize};
pub use search::{
    Anchor, BatchScore, BatchScorer, Combination, CombinationSearch, FanOutConfig,
    PartnerSource, RecommendConfig, Recommendation, RecommendationSet, Recommender,
    SearchResult, Unresolvable, UnresolvableReason,
};
pub use service::{PairingService, ServiceSettings};
