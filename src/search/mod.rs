//! Pairing search over the oracle.
//!
//! - [`CombinationSearch`]: two free-text terms → best pair and a top-K ranking
//! - [`BatchScorer`]: one fixed entity against many candidate ids, failures kept per item
//! - [`Recommender`]: one term → best partners of the opposite kind
//!
//! All three fan out through [`score_pairs`], which bounds concurrency with a semaphore and puts
//! a deadline on every call. Ranking uses raw scores; normalized scores are for display.

pub mod batch;
pub mod combination;
pub mod error;
pub mod fanout;
pub mod recommend;
pub mod types;


pub use batch::BatchScorer;
pub use combination::CombinationSearch;
pub use error::{Unresolvable, UnresolvableReason};
pub use fanout::{FanOutConfig, score_pairs, with_deadline};
pub use recommend::{RecommendConfig, Recommender};
pub use types::{
    Anchor, BatchScore, Combination, PartnerSource, Recommendation, RecommendationSet,
    SearchResult,
};
