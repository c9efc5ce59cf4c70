//! Score normalization.
//!
//! The oracle returns an unbounded float, empirically within
//! [`RAW_SCORE_MIN`](crate::constants::RAW_SCORE_MIN)..=[`RAW_SCORE_MAX`](crate::constants::RAW_SCORE_MAX).
//! Callers see an integer on a 0–100 scale and a coarse [`CompatibilityLevel`]. Ranking always
//! uses the raw score; normalization collapses nearby raw scores onto the same integer.

pub mod normalize;
pub mod types;


pub use normalize::normalize;
pub use types::{CompatibilityLevel, Scored};
