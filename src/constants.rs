//! Cross-cutting, shared constants.
//!
//! The search bounds below are part of the public contract: callers rely on them to reason about
//! the worst-case number of oracle calls a single request can make.

/// Maximum candidates returned by the resolver for one term.
pub const MAX_CANDIDATES: usize = 5;

/// Maximum `(liquor, ingredient)` pairs evaluated by one combination search.
pub const MAX_PAIRS: usize = MAX_CANDIDATES * MAX_CANDIDATES;

/// Maximum combinations (or recommendations) returned in a ranked list.
pub const MAX_RANKED: usize = 10;

/// Lower bound of the oracle's empirically observed raw score range.
pub const RAW_SCORE_MIN: f64 = -5.0;

/// Upper bound of the oracle's empirically observed raw score range.
pub const RAW_SCORE_MAX: f64 = 6.0;

/// Default number of oracle calls allowed in flight per request.
pub const DEFAULT_MAX_CONCURRENCY: usize = MAX_PAIRS;

/// Default per-call oracle timeout.
pub const DEFAULT_ORACLE_TIMEOUT_MS: u64 = 10_000;

/// Default cap on partner IDs scored by the recommender.
pub const DEFAULT_MAX_PARTNERS: usize = 50;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_bound_matches_candidate_bound() {
        assert_eq!(MAX_PAIRS, 25);
        assert_eq!(DEFAULT_MAX_CONCURRENCY, MAX_PAIRS);
    }

    #[test]
    fn test_raw_range_is_ordered() {
        assert!(RAW_SCORE_MIN < RAW_SCORE_MAX);
    }
}
