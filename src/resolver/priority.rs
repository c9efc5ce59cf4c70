//! Candidate priorities.
//!
//! One table decides every priority the resolver assigns. Generic fragments that over-match
//! get an override entry instead of special cases in the matching loop.

use super::types::MatchType;

pub const EXACT_ALIAS_PRIORITY: u32 = 1000;
pub const EXACT_MAPPING_PRIORITY: u32 = 800;
pub const PARTIAL_ALIAS_PRIORITY: u32 = 500;
pub const PARTIAL_MAPPING_PRIORITY: u32 = 300;

/// Priority tiers for one over-matching fragment.
///
/// Tiers are checked in order; the first tier with a marker contained in the canonical name
/// wins. Names matching no tier get `fallback`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentOverride {
    pub fragment: String,
    pub tiers: Vec<(Vec<String>, u32)>,
    pub fallback: u32,
}

impl FragmentOverride {
    pub fn new(fragment: &str, fallback: u32) -> Self {
        Self {
            fragment: fragment.to_string(),
            tiers: Vec::new(),
            fallback,
        }
    }

    pub fn tier(mut self, markers: &[&str], priority: u32) -> Self {
        self.tiers
            .push((markers.iter().map(|m| m.to_string()).collect(), priority));
        self
    }

    fn priority_for(&self, name: &str) -> u32 {
        self.tiers
            .iter()
            .find(|(markers, _)| markers.iter().any(|m| name.contains(m.as_str())))
            .map(|(_, priority)| *priority)
            .unwrap_or(self.fallback)
    }
}

/// Match type → base priority, plus per-fragment overrides for partial mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityTable {
    pub exact_alias: u32,
    pub partial_alias: u32,
    pub exact_mapping: u32,
    pub partial_mapping: u32,
    pub overrides: Vec<FragmentOverride>,
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self {
            exact_alias: EXACT_ALIAS_PRIORITY,
            partial_alias: PARTIAL_ALIAS_PRIORITY,
            exact_mapping: EXACT_MAPPING_PRIORITY,
            partial_mapping: PARTIAL_MAPPING_PRIORITY,
            // "wine" hits nearly every wine in the catalog; keep generic styles ahead of
            // varietals and push the long tail down without dropping it.
            overrides: vec![
                FragmentOverride::new("wine", 100)
                    .tier(&["red_wine", "white_wine", "dry_wine"], 400)
                    .tier(&["chardonnay", "cabernet", "burgundy"], 300),
            ],
        }
    }
}

impl PriorityTable {
    /// Table with no fragment overrides.
    pub fn without_overrides() -> Self {
        Self {
            overrides: Vec::new(),
            ..Self::default()
        }
    }

    /// Base priority of a match type.
    pub fn base(&self, match_type: MatchType) -> u32 {
        match match_type {
            MatchType::ExactAlias => self.exact_alias,
            MatchType::PartialAlias => self.partial_alias,
            MatchType::ExactMapping => self.exact_mapping,
            MatchType::PartialMapping => self.partial_mapping,
        }
    }

    /// Classifies a category fragment hit on `name` and returns its match type and priority.
    ///
    /// Callers only pass names that contain `fragment`.
    pub fn mapping(&self, fragment: &str, name: &str) -> (MatchType, u32) {
        if name == fragment {
            return (MatchType::ExactMapping, self.exact_mapping);
        }

        let priority = self
            .overrides
            .iter()
            .find(|o| o.fragment == fragment)
            .map(|o| o.priority_for(name))
            .unwrap_or(self.partial_mapping);

        (MatchType::PartialMapping, priority)
    }
}
