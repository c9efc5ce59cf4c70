use serde::{Serialize, Serializer};

use super::normalize::normalize;

/// Coarse compatibility label shown next to a normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompatibilityLevel {
    Experimental,
    FairMatch,
    GoodMatch,
    StrongMatch,
}

impl CompatibilityLevel {
    pub fn from_normalized(score: u8) -> Self {
        match score {
            80.. => CompatibilityLevel::StrongMatch,
            60..=79 => CompatibilityLevel::GoodMatch,
            40..=59 => CompatibilityLevel::FairMatch,
            _ => CompatibilityLevel::Experimental,
        }
    }

    /// User-facing (Korean) label.
    pub fn label(self) -> &'static str {
        match self {
            CompatibilityLevel::StrongMatch => "강력 추천",
            CompatibilityLevel::GoodMatch => "추천",
            CompatibilityLevel::FairMatch => "무난한 선택",
            CompatibilityLevel::Experimental => "실험적인 선택",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompatibilityLevel::StrongMatch => "strong_match",
            CompatibilityLevel::GoodMatch => "good_match",
            CompatibilityLevel::FairMatch => "fair_match",
            CompatibilityLevel::Experimental => "experimental",
        }
    }
}

impl std::fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Serialized as `{"code": "...", "label": "..."}`.
impl Serialize for CompatibilityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("CompatibilityLevel", 2)?;
        state.serialize_field("code", self.as_str())?;
        state.serialize_field("label", self.label())?;
        state.end()
    }
}

/// A raw oracle score together with its display forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored {
    pub raw_score: f64,
    pub normalized_score: u8,
    pub level: CompatibilityLevel,
}

impl Scored {
    pub fn from_raw(raw_score: f64) -> Self {
        let normalized_score = normalize(raw_score);
        Self {
            raw_score,
            normalized_score,
            level: CompatibilityLevel::from_normalized(normalized_score),
        }
    }
}
