// Crisis categories and risk levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type of risk a piece of text can indicate.
///
/// Serialized with the camelCase keys used by the HTTP API and the
/// tables file (`selfHarm`, `harmOthers`, `elderAbuse`, `childAbuse`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CrisisCategory {
    SelfHarm,
    HarmOthers,
    ElderAbuse,
    ChildAbuse,
}

impl CrisisCategory {
    /// All categories, in canonical order
    pub const ALL: [CrisisCategory; 4] = [
        CrisisCategory::SelfHarm,
        CrisisCategory::HarmOthers,
        CrisisCategory::ElderAbuse,
        CrisisCategory::ChildAbuse,
    ];

    /// Key used on the wire and in the tables file
    pub fn as_str(&self) -> &'static str {
        match self {
            CrisisCategory::SelfHarm => "selfHarm",
            CrisisCategory::HarmOthers => "harmOthers",
            CrisisCategory::ElderAbuse => "elderAbuse",
            CrisisCategory::ChildAbuse => "childAbuse",
        }
    }

    /// Whether detecting this category alone makes the text high risk
    pub fn is_immediate_danger(&self) -> bool {
        matches!(self, CrisisCategory::SelfHarm | CrisisCategory::HarmOthers)
    }
}

impl fmt::Display for CrisisCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CrisisCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CrisisCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown crisis category: {}", s))
    }
}

/// Three-tier severity derived from the detected categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Priority rule: any immediate-danger category wins, anything else
    /// detected is medium, nothing detected is low.
    pub fn from_categories(categories: &[CrisisCategory]) -> Self {
        if categories.iter().any(CrisisCategory::is_immediate_danger) {
            RiskLevel::High
        } else if !categories.is_empty() {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
