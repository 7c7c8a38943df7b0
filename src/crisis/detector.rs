// Crisis text analyzer

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use super::category::{CrisisCategory, RiskLevel};
use super::tables::{CrisisTables, ResourceEntry};

/// Shown alongside high-risk safety checks
pub const URGENT_WARNING: &str = "This content indicates potential immediate danger. \
Please contact emergency services at 911 if you or someone else is in immediate danger.";

/// Outcome of analyzing one piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Detected categories, in table order
    pub detected_categories: Vec<CrisisCategory>,
    pub risk_level: RiskLevel,
    pub has_crisis_indicators: bool,
    /// De-duplicated referrals for the detected categories, or the general
    /// list when nothing was detected
    pub resources: Vec<ResourceEntry>,
}

impl AnalysisResult {
    /// Human-readable summary returned by the analyze endpoint
    pub fn summary_message(&self) -> String {
        if self.has_crisis_indicators {
            format!(
                "Crisis indicators detected ({} risk). Resources provided.",
                self.risk_level
            )
        } else {
            "No crisis indicators detected".to_string()
        }
    }
}

/// Safety-check verdict for a journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyCheck {
    pub is_safe: bool,
    pub risk_level: RiskLevel,
    pub detected_categories: Vec<CrisisCategory>,
    pub resources: Vec<ResourceEntry>,
    /// Only present for high risk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<AnalysisResult> for SafetyCheck {
    fn from(analysis: AnalysisResult) -> Self {
        let high = analysis.risk_level == RiskLevel::High;

        Self {
            is_safe: !analysis.has_crisis_indicators,
            risk_level: analysis.risk_level,
            detected_categories: analysis.detected_categories,
            resources: analysis.resources,
            urgent: high.then_some(true),
            warning: high.then(|| URGENT_WARNING.to_string()),
        }
    }
}

/// Keyword-based crisis detector.
///
/// Stateless apart from its read-only tables; clones share them.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    tables: Arc<CrisisTables>,
}

impl CrisisDetector {
    pub fn new(tables: CrisisTables) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Detector over the tables compiled into the binary
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(CrisisTables::builtin()?))
    }

    /// Load crisis tables from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Ok(Self::new(CrisisTables::load_from_file(path)?))
    }

    pub fn tables(&self) -> &CrisisTables {
        &self.tables
    }

    /// Scan text for crisis indicators.
    ///
    /// Matching is a case-insensitive substring search. Each category is
    /// recorded at most once, on the first of its phrases found.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let text_lower = text.to_lowercase();

        let detected_categories: Vec<CrisisCategory> = self
            .tables
            .categories()
            .iter()
            .filter(|definition| {
                definition
                    .keywords
                    .iter()
                    .any(|keyword| text_lower.contains(keyword.as_str()))
            })
            .map(|definition| definition.category)
            .collect();

        let risk_level = RiskLevel::from_categories(&detected_categories);
        let resources = self.collect_resources(&detected_categories);

        AnalysisResult {
            has_crisis_indicators: !detected_categories.is_empty(),
            detected_categories,
            risk_level,
            resources,
        }
    }

    /// Run the analyzer and shape the result as a safety check
    pub fn safety_check(&self, entry: &str) -> SafetyCheck {
        self.analyze(entry).into()
    }

    fn collect_resources(&self, categories: &[CrisisCategory]) -> Vec<ResourceEntry> {
        if categories.is_empty() {
            return self.tables.general().to_vec();
        }

        let mut resources: Vec<ResourceEntry> = Vec::new();
        for category in categories {
            for resource in self.tables.resources_for(*category) {
                if !resources.contains(resource) {
                    resources.push(resource.clone());
                }
            }
        }
        resources
    }
}
