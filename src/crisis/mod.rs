// Crisis text triage
// Keyword tables, category taxonomy and the analyzer built on them

mod category;
mod detector;
mod tables;

pub use category::{CrisisCategory, RiskLevel};
pub use detector::{AnalysisResult, CrisisDetector, SafetyCheck, URGENT_WARNING};
pub use tables::{CategoryDefinition, CrisisTables, ResourceEntry, ResourceTable, TablesError};
