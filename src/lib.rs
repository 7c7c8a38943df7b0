// CBT Diary - self-help journal back end with crisis text triage
// Library exports

pub mod catalog; // Emotion vocabulary, breathing and PMR exercises
pub mod config;
pub mod crisis; // Keyword-based crisis triage
pub mod errors;
pub mod journal; // Diary entry storage
pub mod server; // REST API
pub mod sessions; // Relaxation session history
