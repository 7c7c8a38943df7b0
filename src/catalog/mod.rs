// Catalog module
// Read-only reference data: emotion vocabulary, breathing and muscle
// relaxation exercises

pub mod breathing;
pub mod emotion;
pub mod pmr;

pub use breathing::{BreathingExercise, BreathingPattern, BreathingSettings};
pub use emotion::{Emotion, EmotionCatalog, EmotionMatch, Intensity, Valence};
pub use pmr::{PmrExercise, PmrGuide};
