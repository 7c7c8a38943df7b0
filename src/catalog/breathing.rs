// Guided breathing exercises

use serde::Serialize;

/// Counts (in seconds) for each phase of one breath
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreathingPattern {
    pub inhale: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold: Option<u32>,
    pub exhale: u32,
    /// Second hold after the exhale (box breathing)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hold2: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingExercise {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub pattern: BreathingPattern,
    /// Session lengths offered, in seconds
    pub duration_options: &'static [u32],
}

const DURATION_OPTIONS: &[u32] = &[60, 120, 300];

pub const EXERCISES: &[BreathingExercise] = &[
    BreathingExercise {
        id: 1,
        name: "4-7-8 Breathing",
        description: "Inhale for 4 counts, hold for 7 counts, exhale for 8 counts",
        pattern: BreathingPattern {
            inhale: 4,
            hold: Some(7),
            exhale: 8,
            hold2: None,
        },
        duration_options: DURATION_OPTIONS,
    },
    BreathingExercise {
        id: 2,
        name: "Box Breathing",
        description: "Equal counts for inhale, hold, exhale, and hold",
        pattern: BreathingPattern {
            inhale: 4,
            hold: Some(4),
            exhale: 4,
            hold2: Some(4),
        },
        duration_options: DURATION_OPTIONS,
    },
    BreathingExercise {
        id: 3,
        name: "Diaphragmatic Breathing",
        description: "Focus on breathing deeply into your diaphragm",
        pattern: BreathingPattern {
            inhale: 5,
            hold: None,
            exhale: 5,
            hold2: None,
        },
        duration_options: DURATION_OPTIONS,
    },
];

/// Defaults the breathing guide starts with
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathingSettings {
    pub default_exercise: &'static BreathingExercise,
    pub default_duration: u32,
    pub default_visual: &'static str,
}

impl BreathingSettings {
    pub fn defaults() -> Self {
        Self {
            default_exercise: &EXERCISES[0],
            default_duration: 60,
            default_visual: "circle",
        }
    }
}

pub fn find_by_id(id: u32) -> Option<&'static BreathingExercise> {
    EXERCISES.iter().find(|exercise| exercise.id == id)
}

/// Loose name match: either name contains the other, ignoring case
pub fn find_by_name(name: &str) -> Option<&'static BreathingExercise> {
    let query = name.to_lowercase();
    EXERCISES.iter().find(|exercise| {
        let exercise_name = exercise.name.to_lowercase();
        exercise_name.contains(&query) || query.contains(&exercise_name)
    })
}
