// Progressive muscle relaxation exercises

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PmrExercise {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Groups worked, in session order
    pub muscle_groups: &'static [&'static str],
    /// Seconds
    pub duration: u32,
    /// Tense/release steps in one session
    pub steps: u32,
}

pub const EXERCISES: &[PmrExercise] = &[
    PmrExercise {
        id: 1,
        name: "Full Body PMR",
        description:
            "A complete progressive muscle relaxation session for all major muscle groups",
        muscle_groups: &[
            "hands-fists",
            "arms-shoulders",
            "face-jaw",
            "chest-back",
            "abdomen",
            "thighs",
            "calves-feet",
        ],
        duration: 600,
        steps: 32,
    },
    PmrExercise {
        id: 2,
        name: "Hands & Fists",
        description: "Focus on tension and relaxation of hands and fists",
        muscle_groups: &["hands-fists"],
        duration: 180,
        steps: 8,
    },
    PmrExercise {
        id: 3,
        name: "Face & Jaw",
        description: "Focus on tension and relaxation of facial muscles and jaw",
        muscle_groups: &["face-jaw"],
        duration: 150,
        steps: 8,
    },
    PmrExercise {
        id: 4,
        name: "Arms & Shoulders",
        description: "Focus on tension and relaxation of arms and shoulders",
        muscle_groups: &["arms-shoulders"],
        duration: 240,
        steps: 12,
    },
];

/// Introductory material shown next to the exercise list
#[derive(Debug, Clone, Serialize)]
pub struct PmrGuide {
    pub introduction: &'static str,
    pub benefits: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub tips: &'static [&'static str],
}

pub const GUIDE: PmrGuide = PmrGuide {
    introduction: "Progressive Muscle Relaxation (PMR) is a relaxation technique that helps \
                   you reduce anxiety by systematically tensing and relaxing different muscle \
                   groups.",
    benefits: &[
        "Reduces physical tension and stress",
        "Decreases anxiety and worry",
        "Improves sleep quality",
        "Increases awareness of physical sensations",
        "Helps manage pain",
    ],
    instructions: &[
        "Find a quiet, comfortable place to sit or lie down",
        "Start with your feet and work your way up to your head",
        "Tense each muscle group for 5 seconds",
        "Relax the muscles for 10-20 seconds",
        "Focus on the difference between tension and relaxation",
    ],
    tips: &[
        "Practice at the same time each day",
        "Start with shorter sessions and gradually increase",
        "Focus on your breathing during relaxation phases",
        "Don't worry if you miss a muscle group - just continue",
        "Practice regularly for best results",
    ],
};

pub fn find_by_id(id: u32) -> Option<&'static PmrExercise> {
    EXERCISES.iter().find(|exercise| exercise.id == id)
}

/// Loose name match: either name contains the other, ignoring case
pub fn find_by_name(name: &str) -> Option<&'static PmrExercise> {
    let query = name.to_lowercase();
    EXERCISES.iter().find(|exercise| {
        let exercise_name = exercise.name.to_lowercase();
        exercise_name.contains(&query) || query.contains(&exercise_name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_id() {
        assert_eq!(find_by_id(3).unwrap().name, "Face & Jaw");
        assert!(find_by_id(5).is_none());
    }

    #[test]
    fn test_find_by_name() {
        assert_eq!(find_by_name("full body").unwrap().id, 1);
        assert_eq!(find_by_name("SHOULDERS").unwrap().id, 4);
        assert_eq!(find_by_name("evening hands & fists routine").unwrap().id, 2);
        assert!(find_by_name("neck").is_none());
    }

    #[test]
    fn test_full_body_covers_every_group() {
        let full = find_by_id(1).unwrap();
        for exercise in &EXERCISES[1..] {
            for group in exercise.muscle_groups {
                assert!(full.muscle_groups.contains(group), "missing {}", group);
            }
        }
    }

    #[test]
    fn test_exercise_serializes_camel_case() {
        let json = serde_json::to_value(find_by_id(2).unwrap()).unwrap();
        assert_eq!(json["muscleGroups"], serde_json::json!(["hands-fists"]));
        assert_eq!(json["duration"], 180);
    }
}
