// Emotion vocabulary used by the emotion wheel

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Valence {
    Positive,
    Negative,
}

impl Valence {
    /// Case-insensitive parse of "positive"/"negative"
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "positive" => Some(Valence::Positive),
            "negative" => Some(Valence::Negative),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emotion {
    pub name: &'static str,
    pub intensity: Intensity,
    pub description: &'static str,
}

const fn emotion(name: &'static str, intensity: Intensity, description: &'static str) -> Emotion {
    Emotion {
        name,
        intensity,
        description,
    }
}

const POSITIVE: &[Emotion] = &[
    emotion(
        "Joy",
        Intensity::High,
        "A feeling of great pleasure and happiness",
    ),
    emotion(
        "Contentment",
        Intensity::Medium,
        "A state of satisfaction with one's circumstances",
    ),
    emotion(
        "Pride",
        Intensity::Medium,
        "A feeling of satisfaction over one's achievements",
    ),
    emotion(
        "Amusement",
        Intensity::Low,
        "The state of being entertained or diverted",
    ),
    emotion(
        "Hope",
        Intensity::Medium,
        "A feeling of expectation and desire for a certain thing to happen",
    ),
    emotion(
        "Gratitude",
        Intensity::High,
        "The quality of being thankful; readiness to show appreciation",
    ),
    emotion(
        "Love",
        Intensity::High,
        "An intense feeling of deep affection",
    ),
    emotion(
        "Peace",
        Intensity::Medium,
        "Freedom from disturbance; tranquility",
    ),
    emotion(
        "Excitement",
        Intensity::High,
        "A feeling of enthusiasm and eagerness",
    ),
    emotion(
        "Inspired",
        Intensity::Medium,
        "Filled with the urge to do or feel something",
    ),
    emotion(
        "Cheerful",
        Intensity::Low,
        "Noticeably happy and optimistic",
    ),
    emotion(
        "Optimistic",
        Intensity::Medium,
        "Hopeful and confident about the future",
    ),
];

const NEGATIVE: &[Emotion] = &[
    emotion(
        "Anger",
        Intensity::High,
        "A strong feeling of annoyance, displeasure, or hostility",
    ),
    emotion(
        "Anxiety",
        Intensity::High,
        "A feeling of worry, nervousness, or unease",
    ),
    emotion(
        "Sadness",
        Intensity::Medium,
        "The emotion of being sad; sorrow",
    ),
    emotion(
        "Guilt",
        Intensity::Medium,
        "A feeling of responsibility or remorse for some offense",
    ),
    emotion(
        "Shame",
        Intensity::High,
        "A painful feeling of humiliation or distress",
    ),
    emotion(
        "Frustration",
        Intensity::Medium,
        "Feeling of being upset or annoyed as a result of inability to change something",
    ),
    emotion(
        "Disgust",
        Intensity::High,
        "A feeling of revulsion or strong disapproval",
    ),
    emotion(
        "Fear",
        Intensity::High,
        "An unpleasant emotion caused by the threat of danger",
    ),
    emotion(
        "Envy",
        Intensity::Low,
        "A feeling of discontented or resentful longing aroused by someone else's possessions",
    ),
    emotion(
        "Loneliness",
        Intensity::Medium,
        "Sadness because one has no friends or company",
    ),
    emotion(
        "Disappointment",
        Intensity::Low,
        "Sadness or displeasure caused by failure to fulfill hopes or expectations",
    ),
    emotion(
        "Despair",
        Intensity::High,
        "Complete loss or absence of hope",
    ),
];

/// The full vocabulary, grouped by valence
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EmotionCatalog {
    pub positive: &'static [Emotion],
    pub negative: &'static [Emotion],
}

/// An emotion together with the group it was found in
#[derive(Debug, Clone, Serialize)]
pub struct EmotionMatch {
    #[serde(flatten)]
    pub emotion: &'static Emotion,
    pub category: Valence,
}

impl EmotionCatalog {
    pub fn get() -> Self {
        Self {
            positive: POSITIVE,
            negative: NEGATIVE,
        }
    }

    pub fn by_valence(&self, valence: Valence) -> &'static [Emotion] {
        match valence {
            Valence::Positive => self.positive,
            Valence::Negative => self.negative,
        }
    }

    /// Case-insensitive lookup by name, positive emotions first
    pub fn find(&self, name: &str) -> Option<EmotionMatch> {
        let name = name.to_lowercase();
        [Valence::Positive, Valence::Negative]
            .into_iter()
            .find_map(|valence| {
                self.by_valence(valence)
                    .iter()
                    .find(|emotion| emotion.name.to_lowercase() == name)
                    .map(|emotion| EmotionMatch {
                        emotion,
                        category: valence,
                    })
            })
    }
}
