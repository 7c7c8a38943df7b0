// Emotion and breathing catalog handlers

use axum::{extract::Path, response::Json};
use serde::Serialize;

use crate::catalog::breathing::{self, BreathingExercise, BreathingSettings, EXERCISES};
use crate::catalog::{Emotion, EmotionCatalog, EmotionMatch, Valence};
use crate::errors::ApiError;

const EXERCISE_NOT_FOUND: &str = "Exercise not found";

/// Handle GET /api/emotion
pub async fn list_emotions() -> Json<EmotionCatalog> {
    Json(EmotionCatalog::get())
}

/// Handle GET /api/emotion/:name
pub async fn emotion_by_name(Path(name): Path<String>) -> Result<Json<EmotionMatch>, ApiError> {
    EmotionCatalog::get()
        .find(&name)
        .map(Json)
        .ok_or(ApiError::NotFound("Emotion not found"))
}

#[derive(Debug, Serialize)]
pub struct EmotionGroup {
    pub category: Valence,
    pub emotions: &'static [Emotion],
}

/// Handle GET /api/emotion/category/:category
pub async fn emotions_by_category(
    Path(category): Path<String>,
) -> Result<Json<EmotionGroup>, ApiError> {
    let valence = Valence::parse(&category).ok_or(ApiError::NotFound("Category not found"))?;

    Ok(Json(EmotionGroup {
        category: valence,
        emotions: EmotionCatalog::get().by_valence(valence),
    }))
}

#[derive(Debug, Serialize)]
pub struct ExercisesResponse {
    pub exercises: &'static [BreathingExercise],
}

/// Handle GET /api/breathing
pub async fn list_breathing() -> Json<ExercisesResponse> {
    Json(ExercisesResponse {
        exercises: EXERCISES,
    })
}

/// Handle GET /api/breathing/:id
pub async fn breathing_by_id(
    Path(id): Path<String>,
) -> Result<Json<&'static BreathingExercise>, ApiError> {
    id.parse::<u32>()
        .ok()
        .and_then(breathing::find_by_id)
        .map(Json)
        .ok_or(ApiError::NotFound(EXERCISE_NOT_FOUND))
}

/// Handle GET /api/breathing/name/:name
pub async fn breathing_by_name(
    Path(name): Path<String>,
) -> Result<Json<&'static BreathingExercise>, ApiError> {
    breathing::find_by_name(&name)
        .map(Json)
        .ok_or(ApiError::NotFound(EXERCISE_NOT_FOUND))
}

/// Handle GET /api/breathing/default/settings
pub async fn breathing_defaults() -> Json<BreathingSettings> {
    Json(BreathingSettings::defaults())
}
