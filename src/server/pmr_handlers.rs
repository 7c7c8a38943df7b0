// Progressive muscle relaxation handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::payload::optional_id;
use super::DiaryServer;
use crate::catalog::pmr::{self, PmrExercise, PmrGuide, GUIDE};
use crate::errors::ApiError;
use crate::sessions::{NewSession, PmrSession};

const EXERCISE_NOT_FOUND: &str = "Exercise not found";

#[derive(Debug, Serialize)]
pub struct PmrExercisesResponse {
    pub exercises: &'static [PmrExercise],
}

/// Handle GET /api/pmr
pub async fn list_pmr() -> Json<PmrExercisesResponse> {
    Json(PmrExercisesResponse {
        exercises: pmr::EXERCISES,
    })
}

/// Handle GET /api/pmr/:id
pub async fn pmr_by_id(
    Path(id): Path<String>,
) -> Result<Json<&'static PmrExercise>, ApiError> {
    id.parse::<u32>()
        .ok()
        .and_then(pmr::find_by_id)
        .map(Json)
        .ok_or(ApiError::NotFound(EXERCISE_NOT_FOUND))
}

/// Handle GET /api/pmr/name/:name
pub async fn pmr_by_name(
    Path(name): Path<String>,
) -> Result<Json<&'static PmrExercise>, ApiError> {
    pmr::find_by_name(&name)
        .map(Json)
        .ok_or(ApiError::NotFound(EXERCISE_NOT_FOUND))
}

/// Handle GET /api/pmr/resources
pub async fn pmr_guide() -> Json<PmrGuide> {
    Json(GUIDE)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSessionRequest {
    #[serde(default)]
    pub user_id: Option<Value>,
    #[serde(default)]
    pub exercise_id: Option<Value>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub completed_steps: Option<u32>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub message: String,
    pub session: PmrSession,
}

/// Handle POST /api/pmr/session - Record a completed session
pub async fn record_pmr_session(
    State(server): State<Arc<DiaryServer>>,
    payload: Result<Json<RecordSessionRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let Json(request) = payload?;
    let user_id = optional_id("userId", request.user_id)?;
    let exercise_id = optional_id("exerciseId", request.exercise_id)?;
    let (Some(user_id), Some(exercise_id)) = (user_id, exercise_id) else {
        return Err(ApiError::MissingInput("User ID and Exercise ID are required"));
    };

    let session = server.sessions().record(NewSession {
        user_id,
        exercise_id,
        date: chrono::Utc::now(),
        duration: request.duration,
        completed_steps: request.completed_steps,
        rating: request.rating.filter(|&rating| rating != 0),
        notes: request.notes.unwrap_or_default(),
    })?;

    tracing::info!(
        session_id = session.id,
        user_id,
        exercise_id,
        "Relaxation session saved"
    );

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            message: "Session saved".to_string(),
            session,
        }),
    ))
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub sessions: Vec<PmrSession>,
}

/// Handle GET /api/pmr/history/:user_id
///
/// A user id that does not parse has no sessions.
pub async fn pmr_history(
    State(server): State<Arc<DiaryServer>>,
    Path(user_id): Path<String>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let sessions = match user_id.parse::<u64>() {
        Ok(user_id) => server.sessions().history_for_user(user_id)?,
        Err(_) => Vec::new(),
    };
    Ok(Json(HistoryResponse { sessions }))
}
