// Journal endpoint handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::DiaryServer;
use crate::errors::ApiError;
use crate::journal::{EntryUpdate, JournalEntry, NewEntry, DEFAULT_MOOD, DEFAULT_USER_ID};

/// Entries handed to the prompt generator
const ANALYSIS_WINDOW: usize = 10;

const ENTRY_NOT_FOUND: &str = "Entry not found";

/// Ids that do not parse are treated like unknown ids
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<JournalEntry>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub message: String,
    pub entry: JournalEntry,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mood: Option<u8>,
    #[serde(default)]
    pub emotions: Option<Vec<String>>,
    #[serde(default)]
    pub user_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEntryRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub mood: Option<u8>,
    #[serde(default)]
    pub emotions: Option<Vec<String>>,
}

/// Handle GET /api/journal?userId=N
pub async fn list_entries(
    State(server): State<Arc<DiaryServer>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let user_id = query
        .user_id
        .as_deref()
        .and_then(parse_id)
        .unwrap_or(DEFAULT_USER_ID);

    let entries = server.journal().list_for_user(user_id)?;
    Ok(Json(EntriesResponse { entries }))
}

/// Handle GET /api/journal/for-ai-analysis/:user_id - Newest entries first
pub async fn entries_for_analysis(
    State(server): State<Arc<DiaryServer>>,
    Path(user_id): Path<String>,
) -> Result<Json<EntriesResponse>, ApiError> {
    let user_id = parse_id(&user_id).unwrap_or(DEFAULT_USER_ID);

    let entries = server
        .journal()
        .recent_for_user(user_id, ANALYSIS_WINDOW)?;
    Ok(Json(EntriesResponse { entries }))
}

/// Handle POST /api/journal - Create an entry dated today
pub async fn create_entry(
    State(server): State<Arc<DiaryServer>>,
    payload: Result<Json<CreateEntryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    let Json(request) = payload?;
    let content = request
        .content
        .filter(|content| !content.is_empty())
        .ok_or(ApiError::MissingInput("Content is required"))?;

    // Zero means "not set" for both
    let user_id = request
        .user_id
        .filter(|&id| id != 0)
        .unwrap_or(DEFAULT_USER_ID);
    let mood = request.mood.filter(|&mood| mood != 0).unwrap_or(DEFAULT_MOOD);

    let entry = server.journal().create(NewEntry {
        user_id,
        date: chrono::Utc::now().date_naive(),
        content,
        mood,
        emotions: request.emotions.unwrap_or_default(),
    })?;

    tracing::info!(entry_id = entry.id, user_id = entry.user_id, "Journal entry created");

    Ok((
        StatusCode::CREATED,
        Json(EntryResponse {
            message: "Journal entry created".to_string(),
            entry,
        }),
    ))
}

/// Handle PUT /api/journal/:id
pub async fn update_entry(
    State(server): State<Arc<DiaryServer>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateEntryRequest>, JsonRejection>,
) -> Result<Json<EntryResponse>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound(ENTRY_NOT_FOUND))?;
    let Json(request) = payload?;

    let update = EntryUpdate {
        content: request.content,
        mood: request.mood,
        emotions: request.emotions,
    };
    let entry = server
        .journal()
        .update(id, update)?
        .ok_or(ApiError::NotFound(ENTRY_NOT_FOUND))?;

    tracing::info!(entry_id = id, "Journal entry updated");

    Ok(Json(EntryResponse {
        message: "Journal entry updated".to_string(),
        entry,
    }))
}

/// Handle DELETE /api/journal/:id
pub async fn delete_entry(
    State(server): State<Arc<DiaryServer>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = parse_id(&id).ok_or(ApiError::NotFound(ENTRY_NOT_FOUND))?;

    if !server.journal().delete(id)? {
        return Err(ApiError::NotFound(ENTRY_NOT_FOUND));
    }

    tracing::info!(entry_id = id, "Journal entry deleted");

    Ok(Json(MessageResponse {
        message: "Journal entry deleted".to_string(),
    }))
}
