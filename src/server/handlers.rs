// HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use super::catalog_handlers::{
    breathing_by_id, breathing_by_name, breathing_defaults, emotion_by_name, emotions_by_category,
    list_breathing, list_emotions,
};
use super::journal_handlers::{
    create_entry, delete_entry, entries_for_analysis, list_entries, update_entry,
};
use super::payload::required_text;
use super::pmr_handlers::{
    list_pmr, pmr_by_id, pmr_by_name, pmr_guide, pmr_history, record_pmr_session,
};
use super::DiaryServer;
use crate::crisis::{AnalysisResult, ResourceEntry, SafetyCheck};
use crate::errors::ApiError;

/// Create the main application router
pub fn create_router(server: Arc<DiaryServer>) -> Router {
    Router::new()
        // Crisis triage
        .route("/api/triage/analyze", post(analyze_text))
        .route("/api/triage/safety-check", post(safety_check))
        .route("/api/triage/resources", get(list_resources))
        .route("/api/triage/resources/:category", get(resources_by_category))
        // Journal
        .route("/api/journal", get(list_entries).post(create_entry))
        .route(
            "/api/journal/for-ai-analysis/:user_id",
            get(entries_for_analysis),
        )
        .route("/api/journal/:id", put(update_entry).delete(delete_entry))
        // Emotion vocabulary
        .route("/api/emotion", get(list_emotions))
        .route("/api/emotion/category/:category", get(emotions_by_category))
        .route("/api/emotion/:name", get(emotion_by_name))
        // Breathing exercises
        .route("/api/breathing", get(list_breathing))
        .route("/api/breathing/default/settings", get(breathing_defaults))
        .route("/api/breathing/name/:name", get(breathing_by_name))
        .route("/api/breathing/:id", get(breathing_by_id))
        // Progressive muscle relaxation
        .route("/api/pmr", get(list_pmr))
        .route("/api/pmr/resources", get(pmr_guide))
        .route("/api/pmr/session", post(record_pmr_session))
        .route("/api/pmr/history/:user_id", get(pmr_history))
        .route("/api/pmr/name/:name", get(pmr_by_name))
        .route("/api/pmr/:id", get(pmr_by_id))
        // Health
        .route("/health", get(health_check))
        .with_state(server)
}

/// Request body for /api/triage/analyze
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<Value>,
}

/// Response body for /api/triage/analyze
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
    pub message: String,
}

/// Handle POST /api/triage/analyze - Analyze free text
async fn analyze_text(
    State(server): State<Arc<DiaryServer>>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(request) = payload?;
    let text = required_text("text", request.text, "Text is required for analysis")?;

    let analysis = server.detector().analyze(&text);

    tracing::info!(
        text_len = text.len(),
        risk_level = %analysis.risk_level,
        categories = analysis.detected_categories.len(),
        "Analyzed text"
    );
    if analysis.has_crisis_indicators {
        tracing::warn!(
            risk_level = %analysis.risk_level,
            "Crisis indicators detected"
        );
    }

    let message = analysis.summary_message();
    Ok(Json(AnalyzeResponse { analysis, message }))
}

/// Request body for /api/triage/safety-check
#[derive(Debug, Deserialize)]
pub struct SafetyCheckRequest {
    #[serde(default)]
    pub entry: Option<Value>,
}

/// Handle POST /api/triage/safety-check - Check a journal entry
async fn safety_check(
    State(server): State<Arc<DiaryServer>>,
    payload: Result<Json<SafetyCheckRequest>, JsonRejection>,
) -> Result<Json<SafetyCheck>, ApiError> {
    let Json(request) = payload?;
    let entry = required_text(
        "entry",
        request.entry,
        "Journal entry is required for safety check",
    )?;

    let check = server.detector().safety_check(&entry);

    tracing::info!(
        entry_len = entry.len(),
        risk_level = %check.risk_level,
        urgent = check.urgent.unwrap_or(false),
        "Safety check complete"
    );

    Ok(Json(check))
}

/// Handle GET /api/triage/resources - Full resource table
async fn list_resources(State(server): State<Arc<DiaryServer>>) -> Response {
    Json(server.detector().tables().resource_table()).into_response()
}

/// Response body for /api/triage/resources/:category
#[derive(Debug, Serialize)]
pub struct CategoryResources {
    pub category: String,
    pub resources: Vec<ResourceEntry>,
}

/// Handle GET /api/triage/resources/:category
async fn resources_by_category(
    State(server): State<Arc<DiaryServer>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryResources>, ApiError> {
    let resources = server
        .detector()
        .tables()
        .resources_by_key(&category)
        .ok_or(ApiError::NotFound("Resource category not found"))?
        .to_vec();

    Ok(Json(CategoryResources {
        category,
        resources,
    }))
}

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub uptime_seconds: u64,
    pub journal_entries: usize,
}

/// Handle GET /health - Health check endpoint
pub async fn health_check(State(server): State<Arc<DiaryServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        uptime_seconds: server.uptime_seconds(),
        journal_entries: server.journal().count(),
    })
}
