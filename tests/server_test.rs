// Integration tests for the HTTP server

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use cbt_diary::{
    config::ServerConfig,
    crisis::CrisisDetector,
    journal::InMemoryJournal,
    server::{create_router, DiaryServer},
    sessions::InMemorySessions,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const URGENT_FRAGMENT: &str = "emergency services at 911";

fn test_app() -> Router {
    let detector = CrisisDetector::builtin().expect("built-in tables");
    let journal = Arc::new(InMemoryJournal::new());
    let sessions = Arc::new(InMemorySessions::new());
    let server = DiaryServer::new(ServerConfig::default(), detector, journal, sessions);
    create_router(Arc::new(server))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn test_analyze_requires_text() {
    let app = test_app();

    let (status, body) = post(&app, "/api/triage/analyze", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Text is required for analysis" }));

    let (status, body) = post(&app, "/api/triage/analyze", json!({ "text": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Text is required for analysis");
}

#[tokio::test]
async fn test_falsy_input_counts_as_missing() {
    let app = test_app();

    for text in [json!(false), json!(0), json!(null)] {
        let (status, body) = post(&app, "/api/triage/analyze", json!({ "text": text })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Text is required for analysis" }));
    }

    for entry in [json!(false), json!(0), json!("")] {
        let body = json!({ "entry": entry });
        let (status, body) = post(&app, "/api/triage/safety-check", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "message": "Journal entry is required for safety check" })
        );
    }
}

#[tokio::test]
async fn test_whitespace_text_is_analyzed() {
    let app = test_app();

    let (status, body) = post(&app, "/api/triage/analyze", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["riskLevel"], "low");
}

#[tokio::test]
async fn test_analyze_rejects_malformed_body_as_json() {
    let app = test_app();

    let (status, body) = post(&app, "/api/triage/analyze", json!({ "text": 42 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_analyze_self_harm() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/triage/analyze",
        json!({ "text": "I feel like ending my life today" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["hasCrisisIndicators"], true);
    assert_eq!(body["analysis"]["detectedCategories"], json!(["selfHarm"]));
    assert_eq!(body["analysis"]["riskLevel"], "high");
    assert_eq!(
        body["message"],
        "Crisis indicators detected (high risk). Resources provided."
    );
}

#[tokio::test]
async fn test_analyze_safe_text_returns_general_resources() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/triage/analyze",
        json!({ "text": "Today was a good day. I went for a walk" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["analysis"]["hasCrisisIndicators"], false);
    assert_eq!(body["analysis"]["riskLevel"], "low");
    assert_eq!(body["analysis"]["detectedCategories"], json!([]));
    assert_eq!(body["message"], "No crisis indicators detected");

    let (_, general) = get(&app, "/api/triage/resources/general").await;
    assert_eq!(body["analysis"]["resources"], general["resources"]);
}

#[tokio::test]
async fn test_analyze_medium_risk_message() {
    let app = test_app();

    let (_, body) = post(
        &app,
        "/api/triage/analyze",
        json!({ "text": "I worry they neglect elderly residents there" }),
    )
    .await;
    assert_eq!(body["analysis"]["riskLevel"], "medium");
    assert_eq!(
        body["message"],
        "Crisis indicators detected (medium risk). Resources provided."
    );
}

#[tokio::test]
async fn test_safety_check_requires_entry() {
    let app = test_app();

    let (status, body) = post(&app, "/api/triage/safety-check", json!({ "text": "hi" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": "Journal entry is required for safety check" })
    );
}

#[tokio::test]
async fn test_safety_check_high_risk_is_urgent() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/triage/safety-check",
        json!({ "entry": "Some days I think I'd be better off dead" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isSafe"], false);
    assert_eq!(body["riskLevel"], "high");
    assert_eq!(body["urgent"], true);
    assert!(body["warning"].as_str().unwrap().contains(URGENT_FRAGMENT));
}

#[tokio::test]
async fn test_safety_check_medium_and_low_omit_urgent() {
    let app = test_app();

    let (_, medium) = post(
        &app,
        "/api/triage/safety-check",
        json!({ "entry": "The home was accused of elder abuse" }),
    )
    .await;
    assert_eq!(medium["riskLevel"], "medium");
    assert_eq!(medium["isSafe"], false);
    assert!(medium.get("urgent").is_none());
    assert!(medium.get("warning").is_none());

    let (_, low) = post(
        &app,
        "/api/triage/safety-check",
        json!({ "entry": "Made soup and called my sister" }),
    )
    .await;
    assert_eq!(low["riskLevel"], "low");
    assert_eq!(low["isSafe"], true);
    assert!(low.get("urgent").is_none());
}

#[tokio::test]
async fn test_resource_table() {
    let app = test_app();

    let (status, body) = get(&app, "/api/triage/resources").await;
    assert_eq!(status, StatusCode::OK);

    let table = body.as_object().unwrap();
    assert_eq!(table.len(), 5);
    assert_eq!(body["general"][0]["contact"], "988");
    assert_eq!(body["elderAbuse"][0]["name"], "Elder Abuse Hotline");
}

#[tokio::test]
async fn test_resources_by_category() {
    let app = test_app();

    let (status, body) = get(&app, "/api/triage/resources/harmOthers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "harmOthers");
    assert_eq!(body["resources"][0]["contact"], "911");

    let (status, body) = get(&app, "/api/triage/resources/gambling").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Resource category not found" }));
}

#[tokio::test]
async fn test_journal_crud() {
    let app = test_app();

    let (status, body) = post(&app, "/api/journal", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Content is required");

    let (status, body) = post(
        &app,
        "/api/journal",
        json!({ "content": "Felt calm after breathing practice", "emotions": ["peace"] }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Journal entry created");
    assert_eq!(body["entry"]["id"], 1);
    assert_eq!(body["entry"]["userId"], 1);
    assert_eq!(body["entry"]["mood"], 5);
    assert_eq!(body["entry"]["emotions"], json!(["peace"]));
    assert_eq!(body["entry"]["date"].as_str().unwrap().len(), 10);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/journal/1",
        Some(json!({ "mood": 8 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["entry"]["mood"], 8);
    assert_eq!(body["entry"]["content"], "Felt calm after breathing practice");

    let (_, body) = get(&app, "/api/journal?userId=1").await;
    assert_eq!(body["entries"].as_array().unwrap().len(), 1);

    let (_, body) = get(&app, "/api/journal/for-ai-analysis/1").await;
    assert_eq!(body["entries"][0]["id"], 1);

    let (status, body) = send(&app, Method::DELETE, "/api/journal/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Journal entry deleted");

    let (status, body) = send(&app, Method::DELETE, "/api/journal/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Entry not found");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/journal/not-a-number",
        Some(json!({ "mood": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_journal_zero_mood_and_user_use_defaults() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/journal",
        json!({ "content": "Long day", "mood": 0, "userId": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["entry"]["mood"], 5);
    assert_eq!(body["entry"]["userId"], 1);
}

#[tokio::test]
async fn test_emotion_catalog() {
    let app = test_app();

    let (status, body) = get(&app, "/api/emotion").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["positive"].as_array().unwrap().len(), 12);

    let (status, body) = get(&app, "/api/emotion/Hope").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Hope");
    assert_eq!(body["category"], "positive");

    let (status, body) = get(&app, "/api/emotion/category/NEGATIVE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "negative");
    assert_eq!(body["emotions"][0]["name"], "Anger");

    let (status, body) = get(&app, "/api/emotion/boredom").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Emotion not found");

    let (status, body) = get(&app, "/api/emotion/category/neutral").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Category not found");
}

#[tokio::test]
async fn test_breathing_catalog() {
    let app = test_app();

    let (_, body) = get(&app, "/api/breathing").await;
    assert_eq!(body["exercises"].as_array().unwrap().len(), 3);

    let (status, body) = get(&app, "/api/breathing/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Box Breathing");
    assert_eq!(body["pattern"]["hold2"], 4);

    let (_, body) = get(&app, "/api/breathing/name/diaphragmatic").await;
    assert_eq!(body["id"], 3);

    let (_, body) = get(&app, "/api/breathing/default/settings").await;
    assert_eq!(body["defaultExercise"]["name"], "4-7-8 Breathing");
    assert_eq!(body["defaultVisual"], "circle");

    let (status, body) = get(&app, "/api/breathing/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Exercise not found");
}

#[tokio::test]
async fn test_pmr_catalog() {
    let app = test_app();

    let (status, body) = get(&app, "/api/pmr").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["exercises"].as_array().unwrap().len(), 4);

    let (status, body) = get(&app, "/api/pmr/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Face & Jaw");
    assert_eq!(body["muscleGroups"], json!(["face-jaw"]));

    let (_, body) = get(&app, "/api/pmr/name/full%20body").await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["steps"], 32);

    let (status, body) = get(&app, "/api/pmr/resources").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["benefits"].as_array().unwrap().len(), 5);
    assert!(body["introduction"]
        .as_str()
        .unwrap()
        .starts_with("Progressive Muscle Relaxation"));

    let (status, body) = get(&app, "/api/pmr/12").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Exercise not found");

    let (status, _) = get(&app, "/api/pmr/name/neck").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pmr_session_requires_ids() {
    let app = test_app();

    for body in [
        json!({}),
        json!({ "userId": 1 }),
        json!({ "exerciseId": 2 }),
        json!({ "userId": 0, "exerciseId": 2 }),
        json!({ "userId": 1, "exerciseId": false }),
    ] {
        let (status, response) = post(&app, "/api/pmr/session", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response,
            json!({ "message": "User ID and Exercise ID are required" })
        );
    }
}

#[tokio::test]
async fn test_pmr_session_history() {
    let app = test_app();

    let (status, body) = post(
        &app,
        "/api/pmr/session",
        json!({ "userId": 7, "exerciseId": 2, "duration": 170, "completedSteps": 8, "rating": 4 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Session saved");
    assert_eq!(body["session"]["id"], 1);
    assert_eq!(body["session"]["rating"], 4);
    assert_eq!(body["session"]["notes"], "");
    assert!(body["session"]["date"].as_str().unwrap().contains('T'));

    let (_, body) = post(
        &app,
        "/api/pmr/session",
        json!({ "userId": 7, "exerciseId": 1, "notes": "Shoulders still tight" }),
    )
    .await;
    assert_eq!(body["session"]["id"], 2);
    assert!(body["session"]["rating"].is_null());
    assert!(body["session"].get("duration").is_none());

    post(&app, "/api/pmr/session", json!({ "userId": 8, "exerciseId": 3 })).await;

    let (status, body) = get(&app, "/api/pmr/history/7").await;
    assert_eq!(status, StatusCode::OK);
    let sessions = body["sessions"].as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0]["exerciseId"], 2);
    assert_eq!(sessions[1]["notes"], "Shoulders still tight");

    let (_, body) = get(&app, "/api/pmr/history/someone").await;
    assert_eq!(body["sessions"], json!([]));
}

#[tokio::test]
async fn test_health() {
    let app = test_app();

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["journalEntries"], 0);
}
