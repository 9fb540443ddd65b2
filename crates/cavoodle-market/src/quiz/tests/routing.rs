use super::common::*;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::quiz::router::{
    calculate_handler, personality_handler, profile_handler, submit_handler, QuizAnswersRequest,
};
use crate::quiz::quiz_router;

#[tokio::test]
async fn calculate_handler_returns_camel_case_result() {
    let service = service(MemoryProfiles::default());
    let request = QuizAnswersRequest {
        answers: answers(&[(1, "A"), (3, "B")]),
    };

    let response = calculate_handler(State(service), axum::Json(request)).await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personalityType"], "ZoomiesChampion");
    assert_eq!(body["personalityDisplayName"], "Olympic Zoomies Champion");
    assert_eq!(body["energyLevel"], 2);
    assert_eq!(body["sassRating"], 1);
    let floof = body["floofFactor"].as_u64().expect("floof is numeric");
    assert!((3..=5).contains(&floof));
}

#[tokio::test]
async fn personality_handler_rejects_unknown_type() {
    let response = personality_handler(Path("Goldendoodle".to_string())).await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("Goldendoodle"));
}

#[tokio::test]
async fn personality_handler_flattens_catalog_entry() {
    let response = personality_handler(Path("SockCollector".to_string())).await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personalityType"], "SockCollector");
    assert_eq!(body["displayName"], "Certified Sock Collector");
    assert_eq!(body["emoji"], "🧦");
    assert_eq!(body["traitScores"]["floof"], 4);
}

#[tokio::test]
async fn submit_handler_returns_unprocessable_for_blank_listing() {
    let service = service(MemoryProfiles::default());

    let response = submit_handler(
        State(service),
        Path(" ".to_string()),
        axum::Json(QuizAnswersRequest::default()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn submit_handler_returns_internal_error_on_repository_failure() {
    let service = service(UnavailableProfiles);

    let response = submit_handler(
        State(service),
        Path("listing-7".to_string()),
        axum::Json(QuizAnswersRequest::default()),
    )
    .await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("database offline"));
}

#[tokio::test]
async fn profile_handler_returns_not_found_before_submission() {
    let service = service(MemoryProfiles::default());

    let response = profile_handler(State(service), Path("listing-9".to_string())).await;
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["listing_id"], "listing-9");
}

#[tokio::test]
async fn router_accepts_string_keyed_answer_maps() {
    let app = quiz_router(service(MemoryProfiles::default()));
    let payload = json!({ "answers": { "4": "A", "99": "A", "1": "Z" } });

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/v1/quiz/calculate")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["personalityType"], "CouchThief");
    assert_eq!(body["sassRating"], 1);
}

#[tokio::test]
async fn router_serves_question_bank() {
    let app = quiz_router(service(MemoryProfiles::default()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/quiz/questions")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    let (status, body) = json_body(response).await;

    assert_eq!(status, StatusCode::OK);
    let questions = body.as_array().expect("array of questions");
    assert_eq!(questions.len(), 7);
    assert_eq!(questions[0]["options"][0]["scores"]["bark"], 5);
}
