use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::CatalogEntry;
use super::engine::AnswerSet;
use super::personality::PersonalityType;
use super::repository::{ListingId, PersonalityProfileRepository, RepositoryError};
use super::service::{QuizService, QuizServiceError};

/// Request body for calculate and submit endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizAnswersRequest {
    #[serde(default)]
    pub answers: AnswerSet,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityCatalogView {
    pub personality_type: PersonalityType,
    pub display_name: &'static str,
    #[serde(flatten)]
    pub entry: &'static CatalogEntry,
}

impl PersonalityCatalogView {
    fn for_type(kind: PersonalityType) -> Self {
        Self {
            personality_type: kind,
            display_name: kind.display_name(),
            entry: kind.catalog_entry(),
        }
    }
}

/// Router builder exposing the quiz endpoints.
pub fn quiz_router<R>(service: Arc<QuizService<R>>) -> Router
where
    R: PersonalityProfileRepository + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<R>))
        .route("/api/v1/quiz/calculate", post(calculate_handler::<R>))
        .route("/api/v1/quiz/personalities", get(personalities_handler))
        .route(
            "/api/v1/quiz/personalities/:personality_type",
            get(personality_handler),
        )
        .route(
            "/api/v1/quiz/listings/:listing_id/submit",
            post(submit_handler::<R>),
        )
        .route(
            "/api/v1/quiz/listings/:listing_id/profile",
            get(profile_handler::<R>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<R>(State(service): State<Arc<QuizService<R>>>) -> Response
where
    R: PersonalityProfileRepository + 'static,
{
    (StatusCode::OK, Json(service.questions())).into_response()
}

pub(crate) async fn calculate_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Json(request): Json<QuizAnswersRequest>,
) -> Response
where
    R: PersonalityProfileRepository + 'static,
{
    let result = service.calculate(&request.answers);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn personalities_handler() -> Response {
    let views: Vec<PersonalityCatalogView> = PersonalityType::ALL
        .into_iter()
        .map(PersonalityCatalogView::for_type)
        .collect();
    (StatusCode::OK, Json(views)).into_response()
}

pub(crate) async fn personality_handler(Path(personality_type): Path<String>) -> Response {
    match PersonalityType::from_name(&personality_type) {
        Some(kind) => (StatusCode::OK, Json(PersonalityCatalogView::for_type(kind))).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown personality type '{personality_type}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(listing_id): Path<String>,
    Json(request): Json<QuizAnswersRequest>,
) -> Response
where
    R: PersonalityProfileRepository + 'static,
{
    match service.submit(ListingId(listing_id), request.answers) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<R>(
    State(service): State<Arc<QuizService<R>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    R: PersonalityProfileRepository + 'static,
{
    let id = ListingId(listing_id);
    match service.profile(&id) {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(QuizServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "listing_id": id.0,
                "error": "no personality profile submitted",
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: QuizServiceError) -> Response {
    let status = match error {
        QuizServiceError::InvalidListing => StatusCode::UNPROCESSABLE_ENTITY,
        QuizServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        QuizServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
