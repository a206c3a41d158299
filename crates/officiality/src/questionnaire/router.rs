use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::domain::{DocumentState, FlatDocumentState, Schema};
use super::provision::Officiality;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::rules::Classify;
use super::service::{QuestionnaireService, ServiceError};

/// Router builder exposing stateless classification and questionnaire sessions.
pub fn questionnaire_router<R>(service: Arc<QuestionnaireService<R>>) -> Router
where
    R: SessionRepository + 'static,
{
    Router::new()
        .route("/api/v1/classify/flat", post(classify_flat_handler))
        .route("/api/v1/classify/nested", post(classify_nested_handler))
        .route("/api/v1/sessions", post(start_handler::<R>))
        .route(
            "/api/v1/sessions/:session_id",
            get(status_handler::<R>)
                .patch(answer_handler::<R>)
                .delete(discard_handler::<R>),
        )
        .route(
            "/api/v1/sessions/:session_id/reset",
            post(reset_handler::<R>),
        )
        .with_state(service)
}

/// Response body for one-shot classification requests.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResponse {
    pub officiality: Option<Officiality>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StartSessionRequest {
    #[serde(default)]
    pub(crate) schema: Option<Schema>,
}

pub(crate) async fn classify_flat_handler(
    Json(state): Json<FlatDocumentState>,
) -> Json<ClassificationResponse> {
    Json(ClassificationResponse {
        officiality: state.classify(),
    })
}

pub(crate) async fn classify_nested_handler(
    Json(state): Json<DocumentState>,
) -> Json<ClassificationResponse> {
    Json(ClassificationResponse {
        officiality: state.classify(),
    })
}

pub(crate) async fn start_handler<R>(
    State(service): State<Arc<QuestionnaireService<R>>>,
    body: Bytes,
) -> Response
where
    R: SessionRepository + 'static,
{
    let request = if body.iter().all(u8::is_ascii_whitespace) {
        StartSessionRequest::default()
    } else {
        match serde_json::from_slice::<StartSessionRequest>(&body) {
            Ok(request) => request,
            Err(err) => {
                let payload = json!({ "error": format!("invalid session request: {err}") });
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
            }
        }
    };

    match service.start(request.schema) {
        Ok(record) => (StatusCode::CREATED, Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn status_handler<R>(
    State(service): State<Arc<QuestionnaireService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn answer_handler<R>(
    State(service): State<Arc<QuestionnaireService<R>>>,
    Path(session_id): Path<String>,
    Json(patch): Json<Value>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.answer(&SessionId(session_id), &patch) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn reset_handler<R>(
    State(service): State<Arc<QuestionnaireService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.reset(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, Json(record.status_view())).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn discard_handler<R>(
    State(service): State<Arc<QuestionnaireService<R>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
{
    match service.discard(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ServiceError) -> Response {
    let status = match &err {
        ServiceError::Session(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        ServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": err.to_string() });
    (status, Json(payload)).into_response()
}
