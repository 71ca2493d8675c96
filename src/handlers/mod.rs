//! HTTP request handlers and the API error surface.

pub mod quizzes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::state::AppState;

pub use quizzes::{create_quiz, get_quiz, list_quizzes};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(create_quiz).get(list_quizzes))
        .route("/quizzes/{id}", get(get_quiz))
        .with_state(state)
}

/// Errors surfaced at the API boundary.
///
/// The three parsing stages themselves never fail; they degrade by
/// dropping unparseable fragments. Only this layer decides whether an
/// ingestion produced anything usable, and only the persistence step is
/// worth retrying (the parse is deterministic).
#[derive(Debug)]
pub enum ApiError {
    /// A required payload field was missing or blank
    EmptyInput(&'static str),
    /// The pasted text was non-empty but no parser produced a question
    NoQuestionsDetected,
    /// The requested quiz does not exist for this caller
    QuizNotFound,
    /// The store rejected the quiz or its question batch
    Persistence(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::EmptyInput(field) => write!(f, "Field '{}' is required", field),
            ApiError::NoQuestionsDetected => {
                write!(f, "No questions detected in the pasted text")
            }
            ApiError::QuizNotFound => write!(f, "Quiz not found"),
            ApiError::Persistence(err) => write!(f, "Failed to store quiz: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::EmptyInput(_) => (StatusCode::BAD_REQUEST, "empty_input"),
            ApiError::NoQuestionsDetected => {
                (StatusCode::UNPROCESSABLE_ENTITY, "no_questions_detected")
            }
            ApiError::QuizNotFound => (StatusCode::NOT_FOUND, "quiz_not_found"),
            ApiError::Persistence(_) => {
                tracing::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "persistence_failure")
            }
        };

        (
            status,
            Json(json!({ "error": code, "message": self.to_string() })),
        )
            .into_response()
    }
}
