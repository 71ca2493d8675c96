//! Quiz ingestion and retrieval handlers.
//!
//! `create_quiz` is the ingestion boundary: it validates the payload,
//! runs both parsers over the pasted text, and persists the combined
//! question records as one batch under a fresh quiz container.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::auth::CallerIdentity;
use crate::db::{self, try_lock, LogOnError};
use crate::domain::{NewQuiz, Question, QuestionKind, Quiz};
use crate::ingest;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateQuizPayload {
    pub subject: String,
    pub chapter: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// How ambiguous rows are classified; defaults to open questions.
    #[serde(default)]
    pub mode: QuestionKind,
    /// The raw pasted study material.
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuizResponse {
    pub quiz_id: i64,
    pub question_count: usize,
}

#[derive(Debug, Serialize)]
pub struct QuizDetailResponse {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub struct QuizSummary {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub question_count: i64,
}

/// POST /quizzes — ingest pasted study material into a stored quiz.
pub async fn create_quiz(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Json(payload): Json<CreateQuizPayload>,
) -> Result<(StatusCode, Json<CreateQuizResponse>), ApiError> {
    for (field, value) in [
        ("subject", &payload.subject),
        ("chapter", &payload.chapter),
        ("title", &payload.title),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::EmptyInput(field));
        }
    }

    // Both parsers scan the full text independently; the builder keeps
    // block-derived records ahead of row-derived ones.
    let blocks = ingest::parse_blocks(&payload.text);
    let rows = ingest::parse_lines(&payload.text, payload.mode);
    let records = ingest::build_records(&blocks, &rows);

    if records.is_empty() {
        return Err(ApiError::NoQuestionsDetected);
    }

    let conn = try_lock(&state.db).map_err(|e| ApiError::Persistence(e.to_string()))?;

    // One transaction for the container and its records; a failed batch
    // rolls back the quiz instead of leaving a partial one behind.
    let tx = conn
        .unchecked_transaction()
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

    let quiz_id = db::insert_quiz(
        &tx,
        &NewQuiz {
            owner: caller.username.clone(),
            subject: payload.subject.trim().to_string(),
            chapter: payload.chapter.trim().to_string(),
            title: payload.title.trim().to_string(),
            description: payload
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        },
    )
    .map_err(|e| ApiError::Persistence(e.to_string()))?;

    let question_count = db::insert_questions(&tx, quiz_id, &records)
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

    tx.commit()
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

    tracing::info!(
        "Created quiz {} for '{}' with {} questions ({} blocks, {} rows)",
        quiz_id,
        caller.username,
        question_count,
        blocks.len(),
        rows.len()
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateQuizResponse {
            quiz_id,
            question_count,
        }),
    ))
}

/// GET /quizzes/{id} — a quiz with its questions in sort order.
pub async fn get_quiz(
    State(state): State<AppState>,
    caller: CallerIdentity,
    Path(id): Path<i64>,
) -> Result<Json<QuizDetailResponse>, ApiError> {
    let conn = try_lock(&state.db).map_err(|e| ApiError::Persistence(e.to_string()))?;

    let quiz = db::get_quiz_by_id(&conn, id)
        .map_err(|e| ApiError::Persistence(e.to_string()))?
        .filter(|quiz| quiz.owner == caller.username)
        .ok_or(ApiError::QuizNotFound)?;

    let questions = db::list_questions_for_quiz(&conn, quiz.id)
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

    Ok(Json(QuizDetailResponse { quiz, questions }))
}

/// GET /quizzes — the caller's quizzes with question counts.
pub async fn list_quizzes(
    State(state): State<AppState>,
    caller: CallerIdentity,
) -> Result<Json<Vec<QuizSummary>>, ApiError> {
    let conn = try_lock(&state.db).map_err(|e| ApiError::Persistence(e.to_string()))?;

    let quizzes = db::list_quizzes_by_owner(&conn, &caller.username)
        .map_err(|e| ApiError::Persistence(e.to_string()))?;

    let summaries = quizzes
        .into_iter()
        .map(|quiz| {
            let question_count =
                db::count_questions(&conn, quiz.id).log_warn_default("count quiz questions");
            QuizSummary {
                quiz,
                question_count,
            }
        })
        .collect();

    Ok(Json(summaries))
}
