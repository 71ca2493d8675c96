//! Application state passed to all handlers.

use crate::db::DbPool;

#[derive(Clone)]
pub struct AppState {
    /// Shared store for quizzes and their question records
    pub db: DbPool,
}

impl AppState {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }
}
