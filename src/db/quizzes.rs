//! Quiz container CRUD operations.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};

use crate::domain::{NewQuiz, Quiz};

pub fn insert_quiz(conn: &Connection, quiz: &NewQuiz) -> Result<i64> {
    conn.execute(
        r#"
    INSERT INTO quizzes (owner, subject, chapter, title, description, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6)
    "#,
        params![
            quiz.owner,
            quiz.subject,
            quiz.chapter,
            quiz.title,
            quiz.description,
            Utc::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn get_quiz_by_id(conn: &Connection, id: i64) -> Result<Option<Quiz>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, owner, subject, chapter, title, description, created_at
    FROM quizzes WHERE id = ?1
    "#,
    )?;

    let mut rows = stmt.query(params![id])?;
    if let Some(row) = rows.next()? {
        Ok(Some(row_to_quiz(row)?))
    } else {
        Ok(None)
    }
}

pub fn list_quizzes_by_owner(conn: &Connection, owner: &str) -> Result<Vec<Quiz>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, owner, subject, chapter, title, description, created_at
    FROM quizzes WHERE owner = ?1
    ORDER BY created_at DESC, id DESC
    "#,
    )?;

    let quizzes = stmt
        .query_map(params![owner], row_to_quiz)?
        .collect::<Result<Vec<_>>>()?;
    Ok(quizzes)
}

fn row_to_quiz(row: &rusqlite::Row) -> Result<Quiz> {
    let created_at_str: String = row.get(6)?;

    Ok(Quiz {
        id: row.get(0)?,
        owner: row.get(1)?,
        subject: row.get(2)?,
        chapter: row.get(3)?,
        title: row.get(4)?,
        description: row.get(5)?,
        created_at: DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
    })
}
