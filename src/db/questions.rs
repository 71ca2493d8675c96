//! Question record operations: batch insert at ingestion, ordered reads.

use rusqlite::{params, Connection, Result};

use crate::domain::{NewQuestion, Question, QuestionKind};

/// Insert one ingestion batch of question records for a quiz.
/// Returns the number of records written.
pub fn insert_questions(
    conn: &Connection,
    quiz_id: i64,
    records: &[NewQuestion],
) -> Result<usize> {
    let mut stmt = conn.prepare(
        r#"
    INSERT INTO questions (quiz_id, question_type, prompt, choices, answer, explanation, sort_order)
    VALUES (?1, ?2, ?3, ?4, ?5, NULL, ?6)
    "#,
    )?;

    for record in records {
        let choices_json = match &record.choices {
            Some(choices) => Some(
                serde_json::to_string(choices)
                    .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?,
            ),
            None => None,
        };
        stmt.execute(params![
            quiz_id,
            record.kind.as_str(),
            record.prompt,
            choices_json,
            record.answer,
            record.sort_order,
        ])?;
    }

    Ok(records.len())
}

pub fn list_questions_for_quiz(conn: &Connection, quiz_id: i64) -> Result<Vec<Question>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT id, quiz_id, question_type, prompt, choices, answer, explanation, sort_order
    FROM questions WHERE quiz_id = ?1
    ORDER BY sort_order ASC
    "#,
    )?;

    let questions = stmt
        .query_map(params![quiz_id], row_to_question)?
        .collect::<Result<Vec<_>>>()?;
    Ok(questions)
}

pub fn count_questions(conn: &Connection, quiz_id: i64) -> Result<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM questions WHERE quiz_id = ?1",
        params![quiz_id],
        |row| row.get(0),
    )
}

fn row_to_question(row: &rusqlite::Row) -> Result<Question> {
    let kind_str: String = row.get(2)?;
    let choices_json: Option<String> = row.get(4)?;

    Ok(Question {
        id: row.get(0)?,
        quiz_id: row.get(1)?,
        kind: QuestionKind::from_str(&kind_str).unwrap_or(QuestionKind::Open),
        prompt: row.get(3)?,
        choices: choices_json.and_then(|json| serde_json::from_str(&json).ok()),
        answer: row.get(5)?,
        explanation: row.get(6)?,
        sort_order: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::quizzes::insert_quiz;
    use crate::domain::NewQuiz;
    use crate::testing::TestEnv;

    fn make_quiz(conn: &Connection) -> i64 {
        insert_quiz(
            conn,
            &NewQuiz {
                owner: "lisa".to_string(),
                subject: "Geschiedenis".to_string(),
                chapter: "H1".to_string(),
                title: "Proefwerk".to_string(),
                description: None,
            },
        )
        .unwrap()
    }

    fn mc(prompt: &str, choices: &[&str], answer: &str, sort_order: i64) -> NewQuestion {
        NewQuestion {
            kind: QuestionKind::Mc,
            prompt: prompt.to_string(),
            choices: Some(choices.iter().map(|s| s.to_string()).collect()),
            answer: answer.to_string(),
            sort_order,
        }
    }

    #[test]
    fn test_insert_and_list_roundtrip() {
        let env = TestEnv::new().unwrap();
        let conn = env.conn();
        let quiz_id = make_quiz(&conn);

        let records = vec![
            mc("Vraag 1?", &["a", "b", "c", "d"], "b", 0),
            NewQuestion {
                kind: QuestionKind::Open,
                prompt: "Vraag 2?".to_string(),
                choices: None,
                answer: "antwoord".to_string(),
                sort_order: 1,
            },
        ];

        let written = insert_questions(&conn, quiz_id, &records).unwrap();
        assert_eq!(written, 2);

        let questions = list_questions_for_quiz(&conn, quiz_id).unwrap();
        assert_eq!(questions.len(), 2);

        assert_eq!(questions[0].kind, QuestionKind::Mc);
        assert_eq!(questions[0].choices.as_deref().unwrap(), ["a", "b", "c", "d"]);
        assert_eq!(questions[0].answer, "b");
        assert!(questions[0].explanation.is_none());

        assert_eq!(questions[1].kind, QuestionKind::Open);
        assert!(questions[1].choices.is_none());
        assert_eq!(questions[1].sort_order, 1);
    }

    #[test]
    fn test_list_is_ordered_by_sort_order() {
        let env = TestEnv::new().unwrap();
        let conn = env.conn();
        let quiz_id = make_quiz(&conn);

        // Insert out of order; reads must come back sorted.
        let records = vec![
            mc("derde?", &["a", "b", "c", "d"], "a", 2),
            mc("eerste?", &["a", "b", "c", "d"], "a", 0),
            mc("tweede?", &["a", "b", "c", "d"], "a", 1),
        ];
        insert_questions(&conn, quiz_id, &records).unwrap();

        let prompts: Vec<String> = list_questions_for_quiz(&conn, quiz_id)
            .unwrap()
            .into_iter()
            .map(|q| q.prompt)
            .collect();
        assert_eq!(prompts, ["eerste?", "tweede?", "derde?"]);
    }

    #[test]
    fn test_failed_batch_rolls_back_quiz_and_questions() {
        let env = TestEnv::new().unwrap();
        let conn = env.conn();
        // Force a mid-batch failure on the second record.
        conn.execute_batch(
            "CREATE UNIQUE INDEX idx_questions_quiz_order ON questions(quiz_id, sort_order)",
        )
        .unwrap();

        let tx = conn.unchecked_transaction().unwrap();
        let quiz_id = make_quiz(&tx);
        let records = vec![
            mc("eerste?", &["a", "b", "c", "d"], "a", 0),
            mc("tweede?", &["a", "b", "c", "d"], "a", 0),
        ];
        assert!(insert_questions(&tx, quiz_id, &records).is_err());
        drop(tx);

        let quizzes: i64 = conn
            .query_row("SELECT COUNT(*) FROM quizzes", [], |row| row.get(0))
            .unwrap();
        let questions: i64 = conn
            .query_row("SELECT COUNT(*) FROM questions", [], |row| row.get(0))
            .unwrap();
        assert_eq!((quizzes, questions), (0, 0));
    }

    #[test]
    fn test_count_questions() {
        let env = TestEnv::new().unwrap();
        let conn = env.conn();
        let quiz_id = make_quiz(&conn);
        let other_quiz = make_quiz(&conn);

        insert_questions(&conn, quiz_id, &[mc("v?", &["a", "b", "c", "d"], "a", 0)]).unwrap();

        assert_eq!(count_questions(&conn, quiz_id).unwrap(), 1);
        assert_eq!(count_questions(&conn, other_quiz).unwrap(), 0);
    }
}
