//! Record building: merge both parsers' outputs into one ordered list of
//! storable questions.

use crate::domain::{NewQuestion, QuestionKind};

use super::{ParsedBlock, ParsedRow};

/// Fold blocks and rows into question records with contiguous zero-based
/// sort order. Block-derived records always precede row-derived ones;
/// stored quizzes depend on that order, so treat it as a contract.
///
/// A row declared multiple-choice without explicit options becomes a
/// degenerate single-option record rather than being dropped. A pure
/// fold: emptiness is for the caller to judge.
pub fn build_records(blocks: &[ParsedBlock], rows: &[ParsedRow]) -> Vec<NewQuestion> {
    let mut records: Vec<NewQuestion> = Vec::with_capacity(blocks.len() + rows.len());

    for block in blocks {
        records.push(NewQuestion {
            kind: QuestionKind::Mc,
            prompt: block.question.clone(),
            choices: Some(block.options.clone()),
            answer: block.answer.clone(),
            sort_order: records.len() as i64,
        });
    }

    for row in rows {
        let choices = match (row.kind, &row.choices) {
            (QuestionKind::Mc, Some(choices)) if !choices.is_empty() => Some(choices.clone()),
            (QuestionKind::Mc, _) => Some(vec![row.answer.clone()]),
            (QuestionKind::Open, _) => None,
        };
        records.push(NewQuestion {
            kind: row.kind,
            prompt: row.prompt.clone(),
            choices,
            answer: row.answer.clone(),
            sort_order: records.len() as i64,
        });
    }

    records
}
