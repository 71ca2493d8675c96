//! Line-oriented parsing: one trimmed input line is one compact question.
//!
//! Each line is matched against an ordered list of delimiter strategies
//! (pipe, tab, single comma after a `?`, inline `?`), first structural
//! match wins. A line that carries a delimiter but fits none of that
//! delimiter's layouts is dropped outright; it does not get a second
//! chance with the later strategies.

use crate::domain::QuestionKind;

/// A flat question row detected on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRow {
    pub prompt: String,
    pub answer: String,
    pub kind: QuestionKind,
    /// Present only for multiple-choice rows detected with explicit options.
    pub choices: Option<Vec<String>>,
}

/// Scan `text` line by line and emit every recognized question row.
///
/// `default_mode` decides the kind of rows that carry no explicit
/// multiple-choice signal (plain `prompt | answer` pairs, comma pairs,
/// inline-`?` lines). Never fails; unrecognized lines are skipped.
pub fn parse_lines(text: &str, default_mode: QuestionKind) -> Vec<ParsedRow> {
    let mut rows = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // Answer lines belong to the block parser's vocabulary.
        if is_answer_marker(line) {
            continue;
        }

        if line.contains('|') {
            // Pipe lines never fall through to the other strategies.
            if let Some(row) = parse_delimited(line, '|', true, default_mode) {
                rows.push(row);
            }
            continue;
        }

        if line.contains('\t') {
            if let Some(row) = parse_delimited(line, '\t', false, default_mode) {
                rows.push(row);
            }
            continue;
        }

        if let Some(row) = parse_comma_pair(line, default_mode) {
            rows.push(row);
            continue;
        }

        if let Some(row) = parse_inline_question(line, default_mode) {
            rows.push(row);
        }
    }

    rows
}

/// Case-insensitive `antwoord:` or `antw:` prefix.
fn is_answer_marker(line: &str) -> bool {
    has_prefix_ignore_case(line, "antwoord:") || has_prefix_ignore_case(line, "antw:")
}

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Pipe- or tab-delimited layouts.
///
/// - `prompt | A | B | C | D | correct` (six or more segments): explicit
///   multiple choice, `correct` either a letter or the answer text.
/// - `prompt | answer | mc | choice1;choice2;...` (pipe only): the `mc`
///   token marks the row multiple-choice with a `;`-separated choice list.
/// - `prompt | answer` (exactly two segments): kind decided by
///   `default_mode`.
fn parse_delimited(
    line: &str,
    separator: char,
    allow_mc_token: bool,
    default_mode: QuestionKind,
) -> Option<ParsedRow> {
    let parts: Vec<&str> = line
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() >= 6 {
        let choices: Vec<String> = parts[1..5].iter().map(|s| s.to_string()).collect();
        let answer = match super::letter_index(parts[5]) {
            Some(index) => choices[index].clone(),
            None => parts[5].to_string(),
        };
        return Some(ParsedRow {
            prompt: parts[0].to_string(),
            answer,
            kind: QuestionKind::Mc,
            choices: Some(choices),
        });
    }

    if allow_mc_token && parts.len() >= 3 && parts[2].eq_ignore_ascii_case("mc") {
        let answer = parts[1].to_string();
        let mut choices: Vec<String> = parts[3..]
            .join(";")
            .split(';')
            .map(str::trim)
            .filter(|choice| !choice.is_empty())
            .map(str::to_string)
            .collect();
        if !choices.iter().any(|c| c.eq_ignore_ascii_case(&answer)) {
            choices.insert(0, answer.clone());
        }
        return Some(ParsedRow {
            prompt: parts[0].to_string(),
            answer,
            kind: QuestionKind::Mc,
            choices: Some(choices),
        });
    }

    if parts.len() == 2 {
        return Some(ParsedRow {
            prompt: parts[0].to_string(),
            answer: parts[1].to_string(),
            kind: default_mode,
            choices: None,
        });
    }

    None
}

/// Exactly one comma, first part ending in `?` or `¿`.
fn parse_comma_pair(line: &str, default_mode: QuestionKind) -> Option<ParsedRow> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() != 2 {
        return None;
    }
    let prompt = parts[0].trim();
    let answer = parts[1].trim();
    if prompt.is_empty() || answer.is_empty() {
        return None;
    }
    if !(prompt.ends_with('?') || prompt.ends_with('¿')) {
        return None;
    }
    Some(ParsedRow {
        prompt: prompt.to_string(),
        answer: answer.to_string(),
        kind: default_mode,
        choices: None,
    })
}

/// `question? answer` — the earliest `?` that is followed by whitespace
/// and a non-empty remainder ends the prompt; the remainder is the
/// answer. A `?` glued to the next word (a quoted question inside the
/// prompt, say) does not end it.
fn parse_inline_question(line: &str, default_mode: QuestionKind) -> Option<ParsedRow> {
    for (mark, _) in line.match_indices('?') {
        if mark == 0 {
            continue;
        }
        let (prompt, rest) = line.split_at(mark + 1);
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let answer = rest.trim_start();
        if answer.is_empty() {
            continue;
        }
        return Some(ParsedRow {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
            kind: default_mode,
            choices: None,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(text: &str) -> Vec<ParsedRow> {
        parse_lines(text, QuestionKind::Open)
    }

    #[test]
    fn test_pipe_six_columns_letter_answer() {
        let rows = open("Capital of France?|Paris|Berlin|Madrid|Rome|A");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, QuestionKind::Mc);
        assert_eq!(rows[0].prompt, "Capital of France?");
        assert_eq!(
            rows[0].choices.as_deref().unwrap(),
            ["Paris", "Berlin", "Madrid", "Rome"]
        );
        assert_eq!(rows[0].answer, "Paris");
    }

    #[test]
    fn test_pipe_six_columns_lowercase_letter() {
        let rows = open("Q|een|twee|drie|vier|c");
        assert_eq!(rows[0].answer, "drie");
    }

    #[test]
    fn test_pipe_six_columns_literal_answer() {
        // Sixth segment that is not a letter is used as answer text.
        let rows = open("Q|een|twee|drie|vier|twee");
        assert_eq!(rows[0].answer, "twee");
        assert_eq!(rows[0].choices.as_deref().unwrap().len(), 4);
    }

    #[test]
    fn test_pipe_two_columns_uses_default_mode() {
        let rows = open("Wat is de hoofdstad van Frankrijk?|Paris");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, QuestionKind::Open);
        assert_eq!(rows[0].prompt, "Wat is de hoofdstad van Frankrijk?");
        assert_eq!(rows[0].answer, "Paris");
        assert!(rows[0].choices.is_none());

        let rows = parse_lines("Wat is 2+2?|vier", QuestionKind::Mc);
        assert_eq!(rows[0].kind, QuestionKind::Mc);
        assert!(rows[0].choices.is_none());
    }

    #[test]
    fn test_pipe_mc_token() {
        let rows = open("Hoofdstad van Spanje?|Madrid|mc|Barcelona;Sevilla;Valencia");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, QuestionKind::Mc);
        // Answer not in the listed choices, so it is prepended.
        assert_eq!(
            rows[0].choices.as_deref().unwrap(),
            ["Madrid", "Barcelona", "Sevilla", "Valencia"]
        );
        assert_eq!(rows[0].answer, "Madrid");
    }

    #[test]
    fn test_pipe_mc_token_answer_already_listed() {
        let rows = open("Q?|madrid|MC|Madrid;Barcelona");
        assert_eq!(rows[0].choices.as_deref().unwrap(), ["Madrid", "Barcelona"]);
        assert_eq!(rows[0].answer, "madrid");
    }

    #[test]
    fn test_pipe_mc_token_extra_pipes_act_as_separators() {
        let rows = open("Q?|a|mc|b;c|d");
        assert_eq!(rows[0].choices.as_deref().unwrap(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_pipe_no_fallthrough() {
        // Four segments match no pipe layout... and the line is dropped,
        // even though "a|b|c|d" has no other delimiter to claim it.
        assert!(open("a|b|c|d").is_empty());
        // Same text with an inline "?" would match the fallback rule if
        // the pipes were absent; with pipes present it stays dropped.
        assert!(open("is dit lastig? ja|b|c|d").is_empty());
    }

    #[test]
    fn test_pipe_single_segment_dropped() {
        assert!(open("alleen een prompt|").is_empty());
    }

    #[test]
    fn test_tab_six_columns() {
        let rows = open("Q\tParis\tBerlin\tMadrid\tRome\tB");
        assert_eq!(rows[0].kind, QuestionKind::Mc);
        assert_eq!(rows[0].answer, "Berlin");
    }

    #[test]
    fn test_tab_two_columns() {
        let rows = open("Wie schreef Max Havelaar?\tMultatuli");
        assert_eq!(rows[0].kind, QuestionKind::Open);
        assert_eq!(rows[0].answer, "Multatuli");
    }

    #[test]
    fn test_tab_has_no_mc_token_layout() {
        // "mc" in the third tab column is just data; four tab segments
        // fit no tab layout, so the line is dropped like its pipe twin.
        assert!(open("Q?\tMadrid\tmc\tBarcelona;Sevilla").is_empty());
    }

    #[test]
    fn test_two_column_layout_is_exactly_two_segments() {
        // Three, four and five segments match neither the six-column nor
        // the two-column layout and never collapse to a pair.
        assert!(open("a|b|c").is_empty());
        assert!(open("a\tb\tc\td").is_empty());
        assert!(open("a|b|c|d|e").is_empty());
    }

    #[test]
    fn test_comma_pair_with_question_mark() {
        let rows = open("Hoofdstad van Portugal?, Lissabon");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].prompt, "Hoofdstad van Portugal?");
        assert_eq!(rows[0].answer, "Lissabon");
    }

    #[test]
    fn test_comma_pair_inverted_mark() {
        let rows = open("¿Capital de España¿, Madrid");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].answer, "Madrid");
    }

    #[test]
    fn test_comma_without_question_mark_dropped() {
        assert!(open("appel, peer").is_empty());
    }

    #[test]
    fn test_comma_with_two_commas_falls_through() {
        // Three comma parts is not the comma layout; the inline-"?" rule
        // picks the line up instead.
        let rows = open("Wat hoort hier niet? appel, peer, hamer");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].prompt, "Wat hoort hier niet?");
        assert_eq!(rows[0].answer, "appel, peer, hamer");
    }

    #[test]
    fn test_inline_question_mark() {
        let rows = open("Wat is 2+2? vier");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].prompt, "Wat is 2+2?");
        assert_eq!(rows[0].answer, "vier");
    }

    #[test]
    fn test_inline_first_question_mark_ends_prompt() {
        let rows = open("Wie? Wat? Waar");
        assert_eq!(rows[0].prompt, "Wie?");
        assert_eq!(rows[0].answer, "Wat? Waar");
    }

    #[test]
    fn test_inline_requires_whitespace_after_mark() {
        assert!(open("vraag?antwoord").is_empty());
    }

    #[test]
    fn test_inline_skips_question_mark_inside_prompt() {
        // The first "?" sits inside a quoted word; the scanner moves on
        // to the next one instead of dropping the line.
        let rows = open("Hoe spel je 'waarom?' ergens? why");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].prompt, "Hoe spel je 'waarom?' ergens?");
        assert_eq!(rows[0].answer, "why");
    }

    #[test]
    fn test_inline_requires_prompt_text() {
        assert!(open("? antwoord").is_empty());
    }

    #[test]
    fn test_answer_marker_lines_skipped() {
        assert!(open("Antwoord: B").is_empty());
        assert!(open("antw: Parijs").is_empty());
        assert!(open("ANTWOORD: iets? met vraagteken").is_empty());
    }

    #[test]
    fn test_unmatched_lines_dropped_silently() {
        let rows = open("gewoon wat tekst\n\n   \nnog een regel");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_mixed_input_emits_in_line_order() {
        let text = "\
een?|1
twee?\t2
drie?, 3
vier? 4";
        let rows = open(text);
        let prompts: Vec<&str> = rows.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, ["een?", "twee?", "drie?", "vier?"]);
    }
}
