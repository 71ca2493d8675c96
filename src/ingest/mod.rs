//! Quiz-text ingestion: turns free-form pasted study material (Quizlet
//! exports, chat-style question blocks, delimiter-separated lists) into
//! storable question records.
//!
//! Two independent strategies scan the same raw text:
//! - [`line::parse_lines`] reads one compact question per line
//!   (pipe / tab / comma / inline-`?` layouts).
//! - [`block::parse_blocks`] groups consecutive lines into chat-style
//!   multiple-choice blocks terminated by an `Antwoord:` line.
//!
//! [`records::build_records`] concatenates both outputs (blocks first)
//! into the final ordered list. All three stages are pure and total:
//! unparseable fragments are dropped, never reported per line. Only the
//! HTTP boundary decides whether an ingestion produced anything usable.

pub mod block;
pub mod line;
pub mod records;

pub use block::{parse_blocks, ParsedBlock};
pub use line::{parse_lines, ParsedRow};
pub use records::build_records;

/// Map a single-letter answer (`a`..`d`, any case, surrounding
/// whitespace ignored) to its option index. Anything else is answer
/// text, not a letter.
pub(crate) fn letter_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match letter.to_ascii_uppercase() {
        'A' => Some(0),
        'B' => Some(1),
        'C' => Some(2),
        'D' => Some(3),
        _ => None,
    }
}
