//! Block-oriented parsing: chat-style multiple-choice questions spanning
//! several lines.
//!
//! A block is a question line, its option lines and an `Antwoord:` line
//! carrying the correct answer (as a letter or as text). Segmentation is
//! heuristic: a `?`-bearing line starts a new block only once the current
//! block has seen its answer, so wrapped question text and options phrased
//! as sub-questions stay inside one block.

/// One extracted multiple-choice block: a question, exactly four
/// candidate options and the resolved correct answer (one of the four).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBlock {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// Scan `text` for multi-line question blocks and extract each one that
/// carries an `Antwoord:` line and at least one option candidate.
/// Never fails; unusable blocks are dropped.
pub fn parse_blocks(text: &str) -> Vec<ParsedBlock> {
    segment(text).iter().filter_map(|lines| extract(lines)).collect()
}

/// Group non-empty trimmed lines into blocks.
fn segment(text: &str) -> Vec<Vec<String>> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut answered = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // A "?" line only opens the next block once the current one has
        // its answer; until then it is wrapped question text or an option
        // phrased as a sub-question.
        if !current.is_empty() && line.contains('?') && answered {
            blocks.push(std::mem::take(&mut current));
            answered = false;
        }
        if answer_text(line).is_some() {
            answered = true;
        }
        current.push(line.to_string());
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Extract question, options and answer from one block.
fn extract(lines: &[String]) -> Option<ParsedBlock> {
    let answer_idx = lines.iter().position(|line| answer_text(line).is_some())?;
    let ans_text = answer_text(&lines[answer_idx]).unwrap_or_default();

    // The header is the block's first line. On the last "?" it splits
    // into the question and a potential first option fragment.
    let header = &lines[0];
    let (question, inline) = match header.rfind('?') {
        Some(mark) => (
            strip_bracket_tag(&header[..=mark]).to_string(),
            header[mark + 1..].trim().to_string(),
        ),
        None => (strip_bracket_tag(header).to_string(), String::new()),
    };

    let between = lines.get(1..answer_idx).unwrap_or(&[]);
    let mut working: Vec<&str> = Vec::with_capacity(between.len() + 1);
    if !inline.is_empty() {
        working.push(&inline);
    }
    working.extend(between.iter().map(String::as_str));

    let candidates = accumulate_options(&working);
    if candidates.is_empty() {
        return None;
    }

    // First four candidates; short blocks pad by cycling from the front.
    let mut picked: Vec<String> = candidates.iter().take(4).cloned().collect();
    let mut cycle = 0;
    while picked.len() < 4 {
        picked.push(candidates[cycle % candidates.len()].clone());
        cycle += 1;
    }

    let answer = resolve_answer(&ans_text, &picked);
    Some(ParsedBlock {
        question,
        options: picked,
        answer,
    })
}

/// Trailing text of a line matching `Antwoord :` (case-insensitive,
/// optional whitespace before the colon), or None.
fn answer_text(line: &str) -> Option<String> {
    let head = line.get(.."antwoord".len())?;
    if !head.eq_ignore_ascii_case("antwoord") {
        return None;
    }
    let rest = line["antwoord".len()..].trim_start();
    let rest = rest.strip_prefix(':')?;
    Some(rest.trim().to_string())
}

/// Drop a leading `[...]` tag (e.g. a chapter annotation) from a question.
fn strip_bracket_tag(s: &str) -> &str {
    let s = s.trim();
    if let Some(tagged) = s.strip_prefix('[') {
        if let Some(end) = tagged.find(']') {
            return tagged[end + 1..].trim_start();
        }
    }
    s
}

/// Fold the working lines into option candidates.
///
/// A line with an explicit option marker (`A)`, `B.`, `(C)`, optionally
/// bulleted) completes the previous candidate and starts a new one. A
/// marker-less line continues the current candidate when that candidate
/// does not yet end in terminal punctuation; otherwise it starts a new
/// candidate of its own.
fn accumulate_options(working: &[&str]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();
    let mut buffer = String::new();

    for &line in working {
        let (text, marked) = strip_option_marker(line);
        if text.is_empty() {
            continue;
        }
        if !buffer.is_empty() && (marked || ends_in_terminal(&buffer)) {
            candidates.push(std::mem::take(&mut buffer));
        }
        buffer.push_str(text);
    }
    if !buffer.is_empty() {
        candidates.push(buffer);
    }

    candidates
}

/// Strip a leading option marker: optional `-`/`•` bullet, then `A)`,
/// `B.` or `(C)` for letters A-D. Returns the remaining text and whether
/// a marker was present.
fn strip_option_marker(line: &str) -> (&str, bool) {
    let after_bullet = line.strip_prefix(['-', '•']).unwrap_or(line).trim_start();
    match strip_letter_marker(after_bullet) {
        Some(rest) => (rest.trim_start(), true),
        None => (line, false),
    }
}

fn strip_letter_marker(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    match chars.next()? {
        '(' => {
            let letter = chars.next()?;
            if ('A'..='D').contains(&letter) && chars.next()? == ')' {
                Some(chars.as_str())
            } else {
                None
            }
        }
        letter if ('A'..='D').contains(&letter) => {
            let punct = chars.next()?;
            if punct == ')' || punct == '.' {
                Some(chars.as_str())
            } else {
                None
            }
        }
        _ => None,
    }
}

fn ends_in_terminal(s: &str) -> bool {
    s.ends_with(['.', '!', '?', ';', ':'])
}

/// Map the `Antwoord:` text to one of the picked options: by letter, then
/// by case-insensitive exact/substring match, defaulting to the first
/// option.
fn resolve_answer(ans_text: &str, picked: &[String]) -> String {
    if let Some(index) = super::letter_index(ans_text) {
        return picked[index].clone();
    }
    let needle = ans_text.to_lowercase();
    picked
        .iter()
        .find(|option| {
            let hay = option.to_lowercase();
            hay == needle || hay.contains(&needle) || needle.contains(&hay)
        })
        .unwrap_or(&picked[0])
        .clone()
}
