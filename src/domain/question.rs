use serde::{Deserialize, Serialize};

/// How a question is answered: free text (`open`) or one of a fixed set
/// of choices (`mc`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Open,
    Mc,
}

impl Default for QuestionKind {
    fn default() -> Self {
        Self::Open
    }
}

impl QuestionKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(Self::Open),
            "mc" => Some(Self::Mc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Mc => "mc",
        }
    }
}

/// A question ready to be stored, before a quiz id has been assigned.
///
/// `choices` is `Some` only for multiple-choice questions; `sort_order`
/// is the zero-based position within the ingestion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub kind: QuestionKind,
    pub prompt: String,
    pub choices: Option<Vec<String>>,
    pub answer: String,
    pub sort_order: i64,
}

/// A stored question, as read back from the record store.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub kind: QuestionKind,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    pub answer: String,
    /// Always None in the ingestion pipeline; filled in by other flows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub sort_order: i64,
}
