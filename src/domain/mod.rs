pub mod question;
pub mod quiz;

pub use question::{NewQuestion, Question, QuestionKind};
pub use quiz::{NewQuiz, Quiz};
