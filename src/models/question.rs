/// A single answer choice. Immutable once built by the shuffler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub is_correct: bool,
}

/// A prepared question: decoded text plus its shuffled answer choices.
///
/// Exactly one option carries `is_correct`; the ordering is fixed at load
/// time and never re-shuffled during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|opt| opt.is_correct)
    }
}

/// One entry of the answer log, appended when a question is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredRecord {
    pub question_text: String,
    pub chosen_answer_text: String,
    pub correct_answer_text: String,
    pub was_correct: bool,
}
