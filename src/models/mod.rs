mod question;

pub use question::{AnswerOption, AnsweredRecord, Question};
