use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::string::FromUtf8Error;

use rand::Rng;
use serde::Deserialize;

use crate::data::shuffle::shuffled_options;
use crate::models::Question;

/// On-disk question record. Text fields may be percent-encoded and are
/// decoded before the question is handed to the session.
#[derive(Debug, Deserialize)]
struct RawQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
}

/// Error loading or normalizing a question file.
#[derive(Debug)]
pub enum LoadError {
    /// Could not read the file.
    Io(io::Error),
    /// The file is not valid question JSON.
    Parse(serde_json::Error),
    /// A text field is not valid percent-encoded UTF-8.
    Decode(FromUtf8Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "failed to read question file: {}", e),
            LoadError::Parse(e) => write!(f, "failed to parse question file: {}", e),
            LoadError::Decode(e) => write!(f, "failed to decode question text: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::Decode(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err)
    }
}

impl From<FromUtf8Error> for LoadError {
    fn from(err: FromUtf8Error) -> Self {
        LoadError::Decode(err)
    }
}

/// Load and normalize questions from a JSON file.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let json = fs::read_to_string(path)?;
    parse_questions(&json, &mut rand::thread_rng())
}

/// Parse raw question JSON into prepared questions: decode every text
/// field, then fix each question's option order with one shuffle.
pub fn parse_questions<R: Rng>(json: &str, rng: &mut R) -> Result<Vec<Question>, LoadError> {
    let raw: Vec<RawQuestion> = serde_json::from_str(json)?;

    raw.into_iter()
        .map(|q| {
            let text = decode(&q.question)?;
            let correct = decode(&q.correct_answer)?;
            let incorrect = q
                .incorrect_answers
                .iter()
                .map(|a| decode(a))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Question {
                text,
                options: shuffled_options(correct, incorrect, rng),
            })
        })
        .collect()
}

fn decode(text: &str) -> Result<String, LoadError> {
    Ok(urlencoding::decode(text)?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_decodes_percent_encoding() {
        let json = r#"[
            {
                "question": "What%20is%20Rust%3F",
                "correct_answer": "A%20language",
                "incorrect_answers": ["A%20film", "A%20fungus"]
            }
        ]"#;

        let mut rng = StdRng::seed_from_u64(1);
        let questions = parse_questions(json, &mut rng).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].text, "What is Rust?");
        assert_eq!(questions[0].options.len(), 3);
        assert_eq!(
            questions[0].correct_option().unwrap().text,
            "A language"
        );
    }

    #[test]
    fn test_parse_plain_text_passes_through() {
        let json = r#"[
            {
                "question": "2 + 2?",
                "correct_answer": "4",
                "incorrect_answers": ["3", "5", "22"]
            }
        ]"#;

        let mut rng = StdRng::seed_from_u64(2);
        let questions = parse_questions(json, &mut rng).unwrap();

        assert_eq!(questions[0].text, "2 + 2?");
        let mut texts: Vec<_> = questions[0].options.iter().map(|o| o.text.clone()).collect();
        texts.sort();
        assert_eq!(texts, vec!["22", "3", "4", "5"]);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = parse_questions("not json", &mut rng).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_rejects_invalid_percent_sequence() {
        // %FF is not valid UTF-8 once decoded.
        let json = r#"[
            {
                "question": "bad%FF",
                "correct_answer": "a",
                "incorrect_answers": ["b"]
            }
        ]"#;

        let mut rng = StdRng::seed_from_u64(4);
        let err = parse_questions(json, &mut rng).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }
}
