//! # quiz-master
//!
//! A terminal quiz runner with a 20-second countdown per question.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_master::{Quiz, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
mod countdown;
mod data;
mod models;
mod session;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;

pub use app::{App, REVEAL_DELAY};
pub use countdown::Countdown;
pub use data::{load_questions_from_json, parse_questions, shuffled_options, LoadError};
pub use models::{AnswerOption, AnsweredRecord, Question};
pub use session::{
    AdvanceToken, Effect, Session, SessionError, Verdict, NO_ANSWER, QUESTION_SECONDS,
};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// The loaded questions cannot form a valid session.
    Session(SessionError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Session(e) => write!(f, "Invalid question list: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Session(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<SessionError> for QuizError {
    fn from(err: SessionError) -> Self {
        QuizError::Session(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
#[derive(Debug)]
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a vector of prepared questions.
    ///
    /// Fails if the list cannot form a valid session (empty, or a question
    /// without exactly one correct option among at least two).
    pub fn new(questions: Vec<Question>) -> Result<Self, QuizError> {
        let session = Session::new(questions)?;
        Ok(Self {
            app: App::new(session),
        })
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quiz_master::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Self::new(questions)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut terminal = ratatui::try_init()?;
        let result = run_event_loop(&mut terminal, &mut self.app).await;
        ratatui::restore();
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(), QuizError> {
    let mut events = EventStream::new();
    let mut countdown = Countdown::start(app.session.generation());

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        // A driver is bound to one question window; replace it whenever the
        // session moves on, so leftover ticks stay recognizably stale.
        if !app.session.is_finished() && countdown.generation() != app.session.generation() {
            countdown = Countdown::start(app.session.generation());
        }

        tokio::select! {
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_input(app, key.code) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(QuizError::Io(e)),
                    None => break,
                }
            }
            generation = countdown.tick(), if !app.session.is_finished() => {
                app.tick(generation);
            }
            _ = wait_for_advance(app.advance_deadline()), if app.advance_deadline().is_some() => {
                app.complete_advance();
            }
        }
    }

    Ok(())
}

async fn wait_for_advance(deadline: Option<tokio::time::Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if app.session.is_finished() {
        handle_result_input(app, key)
    } else {
        handle_quiz_input(app, key)
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.submit_selected();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(num_questions: usize) -> Quiz {
        let questions = (0..num_questions)
            .map(|n| Question {
                text: format!("Question {n}"),
                options: vec![
                    AnswerOption {
                        text: format!("right {n}"),
                        is_correct: true,
                    },
                    AnswerOption {
                        text: format!("wrong {n}"),
                        is_correct: false,
                    },
                ],
            })
            .collect();
        Quiz::new(questions).unwrap()
    }

    #[test]
    fn test_quit_key_exits() {
        let mut q = quiz(1);
        assert!(handle_input(q.app_mut(), KeyCode::Char('q')));
    }

    #[test]
    fn test_enter_submits_current_selection() {
        let mut q = quiz(1);

        assert!(!handle_input(q.app_mut(), KeyCode::Enter));
        assert!(q.app().session.is_locked());
        assert_eq!(q.app().session.answer_log().len(), 1);
    }

    #[test]
    fn test_restart_key_resets_finished_session() {
        let mut q = quiz(1);

        handle_input(q.app_mut(), KeyCode::Enter);
        q.app_mut().complete_advance();
        assert!(q.app().session.is_finished());

        assert!(!handle_input(q.app_mut(), KeyCode::Char('r')));
        assert!(!q.app().session.is_finished());
        assert_eq!(q.app().session.score(), 0);
        assert!(q.app().session.answer_log().is_empty());
    }

    #[test]
    fn test_empty_question_list_is_a_load_failure() {
        let err = Quiz::new(Vec::new()).unwrap_err();
        assert!(matches!(err, QuizError::Session(SessionError::NoQuestions)));
    }
}
