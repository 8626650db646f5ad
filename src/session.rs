//! Quiz session state machine.
//!
//! Owns question progression, the per-question countdown value, answer
//! recording, and scoring. Every transition executes on one logical thread;
//! the `locked` flag is set before any other work in an accepted
//! submission, so a user answer racing the countdown expiry resolves
//! exactly once and the loser degrades to a no-op.

use std::fmt;

use crate::models::{AnsweredRecord, Question};

/// Seconds on the clock at the start of each question.
pub const QUESTION_SECONDS: u32 = 20;

/// Answer text recorded when the countdown expires with no submission.
pub const NO_ANSWER: &str = "No Answer";

/// Outcome of a manually submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Wrong,
}

/// Handle for an advance scheduled against a specific question window.
///
/// Advances and countdown ticks are versioned by the session's generation
/// counter: a token minted before a restart (or before an earlier advance)
/// no longer matches and is discarded silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceToken {
    generation: u64,
}

/// What the driver must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do: the input was rejected or the tick just counted down.
    None,
    /// Show transient feedback, then advance after the reveal delay.
    Feedback {
        verdict: Verdict,
        advance: AdvanceToken,
    },
    /// Advance immediately, with no feedback (countdown expiry).
    Advance(AdvanceToken),
}

/// Question list rejected at session construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The question list is empty.
    NoQuestions,
    /// A question has fewer than two answer choices.
    TooFewOptions { index: usize },
    /// A question has no choice marked correct.
    NoCorrectOption { index: usize },
    /// A question has more than one choice marked correct.
    MultipleCorrectOptions { index: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoQuestions => write!(f, "question list is empty"),
            SessionError::TooFewOptions { index } => {
                write!(f, "question {} has fewer than two options", index + 1)
            }
            SessionError::NoCorrectOption { index } => {
                write!(f, "question {} has no correct option", index + 1)
            }
            SessionError::MultipleCorrectOptions { index } => {
                write!(f, "question {} has more than one correct option", index + 1)
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A single quiz run over a fixed, pre-shuffled question list.
#[derive(Debug)]
pub struct Session {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    seconds_remaining: u32,
    locked: bool,
    finished: bool,
    answer_log: Vec<AnsweredRecord>,
    generation: u64,
}

impl Session {
    /// Validate the question list and enter the initial state.
    ///
    /// Fails fast on malformed data so scoring is never undefined.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        for (index, question) in questions.iter().enumerate() {
            if question.options.len() < 2 {
                return Err(SessionError::TooFewOptions { index });
            }
            match question.options.iter().filter(|o| o.is_correct).count() {
                1 => {}
                0 => return Err(SessionError::NoCorrectOption { index }),
                _ => return Err(SessionError::MultipleCorrectOptions { index }),
            }
        }

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
            seconds_remaining: QUESTION_SECONDS,
            locked: false,
            finished: false,
            answer_log: Vec::new(),
            generation: 0,
        })
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn question_number(&self) -> usize {
        self.current_index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answer_log(&self) -> &[AnsweredRecord] {
        &self.answer_log
    }

    /// Identifier of the current question window. Countdown drivers stamp
    /// their ticks with this value when they start.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Accept the user's choice for the current question.
    ///
    /// No-op while locked or finished (a double click, or a click that lost
    /// the race against the countdown expiry), and for an out-of-range
    /// index. An accepted answer locks the session, scores and records it,
    /// and asks the driver to show feedback and advance after the reveal
    /// delay.
    pub fn submit_answer(&mut self, option_index: usize) -> Effect {
        if self.finished || self.locked {
            return Effect::None;
        }
        let Some(option) = self
            .current_question()
            .and_then(|q| q.options.get(option_index))
        else {
            return Effect::None;
        };
        let chosen = option.text.clone();
        let was_correct = option.is_correct;

        // Held from here until the scheduled advance completes; any other
        // submission or tick arriving in that window is rejected above.
        self.locked = true;
        if was_correct {
            self.score += 1;
        }
        self.record(chosen, was_correct);

        let verdict = if was_correct {
            Verdict::Correct
        } else {
            Verdict::Wrong
        };
        Effect::Feedback {
            verdict,
            advance: AdvanceToken {
                generation: self.generation,
            },
        }
    }

    /// One second of countdown for the question window `generation`.
    ///
    /// Stale generations, locked sessions, and finished sessions are
    /// ignored. When the clock would drop below one second the question
    /// times out: a "No Answer" record is written (no feedback) and the
    /// driver is asked to advance immediately.
    pub fn timer_tick(&mut self, generation: u64) -> Effect {
        if self.finished || self.locked || generation != self.generation {
            return Effect::None;
        }
        if self.seconds_remaining > 1 {
            self.seconds_remaining -= 1;
            return Effect::None;
        }

        self.locked = true;
        self.record(NO_ANSWER.to_string(), false);
        self.seconds_remaining = 0;
        Effect::Advance(AdvanceToken {
            generation: self.generation,
        })
    }

    /// Complete a scheduled advance: move to the next question, or finish
    /// after the last one. Stale tokens are discarded.
    pub fn advance(&mut self, token: AdvanceToken) {
        if self.finished || token.generation != self.generation {
            return;
        }

        self.generation += 1;
        self.current_index += 1;
        self.locked = false;
        if self.current_index >= self.questions.len() {
            self.finished = true;
        } else {
            self.seconds_remaining = QUESTION_SECONDS;
        }
    }

    /// Reset to the initial state. Valid from any state; bumping the
    /// generation cancels any pending tick or advance from the old run.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.current_index = 0;
        self.score = 0;
        self.seconds_remaining = QUESTION_SECONDS;
        self.locked = false;
        self.finished = false;
        self.answer_log.clear();
    }

    fn record(&mut self, chosen_answer_text: String, was_correct: bool) {
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };
        let correct_answer_text = question
            .correct_option()
            .map(|o| o.text.clone())
            .unwrap_or_default();
        self.answer_log.push(AnsweredRecord {
            question_text: question.text.clone(),
            chosen_answer_text,
            correct_answer_text,
            was_correct,
        });
    }
}
