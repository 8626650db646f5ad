use std::time::Duration;

use tokio::time::Instant;

use crate::session::{AdvanceToken, Effect, Session, Verdict};

/// Delay between a manual answer and the advance to the next question,
/// long enough for the feedback popup to be seen.
pub const REVEAL_DELAY: Duration = Duration::from_secs(1);

/// Application state: the quiz session plus everything presentation-only.
///
/// `App` turns session [`Effect`]s into scheduled work for the event loop:
/// a feedback toast to display and the deadline at which the pending
/// advance is due.
#[derive(Debug)]
pub struct App {
    pub session: Session,
    selected_option: usize,
    toast: Option<Verdict>,
    pending_advance: Option<(AdvanceToken, Instant)>,
    result_scroll: usize,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            selected_option: 0,
            toast: None,
            pending_advance: None,
            result_scroll: 0,
        }
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Transient correct/wrong notification, if one is showing.
    pub fn toast(&self) -> Option<Verdict> {
        self.toast
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// When the scheduled advance to the next question is due.
    pub fn advance_deadline(&self) -> Option<Instant> {
        self.pending_advance.map(|(_, at)| at)
    }

    pub fn select_next_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(count) = self.option_count() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Submit the highlighted option for the current question.
    pub fn submit_selected(&mut self) {
        let effect = self.session.submit_answer(self.selected_option);
        self.apply(effect);
    }

    /// Feed one countdown tick into the session.
    pub fn tick(&mut self, generation: u64) {
        let effect = self.session.timer_tick(generation);
        self.apply(effect);
    }

    /// Carry out the scheduled advance once its deadline has passed.
    pub fn complete_advance(&mut self) {
        if let Some((token, _)) = self.pending_advance.take() {
            self.session.advance(token);
            self.toast = None;
            self.selected_option = 0;
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.toast = None;
        self.pending_advance = None;
        self.selected_option = 0;
        self.result_scroll = 0;
    }

    pub fn scroll_results_down(&mut self) {
        let max_scroll = self.session.answer_log().len().saturating_sub(1);
        self.result_scroll = (self.result_scroll + 1).min(max_scroll);
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn option_count(&self) -> Option<usize> {
        self.session.current_question().map(|q| q.options.len())
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::Feedback { verdict, advance } => {
                self.toast = Some(verdict);
                self.pending_advance = Some((advance, Instant::now() + REVEAL_DELAY));
            }
            Effect::Advance(token) => {
                self.pending_advance = Some((token, Instant::now()));
            }
        }
    }
}
