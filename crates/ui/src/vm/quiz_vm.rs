use quiz_core::model::OptionState;
use services::{AdvanceTicket, LoadStatus, QuizLoopService, QuizSession};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
    pub class: &'static str,
    pub disabled: bool,
}

/// Everything the quiz board needs to draw one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizBoardVm {
    pub flag_url: String,
    pub flag_alt: String,
    pub options: Vec<OptionVm>,
    pub score_label: String,
    pub attempts_label: String,
    pub accuracy_label: Option<String>,
    pub feedback: Option<String>,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.is_locked()
    }

    /// Label of the option at `index`, for keyboard picks.
    #[must_use]
    pub fn option_label(&self, index: usize) -> Option<String> {
        self.session.options().get(index).cloned()
    }

    /// Snapshot of the current round, or `None` when there is no flag to show.
    #[must_use]
    pub fn board(&self) -> Option<QuizBoardVm> {
        let country = self.session.current_country()?;
        let locked = self.session.is_locked();
        let options = self
            .session
            .options()
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let state = self.session.option_state(label);
                OptionVm {
                    index,
                    label: label.clone(),
                    state,
                    class: option_class(state),
                    disabled: locked,
                }
            })
            .collect();
        let totals = self.session.totals();

        Some(QuizBoardVm {
            flag_url: country.flag_url().to_string(),
            flag_alt: country.flag_alt_text(),
            options,
            score_label: format!("Score: {}", totals.score()),
            attempts_label: format!("Attempts: {}", totals.attempts()),
            accuracy_label: totals
                .accuracy_percent()
                .map(|percent| format!("Accuracy: {percent}%")),
            feedback: self.session.feedback().map(ToString::to_string),
        })
    }

    pub fn select(&mut self, option: &str) -> Option<AdvanceTicket> {
        self.session.select_option(option)
    }

    pub fn skip(&mut self) -> bool {
        self.session.skip()
    }

    pub fn complete_advance(&mut self, ticket: AdvanceTicket) -> bool {
        self.session.complete_advance(ticket)
    }
}

fn option_class(state: OptionState) -> &'static str {
    match state {
        OptionState::Neutral => "option-btn",
        OptionState::Correct => "option-btn option-correct",
        OptionState::Incorrect => "option-btn option-wrong",
    }
}

/// # Errors
///
/// Returns `ViewError::LoadFailed` when the countries could not be fetched.
pub async fn load_quiz(quiz_loop: &QuizLoopService) -> Result<QuizVm, ViewError> {
    let session = quiz_loop.start_session().await;
    match session.status() {
        LoadStatus::Error => Err(ViewError::LoadFailed),
        LoadStatus::Loading | LoadStatus::Ready => Ok(QuizVm::new(session)),
    }
}
