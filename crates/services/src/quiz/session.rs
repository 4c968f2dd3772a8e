use std::fmt;
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;

use quiz_core::model::{Country, Dataset, OptionState, RoundState, SessionTotals};
use quiz_core::options::generate_options;
use quiz_core::timing::advance_delay;

use super::feedback::Feedback;
use crate::error::LoadError;

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Error,
}

//
// ─── ADVANCE TICKET ────────────────────────────────────────────────────────────
//

/// A pending move to the next flag, handed out by a selection.
///
/// The caller waits `delay()` and then returns the ticket through
/// `QuizSession::complete_advance`. Tickets are bound to the round that issued
/// them; once that round is gone (e.g. the player skipped) the ticket is stale
/// and completing it does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    round: u64,
    correct: bool,
}

impl AdvanceTicket {
    #[must_use]
    pub fn delay(&self) -> Duration {
        advance_delay(self.correct)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// The quiz state machine for one play session.
///
/// Per round: awaiting a selection, then locked until the advance ticket is
/// completed. Skipping moves straight to the next round from either state.
/// There is no end state; rounds cycle through the dataset forever.
pub struct QuizSession {
    status: LoadStatus,
    dataset: Dataset,
    round: RoundState,
    totals: SessionTotals,
    feedback: Option<Feedback>,
    guess: String,
    round_id: u64,
    rng: StdRng,
}

impl QuizSession {
    /// A session waiting for its dataset.
    #[must_use]
    pub fn new(rng: StdRng) -> Self {
        Self {
            status: LoadStatus::Loading,
            dataset: Dataset::default(),
            round: RoundState::default(),
            totals: SessionTotals::default(),
            feedback: None,
            guess: String::new(),
            round_id: 0,
            rng,
        }
    }

    /// Build a ready session over an already ordered dataset.
    #[must_use]
    pub fn with_dataset(dataset: Dataset, rng: StdRng) -> Self {
        let mut session = Self::new(rng);
        session.finish_loading(Ok(dataset));
        session
    }

    /// Apply the outcome of the one-shot load.
    ///
    /// Ignored unless the session is still loading.
    pub fn finish_loading(&mut self, result: Result<Dataset, LoadError>) {
        if self.status != LoadStatus::Loading {
            return;
        }
        match result {
            Ok(dataset) => {
                let first = (!dataset.is_empty()).then_some(0);
                self.dataset = dataset;
                self.status = LoadStatus::Ready;
                self.start_round(first);
            }
            Err(_) => {
                self.status = LoadStatus::Error;
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        self.status
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.round.current_index()
    }

    #[must_use]
    pub fn current_country(&self) -> Option<&Country> {
        self.round
            .current_index()
            .and_then(|index| self.dataset.get(index))
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        self.round.options()
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.round.selected()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.round.is_locked()
    }

    #[must_use]
    pub fn totals(&self) -> SessionTotals {
        self.totals
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.totals.score()
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.totals.attempts()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// Free-text guess typed by the player. Never used for scoring.
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    pub fn set_guess(&mut self, guess: impl Into<String>) {
        self.guess = guess.into();
    }

    #[must_use]
    pub fn option_state(&self, option: &str) -> OptionState {
        match self.current_country() {
            Some(country) => self.round.option_state(option, country.name()),
            None => OptionState::Neutral,
        }
    }

    /// Answer the current round with `option`.
    ///
    /// Does nothing and returns `None` when there is no current country, the
    /// round is already locked, or `option` is not one of the choices.
    /// Otherwise scores the pick and returns the ticket for the delayed advance.
    pub fn select_option(&mut self, option: &str) -> Option<AdvanceTicket> {
        let correct_name = self.current_country()?.name().to_string();
        if !self.round.lock_selection(option) {
            return None;
        }

        let correct = option == correct_name;
        self.totals.record_answer(correct);
        debug!(
            "round {} answered {option:?} (correct: {correct}), score {}/{}",
            self.round_id,
            self.totals.score(),
            self.totals.attempts()
        );
        self.feedback = Some(Feedback::new(correct_name, correct));

        Some(AdvanceTicket {
            round: self.round_id,
            correct,
        })
    }

    /// Finish the delayed advance for `ticket`.
    ///
    /// Returns `false` when the ticket is stale and nothing changed.
    pub fn complete_advance(&mut self, ticket: AdvanceTicket) -> bool {
        if ticket.round != self.round_id || !self.round.is_locked() {
            debug!("dropping stale advance for round {}", ticket.round);
            return false;
        }
        self.feedback = None;
        self.guess.clear();
        self.advance();
        true
    }

    /// Skip to the next flag, counting an attempt without a score.
    ///
    /// Works whether or not the round is locked; any outstanding advance
    /// ticket becomes stale. Returns `false` when there is nothing to skip.
    pub fn skip(&mut self) -> bool {
        if self.round.current_index().is_none() {
            return false;
        }
        self.feedback = None;
        self.guess.clear();
        self.totals.record_skip();
        self.advance();
        true
    }

    fn advance(&mut self) {
        let next = self
            .round
            .current_index()
            .and_then(|index| self.dataset.next_index(index));
        self.start_round(next);
    }

    // The only place a round is (re)built, so the only place the lock clears.
    fn start_round(&mut self, index: Option<usize>) {
        self.round_id = self.round_id.wrapping_add(1);
        let options = match index.and_then(|i| self.dataset.get(i)) {
            Some(country) => generate_options(&self.dataset, country, &mut self.rng),
            None => Vec::new(),
        };
        self.round = RoundState::new(index, options);
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("status", &self.status)
            .field("dataset_len", &self.dataset.len())
            .field("round", &self.round)
            .field("totals", &self.totals)
            .field("feedback", &self.feedback)
            .field("round_id", &self.round_id)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
