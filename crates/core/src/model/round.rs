/// Visual state of a single answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Neutral,
    Correct,
    Incorrect,
}

/// State of the round currently on screen.
///
/// `options` is either empty (no playable round) or holds the answer choices
/// for the country at `current_index`. `locked` is set by a selection and only
/// cleared by starting a new round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundState {
    current_index: Option<usize>,
    options: Vec<String>,
    selected: Option<String>,
    locked: bool,
}

impl RoundState {
    /// Start a fresh, unlocked round.
    #[must_use]
    pub fn new(current_index: Option<usize>, options: Vec<String>) -> Self {
        Self {
            current_index,
            options,
            selected: None,
            locked: false,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }

    /// Record the player's pick and lock the round.
    ///
    /// Returns `false` without changing anything when the round is already
    /// locked or `option` is not one of the choices.
    pub fn lock_selection(&mut self, option: &str) -> bool {
        if self.locked || !self.has_option(option) {
            return false;
        }
        self.selected = Some(option.to_string());
        self.locked = true;
        true
    }

    /// How `option` should be drawn, given the correct answer.
    ///
    /// Only the selected option is highlighted, and only once locked.
    #[must_use]
    pub fn option_state(&self, option: &str, correct: &str) -> OptionState {
        match self.selected.as_deref() {
            Some(selected) if self.locked && selected == option => {
                if option == correct {
                    OptionState::Correct
                } else {
                    OptionState::Incorrect
                }
            }
            _ => OptionState::Neutral,
        }
    }
}
