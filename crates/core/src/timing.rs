use std::time::Duration;

/// Pause after a correct answer before the next flag appears.
pub const CORRECT_ADVANCE_DELAY: Duration = Duration::from_millis(900);

/// Pause after a wrong answer; longer so the correct name can be read.
pub const INCORRECT_ADVANCE_DELAY: Duration = Duration::from_millis(1200);

#[must_use]
pub fn advance_delay(correct: bool) -> Duration {
    if correct {
        CORRECT_ADVANCE_DELAY
    } else {
        INCORRECT_ADVANCE_DELAY
    }
}
