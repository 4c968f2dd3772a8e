/// Running score for the whole session. Both counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTotals {
    score: u32,
    attempts: u32,
}

impl SessionTotals {
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Count an answered round.
    pub fn record_answer(&mut self, correct: bool) {
        self.attempts = self.attempts.saturating_add(1);
        if correct {
            self.score = self.score.saturating_add(1);
        }
    }

    /// Count a skipped round: an attempt that can never score.
    pub fn record_skip(&mut self) {
        self.attempts = self.attempts.saturating_add(1);
    }

    /// Share of attempts that scored, as a whole percentage.
    ///
    /// Returns `None` before the first attempt.
    #[must_use]
    pub fn accuracy_percent(&self) -> Option<u32> {
        if self.attempts == 0 {
            return None;
        }
        let percent = u64::from(self.score) * 100 / u64::from(self.attempts);
        Some(u32::try_from(percent).unwrap_or(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_and_skips_count_as_attempts() {
        let mut totals = SessionTotals::default();
        totals.record_answer(true);
        totals.record_answer(false);
        totals.record_skip();

        assert_eq!(totals.score(), 1);
        assert_eq!(totals.attempts(), 3);
        assert_eq!(totals.accuracy_percent(), Some(33));
    }

    #[test]
    fn accuracy_is_unknown_before_first_attempt() {
        assert_eq!(SessionTotals::default().accuracy_percent(), None);
    }
}
