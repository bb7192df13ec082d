use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::word::Word;

/// How the user judged their spelling of the presented word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Wrong,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("missed words ({missed}) do not match wrong answers ({wrong})")]
    MissedMismatch { missed: usize, wrong: u32 },
}

/// Aggregate result of a completed practice session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
    correct: u32,
    wrong: u32,
    missed: Vec<Word>,
}

impl SessionSummary {
    /// Build a summary from session counters.
    ///
    /// `missed` lists the words answered wrong, in the order they were answered.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before
    /// `started_at`, or `SessionSummaryError::MissedMismatch` if `missed` does not
    /// hold exactly `wrong` words.
    pub fn new(
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
        correct: u32,
        wrong: u32,
        missed: Vec<Word>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if usize::try_from(wrong).map_or(true, |wrong| wrong != missed.len()) {
            return Err(SessionSummaryError::MissedMismatch {
                missed: missed.len(),
                wrong,
            });
        }

        Ok(Self {
            started_at,
            completed_at,
            correct,
            wrong,
            missed,
        })
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.correct.saturating_add(self.wrong)
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    #[must_use]
    pub fn missed(&self) -> &[Word] {
        &self.missed
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.wrong == 0
    }

    /// Share of correct answers in percent; 0 for an empty session.
    #[must_use]
    pub fn accuracy_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct) * 100.0 / f64::from(total)
    }

    /// Accuracy rendered with one decimal, e.g. `66.7%`.
    #[must_use]
    pub fn accuracy_label(&self) -> String {
        format!("{:.1}%", self.accuracy_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn accuracy_is_rounded_to_one_decimal() {
        let missed = vec![Word::new("said").unwrap()];
        let summary = SessionSummary::new(fixed_now(), fixed_now(), 2, 1, missed).unwrap();
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.accuracy_label(), "66.7%");
        assert!(!summary.is_perfect());
    }

    #[test]
    fn perfect_session() {
        let summary = SessionSummary::new(fixed_now(), fixed_now(), 30, 0, Vec::new()).unwrap();
        assert_eq!(summary.accuracy_label(), "100.0%");
        assert!(summary.is_perfect());
    }

    #[test]
    fn rejects_inconsistent_counts() {
        let err = SessionSummary::new(fixed_now(), fixed_now(), 1, 2, Vec::new()).unwrap_err();
        assert_eq!(err, SessionSummaryError::MissedMismatch { missed: 0, wrong: 2 });
    }

    #[test]
    fn rejects_reversed_time_range() {
        let earlier = fixed_now() - chrono::Duration::minutes(1);
        let err = SessionSummary::new(fixed_now(), earlier, 0, 0, Vec::new()).unwrap_err();
        assert_eq!(err, SessionSummaryError::InvalidTimeRange);
    }
}
