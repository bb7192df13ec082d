use chrono::{DateTime, Utc};
use std::fmt;

use spelling_core::model::{AnswerOutcome, SessionSummary, Word};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── ANSWER RECORD ─────────────────────────────────────────────────────────────
//

/// Captures the outcome of answering a word within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsweredWord {
    pub word: Word,
    pub outcome: AnswerOutcome,
    /// Zero-based position of the word in the session.
    pub index: usize,
}

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAnswer { index: usize },
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory practice session over a fixed list of words.
///
/// Steps through the words in order; every answer advances by one. The session is
/// complete after the last word is answered and rejects further answers.
pub struct PracticeSession {
    words: Vec<Word>,
    current: usize,
    correct: u32,
    wrong: u32,
    missed: Vec<Word>,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
    history_recorded: bool,
    history_saved: bool,
}

impl PracticeSession {
    /// Create a session over `words`.
    ///
    /// `started_at` should come from the services layer clock to keep time deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no words are provided.
    pub fn new(words: Vec<Word>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        if words.is_empty() {
            return Err(SessionError::Empty);
        }

        Ok(Self {
            words,
            current: 0,
            correct: 0,
            wrong: 0,
            missed: Vec::new(),
            started_at,
            completed_at: None,
            history_recorded: false,
            history_saved: false,
        })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn wrong(&self) -> u32 {
        self.wrong
    }

    /// Words answered wrong so far, in answer order.
    #[must_use]
    pub fn missed(&self) -> &[Word] {
        &self.missed
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_words(),
            answered: self.current,
            remaining: self.words.len().saturating_sub(self.current),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else {
            SessionState::AwaitingAnswer {
                index: self.current,
            }
        }
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        if self.is_complete() {
            return None;
        }
        self.words.get(self.current)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Apply the user's verdict to the current word and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn record_answer(
        &mut self,
        outcome: AnswerOutcome,
        answered_at: DateTime<Utc>,
    ) -> Result<AnsweredWord, SessionError> {
        let Some(word) = self.current_word().cloned() else {
            return Err(SessionError::Completed);
        };

        match outcome {
            AnswerOutcome::Correct => self.correct += 1,
            AnswerOutcome::Wrong => {
                self.wrong += 1;
                self.missed.push(word.clone());
            }
        }

        let index = self.current;
        self.current += 1;
        if self.current >= self.words.len() {
            self.completed_at = Some(answered_at);
        }

        Ok(AnsweredWord {
            word,
            outcome,
            index,
        })
    }

    /// Summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` while words remain.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        let completed_at = self.completed_at.ok_or(SessionError::NotComplete)?;
        Ok(SessionSummary::new(
            self.started_at,
            completed_at,
            self.correct,
            self.wrong,
            self.missed.clone(),
        )?)
    }

    #[must_use]
    pub fn history_recorded(&self) -> bool {
        self.history_recorded
    }

    #[must_use]
    pub fn history_saved(&self) -> bool {
        self.history_saved
    }

    pub(crate) fn mark_history_recorded(&mut self) {
        self.history_recorded = true;
    }

    pub(crate) fn mark_history_saved(&mut self) {
        self.history_saved = true;
    }
}

impl fmt::Debug for PracticeSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PracticeSession")
            .field("words_len", &self.words.len())
            .field("current", &self.current)
            .field("correct", &self.correct)
            .field("wrong", &self.wrong)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .field("history_saved", &self.history_saved)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use spelling_core::time::fixed_now;

    fn words(raw: &[&str]) -> Vec<Word> {
        raw.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn empty_session_returns_error() {
        let err = PracticeSession::new(Vec::new(), fixed_now()).unwrap_err();
        assert!(matches!(err, SessionError::Empty));
    }

    #[test]
    fn session_advances_and_completes() {
        let mut session = PracticeSession::new(words(&["said", "friend"]), fixed_now()).unwrap();
        assert_eq!(session.state(), SessionState::AwaitingAnswer { index: 0 });

        let first = session
            .record_answer(AnswerOutcome::Correct, fixed_now())
            .unwrap();
        assert_eq!(first.word.as_str(), "said");
        assert_eq!(first.index, 0);
        assert_eq!(session.state(), SessionState::AwaitingAnswer { index: 1 });

        let second = session
            .record_answer(AnswerOutcome::Wrong, fixed_now())
            .unwrap();
        assert_eq!(second.word.as_str(), "friend");
        assert_eq!(session.state(), SessionState::Complete);
        assert!(session.current_word().is_none());
        assert_eq!(session.completed_at(), Some(fixed_now()));
    }

    #[test]
    fn completed_session_rejects_answers() {
        let mut session = PracticeSession::new(words(&["said"]), fixed_now()).unwrap();
        session
            .record_answer(AnswerOutcome::Correct, fixed_now())
            .unwrap();
        let err = session
            .record_answer(AnswerOutcome::Correct, fixed_now())
            .unwrap_err();
        assert!(matches!(err, SessionError::Completed));
        assert_eq!(session.correct(), 1);
    }

    #[test]
    fn summary_lists_missed_words_in_order() {
        let mut session =
            PracticeSession::new(words(&["a", "b", "c", "d"]), fixed_now()).unwrap();
        assert!(matches!(session.summary(), Err(SessionError::NotComplete)));

        for outcome in [
            AnswerOutcome::Wrong,
            AnswerOutcome::Correct,
            AnswerOutcome::Wrong,
            AnswerOutcome::Correct,
        ] {
            session.record_answer(outcome, fixed_now()).unwrap();
        }

        let summary = session.summary().unwrap();
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.correct(), 2);
        assert_eq!(summary.accuracy_label(), "50.0%");
        assert_eq!(summary.missed(), words(&["a", "c"]).as_slice());
    }

    #[test]
    fn progress_tracks_answers() {
        let mut session = PracticeSession::new(words(&["a", "b", "c"]), fixed_now()).unwrap();
        session
            .record_answer(AnswerOutcome::Correct, fixed_now())
            .unwrap();
        let progress = session.progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.remaining, 2);
        assert!(!progress.is_complete);
    }
}
