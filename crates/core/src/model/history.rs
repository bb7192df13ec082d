use std::collections::{HashSet, VecDeque};

use crate::model::word::Word;

/// Word lists of the most recently completed sessions, oldest first.
///
/// Holds at most `depth` sessions. A depth of zero disables repeat avoidance:
/// nothing is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    depth: usize,
    sessions: VecDeque<Vec<Word>>,
}

impl SessionHistory {
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            sessions: VecDeque::with_capacity(depth),
        }
    }

    /// Rehydrate from persisted sessions (oldest first), keeping only the newest `depth`.
    #[must_use]
    pub fn from_sessions(depth: usize, sessions: impl IntoIterator<Item = Vec<Word>>) -> Self {
        let mut history = Self::new(depth);
        for words in sessions {
            history.record(words);
        }
        history
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.depth > 0
    }

    /// Append a completed session, evicting the oldest beyond the cap.
    ///
    /// Empty sessions are ignored.
    pub fn record(&mut self, words: Vec<Word>) {
        if words.is_empty() || !self.is_enabled() {
            return;
        }
        self.sessions.push_back(words);
        while self.sessions.len() > self.depth {
            self.sessions.pop_front();
        }
    }

    pub fn sessions(&self) -> impl Iterator<Item = &[Word]> {
        self.sessions.iter().map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Union of every word in the retained sessions.
    #[must_use]
    pub fn recent_words(&self) -> HashSet<&Word> {
        self.sessions.iter().flatten().collect()
    }
}
