use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};

use crate::model::catalog::WordCatalog;
use crate::model::word::Word;

/// Number of misspellings kept per word; older ones are dropped first.
pub const MAX_NOTES_PER_WORD: usize = 5;

//
// ─── MISTAKE NOTE ──────────────────────────────────────────────────────────────
//

/// A misspelling the user typed for a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MistakeNote {
    pub word: Word,
    pub typed: String,
    pub recorded_at: DateTime<Utc>,
}

impl MistakeNote {
    #[must_use]
    pub fn new(word: Word, typed: impl Into<String>, recorded_at: DateTime<Utc>) -> Self {
        Self {
            word,
            typed: typed.into(),
            recorded_at,
        }
    }
}

//
// ─── LEDGER ────────────────────────────────────────────────────────────────────
//

/// Mistake bookkeeping for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerEntry {
    count: u32,
    notes: Vec<String>,
}

impl LedgerEntry {
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Recorded misspellings, oldest first.
    #[must_use]
    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    #[must_use]
    pub fn latest_note(&self) -> Option<&str> {
        self.notes.last().map(String::as_str)
    }

    fn push_note(&mut self, typed: String) {
        self.notes.push(typed);
        if self.notes.len() > MAX_NOTES_PER_WORD {
            let overflow = self.notes.len() - MAX_NOTES_PER_WORD;
            self.notes.drain(..overflow);
        }
    }
}

/// Cumulative wrong-answer counts per word.
///
/// A word without an entry has a count of zero. Counts only ever go up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MistakeLedger {
    entries: HashMap<Word, LedgerEntry>,
}

impl MistakeLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a ledger from persisted counts. A repeated word keeps its last count.
    #[must_use]
    pub fn from_counts(counts: impl IntoIterator<Item = (Word, u32)>) -> Self {
        let mut ledger = Self::new();
        for (word, count) in counts {
            ledger.entries.entry(word).or_default().count = count;
        }
        ledger
    }

    #[must_use]
    pub fn count(&self, word: &str) -> u32 {
        self.entries.get(word).map_or(0, LedgerEntry::count)
    }

    #[must_use]
    pub fn entry(&self, word: &str) -> Option<&LedgerEntry> {
        self.entries.get(word)
    }

    /// Increment the count for `word` and return the new value.
    pub fn record_mistake(&mut self, word: &Word) -> u32 {
        let entry = self.entries.entry(word.clone()).or_default();
        entry.count = entry.count.saturating_add(1);
        entry.count
    }

    /// Attach a typed misspelling to `word` without touching its count.
    pub fn attach_note(&mut self, word: &Word, typed: impl Into<String>) {
        self.entries
            .entry(word.clone())
            .or_default()
            .push_note(typed.into());
    }

    /// Replay notes read back from the mistake log, in log order.
    pub fn restore_notes(&mut self, notes: impl IntoIterator<Item = MistakeNote>) {
        for note in notes {
            self.attach_note(&note.word, note.typed);
        }
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn counts(&self) -> impl Iterator<Item = (&Word, u32)> {
        self.entries.iter().map(|(word, entry)| (word, entry.count))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One row per catalog word plus any ledger-only word, most-missed first.
    ///
    /// Ties are broken by word in ascending order.
    #[must_use]
    pub fn stats(&self, catalog: &WordCatalog) -> Vec<WordStat> {
        let mut seen: HashSet<&Word> = HashSet::new();
        let mut rows = Vec::with_capacity(catalog.len().max(self.entries.len()));

        let ledger_words = self.entries.keys();
        for word in catalog.words().iter().chain(ledger_words) {
            if !seen.insert(word) {
                continue;
            }
            let entry = self.entries.get(word);
            rows.push(WordStat {
                word: word.clone(),
                wrong_count: entry.map_or(0, LedgerEntry::count),
                latest_misspelling: entry.and_then(LedgerEntry::latest_note).map(str::to_owned),
            });
        }

        rows.sort_by(|a, b| {
            b.wrong_count
                .cmp(&a.wrong_count)
                .then_with(|| a.word.cmp(&b.word))
        });
        rows
    }
}

/// A statistics row for a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    pub word: Word,
    pub wrong_count: u32,
    pub latest_misspelling: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
