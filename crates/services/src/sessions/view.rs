use spelling_core::model::{MistakeLedger, SessionSummary, Word, WordCatalog, WordStat};

use super::service::PracticeSession;

/// Presentation-agnostic state of the word currently on screen.
///
/// No pre-formatted strings; the UI decides how to phrase counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPrompt {
    pub word: Word,
    /// One-based position within the session.
    pub position: usize,
    pub total: usize,
    pub correct: u32,
    pub wrong: u32,
    /// Mistakes recorded for this word before it was shown.
    pub previous_mistakes: u32,
    pub latest_misspelling: Option<String>,
    pub capture_text: bool,
}

impl WordPrompt {
    /// Prompt for the session's current word, or `None` once it is complete.
    #[must_use]
    pub fn from_session(
        session: &PracticeSession,
        ledger: &MistakeLedger,
        capture_text: bool,
    ) -> Option<Self> {
        let word = session.current_word()?;
        let progress = session.progress();
        let entry = ledger.entry(word.as_str());
        Some(Self {
            word: word.clone(),
            position: progress.answered + 1,
            total: progress.total,
            correct: session.correct(),
            wrong: session.wrong(),
            previous_mistakes: ledger.count(word.as_str()),
            latest_misspelling: entry
                .and_then(|entry| entry.latest_note())
                .map(str::to_owned),
            capture_text,
        })
    }
}

/// Mistake statistics over the catalog and ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub rows: Vec<WordStat>,
}

impl StatsView {
    #[must_use]
    pub fn build(ledger: &MistakeLedger, catalog: &WordCatalog) -> Self {
        Self {
            rows: ledger.stats(catalog),
        }
    }

    /// Sum of all recorded mistakes.
    #[must_use]
    pub fn total_mistakes(&self) -> u64 {
        self.rows.iter().map(|row| u64::from(row.wrong_count)).sum()
    }

    #[must_use]
    pub fn words_with_mistakes(&self) -> usize {
        self.rows.iter().filter(|row| row.wrong_count > 0).count()
    }
}

/// What the presentation layer should show next.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Prompt(WordPrompt),
    Summary(SessionSummary),
    Stats(StatsView),
}

#[cfg(test)]
mod tests {
    use super::*;
    use spelling_core::model::AnswerOutcome;
    use spelling_core::time::fixed_now;

    fn w(raw: &str) -> Word {
        Word::new(raw).unwrap()
    }

    #[test]
    fn prompt_reports_position_and_history() {
        let mut session = PracticeSession::new(vec![w("said"), w("were")], fixed_now()).unwrap();
        let mut ledger = MistakeLedger::from_counts([(w("were"), 2)]);
        ledger.attach_note(&w("were"), "wer");

        session
            .record_answer(AnswerOutcome::Wrong, fixed_now())
            .unwrap();
        let prompt = WordPrompt::from_session(&session, &ledger, true).unwrap();

        assert_eq!(prompt.word, w("were"));
        assert_eq!(prompt.position, 2);
        assert_eq!(prompt.total, 2);
        assert_eq!(prompt.wrong, 1);
        assert_eq!(prompt.previous_mistakes, 2);
        assert_eq!(prompt.latest_misspelling.as_deref(), Some("wer"));
        assert!(prompt.capture_text);
    }

    #[test]
    fn no_prompt_after_completion() {
        let mut session = PracticeSession::new(vec![w("said")], fixed_now()).unwrap();
        session
            .record_answer(AnswerOutcome::Correct, fixed_now())
            .unwrap();
        assert!(WordPrompt::from_session(&session, &MistakeLedger::new(), false).is_none());
    }

    #[test]
    fn stats_totals() {
        let catalog = WordCatalog::new(vec![w("a"), w("b"), w("c")]).unwrap();
        let ledger = MistakeLedger::from_counts([(w("b"), 3), (w("zz"), 1)]);
        let view = StatsView::build(&ledger, &catalog);

        assert_eq!(view.rows.len(), 4);
        assert_eq!(view.rows[0].word, w("b"));
        assert_eq!(view.total_mistakes(), 4);
        assert_eq!(view.words_with_mistakes(), 2);
    }
}
