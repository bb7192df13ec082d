use rand::Rng;
use rand::seq::SliceRandom;

use spelling_core::model::{MistakeLedger, PracticeSettings, SessionHistory, Word, WordCatalog};
use spelling_core::pool::build_pool;
use spelling_core::selection::WordSelector;

/// Selection result for a session build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlan {
    pub words: Vec<Word>,
    /// Candidate words the selection drew from.
    pub pool_size: usize,
}

impl SessionPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Builds a session by pooling fresh words and drawing from them by mistake weight.
#[derive(Debug, Clone, Copy)]
pub struct SessionBuilder {
    session_length: usize,
    selector: WordSelector,
    shuffle: bool,
}

impl SessionBuilder {
    #[must_use]
    pub fn new(settings: &PracticeSettings) -> Self {
        Self {
            session_length: usize::try_from(settings.session_length()).unwrap_or(usize::MAX),
            selector: WordSelector::new(settings.boost_factor()),
            shuffle: settings.shuffle_presentation(),
        }
    }

    /// Enable or disable shuffling the drawn words before presenting them.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Plan the next session.
    ///
    /// - the pool leaves out words of the retained history sessions, topped up to
    ///   the session length when too small
    /// - up to `session_length` distinct words are drawn from it
    /// - without shuffling, words keep their draw order (most-missed tend to come first)
    pub fn build<R: Rng>(
        &self,
        catalog: &WordCatalog,
        ledger: &MistakeLedger,
        history: &SessionHistory,
        rng: &mut R,
    ) -> SessionPlan {
        let pool = build_pool(catalog.words(), history, self.session_length);
        let mut words = self
            .selector
            .select(&pool, ledger, self.session_length, rng);

        if self.shuffle {
            words.as_mut_slice().shuffle(rng);
        }

        SessionPlan {
            words,
            pool_size: pool.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn words(raw: &[&str]) -> Vec<Word> {
        raw.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn settings(length: u32) -> PracticeSettings {
        PracticeSettings::new(length, 2, 2, false, true).unwrap()
    }

    #[test]
    fn small_catalog_yields_every_word() {
        let catalog = WordCatalog::new(words(&["a", "b", "c", "d", "e"])).unwrap();
        let ledger = MistakeLedger::from_counts([(Word::new("b").unwrap(), 3)]);
        let mut rng = StdRng::seed_from_u64(5);

        let plan =
            SessionBuilder::new(&settings(5)).build(&catalog, &ledger, &SessionHistory::new(2), &mut rng);

        let got: HashSet<&Word> = plan.words.iter().collect();
        assert_eq!(plan.total(), 5);
        assert_eq!(got.len(), 5);
        assert_eq!(plan.pool_size, 5);
    }

    #[test]
    fn avoids_recent_words_when_pool_is_large_enough() {
        let catalog =
            WordCatalog::new(words(&["a", "b", "c", "d", "e", "f", "g", "h"])).unwrap();
        let history = SessionHistory::from_sessions(2, [words(&["a", "b"]), words(&["c", "d"])]);
        let mut rng = StdRng::seed_from_u64(8);

        let plan = SessionBuilder::new(&settings(4)).build(
            &catalog,
            &MistakeLedger::new(),
            &history,
            &mut rng,
        );

        let got: HashSet<&str> = plan.words.iter().map(Word::as_str).collect();
        let expected: HashSet<&str> = ["e", "f", "g", "h"].into_iter().collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn session_is_shorter_than_length_for_small_catalog() {
        let catalog = WordCatalog::new(words(&["a", "b"])).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let plan = SessionBuilder::new(&settings(30)).with_shuffle(false).build(
            &catalog,
            &MistakeLedger::new(),
            &SessionHistory::new(0),
            &mut rng,
        );
        assert_eq!(plan.total(), 2);
        assert!(!plan.is_empty());
    }
}
