use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{MistakeLedger, Word};

//
// ─── WORD SELECTOR ─────────────────────────────────────────────────────────────
//

/// Mistake-weighted sampling without replacement.
///
/// Every pool word gets the weight `(mistakes + 1) * boost_factor`, so a word that
/// was never missed still has a non-zero chance while frequently missed words come
/// up more often. Once a word is drawn, all of its weight leaves the pool.
///
/// # Examples
///
/// ```
/// # use spelling_core::model::{MistakeLedger, Word};
/// # use spelling_core::selection::WordSelector;
/// # use rand::SeedableRng;
/// let pool: Vec<Word> = ["cat", "dog", "owl"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
/// let ledger = MistakeLedger::from_counts([(Word::new("dog").unwrap(), 4)]);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
///
/// let picked = WordSelector::new(2).select(&pool, &ledger, 2, &mut rng);
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordSelector {
    boost_factor: u32,
}

impl WordSelector {
    /// Create a selector; a zero boost factor is treated as 1.
    #[must_use]
    pub fn new(boost_factor: u32) -> Self {
        Self {
            boost_factor: boost_factor.max(1),
        }
    }

    #[must_use]
    pub fn boost_factor(&self) -> u32 {
        self.boost_factor
    }

    /// Selection weight for a word with `mistakes` recorded wrong answers.
    #[must_use]
    pub fn weight(&self, mistakes: u32) -> u64 {
        (u64::from(mistakes) + 1) * u64::from(self.boost_factor)
    }

    /// Pick up to `count` distinct words from `pool`.
    ///
    /// The result is in draw order. A pool with fewer distinct words than `count`
    /// yields each of them once; an empty pool yields nothing.
    pub fn select<R: Rng>(
        &self,
        pool: &[Word],
        ledger: &MistakeLedger,
        count: usize,
        rng: &mut R,
    ) -> Vec<Word> {
        let mut candidates = self.weighted_candidates(pool, ledger);
        let target = count.min(candidates.len());
        let mut selected = Vec::with_capacity(target);
        let mut cumulative = Vec::with_capacity(candidates.len());

        while selected.len() < target && !candidates.is_empty() {
            cumulative.clear();
            let mut total = 0_u64;
            for (_, weight) in &candidates {
                total = total.saturating_add(*weight);
                cumulative.push(total);
            }
            if total == 0 {
                break;
            }

            let ticket = rng.random_range(0..total);
            let picked = cumulative.partition_point(|&edge| edge <= ticket);
            let (word, _) = candidates.remove(picked);
            selected.push(word.clone());
        }

        let missing = target - selected.len();
        if missing > 0 {
            let mut rest: Vec<&Word> = candidates.into_iter().map(|(word, _)| word).collect();
            rest.shuffle(rng);
            selected.extend(rest.into_iter().take(missing).cloned());
        }

        selected
    }

    /// Distinct pool words in first-seen order with their summed weights.
    ///
    /// A word listed twice in the pool carries twice the weight.
    fn weighted_candidates<'a>(
        &self,
        pool: &'a [Word],
        ledger: &MistakeLedger,
    ) -> Vec<(&'a Word, u64)> {
        let mut index: HashMap<&Word, usize> = HashMap::with_capacity(pool.len());
        let mut candidates: Vec<(&Word, u64)> = Vec::with_capacity(pool.len());

        for word in pool {
            let weight = self.weight(ledger.count(word.as_str()));
            if let Some(&at) = index.get(word) {
                candidates[at].1 = candidates[at].1.saturating_add(weight);
            } else {
                index.insert(word, candidates.len());
                candidates.push((word, weight));
            }
        }

        candidates
    }
}

impl Default for WordSelector {
    fn default() -> Self {
        Self::new(crate::model::DEFAULT_BOOST_FACTOR)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn words(raw: &[&str]) -> Vec<Word> {
        raw.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn w(raw: &str) -> Word {
        Word::new(raw).unwrap()
    }

    #[test]
    fn weight_never_drops_below_boost() {
        let selector = WordSelector::new(2);
        assert_eq!(selector.weight(0), 2);
        assert_eq!(selector.weight(3), 8);
        assert_eq!(WordSelector::new(0).weight(0), 1);
    }

    #[test]
    fn returns_exactly_count_distinct_pool_words() {
        let pool = words(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        let ledger = MistakeLedger::from_counts([(w("c"), 5), (w("g"), 1)]);
        let selector = WordSelector::new(2);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = selector.select(&pool, &ledger, 5, &mut rng);
            assert_eq!(picked.len(), 5);
            let unique: HashSet<&Word> = picked.iter().collect();
            assert_eq!(unique.len(), 5);
            assert!(picked.iter().all(|word| pool.contains(word)));
        }
    }

    #[test]
    fn empty_pool_gives_empty_result() {
        let mut rng = StdRng::seed_from_u64(1);
        let picked = WordSelector::new(2).select(&[], &MistakeLedger::new(), 30, &mut rng);
        assert!(picked.is_empty());
    }

    #[test]
    fn small_pool_is_returned_whole() {
        let pool = words(&["a", "b", "c", "d", "e"]);
        let ledger = MistakeLedger::from_counts([(w("b"), 3)]);
        let mut rng = StdRng::seed_from_u64(3);

        let picked = WordSelector::new(2).select(&pool, &ledger, 30, &mut rng);
        let got: HashSet<&Word> = picked.iter().collect();
        let expected: HashSet<&Word> = pool.iter().collect();
        assert_eq!(picked.len(), 5);
        assert_eq!(got, expected);
    }

    #[test]
    fn duplicate_pool_entries_are_selected_once() {
        let pool = words(&["new", "few", "new", "crew"]);
        let mut rng = StdRng::seed_from_u64(9);
        let picked = WordSelector::new(1).select(&pool, &MistakeLedger::new(), 10, &mut rng);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn missed_words_are_drawn_first_more_often() {
        let pool = words(&["plain", "tricky", "other", "more", "extra"]);
        let ledger = MistakeLedger::from_counts([(w("tricky"), 4)]);
        let selector = WordSelector::new(2);
        let mut rng = StdRng::seed_from_u64(2024);

        let trials = 4_000;
        let mut tricky_first = 0;
        let mut plain_first = 0;
        for _ in 0..trials {
            let picked = selector.select(&pool, &ledger, 1, &mut rng);
            match picked[0].as_str() {
                "tricky" => tricky_first += 1,
                "plain" => plain_first += 1,
                _ => {}
            }
        }

        // Weights 10 vs 2 out of 18: expected shares ~0.56 and ~0.11.
        let tricky_share = f64::from(tricky_first) / f64::from(trials);
        let plain_share = f64::from(plain_first) / f64::from(trials);
        assert!(tricky_share > plain_share * 3.0);
        assert!((tricky_share - 10.0 / 18.0).abs() < 0.05);
        assert!((plain_share - 2.0 / 18.0).abs() < 0.05);
    }

    #[test]
    fn same_seed_same_selection() {
        let pool = words(&["a", "b", "c", "d", "e", "f"]);
        let ledger = MistakeLedger::new();
        let selector = WordSelector::default();
        let first = selector.select(&pool, &ledger, 4, &mut StdRng::seed_from_u64(11));
        let second = selector.select(&pool, &ledger, 4, &mut StdRng::seed_from_u64(11));
        assert_eq!(first, second);
    }
}
