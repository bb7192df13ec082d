use std::collections::HashSet;

use crate::model::{SessionHistory, Word};

/// Candidate words for the next session.
///
/// Words from the retained history sessions are left out. When that leaves fewer
/// than `min_pool_size` words, recently used words are added back in catalog order
/// until the minimum is reached or every catalog word is in the pool.
#[must_use]
pub fn build_pool(all_words: &[Word], history: &SessionHistory, min_pool_size: usize) -> Vec<Word> {
    let excluded = history.recent_words();
    let mut pool: Vec<Word> = all_words
        .iter()
        .filter(|word| !excluded.contains(word))
        .cloned()
        .collect();

    if pool.len() < min_pool_size {
        let mut present: HashSet<Word> = pool.iter().cloned().collect();
        for word in all_words {
            if pool.len() >= min_pool_size {
                break;
            }
            if present.insert(word.clone()) {
                pool.push(word.clone());
            }
        }
    }

    pool
}
