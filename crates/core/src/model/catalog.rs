use thiserror::Error;

use crate::model::word::Word;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("word catalog is empty")]
    Empty,
}

/// The vocabulary practiced during a run.
///
/// Always holds at least one word and is never modified after loading.
/// Duplicates are tolerated and kept in their original position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCatalog {
    words: Vec<Word>,
}

impl WordCatalog {
    /// Build a catalog from an ordered word list.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if no words are given.
    pub fn new(words: Vec<Word>) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { words })
    }

    /// The built-in word list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_static(DEFAULT_WORDS)
    }

    /// The short list written out when an external word list is missing.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_static(SAMPLE_WORDS)
    }

    fn from_static(raw: &[&str]) -> Self {
        Self {
            words: raw.iter().filter_map(|w| Word::new(w).ok()).collect(),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.as_str() == word)
    }
}

pub const SAMPLE_WORDS: &[&str] = &[
    "because", "friend", "people", "school", "through", "thought", "laugh", "should", "their",
    "picture",
];

pub const DEFAULT_WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "another", "any", "anyone", "away", "are", "back",
    "baby", "ball", "be", "because", "been", "big", "boy", "brother", "but", "by", "called",
    "came", "can", "can't", "cat", "call", "come", "could", "dad", "day", "did", "dig", "do",
    "does", "dog", "don't", "door", "down", "fall", "first", "for", "from", "get", "girl", "go",
    "going", "good", "dot", "had", "he", "half", "has", "have", "help", "her", "here", "him",
    "his", "house", "how", "humans", "if", "in", "is", "it", "I'm", "I've", "hump", "just",
    "last", "laugh", "little", "lived", "look", "love", "made", "make", "man", "many", "may",
    "me", "more", "much", "mum", "must", "my", "name", "new", "next", "night", "no", "not", "now",
    "of", "old", "on", "once", "one", "or", "other", "our", "out", "over", "people", "play",
    "pull", "push", "put", "ran", "said", "school", "see", "seen", "she", "should", "sister",
    "small", "so", "some", "son", "tall", "than", "that", "the", "their", "them", "then", "there",
    "these", "they", "this", "three", "through", "to", "too", "took", "tree", "two", "up", "us",
    "very", "wall", "want", "was", "washing", "water", "watch", "watches", "way", "we", "went",
    "were", "what", "when", "where", "who", "whole", "why", "will", "with", "would", "yes", "you",
    "your", "you're", "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    "sunday", "tick", "tock", "clock", "lick", "rock", "back", "snack", "neck", "stick", "duck",
    "thing", "string", "wing", "sing", "pong", "song", "think", "stink", "wink", "blink", "link",
    "pink", "yawn", "dawn", "saw", "raw", "law", "straw", "paw", "crawl", "jaw", "claw", "shout",
    "loud", "mouth", "round", "found", "fair", "stair", "hair", "air", "lair", "chair", "nice",
    "smile", "shine", "white", "fine", "hide", "wide", "like", "mine", "time", "nurse", "purse",
    "burn", "turn", "lurk", "hurl", "burp", "slurp", "hurt", "tea", "eat", "neat", "real",
    "clean", "please", "leave", "dream", "seat", "scream", "brown", "cow", "howl", "town",
    "crowd", "drown", "gown", "sort", "short", "worn", "horse", "sport", "snort", "fork", "goat",
    "boat", "toad", "oak", "road", "cloak", "throat", "roast", "toast", "loaf", "coat", "coal",
    "coach", "blow", "snow", "slow", "show", "know", "glow", "lay", "say", "tray", "stray",
    "green", "keep", "need", "sleep", "feel", "poo", "zoo", "mood", "fool", "pool", "stool",
    "moon", "spoon", "start", "car", "bar", "star", "park", "smart", "sharp", "spark", "toy",
    "enjoy", "book", "shook", "cook", "foot", "whirl", "twirl", "bird", "third", "dirt", "huge",
    "brute", "tune", "rude", "mule", "use", "june", "dude", "accuse", "excuse", "phone", "home",
    "hope", "rose", "spoke", "note", "broke", "stole", "rope", "those", "cake", "shake", "same",
    "game", "save", "brave", "late", "date", "spoil", "join", "coin", "voice", "choice", "noise",
    "care", "share", "dare", "bare", "spare", "scare", "flare", "square", "software", "chew",
    "stew", "new", "flew", "blew", "few", "crew", "newt", "screw", "drew", "grew", "better",
    "letter", "over", "never", "weather", "after", "hamster", "litter", "proper", "corner",
    "sucker", "snail", "rain", "paid", "tail", "drain", "paint", "sprain", "chain", "train",
    "stain", "fire", "hire", "wire", "spire", "bonfire", "inspire", "conspire", "hear", "ear",
    "dear", "fear", "gear", "near", "rear", "tear", "year", "spear", "sure", "pure", "cure",
    "picture",
];
