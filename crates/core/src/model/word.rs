use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordError {
    #[error("word cannot be empty")]
    Empty,

    #[error("word {word:?} contains reserved character {found:?}")]
    ReservedCharacter { word: String, found: char },
}

/// Characters used as separators by the persisted text formats.
const RESERVED: [char; 5] = [':', ',', '\t', '\r', '\n'];

//
// ─── WORD ──────────────────────────────────────────────────────────────────────
//

/// A single practice word.
///
/// Words keep their case and compare by exact text. Surrounding whitespace is
/// trimmed on construction; the separators of the ledger and history files are
/// rejected so every word survives a save/load cycle unchanged.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    /// Creates a word from raw text.
    ///
    /// # Errors
    ///
    /// Returns `WordError::Empty` for blank input and
    /// `WordError::ReservedCharacter` if a separator character is present.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(found) = trimmed.chars().find(|c| RESERVED.contains(c)) {
            return Err(WordError::ReservedCharacter {
                word: trimmed.to_owned(),
                found,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets maps keyed by `Word` be queried with a plain `&str`.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn trims_and_preserves_case() {
        let word = Word::new("  Monday ").unwrap();
        assert_eq!(word.as_str(), "Monday");
        assert_ne!(word, Word::new("monday").unwrap());
    }

    #[test]
    fn apostrophes_are_allowed() {
        assert_eq!(Word::new("can't").unwrap().to_string(), "can't");
        assert_eq!(Word::new("I'm").unwrap().to_string(), "I'm");
    }

    #[test]
    fn blank_is_rejected() {
        assert_eq!(Word::new("   ").unwrap_err(), WordError::Empty);
    }

    #[test]
    fn separators_are_rejected() {
        let err = Word::new("a:b").unwrap_err();
        assert!(matches!(err, WordError::ReservedCharacter { found: ':', .. }));
        assert!("one,two".parse::<Word>().is_err());
        assert!(Word::new("tab\tbed").is_err());
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Word::new("cat").unwrap(), 2_u32);
        assert_eq!(map.get("cat"), Some(&2));
        assert_eq!(map.get("Cat"), None);
    }
}
