use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SESSION_LENGTH: u32 = 30;
pub const DEFAULT_HISTORY_DEPTH: u32 = 2;
pub const DEFAULT_BOOST_FACTOR: u32 = 2;
pub const MAX_HISTORY_DEPTH: u32 = 64;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("session length must be > 0")]
    InvalidSessionLength,

    #[error("boost factor must be >= 1")]
    InvalidBoostFactor,

    #[error("history depth must be <= {max}, got {provided}")]
    InvalidHistoryDepth { provided: u32, max: u32 },
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Validated practice configuration.
///
/// - `session_length`: words per session, also the minimum candidate pool size
/// - `history_depth`: completed sessions whose words are avoided (0 disables)
/// - `boost_factor`: weight multiplier in mistake-weighted selection
/// - `capture_mistake_text`: ask for the typed spelling on wrong answers
/// - `shuffle_presentation`: shuffle the selected words before presenting them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticeSettings {
    session_length: u32,
    history_depth: u32,
    boost_factor: u32,
    capture_mistake_text: bool,
    shuffle_presentation: bool,
}

impl PracticeSettings {
    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the session length is zero, the boost factor is
    /// zero, or the history depth exceeds `MAX_HISTORY_DEPTH`.
    pub fn new(
        session_length: u32,
        history_depth: u32,
        boost_factor: u32,
        capture_mistake_text: bool,
        shuffle_presentation: bool,
    ) -> Result<Self, SettingsError> {
        if session_length == 0 {
            return Err(SettingsError::InvalidSessionLength);
        }
        if boost_factor == 0 {
            return Err(SettingsError::InvalidBoostFactor);
        }
        if history_depth > MAX_HISTORY_DEPTH {
            return Err(SettingsError::InvalidHistoryDepth {
                provided: history_depth,
                max: MAX_HISTORY_DEPTH,
            });
        }

        Ok(Self {
            session_length,
            history_depth,
            boost_factor,
            capture_mistake_text,
            shuffle_presentation,
        })
    }

    #[must_use]
    pub fn session_length(&self) -> u32 {
        self.session_length
    }

    #[must_use]
    pub fn history_depth(&self) -> u32 {
        self.history_depth
    }

    #[must_use]
    pub fn boost_factor(&self) -> u32 {
        self.boost_factor
    }

    #[must_use]
    pub fn capture_mistake_text(&self) -> bool {
        self.capture_mistake_text
    }

    #[must_use]
    pub fn shuffle_presentation(&self) -> bool {
        self.shuffle_presentation
    }
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            session_length: DEFAULT_SESSION_LENGTH,
            history_depth: DEFAULT_HISTORY_DEPTH,
            boost_factor: DEFAULT_BOOST_FACTOR,
            capture_mistake_text: false,
            shuffle_presentation: true,
        }
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Partially specified settings, as read from a settings file or the command line.
///
/// Unset fields fall back to the defaults on `validate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDraft {
    pub session_length: Option<u32>,
    pub history_depth: Option<u32>,
    pub boost_factor: Option<u32>,
    pub capture_mistake_text: Option<bool>,
    pub shuffle_presentation: Option<bool>,
}

impl SettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn overlay(self, other: SettingsDraft) -> SettingsDraft {
        SettingsDraft {
            session_length: other.session_length.or(self.session_length),
            history_depth: other.history_depth.or(self.history_depth),
            boost_factor: other.boost_factor.or(self.boost_factor),
            capture_mistake_text: other.capture_mistake_text.or(self.capture_mistake_text),
            shuffle_presentation: other.shuffle_presentation.or(self.shuffle_presentation),
        }
    }

    /// Fill unset fields with defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a provided value is out of range.
    pub fn validate(self) -> Result<PracticeSettings, SettingsError> {
        let defaults = PracticeSettings::default();
        PracticeSettings::new(
            self.session_length.unwrap_or(defaults.session_length),
            self.history_depth.unwrap_or(defaults.history_depth),
            self.boost_factor.unwrap_or(defaults.boost_factor),
            self.capture_mistake_text
                .unwrap_or(defaults.capture_mistake_text),
            self.shuffle_presentation
                .unwrap_or(defaults.shuffle_presentation),
        )
    }
}

impl From<PracticeSettings> for SettingsDraft {
    fn from(settings: PracticeSettings) -> Self {
        Self {
            session_length: Some(settings.session_length),
            history_depth: Some(settings.history_depth),
            boost_factor: Some(settings.boost_factor),
            capture_mistake_text: Some(settings.capture_mistake_text),
            shuffle_presentation: Some(settings.shuffle_presentation),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
