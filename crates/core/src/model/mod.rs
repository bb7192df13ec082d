mod catalog;
mod history;
mod ledger;
mod session;
mod settings;
mod word;

pub use catalog::{CatalogError, DEFAULT_WORDS, SAMPLE_WORDS, WordCatalog};
pub use history::SessionHistory;
pub use ledger::{LedgerEntry, MAX_NOTES_PER_WORD, MistakeLedger, MistakeNote, WordStat};
pub use session::{AnswerOutcome, SessionSummary, SessionSummaryError};
pub use settings::{
    DEFAULT_BOOST_FACTOR, DEFAULT_HISTORY_DEPTH, DEFAULT_SESSION_LENGTH, MAX_HISTORY_DEPTH,
    PracticeSettings, SettingsDraft, SettingsError,
};
pub use word::{Word, WordError};
