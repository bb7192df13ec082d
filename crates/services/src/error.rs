//! Shared error types for the services crate.

use std::fmt;

use thiserror::Error;

use spelling_core::model::{SessionSummaryError, SettingsError};
use storage::repository::StorageError;

/// Errors emitted by session services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no words available for session")]
    Empty,
    #[error("session already completed")]
    Completed,
    #[error("session is not complete yet")]
    NotComplete,
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error("cannot load word catalog: {0}")]
    Catalog(#[source] StorageError),
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

//
// ─── WARNINGS ──────────────────────────────────────────────────────────────────
//

/// Which persisted store a non-fatal failure concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceTarget {
    Ledger,
    History,
    MistakeLog,
    Settings,
}

impl fmt::Display for PersistenceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PersistenceTarget::Ledger => "mistake counts",
            PersistenceTarget::History => "session history",
            PersistenceTarget::MistakeLog => "mistake log",
            PersistenceTarget::Settings => "settings",
        };
        f.write_str(label)
    }
}

/// A read or write that failed without stopping the practice loop.
///
/// In-memory state is kept; the next successful write carries everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistenceWarning {
    pub target: PersistenceTarget,
    pub message: String,
}

impl PersistenceWarning {
    /// Build a warning for `target` and log it.
    pub(crate) fn logged(target: PersistenceTarget, err: &StorageError) -> Self {
        log::warn!("{target}: {err}");
        Self {
            target,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not persist {}: {}", self.target, self.message)
    }
}
