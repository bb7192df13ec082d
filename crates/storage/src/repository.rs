use async_trait::async_trait;
use spelling_core::model::{
    CatalogError, MistakeLedger, MistakeNote, SessionHistory, SettingsDraft, Word, WordCatalog,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

/// Source of the words to practice.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Load the word catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Catalog` if no usable words are found, or an I/O error
    /// if the list cannot be read.
    async fn load_catalog(&self) -> Result<WordCatalog, StorageError>;
}

/// Persistence for the cumulative mistake counts.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Load the ledger; a missing store yields an empty ledger.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store exists but cannot be read.
    async fn load_ledger(&self) -> Result<MistakeLedger, StorageError>;

    /// Replace the stored counts with the ledger's counts.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the ledger cannot be written.
    async fn save_ledger(&self, ledger: &MistakeLedger) -> Result<(), StorageError>;
}

/// Persistence for the recent-session history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Load the newest `depth` sessions.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store exists but cannot be read.
    async fn load_history(&self, depth: usize) -> Result<SessionHistory, StorageError>;

    /// Replace the stored sessions with the retained ones.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be written.
    async fn save_history(&self, history: &SessionHistory) -> Result<(), StorageError>;
}

/// Append-only log of typed misspellings.
#[async_trait]
pub trait MistakeLogRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the note cannot be appended.
    async fn append_note(&self, note: &MistakeNote) -> Result<(), StorageError>;

    /// All recorded notes, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the log exists but cannot be read.
    async fn load_notes(&self) -> Result<Vec<MistakeNote>, StorageError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Stored settings, or `None` when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the settings exist but cannot be read or parsed.
    async fn load_settings(&self) -> Result<Option<SettingsDraft>, StorageError>;
}

//
// ─── IN-MEMORY ─────────────────────────────────────────────────────────────────
//

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone)]
pub struct InMemoryRepository {
    catalog: Arc<Mutex<WordCatalog>>,
    ledger: Arc<Mutex<MistakeLedger>>,
    sessions: Arc<Mutex<Vec<Vec<Word>>>>,
    notes: Arc<Mutex<Vec<MistakeNote>>>,
    settings: Arc<Mutex<Option<SettingsDraft>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::with_catalog(WordCatalog::embedded())
    }

    #[must_use]
    pub fn with_catalog(catalog: WordCatalog) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(catalog)),
            ledger: Arc::new(Mutex::new(MistakeLedger::new())),
            sessions: Arc::new(Mutex::new(Vec::new())),
            notes: Arc::new(Mutex::new(Vec::new())),
            settings: Arc::new(Mutex::new(None)),
        }
    }

    /// Store settings to be returned by `load_settings`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the lock is poisoned.
    pub fn put_settings(&self, draft: SettingsDraft) -> Result<(), StorageError> {
        let mut guard = self.settings.lock().map_err(poisoned)?;
        *guard = Some(draft);
        Ok(())
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Io(e.to_string())
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn load_catalog(&self) -> Result<WordCatalog, StorageError> {
        let guard = self.catalog.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl LedgerRepository for InMemoryRepository {
    async fn load_ledger(&self) -> Result<MistakeLedger, StorageError> {
        let guard = self.ledger.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }

    async fn save_ledger(&self, ledger: &MistakeLedger) -> Result<(), StorageError> {
        let mut guard = self.ledger.lock().map_err(poisoned)?;
        *guard = ledger.clone();
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for InMemoryRepository {
    async fn load_history(&self, depth: usize) -> Result<SessionHistory, StorageError> {
        let guard = self.sessions.lock().map_err(poisoned)?;
        Ok(SessionHistory::from_sessions(depth, guard.iter().cloned()))
    }

    async fn save_history(&self, history: &SessionHistory) -> Result<(), StorageError> {
        if !history.is_enabled() {
            return Ok(());
        }
        let mut guard = self.sessions.lock().map_err(poisoned)?;
        *guard = history.sessions().map(<[_]>::to_vec).collect();
        Ok(())
    }
}

#[async_trait]
impl MistakeLogRepository for InMemoryRepository {
    async fn append_note(&self, note: &MistakeNote) -> Result<(), StorageError> {
        let mut guard = self.notes.lock().map_err(poisoned)?;
        guard.push(note.clone());
        Ok(())
    }

    async fn load_notes(&self) -> Result<Vec<MistakeNote>, StorageError> {
        let guard = self.notes.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl SettingsRepository for InMemoryRepository {
    async fn load_settings(&self) -> Result<Option<SettingsDraft>, StorageError> {
        let guard = self.settings.lock().map_err(poisoned)?;
        Ok(*guard)
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
    pub ledger: Arc<dyn LedgerRepository>,
    pub history: Arc<dyn HistoryRepository>,
    pub mistake_log: Arc<dyn MistakeLogRepository>,
    pub settings: Arc<dyn SettingsRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(repo.clone());
        let ledger: Arc<dyn LedgerRepository> = Arc::new(repo.clone());
        let history: Arc<dyn HistoryRepository> = Arc::new(repo.clone());
        let mistake_log: Arc<dyn MistakeLogRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Self {
            catalog,
            ledger,
            history,
            mistake_log,
            settings,
        }
    }
}
