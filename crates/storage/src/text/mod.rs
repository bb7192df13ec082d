use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::repository::{
    CatalogRepository, HistoryRepository, LedgerRepository, MistakeLogRepository,
    SettingsRepository, Storage, StorageError,
};

mod catalog_repo;
mod format;
mod history_repo;
mod ledger_repo;
mod mistake_log_repo;
mod settings_repo;

pub const LEDGER_FILE: &str = "spelling_progress.txt";
pub const HISTORY_FILE: &str = "session_history.txt";
pub const MISTAKE_LOG_FILE: &str = "mistake_log.txt";
pub const SETTINGS_FILE: &str = "settings.json";

/// Where the practice words come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The list compiled into the binary.
    Embedded,
    /// A line-delimited word file; a sample list is written there if it is missing.
    WordList(PathBuf),
}

/// Plain-text files in a single data directory.
#[derive(Debug, Clone)]
pub struct TextFileRepository {
    data_dir: PathBuf,
    catalog_source: CatalogSource,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextInitError {
    #[error("cannot use data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TextFileRepository {
    /// Use `data_dir` for all progress files, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns `TextInitError::DataDir` if the directory cannot be created.
    pub async fn open(
        data_dir: impl Into<PathBuf>,
        catalog_source: CatalogSource,
    ) -> Result<Self, TextInitError> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir)
            .await
            .map_err(|source| TextInitError::DataDir {
                path: data_dir.clone(),
                source,
            })?;
        Ok(Self {
            data_dir,
            catalog_source,
        })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog_source
    }

    fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }
}

/// Read a file to a string; a missing file is `Ok(None)`.
async fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(StorageError::Io(format!("{}: {err}", path.display()))),
    }
}

async fn write_file(path: &Path, contents: String) -> Result<(), StorageError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|err| StorageError::Io(format!("{}: {err}", path.display())))
}

impl Storage {
    /// Build a `Storage` backed by text files in `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `TextInitError` if the data directory cannot be prepared.
    pub async fn text_files(
        data_dir: impl Into<PathBuf>,
        catalog_source: CatalogSource,
    ) -> Result<Self, TextInitError> {
        let repo = TextFileRepository::open(data_dir, catalog_source).await?;
        let catalog: Arc<dyn CatalogRepository> = Arc::new(repo.clone());
        let ledger: Arc<dyn LedgerRepository> = Arc::new(repo.clone());
        let history: Arc<dyn HistoryRepository> = Arc::new(repo.clone());
        let mistake_log: Arc<dyn MistakeLogRepository> = Arc::new(repo.clone());
        let settings: Arc<dyn SettingsRepository> = Arc::new(repo);
        Ok(Self {
            catalog,
            ledger,
            history,
            mistake_log,
            settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TextFileRepository>();
    }

    #[tokio::test]
    async fn open_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("progress").join("kid");
        let repo = TextFileRepository::open(&nested, CatalogSource::Embedded)
            .await
            .unwrap();
        assert!(repo.data_dir().is_dir());
        assert_eq!(repo.file(LEDGER_FILE), nested.join("spelling_progress.txt"));
    }
}
