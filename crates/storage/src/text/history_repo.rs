use async_trait::async_trait;
use spelling_core::model::SessionHistory;

use super::format::{parse_history, render_history};
use super::{HISTORY_FILE, TextFileRepository, read_optional, write_file};
use crate::repository::{HistoryRepository, StorageError};

#[async_trait]
impl HistoryRepository for TextFileRepository {
    async fn load_history(&self, depth: usize) -> Result<SessionHistory, StorageError> {
        let text = read_optional(&self.file(HISTORY_FILE)).await?;
        Ok(match text {
            Some(text) => parse_history(&text, depth),
            None => SessionHistory::new(depth),
        })
    }

    async fn save_history(&self, history: &SessionHistory) -> Result<(), StorageError> {
        // A disabled history never replaces what earlier runs stored.
        if !history.is_enabled() {
            return Ok(());
        }
        write_file(&self.file(HISTORY_FILE), render_history(history)).await
    }
}
