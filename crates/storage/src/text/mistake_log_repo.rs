use async_trait::async_trait;
use spelling_core::model::MistakeNote;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use super::format::{parse_mistake_log, render_mistake_line};
use super::{MISTAKE_LOG_FILE, TextFileRepository, read_optional};
use crate::repository::{MistakeLogRepository, StorageError};

#[async_trait]
impl MistakeLogRepository for TextFileRepository {
    async fn append_note(&self, note: &MistakeNote) -> Result<(), StorageError> {
        let path = self.file(MISTAKE_LOG_FILE);
        let io_err = |err: std::io::Error| StorageError::Io(format!("{}: {err}", path.display()));

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(io_err)?;
        file.write_all(render_mistake_line(note).as_bytes())
            .await
            .map_err(io_err)?;
        file.flush().await.map_err(io_err)
    }

    async fn load_notes(&self) -> Result<Vec<MistakeNote>, StorageError> {
        let text = read_optional(&self.file(MISTAKE_LOG_FILE)).await?;
        Ok(text.map(|text| parse_mistake_log(&text)).unwrap_or_default())
    }
}
