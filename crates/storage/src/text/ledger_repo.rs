use async_trait::async_trait;
use spelling_core::model::MistakeLedger;

use super::format::{parse_ledger, render_ledger};
use super::{LEDGER_FILE, TextFileRepository, read_optional, write_file};
use crate::repository::{LedgerRepository, StorageError};

#[async_trait]
impl LedgerRepository for TextFileRepository {
    async fn load_ledger(&self) -> Result<MistakeLedger, StorageError> {
        let text = read_optional(&self.file(LEDGER_FILE)).await?;
        Ok(text.map(|text| parse_ledger(&text)).unwrap_or_default())
    }

    async fn save_ledger(&self, ledger: &MistakeLedger) -> Result<(), StorageError> {
        write_file(&self.file(LEDGER_FILE), render_ledger(ledger)).await
    }
}
