use async_trait::async_trait;
use spelling_core::model::SettingsDraft;

use super::{SETTINGS_FILE, TextFileRepository, read_optional};
use crate::repository::{SettingsRepository, StorageError};

#[async_trait]
impl SettingsRepository for TextFileRepository {
    async fn load_settings(&self) -> Result<Option<SettingsDraft>, StorageError> {
        let Some(text) = read_optional(&self.file(SETTINGS_FILE)).await? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|err| StorageError::Serialization(format!("{SETTINGS_FILE}: {err}")))
    }
}
