use std::sync::Arc;

use spelling_core::model::{PracticeSettings, SettingsDraft, SettingsError};
use storage::repository::SettingsRepository;

use crate::error::{PersistenceTarget, PersistenceWarning};

/// Settings after layering, plus any problem reading the stored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub settings: PracticeSettings,
    pub warning: Option<PersistenceWarning>,
}

#[derive(Clone)]
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    #[must_use]
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Stored draft, or an empty one with a warning if it cannot be read.
    pub async fn load_draft(&self) -> (SettingsDraft, Option<PersistenceWarning>) {
        match self.repo.load_settings().await {
            Ok(draft) => (draft.unwrap_or_default(), None),
            Err(err) => (
                SettingsDraft::default(),
                Some(PersistenceWarning::logged(PersistenceTarget::Settings, &err)),
            ),
        }
    }

    /// Stored settings overlaid with `overrides`, then validated.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the combined values are out of range.
    pub async fn resolve(
        &self,
        overrides: SettingsDraft,
    ) -> Result<ResolvedSettings, SettingsError> {
        let (stored, warning) = self.load_draft().await;
        let settings = stored.overlay(overrides).validate()?;
        Ok(ResolvedSettings { settings, warning })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use storage::repository::{InMemoryRepository, StorageError};

    struct BrokenSettings;

    #[async_trait]
    impl SettingsRepository for BrokenSettings {
        async fn load_settings(&self) -> Result<Option<SettingsDraft>, StorageError> {
            Err(StorageError::Serialization("expected value at line 1".into()))
        }
    }

    #[tokio::test]
    async fn overrides_win_over_stored_values() {
        let repo = InMemoryRepository::new();
        repo.put_settings(SettingsDraft {
            session_length: Some(20),
            boost_factor: Some(4),
            ..SettingsDraft::default()
        })
        .unwrap();
        let svc = SettingsService::new(Arc::new(repo));

        let resolved = svc
            .resolve(SettingsDraft {
                session_length: Some(8),
                ..SettingsDraft::default()
            })
            .await
            .unwrap();
        assert_eq!(resolved.settings.session_length(), 8);
        assert_eq!(resolved.settings.boost_factor(), 4);
        assert!(resolved.warning.is_none());
    }

    #[tokio::test]
    async fn unreadable_settings_fall_back_to_defaults() {
        let svc = SettingsService::new(Arc::new(BrokenSettings));
        let resolved = svc.resolve(SettingsDraft::default()).await.unwrap();
        assert_eq!(resolved.settings, PracticeSettings::default());
        assert_eq!(
            resolved.warning.map(|w| w.target),
            Some(PersistenceTarget::Settings)
        );
    }

    #[tokio::test]
    async fn invalid_override_is_rejected() {
        let svc = SettingsService::new(Arc::new(InMemoryRepository::new()));
        let err = svc
            .resolve(SettingsDraft {
                session_length: Some(0),
                ..SettingsDraft::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err, SettingsError::InvalidSessionLength);
    }
}
