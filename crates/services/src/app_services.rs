use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use spelling_core::model::{MistakeLedger, PracticeSettings, SessionHistory, SettingsDraft};
use storage::repository::Storage;

use crate::Clock;
use crate::controller::PracticeController;
use crate::error::{AppServicesError, PersistenceTarget, PersistenceWarning};
use crate::sessions::SessionLoopService;
use crate::settings_service::SettingsService;
use crate::state::PracticeState;

/// Assembles app-facing services from storage and resolved settings.
pub struct AppServices {
    settings: PracticeSettings,
    controller: PracticeController,
    startup_warnings: Vec<PersistenceWarning>,
}

impl AppServices {
    /// Load everything and start the first session with an OS-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the settings are invalid or no words are available.
    pub async fn bootstrap(
        storage: &Storage,
        overrides: SettingsDraft,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        Self::bootstrap_with_rng(storage, overrides, clock, StdRng::from_os_rng()).await
    }

    /// Same as `bootstrap`, with a caller-provided RNG.
    ///
    /// Unreadable progress files are reported in `startup_warnings` and replaced
    /// by empty data.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the settings are invalid or no words are available.
    pub async fn bootstrap_with_rng(
        storage: &Storage,
        overrides: SettingsDraft,
        clock: Clock,
        rng: StdRng,
    ) -> Result<Self, AppServicesError> {
        let resolved = SettingsService::new(Arc::clone(&storage.settings))
            .resolve(overrides)
            .await?;
        let settings = resolved.settings;
        let mut startup_warnings: Vec<PersistenceWarning> = resolved.warning.into_iter().collect();

        let catalog = storage
            .catalog
            .load_catalog()
            .await
            .map_err(AppServicesError::Catalog)?;
        log::info!("loaded {} words", catalog.len());

        let mut ledger = match storage.ledger.load_ledger().await {
            Ok(ledger) => ledger,
            Err(err) => {
                startup_warnings.push(PersistenceWarning::logged(PersistenceTarget::Ledger, &err));
                MistakeLedger::new()
            }
        };
        match storage.mistake_log.load_notes().await {
            Ok(notes) => ledger.restore_notes(notes),
            Err(err) => startup_warnings.push(PersistenceWarning::logged(
                PersistenceTarget::MistakeLog,
                &err,
            )),
        }

        let depth = usize::try_from(settings.history_depth()).unwrap_or(usize::MAX);
        let history = match storage.history.load_history(depth).await {
            Ok(history) => history,
            Err(err) => {
                startup_warnings
                    .push(PersistenceWarning::logged(PersistenceTarget::History, &err));
                SessionHistory::new(depth)
            }
        };

        let loop_service = SessionLoopService::from_storage(clock, settings, storage);
        let state = PracticeState::new(catalog, ledger, history);
        let controller = PracticeController::new(loop_service, state, rng)?;

        Ok(Self {
            settings,
            controller,
            startup_warnings,
        })
    }

    #[must_use]
    pub fn settings(&self) -> PracticeSettings {
        self.settings
    }

    #[must_use]
    pub fn startup_warnings(&self) -> &[PersistenceWarning] {
        &self.startup_warnings
    }

    #[must_use]
    pub fn controller(&self) -> &PracticeController {
        &self.controller
    }

    #[must_use]
    pub fn into_controller(self) -> PracticeController {
        self.controller
    }

    /// Split into the controller and the startup warnings.
    #[must_use]
    pub fn into_parts(self) -> (PracticeController, Vec<PersistenceWarning>) {
        (self.controller, self.startup_warnings)
    }
}
