use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use services::{AppServices, PersistenceWarning, PracticeController};
use spelling_core::model::PracticeSettings;
use tokio::sync::Mutex;

/// The controller shared by every view; intents are handled one at a time.
pub type SharedController = Arc<Mutex<PracticeController>>;

#[derive(Clone)]
pub struct AppContext {
    controller: SharedController,
    settings: PracticeSettings,
    startup_warnings: Arc<Vec<PersistenceWarning>>,
    startup_warnings_pending: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        let settings = services.settings();
        let (controller, startup_warnings) = services.into_parts();
        Self {
            controller: Arc::new(Mutex::new(controller)),
            settings,
            startup_warnings_pending: Arc::new(AtomicBool::new(!startup_warnings.is_empty())),
            startup_warnings: Arc::new(startup_warnings),
        }
    }

    #[must_use]
    pub fn controller(&self) -> SharedController {
        Arc::clone(&self.controller)
    }

    #[must_use]
    pub fn settings(&self) -> PracticeSettings {
        self.settings
    }

    /// Startup warnings the first time this is called, nothing afterwards.
    #[must_use]
    pub fn take_startup_warnings(&self) -> Vec<PersistenceWarning> {
        if self.startup_warnings_pending.swap(false, Ordering::AcqRel) {
            self.startup_warnings.as_ref().clone()
        } else {
            Vec::new()
        }
    }
}


/// Build an `AppContext` from bootstrapped services.
#[must_use]
pub fn build_app_context(services: AppServices) -> AppContext {
    AppContext::new(services)
}
