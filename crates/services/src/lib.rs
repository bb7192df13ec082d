#![forbid(unsafe_code)]

pub mod app_services;
pub mod controller;
pub mod error;
pub mod sessions;
pub mod settings_service;
pub mod state;

pub use spelling_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use controller::{Intent, PracticeController, Transition};
pub use error::{AppServicesError, PersistenceTarget, PersistenceWarning, SessionError};
pub use settings_service::{ResolvedSettings, SettingsService};
pub use state::PracticeState;

pub use sessions::{
    Answer, AnsweredWord, PracticeSession, Screen, SessionAnswerResult, SessionLoopService,
    SessionProgress, SessionState, StatsView, WordPrompt,
};
