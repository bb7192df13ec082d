mod plan;
mod progress;
mod service;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use plan::{SessionBuilder, SessionPlan};
pub use progress::SessionProgress;
pub use service::{AnsweredWord, PracticeSession, SessionState};
pub use view::{Screen, StatsView, WordPrompt};
pub use workflow::{Answer, SessionAnswerResult, SessionLoopService};
