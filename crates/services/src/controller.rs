use rand::rngs::StdRng;

use spelling_core::model::PracticeSettings;

use crate::error::{PersistenceWarning, SessionError};
use crate::sessions::{
    Answer, PracticeSession, Screen, SessionLoopService, StatsView, WordPrompt,
};
use crate::state::PracticeState;

/// A user action routed to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Answered(Answer),
    StartSession,
    ShowStats,
}

/// Outcome of one intent: the screen to show and any non-fatal write failures.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub screen: Screen,
    pub warnings: Vec<PersistenceWarning>,
}

impl Transition {
    fn quiet(screen: Screen) -> Self {
        Self {
            screen,
            warnings: Vec::new(),
        }
    }
}

/// Owns the practice state and the running session; the single place they change.
pub struct PracticeController {
    loop_service: SessionLoopService,
    state: PracticeState,
    session: PracticeSession,
    rng: StdRng,
}

impl PracticeController {
    /// Take over `state` and start the first session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no words could be selected.
    pub fn new(
        loop_service: SessionLoopService,
        state: PracticeState,
        mut rng: StdRng,
    ) -> Result<Self, SessionError> {
        let session = loop_service.start_session(&state, &mut rng)?;
        Ok(Self {
            loop_service,
            state,
            session,
            rng,
        })
    }

    #[must_use]
    pub fn state(&self) -> &PracticeState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    #[must_use]
    pub fn settings(&self) -> &PracticeSettings {
        self.loop_service.settings()
    }

    /// Handle one intent to completion.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` when answering a finished session.
    pub async fn dispatch(&mut self, intent: Intent) -> Result<Transition, SessionError> {
        match intent {
            Intent::Answered(answer) => {
                let result = self
                    .loop_service
                    .answer_current(&mut self.state, &mut self.session, answer)
                    .await?;
                let screen = match result.summary {
                    Some(summary) => Screen::Summary(summary),
                    None => self.current_screen()?,
                };
                Ok(Transition {
                    screen,
                    warnings: result.warnings,
                })
            }
            Intent::StartSession => {
                let mut warnings = Vec::new();
                if self.session.is_complete() {
                    // Retry a history write that failed when the session finished.
                    warnings.extend(
                        self.loop_service
                            .finalize_history(&mut self.state, &mut self.session)
                            .await?,
                    );
                }
                self.session = self
                    .loop_service
                    .start_session(&self.state, &mut self.rng)?;
                Ok(Transition {
                    screen: self.current_screen()?,
                    warnings,
                })
            }
            Intent::ShowStats => Ok(Transition::quiet(Screen::Stats(self.stats()))),
        }
    }

    /// The prompt for the current word, or the summary of a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if a finished session cannot be summarized.
    pub fn current_screen(&self) -> Result<Screen, SessionError> {
        let capture = self.settings().capture_mistake_text();
        match WordPrompt::from_session(&self.session, self.state.ledger(), capture) {
            Some(prompt) => Ok(Screen::Prompt(prompt)),
            None => Ok(Screen::Summary(self.session.summary()?)),
        }
    }

    #[must_use]
    pub fn stats(&self) -> StatsView {
        StatsView::build(self.state.ledger(), self.state.catalog())
    }
}
