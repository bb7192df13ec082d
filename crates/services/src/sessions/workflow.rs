use std::sync::Arc;

use rand::Rng;
use spelling_core::model::{AnswerOutcome, MistakeNote, PracticeSettings, SessionSummary};
use storage::repository::{HistoryRepository, LedgerRepository, MistakeLogRepository, Storage};

use super::plan::SessionBuilder;
use super::service::{AnsweredWord, PracticeSession};
use crate::Clock;
use crate::error::{PersistenceTarget, PersistenceWarning, SessionError};
use crate::state::PracticeState;

/// The user's verdict on a presented word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Correct,
    /// `misspelling` is what the user typed, if they typed anything.
    Wrong { misspelling: Option<String> },
}

impl Answer {
    #[must_use]
    pub fn wrong() -> Self {
        Answer::Wrong { misspelling: None }
    }

    #[must_use]
    pub fn outcome(&self) -> AnswerOutcome {
        match self {
            Answer::Correct => AnswerOutcome::Correct,
            Answer::Wrong { .. } => AnswerOutcome::Wrong,
        }
    }
}

/// Result of answering a single word in a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionAnswerResult {
    pub answered: AnsweredWord,
    pub is_complete: bool,
    pub summary: Option<SessionSummary>,
    pub warnings: Vec<PersistenceWarning>,
}

/// Orchestrates session start and persisted answering.
#[derive(Clone)]
pub struct SessionLoopService {
    clock: Clock,
    settings: PracticeSettings,
    ledger: Arc<dyn LedgerRepository>,
    history: Arc<dyn HistoryRepository>,
    mistake_log: Arc<dyn MistakeLogRepository>,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(
        clock: Clock,
        settings: PracticeSettings,
        ledger: Arc<dyn LedgerRepository>,
        history: Arc<dyn HistoryRepository>,
        mistake_log: Arc<dyn MistakeLogRepository>,
    ) -> Self {
        Self {
            clock,
            settings,
            ledger,
            history,
            mistake_log,
        }
    }

    #[must_use]
    pub fn from_storage(clock: Clock, settings: PracticeSettings, storage: &Storage) -> Self {
        Self::new(
            clock,
            settings,
            Arc::clone(&storage.ledger),
            Arc::clone(&storage.history),
            Arc::clone(&storage.mistake_log),
        )
    }

    #[must_use]
    pub fn settings(&self) -> &PracticeSettings {
        &self.settings
    }

    /// Plan and start a new session from the current state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no words could be selected.
    pub fn start_session<R: Rng>(
        &self,
        state: &PracticeState,
        rng: &mut R,
    ) -> Result<PracticeSession, SessionError> {
        let plan = SessionBuilder::new(&self.settings).build(
            state.catalog(),
            state.ledger(),
            state.history(),
            rng,
        );
        log::info!(
            "starting session with {} words from a pool of {}",
            plan.total(),
            plan.pool_size
        );
        PracticeSession::new(plan.words, self.clock.now())
    }

    /// Answer the current word and persist what changed.
    ///
    /// A wrong answer bumps the word's mistake count and writes the ledger. With text
    /// capture enabled, a non-blank misspelling is kept on the ledger entry and
    /// appended to the mistake log. Completing the session records it in the history.
    /// Write failures come back as warnings; in-memory state is kept either way.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub async fn answer_current(
        &self,
        state: &mut PracticeState,
        session: &mut PracticeSession,
        answer: Answer,
    ) -> Result<SessionAnswerResult, SessionError> {
        let answered_at = self.clock.now();
        let Some(word) = session.current_word().cloned() else {
            return Err(SessionError::Completed);
        };
        let mut warnings = Vec::new();

        if let Answer::Wrong { misspelling } = &answer {
            let count = state.ledger_mut().record_mistake(&word);
            log::debug!("{word} missed, {count} time(s) in total");
            if let Err(err) = self.ledger.save_ledger(state.ledger()).await {
                warnings.push(PersistenceWarning::logged(PersistenceTarget::Ledger, &err));
            }

            let typed = misspelling
                .as_deref()
                .map(str::trim)
                .filter(|typed| self.settings.capture_mistake_text() && !typed.is_empty());
            if let Some(typed) = typed {
                state.ledger_mut().attach_note(&word, typed);
                let note = MistakeNote::new(word.clone(), typed, answered_at);
                if let Err(err) = self.mistake_log.append_note(&note).await {
                    warnings.push(PersistenceWarning::logged(
                        PersistenceTarget::MistakeLog,
                        &err,
                    ));
                }
            }
        }

        let answered = session.record_answer(answer.outcome(), answered_at)?;

        let summary = if session.is_complete() {
            warnings.extend(self.finalize_history(state, session).await?);
            let summary = session.summary()?;
            log::info!(
                "session finished: {} of {} correct ({})",
                summary.correct(),
                summary.total(),
                summary.accuracy_label()
            );
            Some(summary)
        } else {
            None
        };

        Ok(SessionAnswerResult {
            answered,
            is_complete: session.is_complete(),
            summary,
            warnings,
        })
    }

    /// Record a completed session in the history and write it.
    ///
    /// The session's words enter the in-memory history once; calling this again only
    /// retries a write that failed before. With history disabled nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` if the session still has words left.
    pub async fn finalize_history(
        &self,
        state: &mut PracticeState,
        session: &mut PracticeSession,
    ) -> Result<Option<PersistenceWarning>, SessionError> {
        if !session.is_complete() {
            return Err(SessionError::NotComplete);
        }
        if session.history_saved() {
            return Ok(None);
        }
        if !session.history_recorded() {
            state.history_mut().record(session.words().to_vec());
            session.mark_history_recorded();
        }
        if !state.history().is_enabled() {
            session.mark_history_saved();
            return Ok(None);
        }

        match self.history.save_history(state.history()).await {
            Ok(()) => {
                session.mark_history_saved();
                Ok(None)
            }
            Err(err) => Ok(Some(PersistenceWarning::logged(
                PersistenceTarget::History,
                &err,
            ))),
        }
    }
}
