use spelling_core::model::{MistakeLedger, SessionHistory, WordCatalog};

/// Everything the practice loop reads and updates between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeState {
    catalog: WordCatalog,
    ledger: MistakeLedger,
    history: SessionHistory,
}

impl PracticeState {
    #[must_use]
    pub fn new(catalog: WordCatalog, ledger: MistakeLedger, history: SessionHistory) -> Self {
        Self {
            catalog,
            ledger,
            history,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn ledger(&self) -> &MistakeLedger {
        &self.ledger
    }

    #[must_use]
    pub fn history(&self) -> &SessionHistory {
        &self.history
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut MistakeLedger {
        &mut self.ledger
    }

    pub(crate) fn history_mut(&mut self) -> &mut SessionHistory {
        &mut self.history
    }
}
