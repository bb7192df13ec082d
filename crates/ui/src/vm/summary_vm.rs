use spelling_core::model::{SessionSummary, Word};

use crate::vm::time_fmt::format_duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub total: u32,
    pub correct: u32,
    pub wrong: u32,
    pub accuracy_label: String,
    pub duration_label: String,
    pub missed: Vec<String>,
}

impl SummaryVm {
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.missed.is_empty()
    }
}

impl From<&SessionSummary> for SummaryVm {
    fn from(summary: &SessionSummary) -> Self {
        Self {
            total: summary.total(),
            correct: summary.correct(),
            wrong: summary.wrong(),
            accuracy_label: summary.accuracy_label(),
            duration_label: format_duration(summary.completed_at() - summary.started_at()),
            missed: summary.missed().iter().map(Word::to_string).collect(),
        }
    }
}
