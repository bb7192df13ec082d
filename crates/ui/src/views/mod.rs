mod practice;
mod state;
mod stats;
mod summary;

pub use practice::PracticeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use stats::{StatisticsView, StatsTable, StatsTableProps};
pub use summary::SummaryPanel;
