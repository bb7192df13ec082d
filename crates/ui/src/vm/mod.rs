mod prompt_vm;
mod stats_vm;
mod summary_vm;
mod time_fmt;

pub use prompt_vm::PromptVm;
pub use stats_vm::{StatRowVm, StatsVm};
pub use summary_vm::SummaryVm;

use services::Screen;

/// What the practice page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Prompt(PromptVm),
    Summary(SummaryVm),
    Stats(StatsVm),
}

impl From<&Screen> for ScreenVm {
    fn from(screen: &Screen) -> Self {
        match screen {
            Screen::Prompt(prompt) => ScreenVm::Prompt(PromptVm::from(prompt)),
            Screen::Summary(summary) => ScreenVm::Summary(SummaryVm::from(summary)),
            Screen::Stats(stats) => ScreenVm::Stats(StatsVm::from(stats)),
        }
    }
}
