use services::StatsView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRowVm {
    pub word: String,
    pub wrong_count: u32,
    pub latest_misspelling: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsVm {
    pub rows: Vec<StatRowVm>,
    pub headline: String,
}

impl From<&StatsView> for StatsVm {
    fn from(view: &StatsView) -> Self {
        let rows = view
            .rows
            .iter()
            .map(|row| StatRowVm {
                word: row.word.to_string(),
                wrong_count: row.wrong_count,
                latest_misspelling: row
                    .latest_misspelling
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
            })
            .collect();

        Self {
            rows,
            headline: format!(
                "{} mistakes across {} words",
                view.total_mistakes(),
                view.words_with_mistakes()
            ),
        }
    }
}
