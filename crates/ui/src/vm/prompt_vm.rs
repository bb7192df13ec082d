use services::WordPrompt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptVm {
    pub word: String,
    pub progress_label: String,
    pub score_label: String,
    pub history_label: String,
    pub latest_misspelling_label: Option<String>,
    pub capture_text: bool,
}

impl From<&WordPrompt> for PromptVm {
    fn from(prompt: &WordPrompt) -> Self {
        let history_label = if prompt.previous_mistakes > 0 {
            format!(
                "This word was misspelled {} time(s) before",
                prompt.previous_mistakes
            )
        } else {
            "First time practicing this word".to_string()
        };

        Self {
            word: prompt.word.to_string(),
            progress_label: format!("Word {} of {}", prompt.position, prompt.total),
            score_label: format!(
                "Session: Correct: {} | Wrong: {}",
                prompt.correct, prompt.wrong
            ),
            history_label,
            latest_misspelling_label: prompt
                .latest_misspelling
                .as_ref()
                .map(|typed| format!("Last time you wrote: {typed}")),
            capture_text: prompt.capture_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spelling_core::model::Word;

    fn prompt(previous_mistakes: u32, latest: Option<&str>) -> WordPrompt {
        WordPrompt {
            word: Word::new("necessary").unwrap(),
            position: 3,
            total: 30,
            correct: 1,
            wrong: 1,
            previous_mistakes,
            latest_misspelling: latest.map(str::to_owned),
            capture_text: false,
        }
    }

    #[test]
    fn first_time_word() {
        let vm = PromptVm::from(&prompt(0, None));
        assert_eq!(vm.progress_label, "Word 3 of 30");
        assert_eq!(vm.score_label, "Session: Correct: 1 | Wrong: 1");
        assert_eq!(vm.history_label, "First time practicing this word");
        assert!(vm.latest_misspelling_label.is_none());
    }

    #[test]
    fn previously_missed_word() {
        let vm = PromptVm::from(&prompt(2, Some("neccessary")));
        assert_eq!(vm.history_label, "This word was misspelled 2 time(s) before");
        assert_eq!(
            vm.latest_misspelling_label.as_deref(),
            Some("Last time you wrote: neccessary")
        );
    }
}
