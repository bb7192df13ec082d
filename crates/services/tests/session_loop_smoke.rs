use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{
    Answer, AppServices, AppServicesError, Clock, Intent, PersistenceTarget, Screen,
};
use spelling_core::model::{MistakeLedger, SettingsDraft, Word, WordCatalog};
use spelling_core::time::fixed_now;
use storage::repository::{
    HistoryRepository, InMemoryRepository, LedgerRepository, Storage, StorageError,
};

fn catalog(raw: &[&str]) -> WordCatalog {
    WordCatalog::new(raw.iter().map(|w| Word::new(w).unwrap()).collect()).unwrap()
}

fn length(n: u32) -> SettingsDraft {
    SettingsDraft {
        session_length: Some(n),
        ..SettingsDraft::default()
    }
}

async fn boot(storage: &Storage, overrides: SettingsDraft, seed: u64) -> AppServices {
    AppServices::bootstrap_with_rng(
        storage,
        overrides,
        Clock::fixed(fixed_now()),
        StdRng::seed_from_u64(seed),
    )
    .await
    .unwrap()
}

struct FailingLedger;

#[async_trait]
impl LedgerRepository for FailingLedger {
    async fn load_ledger(&self) -> Result<MistakeLedger, StorageError> {
        Ok(MistakeLedger::new())
    }

    async fn save_ledger(&self, _ledger: &MistakeLedger) -> Result<(), StorageError> {
        Err(StorageError::Io("disk full".into()))
    }
}

#[tokio::test]
async fn full_session_persists_ledger_and_history() {
    let repo = InMemoryRepository::with_catalog(catalog(&["a", "b", "c", "d", "e", "f"]));
    let storage = Storage::from_in_memory(repo.clone());
    let mut controller = boot(&storage, length(3), 7).await.into_controller();

    let mut wrong_words = Vec::new();
    let mut answers = [Answer::wrong(), Answer::Correct, Answer::wrong()].into_iter();
    let summary = loop {
        let Screen::Prompt(prompt) = controller.current_screen().unwrap() else {
            panic!("expected prompt");
        };
        let answer = answers.next().unwrap();
        if answer == Answer::wrong() {
            wrong_words.push(prompt.word.clone());
        }
        let transition = controller.dispatch(Intent::Answered(answer)).await.unwrap();
        assert!(transition.warnings.is_empty());
        if let Screen::Summary(summary) = transition.screen {
            break summary;
        }
    };

    assert_eq!(summary.total(), 3);
    assert_eq!(summary.accuracy_label(), "33.3%");
    assert_eq!(summary.missed(), wrong_words.as_slice());

    let stored = repo.load_ledger().await.unwrap();
    for word in &wrong_words {
        assert_eq!(stored.count(word.as_str()), 1);
    }
    let history = repo.load_history(2).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(
        history.sessions().next().unwrap(),
        controller.session().words()
    );
}

#[tokio::test]
async fn five_word_catalog_yields_all_words() {
    let repo = InMemoryRepository::with_catalog(catalog(&["a", "b", "c", "d", "e"]));
    repo.save_ledger(&MistakeLedger::from_counts([(Word::new("b").unwrap(), 3)]))
        .await
        .unwrap();
    let storage = Storage::from_in_memory(repo);
    let services = boot(&storage, length(5), 11).await;

    let mut words: Vec<&str> = services
        .controller()
        .session()
        .words()
        .iter()
        .map(Word::as_str)
        .collect();
    words.sort_unstable();
    assert_eq!(words, vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn failed_ledger_write_is_a_warning() {
    let mut storage = Storage::from_in_memory(InMemoryRepository::with_catalog(catalog(&[
        "said", "were", "once",
    ])));
    storage.ledger = Arc::new(FailingLedger);
    let mut controller = boot(&storage, length(3), 3).await.into_controller();
    let word = controller.session().current_word().unwrap().clone();

    let transition = controller
        .dispatch(Intent::Answered(Answer::wrong()))
        .await
        .unwrap();

    assert_eq!(transition.warnings.len(), 1);
    assert_eq!(transition.warnings[0].target, PersistenceTarget::Ledger);
    assert_eq!(controller.state().ledger().count(word.as_str()), 1);
    assert!(matches!(transition.screen, Screen::Prompt(_)));
}

#[tokio::test]
async fn empty_catalog_is_fatal() {
    struct NoWords;

    #[async_trait]
    impl storage::repository::CatalogRepository for NoWords {
        async fn load_catalog(&self) -> Result<WordCatalog, StorageError> {
            Err(StorageError::Catalog(
                spelling_core::model::CatalogError::Empty,
            ))
        }
    }

    let mut storage = Storage::in_memory();
    storage.catalog = Arc::new(NoWords);
    let err = AppServices::bootstrap(&storage, SettingsDraft::default(), Clock::default())
        .await
        .err()
        .unwrap();
    assert!(matches!(err, AppServicesError::Catalog(_)));
}

#[tokio::test]
async fn invalid_settings_are_fatal() {
    let err = AppServices::bootstrap(
        &Storage::in_memory(),
        SettingsDraft {
            boost_factor: Some(0),
            ..SettingsDraft::default()
        },
        Clock::default(),
    )
    .await
    .err()
    .unwrap();
    assert!(matches!(err, AppServicesError::Settings(_)));
}

#[tokio::test]
async fn stored_notes_are_replayed_on_startup() {
    use spelling_core::model::MistakeNote;
    use storage::repository::MistakeLogRepository;

    let repo = InMemoryRepository::with_catalog(catalog(&["said", "were"]));
    let said = Word::new("said").unwrap();
    repo.save_ledger(&MistakeLedger::from_counts([(said.clone(), 2)]))
        .await
        .unwrap();
    repo.append_note(&MistakeNote::new(said.clone(), "sed", fixed_now()))
        .await
        .unwrap();
    let storage = Storage::from_in_memory(repo);

    let services = boot(&storage, length(2), 5).await;
    let stats = services.controller().stats();
    assert_eq!(stats.rows[0].word, said);
    assert_eq!(stats.rows[0].wrong_count, 2);
    assert_eq!(stats.rows[0].latest_misspelling.as_deref(), Some("sed"));
}

#[derive(Default)]
struct CountingHistory {
    saves: std::sync::atomic::AtomicUsize,
}

#[async_trait]
impl HistoryRepository for CountingHistory {
    async fn load_history(
        &self,
        depth: usize,
    ) -> Result<spelling_core::model::SessionHistory, StorageError> {
        Ok(spelling_core::model::SessionHistory::new(depth))
    }

    async fn save_history(
        &self,
        _history: &spelling_core::model::SessionHistory,
    ) -> Result<(), StorageError> {
        self.saves
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Ok(())
    }
}

async fn finish_session(controller: &mut services::PracticeController) {
    loop {
        let transition = controller
            .dispatch(Intent::Answered(Answer::Correct))
            .await
            .unwrap();
        assert!(transition.warnings.is_empty());
        if matches!(transition.screen, Screen::Summary(_)) {
            break;
        }
    }
}

fn no_history(n: u32) -> SettingsDraft {
    SettingsDraft {
        history_depth: Some(0),
        ..length(n)
    }
}

#[tokio::test]
async fn disabled_history_is_never_written() {
    let history = Arc::new(CountingHistory::default());
    let mut storage = Storage::from_in_memory(InMemoryRepository::with_catalog(catalog(&[
        "said", "were", "once",
    ])));
    storage.history = history.clone();
    let mut controller = boot(&storage, no_history(3), 2).await.into_controller();

    finish_session(&mut controller).await;
    controller.dispatch(Intent::StartSession).await.unwrap();

    assert_eq!(
        history.saves.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
    assert!(controller.state().history().is_empty());
}

#[tokio::test]
async fn disabled_history_keeps_sessions_from_earlier_runs() {
    let repo = InMemoryRepository::with_catalog(catalog(&["said", "were", "once", "they"]));
    let mut earlier = spelling_core::model::SessionHistory::new(2);
    earlier.record(vec![Word::new("said").unwrap()]);
    earlier.record(vec![Word::new("were").unwrap()]);
    repo.save_history(&earlier).await.unwrap();
    let storage = Storage::from_in_memory(repo.clone());

    let mut controller = boot(&storage, no_history(3), 8).await.into_controller();
    finish_session(&mut controller).await;

    assert_eq!(repo.load_history(2).await.unwrap(), earlier);
}

#[tokio::test]
async fn disabled_history_leaves_history_file_untouched() {
    use storage::CatalogSource;
    use storage::text::HISTORY_FILE;

    let dir = tempfile::tempdir().unwrap();
    let words = dir.path().join("words.txt");
    std::fs::write(&words, "said\nwere\nonce\n").unwrap();
    let history_path = dir.path().join(HISTORY_FILE);
    std::fs::write(&history_path, "said,were\nonce\n").unwrap();

    let storage = Storage::text_files(dir.path(), CatalogSource::WordList(words))
        .await
        .unwrap();
    let mut controller = boot(&storage, no_history(3), 4).await.into_controller();
    finish_session(&mut controller).await;

    assert_eq!(
        std::fs::read_to_string(&history_path).unwrap(),
        "said,were\nonce\n"
    );
}
