use dioxus::prelude::*;
use services::{Answer, Intent};

use crate::context::{AppContext, SharedController};
use crate::views::{StatsTable, SummaryPanel, ViewError, ViewState, view_state_from_resource};
use crate::vm::{PromptVm, ScreenVm};

#[derive(Clone, Copy)]
struct PracticeSignals {
    screen: Signal<Option<ScreenVm>>,
    notices: Signal<Vec<String>>,
    busy: Signal<bool>,
    error: Signal<Option<ViewError>>,
}

/// Hand `intent` to the controller unless another one is still running.
fn send_intent(controller: SharedController, mut signals: PracticeSignals, intent: Intent) {
    if *signals.busy.peek() {
        return;
    }
    signals.busy.set(true);

    spawn(async move {
        let result = {
            let mut controller = controller.lock().await;
            controller.dispatch(intent).await
        };
        match result {
            Ok(transition) => {
                signals
                    .notices
                    .set(transition.warnings.iter().map(ToString::to_string).collect());
                signals.screen.set(Some(ScreenVm::from(&transition.screen)));
                signals.error.set(None);
            }
            Err(err) => {
                log::warn!("practice intent failed: {err}");
                signals.error.set(Some(ViewError::from(&err)));
            }
        }
        signals.busy.set(false);
    });
}

fn close_window() {
    dioxus::desktop::window().close();
}

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = PracticeSignals {
        screen: use_signal(|| None),
        notices: use_signal({
            let ctx = ctx.clone();
            move || {
                ctx.take_startup_warnings()
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            }
        }),
        busy: use_signal(|| false),
        error: use_signal(|| None),
    };

    let controller = ctx.controller();
    let resource = use_resource(move || {
        let controller = controller.clone();
        async move {
            let controller = controller.lock().await;
            controller
                .current_screen()
                .map(|screen| ScreenVm::from(&screen))
                .map_err(|err| ViewError::from(&err))
        }
    });

    let state = match signals.screen.read().clone() {
        Some(screen) => ViewState::Ready(screen),
        None => view_state_from_resource(&resource),
    };
    let notices = signals.notices.read().clone();
    let error = *signals.error.read();
    let busy = *signals.busy.read();
    let answer_controller = ctx.controller();
    let restart_controller = ctx.controller();

    rsx! {
        div { class: "page practice",
            for notice in notices {
                p { class: "notice", "{notice}" }
            }
            if let Some(err) = error {
                p { class: "error", "{err.message()}" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(ScreenVm::Prompt(prompt)) => rsx! {
                    PromptPanel {
                        prompt,
                        busy,
                        on_answer: move |answer: Answer| {
                            send_intent(answer_controller.clone(), signals, Intent::Answered(answer));
                        },
                    }
                },
                ViewState::Ready(ScreenVm::Summary(summary)) => rsx! {
                    SummaryPanel {
                        summary,
                        busy,
                        on_new_session: move |()| {
                            send_intent(restart_controller.clone(), signals, Intent::StartSession);
                        },
                        on_exit: move |()| close_window(),
                    }
                },
                ViewState::Ready(ScreenVm::Stats(stats)) => rsx! {
                    StatsTable { stats }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn PromptPanel(prompt: PromptVm, busy: bool, on_answer: EventHandler<Answer>) -> Element {
    let mut typed = use_signal(String::new);

    rsx! {
        section { class: "prompt",
            p { class: "progress", "{prompt.progress_label}" }
            h1 { class: "word", "{prompt.word}" }
            p { class: "word-history", "{prompt.history_label}" }
            if let Some(latest) = prompt.latest_misspelling_label.clone() {
                p { class: "word-latest", "{latest}" }
            }

            if prompt.capture_text {
                input {
                    class: "misspelling",
                    r#type: "text",
                    placeholder: "What did you write? (optional)",
                    value: "{typed}",
                    oninput: move |evt: FormEvent| typed.set(evt.value()),
                }
            }

            div { class: "answer-buttons",
                button {
                    class: "btn correct",
                    disabled: busy,
                    onclick: move |_| {
                        typed.set(String::new());
                        on_answer.call(Answer::Correct);
                    },
                    "Correct"
                }
                button {
                    class: "btn wrong",
                    disabled: busy,
                    onclick: move |_| {
                        let text = typed.read().trim().to_string();
                        typed.set(String::new());
                        let misspelling = (!text.is_empty()).then_some(text);
                        on_answer.call(Answer::Wrong { misspelling });
                    },
                    "Wrong"
                }
            }

            p { class: "score", "{prompt.score_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use dioxus::core::NoOpMutations;
    use dioxus::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use services::{AppServices, Clock};
    use spelling_core::model::{SettingsDraft, Word, WordCatalog};
    use spelling_core::time::fixed_now;
    use storage::repository::{InMemoryRepository, Storage};

    use super::PracticeView;
    use crate::context::{AppContext, build_app_context};

    #[derive(Props, Clone)]
    struct HarnessProps {
        ctx: AppContext,
    }

    impl PartialEq for HarnessProps {
        fn eq(&self, _other: &Self) -> bool {
            true
        }
    }

    #[component]
    fn Harness(props: HarnessProps) -> Element {
        use_context_provider(|| props.ctx.clone());
        rsx! { PracticeView {} }
    }

    async fn drive(dom: &mut VirtualDom) {
        let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work())
            .await;
        dom.render_immediate(&mut NoOpMutations);
        dom.process_events();
    }

    #[tokio::test(flavor = "current_thread")]
    async fn practice_view_smoke_renders_first_prompt() {
        let words = ["said", "were", "once"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let storage = Storage::from_in_memory(InMemoryRepository::with_catalog(
            WordCatalog::new(words).unwrap(),
        ));
        let services = AppServices::bootstrap_with_rng(
            &storage,
            SettingsDraft {
                session_length: Some(3),
                ..SettingsDraft::default()
            },
            Clock::fixed(fixed_now()),
            StdRng::seed_from_u64(1),
        )
        .await
        .unwrap();

        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                ctx: build_app_context(services),
            },
        );
        dom.rebuild_in_place();
        let mut html = dioxus_ssr::render(&dom);
        for _ in 0..5 {
            if html.contains("Word 1 of 3") {
                break;
            }
            drive(&mut dom).await;
            html = dioxus_ssr::render(&dom);
        }

        assert!(html.contains("Word 1 of 3"), "missing progress in {html}");
        assert!(html.contains("First time practicing this word"), "{html}");
        assert!(html.contains("Correct"));
    }
}
