use dioxus::prelude::*;
use services::{Intent, Screen};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::StatsVm;

#[component]
pub fn StatisticsView() -> Element {
    let ctx = use_context::<AppContext>();
    let controller = ctx.controller();
    let settings = ctx.settings();

    let resource = use_resource(move || {
        let controller = controller.clone();
        async move {
            let transition = controller
                .lock()
                .await
                .dispatch(Intent::ShowStats)
                .await
                .map_err(|err| ViewError::from(&err))?;
            match transition.screen {
                Screen::Stats(stats) => Ok(StatsVm::from(&stats)),
                _ => Err(ViewError::Unknown),
            }
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page stats",
            h2 { "Spelling Statistics" }
            p { class: "settings-line",
                "Session length {settings.session_length()}, boost x{settings.boost_factor()}, avoiding the last {settings.history_depth()} session(s)"
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(stats) => rsx! {
                    StatsTable { stats }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatsTableProps {
    pub stats: StatsVm,
}

#[allow(non_snake_case)]
pub fn StatsTable(props: StatsTableProps) -> Element {
    let stats = props.stats;
    if stats.rows.is_empty() {
        return rsx! {
            p { class: "empty", "No mistakes recorded yet." }
        };
    }

    rsx! {
        p { class: "headline", "{stats.headline}" }
        table { class: "stats-table",
            thead {
                tr {
                    th { "Word" }
                    th { "Times Wrong" }
                    th { "Latest misspelling" }
                }
            }
            tbody {
                for row in stats.rows.iter() {
                    tr { key: "{row.word}",
                        td { "{row.word}" }
                        td { "{row.wrong_count}" }
                        td { "{row.latest_misspelling}" }
                    }
                }
            }
        }
    }
}
