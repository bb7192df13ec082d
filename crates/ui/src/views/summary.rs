use dioxus::prelude::*;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryPanel(
    summary: SummaryVm,
    busy: bool,
    on_new_session: EventHandler<()>,
    on_exit: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "summary",
            h2 { "Session Complete!" }

            dl { class: "summary-figures",
                dt { "Total Words" }
                dd { "{summary.total}" }
                dt { "Correct" }
                dd { class: "correct", "{summary.correct}" }
                dt { "Wrong" }
                dd { class: "wrong", "{summary.wrong}" }
                dt { "Accuracy" }
                dd { "{summary.accuracy_label}" }
                dt { "Time" }
                dd { "{summary.duration_label}" }
            }

            if summary.is_perfect() {
                p { class: "perfect", "Perfect score! All words spelled correctly!" }
            } else {
                h3 { "Words to practice:" }
                ul { class: "missed",
                    for word in summary.missed.iter() {
                        li { "{word}" }
                    }
                }
            }

            div { class: "summary-actions",
                button {
                    class: "btn primary",
                    disabled: busy,
                    onclick: move |_| on_new_session.call(()),
                    "New Session"
                }
                button { class: "btn", onclick: move |_| on_exit.call(()), "Exit" }
            }
        }
    }
}
