use dioxus::prelude::*;

use crate::vm::{MistakeVm, QuizIntent, QuizVm, ResultVm};

#[component]
pub fn ResultView(result: ResultVm) -> Element {
    let mut quiz = use_context::<Signal<QuizVm>>();
    let has_mistakes = !result.mistakes.is_empty();
    let verdict = if result.passed { "result-text pass" } else { "result-text fail" };

    rsx! {
        div { class: "page result-box",
            h2 { "{result.tier_label}" }
            p { class: verdict, "{result.message}" }
            p { class: "result-best", "{result.high_score_label}" }
            if let Some(notice) = result.all_levels_notice {
                p { class: "result-notice", "{notice}" }
            }
            div { class: "result-actions",
                if result.show_retry {
                    button {
                        class: "btn btn-secondary",
                        id: "retry",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = quiz.write().dispatch(QuizIntent::Retry);
                        },
                        "Retry"
                    }
                }
                if result.show_next_level {
                    button {
                        class: "btn btn-primary",
                        id: "nextLevel",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = quiz.write().dispatch(QuizIntent::Advance);
                        },
                        "Next Level"
                    }
                }
                if result.show_complete {
                    button {
                        class: "btn btn-primary",
                        id: "completeBtn",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = quiz.write().dispatch(QuizIntent::CompleteAll);
                        },
                        "Complete"
                    }
                }
            }
            if has_mistakes {
                section { class: "mistakes-section",
                    h3 { "Review your mistakes" }
                    div { id: "mistakesList",
                        for (idx, mistake) in result.mistakes.iter().cloned().enumerate() {
                            Mistake { key: "{idx}", mistake }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Mistake(mistake: MistakeVm) -> Element {
    rsx! {
        div { class: "mistake-item",
            div { class: "mistake-question", "{mistake.question}" }
            div { class: "mistake-answer wrong", "{mistake.your_answer}" }
            div { class: "mistake-answer correct", "{mistake.correct_answer}" }
        }
    }
}
