use dioxus::prelude::*;

use crate::vm::{ChoiceVm, QuestionVm, QuizIntent, QuizVm};

#[component]
pub fn QuizView(question: QuestionVm) -> Element {
    let mut quiz = use_context::<Signal<QuizVm>>();

    rsx! {
        div { class: "page quiz-box",
            div { class: "quiz-header",
                span { class: "level-name", "{question.tier_label}" }
                span { class: "live-score", id: "liveScore", "{question.live_score_label}" }
            }
            p { class: "question-text", "{question.prompt}" }
            div { class: "choices",
                for choice in question.choices.iter().cloned() {
                    Choice { key: "{choice.index}", choice }
                }
            }
            footer { class: "quiz-footer",
                span { class: "question-num", "{question.position_label}" }
                button {
                    class: "btn btn-primary",
                    id: "nextQuestion",
                    r#type: "button",
                    disabled: !question.can_submit,
                    onclick: move |_| {
                        let _ = quiz.write().dispatch(QuizIntent::Next);
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
fn Choice(choice: ChoiceVm) -> Element {
    let mut quiz = use_context::<Signal<QuizVm>>();
    let index = choice.index;

    rsx! {
        label { class: "choice",
            input {
                r#type: "radio",
                name: "choice",
                value: "{index}",
                checked: choice.selected,
                onchange: move |_| {
                    let _ = quiz.write().dispatch(QuizIntent::Select(index));
                },
            }
            " {choice.text}"
        }
    }
}
