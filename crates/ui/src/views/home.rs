use dioxus::prelude::*;

use crate::vm::{HomeVm, QuizIntent, QuizVm, TierCardVm};

#[component]
pub fn HomeView(home: HomeVm) -> Element {
    rsx! {
        div { class: "page",
            h2 { "Choose a level" }
            div { class: "levels-cards",
                for card in home.cards.iter().cloned() {
                    TierCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
fn TierCard(card: TierCardVm) -> Element {
    let mut quiz = use_context::<Signal<QuizVm>>();
    let tier = card.tier;

    rsx! {
        button {
            class: "level-card",
            id: "{card.id}",
            r#type: "button",
            onclick: move |_| {
                let _ = quiz.write().dispatch(QuizIntent::StartTier(tier));
            },
            h3 { "{card.label}" }
            p { class: "high-score",
                "High score: "
                span { "{card.high_score_label}" }
            }
        }
    }
}
