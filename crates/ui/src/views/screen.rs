use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{HomeView, QuizView, ResultView};
use crate::vm::{QuizIntent, QuizVm, ScreenVm};

/// Picks the screen from the quiz state: idle, in progress or complete.
#[component]
pub fn Screen() -> Element {
    let ctx = use_context::<AppContext>();
    let mut quiz = use_context::<Signal<QuizVm>>();
    let screen = quiz.read().screen();
    let error = quiz.read().error();
    let show_home = !matches!(screen, ScreenVm::Home(_));

    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "{ctx.app_name()}" }
                if show_home {
                    button {
                        class: "btn btn-ghost",
                        id: "homeBtn",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = quiz.write().dispatch(QuizIntent::Home);
                        },
                        "Home"
                    }
                }
            }
            main { class: "content",
                if let Some(err) = error {
                    p { class: "view-error", "{err.message()}" }
                }
                match screen {
                    ScreenVm::Home(home) => rsx! { HomeView { home } },
                    ScreenVm::Question(question) => rsx! { QuizView { question } },
                    ScreenVm::Result(result) => rsx! { ResultView { result } },
                }
            }
        }
    }
}
