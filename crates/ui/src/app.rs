use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::Screen;
use crate::vm::QuizVm;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let title = ctx.app_name().to_string();
    let quiz = use_signal(|| QuizVm::new(ctx.new_quiz()));
    use_context_provider(|| quiz);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{title}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Screen {}
            }
        }
    }
}
