use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use question_bank::{InMemoryQuestionBank, QuestionBank};
use quiz_core::model::{Question, TierTable};

use crate::context::{UiApp, build_app_context};
use crate::views::Screen;
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone)]
struct TestApp {
    bank: Arc<dyn QuestionBank>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> String {
        "Git Quiz".to_string()
    }

    fn question_bank(&self) -> Arc<dyn QuestionBank> {
        Arc::clone(&self.bank)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    intents: Vec<QuizIntent>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let intents = props.intents.clone();
    let quiz = use_signal(move || {
        let mut vm = QuizVm::new(ctx.new_quiz());
        for intent in intents {
            let _ = vm.dispatch(intent);
        }
        vm
    });
    use_context_provider(|| quiz);
    rsx! { Screen {} }
}

/// Three questions per tier; choice 0 is always right.
pub fn test_bank() -> Arc<dyn QuestionBank> {
    let sets = TierTable::from_fn(|tier| {
        (1..=3)
            .map(|i| {
                Question::new(
                    format!("{} question {i}", tier.label()),
                    vec![format!("right {i}"), format!("wrong {i}")],
                    0,
                )
                .expect("valid question")
            })
            .collect()
    });
    Arc::new(InMemoryQuestionBank::new(sets).expect("non-empty bank"))
}

/// Render the screen after replaying `intents` against a fresh quiz.
pub fn render_after(intents: Vec<QuizIntent>) -> String {
    let app = Arc::new(TestApp { bank: test_bank() });
    let mut dom = VirtualDom::new_with_props(ViewHarness, ViewHarnessProps { app, intents });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}
