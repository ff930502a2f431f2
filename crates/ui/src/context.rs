use std::sync::Arc;

use question_bank::QuestionBank;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> String;
    fn question_bank(&self) -> Arc<dyn QuestionBank>;
}

#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    bank: Arc<dyn QuestionBank>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app_name: app.app_name(),
            bank: app.question_bank(),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// A fresh quiz loop over the shared question bank, starting idle with empty high scores.
    #[must_use]
    pub fn new_quiz(&self) -> QuizLoopService {
        QuizLoopService::new(Arc::clone(&self.bank))
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
