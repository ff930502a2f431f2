use quiz_core::model::{HighScoreTable, Tier};
use services::{MistakeView, QuestionView, ResultView};

use crate::vm::Notice;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Home(HomeVm),
    Question(QuestionVm),
    Result(ResultVm),
}

//
// ─── HOME ──────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TierCardVm {
    pub tier: Tier,
    pub id: &'static str,
    pub label: &'static str,
    pub high_score_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub cards: Vec<TierCardVm>,
}

#[must_use]
pub fn map_home(high_scores: &HighScoreTable) -> HomeVm {
    HomeVm {
        cards: high_scores
            .iter()
            .map(|(tier, best)| TierCardVm {
                tier,
                id: tier.as_str(),
                label: tier.label(),
                high_score_label: format!("{best}%"),
            })
            .collect(),
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub index: usize,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub tier_label: &'static str,
    pub prompt: String,
    pub choices: Vec<ChoiceVm>,
    pub position_label: String,
    pub live_score_label: String,
    /// Next stays disabled until a choice is picked.
    pub can_submit: bool,
}

#[must_use]
pub fn map_question(view: &QuestionView, selected: Option<usize>) -> QuestionVm {
    let choices = view
        .choices
        .iter()
        .enumerate()
        .map(|(index, text)| ChoiceVm {
            index,
            text: text.clone(),
            selected: selected == Some(index),
        })
        .collect();

    QuestionVm {
        tier_label: view.tier.label(),
        prompt: view.prompt.clone(),
        choices,
        position_label: format!("Question {} of {}", view.position, view.total),
        live_score_label: format!("{}%", view.live_percent),
        can_submit: selected.is_some(),
    }
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MistakeVm {
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
}

impl From<&MistakeView> for MistakeVm {
    fn from(mistake: &MistakeView) -> Self {
        Self {
            question: format!("Q: {}", mistake.prompt),
            your_answer: format!("Your answer: {}", mistake.chosen),
            correct_answer: format!("Correct answer: {}", mistake.correct),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub tier_label: &'static str,
    pub message: String,
    pub passed: bool,
    pub high_score_label: String,
    pub show_retry: bool,
    pub show_next_level: bool,
    pub show_complete: bool,
    pub all_levels_notice: Option<&'static str>,
    pub mistakes: Vec<MistakeVm>,
}

#[must_use]
pub fn map_result(view: &ResultView, notice: Option<Notice>) -> ResultVm {
    let all_levels_notice = notice.map(Notice::message);
    ResultVm {
        tier_label: view.tier.label(),
        message: view.classification.message(view.percent),
        passed: view.classification.is_pass(),
        high_score_label: format!("Best: {}%", view.high_score),
        show_retry: view.actions.retry,
        show_next_level: view.actions.next_tier,
        // Once every level is done the only way out is the completion action.
        show_complete: view.actions.complete_all || all_levels_notice.is_some(),
        all_levels_notice,
        mistakes: view.mistakes.iter().map(MistakeVm::from).collect(),
    }
}
