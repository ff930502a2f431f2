use quiz_core::model::Tier;

use super::test_harness::render_after;
use crate::vm::QuizIntent;

fn answer(index: usize) -> [QuizIntent; 2] {
    [QuizIntent::Select(index), QuizIntent::Next]
}

#[test]
fn home_view_lists_every_tier() {
    let html = render_after(Vec::new());
    for label in ["EASY", "INTERMEDIATE", "HARD", "EXPERT"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("0%"), "missing high score in {html}");
    assert!(!html.contains("homeBtn"), "home button shown on home screen: {html}");
}

#[test]
fn quiz_view_renders_first_question() {
    let html = render_after(vec![QuizIntent::StartTier(Tier::Intermediate)]);
    assert!(html.contains("INTERMEDIATE question 1"), "missing prompt in {html}");
    assert!(html.contains("Question 1 of 3"), "missing position in {html}");
    assert!(html.contains("right 1"), "missing choice in {html}");
    assert!(html.contains("disabled"), "next should start disabled: {html}");
}

#[test]
fn quiz_view_shows_live_score_over_total() {
    let mut intents = vec![QuizIntent::StartTier(Tier::Easy)];
    intents.extend(answer(0));
    let html = render_after(intents);
    assert!(html.contains("Question 2 of 3"), "missing position in {html}");
    assert!(html.contains("33%"), "missing live score in {html}");
}

#[test]
fn result_view_lists_mistakes_and_retry() {
    let mut intents = vec![QuizIntent::StartTier(Tier::Easy)];
    intents.extend(answer(0));
    intents.extend(answer(1));
    intents.extend(answer(0));
    let html = render_after(intents);

    assert!(html.contains("You scored 67%"), "missing message in {html}");
    assert!(html.contains("result-text fail"), "close result styled as a pass: {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Next Level"), "unexpected next level in {html}");
    assert!(html.contains("Your answer: wrong 2"), "missing mistake in {html}");
    assert!(html.contains("Correct answer: right 2"), "missing correction in {html}");
}

#[test]
fn expert_pass_renders_legend_and_complete() {
    let mut intents = vec![QuizIntent::StartTier(Tier::Expert)];
    for _ in 0..3 {
        intents.extend(answer(0));
    }
    let html = render_after(intents);

    assert!(html.contains("Git Legend"), "missing legendary message in {html}");
    assert!(html.contains("result-text pass"), "legendary result not styled as a pass: {html}");
    assert!(html.contains("Complete"), "missing complete action in {html}");
    assert!(!html.contains("Retry"), "unexpected retry in {html}");
    assert!(!html.contains("mistakes-section"), "unexpected mistakes in {html}");
}

#[test]
fn home_after_perfect_run_shows_high_score() {
    let mut intents = vec![QuizIntent::StartTier(Tier::Hard)];
    for _ in 0..3 {
        intents.extend(answer(0));
    }
    intents.push(QuizIntent::Home);
    let html = render_after(intents);
    assert!(html.contains("100%"), "missing high score in {html}");
}
