use std::sync::Arc;

use question_bank::{InMemoryQuestionBank, QuestionBank};
use quiz_core::Classification;
use quiz_core::model::Tier;
use services::{QuizLoopService, QuizPhase, QuizSnapshot};

#[test]
fn bundled_easy_tier_runs_to_result() {
    let bank = Arc::new(InMemoryQuestionBank::bundled().unwrap());
    let answers: Vec<usize> = bank
        .questions(Tier::Easy)
        .iter()
        .enumerate()
        .map(|(i, q)| {
            if i % 2 == 0 {
                q.correct_index()
            } else {
                (q.correct_index() + 1) % q.choices().len()
            }
        })
        .collect();
    let total = answers.len();
    let correct = answers.iter().enumerate().filter(|(i, _)| i % 2 == 0).count();

    let mut svc = QuizLoopService::new(bank);
    svc.start_tier(Tier::Easy).unwrap();
    for pick in &answers {
        assert_eq!(svc.phase(), QuizPhase::InProgress);
        svc.submit_answer(*pick).unwrap();
    }

    let QuizSnapshot::Complete(result) = svc.snapshot() else {
        panic!("expected a completed attempt");
    };
    let expected = quiz_core::percent_of(correct, total);
    assert_eq!(result.percent, expected);
    assert_eq!(result.mistakes.len(), total - correct);
    assert_eq!(result.high_score, expected);
    assert_eq!(result.classification, quiz_core::classify(Tier::Easy, expected));
    if expected < 80 {
        assert!(result.actions.retry);
        assert_ne!(result.classification, Classification::Passed);
    }
}
