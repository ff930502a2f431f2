use crate::model::Question;

/// Record of one submitted answer. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    question_prompt: String,
    choices: Vec<String>,
    user_answer_index: usize,
    correct_answer_index: usize,
    is_correct: bool,
}

impl AnswerRecord {
    /// Grade `user_answer_index` against `question`.
    ///
    /// The caller is responsible for range-checking the index.
    #[must_use]
    pub fn grade(question: &Question, user_answer_index: usize) -> Self {
        Self {
            question_prompt: question.prompt().to_owned(),
            choices: question.choices().to_vec(),
            user_answer_index,
            correct_answer_index: question.correct_index(),
            is_correct: question.is_correct(user_answer_index),
        }
    }

    #[must_use]
    pub fn question_prompt(&self) -> &str {
        &self.question_prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn user_answer_index(&self) -> usize {
        self.user_answer_index
    }

    #[must_use]
    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Text of the choice the user picked.
    #[must_use]
    pub fn chosen_text(&self) -> &str {
        self.choices
            .get(self.user_answer_index)
            .map_or("", String::as_str)
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.choices
            .get(self.correct_answer_index)
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grading_captures_both_choices() {
        let question = Question::new(
            "Which command shows history?",
            vec!["git log".into(), "git show-branch".into(), "git blame".into()],
            0,
        )
        .unwrap();

        let wrong = AnswerRecord::grade(&question, 2);
        assert!(!wrong.is_correct());
        assert_eq!(wrong.chosen_text(), "git blame");
        assert_eq!(wrong.correct_text(), "git log");
        assert_eq!(wrong.question_prompt(), "Which command shows history?");

        let right = AnswerRecord::grade(&question, 0);
        assert!(right.is_correct());
        assert_eq!(right.user_answer_index(), right.correct_answer_index());
    }
}
