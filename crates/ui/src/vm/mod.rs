mod quiz_vm;
mod screen_vm;

pub use quiz_vm::{Notice, QuizIntent, QuizVm};
pub use screen_vm::{
    ChoiceVm, HomeVm, MistakeVm, QuestionVm, ResultVm, ScreenVm, TierCardVm, map_home,
    map_question, map_result,
};
