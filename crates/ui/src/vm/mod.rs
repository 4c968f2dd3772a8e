mod quiz_vm;

pub use quiz_vm::{OptionVm, QuizBoardVm, QuizIntent, QuizVm, load_quiz};
