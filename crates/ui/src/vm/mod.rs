mod quiz_vm;

pub use quiz_vm::{
    AUDIO_ERROR_MESSAGE, FeedbackVm, GameOverVm, QUESTION_PROMPT, QuizIntent, QuizOptionVm,
    QuizVm, map_quiz,
};
