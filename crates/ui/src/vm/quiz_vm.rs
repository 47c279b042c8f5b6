use quiz_core::{AnswerFeedback, GameAction, GameSession};

pub const QUESTION_PROMPT: &str = "Who composed this music?";
pub const AUDIO_ERROR_MESSAGE: &str = "Error loading audio. Please try again.";

/// Intents the quiz screen can raise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(String),
    Check,
    Next,
    Restart,
    AudioFailed,
}

impl QuizIntent {
    #[must_use]
    pub fn into_action(self) -> GameAction {
        match self {
            QuizIntent::Select(composer) => GameAction::SelectOption(composer),
            QuizIntent::Check => GameAction::CheckAnswer,
            QuizIntent::Next => GameAction::NextQuestion,
            QuizIntent::Restart => GameAction::StartNewGame,
            QuizIntent::AudioFailed => GameAction::ReportMediaFailure,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub composer: String,
    pub image_src: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub title_label: String,
    pub is_correct: bool,
    pub verdict_label: String,
    pub fun_fact_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverVm {
    pub final_score_label: String,
}

/// Everything the quiz screen renders, derived from one session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question_label: String,
    /// Items still to come after the one on screen.
    pub remaining_label: String,
    pub score_label: String,
    pub options: Vec<QuizOptionVm>,
    pub audio_src: Option<String>,
    pub audio_error: Option<&'static str>,
    /// Answer is locked in; options stop accepting input.
    pub locked: bool,
    pub can_check: bool,
    pub can_advance: bool,
    pub feedback: Option<FeedbackVm>,
    pub game_over: Option<GameOverVm>,
}

fn map_feedback(feedback: &AnswerFeedback) -> FeedbackVm {
    let verdict_label = if feedback.is_correct {
        "Correct! 🎉".to_string()
    } else {
        format!("Oops! The correct answer was {}.", feedback.correct_composer)
    };
    FeedbackVm {
        title_label: format!("Title: {}", feedback.title),
        is_correct: feedback.is_correct,
        verdict_label,
        fun_fact_label: format!("Fun Fact: {}", feedback.trivia),
    }
}

#[must_use]
pub fn map_quiz(session: &GameSession) -> QuizVm {
    let selected = session.selected_option();
    let options = session
        .options()
        .iter()
        .map(|opt| QuizOptionVm {
            composer: opt.composer().to_string(),
            image_src: opt.image().to_src(),
            selected: selected == Some(opt.composer()),
        })
        .collect();

    let total = session.catalog().len();
    let (question_label, remaining_label) = if session.question_number() == 0 {
        (String::new(), String::new())
    } else {
        (
            format!("Question {} of {total}", session.question_number()),
            format!("{} left", session.remaining()),
        )
    };

    let audio_src = session.current_item().map(|item| item.audio().to_src());
    let audio_error = (audio_src.is_some() && session.is_media_unavailable())
        .then_some(AUDIO_ERROR_MESSAGE);

    let game_over = session.is_game_over().then(|| GameOverVm {
        final_score_label: format!("Your final score: {}", session.score_line()),
    });

    QuizVm {
        question_label,
        remaining_label,
        score_label: format!("Score: {}", session.score_line()),
        options,
        audio_src,
        audio_error,
        locked: session.is_answer_checked() || session.is_game_over(),
        can_check: session.can_check(),
        can_advance: session.can_advance(),
        feedback: session.feedback().as_ref().map(map_feedback),
        game_over,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;
    use storage::{BuiltinCatalog, CatalogSource};

    fn started() -> (GameSession, StdRng) {
        let catalog = Arc::new(BuiltinCatalog.load().unwrap());
        let mut rng = StdRng::seed_from_u64(21);
        (GameSession::new(catalog).start_new_game(&mut rng), rng)
    }

    #[test]
    fn fresh_question_shows_options_without_feedback() {
        let (session, _) = started();
        let vm = map_quiz(&session);

        assert_eq!(vm.question_label, "Question 1 of 5");
        assert_eq!(vm.remaining_label, "4 left");
        assert_eq!(vm.score_label, "Score: 0/0");
        assert_eq!(vm.options.len(), 5);
        assert!(vm.options.iter().all(|opt| !opt.selected));
        assert!(vm.audio_src.is_some());
        assert!(vm.audio_error.is_none());
        assert!(!vm.can_check);
        assert!(!vm.can_advance);
        assert!(!vm.locked);
        assert!(vm.feedback.is_none());
        assert!(vm.game_over.is_none());
    }

    #[test]
    fn selection_is_highlighted_and_enables_check() {
        let (session, _) = started();
        let composer = session.options()[1].composer().to_owned();
        let vm = map_quiz(&session.select_option(&composer));

        assert!(vm.options[1].selected);
        assert_eq!(vm.options.iter().filter(|opt| opt.selected).count(), 1);
        assert!(vm.can_check);
    }

    #[test]
    fn wrong_answer_feedback_names_the_composer() {
        let (session, _) = started();
        let item = session.current_item().unwrap().clone();
        let wrong = session
            .options()
            .iter()
            .find(|opt| opt.composer() != item.composer())
            .unwrap()
            .composer()
            .to_owned();
        let vm = map_quiz(&session.select_option(&wrong).check_answer());

        let feedback = vm.feedback.unwrap();
        assert!(!feedback.is_correct);
        assert_eq!(
            feedback.verdict_label,
            format!("Oops! The correct answer was {}.", item.composer())
        );
        assert_eq!(feedback.title_label, format!("Title: {}", item.title()));
        assert_eq!(feedback.fun_fact_label, format!("Fun Fact: {}", item.trivia()));
        assert_eq!(vm.score_label, "Score: 0/1");
        assert!(vm.locked);
        assert!(vm.can_advance);
    }

    #[test]
    fn media_failure_swaps_player_for_message() {
        let (session, _) = started();
        let vm = map_quiz(&session.report_media_failure());
        assert_eq!(vm.audio_error, Some(AUDIO_ERROR_MESSAGE));
    }

    #[test]
    fn game_over_reports_final_score() {
        let (mut session, mut rng) = started();
        while !session.is_game_over() {
            let composer = session.current_item().unwrap().composer().to_owned();
            session = session
                .select_option(&composer)
                .check_answer()
                .next_question(&mut rng);
        }
        let vm = map_quiz(&session);
        assert_eq!(vm.remaining_label, "0 left");
        assert_eq!(vm.game_over.unwrap().final_score_label, "Your final score: 5/5");
        assert!(!vm.can_advance);
        assert!(vm.locked);
    }

    #[test]
    fn remaining_counts_down_each_question() {
        let (mut session, mut rng) = started();
        for expected in ["4 left", "3 left", "2 left"] {
            assert_eq!(map_quiz(&session).remaining_label, expected);
            let composer = session.current_item().unwrap().composer().to_owned();
            session = session
                .select_option(&composer)
                .check_answer()
                .next_question(&mut rng);
        }
    }

    #[test]
    fn not_started_session_has_no_progress_labels() {
        let catalog = Arc::new(BuiltinCatalog.load().unwrap());
        let vm = map_quiz(&GameSession::new(catalog));
        assert!(vm.question_label.is_empty());
        assert!(vm.remaining_label.is_empty());
    }

    #[test]
    fn intents_map_to_actions() {
        assert_eq!(
            QuizIntent::Select("Bach".into()).into_action(),
            GameAction::SelectOption("Bach".into())
        );
        assert_eq!(QuizIntent::Restart.into_action(), GameAction::StartNewGame);
        assert_eq!(
            QuizIntent::AudioFailed.into_action(),
            GameAction::ReportMediaFailure
        );
    }
}
