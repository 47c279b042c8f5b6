use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::model::{Catalog, ComposerOption, ItemId, QuizItem};
use crate::pool::{self, Draw};

//
// ─── ACTIONS & PHASES ──────────────────────────────────────────────────────────
//

/// User intents relayed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    StartNewGame,
    SelectOption(String),
    CheckAnswer,
    NextQuestion,
    ReportMediaFailure,
}

/// Conceptual state of a session, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    NotStarted,
    AwaitingSelection,
    SelectionMade,
    AnswerChecked,
    GameOver,
}

//
// ─── READ MODELS ───────────────────────────────────────────────────────────────
//

/// Correct answers over checked answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub score: u32,
    pub answered: u32,
}

impl fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.score, self.answered)
    }
}

/// What gets revealed once an answer is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub title: String,
    pub selected: String,
    pub correct_composer: String,
    pub is_correct: bool,
    pub trivia: String,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// State of one play-through.
///
/// Every action consumes the session and returns the next one. Actions that
/// are not valid in the current phase return the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    catalog: Arc<Catalog>,
    used_items: BTreeSet<ItemId>,
    current: Option<ItemId>,
    score: u32,
    questions_answered: u32,
    question_number: u32,
    selected_option: Option<String>,
    answer_checked: bool,
    media_unavailable: bool,
    game_over: bool,
}

impl GameSession {
    /// A session that has not drawn anything yet.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            used_items: BTreeSet::new(),
            current: None,
            score: 0,
            questions_answered: 0,
            question_number: 0,
            selected_option: None,
            answer_checked: false,
            media_unavailable: false,
            game_over: false,
        }
    }

    /// Reset everything and draw the first item.
    ///
    /// An empty catalog yields a finished game with a 0/0 score and no
    /// current item.
    #[must_use]
    pub fn start_new_game<R: Rng>(self, rng: &mut R) -> Self {
        let mut next = Self::new(self.catalog);
        let drawn = match pool::draw(&next.catalog, &next.used_items, rng) {
            Draw::Drawn { id, .. } => Some(id),
            Draw::Exhausted => None,
        };
        match drawn {
            Some(id) => {
                next.used_items.insert(id);
                next.current = Some(id);
                next.question_number = 1;
            }
            None => next.game_over = true,
        }
        next
    }

    /// Choose (or change) the answer for the current item.
    #[must_use]
    pub fn select_option(mut self, composer: &str) -> Self {
        if self.accepts_selection() && self.catalog.has_option(composer) {
            self.selected_option = Some(composer.to_owned());
        }
        self
    }

    /// Lock in the selection and score it.
    #[must_use]
    pub fn check_answer(mut self) -> Self {
        if self.answer_checked || self.game_over {
            return self;
        }
        let Some(selected) = self.selected_option.as_deref() else {
            return self;
        };
        let Some(item) = self.current_item() else {
            return self;
        };

        let correct = selected == item.composer();
        self.answer_checked = true;
        self.questions_answered = self.questions_answered.saturating_add(1);
        if correct {
            self.score = self.score.saturating_add(1);
        }
        self
    }

    /// Advance to a fresh item, or finish the game when none remain.
    #[must_use]
    pub fn next_question<R: Rng>(mut self, rng: &mut R) -> Self {
        if !self.answer_checked || self.game_over {
            return self;
        }
        let drawn = match pool::draw(&self.catalog, &self.used_items, rng) {
            Draw::Drawn { id, .. } => Some(id),
            Draw::Exhausted => None,
        };
        match drawn {
            Some(id) => {
                self.used_items.insert(id);
                self.current = Some(id);
                self.question_number = self.question_number.saturating_add(1);
                self.selected_option = None;
                self.answer_checked = false;
                self.media_unavailable = false;
            }
            None => self.game_over = true,
        }
        self
    }

    /// Mark the current clip as unplayable. Scoring is unaffected.
    #[must_use]
    pub fn report_media_failure(mut self) -> Self {
        if self.current.is_some() && !self.game_over {
            self.media_unavailable = true;
        }
        self
    }

    /// Dispatch a user intent to the matching transition.
    #[must_use]
    pub fn apply<R: Rng>(self, action: &GameAction, rng: &mut R) -> Self {
        match action {
            GameAction::StartNewGame => self.start_new_game(rng),
            GameAction::SelectOption(composer) => self.select_option(composer),
            GameAction::CheckAnswer => self.check_answer(),
            GameAction::NextQuestion => self.next_question(rng),
            GameAction::ReportMediaFailure => self.report_media_failure(),
        }
    }

    /// Whether `action` would be taken rather than ignored in this state.
    ///
    /// A restart is always taken, even when it redraws the item on screen.
    #[must_use]
    pub fn accepts(&self, action: &GameAction) -> bool {
        match action {
            GameAction::StartNewGame => true,
            GameAction::SelectOption(composer) => {
                self.accepts_selection() && self.catalog.has_option(composer)
            }
            GameAction::CheckAnswer => self.can_check() && self.current.is_some(),
            GameAction::NextQuestion => self.can_advance(),
            GameAction::ReportMediaFailure => self.current.is_some() && !self.game_over,
        }
    }

    fn accepts_selection(&self) -> bool {
        self.current.is_some() && !self.answer_checked && !self.game_over
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.game_over {
            GamePhase::GameOver
        } else if self.current.is_none() {
            GamePhase::NotStarted
        } else if self.answer_checked {
            GamePhase::AnswerChecked
        } else if self.selected_option.is_some() {
            GamePhase::SelectionMade
        } else {
            GamePhase::AwaitingSelection
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Fixed multiple-choice options for every question.
    #[must_use]
    pub fn options(&self) -> &[ComposerOption] {
        self.catalog.options()
    }

    #[must_use]
    pub fn used_items(&self) -> &BTreeSet<ItemId> {
        &self.used_items
    }

    #[must_use]
    pub fn current_item_id(&self) -> Option<ItemId> {
        self.current
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&QuizItem> {
        self.current.and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    /// 1-based ordinal of the question on screen; 0 before any draw.
    #[must_use]
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    #[must_use]
    pub fn is_answer_checked(&self) -> bool {
        self.answer_checked
    }

    #[must_use]
    pub fn is_media_unavailable(&self) -> bool {
        self.media_unavailable
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Items not yet presented this game.
    #[must_use]
    pub fn remaining(&self) -> usize {
        pool::remaining(&self.catalog, &self.used_items)
    }

    #[must_use]
    pub fn can_check(&self) -> bool {
        self.selected_option.is_some() && !self.answer_checked && !self.game_over
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.answer_checked && !self.game_over
    }

    #[must_use]
    pub fn score_line(&self) -> ScoreLine {
        ScoreLine {
            score: self.score,
            answered: self.questions_answered,
        }
    }

    /// Feedback for the checked answer; `None` until the answer is checked.
    #[must_use]
    pub fn feedback(&self) -> Option<AnswerFeedback> {
        if !self.answer_checked {
            return None;
        }
        let item = self.current_item()?;
        let selected = self.selected_option.clone()?;
        Some(AnswerFeedback {
            title: item.title().to_owned(),
            is_correct: selected == item.composer(),
            selected,
            correct_composer: item.composer().to_owned(),
            trivia: item.trivia().to_owned(),
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
