use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use quiz_core::model::Catalog;
use quiz_core::{GameAction, GamePhase, GameSession};
use rand::SeedableRng;
use rand::rngs::StdRng;
use storage::CatalogSource;
use tracing::{debug, info, warn};

use crate::error::QuizServiceError;

/// How the draw order is randomized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RngMode {
    /// Seed from the operating system.
    #[default]
    Entropy,
    /// Fixed seed; the same seed replays the same draw order.
    Seeded(u64),
}

impl RngMode {
    fn build(self) -> StdRng {
        match self {
            RngMode::Entropy => StdRng::from_os_rng(),
            RngMode::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Orchestrates quiz sessions over one shared catalog.
///
/// Owns the random source so presentation code only relays intents.
/// Sessions stay plain values: every call takes one and returns the next.
#[derive(Clone)]
pub struct QuizLoopService {
    catalog: Arc<Catalog>,
    rng: Arc<Mutex<StdRng>>,
    rng_mode: RngMode,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_rng_mode(catalog, RngMode::default())
    }

    #[must_use]
    pub fn with_rng_mode(catalog: Arc<Catalog>, rng_mode: RngMode) -> Self {
        Self {
            catalog,
            rng: Arc::new(Mutex::new(rng_mode.build())),
            rng_mode,
        }
    }

    /// Load the catalog from `source` and build the service around it.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Catalog` when the source cannot be loaded.
    pub fn from_source(
        source: &dyn CatalogSource,
        rng_mode: RngMode,
    ) -> Result<Self, QuizServiceError> {
        let origin = source.describe();
        let catalog = source
            .load()
            .map_err(|err| QuizServiceError::Catalog {
                origin: origin.clone(),
                source: err,
            })?;
        info!(
            %origin,
            items = catalog.len(),
            options = catalog.options().len(),
            "catalog loaded"
        );
        Ok(Self::with_rng_mode(Arc::new(catalog), rng_mode))
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    #[must_use]
    pub fn rng_mode(&self) -> RngMode {
        self.rng_mode
    }

    /// A session that has not drawn anything yet.
    #[must_use]
    pub fn new_session(&self) -> GameSession {
        GameSession::new(Arc::clone(&self.catalog))
    }

    /// Fresh session with the first item already drawn.
    #[must_use]
    pub fn start_game(&self) -> GameSession {
        self.apply(self.new_session(), &GameAction::StartNewGame)
    }

    /// Apply one intent and log the transition.
    #[must_use]
    pub fn apply(&self, session: GameSession, action: &GameAction) -> GameSession {
        let previous_phase = session.phase();
        if !session.accepts(action) {
            debug!(?action, phase = ?previous_phase, "quiz action ignored");
            return session;
        }

        let next = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            session.apply(action, &mut *rng)
        };

        debug!(
            ?action,
            phase = ?next.phase(),
            question = next.question_number(),
            score = %next.score_line(),
            "quiz action applied"
        );
        match action {
            GameAction::StartNewGame => info!(
                items = self.catalog.len(),
                phase = ?next.phase(),
                "new game started"
            ),
            GameAction::ReportMediaFailure => {
                let audio = next
                    .current_item()
                    .map(|item| item.audio().to_src())
                    .unwrap_or_default();
                warn!(%audio, "audio clip failed to load");
            }
            _ => {}
        }
        if next.phase() == GamePhase::GameOver && previous_phase != GamePhase::GameOver {
            info!(score = %next.score_line(), "game over");
        }
        next
    }

    #[must_use]
    pub fn select_option(&self, session: GameSession, composer: &str) -> GameSession {
        self.apply(session, &GameAction::SelectOption(composer.to_owned()))
    }

    #[must_use]
    pub fn check_answer(&self, session: GameSession) -> GameSession {
        self.apply(session, &GameAction::CheckAnswer)
    }

    #[must_use]
    pub fn next_question(&self, session: GameSession) -> GameSession {
        self.apply(session, &GameAction::NextQuestion)
    }

    #[must_use]
    pub fn report_media_failure(&self, session: GameSession) -> GameSession {
        self.apply(session, &GameAction::ReportMediaFailure)
    }
}

impl fmt::Debug for QuizLoopService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizLoopService")
            .field("catalog_len", &self.catalog.len())
            .field("rng_mode", &self.rng_mode)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
