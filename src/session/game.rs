//! Game session: one player, one board, one leaderboard update.

use thiserror::Error;
use tracing::{debug, info};

use super::score::SessionScore;
use crate::board::Board;
use crate::cards::DeckBuilder;
use crate::core::{CardId, ConfigError, ConfigKey, GameConfig, GameRng};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardError, LeaderboardStore};
use crate::rules::{EngineSignal, RevealError, RevealOutcome, TurnEngine};

/// Where a session is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting clicks.
    Active,
    /// Every pair found; the leaderboard has been updated.
    Won,
    /// The player quit. Nothing is recorded.
    Abandoned,
}

/// Errors returned by session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Reveal(#[from] RevealError),

    #[error("no card at row {row}, column {col}")]
    EmptyCell { row: usize, col: usize },

    #[error("session has already ended")]
    SessionEnded,

    #[error("could not update leaderboard: {0}")]
    Leaderboard(#[from] LeaderboardError),
}

/// A running memory game.
///
/// Composes the board and turn engine, keeps the score, detects the win and
/// records it on the leaderboard held by `S`.
///
/// ## Example
///
/// ```
/// use memory_match::core::{CardId, ConfigKey, GameConfig, PairCount};
/// use memory_match::leaderboard::MemoryStore;
/// use memory_match::session::GameSession;
///
/// let config = GameConfig::new(ConfigKey::default_for(PairCount::Four), ["a", "b", "c", "d"])
///     .with_player("alice")
///     .with_seed(42);
/// let mut session = GameSession::new(config, MemoryStore::new()).unwrap();
///
/// // Ids 0..4 are the first copy of each face, 4..8 the second.
/// for pair in 0..4 {
///     session.on_card_clicked(CardId(pair)).unwrap();
///     session.on_card_clicked(CardId(pair + 4)).unwrap();
/// }
///
/// assert!(session.is_won());
/// assert_eq!(session.status_text(), "Status: 4 guesses, 4 / 4 matches");
/// ```
#[derive(Debug)]
pub struct GameSession<S: LeaderboardStore> {
    key: ConfigKey,
    player_name: String,
    seed: u64,
    board: Board,
    engine: TurnEngine,
    score: SessionScore,
    status: SessionStatus,
    store: S,
    final_ranking: Option<Leaderboard>,
}

impl<S: LeaderboardStore> GameSession<S> {
    /// Deal a new session.
    ///
    /// Fails when the configuration cannot produce a full deck.
    pub fn new(config: GameConfig, store: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let seed = rng.seed();

        let deck = DeckBuilder::new(config.pairs()).build(&config.faces, &mut rng)?;
        let board = Board::layout(deck, config.columns)?;

        info!(
            config = %config.key,
            player = %config.player_name,
            seed,
            cards = board.len(),
            "session started"
        );

        Ok(Self {
            key: config.key,
            player_name: config.player_name,
            seed,
            board,
            engine: TurnEngine::new(),
            score: SessionScore::default(),
            status: SessionStatus::Active,
            store,
            final_ranking: None,
        })
    }

    // === Accessors ===

    /// Configuration being played.
    #[must_use]
    pub fn key(&self) -> &ConfigKey {
        &self.key
    }

    /// Normalized player name.
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Seed that reproduces this deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The dealt board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> SessionScore {
        self.score
    }

    /// Number of pairs to find.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board.total_pairs()
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Check if every pair has been found.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == SessionStatus::Won
    }

    /// Face-up cards of the unresolved turn.
    #[must_use]
    pub fn face_up(&self) -> &[CardId] {
        self.engine.buffer()
    }

    /// Mismatched cards the presentation layer still has to conceal.
    #[must_use]
    pub fn pending_conceal(&self) -> Vec<CardId> {
        self.engine.pending_conceal()
    }

    /// Leaderboard storage.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the leaderboard storage.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }

    /// Ranked leaderboard written when the session was won.
    #[must_use]
    pub fn final_ranking(&self) -> Option<&Leaderboard> {
        self.final_ranking.as_ref()
    }

    /// Scoreboard line for display.
    #[must_use]
    pub fn status_text(&self) -> String {
        self.score.status_text(self.total_pairs())
    }

    // === Gameplay ===

    /// Handle a click on a card.
    ///
    /// Refused clicks return `SessionError::Reveal` and change nothing.
    /// When the click wins the game, the leaderboard is updated before
    /// returning; a storage failure is reported as `SessionError::Leaderboard`
    /// with the win already recorded on the session.
    pub fn on_card_clicked(&mut self, id: CardId) -> Result<Vec<EngineSignal>, SessionError> {
        if self.status != SessionStatus::Active {
            return Err(SessionError::SessionEnded);
        }

        let outcome = self.engine.reveal(&mut self.board, id).map_err(|error| {
            debug!(card = %id, %error, "click ignored");
            error
        })?;

        let mut signals = vec![EngineSignal::CardRevealed(id)];
        match outcome {
            RevealOutcome::Waiting(_) => return Ok(signals),
            RevealOutcome::Matched(a, b) => signals.push(EngineSignal::CardsMatched(a, b)),
            RevealOutcome::Mismatched(a, b) => signals.push(EngineSignal::CardsMismatched(a, b)),
        }

        self.score.apply(outcome.score_delta());
        signals.push(EngineSignal::ScoreChanged {
            guesses: self.score.guesses,
            matches: self.score.matches,
        });

        if self.score.matches as usize * 2 == self.board.len() {
            self.status = SessionStatus::Won;
            signals.push(EngineSignal::SessionWon {
                guesses: self.score.guesses,
            });
            info!(player = %self.player_name, guesses = self.score.guesses, "session won");

            let ranking = Leaderboard::record(
                &mut self.store,
                &self.key,
                &self.player_name,
                self.score.guesses,
            )?;
            self.final_ranking = Some(ranking);
        }

        Ok(signals)
    }

    /// Handle a click on a grid cell.
    pub fn on_cell_clicked(&mut self, row: usize, col: usize) -> Result<Vec<EngineSignal>, SessionError> {
        let id = self
            .board
            .card_at(row, col)
            .map(|card| card.id)
            .ok_or(SessionError::EmptyCell { row, col })?;
        self.on_card_clicked(id)
    }

    /// The presentation layer has turned a mismatched card face-down.
    pub fn conceal_acknowledged(&mut self, id: CardId) -> Result<EngineSignal, SessionError> {
        self.engine.conceal_acknowledged(&mut self.board, id)?;
        Ok(EngineSignal::CardConcealed(id))
    }

    /// Quit without recording a score.
    pub fn abandon(&mut self) {
        if self.status == SessionStatus::Active {
            self.status = SessionStatus::Abandoned;
            info!(player = %self.player_name, guesses = self.score.guesses, "session abandoned");
        }
    }

    /// Best `n` leaderboard entries for this configuration.
    pub fn leaders(&self, n: usize) -> Result<Vec<LeaderboardEntry>, SessionError> {
        let leaderboard = Leaderboard::load(&self.store, &self.key)?;
        Ok(leaderboard.top(n).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PairCount;
    use crate::leaderboard::MemoryStore;

    /// Ids 0..pairs are the first copy of each face, pairs..2*pairs the second.
    fn session(pairs: PairCount) -> GameSession<MemoryStore> {
        let faces: Vec<String> = (0..pairs.pairs()).map(|i| format!("face{i}")).collect();
        let config = GameConfig::new(ConfigKey::default_for(pairs), faces)
            .with_player("Tester")
            .with_seed(42);
        GameSession::new(config, MemoryStore::new()).unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = session(PairCount::Five);

        assert_eq!(s.status(), SessionStatus::Active);
        assert_eq!(s.board().len(), 10);
        assert_eq!(s.total_pairs(), 5);
        assert_eq!(s.player_name(), "tester");
        assert_eq!(s.seed(), 42);
        assert_eq!(s.status_text(), "Status: 0 guesses, 0 / 5 matches");
    }

    #[test]
    fn test_insufficient_faces_aborts() {
        let config = GameConfig::new(ConfigKey::default_for(PairCount::Four), ["a", "b", "c"]);
        let err = GameSession::new(config, MemoryStore::new()).unwrap_err();

        assert!(matches!(err, ConfigError::InsufficientFaces { required: 4, available: 3 }));
    }

    #[test]
    fn test_first_click_signals() {
        let mut s = session(PairCount::Four);

        let signals = s.on_card_clicked(CardId(0)).unwrap();

        assert_eq!(signals, vec![EngineSignal::CardRevealed(CardId(0))]);
        assert_eq!(s.face_up(), &[CardId(0)]);
    }

    #[test]
    fn test_match_signals() {
        let mut s = session(PairCount::Four);

        s.on_card_clicked(CardId(1)).unwrap();
        let signals = s.on_card_clicked(CardId(5)).unwrap();

        assert_eq!(
            signals,
            vec![
                EngineSignal::CardRevealed(CardId(5)),
                EngineSignal::CardsMatched(CardId(1), CardId(5)),
                EngineSignal::ScoreChanged { guesses: 1, matches: 1 },
            ]
        );
    }

    #[test]
    fn test_mismatch_then_conceal() {
        let mut s = session(PairCount::Four);

        s.on_card_clicked(CardId(0)).unwrap();
        let signals = s.on_card_clicked(CardId(1)).unwrap();
        assert!(signals.contains(&EngineSignal::CardsMismatched(CardId(0), CardId(1))));
        assert_eq!(s.score(), SessionScore { guesses: 1, matches: 0 });
        assert_eq!(s.pending_conceal(), &[CardId(0), CardId(1)]);

        assert!(matches!(
            s.on_card_clicked(CardId(1)),
            Err(SessionError::Reveal(RevealError::AwaitingConceal(_)))
        ));

        assert_eq!(s.conceal_acknowledged(CardId(0)).unwrap(), EngineSignal::CardConcealed(CardId(0)));
        assert!(matches!(
            s.on_card_clicked(CardId(0)),
            Err(SessionError::Reveal(RevealError::AwaitingConceal(_)))
        ));
        assert_eq!(s.conceal_acknowledged(CardId(1)).unwrap(), EngineSignal::CardConcealed(CardId(1)));
        assert!(s.pending_conceal().is_empty());
        assert!(s.on_card_clicked(CardId(1)).is_ok());
    }

    #[test]
    fn test_win_records_leaderboard() {
        let mut s = session(PairCount::Four);

        for pair in 0..3 {
            s.on_card_clicked(CardId(pair)).unwrap();
            s.on_card_clicked(CardId(pair + 4)).unwrap();
            assert!(!s.is_won());
        }

        s.on_card_clicked(CardId(3)).unwrap();
        let signals = s.on_card_clicked(CardId(7)).unwrap();

        assert_eq!(signals.last(), Some(&EngineSignal::SessionWon { guesses: 4 }));
        assert!(s.is_won());
        assert_eq!(
            s.final_ranking().map(Leaderboard::entries),
            Some(&[LeaderboardEntry::new(4, "tester")][..])
        );
        assert_eq!(s.leaders(8).unwrap(), vec![LeaderboardEntry::new(4, "tester")]);
        assert!(matches!(s.on_card_clicked(CardId(0)), Err(SessionError::SessionEnded)));
    }

    #[test]
    fn test_abandon_records_nothing() {
        let mut s = session(PairCount::Four);

        s.on_card_clicked(CardId(0)).unwrap();
        s.abandon();

        assert_eq!(s.status(), SessionStatus::Abandoned);
        assert!(matches!(s.on_card_clicked(CardId(4)), Err(SessionError::SessionEnded)));
        assert!(s.leaders(8).unwrap().is_empty());
    }

    #[test]
    fn test_cell_clicks() {
        let mut s = session(PairCount::Five);

        let id = s.board().card_at(0, 0).unwrap().id;
        let signals = s.on_cell_clicked(0, 0).unwrap();
        assert_eq!(signals, vec![EngineSignal::CardRevealed(id)]);

        assert!(matches!(
            s.on_cell_clicked(2, 3),
            Err(SessionError::EmptyCell { row: 2, col: 3 })
        ));
    }
}
