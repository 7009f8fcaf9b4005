//! Headless play with a perfect-memory player.
//!
//! Stands in for a presentation layer: it only looks at a card's face after
//! revealing it, remembers everything it has seen, and acknowledges conceals
//! immediately. Used by the `autoplay` binary and for end-to-end tests.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::cards::CardFace;
use crate::core::{CardId, GameRng};
use crate::leaderboard::LeaderboardStore;
use crate::rules::EngineSignal;
use crate::session::{GameSession, SessionError, SessionScore, SessionStatus};

/// Player that never forgets a revealed card.
#[derive(Clone, Debug)]
pub struct PerfectMemory {
    /// Face -> ids seen with that face and not yet matched.
    seen: FxHashMap<CardFace, Vec<CardId>>,
    rng: GameRng,
}

impl PerfectMemory {
    /// Create a player. `rng` picks among unseen cards.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            seen: FxHashMap::default(),
            rng,
        }
    }

    fn seen_ids(&self) -> FxHashSet<CardId> {
        self.seen.values().flatten().copied().collect()
    }

    fn observe<S: LeaderboardStore>(&mut self, session: &GameSession<S>, id: CardId) {
        if let Some(card) = session.board().card(id) {
            let ids = self.seen.entry(card.face.clone()).or_default();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }

    fn forget(&mut self, id: CardId) {
        self.seen.retain(|_, ids| {
            ids.retain(|&seen| seen != id);
            !ids.is_empty()
        });
    }

    fn random_unseen<S: LeaderboardStore>(
        &mut self,
        session: &GameSession<S>,
        exclude: Option<CardId>,
    ) -> Option<CardId> {
        let seen = self.seen_ids();
        let unseen: Vec<CardId> = session
            .board()
            .interactive()
            .map(|card| card.id)
            .filter(|id| !seen.contains(id) && Some(*id) != exclude)
            .collect();

        if unseen.is_empty() {
            return None;
        }
        Some(unseen[self.rng.gen_range_usize(0..unseen.len())])
    }

    fn choose_first<S: LeaderboardStore>(&mut self, session: &GameSession<S>) -> Option<CardId> {
        let known_pair = self
            .seen
            .values()
            .filter(|ids| ids.len() >= 2)
            .map(|ids| ids[0])
            .min();

        known_pair.or_else(|| self.random_unseen(session, None))
    }

    fn choose_second<S: LeaderboardStore>(
        &mut self,
        session: &GameSession<S>,
        first: CardId,
    ) -> Option<CardId> {
        let partner = session
            .board()
            .card(first)
            .and_then(|card| self.seen.get(&card.face))
            .and_then(|ids| ids.iter().copied().find(|&id| id != first));

        partner
            .or_else(|| self.random_unseen(session, Some(first)))
            .or_else(|| {
                session
                    .board()
                    .interactive()
                    .map(|card| card.id)
                    .find(|&id| id != first)
            })
    }

    fn click<S: LeaderboardStore>(
        &mut self,
        session: &mut GameSession<S>,
        id: CardId,
    ) -> Result<Vec<EngineSignal>, SessionError> {
        let signals = session.on_card_clicked(id)?;
        self.observe(session, id);

        for signal in &signals {
            match *signal {
                EngineSignal::CardsMatched(a, b) => {
                    self.forget(a);
                    self.forget(b);
                }
                EngineSignal::CardsMismatched(a, b) => {
                    session.conceal_acknowledged(a)?;
                    session.conceal_acknowledged(b)?;
                }
                _ => {}
            }
        }

        Ok(signals)
    }

    /// Play one turn (two clicks). Returns every signal emitted.
    ///
    /// Returns an empty list when no card can be clicked.
    pub fn take_turn<S: LeaderboardStore>(
        &mut self,
        session: &mut GameSession<S>,
    ) -> Result<Vec<EngineSignal>, SessionError> {
        let Some(first) = self.choose_first(session) else {
            return Ok(Vec::new());
        };
        let mut signals = self.click(session, first)?;

        let Some(second) = self.choose_second(session, first) else {
            return Ok(signals);
        };
        signals.extend(self.click(session, second)?);

        debug!(%first, %second, status = %session.status_text(), "turn played");
        Ok(signals)
    }

    /// Play until the session ends.
    pub fn play<S: LeaderboardStore>(
        &mut self,
        session: &mut GameSession<S>,
    ) -> Result<SessionScore, SessionError> {
        while session.status() == SessionStatus::Active {
            if self.take_turn(session)?.is_empty() {
                break;
            }
        }
        Ok(session.score())
    }
}
