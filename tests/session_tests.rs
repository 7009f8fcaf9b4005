//! Turn engine and session integration tests.
//!
//! Card ids are assigned before the shuffle, so with `n` pairs ids `0..n`
//! are the first copy of each face and `n..2n` the second. Tests rely on
//! that to play known pairs without peeking at the board.

use memory_match::board::Board;
use memory_match::cards::{CardFace, DeckBuilder};
use memory_match::core::{CardId, ConfigKey, GameConfig, GameRng, PairCount};
use memory_match::leaderboard::{LeaderboardStore, MemoryStore};
use memory_match::rules::{EngineSignal, RevealError, RevealOutcome, TurnEngine};
use memory_match::session::{GameSession, SessionError, SessionStatus};
use proptest::prelude::*;

fn faces(names: &[&str]) -> Vec<CardFace> {
    names.iter().copied().map(CardFace::from).collect()
}

fn session(pairs: PairCount, seed: u64) -> GameSession<MemoryStore> {
    let names: Vec<String> = (0..pairs.pairs()).map(|i| format!("face{i}")).collect();
    let config = GameConfig::new(ConfigKey::default_for(pairs), names)
        .with_player("alice")
        .with_seed(seed);
    GameSession::new(config, MemoryStore::new()).unwrap()
}

// =============================================================================
// Engine Scenarios
// =============================================================================

/// Two faces, two pairs: play both matches and check the score after each.
#[test]
fn test_two_pair_end_to_end() {
    let mut rng = GameRng::new(1);
    let deck = DeckBuilder::new(2).build(&faces(&["A", "B"]), &mut rng).unwrap();
    assert_eq!(deck.len(), 4);

    let mut board = Board::layout(deck, 4).unwrap();
    let mut engine = TurnEngine::new();
    let (a1, b1, a2, b2) = (CardId(0), CardId(1), CardId(2), CardId(3));
    assert_eq!(board.card(a1).unwrap().face, board.card(a2).unwrap().face);

    let mut guesses = 0;
    let mut matches = 0;
    for (first, second) in [(a1, a2), (b1, b2)] {
        assert_eq!(engine.reveal(&mut board, first), Ok(RevealOutcome::Waiting(first)));
        let outcome = engine.reveal(&mut board, second).unwrap();
        assert_eq!(outcome, RevealOutcome::Matched(first, second));

        let delta = outcome.score_delta();
        guesses += delta.guesses;
        matches += delta.matches;
        assert!(engine.buffer().is_empty());
        assert!(board.card(first).unwrap().retired);
        assert!(board.card(second).unwrap().retired);
    }

    assert_eq!((guesses, matches), (2, 2));
    assert_eq!(matches as usize * 2, board.len());
}

/// A then B: one guess, no match, both cards locked until concealed.
#[test]
fn test_mismatch_blocks_until_concealed() {
    let mut rng = GameRng::new(1);
    let deck = DeckBuilder::new(2).build(&faces(&["A", "B"]), &mut rng).unwrap();
    let mut board = Board::layout(deck, 4).unwrap();
    let mut engine = TurnEngine::new();
    let (a, b) = (CardId(0), CardId(1));

    engine.reveal(&mut board, a).unwrap();
    let outcome = engine.reveal(&mut board, b).unwrap();
    assert_eq!(outcome, RevealOutcome::Mismatched(a, b));
    assert_eq!(outcome.score_delta().guesses, 1);
    assert_eq!(outcome.score_delta().matches, 0);
    assert_eq!(engine.pending_conceal(), &[a, b]);

    assert_eq!(engine.reveal(&mut board, a), Err(RevealError::AwaitingConceal(a)));
    assert_eq!(engine.reveal(&mut board, b), Err(RevealError::AwaitingConceal(b)));

    engine.conceal_acknowledged(&mut board, a).unwrap();
    assert!(!board.card(a).unwrap().revealed);
    assert_eq!(engine.reveal(&mut board, b), Err(RevealError::AwaitingConceal(b)));
    // Concealed, but still locked: its partner has not been acknowledged.
    assert_eq!(engine.reveal(&mut board, a), Err(RevealError::AwaitingConceal(a)));
    assert!(engine.buffer().is_empty());

    engine.conceal_acknowledged(&mut board, b).unwrap();
    assert!(engine.pending_conceal().is_empty());
    assert_eq!(engine.reveal(&mut board, b), Ok(RevealOutcome::Waiting(b)));
}

// =============================================================================
// Session Scenarios
// =============================================================================

#[test]
fn test_session_signals_in_order() {
    let mut s = session(PairCount::Four, 9);

    let first = s.on_card_clicked(CardId(0)).unwrap();
    assert_eq!(first, vec![EngineSignal::CardRevealed(CardId(0))]);

    let second = s.on_card_clicked(CardId(1)).unwrap();
    assert_eq!(
        second,
        vec![
            EngineSignal::CardRevealed(CardId(1)),
            EngineSignal::CardsMismatched(CardId(0), CardId(1)),
            EngineSignal::ScoreChanged { guesses: 1, matches: 0 },
        ]
    );

    assert_eq!(s.conceal_acknowledged(CardId(0)).unwrap(), EngineSignal::CardConcealed(CardId(0)));
    assert!(matches!(
        s.conceal_acknowledged(CardId(0)),
        Err(SessionError::Reveal(RevealError::NotPendingConceal(_)))
    ));
}

#[test]
fn test_win_records_leaderboard() {
    let mut s = session(PairCount::Six, 5);
    let mut won = 0;

    for pair in 0..6 {
        s.on_card_clicked(CardId(pair)).unwrap();
        let signals = s.on_card_clicked(CardId(pair + 6)).unwrap();
        won += signals
            .iter()
            .filter(|signal| matches!(signal, EngineSignal::SessionWon { .. }))
            .count();
    }

    assert_eq!(won, 1);
    assert_eq!(s.status(), SessionStatus::Won);
    assert_eq!(s.status_text(), "Status: 6 guesses, 6 / 6 matches");

    let ranking = s.final_ranking().unwrap();
    assert_eq!(ranking.entries().len(), 1);
    assert_eq!(ranking.entries()[0].to_string(), "6: alice");

    let store = s.into_store();
    let stored = store.load(&ConfigKey::default_for(PairCount::Six)).unwrap();
    assert_eq!(stored.len(), 1);
}

#[test]
fn test_cell_clicks_follow_layout() {
    let mut s = session(PairCount::Five, 2);
    let id = s.board().card_at(2, 1).unwrap().id;

    let signals = s.on_cell_clicked(2, 1).unwrap();
    assert_eq!(signals, vec![EngineSignal::CardRevealed(id)]);

    // 10 cards in 4 columns: the last row has two.
    assert!(matches!(
        s.on_cell_clicked(2, 2),
        Err(SessionError::EmptyCell { row: 2, col: 2 })
    ));

    // Row * columns would overflow and wrap onto a real cell.
    let far = usize::MAX / 4 + 1;
    assert!(matches!(
        s.on_cell_clicked(far, 0),
        Err(SessionError::EmptyCell { row, col: 0 }) if row == far
    ));
    assert_eq!(s.face_up(), &[id]);
}

#[test]
fn test_abandoned_session_refuses_clicks() {
    let mut s = session(PairCount::Four, 1);
    s.on_card_clicked(CardId(0)).unwrap();
    s.abandon();

    assert_eq!(s.status(), SessionStatus::Abandoned);
    assert!(matches!(s.on_card_clicked(CardId(4)), Err(SessionError::SessionEnded)));
    assert!(s.final_ranking().is_none());
    assert!(s.leaders(8).unwrap().is_empty());
}

#[test]
fn test_insufficient_faces_fails_construction() {
    let config = GameConfig::new(ConfigKey::default_for(PairCount::Five), ["a", "b", "c", "a"]);
    assert!(GameSession::new(config, MemoryStore::new()).is_err());
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Clone, Debug)]
enum Step {
    Click(u32),
    Conceal(u32),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0u32..12).prop_map(Step::Click),
        1 => (0u32..12).prop_map(Step::Conceal),
    ]
}

proptest! {
    /// Arbitrary click and conceal sequences keep every engine invariant.
    #[test]
    fn prop_session_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 0..200)) {
        let mut s = session(PairCount::Six, seed);
        let mut wins = 0;

        for step in steps {
            let before = s.score();
            match step {
                Step::Click(id) => match s.on_card_clicked(CardId(id)) {
                    Ok(signals) => {
                        let resolved = signals.len() > 1;
                        if resolved {
                            prop_assert_eq!(s.score().guesses, before.guesses + 1);
                            prop_assert!(s.face_up().is_empty());
                        } else {
                            prop_assert_eq!(s.score(), before);
                        }
                        let matched = signals
                            .iter()
                            .any(|signal| matches!(signal, EngineSignal::CardsMatched(..)));
                        prop_assert_eq!(s.score().matches, before.matches + u32::from(matched));
                        wins += signals
                            .iter()
                            .filter(|signal| matches!(signal, EngineSignal::SessionWon { .. }))
                            .count();
                    }
                    Err(_) => prop_assert_eq!(s.score(), before),
                },
                Step::Conceal(id) => {
                    let _ = s.conceal_acknowledged(CardId(id));
                    prop_assert_eq!(s.score(), before);
                }
            }

            prop_assert!(s.face_up().len() <= 2);
            prop_assert_eq!(s.is_won(), s.score().matches as usize * 2 == s.board().len());
        }

        prop_assert_eq!(wins, usize::from(s.is_won()));
    }
}
