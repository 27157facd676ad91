//! Legality rules: bounds, occupancy, suicide, ko and superko.

use rust_go::core::{
    Color, EngineError, GameConfig, GameState, IllegalMove, KoRule, Move, Position,
};

fn replay_with(config: GameConfig, moves: &[Move]) -> GameState {
    GameState::replay(config, moves).unwrap()
}

fn places(moves: &[(u8, u8)]) -> Vec<Move> {
    moves.iter().map(|&(r, c)| Move::place(r, c)).collect()
}

/// Black captures at (1, 2), opening a ko at (1, 1) for White.
fn ko_moves() -> Vec<Move> {
    places(&[
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 3),
        (2, 1),
        (2, 2),
        (4, 4),
        (1, 1),
        (1, 2),
    ])
}

// =============================================================================
// Bounds and Occupancy
// =============================================================================

#[test]
fn test_out_of_bounds_rejected() {
    let state = GameState::new(GameConfig::new(5));
    let pos = Position::new(5, 0);
    assert!(!state.is_legal(pos));
    assert_eq!(
        state.play(pos),
        Err(EngineError::Illegal(IllegalMove::OutOfBounds(pos)))
    );
}

#[test]
fn test_occupied_rejected() {
    let state = GameState::new(GameConfig::new(5))
        .play(Position::new(2, 2))
        .unwrap();
    assert_eq!(
        state.play(Position::new(2, 2)),
        Err(EngineError::Illegal(IllegalMove::Occupied(Position::new(2, 2))))
    );
    assert_eq!(state.turn(), Color::White);
    assert_eq!(state.move_index(), 1);
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn test_suicide_rejected() {
    let state = replay_with(
        GameConfig::new(5),
        &places(&[
            (0, 0),
            (1, 2),
            (0, 4),
            (2, 1),
            (4, 0),
            (3, 2),
            (4, 4),
            (2, 3),
        ]),
    );
    let center = Position::new(2, 2);
    assert_eq!(state.turn(), Color::Black);
    assert!(!state.is_legal(center));
    assert!(!state.legal_moves().contains(&center));
    assert_eq!(
        state.play(center),
        Err(EngineError::Illegal(IllegalMove::Suicide(center)))
    );

    // The surrounded point is fine for White.
    let white_turn = state.pass_turn().unwrap();
    assert!(white_turn.is_legal(center));
}

#[test]
fn test_multi_stone_suicide_rejected() {
    // Black (0,0) would join (0,1) and leave the pair without liberties.
    let state = replay_with(
        GameConfig::new(4),
        &places(&[(0, 1), (0, 2), (3, 3), (1, 1), (3, 0), (1, 0)]),
    );
    assert_eq!(state.turn(), Color::Black);
    assert_eq!(
        state.play(Position::new(0, 0)),
        Err(EngineError::Illegal(IllegalMove::Suicide(Position::new(0, 0))))
    );
}

// =============================================================================
// Ko
// =============================================================================

#[test]
fn test_ko_recapture_rejected() {
    let state = replay_with(GameConfig::new(5), &ko_moves());
    assert_eq!(state.grid().get(Position::new(1, 1)), Color::Empty);
    assert_eq!(state.captures(Color::Black), 1);

    let ko_point = Position::new(1, 1);
    assert!(!state.is_legal(ko_point));
    assert_eq!(
        state.play(ko_point),
        Err(EngineError::Illegal(IllegalMove::Ko(ko_point)))
    );
}

#[test]
fn test_ko_recapture_allowed_after_exchange_elsewhere() {
    let state = replay_with(GameConfig::new(5), &ko_moves());
    let state = state.play(Position::new(3, 3)).unwrap();
    let state = state.play(Position::new(4, 0)).unwrap();

    let ko_point = Position::new(1, 1);
    assert!(state.is_legal(ko_point));
    let after = state.play(ko_point).unwrap();
    assert_eq!(after.grid().get(Position::new(1, 2)), Color::Empty);
    assert_eq!(after.captures(Color::White), 1);
}

#[test]
fn test_own_last_board_rule_allows_recapture_after_passes() {
    // After two passes White's last board is the board Black made with the
    // capture, so the recapture does not repeat it.
    let mut moves = ko_moves();
    moves.extend([Move::Pass, Move::Pass]);
    let state = replay_with(GameConfig::new(5), &moves);

    assert!(state.is_finished());
    assert!(!state.is_terminal());
    assert!(state.is_legal(Position::new(1, 1)));
}

#[test]
fn test_superko_rejects_any_repeated_board() {
    let config = GameConfig::new(5).with_ko_rule(KoRule::PositionalSuperko);
    let mut moves = ko_moves();
    moves.extend([Move::Pass, Move::Pass]);
    let state = replay_with(config, &moves);

    let ko_point = Position::new(1, 1);
    assert!(!state.is_legal(ko_point));
    assert_eq!(
        state.play(ko_point),
        Err(EngineError::Illegal(IllegalMove::Superko(ko_point)))
    );
}

#[test]
fn test_superko_still_reports_simple_ko_first() {
    let config = GameConfig::new(5).with_ko_rule(KoRule::PositionalSuperko);
    let state = replay_with(config, &ko_moves());
    assert_eq!(
        state.play(Position::new(1, 1)),
        Err(EngineError::Illegal(IllegalMove::Ko(Position::new(1, 1))))
    );
}

// =============================================================================
// Legal Move Enumeration
// =============================================================================

#[test]
fn test_legal_moves_on_empty_board() {
    let state = GameState::new(GameConfig::new(3));
    let legal = state.legal_moves();
    assert_eq!(legal.len(), 9);
    assert_eq!(legal, Position::all(3).collect::<Vec<_>>());
}

#[test]
fn test_legal_moves_match_is_legal() {
    let state = replay_with(GameConfig::new(5), &ko_moves());
    let legal = state.legal_moves();
    for pos in Position::all(5) {
        assert_eq!(legal.contains(&pos), state.is_legal(pos), "at {pos}");
    }
}

#[test]
fn test_terminal_state_has_no_legal_moves() {
    let state = GameState::new(GameConfig::new(3)).finalize();
    assert!(state.legal_moves().is_empty());
    assert!(!state.is_legal(Position::new(0, 0)));
    assert_eq!(state.play(Position::new(0, 0)), Err(EngineError::GameOver));
    assert_eq!(state.pass_turn(), Err(EngineError::GameOver));
}
