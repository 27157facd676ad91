//! Wire protocol text forms.

use rust_go::core::{Color, GameConfig, GameState, Move, Position};
use rust_go::protocol::{
    color_to_wire, wire_to_color, Command, EndOfGame, Greeting, Message, ProtocolError,
    WIRE_BLACK, WIRE_DRAW, WIRE_WHITE,
};
use rust_go::rules::GameResult;

// =============================================================================
// Commands
// =============================================================================

#[test]
fn test_commands_map_to_engine_moves() {
    let mv: Move = "MOVE 4,6".parse::<Command>().unwrap().into();
    assert_eq!(mv, Move::place(4, 6));

    let mv: Move = "PASS".parse::<Command>().unwrap().into();
    assert_eq!(mv, Move::Pass);

    assert_eq!(Command::from(Move::place(0, 8)).to_string(), "MOVE 0,8");
}

#[test]
fn test_command_text_round_trips_every_point() {
    for pos in Position::all(9) {
        let text = Command::Move(pos).to_string();
        assert_eq!(text.parse::<Command>(), Ok(Command::Move(pos)));
    }
}

#[test]
fn test_lowercase_is_unknown() {
    assert!(matches!(
        "pass".parse::<Command>(),
        Err(ProtocolError::UnknownCommand(_))
    ));
}

// =============================================================================
// Results
// =============================================================================

#[test]
fn test_end_message_from_final_score() {
    let state = GameState::replay(GameConfig::new(5), &[Move::place(2, 2)]).unwrap();
    let score = state.finalize().final_score().cloned().unwrap();
    assert_eq!(score.result, GameResult::Winner(Color::Black));

    let end = EndOfGame::from_score(&score);
    assert_eq!(end.winner, WIRE_BLACK);
    assert_eq!(end.winner_color(), Some(Color::Black));
    assert_eq!(Message::End(end).to_string(), "END 1 25 6.5");
}

#[test]
fn test_draw_uses_zero() {
    let state = GameState::new(GameConfig::new(5).with_komi(0.0));
    let score = state.finalize().final_score().cloned().unwrap();
    let end = EndOfGame::from_score(&score);
    assert_eq!(end.winner, WIRE_DRAW);
    assert_eq!(end.winner_color(), None);
    assert_eq!(Message::End(end).to_string(), "END 0 0 0");
}

#[test]
fn test_wire_ids() {
    assert_eq!(color_to_wire(Color::Black), 1);
    assert_eq!(color_to_wire(Color::White), 2);
    assert_eq!(wire_to_color(WIRE_WHITE), Ok(Color::White));
    assert_eq!(wire_to_color(3), Err(ProtocolError::UnknownPlayer(3)));
}

// =============================================================================
// Greetings
// =============================================================================

#[test]
fn test_greeting_round_trip() {
    for size in [7, 9] {
        let config = GameConfig::new(size);
        for greeting in Greeting::pair(&config) {
            let text = greeting.to_string();
            assert_eq!(text.parse::<Greeting>(), Ok(greeting));
        }
    }
}

#[test]
fn test_every_message_parses_back() {
    let messages = [
        Message::Valid,
        Message::Invalid,
        Message::TurnLoss,
        Message::Relay(Command::Pass),
        Message::Relay(Command::Move(Position::new(6, 1))),
        Message::End(EndOfGame {
            winner: WIRE_WHITE,
            black: 20.0,
            white: 35.5,
        }),
    ];
    for message in messages {
        assert_eq!(message.to_string().parse::<Message>(), Ok(message));
    }
}
