//! Tests for the engine lifecycle: names, play, game over, reset, new game.

use tictactoe_engine::{Board, Engine, Mark, MoveError, Phase, Position, ValidationError};

fn started() -> Engine {
    let mut engine = Engine::new();
    engine.initialize("Alice", "Bob").expect("valid names");
    engine
}

#[test]
fn test_full_lifecycle() {
    let mut engine = Engine::new();
    assert_eq!(engine.phase(), Phase::AwaitingNames);

    engine.initialize("Alice", "Bob").expect("valid names");
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(engine.turn(), Some(Mark::X));

    for index in [0, 3, 1, 4] {
        engine.apply_move(index).expect("valid move");
    }
    let outcome = engine.apply_move(2).expect("winning move");
    assert_eq!(outcome.phase, Phase::Won(Mark::X));
    assert_eq!(engine.phase(), Phase::Won(Mark::X));

    engine.reset().expect("session exists");
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(engine.player_name(Mark::X), Some("Alice"));

    engine.new_game();
    assert_eq!(engine.phase(), Phase::AwaitingNames);
    assert_eq!(engine.player_name(Mark::X), None);
}

#[test]
fn test_empty_first_name_rejected() {
    let mut engine = Engine::new();
    let result = engine.initialize("", "Bob");
    assert!(matches!(result, Err(ValidationError::EmptyName(Mark::X))));
}

#[test]
fn test_whitespace_name_rejected() {
    let mut engine = Engine::new();
    let result = engine.initialize("Alice", "   \t");
    assert!(matches!(result, Err(ValidationError::EmptyName(Mark::O))));
}

#[test]
fn test_names_are_trimmed() {
    let mut engine = Engine::new();
    engine.initialize("  Alice  ", " Bob").expect("valid names");
    assert_eq!(engine.player_name(Mark::X), Some("Alice"));
    assert_eq!(engine.player_name(Mark::O), Some("Bob"));
}

#[test]
fn test_top_row_win_reports_line() {
    let mut engine = started();
    let mut last = None;
    for index in [0, 3, 1, 4, 2] {
        last = Some(engine.apply_move(index).expect("valid move"));
    }
    let outcome = last.expect("moves were made");

    assert_eq!(outcome.phase, Phase::Won(Mark::X));
    assert_eq!(outcome.winning_line.map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(outcome.next_turn(), None);
    let session = engine.session().expect("session");
    assert_eq!(session.winner_name(), Some("Alice"));
}

#[test]
fn test_diagonal_completed_before_board_fills() {
    // X takes 0, 2, 4, 6 and completes 2-4-6 on the seventh move
    let mut engine = started();
    for index in [0, 1, 2, 3, 4, 5] {
        engine.apply_move(index).expect("valid move");
    }
    let outcome = engine.apply_move(6).expect("winning move");
    assert_eq!(outcome.phase, Phase::Won(Mark::X));
    assert_eq!(outcome.winning_line.map(|l| l.indices()), Some([2, 4, 6]));

    assert_eq!(engine.apply_move(8), Err(MoveError::GameOver));
    assert_eq!(engine.apply_move(7), Err(MoveError::GameOver));
}

#[test]
fn test_tie() {
    let mut engine = started();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
    let mut last = None;
    for index in moves {
        last = Some(engine.apply_move(index).expect("valid move"));
    }

    let outcome = last.expect("moves were made");
    assert_eq!(outcome.phase, Phase::Tied);
    assert_eq!(outcome.winning_line, None);
    assert_eq!(outcome.move_count, 9);
    assert_eq!(engine.session().and_then(|s| s.winner_name()), None);
}

#[test]
fn test_ninth_move_win_is_not_a_tie() {
    // X O X / O X O / O X X : X completes 0-4-8 on the last cell
    let mut engine = started();
    let moves = [0, 1, 2, 3, 4, 5, 7, 6, 8];
    let mut last = None;
    for index in moves {
        last = Some(engine.apply_move(index).expect("valid move"));
    }

    let outcome = last.expect("moves were made");
    assert_eq!(outcome.move_count, 9);
    assert_eq!(outcome.phase, Phase::Won(Mark::X));
    assert_eq!(outcome.winning_line.map(|l| l.indices()), Some([0, 4, 8]));
}

#[test]
fn test_occupied_cell_leaves_session_unchanged() {
    let mut engine = started();
    engine.apply_move(4).expect("valid move");
    let before = engine.session().cloned();

    assert_eq!(engine.apply_move(4), Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(engine.session().cloned(), before);
    assert_eq!(engine.turn(), Some(Mark::O));
}

#[test]
fn test_out_of_bounds_leaves_session_unchanged() {
    let mut engine = started();
    assert_eq!(engine.apply_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(engine.apply_move(usize::MAX), Err(MoveError::OutOfBounds(usize::MAX)));
    assert_eq!(engine.board(), Some(&Board::new()));
    assert_eq!(engine.turn(), Some(Mark::X));
}

#[test]
fn test_reset_mid_game() {
    let mut engine = started();
    engine.apply_move(0).expect("valid move");
    engine.apply_move(8).expect("valid move");

    let session = engine.reset().expect("session exists");
    assert_eq!(session.move_count(), 0);
    assert_eq!(session.turn(), Mark::X);
    assert_eq!(session.board(), &Board::new());
}

#[test]
fn test_reset_after_tie() {
    let mut engine = started();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        engine.apply_move(index).expect("valid move");
    }
    assert_eq!(engine.phase(), Phase::Tied);

    engine.reset().expect("session exists");
    assert_eq!(engine.phase(), Phase::InProgress);
    assert_eq!(engine.player_name(Mark::O), Some("Bob"));
    engine.apply_move(4).expect("board is playable again");
}

#[test]
fn test_new_game_requires_initialize() {
    let mut engine = started();
    engine.apply_move(0).expect("valid move");
    engine.new_game();

    assert_eq!(engine.apply_move(1), Err(MoveError::InvalidPhase));
    assert!(engine.reset().is_err());

    engine.initialize("Carol", "Dave").expect("valid names");
    assert_eq!(engine.player_name(Mark::X), Some("Carol"));
    assert_eq!(engine.board(), Some(&Board::new()));
    engine.apply_move(1).expect("valid move");
}

#[test]
fn test_error_messages() {
    assert_eq!(MoveError::OutOfBounds(12).to_string(), "Cell 12 is out of bounds (must be 0-8)");
    assert_eq!(
        MoveError::CellOccupied(Position::Center).to_string(),
        "Center is already occupied"
    );
    assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    assert!(ValidationError::EmptyName(Mark::O).to_string().contains("both player names"));
}
