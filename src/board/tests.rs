use super::*;
use crate::isolation_position;
use crate::moves::Move;

#[test]
fn default_board_is_seven_by_seven_and_fully_open() {
    let board = Board::default();
    assert_eq!(board.width(), 7);
    assert_eq!(board.height(), 7);
    assert_eq!(board.blank_count(), 49);
    assert_eq!(board.turn(), Player::One);
    assert_eq!(board.location(Player::One), None);
    assert_eq!(board.location(Player::Two), None);
}

#[test]
fn unplaced_players_may_enter_any_open_cell() {
    let mut board = Board::new(3, 3);
    assert_eq!(board.legal_moves_for(Player::One).len(), 9);

    board.put_player(Player::One, Move::new(1, 1)).unwrap();
    let openings = board.legal_moves_for(Player::Two);
    assert_eq!(openings.len(), 8);
    assert!(!openings.contains(&Move::new(1, 1)));
}

#[test]
fn queen_moves_stop_at_edges_blocked_cells_and_the_opponent() {
    let board = isolation_position! {
        ". . ."
        ". 1 ."
        "x . 2"
    };

    let moves = board.legal_moves_for(Player::One);
    assert_eq!(moves.len(), 6);
    for expected in [
        Move::new(0, 0),
        Move::new(0, 1),
        Move::new(0, 2),
        Move::new(1, 0),
        Move::new(1, 2),
        Move::new(2, 1),
    ]
    .iter()
    {
        assert!(moves.contains(expected), "missing {:?}", expected);
    }
    assert!(!moves.contains(&Move::new(2, 0)), "blocked cell is not a move");
    assert!(!moves.contains(&Move::new(2, 2)), "opponent cell is not a move");
}

#[test]
fn queen_rays_extend_until_the_first_obstacle() {
    let board = isolation_position! {
        "1 . . x ."
        ". . . . ."
        ". . . . ."
        ". . . . ."
        ". . . . 2"
    };

    let moves = board.legal_moves_for(Player::One);
    assert_eq!(moves.len(), 9);
    assert!(moves.contains(&Move::new(0, 2)));
    assert!(!moves.contains(&Move::new(0, 3)), "ray must stop at a blocked cell");
    assert!(!moves.contains(&Move::new(0, 4)), "ray must not jump an obstacle");
    assert!(moves.contains(&Move::new(4, 0)));
    assert!(moves.contains(&Move::new(3, 3)));
    assert!(!moves.contains(&Move::new(4, 4)), "ray must stop at the opponent");
}

#[test]
fn forecast_returns_a_new_board_and_never_mutates_the_source() {
    let board = isolation_position! {
        ". . ."
        ". 1 ."
        "x . 2"
    };

    let next = Board::forecast_move(&board, Move::new(0, 0));

    assert_eq!(board.turn(), Player::One);
    assert_eq!(board.location(Player::One), Some(Move::new(1, 1)));
    assert!(board.is_open(Move::new(0, 0)));

    assert_eq!(next.turn(), Player::Two);
    assert_eq!(next.location(Player::One), Some(Move::new(0, 0)));
    assert!(!next.is_open(Move::new(0, 0)));
}

#[test]
fn vacated_cells_stay_blocked_for_both_players() {
    let board = isolation_position! {
        ". . ."
        ". 1 ."
        "x . 2"
    };

    let after_one = Board::forecast_move(&board, Move::new(0, 0));
    let after_two = Board::forecast_move(&after_one, Move::new(2, 1));

    assert!(!after_two.is_open(Move::new(1, 1)));
    assert!(!after_two.is_open(Move::new(2, 2)));

    let moves = after_two.legal_moves_for(Player::One);
    assert!(!moves.contains(&Move::new(1, 1)), "own vacated cell reopened");
    assert!(!moves.contains(&Move::new(2, 2)), "opponent vacated cell reopened");
    assert_eq!(moves.len(), 3);
}

#[test]
fn utility_flags_the_trapped_active_player() {
    let board = isolation_position! {
        "1 x ."
        "x x ."
        ". . 2"
    };

    assert!(board.legal_moves_for(Player::One).is_empty());
    assert_eq!(board.utility(Player::One), Some(f64::NEG_INFINITY));
    assert_eq!(board.utility(Player::Two), Some(f64::INFINITY));
}

#[test]
fn utility_is_none_while_the_game_is_live() {
    let board = isolation_position! {
        "1 . ."
        ". x ."
        ". . 2"
    };
    assert_eq!(board.utility(Player::One), None);
    assert_eq!(board.utility(Player::Two), None);
}

#[test]
fn diagram_rejects_ragged_rows() {
    let result = Board::from_diagram("1 .\n. . .");
    assert!(matches!(
        result,
        Err(BoardError::RaggedDiagram { row: 1, expected: 2, found: 3 })
    ));
}

#[test]
fn diagram_rejects_unknown_symbols_and_empty_input() {
    assert!(matches!(
        Board::from_diagram(". q ."),
        Err(BoardError::UnknownCellSymbol { .. })
    ));
    assert!(matches!(Board::from_diagram(""), Err(BoardError::EmptyDiagram)));
}

#[test]
fn diagram_rejects_a_duplicated_player() {
    assert!(matches!(
        Board::from_diagram("1 . 1"),
        Err(BoardError::PlayerAlreadyPlaced { player: Player::One })
    ));
}

#[test]
fn put_player_rejects_unavailable_cells() {
    let mut board = Board::from_diagram("x . .").unwrap();
    assert!(matches!(
        board.put_player(Player::One, Move::new(0, 0)),
        Err(BoardError::CellUnavailable { .. })
    ));
    assert!(matches!(
        board.put_player(Player::One, Move::new(5, 5)),
        Err(BoardError::OutOfBounds { .. })
    ));
}

#[test]
fn display_round_trips_through_the_diagram_parser() {
    let board = isolation_position! {
        "1 . ."
        ". x ."
        ". . 2"
    };

    let rendered = board.to_string();
    assert_eq!(rendered, "1 . .\n. x .\n. . 2\n");

    let reparsed = Board::from_diagram(&rendered).unwrap();
    assert_eq!(reparsed.to_string(), rendered);
}
