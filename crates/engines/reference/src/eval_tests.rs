use super::*;
use mailbox::{parse_move_text, parse_square};

#[test]
fn test_initial_position_is_level() {
    assert_eq!(evaluate(&Position::initial()), 0);
}

#[test]
fn test_evaluate_is_side_relative() {
    let pos = Position::initial().apply(parse_move_text("e2e4").unwrap());
    // Black to move after a strong centre pawn push.
    assert!(evaluate(&pos) < 0);
    assert_eq!(evaluate(&pos), -evaluate(&pos.rotate()));
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(b'P'), 100);
    assert_eq!(piece_value(b'q'), 900);
    assert_eq!(piece_value(b'K'), 0);
    assert_eq!(piece_value(b'.'), 0);
}

#[test]
fn test_move_value_prefers_king_capture() {
    let pos = Position::from_board_text(
        "....k... ........ ........ ....q... ........ ........ ........ ....R..K",
        (false, false),
        (false, false),
    )
    .unwrap();
    let rook = parse_square("e1").unwrap();
    let take_queen = MailboxMove::new(rook, parse_square("e5").unwrap());
    let quiet = MailboxMove::new(rook, parse_square("e2").unwrap());
    assert!(move_value(&pos, take_queen) > move_value(&pos, quiet));

    let pos = Position::from_board_text(
        "....k... ........ ........ ........ ........ ........ ........ ....R..K",
        (false, false),
        (false, false),
    )
    .unwrap();
    let take_king = MailboxMove::new(rook, parse_square("e8").unwrap());
    assert!(move_value(&pos, take_king) >= MATE);
}
