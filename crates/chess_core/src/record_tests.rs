use super::*;
use crate::rules::both_kings_present;
use crate::uci::{parse_pseudo_legal_move, parse_uci_move};

fn play(record: &mut GameRecord, txt: &str) {
    let mv = parse_uci_move(record.board(), txt).unwrap();
    record.push(mv).unwrap();
}

#[test]
fn test_record_links_parents() {
    let mut record = GameRecord::new();
    assert!(record.last_move().is_none());

    play(&mut record, "e2e4");
    play(&mut record, "e7e5");
    play(&mut record, "g1f3");

    let parents: Vec<Option<usize>> = record.line_back().map(|n| n.parent).collect();
    assert_eq!(parents, vec![Some(1), Some(0), None]);
    let line: Vec<String> = record.moves().into_iter().map(move_to_uci).collect();
    assert_eq!(line, ["e2e4", "e7e5", "g1f3"]);
    assert_eq!(record.side_to_move(), Color::Black);
}

#[test]
fn test_record_rejects_illegal_move() {
    let mut record = GameRecord::new();
    assert!(record.push(Move::new(12, 36)).is_err()); // e2e5
    assert!(record.is_empty());
    assert_eq!(record.board(), &Position::startpos());
}

#[test]
fn test_king_left_in_check_is_captured() {
    let mut record = GameRecord::new();
    for txt in ["e2e4", "e7e5", "d2d4", "f8b4"] {
        play(&mut record, txt);
    }
    let dxe5 = parse_pseudo_legal_move(record.board(), "d4e5").unwrap();
    record.push(dxe5).unwrap();
    let takes_king = parse_uci_move(record.board(), "b4e1").unwrap();
    record.push(takes_king).unwrap();

    let board = record.board();
    assert_eq!(board.king_sq(Color::White), None);
    assert!(!both_kings_present(&board.render()));
    assert!(!board.is_checkmate());
    assert!(!board.is_stalemate());
}
