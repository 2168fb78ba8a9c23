use super::*;

#[test]
fn test_parse_and_render_roundtrip() {
    let pos = Position::startpos();
    let mv = parse_uci_move(&pos, "g1f3").unwrap();
    assert_eq!(move_to_uci(mv), "g1f3");
}

#[test]
fn test_parse_rejects_malformed_text() {
    let pos = Position::startpos();
    for txt in ["", "e2", "e2e", "e2e4qq", "i2e4", "e9e4", "e7e8k", "e2 e4"] {
        assert!(
            matches!(parse_uci_move(&pos, txt), Err(ChessError::MoveParse(_))),
            "{txt:?} should not parse"
        );
    }
}

#[test]
fn test_parse_rejects_illegal_move() {
    let pos = Position::startpos();
    assert_eq!(
        parse_uci_move(&pos, "e2e5"),
        Err(ChessError::IllegalMove("e2e5".to_string()))
    );
}

#[test]
fn test_missing_promotion_letter_promotes_to_queen() {
    let pos = Position::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "b7b8").unwrap();
    assert_eq!(mv.promo, Some(PieceKind::Queen));
    let under = parse_uci_move(&pos, "b7b8n").unwrap();
    assert_eq!(under.promo, Some(PieceKind::Knight));
}

#[test]
fn test_castle_flag_recovered() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = parse_uci_move(&pos, "e1c1").unwrap();
    assert!(mv.is_castle);
}

#[test]
fn test_pseudo_legal_parse_accepts_king_left_in_check() {
    let pos = Position::from_fen("rnbqk1nr/pppp1ppp/8/4p3/1b1PP3/8/PPP2PPP/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    assert!(matches!(
        parse_uci_move(&pos, "d4e5"),
        Err(ChessError::IllegalMove(_))
    ));
    let mv = parse_pseudo_legal_move(&pos, "d4e5").unwrap();
    assert_eq!(move_to_uci(mv), "d4e5");
    // Still no jumping over pieces.
    assert!(parse_pseudo_legal_move(&pos, "a1a5").is_err());
}
