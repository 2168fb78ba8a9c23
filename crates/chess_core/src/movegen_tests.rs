use super::*;

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    let moves = legal_moves(&pos);
    // Starting position has 20 legal moves
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos =
        Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
            .unwrap();
    let moves = legal_moves(&pos);
    assert_eq!(moves.len(), 48);
    assert_eq!(moves.iter().filter(|m| m.is_castle).count(), 2);
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Knight on e2 is pinned against the king by the rook on e8.
    let pos = Position::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    let moves = legal_moves(&pos);
    assert!(moves.iter().all(|m| m.from != 12));
}

#[test]
fn test_en_passant_generated() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let ep: Vec<_> = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.is_en_passant)
        .collect();
    assert_eq!(ep.len(), 1);
    let after = pos.play(ep[0]);
    assert_eq!(after.piece_at(35), None, "captured pawn on d5 is removed");
}

#[test]
fn test_promotions_generated() {
    let pos = Position::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let promos = legal_moves(&pos)
        .into_iter()
        .filter(|m| m.promo.is_some())
        .count();
    assert_eq!(promos, 4);
}

#[test]
fn test_no_castling_through_check() {
    // Black rook on f8 covers f1, so kingside castling is illegal.
    let pos = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert!(legal_moves(&pos).iter().all(|m| !m.is_castle));
}

#[test]
fn test_pseudo_legal_moves_ignore_own_king() {
    // White is in check from the bishop on b4.
    let pos = Position::from_fen("rnbqk1nr/pppp1ppp/8/4p3/1b1PP3/8/PPP2PPP/RNBQKBNR w KQkq - 1 3")
        .unwrap();
    let legal = legal_moves(&pos);
    let pseudo = pseudo_legal_moves(&pos);
    assert!(legal.iter().all(|m| pseudo.contains(m)));
    // d4xe5 leaves the king in check.
    let dxe5 = Move::new(27, 36);
    assert!(pseudo.contains(&dxe5));
    assert!(!legal.contains(&dxe5));

    // Castling through the covered f1 square is generated but not legal.
    let through = Position::from_fen("4kr2/8/8/8/8/8/8/4K2R w K - 0 1").unwrap();
    assert_eq!(
        pseudo_legal_moves(&through).iter().filter(|m| m.is_castle).count(),
        1
    );
}
