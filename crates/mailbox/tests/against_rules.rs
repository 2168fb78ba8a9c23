//! Plays random games on the absolute rules board and mirrors every move
//! onto the rotated mailbox board, checking both stay in step.

use chess_core::{legal_moves, move_to_uci, Color, Position as Board};
use mailbox::{parse_move_text, MailboxMove, Position, Promotion};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn to_mailbox(text: &str, mover: Color) -> MailboxMove {
    let mv = parse_move_text(text).expect("rules board emits valid text");
    match mover {
        Color::White => mv,
        Color::Black => mv.rotated(),
    }
}

/// The mailbox board seen from white, as 64 symbols.
fn white_view(pos: &Position, to_move: Color) -> String {
    let pos = match to_move {
        Color::White => *pos,
        Color::Black => pos.rotate(),
    };
    pos.board_text().split_whitespace().collect()
}

#[test]
fn random_games_stay_in_sync() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _game in 0..20 {
        let mut board = Board::startpos();
        let mut mailbox = Position::initial();

        for _ply in 0..120 {
            let moves = legal_moves(&board);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };
            let mover = board.side_to_move;

            // Every legal move the mailbox generator can express must be generated.
            let generated = mailbox.gen_moves();
            for legal in &moves {
                let text = move_to_uci(*legal);
                let candidate = to_mailbox(&text, mover);
                if matches!(candidate.promotion, None | Some(Promotion::Queen)) {
                    assert!(
                        generated.contains(&candidate),
                        "{text} missing from mailbox moves"
                    );
                }
            }

            let text = move_to_uci(mv);
            mailbox = mailbox
                .try_apply(to_mailbox(&text, mover))
                .expect("legal move applies");
            board = board.play(mv);

            let expected: String = board.render().split_whitespace().collect();
            assert_eq!(white_view(&mailbox, board.side_to_move), expected, "after {text}");
        }
    }
}
