use super::*;
use mailbox::parse_square;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_square(rng: &mut StdRng) -> String {
    format!(
        "{}{}",
        (b'a' + rng.gen_range(0..8u8)) as char,
        (b'1' + rng.gen_range(0..8u8)) as char
    )
}

fn random_text(rng: &mut StdRng) -> String {
    let from = random_square(rng);
    let to = random_square(rng);
    let promo = ["", "q", "r", "b", "n"][rng.gen_range(0..5)];
    format!("{from}{to}{promo}")
}

#[test]
fn test_round_trip_both_orientations() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let text = random_text(&mut rng);
        for orientation in [Orientation::Absolute, Orientation::Rotated] {
            let internal = to_internal(orientation, &text).unwrap();
            assert_eq!(to_external(internal, orientation), text);
        }
    }
}

#[test]
fn test_rotated_cells_are_complemented() {
    let e2 = parse_square("e2").unwrap();
    let e4 = parse_square("e4").unwrap();

    let absolute = to_internal(Orientation::Absolute, "e2e4").unwrap();
    assert_eq!((absolute.from, absolute.to), (e2, e4));

    let rotated = to_internal(Orientation::Rotated, "e2e4").unwrap();
    assert_eq!((rotated.from, rotated.to), (119 - e2, 119 - e4));
}

#[test]
fn test_rejects_malformed_text() {
    for text in ["", "e2", "e2e", "e2e4qq", "i2e4", "e9e4", "e2e4k"] {
        assert!(
            matches!(
                to_internal(Orientation::Rotated, text),
                Err(MailboxError::MoveParse(_))
            ),
            "{text:?}"
        );
    }
}

#[test]
fn test_bridge_uses_each_movers_orientation() {
    let black = CoordinateBridge::new(Color::Black);
    // White's move is read as played, black's own move is rotated back.
    let opening = black.opponent_to_internal("e2e4").unwrap();
    assert_eq!(opening, to_internal(Orientation::Absolute, "e2e4").unwrap());

    let reply = to_internal(Orientation::Rotated, "e7e5").unwrap();
    assert_eq!(black.own_to_external(reply), "e7e5");

    let white = CoordinateBridge::new(Color::White);
    assert_eq!(white.own_color(), Color::White);
    assert_eq!(white.opponent_to_internal("e7e5").unwrap(), reply);
}
