use super::*;

#[test]
fn test_corner_cells() {
    assert_eq!(parse_square("a1"), Some(A1));
    assert_eq!(parse_square("h1"), Some(H1));
    assert_eq!(parse_square("a8"), Some(A8));
    assert_eq!(parse_square("h8"), Some(H8));
    assert_eq!(parse_square("e2"), Some(85));
    assert_eq!(parse_square("i1"), None);
    assert_eq!(parse_square("a0"), None);
    assert_eq!(parse_square("a10"), None);
}

#[test]
fn test_render_inverts_parse() {
    for file in 'a'..='h' {
        for rank in '1'..='8' {
            let name = format!("{file}{rank}");
            let cell = parse_square(&name).unwrap();
            assert_eq!(render_square(cell), name);
        }
    }
}

#[test]
fn test_move_text() {
    let mv = parse_move_text("e7e8q").unwrap();
    assert_eq!(mv.from, parse_square("e7").unwrap());
    assert_eq!(mv.promotion, Some(Promotion::Queen));
    assert_eq!(render_move_text(mv), "e7e8q");

    for bad in ["e2", "e2e4e", "e2e9", "z2e4", "e2e4k", "e2e4Q", "é2e4"] {
        assert!(
            matches!(parse_move_text(bad), Err(MailboxError::MoveParse(_))),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_rotation_is_an_involution() {
    let mv = MailboxMove::new(85, 65);
    assert_eq!(mv.rotated(), MailboxMove::new(34, 54));
    assert_eq!(mv.rotated().rotated(), mv);
}
