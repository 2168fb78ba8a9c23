use super::*;
use chess_core::legal_moves;
use neural_engine::LinearOracle;
use std::io::Cursor;

fn record(moves: &[&str]) -> GameRecord {
    let mut game = GameRecord::new();
    for text in moves {
        let mv = parse_uci_move(game.board(), text).unwrap();
        game.push(mv).unwrap();
    }
    game
}

fn material() -> Rc<dyn ScoreOracle> {
    Rc::new(LinearOracle::material())
}

#[test]
fn test_search_player_plays_legal_moves_for_both_colours() {
    let mut player = SearchPlayer::new(material(), 2);
    player.new_game();

    let mut game = GameRecord::new();
    for _ in 0..6 {
        let mv = player.play(&game).unwrap();
        assert!(legal_moves(game.board()).contains(&mv));
        game.push(mv).unwrap();
    }
}

#[test]
fn test_search_player_takes_a_hanging_queen() {
    // 1. e4 d5 2. Qg4: the black bishop on c8 takes the queen.
    let game = record(&["e2e4", "d7d5", "d1g4"]);
    let mut player = SearchPlayer::new(material(), 1);
    let mv = player.play(&game).unwrap();
    assert_eq!(move_to_uci(mv), "c8g4");
}

#[test]
fn test_depth_is_drawn_from_range() {
    let mut player = SearchPlayer::new(material(), 1).with_depth_range(1..=2, Some(3));
    let mut seen = [false; 3];
    for _ in 0..40 {
        player.new_game();
        assert!((1..=2).contains(&player.depth()));
        seen[player.depth() as usize] = true;
    }
    assert!(seen[1] && seen[2]);
}

#[test]
fn test_reference_player_answers_as_black() {
    let game = record(&["e2e4"]);
    let mut player = ReferencePlayer::new(Duration::from_millis(50)).with_max_depth(2);
    player.new_game();
    let mv = player.play(&game).unwrap();
    assert!(legal_moves(game.board()).contains(&mv));
}

#[test]
fn test_think_time_is_drawn_from_range() {
    let mut player = ReferencePlayer::new(Duration::ZERO).with_secs_range(0.0, 0.5, Some(9));
    for _ in 0..20 {
        player.new_game();
        assert!(player.think_time() <= Duration::from_millis(500));
    }
}

#[test]
fn test_board_resyncs_after_new_record() {
    let mut board = MailboxBoard::default();
    board.sync(&record(&["e2e4", "e7e5", "g1f3"])).unwrap();
    assert_eq!(board.applied, 3);

    // A shorter record means a new game started.
    let pos = *board.sync(&record(&["d2d4"])).unwrap();
    assert_eq!(board.applied, 1);
    let expected = Position::initial().apply(mailbox::parse_move_text("d2d4").unwrap());
    assert_eq!(pos, expected);
}

#[test]
fn test_interactive_reprompts_until_legal() {
    let input = Cursor::new("hello\ne2e5\n  e2e4  \n");
    let mut player = InteractivePlayer::new(input, Vec::new());
    let game = GameRecord::new();

    let mv = player.play(&game).unwrap();
    assert_eq!(move_to_uci(mv), "e2e4");

    let output = String::from_utf8(player.into_output()).unwrap();
    assert!(output.contains("cannot parse move"));
    assert!(output.contains("not a legal move"));
    assert_eq!(output.matches("your turn: ").count(), 3);
}

#[test]
fn test_interactive_end_of_input_interrupts() {
    let mut player = InteractivePlayer::new(Cursor::new("e2e5\n"), Vec::new());
    let err = player.play(&GameRecord::new()).unwrap_err();
    assert!(matches!(err, PlayerError::Interrupted));
}

#[test]
fn test_search_player_may_leave_its_king_in_check() {
    // 1. e4 e5 2. d4 Bb4+: a one-ply material search grabs the pawn on e5.
    let game = record(&["e2e4", "e7e5", "d2d4", "f8b4"]);
    let mut player = SearchPlayer::new(material(), 1);
    let mv = player.play(&game).unwrap();
    assert_eq!(move_to_uci(mv), "d4e5");
    assert!(!legal_moves(game.board()).contains(&mv));
}

#[test]
fn test_two_terminal_players_share_stdin() {
    let white = InteractivePlayer::stdio();
    let black = InteractivePlayer::stdio();
    assert_eq!(white.name(), black.name());
}
