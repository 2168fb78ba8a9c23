use super::*;
use crate::game::Side;

#[test]
fn test_outcome_labels() {
    assert_eq!(Outcome::Win(Side::A).to_string(), "A");
    assert_eq!(Outcome::Win(Side::B).to_string(), "B");
    assert_eq!(Outcome::Draw.to_string(), "-");
    assert_eq!(Outcome::Exception(Side::A).to_string(), "A-exception");
    assert_eq!(Outcome::Exception(Side::B).to_string(), "B-exception");
}

#[test]
fn test_format_line() {
    let times = SideTimes { a: 1.5, b: 0.25 };
    assert_eq!(
        StatsLog::format_line(Outcome::Win(Side::B), times),
        "B 1.500000 0.250000\n"
    );
    assert_eq!(
        StatsLog::format_line(Outcome::Draw, SideTimes::default()),
        "- 0.000000 0.000000\n"
    );
}

#[test]
fn test_append_creates_and_extends() {
    let dir = std::env::temp_dir().join(format!("selfplay_stats_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("stats.txt");
    std::fs::remove_file(&path).ok();

    let log = StatsLog::new(&path);
    log.append(Outcome::Win(Side::A), SideTimes { a: 1.0, b: 2.0 })
        .unwrap();
    log.append(Outcome::Exception(Side::B), SideTimes::default())
        .unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "A 1.000000 2.000000\nB-exception 0.000000 0.000000\n");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_append_failure_is_reported() {
    let dir = std::env::temp_dir().join(format!("selfplay_stats_dir_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    // A directory cannot be opened for appending.
    let log = StatsLog::new(&dir);
    assert!(matches!(
        log.append(Outcome::Draw, SideTimes::default()),
        Err(GameError::Stats { .. })
    ));
    std::fs::remove_dir_all(&dir).ok();
}
