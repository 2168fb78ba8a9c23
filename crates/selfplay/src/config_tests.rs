use super::*;

#[test]
fn test_defaults() {
    let config = SelfPlayConfig::from_toml("").unwrap();
    assert_eq!(config, SelfPlayConfig::default());
    assert_eq!(config.white, PlayerKind::Search);
    assert_eq!(config.black, PlayerKind::Reference);
    assert_eq!(config.depth_range, [1, 2]);
    assert_eq!(config.reference_secs_range, [0.0, 1.0]);
    assert_eq!(config.stats_path, PathBuf::from("stats.txt"));
    assert_eq!(config.max_games, None);
    assert_eq!(config.oracle_source(), OracleSource::Material);
}

#[test]
fn test_parse_full_config() {
    let config = SelfPlayConfig::from_toml(
        r#"
        white = "reference"
        black = "search"
        depth_range = [2, 3]
        reference_secs_range = [0.1, 0.2]
        oracle = "models/weights.json"
        stats_path = "out/stats.txt"
        max_games = 5
        seed = 42
        "#,
    )
    .unwrap();

    assert_eq!(config.white, PlayerKind::Reference);
    assert_eq!(config.black, PlayerKind::Search);
    assert_eq!(config.depth_range, [2, 3]);
    assert_eq!(config.max_games, Some(5));
    assert_eq!(config.seed, Some(42));
    assert_eq!(
        config.oracle_source(),
        OracleSource::Json(PathBuf::from("models/weights.json"))
    );
}

#[test]
fn test_oracle_sources() {
    let config = SelfPlayConfig {
        oracle: "net.onnx".to_string(),
        ..Default::default()
    };
    assert_eq!(
        config.oracle_source(),
        OracleSource::Onnx(PathBuf::from("net.onnx"))
    );
}

#[test]
fn test_rejects_bad_values() {
    for text in [
        "depth_range = [0, 2]",
        "depth_range = [3, 2]",
        "reference_secs_range = [-1.0, 1.0]",
        "reference_secs_range = [2.0, 1.0]",
        "oracle = \"\"",
    ] {
        assert!(
            matches!(SelfPlayConfig::from_toml(text), Err(ConfigError::Invalid(_))),
            "{text}"
        );
    }
    assert!(matches!(
        SelfPlayConfig::from_toml("white = \"nobody\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_oracle_file() {
    let config = SelfPlayConfig {
        oracle: "/nonexistent/weights.json".to_string(),
        ..Default::default()
    };
    assert!(matches!(config.build_oracle(), Err(ConfigError::Oracle(_))));
}

#[test]
fn test_load_missing_file() {
    assert!(matches!(
        SelfPlayConfig::load(Path::new("/nonexistent/selfplay.toml")),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn test_build_loop() {
    let config = SelfPlayConfig {
        black: PlayerKind::Search,
        seed: Some(1),
        ..Default::default()
    };
    assert!(config.build_loop().is_ok());
}

#[test]
fn test_build_loop_with_two_humans() {
    let config = SelfPlayConfig::from_toml("white = \"human\"\nblack = \"human\"\n").unwrap();
    assert!(config.build_loop().is_ok());
}
