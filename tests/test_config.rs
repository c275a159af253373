use space_survival::config::GameConfig;
use space_survival::error::GameError;
use space_survival::model::GameModel;

#[test]
fn defaults_match_classic_rules() {
    let c = GameConfig::default();
    assert_eq!((c.width, c.height), (10, 20));
    assert_eq!(c.start_spawn_rate, 2);
    assert_eq!(c.spawn_rate_increase, 5);
    assert_eq!(c.start_level, 1);
    assert_eq!(c.score_threshold, 100);
    assert_eq!((c.asteroid_damage, c.enemy_damage), (10, 20));
    assert_eq!(c.enemy_spawn_factor, 0.5);
    assert_eq!(c.power_up_spawn_factor, 0.25);
    assert_eq!(c.ship_start, (5, 10));
    assert_eq!(c.max_health, 100);
    assert!(c.seed.is_none());
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let c = GameConfig::from_json_str(r#"{ "start_spawn_rate": 10, "seed": 42 }"#).unwrap();
    assert_eq!(c.start_spawn_rate, 10);
    assert_eq!(c.seed, Some(42));
    assert_eq!(c.width, 10);
    assert_eq!(c.enemy_damage, 20);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = GameConfig::from_json_str("{ width: ").unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
}

#[test]
fn validation_rejects_bad_values() {
    let bad = [
        GameConfig { width: 0, ..GameConfig::default() },
        GameConfig { height: -1, ..GameConfig::default() },
        GameConfig { ship_start: (11, 10), ..GameConfig::default() },
        GameConfig { ship_start: (5, -1), ..GameConfig::default() },
        GameConfig { start_level: 0, ..GameConfig::default() },
        GameConfig { score_threshold: 0, ..GameConfig::default() },
        GameConfig { max_health: 0, ..GameConfig::default() },
        GameConfig { enemy_spawn_factor: -0.5, ..GameConfig::default() },
        GameConfig { power_up_spawn_factor: f64::NAN, ..GameConfig::default() },
    ];
    for config in bad {
        assert!(
            matches!(config.validate(), Err(GameError::Config(_))),
            "accepted {:?}",
            config
        );
        assert!(GameModel::new(config).is_err());
    }
}

#[test]
fn load_reports_missing_file() {
    let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("not/here.json"));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("space_survival_cfg_{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "width": 12, "ship_start": [6, 10] }"#).unwrap();
    let c = GameConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(c.width, 12);
    assert_eq!(c.ship_start, (6, 10));
}

#[test]
fn config_round_trips_through_json() {
    let c = GameConfig { seed: Some(7), ..GameConfig::default() };
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(GameConfig::from_json_str(&json).unwrap(), c);
}
