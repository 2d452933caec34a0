use star_catcher::config::{GameConfig, Tint};

#[test]
fn defaults_match_reference_game() {
    let c = GameConfig::default();
    assert_eq!((c.field_width, c.field_height), (600, 500));
    assert_eq!((c.catcher_width, c.catcher_height), (80, 20));
    assert_eq!(c.catcher_y(), 460);
    assert_eq!(c.object_size, 15);
    assert_eq!(c.tick_interval_ms, 30);
    assert_eq!(c.total_ticks, 300);
    assert_eq!(c.spawn_probability, 0.05);
    assert_eq!(c.favorable_probability, 0.75);
    assert_eq!((c.fall_speed_min, c.fall_speed_max), (3, 7));
    assert_eq!((c.favorable_delta, c.unfavorable_delta), (10, -5));
    assert_eq!(c.popup_duration_ms, 300);
    assert_eq!(c.background, Tint::Navy);
    assert!(c.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let c = GameConfig::from_json(r#"{ "total_ticks": 600, "tiers": { "top_min": 200 } }"#).unwrap();
    assert_eq!(c.total_ticks, 600);
    assert_eq!(c.tiers.top_min, 200);
    assert_eq!(c.tiers.second_min, 50);
    assert_eq!(c.field_width, 600);
}

#[test]
fn tints_use_lowercase_names() {
    let c = GameConfig::from_json(r#"{ "background": "black" }"#).unwrap();
    assert_eq!(c.background, Tint::Black);
    assert!(GameConfig::from_json(r#"{ "background": "Purple" }"#).is_err());
}

#[test]
fn json_round_trip_preserves_config() {
    let original = GameConfig { spawn_probability: 0.2, total_ticks: 42, ..GameConfig::default() };
    let json = original.to_json_pretty().unwrap();
    assert_eq!(GameConfig::from_json(&json).unwrap(), original);
}

#[test]
fn rejects_bad_probabilities() {
    let err = GameConfig::from_json(r#"{ "spawn_probability": 1.5 }"#).unwrap_err();
    assert!(format!("{err:#}").contains("spawn_probability"));
    assert!(GameConfig::from_json(r#"{ "favorable_probability": -0.1 }"#).is_err());
}

#[test]
fn rejects_inconsistent_geometry_and_clock() {
    let cases = [
        GameConfig { catcher_width: 700, ..GameConfig::default() },
        GameConfig { fall_speed_min: 8, fall_speed_max: 7, ..GameConfig::default() },
        GameConfig { fall_speed_min: 0, ..GameConfig::default() },
        GameConfig { total_ticks: 0, ..GameConfig::default() },
        GameConfig { ticks_per_display_second: 0, ..GameConfig::default() },
        GameConfig { object_size: 0, ..GameConfig::default() },
        GameConfig { catcher_floor_gap: 500, ..GameConfig::default() },
    ];
    for config in cases {
        assert!(config.validate().is_err(), "accepted {config:?}");
    }
}

#[test]
fn rejects_non_descending_tiers() {
    let mut c = GameConfig::default();
    c.tiers.second_min = 150;
    assert!(c.validate().is_err());
}

#[test]
fn load_reports_missing_file() {
    let err = GameConfig::load(std::path::Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(format!("{err:#}").contains("here.json"));
}

#[test]
fn delta_text_is_signed() {
    assert_eq!(GameConfig::delta_text(10), "+10");
    assert_eq!(GameConfig::delta_text(-5), "-5");
    assert_eq!(GameConfig::delta_text(0), "+0");
}
