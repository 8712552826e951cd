//! Content domain: tests for settings parsing and validation.

use super::SettingsDef;
use super::loader::parse_settings;

#[test]
fn test_parse_full_settings_file() {
    let source = r#"(
        schema_version: 1,
        seed: Some(7),
        move_speed: 0.25,
        obstacle_count: 3,
        obstacle_spawn_range: 10.0,
    )"#;

    let def = parse_settings(source, "settings.ron").unwrap();
    assert_eq!(def.schema_version, 1);
    assert_eq!(def.seed, Some(7));
    assert_eq!(def.move_speed, 0.25);
    assert_eq!(def.obstacle_count, 3);
    assert_eq!(def.obstacle_spawn_range, 10.0);
}

#[test]
fn test_parse_implicit_some_seed() {
    // IMPLICIT_SOME lets the file say `seed: 42` instead of `seed: Some(42)`.
    let source = r#"(
        schema_version: 1,
        seed: 42,
        move_speed: 0.1,
        obstacle_count: 5,
        obstacle_spawn_range: 20.0,
    )"#;

    let def = parse_settings(source, "settings.ron").unwrap();
    assert_eq!(def.seed, Some(42));
}

#[test]
fn test_parse_error_reports_file() {
    let err = parse_settings("(not valid", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_defaults_match_demo_constants() {
    let def = SettingsDef::default();
    assert_eq!(def.schema_version, 1);
    assert_eq!(def.seed, None);
    assert_eq!(def.move_speed, 0.1);
    assert_eq!(def.obstacle_count, 5);
    assert_eq!(def.obstacle_spawn_range, 20.0);
    assert!(def.validate().is_ok());
}

#[test]
fn test_validate_rejects_unknown_schema() {
    let def = SettingsDef {
        schema_version: 2,
        ..SettingsDef::default()
    };
    assert!(def.validate().is_err());
}

#[test]
fn test_validate_rejects_bad_ranges() {
    let zero_speed = SettingsDef {
        move_speed: 0.0,
        ..SettingsDef::default()
    };
    assert!(zero_speed.validate().is_err());

    let negative_range = SettingsDef {
        obstacle_spawn_range: -5.0,
        ..SettingsDef::default()
    };
    assert!(negative_range.validate().is_err());

    let nan_speed = SettingsDef {
        move_speed: f32::NAN,
        ..SettingsDef::default()
    };
    assert!(nan_speed.validate().is_err());
}

#[test]
fn test_zero_obstacles_is_allowed() {
    let def = SettingsDef {
        obstacle_count: 0,
        ..SettingsDef::default()
    };
    assert!(def.validate().is_ok());
}
