use std::io::Write;
use std::str::FromStr;
use std::time::Duration;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;
use typestrike::config::{Config, Difficulty};
use typestrike::question::PlayMode;
use typestrike::StrikeError;

fn config_for(difficulty: Difficulty) -> Config {
    let mut c = Config::default();
    c.session.difficulty = difficulty;
    c
}

#[test]
fn test_difficulty_profiles_scale_up() {
    let profiles: Vec<_> = Difficulty::iter().map(|d| d.profile()).collect();
    assert_eq!(profiles.len(), 3);
    for pair in profiles.windows(2) {
        assert!(pair[1].time_limit_secs > pair[0].time_limit_secs);
        assert!(pair[1].max_hp > pair[0].max_hp);
        assert!(pair[1].levels.len() > pair[0].levels.len());
        assert!(pair[1].combo_step < pair[0].combo_step);
    }
}

#[test]
fn test_plan_uses_profile_defaults() {
    let plan = config_for(Difficulty::Normal).plan().unwrap();
    assert_eq!(plan.time_limit, Duration::from_secs(90));
    assert_eq!(plan.max_hp, 3000);
    assert_eq!(plan.levels, vec![1, 2]);
    assert_eq!(plan.scoring.combo_step, 40);
    assert_eq!(plan.scoring.base_damage, 10);
    assert_eq!(plan.mode, PlayMode::JpJp);
    assert!(plan.nasal.enabled);
}

#[test]
fn test_overrides_win_over_profile() {
    let mut c = config_for(Difficulty::Hard);
    c.session.time_limit = Some(15.5);
    c.session.max_hp = Some(42);
    c.scoring.combo_step = Some(5);
    c.nasal.no_nasal_lookahead = true;

    let plan = c.plan().unwrap();
    assert_eq!(plan.time_limit, Duration::from_secs_f64(15.5));
    assert_eq!(plan.max_hp, 42);
    assert_eq!(plan.scoring.combo_step, 5);
    assert_eq!(plan.levels, vec![1, 2, 3]);
    assert!(!plan.nasal.enabled);
}

#[test]
fn test_invalid_values_are_config_errors() {
    for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let mut c = Config::default();
        c.session.time_limit = Some(bad);
        assert!(matches!(c.plan(), Err(StrikeError::Config(_))), "time_limit {}", bad);
    }

    let mut c = Config::default();
    c.session.max_hp = Some(0);
    assert!(matches!(c.plan(), Err(StrikeError::Config(_))));

    let mut c = Config::default();
    c.scoring.combo_step = Some(0);
    assert!(matches!(c.plan(), Err(StrikeError::Config(_))));
}

#[test]
fn test_out_of_range_time_limit_is_config_error() {
    for huge in [1e20, f64::MAX] {
        let mut c = Config::default();
        c.session.time_limit = Some(huge);
        assert!(matches!(c.plan(), Err(StrikeError::Config(_))), "time_limit {}", huge);
    }
}

#[test]
fn test_overflowing_damage_is_config_error() {
    let mut c = Config::default();
    c.scoring.base_damage = u32::MAX;
    assert!(matches!(c.plan(), Err(StrikeError::Config(_))));

    c.scoring.damage_cap = 0;
    let plan = c.plan().unwrap();
    assert_eq!(plan.scoring.max_damage(), u32::MAX);
}

#[test]
fn test_nasal_params_are_folded() {
    let mut c = Config::default();
    c.nasal.nasal_trigger = 'N';
    c.nasal.nasal_vowels = "AIUEO".into();
    let policy = c.plan().unwrap().nasal;
    assert_eq!(policy.trigger, 'n');
    assert_eq!(policy.vowels, vec!['a', 'i', 'u', 'e', 'o']);
    assert_eq!(policy.unit, "ん");
}

#[test]
fn test_load_partial_json_config() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"session": {{"mode": "kr_jp", "difficulty": "hard", "practice": true, "seed": 9}}}}"#
    )
    .unwrap();

    let c = Config::load_from_file(file.path()).unwrap();
    assert_eq!(c.session.mode, PlayMode::KrJp);
    assert_eq!(c.session.difficulty, Difficulty::Hard);
    assert!(c.session.practice);
    assert_eq!(c.session.seed, Some(9));
    assert_eq!(c.scoring.damage_cap, 10);

    let plan = c.plan().unwrap();
    assert_eq!(plan.max_hp, 8000);
}

#[test]
fn test_load_bad_json_config() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"session": {{"difficulty": "nightmare"}}}}"#).unwrap();
    assert!(matches!(Config::load_from_file(file.path()), Err(StrikeError::Json(_))));
}

#[test]
fn test_enums_parse_from_cli_strings() {
    assert_eq!(Difficulty::from_str("normal").unwrap(), Difficulty::Normal);
    assert_eq!(PlayMode::from_str("kr_kr").unwrap(), PlayMode::KrKr);
    assert!(Difficulty::from_str("nightmare").is_err());
    assert_eq!(PlayMode::iter().count(), 4);
}
