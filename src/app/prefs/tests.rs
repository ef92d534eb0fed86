use super::*;
use tempfile::NamedTempFile;

#[test]
fn missing_file_is_none() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let loaded = load_preferences(&dir.path().join("prefs")).expect("load");
    assert!(loaded.is_none());
}

#[test]
fn keyed_file_is_read() {
    let content = "appid,abc123\nlat,48.85\nlon,2.35\nloc,Paris\ntemp_unit,F\n\
                   speed_unit,kph\ntimeout,30\nfont_size,14\nx,100\ny,20\n";
    let prefs = parse_preferences(content);

    assert_eq!(prefs.api_key, "abc123");
    assert!((prefs.latitude - 48.85).abs() < 1e-9);
    assert!((prefs.longitude - 2.35).abs() < 1e-9);
    assert_eq!(prefs.location, "Paris");
    assert_eq!(prefs.temp_unit, TempUnit::Fahrenheit);
    assert_eq!(prefs.speed_unit, SpeedUnit::KilometersPerHour);
    assert_eq!(prefs.refresh_minutes(), 30);
    assert_eq!(prefs.font_size, 14);
    assert_eq!((prefs.window_x, prefs.window_y), (100, 20));
}

#[test]
fn values_split_at_first_comma_only() {
    let prefs = parse_preferences("loc,Portland, Oregon\n");
    assert_eq!(prefs.location, "Portland, Oregon");
}

#[test]
fn positional_file_is_read_in_key_order() {
    let content = "key-xyz\n40.71\n-74.0\nNew York\nF\nm/s\n20\n16\n5\n6\n";
    let prefs = parse_preferences(content);

    assert_eq!(prefs.api_key, "key-xyz");
    assert_eq!(prefs.location, "New York");
    assert_eq!(prefs.temp_unit, TempUnit::Fahrenheit);
    assert_eq!(prefs.speed_unit, SpeedUnit::MetersPerSecond);
    assert_eq!(prefs.refresh_minutes(), 20);
    assert_eq!((prefs.window_x, prefs.window_y), (5, 6));
}

#[test]
fn bad_values_and_unknown_keys_fall_back_to_defaults() {
    let prefs = parse_preferences("lat,north\ntimeout,soon\nspeed_unit,furlongs\ncolour,blue\n");
    let defaults = Preferences::default();

    assert_eq!(prefs.latitude, defaults.latitude);
    assert_eq!(prefs.refresh_interval, defaults.refresh_interval);
    assert_eq!(prefs.speed_unit, defaults.speed_unit);
}

#[test]
fn refresh_interval_is_clamped_to_ten_minutes() {
    let prefs = parse_preferences("timeout,3\n");
    assert_eq!(prefs.refresh_interval, 3);
    assert_eq!(prefs.refresh_minutes(), MIN_REFRESH_MINUTES);
    assert!(render_preferences(&prefs).contains("timeout,10\n"));
}

#[test]
fn negative_refresh_interval_clamps_instead_of_resetting() {
    let prefs = parse_preferences("timeout,-5\n");
    assert_eq!(prefs.refresh_minutes(), MIN_REFRESH_MINUTES);
    assert!(render_preferences(&prefs).contains("timeout,10\n"));
}

#[test]
fn font_size_is_clamped() {
    assert_eq!(parse_preferences("font_size,4\n").font_size, MIN_FONT_SIZE);
    assert_eq!(parse_preferences("font_size,90\n").font_size, MAX_FONT_SIZE);
}

#[test]
fn default_api_key_counts_as_missing() {
    assert!(!Preferences::default().has_api_key());
    let prefs = Preferences {
        api_key: "0123abcd".to_string(),
        ..Preferences::default()
    };
    assert!(prefs.has_api_key());
}

#[test]
fn save_then_load_roundtrips() {
    let prefs = Preferences {
        api_key: "k".to_string(),
        latitude: -33.87,
        longitude: 151.21,
        location: "Sydney".to_string(),
        temp_unit: TempUnit::Fahrenheit,
        speed_unit: SpeedUnit::Beaufort,
        refresh_interval: 45,
        ..Preferences::default()
    };
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("nested").join("prefs");

    save_preferences(&path, &prefs).expect("save");
    let loaded = load_preferences(&path).expect("load").expect("file exists");

    assert_eq!(loaded, prefs);
    assert!(!path.with_extension("tmp").exists());
}

#[test]
#[cfg(unix)]
fn saved_file_has_strict_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let file = NamedTempFile::new().expect("create temp prefs file");
    let path = file.path().to_path_buf();
    std::fs::remove_file(&path).ok();

    save_preferences(&path, &Preferences::default()).expect("save prefs");

    let mode = std::fs::metadata(&path).expect("metadata").permissions().mode() & 0o777;
    assert_eq!(mode, 0o600);
}

#[test]
fn explicit_cli_path_wins() {
    let cli = crate::test_support::test_cli_with_prefs("/tmp/elsewhere/prefs");
    assert_eq!(
        preferences_path(&cli),
        Some(PathBuf::from("/tmp/elsewhere/prefs"))
    );
}
