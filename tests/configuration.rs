//! Tests for configuration system

use mealweek::Config;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.observability.log_level, "info");
    assert_eq!(config.schedule.utc_offset_hours, 0);
    assert_eq!(config.data.images_dir, "public/images");
    assert!(config.data.recipes.is_none());
    assert_eq!(config.site.title, "This Week");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("mealweek.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[schedule]
utc_offset_hours = -5

[site]
subtitle = "Sunday Prep Edition"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.schedule.utc_offset_hours, -5);
    assert_eq!(config.site.subtitle, "Sunday Prep Edition");
    assert_eq!(config.site.title, "This Week");
    assert_eq!(config.observability.format, "pretty");
}

#[test]
fn test_config_rejects_out_of_range_offset() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("mealweek.toml");
    std::fs::write(&path, "[schedule]\nutc_offset_hours = 15\n").unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();

    assert!(config.validate().is_err());
}
