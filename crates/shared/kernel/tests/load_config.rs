use geohint_kernel::config::{ConfigError, load_config, load_geohint_config};
use geohint_kernel::domain::config::GeohintConfig;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).expect("write config file");
    path
}

#[test]
fn loads_sections_from_toml() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(
        &dir,
        "geohint.toml",
        r#"
[fields]
filterable_keys = ["language", "tld", "driving_side"]

[render]
plate_width = 480
neutral_background = "transparent"

[logging]
level = "debug"
json = true
"#,
    );

    let cfg: GeohintConfig = load_config(Some(&path)).expect("config loads");
    assert_eq!(cfg.fields.filterable_keys, ["language", "tld", "driving_side"]);
    assert_eq!(cfg.render.plate_width, 480);
    assert_eq!(cfg.render.neutral_background, "transparent");
    assert_eq!(cfg.render.plate_gap, 10, "unset keys keep their defaults");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
}

#[test]
fn missing_file_is_an_error_for_the_generic_loader() {
    let dir = TempDir::new().expect("tempdir");
    let missing = dir.path().join("absent.toml");

    let err = load_config::<GeohintConfig>(Some(&missing)).expect_err("file is required");
    assert!(matches!(err, ConfigError::Config { context: Some(_), .. }));
    assert!(err.to_string().starts_with("Config error (Failed to build config)"));
}

#[test]
fn type_mismatch_reports_deserialize_context() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "bad.toml", "[render]\nplate_width = \"wide\"\n");

    let err = load_config::<GeohintConfig>(Some(&path)).expect_err("width must be numeric");
    assert!(err.to_string().contains("Failed to deserialize config"));
}

#[test]
fn explicit_path_goes_through_the_required_loader() {
    let dir = TempDir::new().expect("tempdir");
    let path = write(&dir, "geohint.json", r#"{ "render": { "tip_text_limit": 30 } }"#);

    let cfg = load_geohint_config(Some(&path)).expect("json config loads");
    assert_eq!(cfg.render.tip_text_limit, 30);
    assert_eq!(cfg.render.plate_width, 400);
}
