use geohint_domain::config::{FieldsConfig, GeohintConfig, LoggingConfig, RenderConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let fields = FieldsConfig::default();
    assert_eq!(fields.filterable_keys, ["language", "tld"]);

    let render = RenderConfig::default();
    assert_eq!(render.plate_width, 400);
    assert!((render.plate_aspect_ratio - 1.0 / 2.3).abs() < f64::EPSILON);
    assert!((render.gradient_alpha - 0.4).abs() < f64::EPSILON);
    assert_eq!(render.neutral_background, "white");
    assert_eq!(render.tip_asset_prefix, "assets/tips/");

    let logging = LoggingConfig::default();
    assert_eq!(logging.level, "info");
    assert!(logging.directory.is_none());
}

#[test]
fn config_deserializes_partial_sections() {
    let raw = json!({
        "fields": { "filterable_keys": ["language", "tld", "camera"] },
        "render": { "plate_width": 320, "neutral_background": "#fff" }
    });

    let cfg: GeohintConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.fields.filterable_keys.len(), 3);
    assert_eq!(cfg.render.plate_width, 320);
    assert_eq!(cfg.render.neutral_background, "#fff");
    assert_eq!(cfg.render.tip_text_limit, 25);
    assert_eq!(cfg.logging.max_files, 10);
}

#[test]
fn config_clones_share_until_mutated() {
    let base = GeohintConfig::default();
    let mut tweaked = base.clone();
    tweaked.render.plate_width = 200;

    assert_eq!(base.render.plate_width, 400);
    assert_eq!(tweaked.render.plate_width, 200);
}
