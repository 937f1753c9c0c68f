use geohint_domain::config::RenderConfig;
use geohint_domain::{CountryRecord, DisplayOptions, FieldPath};
use geohint_fields::{FieldRegistry, LabelStyle, NO_CONFIG, Renderer};
use serde_json::json;

fn record(raw: serde_json::Value) -> CountryRecord {
    serde_json::from_value(raw).expect("record deserialize")
}

fn japan() -> CountryRecord {
    record(json!({
        "language": ["Japanese"],
        "tld": ".jp",
        "latlng": [36, 138],
        "crosswalk_stripes": "8-10",
        "flag": { "description": "red circle on white", "image_url": "https://flags.example/jp.png" },
        "number_plate_config": {
            "front": { "bg_color": "white", "text_color": "green" },
            "rear": { "bg_color": "white", "text_color": "green" }
        },
        "geoguessr_tips": {
            "short": [
                { "type": "text", "content": "Yellow plates are kei cars only" },
                { "type": "image", "path": "jp_pole.png", "caption": "Striped utility poles near rails" },
                { "type": "image", "path": "https://img.example/jp_sign.png" },
                { "type": "unknown" }
            ]
        }
    }))
}

fn style(options: DisplayOptions) -> LabelStyle {
    LabelStyle::new(options, "white")
}

#[test]
fn plate_fragment_embeds_the_combined_plate() {
    let registry = FieldRegistry::default();
    let html = registry
        .render_visual_fragment(
            &Renderer::default(),
            &FieldPath::parse("#number_plate_visual"),
            "Japan",
            &japan(),
            &style(DisplayOptions::ALL),
        )
        .expect("plate configured");

    assert!(html.contains(r#"<img src="https://flags.example/jp.png" style="width: 30px;"#));
    assert!(html.contains(">Japan</div>"));
    assert!(html.contains(r#"<img src="data:image/svg+xml;base64,"#));
}

#[test]
fn tips_fragment_truncates_and_resolves_images() {
    let registry = FieldRegistry::default();
    let html = registry
        .render_visual_fragment(
            &Renderer::default(),
            &FieldPath::parse("#geoguessr_tips"),
            "Japan",
            &japan(),
            &LabelStyle::new(DisplayOptions::empty(), "rgba(0, 255, 0, 0.4)"),
        )
        .expect("short tips present");

    assert!(html.contains("background: rgba(0, 255, 0, 0.4)"));
    assert!(html.contains(">Yellow plates are kei ...</div>"));
    assert!(html.contains(r#"<img src="assets/tips/jp_pole.png""#));
    assert!(html.contains(">Striped utility pole...</div>"));
    assert!(html.contains(r#"<img src="https://img.example/jp_sign.png""#));
    assert!(!html.contains("flags.example"), "flag not requested");
    assert!(!html.contains(">Japan</div>"), "name not requested");
}

#[test]
fn tips_fragment_follows_render_config() {
    let config = RenderConfig {
        tip_text_limit: 10,
        tip_asset_prefix: "/static/".to_owned(),
        ..RenderConfig::default()
    };
    let html = FieldRegistry::default()
        .render_visual_fragment(
            &Renderer::new(&config),
            &FieldPath::parse("#geoguessr_tips"),
            "Japan",
            &japan(),
            &style(DisplayOptions::empty()),
        )
        .expect("short tips present");

    assert!(html.contains(">Yellow ...</div>"));
    assert!(html.contains(r#"src="/static/jp_pole.png""#));
}

#[test]
fn long_tips_alone_are_valid_but_render_nothing() {
    let registry = FieldRegistry::default();
    let tips = FieldPath::parse("#geoguessr_tips");
    let only_long = record(json!({ "geoguessr_tips": { "long": [{ "type": "text", "content": "x" }] } }));

    assert!(registry.has_valid_content(&tips, "", &only_long));
    assert!(
        registry
            .render_visual_fragment(&Renderer::default(), &tips, "Iceland", &only_long, &style(DisplayOptions::ALL))
            .is_none()
    );

    let html = registry.label_html(&Renderer::default(), &tips, "Iceland", &only_long, &style(DisplayOptions::ALL));
    assert!(html.contains(&format!("Iceland: {NO_CONFIG}")));
}

#[test]
fn text_fields_are_not_rendered_as_fragments() {
    let registry = FieldRegistry::default();
    assert!(
        registry
            .render_visual_fragment(
                &Renderer::default(),
                &FieldPath::parse("#dynamic_street_terms"),
                "Japan",
                &japan(),
                &style(DisplayOptions::ALL),
            )
            .is_none()
    );
}

#[test]
fn display_content_and_labels() {
    let registry = FieldRegistry::default();
    let japan = japan();

    assert_eq!(registry.display_content(&FieldPath::parse("language"), "Japan", &japan), "Japanese");
    assert_eq!(registry.display_content(&FieldPath::parse("latlng"), "Japan", &japan), "36, 138");
    assert_eq!(registry.display_content(&FieldPath::parse("camera"), "Japan", &japan), "");

    let html = registry.label_html(
        &Renderer::default(),
        &FieldPath::parse("#country_name"),
        "Japan",
        &japan,
        &style(DisplayOptions::ALL),
    );
    assert!(html.contains(">Japan</div>"));
    assert!(!html.contains("Japan: Japan"));

    let html = registry.label_html(
        &Renderer::default(),
        &FieldPath::parse("#no_icon"),
        "Japan",
        &japan,
        &style(DisplayOptions::ALL),
    );
    assert!(!html.contains("<img"));
}

#[test]
fn detail_sections_cover_the_record() {
    let registry = FieldRegistry::default();
    let sections = registry.detail_sections(&japan());
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_ref()).collect();

    assert_eq!(
        titles,
        ["Street Terms", "Crosswalk Stripes", "Language", "Domain", "Flag", "Coordinates"]
    );
    assert_eq!(sections[5].body, "36, 138");
    assert_eq!(sections[4].body, "red circle on white");

    let html = registry.detail_html(&japan());
    assert!(html.starts_with("<b>Street Terms:</b> Japanese: 通り, 街道, 大通り (通, 街道, 大通)<br><br>"));
}

#[test]
fn detail_sections_skip_the_street_placeholder() {
    let registry = FieldRegistry::default();
    let sections = registry.detail_sections(&record(json!({ "language": ["Klingon"], "driving_side": "left" })));
    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_ref()).collect();
    assert_eq!(titles, ["Driving Side", "Language"]);
}
