use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the rules engine and its front-ends.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeohintConfigInner {
    pub fields: FieldsConfig,
    pub render: RenderConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct GeohintConfig {
    #[serde(flatten, default)]
    inner: Arc<GeohintConfigInner>,
}

impl Deref for GeohintConfig {
    type Target = GeohintConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for GeohintConfig {
    fn deref_mut(&mut self) -> &mut GeohintConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Field-level policy.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Plain keys offered as filter targets besides dotted and dynamic paths.
    pub filterable_keys: Vec<String>,
}

/// Sizes, colours and truncation limits for the generated markup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub plate_width: u32,
    pub plate_aspect_ratio: f64,
    /// Horizontal gap between the front and rear plate in the combined image.
    pub plate_gap: u32,
    pub gradient_alpha: f64,
    pub neutral_background: String,
    pub tip_text_limit: usize,
    pub tip_caption_limit: usize,
    pub tip_asset_prefix: String,
}

/// Logger settings for the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub directory: Option<PathBuf>,
    pub max_files: usize,
}

// --- Default ---

impl Default for FieldsConfig {
    fn default() -> Self {
        Self { filterable_keys: vec!["language".to_owned(), "tld".to_owned()] }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            plate_width: 400,
            plate_aspect_ratio: 1.0 / 2.3,
            plate_gap: 10,
            gradient_alpha: 0.4,
            neutral_background: "white".to_owned(),
            tip_text_limit: 25,
            tip_caption_limit: 20,
            tip_asset_prefix: "assets/tips/".to_owned(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), json: false, directory: None, max_files: 10 }
    }
}
