use config::{Config, Environment, File};
use geohint_domain::config::GeohintConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable prefix; `GEOHINT__RENDER__PLATE_WIDTH` maps to `render.plate_width`.
pub const ENV_PREFIX: &str = "GEOHINT";

const DEFAULT_CONFIG_FILE: &str = "geohint";

#[geohint_derive::geohint_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from a file with environment overrides on top.
///
/// 1. **Base file**: `path`, or `geohint` (any format the `config` crate
///    recognises by extension) in the working directory. The file is required.
/// 2. **Environment**: variables prefixed with `GEOHINT__`, nested with `__`.
///
/// # Errors
/// Returns [`ConfigError`] if the file is missing, an override is malformed,
/// or the merged values do not fit `T`.
///
/// # Example
/// ```rust
/// use geohint_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct CliConfig {
///     verbose: bool,
/// }
///
/// let cfg: CliConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(env_source());

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Like [`load_config`] but for the engine config, where a missing file is
/// not an error: defaults plus environment overrides are used instead.
///
/// # Errors
/// Returns [`ConfigError`] if a present file or an override cannot be parsed.
pub fn load_geohint_config(path: Option<impl AsRef<Path>>) -> Result<GeohintConfig, ConfigError> {
    match path {
        Some(path) => load_config(Some(path)),
        None => {
            debug!("No config file given, using defaults with {ENV_PREFIX}__ overrides");
            let config = Config::builder()
                .add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
                .add_source(env_source())
                .build()
                .context("Failed to build config")?
                .try_deserialize::<GeohintConfig>()
                .context("Failed to deserialize config")?;
            Ok(config)
        },
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("fields.filterable_keys")
        .try_parsing(true)
}
