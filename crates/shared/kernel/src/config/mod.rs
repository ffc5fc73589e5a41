use crate::domain::config::ControlConfig;
use crate::domain::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILE};
use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[ectl_derive::ectl_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Layered configuration loader: a base file overlaid with environment overrides.
///
/// 1. **Base File**: settings from `path` (format picked from the extension: TOML, JSON,
///    YAML, ...). An explicit path must exist. Without a path the loader looks for the
///    `enginectl` stem in the working directory and carries on with defaults when it is
///    missing.
/// 2. **Environment Overrides**: variables prefixed with `ECTL__`, nested with double
///    underscores (`ECTL__INSPECTOR__AUTO_CONNECT=true` maps to `inspector.auto_connect`).
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing, a source cannot be
/// parsed, or the merged values do not match `T`.
///
/// # Example
/// ```rust
/// use ectl_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct ShellConfig {
///     verbose: bool,
/// }
///
/// let cfg: ShellConfig = load_config(Some("config/local.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_from(path, None)
}

/// Like [`load_config`], but reads the environment overrides from `env` instead of the
/// process environment when a map is given.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_from<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let from_process = env.is_none();
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(
            Environment::with_prefix(CONFIG_ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

    info!(path = %effective_path.display(), required, from_process, "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

/// Loads the workspace [`ControlConfig`].
///
/// # Errors
/// See [`load_config`].
pub fn load_control_config(path: Option<impl AsRef<Path>>) -> Result<ControlConfig, ConfigError> {
    load_config(path)
}

/// Loads the workspace [`ControlConfig`] with an explicit environment map.
///
/// # Errors
/// See [`load_config`].
pub fn load_control_config_from(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<ControlConfig, ConfigError> {
    load_config_from(path, env)
}
