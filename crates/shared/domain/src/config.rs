use crate::constants::DEFAULT_LOGGER_NAME;
use crate::media::MediaMuteState;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level control-surface configuration shared by the facade and the shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlConfigInner {
    pub features: FeaturesConfig,
    pub media: MediaConfig,
    pub inspector: InspectorConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into every bound surface.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ControlConfig {
    #[serde(flatten, default)]
    inner: Arc<ControlConfigInner>,
}

impl Deref for ControlConfig {
    type Target = ControlConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ControlConfig {
    fn deref_mut(&mut self) -> &mut ControlConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Feature-flag policy applied when a surface is bound.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    /// Embedder defaults, applied before `overrides`.
    pub defaults: BTreeMap<String, bool>,
    /// Host/user choices; win over `defaults`.
    pub overrides: BTreeMap<String, bool>,
    /// Whether listings show hidden features unless asked otherwise.
    pub include_hidden: bool,
}

/// Media state applied when a surface is bound.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    pub initial: Option<MediaMuteState>,
}

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// Connect the developer-tools session as soon as the surface is bound.
    pub auto_connect: bool,
}

/// Logger settings consumed by `ectl-logger`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub name: String,
    /// A level directive understood by `tracing` (`error`..`trace`, `off`).
    pub level: String,
    pub console: bool,
    /// Rolling log-file directory; file logging is off when absent.
    pub directory: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
    pub env_filter: Option<String>,
}

// --- Default ---

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_LOGGER_NAME.to_owned(),
            level: "info".to_owned(),
            console: true,
            directory: None,
            json: false,
            max_files: 10,
            env_filter: None,
        }
    }
}
