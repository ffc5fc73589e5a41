//! String constants shared by parsers, configuration and the shell.

/// Mute flag name for page audio.
pub const AUDIO: &str = "audio";
/// Mute flag name for camera/microphone capture.
pub const CAPTURE_DEVICES: &str = "capture-devices";
/// Mute flag name for screen capture output.
pub const SCREEN_CAPTURE: &str = "screen-capture";

/// Environment prefix used for configuration overrides (`ECTL__FEATURES__...`).
pub const CONFIG_ENV_PREFIX: &str = "ECTL";
/// Configuration file stem looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "enginectl";
/// Default logger name and log-file prefix.
pub const DEFAULT_LOGGER_NAME: &str = "enginectl";
