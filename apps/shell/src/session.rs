//! A bound surface over the headless engine plus the shell's listing defaults.

use crate::handlers::{flags, inspector, media};
use crate::models::args::ControlCommand;
use ectl::domain::config::ControlConfig;
use ectl::headless::HeadlessEngine;
use ectl::{ControlError, EngineControlSurface};
use std::sync::Arc;

#[derive(Debug)]
pub struct Session {
    pub engine: Arc<HeadlessEngine>,
    pub control: EngineControlSurface<HeadlessEngine>,
    pub include_hidden: bool,
}

impl Session {
    #[must_use]
    pub fn new(config: &ControlConfig) -> Self {
        let engine = Arc::new(HeadlessEngine::new());
        let surface = engine.create_surface();
        let control = EngineControlSurface::bind(Arc::clone(&engine), surface, config);
        Self { engine, control, include_hidden: config.features.include_hidden }
    }

    /// Runs one command and prints its outcome.
    ///
    /// # Errors
    /// Returns the control error of a rejected operation; the session stays usable.
    pub fn execute(&mut self, command: ControlCommand) -> Result<(), ControlError> {
        match command {
            ControlCommand::Flags { action } => flags::run(self, action),
            ControlCommand::Mute { action } => {
                media::run(self, action);
                Ok(())
            },
            ControlCommand::Inspector { action } => inspector::run(self, action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ectl::domain::media::MediaMuteState;
    use ectl_kernel::config::load_control_config;
    use std::io::Write;

    #[test]
    fn configuration_file_shapes_the_session() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[features]
include_hidden = true

[features.overrides]
HTTP3Enabled = true

[media]
initial = "audio"

[inspector]
auto_connect = true
"#
        )
        .unwrap();

        let config = load_control_config(Some(file.path())).unwrap();
        let mut session = Session::new(&config);

        assert!(session.include_hidden);
        assert!(session.control.is_feature_enabled("HTTP3Enabled").unwrap());
        assert_eq!(session.control.muted_state(), MediaMuteState::AUDIO);
        assert!(session.control.is_inspector_connected());
    }
}
