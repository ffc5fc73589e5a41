use crate::models::args::ScriptLine;
use crate::session::Session;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, BufReader};
use std::fs::File;
use std::path::Path;

/// Runs every command of `path` (`-` for stdin) against one session.
///
/// Blank lines and lines starting with `#` are skipped. Rejected control operations are
/// reported and the script goes on; a line that does not parse stops it.
///
/// # Errors
/// Returns an error if the script cannot be read or a line is not a valid command.
pub fn run(session: &mut Session, path: &Path) -> Result<usize> {
    if path == Path::new("-") {
        run_lines(session, io::stdin().lock())
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open script {}", path.display()))?;
        run_lines(session, BufReader::new(file))
    }
}

/// Returns the number of rejected operations.
pub fn run_lines(session: &mut Session, reader: impl BufRead) -> Result<usize> {
    let mut rejected = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read script")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parsed = ScriptLine::try_parse_from(line.split_whitespace())
            .with_context(|| format!("Line {}: `{line}`", index + 1))?;
        println!("> {line}");
        if let Err(err) = session.execute(parsed.command) {
            println!("❌ [{}] {err}", err.kind());
            rejected += 1;
        }
    }
    Ok(rejected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ectl::domain::config::ControlConfig;
    use ectl::domain::media::MediaMuteState;
    use std::io::Cursor;

    #[test]
    fn commands_share_one_surface() {
        let mut session = Session::new(&ControlConfig::default());
        let script = "\
# flags
flags set WebGPUEnabled true
flags set NoSuchFeature true

mute simulate-capture --devices
mute set audio
mute stop-capture
inspector select
inspector show
inspector main-resource 9
inspector print something broke
";
        let rejected = run_lines(&mut session, Cursor::new(script)).unwrap();

        assert_eq!(rejected, 3);
        assert!(session.control.is_feature_enabled("WebGPUEnabled").unwrap());
        assert_eq!(session.control.muted_state(), MediaMuteState::all());
        assert!(session.control.is_inspector_visible());
        assert_eq!(session.engine.console_messages(session.control.surface()), vec!["something broke"]);
    }

    #[test]
    fn unparsable_lines_stop_the_script() {
        let mut session = Session::new(&ControlConfig::default());
        let err = run_lines(&mut session, Cursor::new("mute set loud\n")).unwrap_err();
        assert!(err.to_string().contains("Line 1"));
    }
}
