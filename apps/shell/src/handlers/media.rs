use crate::models::args::MuteAction;
use crate::session::Session;
use ectl::headless::Capture;

pub fn run(session: &mut Session, action: MuteAction) {
    match action {
        MuteAction::Status => {},
        MuteAction::Set { state } => {
            if !session.control.set_muted(state) {
                println!("ℹ️ Mute state already {state}");
            }
        },
        MuteAction::ToggleAudio => {
            session.control.toggle_audio_mute();
        },
        MuteAction::StopCapture => session.control.stop_all_capture(),
        MuteAction::SimulateCapture { devices, screen } => {
            session.engine.start_capture(session.control.surface(), Capture { devices, screen });
        },
        MuteAction::SimulatePlayback { playing } => {
            session.engine.set_now_playing(session.control.surface(), playing);
        },
    }

    let capture = session.engine.capture(session.control.surface());
    println!(
        "muted: {}; now playing: {}; capturing: devices={} screen={}",
        session.control.muted_state(),
        session.control.has_active_now_playing_session(),
        capture.devices,
        capture.screen,
    );
}
