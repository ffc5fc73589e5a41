use ectl_domain::media::MediaMuteState;
use ectl_headless::HeadlessEngine;
use ectl_kernel::engine::MediaEngine;
use ectl_media::MediaMuteController;
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #[test]
    fn every_write_replaces_the_whole_state(states in proptest::collection::vec(0u32..8, 1..32)) {
        let engine = Arc::new(HeadlessEngine::new());
        let surface = engine.create_surface();
        let controller = MediaMuteController::new(Arc::clone(&engine), surface);

        for bits in states {
            let state = MediaMuteState::from(bits);
            controller.set_muted(state);
            prop_assert_eq!(controller.muted_state(), state);
            prop_assert_eq!(engine.media_mute_state(surface), state);
        }
    }

    #[test]
    fn stop_all_capture_preserves_audio(bits in 0u32..8) {
        let engine = Arc::new(HeadlessEngine::new());
        let surface = engine.create_surface();
        let controller = MediaMuteController::new(engine, surface);
        let before = MediaMuteState::from(bits);
        controller.set_muted(before);

        controller.stop_all_capture();

        prop_assert!(controller.are_capture_devices_muted());
        prop_assert!(controller.is_screen_capture_muted());
        prop_assert_eq!(controller.is_audio_muted(), before.is_audio_muted());
    }
}
