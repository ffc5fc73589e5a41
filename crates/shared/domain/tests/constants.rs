use ectl_domain::constants::{AUDIO, CAPTURE_DEVICES, CONFIG_ENV_PREFIX, SCREEN_CAPTURE};
use ectl_domain::media::MediaMuteState;

#[test]
fn constants_match_flag_names() {
    assert_eq!(AUDIO, "audio");
    assert_eq!(CAPTURE_DEVICES, "capture-devices");
    assert_eq!(SCREEN_CAPTURE, "screen-capture");
    assert_eq!(CONFIG_ENV_PREFIX, "ECTL");
}

#[test]
fn every_flag_name_parses_back() {
    for name in MediaMuteState::all().names() {
        let parsed: MediaMuteState = name.parse().expect("known flag name");
        assert_eq!(parsed.names(), vec![name]);
    }
}
