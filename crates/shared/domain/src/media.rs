use crate::constants::{AUDIO, CAPTURE_DEVICES, SCREEN_CAPTURE};
use bitflags::bitflags;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Composed media-mute state of one rendering surface.
    ///
    /// Flags are independent; any combination (including none) is valid. The bit values
    /// match the engine's wire representation.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct MediaMuteState: u32 {
        const AUDIO = 1 << 0;
        const CAPTURE_DEVICES = 1 << 1;
        const SCREEN_CAPTURE = 1 << 2;

        const CAPTURE = Self::CAPTURE_DEVICES.bits() | Self::SCREEN_CAPTURE.bits();
    }
}

impl MediaMuteState {
    /// Nothing muted.
    pub const NONE: Self = Self::empty();

    #[must_use]
    pub const fn is_audio_muted(self) -> bool {
        self.contains(Self::AUDIO)
    }

    #[must_use]
    pub const fn are_capture_devices_muted(self) -> bool {
        self.contains(Self::CAPTURE_DEVICES)
    }

    #[must_use]
    pub const fn is_screen_capture_muted(self) -> bool {
        self.contains(Self::SCREEN_CAPTURE)
    }

    /// Returns a copy with `flags` set or cleared.
    #[must_use]
    pub fn with(mut self, flags: Self, muted: bool) -> Self {
        self.set(flags, muted);
        self
    }

    /// Stable names of the active flags, in bit order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [(Self::AUDIO, AUDIO), (Self::CAPTURE_DEVICES, CAPTURE_DEVICES), (Self::SCREEN_CAPTURE, SCREEN_CAPTURE)]
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .collect()
    }
}

impl fmt::Display for MediaMuteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        f.write_str(&self.names().join(","))
    }
}

impl From<u32> for MediaMuteState {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(bits)
    }
}

/// Returned when a mute-state list contains an unrecognized flag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMuteStateError {
    pub token: String,
}

impl fmt::Display for ParseMuteStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown mute flag '{}' (expected {AUDIO}, {CAPTURE_DEVICES}, {SCREEN_CAPTURE}, none or all)",
            self.token
        )
    }
}

impl std::error::Error for ParseMuteStateError {}

impl FromStr for MediaMuteState {
    type Err = ParseMuteStateError;

    /// Parses a `,`/`|` separated list such as `"audio, capture-devices"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split([',', '|'])
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .try_fold(Self::NONE, |acc, token| {
                let flag = match token.to_ascii_lowercase().replace('_', "-").as_str() {
                    AUDIO => Self::AUDIO,
                    CAPTURE_DEVICES | "capture" => Self::CAPTURE_DEVICES,
                    SCREEN_CAPTURE | "screen" => Self::SCREEN_CAPTURE,
                    "none" => Self::NONE,
                    "all" | "*" => Self::all(),
                    _ => return Err(ParseMuteStateError { token: token.to_owned() }),
                };
                Ok(acc | flag)
            })
    }
}

impl Serialize for MediaMuteState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for MediaMuteState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MuteVisitor;

        impl Visitor<'_> for MuteVisitor {
            type Value = MediaMuteState;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("mute bits or a comma-separated list of mute flag names")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(MediaMuteState::from_bits_truncate)
                    .map_err(|_| E::custom(format!("mute bits out of range: {v}")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("mute bits cannot be negative: {v}")))
                    .and_then(|v| self.visit_u64(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(MuteVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_zero_bits() {
        assert_eq!(MediaMuteState::NONE.bits(), 0);
        assert_eq!(MediaMuteState::default(), MediaMuteState::NONE);
    }

    #[test]
    fn parses_lists_of_names() {
        let parsed: MediaMuteState = "audio, capture-devices".parse().unwrap();
        assert_eq!(parsed, MediaMuteState::AUDIO | MediaMuteState::CAPTURE_DEVICES);
        assert_eq!("none".parse::<MediaMuteState>().unwrap(), MediaMuteState::NONE);
        assert_eq!("".parse::<MediaMuteState>().unwrap(), MediaMuteState::NONE);
        assert_eq!("all".parse::<MediaMuteState>().unwrap(), MediaMuteState::all());
        assert!("video".parse::<MediaMuteState>().is_err());
    }

    #[test]
    fn display_lists_flags_in_bit_order() {
        let state = MediaMuteState::SCREEN_CAPTURE | MediaMuteState::AUDIO;
        assert_eq!(state.to_string(), "audio,screen-capture");
        assert_eq!(MediaMuteState::NONE.to_string(), "none");
    }

    #[test]
    fn with_sets_and_clears_single_flags() {
        let state = MediaMuteState::CAPTURE.with(MediaMuteState::AUDIO, true);
        assert!(state.is_audio_muted());
        let state = state.with(MediaMuteState::SCREEN_CAPTURE, false);
        assert!(state.are_capture_devices_muted());
        assert!(!state.is_screen_capture_muted());
    }
}
