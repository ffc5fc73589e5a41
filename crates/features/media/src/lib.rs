//! Media mute controller slice.
//!
//! The engine owns the [`MediaMuteState`] of a surface; pages and the engine UI may change
//! it at any time. Every query and every decision here reads the engine first, and every
//! flag change goes through [`MediaMuteController::set_muted`], so the engine always
//! receives a full composition and never a single-bit delta.

use ectl_domain::ids::SurfaceId;
use ectl_domain::media::MediaMuteState;
use ectl_kernel::engine::MediaEngine;
use std::sync::Arc;
use tracing::debug;

/// Mute state of one rendering surface.
#[derive(Debug)]
pub struct MediaMuteController<E: ?Sized> {
    engine: Arc<E>,
    surface: SurfaceId,
}

impl<E: MediaEngine + ?Sized> MediaMuteController<E> {
    pub const fn new(engine: Arc<E>, surface: SurfaceId) -> Self {
        Self { engine, surface }
    }

    #[must_use]
    pub const fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Replaces the whole composed state. Returns `false` when the engine already reports
    /// `state`, in which case nothing is written.
    pub fn set_muted(&self, state: MediaMuteState) -> bool {
        let current = self.muted_state();
        if state == current {
            debug!(surface = %self.surface, %state, "Mute state unchanged, skipping write");
            return false;
        }
        self.engine.set_media_mute_state(self.surface, state);
        debug!(surface = %self.surface, from = %current, to = %state, "Mute state written");
        true
    }

    /// Current composed state as the engine reports it.
    #[must_use]
    pub fn muted_state(&self) -> MediaMuteState {
        self.engine.media_mute_state(self.surface)
    }

    #[must_use]
    pub fn has_active_now_playing_session(&self) -> bool {
        self.engine.has_active_now_playing_session(self.surface)
    }

    /// Stops every capture session, then reports both capture sources as muted.
    ///
    /// Audio muting is left as it was.
    pub fn stop_all_capture(&self) {
        self.engine.stop_media_capture(self.surface);
        self.set_muted(self.muted_state() | MediaMuteState::CAPTURE);
    }

    /// Flips audio muting and returns the new value.
    pub fn toggle_audio_mute(&self) -> bool {
        let current = self.muted_state();
        let muted = !current.is_audio_muted();
        self.set_muted(current.with(MediaMuteState::AUDIO, muted));
        muted
    }

    #[must_use]
    pub fn is_audio_muted(&self) -> bool {
        self.muted_state().is_audio_muted()
    }

    #[must_use]
    pub fn are_capture_devices_muted(&self) -> bool {
        self.muted_state().are_capture_devices_muted()
    }

    #[must_use]
    pub fn is_screen_capture_muted(&self) -> bool {
        self.muted_state().is_screen_capture_muted()
    }
}
