//! Boundary between the control surface and the rendering engine.
//!
//! All calls are synchronous and in-process. Methods take `&self`: an engine owns its
//! state and is expected to be driven from the thread that owns the surfaces.

use crate::domain::features::FeatureDescriptor;
use crate::domain::ids::{PreferenceContextId, SurfaceId};
use crate::domain::inspector::{FrameHandle, InspectorCommand};
use crate::domain::media::MediaMuteState;

/// Feature-flag primitives of a preference context.
pub trait PreferenceEngine {
    /// Resolves the preference context the surface reads its feature flags from.
    fn preference_context(&self, surface: SurfaceId) -> PreferenceContextId;

    fn enumerate_features(&self, context: PreferenceContextId) -> Vec<FeatureDescriptor>;

    /// Current state of `key`; the descriptor's default until something sets it.
    fn is_feature_enabled(&self, context: PreferenceContextId, key: &str) -> bool;

    fn set_feature_enabled(&self, context: PreferenceContextId, key: &str, enabled: bool);
}

/// Media-playback and capture primitives of a surface.
pub trait MediaEngine {
    fn media_mute_state(&self, surface: SurfaceId) -> MediaMuteState;

    /// Replaces the whole composed state.
    fn set_media_mute_state(&self, surface: SurfaceId, state: MediaMuteState);

    fn has_active_now_playing_session(&self, surface: SurfaceId) -> bool;

    /// Terminates every active capture session. Must tolerate having nothing to stop.
    fn stop_media_capture(&self, surface: SurfaceId);
}

/// Developer-tools primitives of a surface.
///
/// The queries report the engine's own view of the session. The user can close, hide or
/// refocus the inspector window without the host being involved, so controllers read
/// these before deciding a transition.
pub trait InspectorEngine {
    fn dispatch_inspector(&self, surface: SurfaceId, command: InspectorCommand);

    fn inspector_is_connected(&self, surface: SurfaceId) -> bool;

    fn inspector_is_visible(&self, surface: SurfaceId) -> bool;

    /// Whether the inspector window currently has focus.
    fn inspector_is_front(&self, surface: SurfaceId) -> bool;

    fn inspector_is_profiling_page(&self, surface: SurfaceId) -> bool;

    fn inspector_is_element_selection_active(&self, surface: SurfaceId) -> bool;

    /// Whether `frame` is part of `surface`'s frame tree.
    fn owns_frame(&self, surface: SurfaceId, frame: FrameHandle) -> bool;
}

/// Everything a control surface needs from an engine.
pub trait RenderingEngine: PreferenceEngine + MediaEngine + InspectorEngine {}

impl<T> RenderingEngine for T where T: PreferenceEngine + MediaEngine + InspectorEngine + ?Sized {}
