use crate::error::ControlError;
use ectl_domain::config::ControlConfig;
use ectl_domain::features::{FeatureCategory, FeatureDescriptor, FeatureFilter, FeatureSort};
use ectl_domain::ids::SurfaceId;
use ectl_domain::inspector::{FrameHandle, InspectorPanel};
use ectl_domain::media::MediaMuteState;
use ectl_flags::FeatureRegistry;
use ectl_inspector::{InspectorController, SessionState};
use ectl_kernel::engine::RenderingEngine;
use ectl_media::MediaMuteController;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Feature flags, mute state and inspector session of one rendering surface.
///
/// The facade only holds the surface identifier and a shared engine handle; dropping it
/// leaves the surface and its engine-side state alone.
#[derive(Debug)]
pub struct EngineControlSurface<E: ?Sized> {
    surface: SurfaceId,
    features: FeatureRegistry<E>,
    media: MediaMuteController<E>,
    inspector: InspectorController<E>,
}

impl<E: RenderingEngine + ?Sized> EngineControlSurface<E> {
    /// Binds the three controllers to `surface` and applies `config`.
    ///
    /// Feature defaults go in first, then overrides. The optional initial mute state is
    /// written afterwards and the inspector is connected last when `auto_connect` is set.
    pub fn bind(engine: Arc<E>, surface: SurfaceId, config: &ControlConfig) -> Self {
        let mut features = FeatureRegistry::for_surface(Arc::clone(&engine), surface);
        let defaults = features.apply_defaults(&config.features.defaults);
        let overrides = features.apply_overrides(&config.features.overrides);

        let media = MediaMuteController::new(Arc::clone(&engine), surface);
        if let Some(initial) = config.media.initial {
            media.set_muted(initial);
        }

        let mut inspector = InspectorController::new(engine, surface);
        if config.inspector.auto_connect {
            inspector.connect();
        }

        info!(
            %surface,
            context = %features.context(),
            defaults,
            overrides,
            muted = %media.muted_state(),
            "Control surface bound"
        );
        Self { surface, features, media, inspector }
    }

    #[must_use]
    pub const fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub const fn features(&self) -> &FeatureRegistry<E> {
        &self.features
    }

    pub const fn features_mut(&mut self) -> &mut FeatureRegistry<E> {
        &mut self.features
    }

    pub const fn media(&self) -> &MediaMuteController<E> {
        &self.media
    }

    pub const fn inspector(&self) -> &InspectorController<E> {
        &self.inspector
    }

    pub const fn inspector_mut(&mut self) -> &mut InspectorController<E> {
        &mut self.inspector
    }

    // Feature flags

    pub fn list_features(&mut self, filter: &FeatureFilter, sort: FeatureSort) -> Vec<FeatureDescriptor> {
        self.features.list(filter, sort)
    }

    pub fn grouped_features(
        &mut self,
        filter: &FeatureFilter,
    ) -> BTreeMap<FeatureCategory, Vec<FeatureDescriptor>> {
        self.features.grouped(filter)
    }

    /// # Errors
    /// Returns [`ControlError::UnknownFeature`] for keys outside the snapshot.
    pub fn feature(&mut self, key: &str) -> Result<FeatureDescriptor, ControlError> {
        Ok(self.features.descriptor(key)?.clone())
    }

    /// # Errors
    /// Returns [`ControlError::UnknownFeature`] for keys outside the snapshot.
    pub fn is_feature_enabled(&mut self, key: &str) -> Result<bool, ControlError> {
        Ok(self.features.is_enabled(key)?)
    }

    /// # Errors
    /// Returns [`ControlError::UnknownFeature`] for keys outside the snapshot.
    pub fn set_feature_enabled(&mut self, key: &str, enabled: bool) -> Result<(), ControlError> {
        Ok(self.features.set_enabled(key, enabled)?)
    }

    #[must_use]
    pub fn is_feature_user_configured(&self, key: &str) -> bool {
        self.features.is_user_configured(key)
    }

    pub fn refresh_features(&mut self) -> usize {
        self.features.refresh()
    }

    // Media

    pub fn set_muted(&mut self, state: MediaMuteState) -> bool {
        self.media.set_muted(state)
    }

    #[must_use]
    pub fn muted_state(&self) -> MediaMuteState {
        self.media.muted_state()
    }

    #[must_use]
    pub fn has_active_now_playing_session(&self) -> bool {
        self.media.has_active_now_playing_session()
    }

    pub fn stop_all_capture(&mut self) {
        self.media.stop_all_capture();
    }

    pub fn toggle_audio_mute(&mut self) -> bool {
        self.media.toggle_audio_mute()
    }

    // Inspector

    #[must_use]
    pub fn inspector_state(&self) -> SessionState {
        self.inspector.state()
    }

    pub fn connect_inspector(&mut self) {
        self.inspector.connect();
    }

    pub fn show_inspector(&mut self) {
        self.inspector.show();
    }

    pub fn hide_inspector(&mut self) {
        self.inspector.hide();
    }

    pub fn toggle_inspector(&mut self) {
        self.inspector.toggle();
    }

    pub fn show_console(&mut self) {
        self.inspector.show_console();
    }

    pub fn show_resources(&mut self) {
        self.inspector.show_resources();
    }

    /// # Errors
    /// Returns [`ControlError::InvalidFrame`] if `frame` is not part of this surface.
    pub fn show_main_resource_for_frame(&mut self, frame: FrameHandle) -> Result<(), ControlError> {
        Ok(self.inspector.show_main_resource_for_frame(frame)?)
    }

    pub fn attach_inspector(&mut self) {
        self.inspector.attach();
    }

    pub fn detach_inspector(&mut self) {
        self.inspector.detach();
    }

    /// # Errors
    /// Returns [`ControlError::InvalidState`] while the inspector is disconnected.
    pub fn toggle_page_profiling(&mut self) -> Result<(), ControlError> {
        Ok(self.inspector.toggle_page_profiling()?)
    }

    /// # Errors
    /// Returns [`ControlError::InvalidState`] while the inspector is disconnected.
    pub fn toggle_element_selection(&mut self) -> Result<(), ControlError> {
        Ok(self.inspector.toggle_element_selection()?)
    }

    pub fn close_inspector(&mut self) {
        self.inspector.close();
    }

    pub fn print_error_to_console(&self, message: impl Into<String>) {
        self.inspector.print_error_to_console(message);
    }

    #[must_use]
    pub fn is_inspector_connected(&self) -> bool {
        self.inspector.is_connected()
    }

    #[must_use]
    pub fn is_inspector_visible(&self) -> bool {
        self.inspector.is_visible()
    }

    #[must_use]
    pub fn is_inspector_front(&self) -> bool {
        self.inspector.is_front()
    }

    #[must_use]
    pub fn is_inspector_attached(&self) -> bool {
        self.inspector.is_attached()
    }

    #[must_use]
    pub fn is_profiling_page(&self) -> bool {
        self.inspector.is_profiling_page()
    }

    #[must_use]
    pub fn is_element_selection_active(&self) -> bool {
        self.inspector.is_element_selection_active()
    }

    #[must_use]
    pub fn active_inspector_panel(&self) -> Option<InspectorPanel> {
        self.inspector.active_panel()
    }
}
