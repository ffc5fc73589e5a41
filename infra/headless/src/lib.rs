//! # Headless Engine
//!
//! An in-process rendering engine that implements the control-surface boundary without
//! rendering anything. It keeps the state a real engine would own (feature overrides per
//! preference context, mute state, capture and now-playing sessions, frame trees, the
//! inspector window) and records every inspector primitive it receives.
//!
//! Each surface gets its own preference context, so flag changes on one surface never
//! leak into another.
//!
//! ```rust
//! use ectl_headless::HeadlessEngine;
//! use ectl_kernel::engine::PreferenceEngine;
//!
//! let engine = HeadlessEngine::new();
//! let surface = engine.create_surface();
//! let context = engine.preference_context(surface);
//! assert!(!engine.enumerate_features(context).is_empty());
//! ```

mod catalog;
mod error;

pub use crate::error::{HeadlessError, HeadlessErrorExt};

use ectl_domain::features::FeatureDescriptor;
use ectl_domain::ids::{PreferenceContextId, SurfaceId};
use ectl_domain::inspector::{FrameHandle, InspectorCommand};
use ectl_domain::media::MediaMuteState;
use ectl_kernel::engine::{InspectorEngine, MediaEngine, PreferenceEngine};
use fxhash::{FxHashMap, FxHashSet};
use parking_lot::Mutex;
use tracing::{trace, warn};

const MAIN_FRAME: u64 = 0;

#[derive(Debug, Default)]
struct SurfaceState {
    context: PreferenceContextId,
    mute: MediaMuteState,
    capture: Capture,
    now_playing: bool,
    frames: FxHashSet<u64>,
    next_frame: u64,
    inspector: InspectorWindow,
    inspector_log: Vec<InspectorCommand>,
    console: Vec<String>,
    mute_writes: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct InspectorWindow {
    connected: bool,
    visible: bool,
    front: bool,
    profiling: bool,
    element_selection: bool,
}

impl InspectorWindow {
    fn apply(&mut self, command: &InspectorCommand) {
        match command {
            InspectorCommand::Connect => {
                *self = Self { connected: true, front: self.front, ..Self::default() };
            },
            InspectorCommand::Show
            | InspectorCommand::ShowConsole
            | InspectorCommand::ShowResources
            | InspectorCommand::ShowMainResource(_) => {
                self.connected = true;
                self.visible = true;
            },
            InspectorCommand::Hide => {
                self.visible = false;
                self.front = false;
            },
            InspectorCommand::Close => *self = Self::default(),
            InspectorCommand::TogglePageProfiling if self.connected => {
                self.profiling = !self.profiling;
            },
            InspectorCommand::ToggleElementSelection if self.connected => {
                self.element_selection = !self.element_selection;
            },
            _ => {},
        }
    }
}

/// Capture sessions a page has open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub devices: bool,
    pub screen: bool,
}

impl Capture {
    #[must_use]
    pub const fn is_active(self) -> bool {
        self.devices || self.screen
    }
}

#[derive(Debug, Default)]
struct EngineState {
    next_surface: u64,
    surfaces: FxHashMap<SurfaceId, SurfaceState>,
    overrides: FxHashMap<PreferenceContextId, FxHashMap<String, bool>>,
    feature_writes: usize,
}

/// In-memory engine implementing every boundary trait.
#[derive(Debug)]
pub struct HeadlessEngine {
    catalog: Vec<FeatureDescriptor>,
    defaults: FxHashMap<String, bool>,
    state: Mutex<EngineState>,
}

impl Default for HeadlessEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessEngine {
    /// Engine seeded with the built-in feature catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::build(catalog::builtin())
    }

    /// Engine seeded with a caller-supplied catalog.
    ///
    /// # Errors
    /// Returns [`HeadlessError::DuplicateKey`] if two descriptors share a key.
    pub fn with_catalog(catalog: Vec<FeatureDescriptor>) -> Result<Self, HeadlessError> {
        let mut seen = FxHashSet::default();
        if let Some(dup) = catalog.iter().find(|d| !seen.insert(d.key())) {
            return Err(HeadlessError::DuplicateKey { key: dup.key().to_owned(), context: None });
        }
        Ok(Self::build(catalog))
    }

    /// Engine seeded with a JSON array of descriptors.
    ///
    /// # Errors
    /// Returns [`HeadlessError::Catalog`] for malformed JSON and
    /// [`HeadlessError::DuplicateKey`] for repeated keys.
    pub fn from_catalog_json(json: &str) -> Result<Self, HeadlessError> {
        let catalog: Vec<FeatureDescriptor> =
            serde_json::from_str(json).context("Parsing feature catalog")?;
        Self::with_catalog(catalog).context("Validating feature catalog")
    }

    fn build(catalog: Vec<FeatureDescriptor>) -> Self {
        let defaults = catalog.iter().map(|d| (d.key().to_owned(), d.default_value())).collect();
        Self { catalog, defaults, state: Mutex::new(EngineState::default()) }
    }

    /// Creates a new surface with its own preference context and a main frame.
    pub fn create_surface(&self) -> SurfaceId {
        let mut state = self.state.lock();
        state.next_surface += 1;
        let id = state.next_surface;
        let surface = SurfaceId::new(id);
        let context = PreferenceContextId::new(id);

        let mut frames = FxHashSet::default();
        frames.insert(MAIN_FRAME);
        state.surfaces.insert(
            surface,
            SurfaceState { context, frames, next_frame: MAIN_FRAME + 1, ..SurfaceState::default() },
        );
        state.overrides.entry(context).or_default();
        trace!(%surface, %context, "Surface created");
        surface
    }

    /// Main frame of `surface`, if the surface exists.
    #[must_use]
    pub fn main_frame(&self, surface: SurfaceId) -> Option<FrameHandle> {
        self.state
            .lock()
            .surfaces
            .contains_key(&surface)
            .then(|| FrameHandle::new(surface, MAIN_FRAME))
    }

    /// Adds a subframe to `surface`'s frame tree.
    pub fn add_frame(&self, surface: SurfaceId) -> Option<FrameHandle> {
        self.with_surface(surface, |s| {
            let frame = s.next_frame;
            s.next_frame += 1;
            s.frames.insert(frame);
            FrameHandle::new(surface, frame)
        })
    }

    /// Removes a subframe (e.g. after navigation); the main frame cannot be removed.
    pub fn remove_frame(&self, frame: FrameHandle) -> bool {
        if frame.frame() == MAIN_FRAME {
            return false;
        }
        self.with_surface(frame.surface(), |s| s.frames.remove(&frame.frame())).unwrap_or(false)
    }

    /// Simulates a page opening capture sessions.
    pub fn start_capture(&self, surface: SurfaceId, capture: Capture) {
        self.with_surface(surface, |s| {
            s.capture.devices |= capture.devices;
            s.capture.screen |= capture.screen;
        });
    }

    #[must_use]
    pub fn capture(&self, surface: SurfaceId) -> Capture {
        self.read_surface(surface, |s| s.capture).unwrap_or_default()
    }

    /// Simulates media starting or stopping playback.
    pub fn set_now_playing(&self, surface: SurfaceId, playing: bool) {
        self.with_surface(surface, |s| s.now_playing = playing);
    }

    /// Simulates the inspector window gaining or losing focus.
    pub fn set_inspector_front(&self, surface: SurfaceId, front: bool) {
        self.with_surface(surface, |s| s.inspector.front = front);
    }

    /// Simulates the user hiding the inspector window; the session stays connected.
    pub fn hide_inspector_window(&self, surface: SurfaceId) {
        self.with_surface(surface, |s| s.inspector.apply(&InspectorCommand::Hide));
    }

    /// Simulates the user closing the inspector window, which ends the session.
    pub fn dismiss_inspector(&self, surface: SurfaceId) {
        self.with_surface(surface, |s| s.inspector.apply(&InspectorCommand::Close));
    }

    fn read_inspector(&self, surface: SurfaceId, f: impl FnOnce(InspectorWindow) -> bool) -> bool {
        self.read_surface(surface, |s| f(s.inspector)).unwrap_or(false)
    }

    /// Every inspector primitive received for `surface`, in order.
    #[must_use]
    pub fn inspector_log(&self, surface: SurfaceId) -> Vec<InspectorCommand> {
        self.read_surface(surface, |s| s.inspector_log.clone()).unwrap_or_default()
    }

    /// Error messages delivered to the inspector console of `surface`.
    #[must_use]
    pub fn console_messages(&self, surface: SurfaceId) -> Vec<String> {
        self.read_surface(surface, |s| s.console.clone()).unwrap_or_default()
    }

    /// Number of mute-state writes `surface` has received.
    #[must_use]
    pub fn mute_writes(&self, surface: SurfaceId) -> usize {
        self.read_surface(surface, |s| s.mute_writes).unwrap_or_default()
    }

    /// Number of feature-flag writes across all contexts.
    #[must_use]
    pub fn feature_writes(&self) -> usize {
        self.state.lock().feature_writes
    }

    fn with_surface<T>(&self, surface: SurfaceId, f: impl FnOnce(&mut SurfaceState) -> T) -> Option<T> {
        let mut state = self.state.lock();
        let result = state.surfaces.get_mut(&surface).map(f);
        if result.is_none() {
            warn!(%surface, "Ignoring call for unknown surface");
        }
        result
    }

    fn read_surface<T>(&self, surface: SurfaceId, f: impl FnOnce(&SurfaceState) -> T) -> Option<T> {
        self.state.lock().surfaces.get(&surface).map(f)
    }
}

impl PreferenceEngine for HeadlessEngine {
    fn preference_context(&self, surface: SurfaceId) -> PreferenceContextId {
        self.read_surface(surface, |s| s.context)
            .unwrap_or_else(|| PreferenceContextId::new(surface.get()))
    }

    fn enumerate_features(&self, _context: PreferenceContextId) -> Vec<FeatureDescriptor> {
        self.catalog.clone()
    }

    fn is_feature_enabled(&self, context: PreferenceContextId, key: &str) -> bool {
        let state = self.state.lock();
        state
            .overrides
            .get(&context)
            .and_then(|o| o.get(key).copied())
            .or_else(|| self.defaults.get(key).copied())
            .unwrap_or(false)
    }

    fn set_feature_enabled(&self, context: PreferenceContextId, key: &str, enabled: bool) {
        let mut state = self.state.lock();
        state.feature_writes += 1;
        state.overrides.entry(context).or_default().insert(key.to_owned(), enabled);
        trace!(%context, key, enabled, "Feature written");
    }
}

impl MediaEngine for HeadlessEngine {
    fn media_mute_state(&self, surface: SurfaceId) -> MediaMuteState {
        self.read_surface(surface, |s| s.mute).unwrap_or_default()
    }

    fn set_media_mute_state(&self, surface: SurfaceId, state: MediaMuteState) {
        self.with_surface(surface, |s| {
            s.mute = state;
            s.mute_writes += 1;
        });
    }

    fn has_active_now_playing_session(&self, surface: SurfaceId) -> bool {
        self.read_surface(surface, |s| s.now_playing).unwrap_or(false)
    }

    fn stop_media_capture(&self, surface: SurfaceId) {
        self.with_surface(surface, |s| s.capture = Capture::default());
    }
}

impl InspectorEngine for HeadlessEngine {
    fn dispatch_inspector(&self, surface: SurfaceId, command: InspectorCommand) {
        self.with_surface(surface, |s| {
            if let InspectorCommand::PrintError(message) = &command {
                s.console.push(message.clone());
            }
            s.inspector.apply(&command);
            s.inspector_log.push(command);
        });
    }

    fn inspector_is_connected(&self, surface: SurfaceId) -> bool {
        self.read_inspector(surface, |w| w.connected)
    }

    fn inspector_is_visible(&self, surface: SurfaceId) -> bool {
        self.read_inspector(surface, |w| w.visible)
    }

    fn inspector_is_front(&self, surface: SurfaceId) -> bool {
        self.read_inspector(surface, |w| w.front)
    }

    fn inspector_is_profiling_page(&self, surface: SurfaceId) -> bool {
        self.read_inspector(surface, |w| w.profiling)
    }

    fn inspector_is_element_selection_active(&self, surface: SurfaceId) -> bool {
        self.read_inspector(surface, |w| w.element_selection)
    }

    fn owns_frame(&self, surface: SurfaceId, frame: FrameHandle) -> bool {
        frame.surface() == surface
            && self.read_surface(surface, |s| s.frames.contains(&frame.frame())).unwrap_or(false)
    }
}
