//! Facade crate for the engine control surface.
//! Re-exports domain/kernel primitives and binds the feature slices to one rendering surface.
//! Keep this crate thin: it composes the slices, it does not implement control logic.
//!
//! ## Usage
//! - Implement [`kernel::engine::RenderingEngine`] for the host's engine (or enable the
//!   `headless` feature for the in-process reference engine).
//! - Call [`EngineControlSurface::bind`] once per surface and drive it through the facade.
//!
//! ```rust
//! # #[cfg(feature = "headless")]
//! # {
//! use ectl::domain::config::ControlConfig;
//! use ectl::domain::media::MediaMuteState;
//! use ectl::headless::HeadlessEngine;
//! use ectl::EngineControlSurface;
//! use std::sync::Arc;
//!
//! let engine = Arc::new(HeadlessEngine::new());
//! let surface = engine.create_surface();
//! let mut control = EngineControlSurface::bind(engine, surface, &ControlConfig::default());
//!
//! control.set_muted(MediaMuteState::AUDIO);
//! control.show_inspector();
//! assert!(control.is_inspector_visible());
//! # }
//! ```

mod error;
mod surface;

pub use ectl_domain as domain;
#[cfg(feature = "headless")]
pub use ectl_headless as headless;
pub use ectl_kernel as kernel;

pub use crate::error::{ControlError, ControlErrorExt};
pub use crate::surface::EngineControlSurface;

/// Feature slices composed by the facade.
pub mod features {
    pub use ectl_flags as flags;
    pub use ectl_inspector as inspector;
    pub use ectl_media as media;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "flags",
        "media",
        "inspector",
        #[cfg(feature = "headless")]
        "headless",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
