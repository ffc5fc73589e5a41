//! Handles and panel identifiers for developer-tools sessions.

use crate::ids::SurfaceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A frame inside some surface's frame tree.
///
/// The handle records the surface it was issued for, so a handle leaked from another
/// surface can be rejected without asking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameHandle {
    surface: SurfaceId,
    frame: u64,
}

impl FrameHandle {
    #[must_use]
    pub const fn new(surface: SurfaceId, frame: u64) -> Self {
        Self { surface, frame }
    }

    #[must_use]
    pub const fn surface(self) -> SurfaceId {
        self.surface
    }

    #[must_use]
    pub const fn frame(self) -> u64 {
        self.frame
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/frame:{}", self.surface, self.frame)
    }
}

/// Inspector panel selected by the last `show_*` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InspectorPanel {
    Console,
    Resources,
    MainResource(FrameHandle),
}

/// One inspector primitive forwarded to the engine.
///
/// The controller only emits a command when its own state actually changes, so an
/// engine sees exactly the effective transitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InspectorCommand {
    Connect,
    Show,
    Hide,
    Close,
    Attach,
    Detach,
    ShowConsole,
    ShowResources,
    ShowMainResource(FrameHandle),
    TogglePageProfiling,
    ToggleElementSelection,
    PrintError(String),
}
