//! Inspector session controller slice.
//!
//! One [`InspectorController`] drives the developer-tools session of one surface through
//! `Disconnected -> Connected -> Closed`. Visibility, attachment and the toggles live inside
//! the [`SessionState::Connected`] variant, so none of them can be observed outside a
//! connected session.
//!
//! The engine has the final word on the session: the user may hide or close the inspector
//! window directly. Every operation first folds the engine's view into the controller's
//! state, and only transitions that change that state reach the engine. Panel requests are
//! the exception; they are forwarded on every call while connected.

mod error;

pub use crate::error::{InspectorError, InspectorErrorExt};

use ectl_domain::ids::SurfaceId;
use ectl_domain::inspector::{FrameHandle, InspectorCommand, InspectorPanel};
use ectl_kernel::engine::InspectorEngine;
use std::sync::Arc;
use tracing::debug;

/// UI state of a connected session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectedSession {
    pub visible: bool,
    pub attached: bool,
    pub profiling: bool,
    pub element_selection: bool,
    pub panel: Option<InspectorPanel>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Disconnected,
    Connected(ConnectedSession),
    /// Terminal for the current session; `connect` opens a fresh one.
    Closed,
}

impl SessionState {
    const fn session(&self) -> Option<&ConnectedSession> {
        match self {
            Self::Connected(session) => Some(session),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::Connected(_) => "connected",
            Self::Closed => "closed",
        }
    }
}

/// Developer-tools session of one rendering surface.
#[derive(Debug)]
pub struct InspectorController<E: ?Sized> {
    engine: Arc<E>,
    surface: SurfaceId,
    state: SessionState,
}

impl<E: InspectorEngine + ?Sized> InspectorController<E> {
    pub const fn new(engine: Arc<E>, surface: SurfaceId) -> Self {
        Self { engine, surface, state: SessionState::Disconnected }
    }

    #[must_use]
    pub const fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// Session state with the engine's view of connection, visibility and the toggles
    /// folded in.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.state {
            SessionState::Connected(_) if !self.engine.inspector_is_connected(self.surface) => {
                SessionState::Disconnected
            },
            SessionState::Connected(session) => SessionState::Connected(ConnectedSession {
                visible: self.engine.inspector_is_visible(self.surface),
                profiling: self.engine.inspector_is_profiling_page(self.surface),
                element_selection: self.engine.inspector_is_element_selection_active(self.surface),
                ..session
            }),
            other => other,
        }
    }

    fn sync(&mut self) {
        let observed = self.state();
        if observed != self.state {
            debug!(
                surface = %self.surface,
                from = self.state.label(),
                to = observed.label(),
                "Inspector state changed on the engine side"
            );
            self.state = observed;
        }
    }

    fn dispatch(&self, command: InspectorCommand) {
        debug!(surface = %self.surface, ?command, "Inspector transition");
        self.engine.dispatch_inspector(self.surface, command);
    }

    fn skip(&self, operation: &'static str) {
        debug!(surface = %self.surface, operation, state = self.state.label(), "Inspector no-op");
    }

    /// Applies `update` to the connected session and dispatches `command` if it changed.
    fn update(
        &mut self,
        operation: &'static str,
        command: InspectorCommand,
        update: impl FnOnce(&mut ConnectedSession),
    ) {
        self.sync();
        let SessionState::Connected(session) = &mut self.state else {
            self.skip(operation);
            return;
        };
        let before = *session;
        update(session);
        if *session == before {
            self.skip(operation);
        } else {
            self.dispatch(command);
        }
    }

    /// Opens a session: hidden, detached, every toggle off.
    pub fn connect(&mut self) {
        self.sync();
        if matches!(self.state, SessionState::Connected(_)) {
            self.skip("connect");
            return;
        }
        self.state = SessionState::Connected(ConnectedSession::default());
        self.dispatch(InspectorCommand::Connect);
    }

    /// Makes the inspector visible, connecting first when disconnected.
    pub fn show(&mut self) {
        self.sync();
        match self.state {
            SessionState::Closed => self.skip("show"),
            SessionState::Disconnected => {
                self.connect();
                self.show();
            },
            SessionState::Connected(_) => {
                self.update("show", InspectorCommand::Show, |s| s.visible = true);
            },
        }
    }

    pub fn hide(&mut self) {
        self.update("hide", InspectorCommand::Hide, |s| s.visible = false);
    }

    /// Hides a visible inspector, shows it otherwise.
    pub fn toggle(&mut self) {
        self.sync();
        if self.is_visible() { self.hide() } else { self.show() }
    }

    /// Shows the inspector, then forwards the panel request whenever a session is open.
    fn show_panel(&mut self, panel: InspectorPanel, command: InspectorCommand) {
        self.show();
        if let SessionState::Connected(session) = &mut self.state {
            session.panel = Some(panel);
            self.dispatch(command);
        } else {
            self.skip("show_panel");
        }
    }

    pub fn show_console(&mut self) {
        self.show_panel(InspectorPanel::Console, InspectorCommand::ShowConsole);
    }

    pub fn show_resources(&mut self) {
        self.show_panel(InspectorPanel::Resources, InspectorCommand::ShowResources);
    }

    /// Shows the main resource of `frame`.
    ///
    /// # Errors
    /// Returns [`InspectorError::InvalidFrame`] if `frame` does not belong to this surface;
    /// the session is left untouched in that case.
    pub fn show_main_resource_for_frame(&mut self, frame: FrameHandle) -> Result<(), InspectorError> {
        if frame.surface() != self.surface || !self.engine.owns_frame(self.surface, frame) {
            return Err(InspectorError::InvalidFrame { frame, context: None });
        }
        self.show_panel(InspectorPanel::MainResource(frame), InspectorCommand::ShowMainResource(frame));
        Ok(())
    }

    pub fn attach(&mut self) {
        self.update("attach", InspectorCommand::Attach, |s| s.attached = true);
    }

    pub fn detach(&mut self) {
        self.update("detach", InspectorCommand::Detach, |s| s.attached = false);
    }

    fn toggle_mode(
        &mut self,
        operation: &'static str,
        command: InspectorCommand,
        flip: impl FnOnce(&mut ConnectedSession),
    ) -> Result<(), InspectorError> {
        self.sync();
        if self.state == SessionState::Disconnected {
            return Err(InspectorError::InvalidState { operation, context: None });
        }
        self.update(operation, command, flip);
        Ok(())
    }

    /// # Errors
    /// Returns [`InspectorError::InvalidState`] while disconnected.
    pub fn toggle_page_profiling(&mut self) -> Result<(), InspectorError> {
        self.toggle_mode("toggle page profiling", InspectorCommand::TogglePageProfiling, |s| {
            s.profiling = !s.profiling;
        })
    }

    /// # Errors
    /// Returns [`InspectorError::InvalidState`] while disconnected.
    pub fn toggle_element_selection(&mut self) -> Result<(), InspectorError> {
        self.toggle_mode("toggle element selection", InspectorCommand::ToggleElementSelection, |s| {
            s.element_selection = !s.element_selection;
        })
    }

    /// Ends the session. The engine is only told when a session was connected.
    pub fn close(&mut self) {
        self.sync();
        match self.state {
            SessionState::Closed => self.skip("close"),
            SessionState::Disconnected => self.state = SessionState::Closed,
            SessionState::Connected(_) => {
                self.state = SessionState::Closed;
                self.dispatch(InspectorCommand::Close);
            },
        }
    }

    /// Forwards `message` to the inspector console while connected; dropped otherwise.
    pub fn print_error_to_console(&self, message: impl Into<String>) {
        let message = message.into();
        if self.is_connected() {
            self.dispatch(InspectorCommand::PrintError(message));
        } else {
            debug!(surface = %self.surface, %message, "Dropping console message, inspector not connected");
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.state(), SessionState::Connected(_))
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state().session().is_some_and(|s| s.visible)
    }

    /// Visible and in front according to the engine.
    #[must_use]
    pub fn is_front(&self) -> bool {
        self.is_visible() && self.engine.inspector_is_front(self.surface)
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state().session().is_some_and(|s| s.attached)
    }

    #[must_use]
    pub fn is_profiling_page(&self) -> bool {
        self.state().session().is_some_and(|s| s.profiling)
    }

    #[must_use]
    pub fn is_element_selection_active(&self) -> bool {
        self.state().session().is_some_and(|s| s.element_selection)
    }

    #[must_use]
    pub fn active_panel(&self) -> Option<InspectorPanel> {
        self.state().session().and_then(|s| s.panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_connected_state_carries_a_session() {
        assert!(SessionState::Disconnected.session().is_none());
        assert!(SessionState::Closed.session().is_none());
        let connected = SessionState::Connected(ConnectedSession { visible: true, ..Default::default() });
        assert!(connected.session().is_some_and(|s| s.visible));
    }

    #[test]
    fn labels() {
        assert_eq!(SessionState::default().label(), "disconnected");
        assert_eq!(SessionState::Connected(ConnectedSession::default()).label(), "connected");
        assert_eq!(SessionState::Closed.label(), "closed");
    }
}
