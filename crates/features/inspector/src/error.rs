use ectl_domain::inspector::FrameHandle;
use std::borrow::Cow;

/// A specialized [`InspectorError`] enum of this crate.
#[ectl_derive::ectl_error]
pub enum InspectorError {
    /// The frame is not part of the controlled surface's frame tree.
    #[error("Invalid frame{}: {frame}", format_context(.context))]
    InvalidFrame { frame: FrameHandle, context: Option<Cow<'static, str>> },

    /// The operation needs a session that has not been connected yet.
    #[error("Inspector is not connected{}: cannot {operation}", format_context(.context))]
    InvalidState { operation: &'static str, context: Option<Cow<'static, str>> },
}
