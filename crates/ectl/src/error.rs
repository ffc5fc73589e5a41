use ectl_domain::inspector::FrameHandle;
use ectl_flags::FeatureError;
use ectl_inspector::InspectorError;
use std::borrow::Cow;

/// Failure of any control-surface operation.
///
/// [`ControlError::kind`] names the failure so hosts can map it to a "control unavailable"
/// state without matching on the variants.
#[ectl_derive::ectl_error]
pub enum ControlError {
    #[error("Unknown feature{}: {key}", format_context(.context))]
    UnknownFeature { key: String, context: Option<Cow<'static, str>> },

    #[error("Invalid frame{}: {frame}", format_context(.context))]
    InvalidFrame { frame: FrameHandle, context: Option<Cow<'static, str>> },

    #[error("Inspector is not connected{}: cannot {operation}", format_context(.context))]
    InvalidState { operation: &'static str, context: Option<Cow<'static, str>> },
}

impl From<FeatureError> for ControlError {
    fn from(err: FeatureError) -> Self {
        match err {
            FeatureError::UnknownFeature { key, context } => Self::UnknownFeature { key, context },
        }
    }
}

impl From<InspectorError> for ControlError {
    fn from(err: InspectorError) -> Self {
        match err {
            InspectorError::InvalidFrame { frame, context } => Self::InvalidFrame { frame, context },
            InspectorError::InvalidState { operation, context } => {
                Self::InvalidState { operation, context }
            },
        }
    }
}
