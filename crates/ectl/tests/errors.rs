use ectl::{ControlError, ControlErrorExt};
use ectl_domain::ids::SurfaceId;
use ectl_domain::inspector::FrameHandle;
use ectl_flags::FeatureError;
use ectl_inspector::InspectorError;

#[test]
fn slice_errors_keep_their_kind() {
    let feature: ControlError = FeatureError::UnknownFeature { key: "k".to_owned(), context: None }.into();
    assert_eq!(feature.kind(), "UnknownFeature");

    let frame = FrameHandle::new(SurfaceId::new(1), 7);
    let invalid: ControlError = InspectorError::InvalidFrame { frame, context: None }.into();
    assert_eq!(invalid.kind(), "InvalidFrame");
    assert_eq!(invalid.to_string(), "Invalid frame: surface:1/frame:7");

    let state: ControlError = InspectorError::InvalidState { operation: "toggle", context: None }.into();
    assert_eq!(state.kind(), "InvalidState");
}

#[test]
fn context_is_attached_and_rendered() {
    let result: Result<(), ControlError> =
        Err(ControlError::UnknownFeature { key: "Nope".to_owned(), context: None });
    let err = result.context("flags set").unwrap_err();
    assert_eq!(err.to_string(), "Unknown feature (flags set): Nope");
}

#[test]
fn facade_lists_its_slices() {
    assert!(ectl::features::is_enabled("flags"));
    assert!(ectl::features::is_enabled("inspector"));
    assert!(!ectl::features::is_enabled("nothing"));
}
