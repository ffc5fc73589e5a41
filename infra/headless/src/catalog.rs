//! Built-in feature catalog mirroring a typical engine's experimental-features list.

use ectl_domain::features::{FeatureCategory, FeatureDescriptor, FeatureStatus};

fn feature(
    key: &str,
    name: &str,
    details: &str,
    status: FeatureStatus,
    category: FeatureCategory,
    default_value: bool,
) -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .key(key)
        .name(name)
        .details(details)
        .status(status)
        .category(category)
        .default_value(default_value)
        .build()
}

fn hidden(key: &str, name: &str, status: FeatureStatus, default_value: bool) -> FeatureDescriptor {
    FeatureDescriptor::builder()
        .key(key)
        .name(name)
        .status(status)
        .default_value(default_value)
        .hidden(true)
        .build()
}

/// Features every [`crate::HeadlessEngine::new`] context starts with.
#[must_use]
pub fn builtin() -> Vec<FeatureDescriptor> {
    use FeatureCategory as C;
    use FeatureStatus as S;

    vec![
        feature("CSSNestingEnabled", "CSS Nesting", "Nest style rules inside other rules", S::Stable, C::Css, true),
        feature("ViewTransitionsEnabled", "View Transitions", "Animated transitions between DOM states", S::Stable, C::Animation, true),
        feature("ScrollDrivenAnimationsEnabled", "Scroll-driven Animations", "", S::Preview, C::Animation, false),
        feature("DOMPasteAccessRequestsEnabled", "DOM Paste Access Requests", "Ask before pages read the clipboard", S::Mature, C::Dom, true),
        feature("ShadowRealmEnabled", "ShadowRealm", "Isolated JavaScript global environments", S::Unstable, C::Javascript, false),
        feature("WebGPUEnabled", "WebGPU", "GPU compute and rendering API", S::Preview, C::Javascript, false),
        feature("MediaSourceEnabled", "Media Source Extensions", "", S::Mature, C::Media, true),
        feature("ManagedMediaSourceEnabled", "Managed Media Source", "Power-efficient adaptive streaming", S::Stable, C::Media, true),
        feature("MediaRecorderEnabled", "MediaRecorder", "Record media streams", S::Testable, C::Media, false),
        feature("HTTP3Enabled", "HTTP/3", "QUIC-based transport", S::Testable, C::Networking, false),
        feature("PrivateClickMeasurementEnabled", "Private Click Measurement", "", S::Stable, C::Privacy, true),
        feature("CrossOriginEmbedderPolicyEnabled", "Cross-Origin-Embedder-Policy", "COEP header support", S::Mature, C::Security, true),
        feature("LazyImageLoadingEnabled", "Lazy image loading", "Honor loading=lazy on images", S::Mature, C::Html, true),
        feature("WebExtensionsEnabled", "Web Extensions", "Extension content scripts", S::Embedder, C::Extensions, false),
        feature("PreferPageRenderingUpdatesNear60FPSEnabled", "Prefer Page Rendering Updates near 60fps", "", S::Internal, C::None, true),
        hidden("ResourceUsageOverlayVisible", "Resource Usage Overlay", S::Internal, false),
        hidden("InspectorEngineeringSettingsAllowed", "Inspector Engineering Settings", S::Developer, false),
    ]
}
