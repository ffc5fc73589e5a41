use ectl_domain::features::{FeatureCategory, FeatureDescriptor, FeatureFilter, FeatureSort, FeatureStatus};
use ectl_flags::{FeatureError, FeatureRegistry};
use ectl_headless::HeadlessEngine;
use ectl_kernel::engine::PreferenceEngine;
use std::collections::BTreeMap;
use std::sync::Arc;

fn registry() -> (Arc<HeadlessEngine>, FeatureRegistry<HeadlessEngine>) {
    let engine = Arc::new(HeadlessEngine::new());
    let surface = engine.create_surface();
    let registry = FeatureRegistry::for_surface(Arc::clone(&engine), surface);
    (engine, registry)
}

fn all() -> FeatureFilter {
    FeatureFilter::new().include_hidden(true)
}

#[test]
fn fresh_registry_reports_defaults() {
    let (_, mut registry) = registry();
    for descriptor in registry.list(&all(), FeatureSort::Name) {
        assert_eq!(registry.is_enabled(descriptor.key()).unwrap(), descriptor.default_value());
    }
}

#[test]
fn set_enabled_writes_through() {
    let (engine, mut registry) = registry();
    registry.set_enabled("WebGPUEnabled", true).unwrap();
    assert!(registry.is_enabled("WebGPUEnabled").unwrap());
    assert!(engine.is_feature_enabled(registry.context(), "WebGPUEnabled"));

    registry.set_enabled("WebGPUEnabled", false).unwrap();
    assert!(!registry.is_enabled("WebGPUEnabled").unwrap());
}

#[test]
fn repeated_value_is_still_recorded() {
    let (engine, mut registry) = registry();
    assert!(registry.is_enabled("CSSNestingEnabled").unwrap());
    assert!(!registry.is_user_configured("CSSNestingEnabled"));

    registry.set_enabled("CSSNestingEnabled", true).unwrap();
    assert!(registry.is_user_configured("CSSNestingEnabled"));
    assert_eq!(engine.feature_writes(), 1);
}

#[test]
fn unknown_keys_fail() {
    let (engine, mut registry) = registry();
    let err = registry.set_enabled("nonexistent-key", true).unwrap_err();
    assert!(matches!(err, FeatureError::UnknownFeature { ref key, .. } if key == "nonexistent-key"));
    assert_eq!(err.kind(), "UnknownFeature");
    assert!(registry.is_enabled("nonexistent-key").is_err());
    assert!(registry.descriptor("nonexistent-key").is_err());
    assert_eq!(engine.feature_writes(), 0);
}

#[test]
fn hidden_features_are_listed_only_on_request() {
    let (_, mut registry) = registry();
    let visible = registry.list(&FeatureFilter::new(), FeatureSort::Name);
    assert!(visible.iter().all(|d| !d.is_hidden()));

    let everything = registry.list(&all(), FeatureSort::Name);
    assert!(everything.iter().any(FeatureDescriptor::is_hidden));
    assert!(everything.len() > visible.len());

    registry.set_enabled("ResourceUsageOverlayVisible", true).unwrap();
    assert!(registry.is_enabled("ResourceUsageOverlayVisible").unwrap());
}

#[test]
fn category_and_status_filters() {
    let (_, mut registry) = registry();
    let media = registry.list(&FeatureFilter::new().category(FeatureCategory::Media), FeatureSort::Name);
    assert_eq!(media.len(), 3);
    assert!(media.iter().all(|d| d.category() == FeatureCategory::Media));

    let stable = registry.list(&FeatureFilter::new().min_status(FeatureStatus::Stable), FeatureSort::Name);
    assert!(!stable.is_empty());
    assert!(stable.iter().all(|d| d.status() >= FeatureStatus::Stable));
}

#[test]
fn search_matches_name_or_status() {
    let (_, mut registry) = registry();
    let gpu = registry.list(&FeatureFilter::new().search("webgpu"), FeatureSort::Name);
    assert_eq!(gpu.len(), 1);
    assert_eq!(gpu[0].key(), "WebGPUEnabled");

    let testable = registry.list(&FeatureFilter::new().search("TESTABLE"), FeatureSort::Name);
    assert!(testable.iter().all(|d| d.status() == FeatureStatus::Testable));
    assert_eq!(testable.len(), 2);
}

#[test]
fn listings_are_sorted() {
    let (_, mut registry) = registry();
    let by_name = registry.list(&all(), FeatureSort::Name);
    assert!(by_name.windows(2).all(|w| w[0].name().to_lowercase() <= w[1].name().to_lowercase()));

    let by_status = registry.list(&all(), FeatureSort::Status);
    assert!(by_status.windows(2).all(|w| w[0].status() <= w[1].status()));

    let by_category = registry.list(&all(), FeatureSort::Category);
    assert!(by_category.windows(2).all(|w| {
        w[0].category() < w[1].category()
            || (w[0].category() == w[1].category() && w[0].key() < w[1].key())
    }));
}

#[test]
fn grouped_sections_by_category() {
    let (_, mut registry) = registry();
    let groups = registry.grouped(&FeatureFilter::new());
    assert_eq!(groups[&FeatureCategory::Animation].len(), 2);
    assert!(groups.values().flatten().all(|d| !d.is_hidden()));
    for (category, descriptors) in &groups {
        assert!(descriptors.iter().all(|d| d.category() == *category));
    }
}

#[test]
fn overrides_resolve_keys_and_skip_unknown() {
    let (engine, mut registry) = registry();
    let defaults = BTreeMap::from([("webgpuenabled".to_owned(), true)]);
    let overrides = BTreeMap::from([
        ("HTTP3Enabled".to_owned(), true),
        ("NoSuchFeature".to_owned(), true),
    ]);

    assert_eq!(registry.apply_defaults(&defaults), 1);
    assert_eq!(registry.apply_overrides(&overrides), 1);

    assert!(registry.is_enabled("WebGPUEnabled").unwrap());
    assert!(!registry.is_user_configured("WebGPUEnabled"));
    assert!(registry.is_enabled("HTTP3Enabled").unwrap());
    assert!(registry.is_user_configured("HTTP3Enabled"));
    assert_eq!(engine.feature_writes(), 2);
}

#[test]
fn refresh_keeps_first_duplicate() {
    struct Duplicating(HeadlessEngine);

    impl PreferenceEngine for Duplicating {
        fn preference_context(&self, surface: ectl_domain::ids::SurfaceId) -> ectl_domain::ids::PreferenceContextId {
            self.0.preference_context(surface)
        }
        fn enumerate_features(&self, context: ectl_domain::ids::PreferenceContextId) -> Vec<FeatureDescriptor> {
            let mut features = self.0.enumerate_features(context);
            features.push(FeatureDescriptor::builder().key("WebGPUEnabled").name("Shadowed").build());
            features
        }
        fn is_feature_enabled(&self, context: ectl_domain::ids::PreferenceContextId, key: &str) -> bool {
            self.0.is_feature_enabled(context, key)
        }
        fn set_feature_enabled(&self, context: ectl_domain::ids::PreferenceContextId, key: &str, enabled: bool) {
            self.0.set_feature_enabled(context, key, enabled);
        }
    }

    let inner = HeadlessEngine::new();
    let surface = inner.create_surface();
    let expected = inner.enumerate_features(inner.preference_context(surface)).len();
    let mut registry = FeatureRegistry::for_surface(Arc::new(Duplicating(inner)), surface);

    assert_eq!(registry.refresh(), expected);
    assert_eq!(registry.descriptor("WebGPUEnabled").unwrap().name(), "WebGPU");
}
