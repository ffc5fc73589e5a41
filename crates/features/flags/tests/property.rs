use ectl_domain::features::{FeatureFilter, FeatureSort};
use ectl_flags::FeatureRegistry;
use ectl_headless::HeadlessEngine;
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #[test]
    fn last_write_wins(writes in proptest::collection::vec((0usize..17, any::<bool>()), 1..64)) {
        let engine = Arc::new(HeadlessEngine::new());
        let surface = engine.create_surface();
        let mut registry = FeatureRegistry::for_surface(engine, surface);
        let keys: Vec<String> = registry
            .list(&FeatureFilter::new().include_hidden(true), FeatureSort::Name)
            .into_iter()
            .map(|d| d.key().to_owned())
            .collect();

        for (index, value) in writes {
            let key = &keys[index % keys.len()];
            registry.set_enabled(key, value).unwrap();
            prop_assert_eq!(registry.is_enabled(key).unwrap(), value);
            prop_assert!(registry.is_user_configured(key));
        }
    }
}
