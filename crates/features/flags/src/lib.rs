//! Feature-flag registry slice.
//!
//! A [`FeatureRegistry`] mirrors the features one preference context exposes. The
//! descriptor snapshot is pulled lazily and cached; every enable/disable writes straight
//! through to the engine, and reads come from the engine as well, so the cache never holds
//! flag state.

mod error;

pub use crate::error::{FeatureError, FeatureErrorExt};

use ectl_domain::features::{FeatureCategory, FeatureDescriptor, FeatureFilter, FeatureSort};
use ectl_domain::ids::{PreferenceContextId, SurfaceId};
use ectl_kernel::engine::PreferenceEngine;
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
struct Snapshot {
    descriptors: Vec<FeatureDescriptor>,
    index: FxHashMap<String, usize>,
}

impl Snapshot {
    fn pull<E: PreferenceEngine + ?Sized>(engine: &E, context: PreferenceContextId) -> Self {
        let mut snapshot = Self::default();
        for descriptor in engine.enumerate_features(context) {
            if snapshot.index.contains_key(descriptor.key()) {
                warn!(%context, key = descriptor.key(), "Duplicate feature key in engine snapshot");
                continue;
            }
            snapshot.index.insert(descriptor.key().to_owned(), snapshot.descriptors.len());
            snapshot.descriptors.push(descriptor);
        }
        info!(%context, features = snapshot.descriptors.len(), "Feature snapshot pulled");
        snapshot
    }

    fn get(&self, key: &str) -> Option<&FeatureDescriptor> {
        self.index.get(key).map(|&i| &self.descriptors[i])
    }

    /// Exact lookup first, then an ASCII case-insensitive match.
    fn resolve(&self, key: &str) -> Option<&FeatureDescriptor> {
        self.get(key).or_else(|| self.descriptors.iter().find(|d| d.key().eq_ignore_ascii_case(key)))
    }
}

/// Feature flags of one preference context.
#[derive(Debug)]
pub struct FeatureRegistry<E: ?Sized> {
    engine: Arc<E>,
    context: PreferenceContextId,
    snapshot: Option<Snapshot>,
    configured: FxHashSet<String>,
}

impl<E: PreferenceEngine + ?Sized> FeatureRegistry<E> {
    pub fn new(engine: Arc<E>, context: PreferenceContextId) -> Self {
        Self { engine, context, snapshot: None, configured: FxHashSet::default() }
    }

    /// Registry bound to the preference context of `surface`.
    pub fn for_surface(engine: Arc<E>, surface: SurfaceId) -> Self {
        let context = engine.preference_context(surface);
        Self::new(engine, context)
    }

    #[must_use]
    pub const fn context(&self) -> PreferenceContextId {
        self.context
    }

    fn snapshot(&mut self) -> &Snapshot {
        self.snapshot.get_or_insert_with(|| Snapshot::pull(&*self.engine, self.context))
    }

    /// Re-pulls the descriptor snapshot and returns the number of features in it.
    pub fn refresh(&mut self) -> usize {
        let snapshot = Snapshot::pull(&*self.engine, self.context);
        let len = snapshot.descriptors.len();
        self.snapshot = Some(snapshot);
        len
    }

    /// Descriptors matching `filter`, ordered by `sort` with ties broken by key.
    pub fn list(&mut self, filter: &FeatureFilter, sort: FeatureSort) -> Vec<FeatureDescriptor> {
        let mut listed: Vec<FeatureDescriptor> =
            self.snapshot().descriptors.iter().filter(|d| filter.matches(d)).cloned().collect();
        listed.sort_by(|a, b| compare(a, b, sort));
        listed
    }

    /// Descriptors matching `filter`, grouped by category and sorted by name.
    pub fn grouped(
        &mut self,
        filter: &FeatureFilter,
    ) -> BTreeMap<FeatureCategory, Vec<FeatureDescriptor>> {
        self.list(filter, FeatureSort::Name).into_iter().fold(BTreeMap::new(), |mut groups, d| {
            groups.entry(d.category()).or_insert_with(Vec::new).push(d);
            groups
        })
    }

    /// # Errors
    /// Returns [`FeatureError::UnknownFeature`] if `key` is not in the snapshot.
    pub fn descriptor(&mut self, key: &str) -> Result<&FeatureDescriptor, FeatureError> {
        self.snapshot().get(key).ok_or_else(|| unknown(key))
    }

    /// Current enabled state of `key`.
    ///
    /// # Errors
    /// Returns [`FeatureError::UnknownFeature`] if `key` is not in the snapshot.
    pub fn is_enabled(&mut self, key: &str) -> Result<bool, FeatureError> {
        self.descriptor(key)?;
        Ok(self.engine.is_feature_enabled(self.context, key))
    }

    /// Writes `enabled` for `key` to the engine and marks the key as user-configured.
    ///
    /// Writing the current value again is allowed and still reaches the engine.
    ///
    /// # Errors
    /// Returns [`FeatureError::UnknownFeature`] if `key` is not in the snapshot.
    pub fn set_enabled(&mut self, key: &str, enabled: bool) -> Result<(), FeatureError> {
        self.descriptor(key)?;
        self.engine.set_feature_enabled(self.context, key, enabled);
        self.configured.insert(key.to_owned());
        debug!(context = %self.context, key, enabled, "Feature flag set");
        Ok(())
    }

    /// Whether the host set `key` explicitly during this session.
    #[must_use]
    pub fn is_user_configured(&self, key: &str) -> bool {
        self.configured.contains(key)
    }

    /// Applies embedder defaults without marking them as user-configured.
    ///
    /// Unknown keys are skipped. Returns the number of keys written.
    pub fn apply_defaults<'a>(
        &mut self,
        defaults: impl IntoIterator<Item = (&'a String, &'a bool)>,
    ) -> usize {
        self.apply(defaults, false)
    }

    /// Applies host/user overrides, marking each written key as user-configured.
    ///
    /// Unknown keys are skipped. Returns the number of keys written.
    pub fn apply_overrides<'a>(
        &mut self,
        overrides: impl IntoIterator<Item = (&'a String, &'a bool)>,
    ) -> usize {
        self.apply(overrides, true)
    }

    fn apply<'a>(
        &mut self,
        entries: impl IntoIterator<Item = (&'a String, &'a bool)>,
        mark_configured: bool,
    ) -> usize {
        let mut applied = 0;
        for (key, &enabled) in entries {
            let Some(resolved) = self.snapshot().resolve(key).map(|d| d.key().to_owned()) else {
                warn!(context = %self.context, key = %key, "Skipping override for unknown feature");
                continue;
            };
            self.engine.set_feature_enabled(self.context, &resolved, enabled);
            if mark_configured {
                self.configured.insert(resolved.clone());
            }
            debug!(context = %self.context, key = %resolved, enabled, "Feature override applied");
            applied += 1;
        }
        applied
    }
}

fn unknown(key: &str) -> FeatureError {
    FeatureError::UnknownFeature { key: key.to_owned(), context: None }
}

fn compare(a: &FeatureDescriptor, b: &FeatureDescriptor, sort: FeatureSort) -> Ordering {
    let by_name = || {
        a.name().to_lowercase().cmp(&b.name().to_lowercase()).then_with(|| a.name().cmp(b.name()))
    };
    let primary = match sort {
        FeatureSort::Name => by_name(),
        FeatureSort::Status => a.status().cmp(&b.status()),
        FeatureSort::Category => a.category().cmp(&b.category()),
    };
    primary.then_with(|| a.key().cmp(b.key()))
}
