//! Feature-flag descriptors and the metadata used to group and filter them.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use typed_builder::TypedBuilder;

/// Maturity tier of an engine feature.
///
/// Variants are declared from least to most mature; the derived ordering is what
/// "minimum status" filters and status sorting use. The tier never affects whether a
/// feature is enabled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FeatureStatus {
    /// For customizing engine behavior in embedding applications.
    Embedder,
    /// In active development; no promise it is usable or safe.
    Unstable,
    /// Tools for debugging the engine itself.
    Internal,
    /// Tools for web developers.
    Developer,
    /// On by default in test infrastructure, not ready to ship.
    Testable,
    /// On by default in preview builds, not ready to ship.
    Preview,
    /// On by default and ready for general use.
    Stable,
    /// On by default and in general use for more than a year.
    Mature,
}

/// Grouping of an engine feature, used for sectioning and filtering only.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FeatureCategory {
    #[default]
    #[strum(to_string = "Uncategorized", serialize = "none")]
    None = 0,
    Animation = 1,
    #[strum(serialize = "CSS")]
    Css = 2,
    #[strum(serialize = "DOM")]
    Dom = 3,
    #[strum(to_string = "JavaScript", serialize = "javascript", serialize = "js")]
    Javascript = 4,
    Media = 5,
    Networking = 6,
    Privacy = 7,
    Security = 8,
    #[strum(serialize = "HTML")]
    Html = 9,
    Extensions = 10,
}

impl FeatureCategory {
    /// The engine's numeric value for this category.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Maps an engine ordinal back to a category; unknown values yield `None`.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|c| c.ordinal() == ordinal)
    }
}

/// Immutable description of one toggleable engine capability.
///
/// Toggling a feature never touches its descriptor; the enabled state lives in the
/// preference context the descriptor was enumerated from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDescriptor {
    #[builder(setter(into))]
    key: String,
    #[builder(setter(into))]
    name: String,
    #[builder(default, setter(into))]
    #[serde(default)]
    details: String,
    #[builder(default = FeatureStatus::Stable)]
    status: FeatureStatus,
    #[builder(default)]
    #[serde(default)]
    category: FeatureCategory,
    #[builder(default)]
    #[serde(default)]
    default_value: bool,
    #[builder(default)]
    #[serde(default)]
    hidden: bool,
}

impl FeatureDescriptor {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn has_details(&self) -> bool {
        !self.details.trim().is_empty()
    }

    #[must_use]
    pub const fn status(&self) -> FeatureStatus {
        self.status
    }

    #[must_use]
    pub const fn category(&self) -> FeatureCategory {
        self.category
    }

    #[must_use]
    pub const fn default_value(&self) -> bool {
        self.default_value
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Criteria applied when listing descriptors.
///
/// The default filter hides `hidden` descriptors and applies no other restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFilter {
    pub include_hidden: bool,
    pub category: Option<FeatureCategory>,
    pub min_status: Option<FeatureStatus>,
    pub search: Option<String>,
}

impl FeatureFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    #[must_use]
    pub const fn category(mut self, category: FeatureCategory) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn min_status(mut self, status: FeatureStatus) -> Self {
        self.min_status = Some(status);
        self
    }

    /// Case-insensitive match against the descriptor name or its status label.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    #[must_use]
    pub fn matches(&self, descriptor: &FeatureDescriptor) -> bool {
        if descriptor.is_hidden() && !self.include_hidden {
            return false;
        }
        if self.category.is_some_and(|c| c != descriptor.category()) {
            return false;
        }
        if self.min_status.is_some_and(|s| descriptor.status() < s) {
            return false;
        }
        self.search.as_deref().is_none_or(|needle| {
            let needle = needle.trim().to_lowercase();
            let status: &'static str = descriptor.status().into();
            descriptor.name().to_lowercase().contains(&needle)
                || status.to_lowercase().contains(&needle)
        })
    }
}

/// Ordering applied to listed descriptors. Ties always fall back to the key.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FeatureSort {
    #[default]
    Name,
    Status,
    Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_order_follows_maturity() {
        assert!(FeatureStatus::Embedder < FeatureStatus::Unstable);
        assert!(FeatureStatus::Preview < FeatureStatus::Stable);
        assert!(FeatureStatus::Stable < FeatureStatus::Mature);
    }

    #[test]
    fn category_labels_and_parsing() {
        assert_eq!(FeatureCategory::None.to_string(), "Uncategorized");
        assert_eq!(FeatureCategory::Javascript.to_string(), "JavaScript");
        assert_eq!(FeatureCategory::Css.to_string(), "CSS");
        assert_eq!(FeatureCategory::from_str("media").ok(), Some(FeatureCategory::Media));
        assert_eq!(FeatureCategory::from_str("css").ok(), Some(FeatureCategory::Css));
        assert_eq!(FeatureCategory::from_str("none").ok(), Some(FeatureCategory::None));
        assert_eq!(FeatureCategory::from_ordinal(10), Some(FeatureCategory::Extensions));
        assert_eq!(FeatureCategory::from_ordinal(11), None);
    }

    #[test]
    fn default_filter_hides_hidden_descriptors() {
        let hidden = FeatureDescriptor::builder().key("k").name("Hidden").hidden(true).build();
        assert!(!FeatureFilter::new().matches(&hidden));
        assert!(FeatureFilter::new().include_hidden(true).matches(&hidden));
    }

    #[test]
    fn search_matches_name_or_status_label() {
        let d = FeatureDescriptor::builder()
            .key("WebGPUEnabled")
            .name("WebGPU")
            .status(FeatureStatus::Preview)
            .build();
        assert!(FeatureFilter::new().search("webgpu").matches(&d));
        assert!(FeatureFilter::new().search("PREVIEW").matches(&d));
        assert!(!FeatureFilter::new().search("stable").matches(&d));
        assert!(FeatureFilter::new().search("   ").matches(&d));
    }
}
