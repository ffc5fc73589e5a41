use std::borrow::Cow;

/// A specialized [`FeatureError`] enum of this crate.
#[ectl_derive::ectl_error]
pub enum FeatureError {
    /// The key is not part of the current registry snapshot.
    #[error("Unknown feature{}: {key}", format_context(.context))]
    UnknownFeature { key: String, context: Option<Cow<'static, str>> },
}
