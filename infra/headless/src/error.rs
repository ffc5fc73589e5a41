use std::borrow::Cow;

/// Errors raised while setting up a headless engine.
#[ectl_derive::ectl_error]
pub enum HeadlessError {
    /// The feature catalog could not be parsed.
    #[error("Invalid feature catalog{}: {source}", format_context(.context))]
    Catalog { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Two catalog entries share a key.
    #[error("Duplicate feature key{}: {key}", format_context(.context))]
    DuplicateKey { key: String, context: Option<Cow<'static, str>> },
}
