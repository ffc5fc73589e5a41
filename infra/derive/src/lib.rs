#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the control-surface crates.
//!
//! ## Usage
//! Depend on the crate from any slice that defines an error enum:
//! ```toml
//! [dependencies]
//! ectl-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for slice error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling `?` on upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` if an
///   `Internal` variant is present.
/// * **Kinds**: Generates `kind(&self) -> &'static str` returning the variant name, so
///   callers can map failures to coarse conditions without matching on fields.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`), plus a `context` field.
/// 4. Tuple or unit variants are rejected.
///
/// # Example
///
/// ```rust,ignore
/// use ectl_derive::ectl_error;
/// use std::borrow::Cow;
///
/// #[ectl_error]
/// pub enum RegistryError {
///     #[error("Unknown feature{}: {key}", format_context(.context))]
///     UnknownFeature { key: String, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn lookup(key: &str) -> Result<bool, RegistryError> {
///     Err(RegistryError::UnknownFeature { key: key.to_owned(), context: None })
///         .context("while applying overrides")
/// }
/// ```
#[proc_macro_attribute]
pub fn ectl_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
