//! Kernel pieces shared across slices.
//! Keep this crate lightweight: it defines the engine boundary every slice talks through
//! and the layered configuration loader.
//!
//! ## Engine boundary
//! The rendering engine is an external collaborator. Slices only see it through the
//! traits in [`engine`]; anything implementing all three is a [`engine::RenderingEngine`].
//!
//! ## Config loading
//! ```rust,ignore
//! use ectl_kernel::config::load_control_config;
//! let cfg = load_control_config(Some("config/local.toml")).unwrap();
//! ```
pub mod config;
pub mod engine;

pub use ectl_domain as domain;
