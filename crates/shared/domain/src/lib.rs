//! # Domain Models
//!
//! Pure control-surface types with minimal dependencies (`serde`, `bitflags`, `strum`,
//! `typed-builder`). Keep it lean: no engine calls, no I/O, just data and small helpers
//! shared by the feature slices, the engine boundary and the facade.

pub mod config;
pub mod constants;
pub mod features;
pub mod ids;
pub mod inspector;
pub mod media;
