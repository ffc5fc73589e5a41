pub mod flags;
pub mod inspector;
pub mod media;
pub mod script;
