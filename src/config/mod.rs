//! Configuration module for beerus
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (store location, display preferences)

pub mod paths;
pub mod settings;

pub use paths::BeerusPaths;
pub use settings::Settings;
