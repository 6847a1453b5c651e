//! Configuration module for assetdesk
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DeskPaths;
pub use settings::Settings;
