//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the export layer.

pub mod export;
pub mod preview;

pub use export::{handle_export_command, ExportArgs, ExportCommands, ExportContext};
pub use preview::{handle_inspect_command, handle_preview_command, EntityKind};
