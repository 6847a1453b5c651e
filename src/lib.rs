//! assetdesk - dashboard record store and tabular export
//!
//! This library holds the records behind a project, creator and legal-issue
//! dashboard and turns them into downloadable CSV or JSON documents.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Dashboard records (projects, issues, creators, risk summary)
//! - `store`: In-memory store behind an async repository interface
//! - `export`: Row projection, CSV/JSON serialization and download targets
//! - `input`: Reading records from JSON files
//! - `display`: Terminal tables
//! - `logging`: Logger setup
//!
//! # Example
//!
//! ```rust,ignore
//! use assetdesk::export::{export_records, ExportFormat, ExportOptions, MemoryTarget};
//! use assetdesk::store::{DashboardStore, Repository};
//!
//! let store = DashboardStore::seeded();
//! let projects = futures::executor::block_on(store.projects.list())?;
//! let target = MemoryTarget::new();
//! export_records(&projects, "projects", ExportFormat::Csv, &ExportOptions::default(), &target)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod logging;
pub mod models;
pub mod store;

pub use error::{DeskError, DeskResult};
