#![forbid(unsafe_code)]

//! Core conversion logic for turning infusion-tracker JSON backups into
//! SiteCycle CSV exports.
//!
//! This crate provides:
//! - Domain types (sites, usage events, export rows)
//! - Backup loading and schema validation
//! - Location name normalization
//! - Export building (ordering, durations, reference resolution)
//! - CSV writing and configuration

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod backup;
pub mod location;
pub mod export;
pub mod csv_export;
pub mod convert;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use backup::{load_backup, Backup};
pub use location::{format_location, to_zone_name, RenameTable};
pub use export::{build_export, ExportOutcome, UnresolvedReference};
pub use convert::{convert_file, default_output_path, ConversionReport};
