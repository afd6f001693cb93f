//! Core domain types for the SiteCycle export converter.
//!
//! This module defines the records read from a backup document and the rows
//! written to the CSV export:
//! - Sites (anatomical locations with a side)
//! - Usage events (timestamped site activations)
//! - Export rows

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Site Types
// ============================================================================

/// Opaque site identifier as it appears in the backup.
///
/// Backups written by different app versions use either numeric or string ids,
/// so both are accepted and compared by exact value.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum SiteId {
    Int(i64),
    Text(String),
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteId::Int(n) => write!(f, "{}", n),
            SiteId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SiteId {
    fn from(n: i64) -> Self {
        SiteId::Int(n)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        SiteId::Text(s.to_string())
    }
}

/// Body side of a site. Anything other than `"left"` is treated as right.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(from = "String")]
pub enum Side {
    Left,
    Right,
}

impl From<String> for Side {
    fn from(raw: String) -> Self {
        if raw == "left" {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl Side {
    /// Display prefix used in normalized location names
    pub fn prefix(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// An anatomical injection location
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Site {
    pub id: SiteId,
    /// Raw label, either `"Body"` or `"Body - Qualifier"`
    pub name: String,
    pub side: Side,
}

// ============================================================================
// Usage History
// ============================================================================

/// Marker that a site became active at `timestamp` (ms since epoch, UTC)
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UsageEvent {
    pub site_id: SiteId,
    pub timestamp: i64,
}

// ============================================================================
// Export Types
// ============================================================================

/// One row of the SiteCycle CSV export
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ExportRow {
    /// `YYYY-MM-DDTHH:MM:SSZ`
    pub date: String,
    pub location: String,
    /// Hours with one fractional digit, empty for the still-active site
    pub duration_hours: String,
    pub note: String,
}
