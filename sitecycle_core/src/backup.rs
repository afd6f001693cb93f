//! Backup document loading and validation.
//!
//! A backup is a JSON object with two required top-level collections,
//! `sites` and `usageHistory`. Any other keys are ignored.

use crate::{Error, Result, Site, SiteId, UsageEvent};
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

const SITES_KEY: &str = "sites";
const USAGE_HISTORY_KEY: &str = "usageHistory";

/// In-memory record set loaded from a backup
#[derive(Clone, Debug, Default)]
pub struct Backup {
    /// Site lookup keyed by id. Later duplicates replace earlier ones.
    pub sites: HashMap<SiteId, Site>,
    /// Usage events in document order (not sorted)
    pub usage_history: Vec<UsageEvent>,
}

impl Backup {
    /// Parse a backup from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate the top-level shape and decode both collections
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut doc) = value else {
            return Err(Error::Schema {
                missing: vec![SITES_KEY, USAGE_HISTORY_KEY],
            });
        };

        let missing: Vec<&'static str> = [SITES_KEY, USAGE_HISTORY_KEY]
            .into_iter()
            .filter(|key| !doc.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Schema { missing });
        }

        let sites: Vec<Site> = serde_json::from_value(doc.remove(SITES_KEY).unwrap_or_default())?;
        let usage_history: Vec<UsageEvent> =
            serde_json::from_value(doc.remove(USAGE_HISTORY_KEY).unwrap_or_default())?;

        tracing::debug!(
            "Loaded {} sites and {} usage events",
            sites.len(),
            usage_history.len()
        );

        let sites = sites
            .into_iter()
            .map(|site| (site.id.clone(), site))
            .collect();

        Ok(Self {
            sites,
            usage_history,
        })
    }
}

/// Read and validate a backup file
pub fn load_backup(path: &Path) -> Result<Backup> {
    let contents = std::fs::read_to_string(path)?;
    let backup = Backup::from_json_str(&contents)?;
    tracing::info!("Loaded backup from {:?}", path);
    Ok(backup)
}
