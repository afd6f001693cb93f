//! Export building: ordering, reference resolution and dwell durations.
//!
//! Events are sorted by timestamp (stable, so equal timestamps keep document
//! order). Each event's duration runs until the next event in that sorted
//! list, whether or not the next event resolves to a site. The last event
//! has no known end and gets an empty duration.

use crate::location::{format_location, RenameTable};
use crate::{Backup, Error, ExportRow, Result, SiteId, UsageEvent};
use chrono::{DateTime, Utc};

const MS_PER_HOUR: f64 = 3_600_000.0;

/// A usage event whose site id has no matching site
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub site_id: SiteId,
    pub timestamp: i64,
}

/// Rows ready for writing plus the events that were skipped
#[derive(Clone, Debug, Default)]
pub struct ExportOutcome {
    pub rows: Vec<ExportRow>,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Build ordered export rows from a backup
///
/// Unresolved site references are skipped and reported in the outcome; they
/// never fail the export.
pub fn build_export(backup: &Backup, renames: &RenameTable) -> Result<ExportOutcome> {
    let mut history: Vec<&UsageEvent> = backup.usage_history.iter().collect();
    history.sort_by_key(|event| event.timestamp);

    let mut outcome = ExportOutcome::default();

    for (i, event) in history.iter().enumerate() {
        let Some(site) = backup.sites.get(&event.site_id) else {
            tracing::debug!("siteId {} not found, skipping", event.site_id);
            outcome.unresolved.push(UnresolvedReference {
                site_id: event.site_id.clone(),
                timestamp: event.timestamp,
            });
            continue;
        };

        let duration_hours = match history.get(i + 1) {
            Some(next) => format_duration_hours(next.timestamp.saturating_sub(event.timestamp)),
            None => String::new(),
        };

        outcome.rows.push(ExportRow {
            date: format_iso8601(event.timestamp)?,
            location: format_location(site, renames),
            duration_hours,
            note: String::new(),
        });
    }

    tracing::debug!(
        "Built {} rows ({} unresolved)",
        outcome.rows.len(),
        outcome.unresolved.len()
    );

    Ok(outcome)
}

/// Render epoch milliseconds as `YYYY-MM-DDTHH:MM:SSZ`, truncating sub-seconds
pub fn format_iso8601(timestamp_ms: i64) -> Result<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp_millis(timestamp_ms)
        .ok_or(Error::InvalidTimestamp(timestamp_ms))?;
    Ok(dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
}

/// Milliseconds as decimal hours with one fractional digit
pub fn format_duration_hours(delta_ms: i64) -> String {
    format!("{:.1}", delta_ms as f64 / MS_PER_HOUR)
}
