//! End-to-end conversion of a backup file into a CSV export.

use crate::export::{build_export, UnresolvedReference};
use crate::{load_backup, Config, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Summary of a finished conversion
#[derive(Clone, Debug)]
pub struct ConversionReport {
    pub output_path: PathBuf,
    pub rows_written: usize,
    pub unresolved: Vec<UnresolvedReference>,
}

/// Default export path: `<input dir>/<prefix>-<YYYY-MM-DD>.csv`
pub fn default_output_path(input: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    let file_name = format!("{}-{}.csv", prefix, date.format("%Y-%m-%d"));
    match input.parent() {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Load `input`, build the export and write it to `output`
///
/// Nothing is written unless the backup loads and every row builds.
pub fn convert_file(input: &Path, output: &Path, config: &Config) -> Result<ConversionReport> {
    let backup = load_backup(input)?;
    let outcome = build_export(&backup, &config.rename_table())?;

    crate::csv_export::write_rows_to_path(&outcome.rows, output)?;

    Ok(ConversionReport {
        output_path: output.to_path_buf(),
        rows_written: outcome.rows.len(),
        unresolved: outcome.unresolved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SiteId};

    #[test]
    fn test_default_output_path_uses_input_dir() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(
            default_output_path(Path::new("/data/backups/infusion.json"), "sitecycle-export", date),
            PathBuf::from("/data/backups/sitecycle-export-2024-03-09.csv")
        );
        assert_eq!(
            default_output_path(Path::new("infusion.json"), "sitecycle-export", date),
            PathBuf::from("sitecycle-export-2024-03-09.csv")
        );
    }

    #[test]
    fn test_convert_file_writes_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("backup.json");
        let output = temp_dir.path().join("export.csv");
        std::fs::write(
            &input,
            r#"{
                "sites": [
                    {"id": 1, "name": "Arm - Upper", "side": "right"},
                    {"id": 2, "name": "Butt", "side": "left"}
                ],
                "usageHistory": [
                    {"siteId": 2, "timestamp": 7200000},
                    {"siteId": 99, "timestamp": 3600000},
                    {"siteId": 1, "timestamp": 0}
                ]
            }"#,
        )
        .unwrap();

        let report = convert_file(&input, &output, &Config::default()).unwrap();
        assert_eq!(report.rows_written, 2);
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].site_id, SiteId::Int(99));

        let contents = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            contents,
            "date,location,duration_hours,note\n\
             1970-01-01T00:00:00Z,Right Upper Arm,1.0,\n\
             1970-01-01T02:00:00Z,Left Buttock,,\n"
        );
    }

    #[test]
    fn test_schema_error_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("backup.json");
        let output = temp_dir.path().join("export.csv");
        std::fs::write(&input, r#"{"sites": []}"#).unwrap();

        let err = convert_file(&input, &output, &Config::default()).unwrap_err();
        assert!(matches!(err, Error::Schema { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_configured_renames_are_used() {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("backup.json");
        let output = temp_dir.path().join("export.csv");
        std::fs::write(
            &input,
            r#"{"sites": [{"id": "s1", "name": "Tum", "side": "left"}],
                "usageHistory": [{"siteId": "s1", "timestamp": 0}]}"#,
        )
        .unwrap();

        let mut config = Config::default();
        config.names.renames.insert("Tum".into(), "Abdomen - Front".into());

        convert_file(&input, &output, &config).unwrap();
        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.contains("Left Front Abdomen"));
    }
}
