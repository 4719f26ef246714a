//! Loads legacy redirect mappings from a CSV file.

use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::entities::RedirectMapping;

/// Date format of the `migrated_at` column.
const MIGRATED_AT_FORMAT: &str = "%Y-%m-%d";

/// Errors that abort loading a mapping file as a whole.
#[derive(Debug, thiserror::Error)]
pub enum MappingLoadError {
    #[error("mapping file {path} is not readable: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("mapping file header is invalid: {0}")]
    Header(#[from] csv::Error),
}

/// Outcome of a load: accepted records plus the number of skipped rows.
#[derive(Debug, Default)]
pub struct LoadedMappings {
    pub mappings: Vec<RedirectMapping>,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
struct MappingRow {
    old_url: String,
    new_url: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    migrated_at: String,
}

impl MappingRow {
    fn into_mapping(self, line: usize) -> Result<RedirectMapping, String> {
        let old_url = self.old_url.trim();
        let new_url = self.new_url.trim();

        if old_url.is_empty() {
            return Err("empty old_url".to_string());
        }
        if new_url.is_empty() {
            return Err("empty new_url".to_string());
        }

        let migrated_at = match self.migrated_at.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, MIGRATED_AT_FORMAT) {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!("Ignoring migrated_at {:?} on line {}: {}", raw, line, e);
                    None
                }
            },
        };

        Ok(RedirectMapping::new(
            old_url,
            new_url,
            self.title.trim(),
            migrated_at,
        ))
    }
}

/// Reads mappings from `path`.
///
/// A header row naming `old_url`, `new_url`, `title`, `migrated_at` is
/// required; column order does not matter. Rows without an `old_url` or
/// `new_url` are skipped one by one and counted in
/// [`LoadedMappings::skipped`]; an unparseable `migrated_at` is dropped
/// from an otherwise valid row.
///
/// # Errors
///
/// Returns [`MappingLoadError::Io`] if the file cannot be opened and
/// [`MappingLoadError::Header`] if the header row cannot be read.
pub fn load_mappings(path: &Path) -> Result<LoadedMappings, MappingLoadError> {
    let file = std::fs::File::open(path).map_err(|source| MappingLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    read_mappings(file)
}

/// Reads mappings from any CSV source. See [`load_mappings`].
pub fn read_mappings<R: Read>(source: R) -> Result<LoadedMappings, MappingLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(source);

    reader.headers()?;

    let mut loaded = LoadedMappings::default();

    for (index, row) in reader.deserialize::<MappingRow>().enumerate() {
        // Header is line 1.
        let line = index + 2;

        match row
            .map_err(|e| e.to_string())
            .and_then(|row| row.into_mapping(line))
        {
            Ok(mapping) => loaded.mappings.push(mapping),
            Err(reason) => {
                warn!("Skipping redirect mapping on line {}: {}", line, reason);
                loaded.skipped += 1;
            }
        }
    }

    debug!(
        "Read {} redirect mappings ({} skipped)",
        loaded.mappings.len(),
        loaded.skipped
    );

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "old_url,new_url,title,migrated_at\n";

    #[test]
    fn test_reads_well_formed_rows() {
        let csv = format!(
            "{}{}{}",
            HEADER,
            "/guides/getting-started,https://app.getoutline.com/doc/getting-started-abc123,Getting Started,2025-01-01\n",
            "/about/team/,https://app.getoutline.com/doc/our-team-ghi789,\"Team, people\",2025-01-03\n",
        );

        let loaded = read_mappings(csv.as_bytes()).unwrap();

        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.mappings.len(), 2);
        assert_eq!(loaded.mappings[0].old_url, "/guides/getting-started");
        assert_eq!(loaded.mappings[1].title, "Team, people");
        assert_eq!(
            loaded.mappings[0].migrated_at,
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
    }

    #[test]
    fn test_skips_malformed_rows_individually() {
        let csv = format!(
            "{}{}{}{}{}",
            HEADER,
            "/ok-1,https://host/doc/one-a1,One,2025-01-01\n",
            "/bad-date,https://host/doc/two-b2,Two,yesterday\n",
            ",https://host/doc/three-c3,Three,2025-01-01\n",
            "/ok-2,https://host/doc/four-d4,Four,\n",
        );

        let loaded = read_mappings(csv.as_bytes()).unwrap();

        let old: Vec<&str> = loaded.mappings.iter().map(|m| m.old_url.as_str()).collect();
        assert_eq!(old, vec!["/ok-1", "/bad-date", "/ok-2"]);
        assert_eq!(loaded.skipped, 1);
        assert!(loaded.mappings[2].migrated_at.is_none());
    }

    #[test]
    fn test_invalid_migrated_at_keeps_redirect() {
        let csv = format!("{}{}", HEADER, "/old-page,https://host/doc/page-e5,Page,03/01/2024\n");

        let loaded = read_mappings(csv.as_bytes()).unwrap();

        assert_eq!(loaded.skipped, 0);
        assert_eq!(loaded.mappings.len(), 1);
        assert_eq!(loaded.mappings[0].new_url, "https://host/doc/page-e5");
        assert!(loaded.mappings[0].migrated_at.is_none());
    }

    #[test]
    fn test_short_row_is_skipped() {
        let csv = format!("{}{}", HEADER, "/only-old-url\n");

        let loaded = read_mappings(csv.as_bytes()).unwrap();

        assert!(loaded.mappings.is_empty());
        assert_eq!(loaded.skipped, 1);
    }

    #[test]
    fn test_column_order_follows_header() {
        let csv = "title,migrated_at,new_url,old_url\nT,2025-02-02,https://h/doc/t-x1,/old\n";

        let loaded = read_mappings(csv.as_bytes()).unwrap();

        assert_eq!(loaded.mappings[0].old_url, "/old");
        assert_eq!(loaded.mappings[0].new_url, "https://h/doc/t-x1");
    }

    #[test]
    fn test_keeps_duplicates_in_load_order() {
        let csv = format!(
            "{}{}{}",
            HEADER, "/dup,https://h/doc/first-a1,First,\n", "/dup,https://h/doc/second-b2,Second,\n",
        );

        let loaded = read_mappings(csv.as_bytes()).unwrap();

        assert_eq!(loaded.mappings.len(), 2);
        assert_eq!(loaded.mappings[0].title, "First");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_mappings(Path::new("definitely/not/here.csv"));
        assert!(matches!(result, Err(MappingLoadError::Io { .. })));
    }
}
