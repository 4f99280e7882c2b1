//! Part number → plate lookup backed by a comma-separated reference table.
//!
//! The table is re-read on every lookup. A missing table is reported to the
//! caller but never stops the lookup, which then simply finds nothing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::ReferenceError;

/// Default plate table file name.
pub const DEFAULT_PLATE_TABLE: &str = "plate.csv";

/// In-memory copy of the plate table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlateTable {
    entries: HashMap<String, String>,
}

impl PlateTable {
    /// Parses rows of `part_number,plate[,...]`. Extra columns are ignored,
    /// rows with fewer than two columns are skipped, and the first row for a
    /// part number wins.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for row in content.lines() {
            let mut columns = row.split(',').map(str::trim);
            let (Some(part), Some(plate)) = (columns.next(), columns.next()) else {
                continue;
            };
            if part.is_empty() {
                continue;
            }
            entries
                .entry(part.to_string())
                .or_insert_with(|| plate.to_string());
        }
        Self { entries }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ReferenceError::MissingTable(path.to_path_buf()))
            }
            Err(e) => Err(ReferenceError::ReadTable {
                path: path.to_path_buf(),
                source: e,
            }),
        }
    }

    pub fn get(&self, part_number: &str) -> Option<&str> {
        self.entries.get(part_number.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of reading the plate table for a lookup.
#[derive(Debug, Default)]
pub struct PlateTableRead {
    pub table: PlateTable,
    /// Set when the table could not be read; `table` is then empty.
    pub error: Option<ReferenceError>,
}

/// Result of looking up a single part number.
#[derive(Debug, Default)]
pub struct PlateMatch {
    pub plate: Option<String>,
    pub error: Option<ReferenceError>,
}

/// Handle on the plate table file.
#[derive(Debug, Clone)]
pub struct PlateLookup {
    path: PathBuf,
}

impl PlateLookup {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole table, falling back to an empty one on error.
    pub fn read(&self) -> PlateTableRead {
        match PlateTable::load(&self.path) {
            Ok(table) => {
                debug!("Read {} plate entries from {:?}", table.len(), self.path);
                PlateTableRead { table, error: None }
            }
            Err(e) => {
                warn!("{}; continuing without plate values", e);
                PlateTableRead {
                    table: PlateTable::default(),
                    error: Some(e),
                }
            }
        }
    }

    pub fn lookup(&self, part_number: &str) -> PlateMatch {
        let PlateTableRead { table, error } = self.read();
        PlateMatch {
            plate: table.get(part_number).map(str::to_string),
            error,
        }
    }
}

impl Default for PlateLookup {
    fn default() -> Self {
        Self::new(DEFAULT_PLATE_TABLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_table() {
        let table = PlateTable::parse("P-1,ZN\nP-2, NI ,extra\nbad-row\n,orphan\nP-1,CR\n");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("P-1"), Some("ZN"));
        assert_eq!(table.get(" P-2 "), Some("NI"));
        assert_eq!(table.get("bad-row"), None);
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plate.csv");
        std::fs::write(&path, "P-1,ZN\n").unwrap();

        let lookup = PlateLookup::new(&path);
        let hit = lookup.lookup("P-1");
        assert_eq!(hit.plate.as_deref(), Some("ZN"));
        assert!(hit.error.is_none());

        let miss = lookup.lookup("P-9");
        assert_eq!(miss.plate, None);
        assert!(miss.error.is_none());
    }

    #[test]
    fn test_lookup_missing_table_reports_and_continues() {
        let temp_dir = TempDir::new().unwrap();
        let lookup = PlateLookup::new(temp_dir.path().join("plate.csv"));

        let result = lookup.lookup("P-1");
        assert_eq!(result.plate, None);
        assert!(matches!(result.error, Some(ReferenceError::MissingTable(_))));
    }

    #[test]
    fn test_lookup_rereads_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plate.csv");
        let lookup = PlateLookup::new(&path);

        std::fs::write(&path, "P-1,ZN\n").unwrap();
        assert_eq!(lookup.lookup("P-1").plate.as_deref(), Some("ZN"));

        std::fs::write(&path, "P-1,CR\n").unwrap();
        assert_eq!(lookup.lookup("P-1").plate.as_deref(), Some("CR"));
    }
}
