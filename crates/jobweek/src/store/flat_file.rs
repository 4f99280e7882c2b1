use std::path::{Path, PathBuf};

use log::debug;

use crate::error::StoreError;
use crate::record::DELIMITER;
use crate::store::{Fields, RecordStore};

/// Default store file name, resolved against the working directory.
pub const DEFAULT_STORE_FILE: &str = "todo_list.txt";

/// Pipe-delimited text file, one record per line, no header.
///
/// Every save rewrites the whole file in place. No locking, no temp file and
/// rename: a crash mid-write can truncate the store.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<(), StoreError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                std::fs::create_dir_all(parent).map_err(|e| StoreError::WriteFile {
                    path: self.path.clone(),
                    source: e,
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for FlatFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE)
    }
}

/// Splits file contents into field tuples. Lines are not validated.
pub fn parse_lines(content: &str) -> Vec<Fields> {
    content
        .lines()
        .map(|line| line.split(DELIMITER).map(str::to_string).collect())
        .collect()
}

/// Joins each tuple with the delimiter, one line per tuple.
pub fn render_lines(records: &[Fields]) -> String {
    let mut output = String::new();
    for record in records {
        output.push_str(&record.join(&DELIMITER.to_string()));
        output.push('\n');
    }
    output
}

impl RecordStore for FlatFileStore {
    fn load(&self) -> Result<Vec<Fields>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Store file {:?} does not exist, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(StoreError::ReadFile {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let records = parse_lines(&content);
        debug!("Loaded {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn save(&self, records: &[Fields]) -> Result<(), StoreError> {
        self.ensure_parent()?;
        std::fs::write(&self.path, render_lines(records)).map_err(|e| StoreError::WriteFile {
            path: self.path.clone(),
            source: e,
        })?;
        debug!("Saved {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}
