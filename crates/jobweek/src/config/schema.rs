use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::book::JobBook;
use crate::plates::{PlateLookup, DEFAULT_PLATE_TABLE};
use crate::record::Schema;
use crate::store::flat_file::DEFAULT_STORE_FILE;
use crate::store::FlatFileStore;

pub const CONFIG_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub version: String,
    #[serde(default)]
    pub schema: Schema,
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    #[serde(default = "default_plate_table_path")]
    pub plate_table_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

fn default_plate_table_path() -> PathBuf {
    PathBuf::from(DEFAULT_PLATE_TABLE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION.to_string(),
            schema: Schema::default(),
            store_path: default_store_path(),
            plate_table_path: default_plate_table_path(),
        }
    }
}

impl Config {
    /// Makes relative paths relative to `base` (usually the config file's directory).
    pub fn resolve_paths(&mut self, base: &Path) {
        if self.store_path.is_relative() {
            self.store_path = base.join(&self.store_path);
        }
        if self.plate_table_path.is_relative() {
            self.plate_table_path = base.join(&self.plate_table_path);
        }
    }

    /// Opens the job book this config describes. The plate table is only
    /// attached for the plated schema.
    pub fn open_book(&self) -> JobBook<FlatFileStore> {
        let book = JobBook::new(FlatFileStore::new(&self.store_path), self.schema);
        match self.schema {
            Schema::Plated => book.with_plates(PlateLookup::new(&self.plate_table_path)),
            Schema::Basic => book,
        }
    }
}
