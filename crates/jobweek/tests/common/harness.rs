//! Test harness for isolated test execution.
//!
//! Each harness owns a temporary directory holding the store file, the plate
//! table and an optional config file.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_fs::prelude::*;
use assert_fs::TempDir;

use jobweek::config::Config;
use jobweek::{FlatFileStore, JobBook, Schema};

pub struct TestHarness {
    temp_dir: TempDir,
    /// Path of the store file (may not exist yet).
    pub store_path: PathBuf,
    /// Path of the plate table (may not exist yet).
    pub plate_path: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_path = temp_dir.child("todo_list.txt").path().to_path_buf();
        let plate_path = temp_dir.child("plate.csv").path().to_path_buf();
        Self {
            temp_dir,
            store_path,
            plate_path,
        }
    }

    pub fn temp_path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw store contents.
    pub fn write_store(&self, content: &str) {
        self.temp_dir
            .child("todo_list.txt")
            .write_str(content)
            .expect("Failed to write store file");
    }

    pub fn read_store(&self) -> String {
        std::fs::read_to_string(&self.store_path).unwrap_or_default()
    }

    pub fn write_plates(&self, content: &str) {
        self.temp_dir
            .child("plate.csv")
            .write_str(content)
            .expect("Failed to write plate table");
    }

    /// Write a config file pointing at the harness's files.
    pub fn write_config(&self, schema: Schema) -> PathBuf {
        let config = Config {
            schema,
            store_path: PathBuf::from("todo_list.txt"),
            plate_table_path: PathBuf::from("plate.csv"),
            ..Config::default()
        };
        let child = self.temp_dir.child("config.json");
        let json = serde_json::to_string_pretty(&config).expect("Failed to serialize config");
        child.write_str(&json).expect("Failed to write config file");
        child.path().to_path_buf()
    }

    pub fn config(&self, schema: Schema) -> Config {
        Config {
            schema,
            store_path: self.store_path.clone(),
            plate_table_path: self.plate_path.clone(),
            ..Config::default()
        }
    }

    pub fn basic_book(&self) -> JobBook<FlatFileStore> {
        self.config(Schema::Basic).open_book()
    }

    pub fn plated_book(&self) -> JobBook<FlatFileStore> {
        self.config(Schema::Plated).open_book()
    }
}
