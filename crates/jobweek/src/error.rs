use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobWeekError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Reference table error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Operation '{operation}' is not supported for the {schema} schema")]
    UnsupportedOperation {
        operation: &'static str,
        schema: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields! Missing: {0}")]
    MissingField(&'static str),

    #[error("Invalid {field} '{value}': {reason}")]
    InvalidWeek {
        field: &'static str,
        value: String,
        reason: WeekError,
    },

    #[error("Start week {start} is after end week {end}")]
    WeekOrder { start: String, end: String },

    #[error("Field '{field}' must not contain '|' or line breaks")]
    ForbiddenCharacter { field: &'static str },
}

/// Why a `yyyyww` string was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("expected yyyyww, got {0} characters")]
    TooShort(usize),

    #[error("year part is not a number")]
    NonNumericYear,

    #[error("week part is not a number")]
    NonNumericWeek,

    #[error("year {0} is outside 2000..=9999")]
    YearOutOfRange(u32),

    #[error("week {0} is outside 1..=53")]
    WeekOutOfRange(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("That number does not exist (index {index}, {len} records)")]
    OutOfRange { index: i64, len: usize },

    #[error("Please enter a number! Got '{0}'")]
    NotANumber(String),

    #[error("Record at index {index} changed since it was selected")]
    Stale { index: usize },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store file '{path}': {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ReferenceError {
    #[error("Plate table '{0}' not found")]
    MissingTable(PathBuf),

    #[error("Failed to read plate table '{path}': {source}")]
    ReadTable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A stored line whose field count does not match the book's schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Task {line} has incorrect format: expected {expected} fields, found {found}")]
pub struct MalformedRecord {
    /// 1-based line number in the store file.
    pub line: usize,
    pub expected: usize,
    pub found: usize,
    pub fields: Vec<String>,
}

pub type Result<T> = std::result::Result<T, JobWeekError>;
