pub mod book;
pub mod config;
pub mod display;
pub mod error;
pub mod plates;
pub mod record;
pub mod store;
pub mod submission;
pub mod week;

pub use book::{Expansion, JobBook, ListedRecord, Selection};
pub use config::{load_config, Config};
pub use error::{
    ConfigError, IndexError, JobWeekError, MalformedRecord, ReferenceError, Result, StoreError,
    ValidationError, WeekError,
};
pub use plates::{PlateLookup, PlateTable};
pub use record::{JobRecord, PartRef, Schema, DELIMITER};
pub use store::{Fields, FlatFileStore, MemoryStore, RecordStore};
pub use submission::{LineItem, Submission, ValidatedSubmission};
pub use week::{current_iso_week, is_in_progress, parse_week, validate_week, YearWeek};
