//! The job book: every operation the presentation layer calls.
//!
//! Each mutating operation is load → mutate in memory → save. Nothing is
//! cached between calls, so two books on the same file see each other's
//! writes and the last writer wins.

use log::{debug, info};
use tracing::info_span;

use crate::error::{IndexError, JobWeekError, MalformedRecord, ReferenceError, Result};
use crate::plates::{PlateLookup, PlateTableRead};
use crate::record::{JobRecord, Schema};
use crate::store::{Fields, FlatFileStore, RecordStore};
use crate::submission::{Submission, ValidatedSubmission};

/// Explicit handle on a stored line for update and delete.
///
/// `index` is 0-based and may be negative when it came from user input; it
/// is checked against the store when the operation runs. When `snapshot` is
/// set the line at `index` must still hold exactly those fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: i64,
    pub snapshot: Option<Fields>,
}

impl Selection {
    pub fn at(index: usize) -> Self {
        Self {
            index: index as i64,
            snapshot: None,
        }
    }

    /// Parses a 1-based position typed by the user.
    pub fn from_position(text: &str) -> std::result::Result<Self, IndexError> {
        let position: i64 = text
            .trim()
            .parse()
            .map_err(|_| IndexError::NotANumber(text.to_string()))?;
        Ok(Self {
            index: position.saturating_sub(1),
            snapshot: None,
        })
    }

    pub fn with_snapshot(mut self, fields: Fields) -> Self {
        self.snapshot = Some(fields);
        self
    }

    fn resolve(&self, records: &[Fields]) -> std::result::Result<usize, IndexError> {
        let out_of_range = IndexError::OutOfRange {
            index: self.index,
            len: records.len(),
        };
        let index = usize::try_from(self.index).map_err(|_| out_of_range.clone())?;
        let current = records.get(index).ok_or(out_of_range)?;

        if let Some(snapshot) = &self.snapshot {
            if snapshot != current {
                return Err(IndexError::Stale { index });
            }
        }
        Ok(index)
    }
}

/// One stored line prepared for display.
#[derive(Debug, Clone)]
pub struct ListedRecord {
    /// 0-based position in the store file.
    pub index: usize,
    pub fields: Fields,
    pub record: std::result::Result<JobRecord, MalformedRecord>,
}

impl ListedRecord {
    /// 1-based position, as shown to users.
    pub fn position(&self) -> usize {
        self.index + 1
    }

    pub fn is_in_progress_at(&self, current_week: &str) -> bool {
        self.record
            .as_ref()
            .map(|r| r.is_in_progress_at(current_week))
            .unwrap_or(false)
    }

    /// Selection guarded by this line's current contents.
    pub fn selection(&self) -> Selection {
        Selection::at(self.index).with_snapshot(self.fields.clone())
    }
}

/// Records produced by a submission or preview.
#[derive(Debug, Default)]
pub struct Expansion {
    pub records: Vec<JobRecord>,
    /// Set when the plate table could not be read; plates are then empty.
    pub reference_error: Option<ReferenceError>,
}

pub struct JobBook<S: RecordStore = FlatFileStore> {
    store: S,
    schema: Schema,
    plates: Option<PlateLookup>,
}

impl<S: RecordStore> JobBook<S> {
    pub fn new(store: S, schema: Schema) -> Self {
        Self {
            store,
            schema,
            plates: None,
        }
    }

    pub fn with_plates(mut self, plates: PlateLookup) -> Self {
        self.plates = Some(plates);
        self
    }

    pub fn schema(&self) -> Schema {
        self.schema
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Raw stored tuples in file order.
    pub fn load_fields(&self) -> Result<Vec<Fields>> {
        Ok(self.store.load()?)
    }

    /// Every stored line in file order. Malformed lines are kept and carry
    /// their error; they never abort the listing.
    pub fn list(&self) -> Result<Vec<ListedRecord>> {
        let listed = self
            .store
            .load()?
            .into_iter()
            .enumerate()
            .map(|(index, fields)| {
                let record = JobRecord::from_fields(&fields, self.schema, index + 1);
                if let Err(e) = &record {
                    log::warn!("{}", e);
                }
                ListedRecord {
                    index,
                    fields,
                    record,
                }
            })
            .collect();
        Ok(listed)
    }

    /// Like [`list`](Self::list), ordered by end week. Stored positions are
    /// preserved and malformed lines sort last.
    pub fn list_sorted_by_end_week(&self) -> Result<Vec<ListedRecord>> {
        let mut listed = self.list()?;
        listed.sort_by(|a, b| match (&a.record, &b.record) {
            (Ok(a), Ok(b)) => a.end_week.cmp(&b.end_week),
            (Ok(_), Err(_)) => std::cmp::Ordering::Less,
            (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
            (Err(_), Err(_)) => std::cmp::Ordering::Equal,
        });
        Ok(listed)
    }

    fn plate_table(&self, validated: &ValidatedSubmission) -> PlateTableRead {
        match (&self.plates, self.schema) {
            (Some(lookup), Schema::Plated) if validated.needs_plate_table() => lookup.read(),
            _ => PlateTableRead::default(),
        }
    }

    fn expand(&self, submission: &Submission) -> Result<Expansion> {
        let validated = submission.validate()?;
        let PlateTableRead { table, error } = self.plate_table(&validated);
        Ok(Expansion {
            records: validated.expand(self.schema, &table),
            reference_error: error,
        })
    }

    /// Validates and expands without touching the store.
    pub fn preview(&self, submission: &Submission) -> Result<Expansion> {
        self.expand(submission)
    }

    /// Appends the full job × item cross-product of `submission`.
    pub fn submit(&self, submission: &Submission) -> Result<Expansion> {
        let expansion = self.expand(submission)?;
        let _span = info_span!("submit", records = expansion.records.len()).entered();

        let mut stored = self.store.load()?;
        stored.extend(expansion.records.iter().map(|r| r.to_fields(self.schema)));
        self.store.save(&stored)?;

        info!(
            "Added {} records ({} total)",
            expansion.records.len(),
            stored.len()
        );
        Ok(expansion)
    }

    /// Replaces the selected line with the first job and first item of
    /// `submission`. Only the plated schema supports this.
    pub fn update(&self, selection: &Selection, submission: &Submission) -> Result<Expansion> {
        if self.schema != Schema::Plated {
            return Err(JobWeekError::UnsupportedOperation {
                operation: "update",
                schema: self.schema.as_str(),
            });
        }

        let validated = submission.validate()?;
        let PlateTableRead { table, error } = self.plate_table(&validated);
        let record = validated.first_record(self.schema, &table);
        let _span = info_span!("update", index = selection.index).entered();

        let mut stored = self.store.load()?;
        let index = selection.resolve(&stored)?;
        stored[index] = record.to_fields(self.schema);
        self.store.save(&stored)?;

        info!("Updated record at position {}", index + 1);
        Ok(Expansion {
            records: vec![record],
            reference_error: error,
        })
    }

    /// Removes the selected line and returns its fields.
    pub fn delete(&self, selection: &Selection) -> Result<Fields> {
        let _span = info_span!("delete", index = selection.index).entered();

        let mut stored = self.store.load()?;
        let index = selection.resolve(&stored)?;
        let removed = stored.remove(index);
        self.store.save(&stored)?;

        info!("Deleted record at position {}", index + 1);
        debug!("Deleted fields: {:?}", removed);
        Ok(removed)
    }
}
