//! Form submissions and their expansion into job records.
//!
//! One submission carries several job numbers and several line items and
//! expands to one record per (job number, item) pair, so a single submit can
//! create dozens of records.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::plates::PlateTable;
use crate::record::{JobRecord, PartRef, Schema, DELIMITER};
use crate::week::{parse_week, YearWeek};

/// One line item as entered on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_number: String,
    pub item_description: String,
    /// Only used by the plated schema. May be blank.
    #[serde(default)]
    pub part_number: String,
    /// Explicit plate value. When absent the plate table is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
}

impl LineItem {
    pub fn new(item_number: impl Into<String>, item_description: impl Into<String>) -> Self {
        Self {
            item_number: item_number.into(),
            item_description: item_description.into(),
            ..Default::default()
        }
    }

    pub fn with_part(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = part_number.into();
        self
    }

    pub fn with_plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = Some(plate.into());
        self
    }

    /// Items count only when both number and description are filled in.
    fn is_filled(&self) -> bool {
        !self.item_number.trim().is_empty() && !self.item_description.trim().is_empty()
    }

    fn trimmed(&self) -> Self {
        Self {
            item_number: self.item_number.trim().to_string(),
            item_description: self.item_description.trim().to_string(),
            part_number: self.part_number.trim().to_string(),
            plate: self.plate.as_ref().map(|p| p.trim().to_string()),
        }
    }
}

/// Raw form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub job_numbers: Vec<String>,
    pub drawing_number: String,
    pub rev_number: String,
    pub items: Vec<LineItem>,
    pub start_week: String,
    pub end_week: String,
}

/// A submission that passed validation. Fields are trimmed, blank job
/// numbers and incomplete items are dropped, weeks are zero-padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    job_numbers: Vec<String>,
    drawing_number: String,
    rev_number: String,
    items: Vec<LineItem>,
    start_week: YearWeek,
    end_week: YearWeek,
}

fn check_field(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(ValidationError::ForbiddenCharacter { field });
    }
    Ok(())
}

fn check_week(field: &'static str, value: &str) -> Result<YearWeek, ValidationError> {
    parse_week(value).map_err(|reason| ValidationError::InvalidWeek {
        field,
        value: value.to_string(),
        reason,
    })
}

impl Submission {
    pub fn validate(&self) -> Result<ValidatedSubmission, ValidationError> {
        // Duplicates are kept on purpose: each one yields its own records.
        let job_numbers: Vec<String> = self
            .job_numbers
            .iter()
            .map(|j| j.trim())
            .filter(|j| !j.is_empty())
            .map(str::to_string)
            .collect();
        let drawing_number = self.drawing_number.trim().to_string();
        let rev_number = self.rev_number.trim().to_string();
        let items: Vec<LineItem> = self
            .items
            .iter()
            .filter(|item| item.is_filled())
            .map(LineItem::trimmed)
            .collect();
        let start = self.start_week.trim();
        let end = self.end_week.trim();

        if job_numbers.is_empty() {
            return Err(ValidationError::MissingField("job number"));
        }
        if drawing_number.is_empty() {
            return Err(ValidationError::MissingField("drawing number"));
        }
        if rev_number.is_empty() {
            return Err(ValidationError::MissingField("rev number"));
        }
        if items.is_empty() {
            return Err(ValidationError::MissingField("item"));
        }
        if start.is_empty() {
            return Err(ValidationError::MissingField("start week"));
        }
        if end.is_empty() {
            return Err(ValidationError::MissingField("end week"));
        }

        let start_week = check_week("start week", start)?;
        let end_week = check_week("end week", end)?;
        // Both sides are normalized, so this matches the stored string order.
        if start_week.to_string() > end_week.to_string() {
            return Err(ValidationError::WeekOrder {
                start: start_week.to_string(),
                end: end_week.to_string(),
            });
        }

        for job in &job_numbers {
            check_field("job number", job)?;
        }
        check_field("drawing number", &drawing_number)?;
        check_field("rev number", &rev_number)?;
        for item in &items {
            check_field("item number", &item.item_number)?;
            check_field("item description", &item.item_description)?;
            check_field("part number", &item.part_number)?;
            if let Some(plate) = &item.plate {
                check_field("plate", plate)?;
            }
        }

        Ok(ValidatedSubmission {
            job_numbers,
            drawing_number,
            rev_number,
            items,
            start_week,
            end_week,
        })
    }
}

impl ValidatedSubmission {
    pub fn job_numbers(&self) -> &[String] {
        &self.job_numbers
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn start_week(&self) -> YearWeek {
        self.start_week
    }

    pub fn end_week(&self) -> YearWeek {
        self.end_week
    }

    /// True when some item needs its plate resolved from the table.
    pub fn needs_plate_table(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.plate.is_none() && !item.part_number.is_empty())
    }

    /// Number of records [`expand`](Self::expand) produces.
    pub fn record_count(&self) -> usize {
        self.job_numbers.len() * self.items.len()
    }

    fn record(
        &self,
        job_number: &str,
        item: &LineItem,
        schema: Schema,
        plates: &PlateTable,
    ) -> JobRecord {
        let part = match schema {
            Schema::Basic => None,
            Schema::Plated => {
                let plate = match &item.plate {
                    Some(plate) => plate.clone(),
                    None => plates
                        .get(&item.part_number)
                        .map(str::to_string)
                        .unwrap_or_default(),
                };
                Some(PartRef {
                    part_number: item.part_number.clone(),
                    plate,
                })
            }
        };

        JobRecord {
            job_number: job_number.to_string(),
            drawing_number: self.drawing_number.clone(),
            rev_number: self.rev_number.clone(),
            item_number: item.item_number.clone(),
            item_description: item.item_description.clone(),
            part,
            start_week: self.start_week.to_string(),
            end_week: self.end_week.to_string(),
        }
    }

    /// Full cross-product of job numbers × items, job-major.
    pub fn expand(&self, schema: Schema, plates: &PlateTable) -> Vec<JobRecord> {
        let mut records = Vec::with_capacity(self.record_count());
        for job_number in &self.job_numbers {
            for item in &self.items {
                records.push(self.record(job_number, item, schema, plates));
            }
        }
        records
    }

    /// The single record an update writes: first job number, first item.
    pub fn first_record(&self, schema: Schema, plates: &PlateTable) -> JobRecord {
        // validate() guarantees at least one of each.
        self.record(&self.job_numbers[0], &self.items[0], schema, plates)
    }
}
