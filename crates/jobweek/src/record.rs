//! The job record model and its two on-disk layouts.

use serde::{Deserialize, Serialize};

use crate::error::MalformedRecord;
use crate::week::is_in_progress_at;

/// Field delimiter of the store file. Never escaped.
pub const DELIMITER: char = '|';

/// On-disk record layout. The two layouts cannot read each other's files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// job, drawing, rev, item, description, start, end
    #[default]
    Basic,
    /// job, drawing, rev, item, description, part, plate, start, end
    Plated,
}

impl Schema {
    pub fn field_count(self) -> usize {
        match self {
            Schema::Basic => 7,
            Schema::Plated => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Schema::Basic => "basic",
            Schema::Plated => "plated",
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(Schema::Basic),
            "plated" => Ok(Schema::Plated),
            other => Err(format!("unknown schema '{}' (expected basic or plated)", other)),
        }
    }
}

/// Part reference carried by plated records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartRef {
    pub part_number: String,
    /// Value from the plate table; empty when the part has no entry.
    pub plate: String,
}

/// One line item of the job book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_number: String,
    pub drawing_number: String,
    pub rev_number: String,
    pub item_number: String,
    pub item_description: String,
    /// Present for [`Schema::Plated`] records only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<PartRef>,
    pub start_week: String,
    pub end_week: String,
}

impl JobRecord {
    /// Builds a record from a stored field tuple.
    ///
    /// `line` is the 1-based line number, used only for the error.
    pub fn from_fields(
        fields: &[String],
        schema: Schema,
        line: usize,
    ) -> Result<Self, MalformedRecord> {
        let malformed = || MalformedRecord {
            line,
            expected: schema.field_count(),
            found: fields.len(),
            fields: fields.to_vec(),
        };

        match (schema, fields) {
            (Schema::Basic, [job, drawing, rev, item, desc, start, end]) => Ok(Self {
                job_number: job.clone(),
                drawing_number: drawing.clone(),
                rev_number: rev.clone(),
                item_number: item.clone(),
                item_description: desc.clone(),
                part: None,
                start_week: start.clone(),
                end_week: end.clone(),
            }),
            (Schema::Plated, [job, drawing, rev, item, desc, part, plate, start, end]) => {
                Ok(Self {
                    job_number: job.clone(),
                    drawing_number: drawing.clone(),
                    rev_number: rev.clone(),
                    item_number: item.clone(),
                    item_description: desc.clone(),
                    part: Some(PartRef {
                        part_number: part.clone(),
                        plate: plate.clone(),
                    }),
                    start_week: start.clone(),
                    end_week: end.clone(),
                })
            }
            _ => Err(malformed()),
        }
    }

    /// Flattens the record into the field order of `schema`.
    ///
    /// A basic record written as plated gets empty part/plate fields; a plated
    /// record written as basic drops them.
    pub fn to_fields(&self, schema: Schema) -> Vec<String> {
        let mut fields = Vec::with_capacity(schema.field_count());
        fields.push(self.job_number.clone());
        fields.push(self.drawing_number.clone());
        fields.push(self.rev_number.clone());
        fields.push(self.item_number.clone());
        fields.push(self.item_description.clone());
        if schema == Schema::Plated {
            let part = self.part.clone().unwrap_or_default();
            fields.push(part.part_number);
            fields.push(part.plate);
        }
        fields.push(self.start_week.clone());
        fields.push(self.end_week.clone());
        fields
    }

    pub fn is_in_progress_at(&self, current_week: &str) -> bool {
        is_in_progress_at(&self.start_week, &self.end_week, current_week)
    }
}
