//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use jobweek::{Fields, LineItem, Submission};

/// Builder for creating `Submission` instances.
pub struct SubmissionBuilder {
    submission: Submission,
}

impl SubmissionBuilder {
    /// A valid, empty-itemed submission for drawing D-100 rev A, weeks 202401..202410.
    pub fn new() -> Self {
        Self {
            submission: Submission {
                job_numbers: Vec::new(),
                drawing_number: "D-100".to_string(),
                rev_number: "A".to_string(),
                items: Vec::new(),
                start_week: "202401".to_string(),
                end_week: "202410".to_string(),
            },
        }
    }

    pub fn job(mut self, job_number: &str) -> Self {
        self.submission.job_numbers.push(job_number.to_string());
        self
    }

    pub fn drawing(mut self, drawing: &str) -> Self {
        self.submission.drawing_number = drawing.to_string();
        self
    }

    pub fn rev(mut self, rev: &str) -> Self {
        self.submission.rev_number = rev.to_string();
        self
    }

    pub fn item(mut self, number: &str, description: &str) -> Self {
        self.submission.items.push(LineItem::new(number, description));
        self
    }

    pub fn part_item(mut self, number: &str, description: &str, part: &str) -> Self {
        self.submission
            .items
            .push(LineItem::new(number, description).with_part(part));
        self
    }

    pub fn weeks(mut self, start: &str, end: &str) -> Self {
        self.submission.start_week = start.to_string();
        self.submission.end_week = end.to_string();
        self
    }

    pub fn build(self) -> Submission {
        self.submission
    }
}

impl Default for SubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Field tuple from string literals.
pub fn fields(values: &[&str]) -> Fields {
    values.iter().map(|v| v.to_string()).collect()
}
