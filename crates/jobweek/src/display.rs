//! Plain-text rendering of the job list and submission previews.

use std::fmt::Write;

use crate::book::ListedRecord;
use crate::record::{JobRecord, Schema};

pub const LIST_HEADER: &str = "=== Job List ===";
pub const LIST_FOOTER: &str = "====================";
pub const PREVIEW_HEADER: &str = "=== Preview ===";
pub const PREVIEW_FOOTER: &str = "=================";
pub const EMPTY_LIST: &str = "No tasks yet.";
pub const IN_PROGRESS_MARKER: &str = " [In Progress]";

/// Comma-joined fields of a record in `schema` order.
pub fn format_record(record: &JobRecord, schema: Schema) -> String {
    record.to_fields(schema).join(", ")
}

/// One list line: numbered by stored position, with the in-progress marker
/// or the per-line format error.
pub fn format_listed(listed: &ListedRecord, schema: Schema, current_week: &str) -> String {
    match &listed.record {
        Ok(record) => {
            let marker = if record.is_in_progress_at(current_week) {
                IN_PROGRESS_MARKER
            } else {
                ""
            };
            format!(
                "{}. {}{}",
                listed.position(),
                format_record(record, schema),
                marker
            )
        }
        Err(_) => format!(
            "Error: Task {} has incorrect format: {:?}",
            listed.position(),
            listed.fields
        ),
    }
}

pub fn render_list(records: &[ListedRecord], schema: Schema, current_week: &str) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", LIST_HEADER);
    for listed in records {
        let _ = writeln!(output, "{}", format_listed(listed, schema, current_week));
    }
    let _ = writeln!(output, "{}", LIST_FOOTER);
    output
}

pub fn render_preview(records: &[JobRecord], schema: Schema) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{}", PREVIEW_HEADER);
    for record in records {
        let _ = writeln!(output, "{}", format_record(record, schema));
    }
    let _ = writeln!(output, "{}", PREVIEW_FOOTER);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn listed(index: usize, values: &[&str]) -> ListedRecord {
        let fields = fields(values);
        ListedRecord {
            index,
            record: JobRecord::from_fields(&fields, Schema::Basic, index + 1),
            fields,
        }
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_list(&[], Schema::Basic, "202401"), "No tasks yet.\n");
    }

    #[test]
    fn test_render_list_marks_in_progress_and_errors() {
        let records = vec![
            listed(0, &["J1", "D", "A", "1", "one", "202352", "202405"]),
            listed(1, &["J2", "D", "A", "2", "two", "202402", "202405"]),
            listed(2, &["oops"]),
        ];

        let output = render_list(&records, Schema::Basic, "202401");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "=== Job List ===",
                "1. J1, D, A, 1, one, 202352, 202405 [In Progress]",
                "2. J2, D, A, 2, two, 202402, 202405",
                "Error: Task 3 has incorrect format: [\"oops\"]",
                "====================",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let record = JobRecord::from_fields(
            &fields(&["J1", "D", "A", "1", "one", "P", "ZN", "202401", "202402"]),
            Schema::Plated,
            1,
        )
        .unwrap();

        let output = render_preview(&[record], Schema::Plated);
        assert_eq!(
            output,
            "=== Preview ===\nJ1, D, A, 1, one, P, ZN, 202401, 202402\n=================\n"
        );
    }
}
