use jobweek::display::render_list;
use jobweek::{current_iso_week, JobBook, JobRecord, ListedRecord, RecordStore};
use serde::Serialize;

use super::{print_json, ApiResponse};
use crate::cli::ListArgs;

/// JSON view of one stored line.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    pub position: usize,
    pub fields: Vec<String>,
    pub in_progress: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<JobRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecordView {
    fn new(listed: &ListedRecord, current_week: &str) -> Self {
        Self {
            position: listed.position(),
            fields: listed.fields.clone(),
            in_progress: listed.is_in_progress_at(current_week),
            record: listed.record.as_ref().ok().cloned(),
            error: listed.record.as_ref().err().map(|e| e.to_string()),
        }
    }
}

pub fn list<S: RecordStore>(
    book: &JobBook<S>,
    args: &ListArgs,
    json: bool,
) -> jobweek::Result<()> {
    let records = if args.sort_end_week {
        book.list_sorted_by_end_week()?
    } else {
        book.list()?
    };
    // Computed per call; never stored.
    let current_week = current_iso_week();

    if json {
        let views: Vec<RecordView> = records
            .iter()
            .map(|r| RecordView::new(r, &current_week))
            .collect();
        print_json(&ApiResponse::ok(views));
    } else {
        print!("{}", render_list(&records, book.schema(), &current_week));
    }
    Ok(())
}
