use jobweek::display::render_preview;
use jobweek::{Expansion, JobBook, JobRecord, RecordStore, Selection, Submission};
use serde::Serialize;

use super::{print_json, ApiResponse};
use crate::cli::{FormArgs, UpdateArgs};

impl From<&FormArgs> for Submission {
    fn from(form: &FormArgs) -> Self {
        Submission {
            job_numbers: form.jobs.clone(),
            drawing_number: form.drawing.clone(),
            rev_number: form.rev.clone(),
            items: form.items.clone(),
            start_week: form.start.clone(),
            end_week: form.end.clone(),
        }
    }
}

/// JSON view of an add, preview or update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpansionResponse {
    pub saved: bool,
    pub records: Vec<JobRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_error: Option<String>,
}

/// Reports a plate table problem once on stderr; the records stand regardless.
fn report(expansion: Expansion, saved: bool, json: bool) -> ExpansionResponse {
    let reference_error = expansion.reference_error.map(|e| e.to_string());
    if let (Some(e), false) = (&reference_error, json) {
        eprintln!("Error: {}", e);
    }
    ExpansionResponse {
        saved,
        records: expansion.records,
        reference_error,
    }
}

pub fn add<S: RecordStore>(
    book: &JobBook<S>,
    form: &FormArgs,
    json: bool,
) -> jobweek::Result<()> {
    let expansion = book.submit(&Submission::from(form))?;
    let response = report(expansion, true, json);

    if json {
        print_json(&ApiResponse::ok(response));
    } else {
        println!(
            "Tasks added successfully! ({} records)",
            response.records.len()
        );
    }
    Ok(())
}

pub fn preview<S: RecordStore>(
    book: &JobBook<S>,
    form: &FormArgs,
    json: bool,
) -> jobweek::Result<()> {
    let expansion = book.preview(&Submission::from(form))?;
    let response = report(expansion, false, json);

    if json {
        print_json(&ApiResponse::ok(response));
    } else {
        print!("{}", render_preview(&response.records, book.schema()));
    }
    Ok(())
}

pub fn update<S: RecordStore>(
    book: &JobBook<S>,
    args: &UpdateArgs,
    json: bool,
) -> jobweek::Result<()> {
    let selection = Selection::from_position(&args.position)?;
    let expansion = book.update(&selection, &Submission::from(&args.form))?;
    let response = report(expansion, true, json);

    if json {
        print_json(&ApiResponse::ok(response));
    } else {
        println!("Updated record {}.", args.position.trim());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobweek::{LineItem, MemoryStore, Schema};

    fn form() -> FormArgs {
        FormArgs {
            jobs: vec!["J1".into(), "J2".into()],
            drawing: "D-1".into(),
            rev: "A".into(),
            items: vec![LineItem::new("1", "one")],
            start: "202401".into(),
            end: "202402".into(),
        }
    }

    #[test]
    fn test_form_to_submission() {
        let submission = Submission::from(&form());
        assert_eq!(submission.job_numbers, vec!["J1", "J2"]);
        assert_eq!(submission.drawing_number, "D-1");
        assert_eq!(submission.items.len(), 1);
    }

    #[test]
    fn test_preview_then_add() {
        let book = JobBook::new(MemoryStore::new(), Schema::Basic);

        preview(&book, &form(), false).unwrap();
        assert!(book.store().snapshot().is_empty());

        add(&book, &form(), true).unwrap();
        assert_eq!(book.store().snapshot().len(), 2);
    }

    #[test]
    fn test_update_rejected_for_basic_schema() {
        let book = JobBook::new(MemoryStore::new(), Schema::Basic);
        let args = UpdateArgs {
            position: "1".into(),
            form: form(),
        };
        assert!(update(&book, &args, false).is_err());
    }
}
