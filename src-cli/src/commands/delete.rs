use jobweek::{JobBook, RecordStore, Selection};
use serde::Serialize;

use super::{print_json, ApiResponse};
use crate::cli::DeleteArgs;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub position: usize,
    pub removed: Vec<String>,
}

pub fn delete<S: RecordStore>(
    book: &JobBook<S>,
    args: &DeleteArgs,
    json: bool,
) -> jobweek::Result<()> {
    let selection = Selection::from_position(&args.position)?;
    let removed = book.delete(&selection)?;
    // A successful delete implies a non-negative index.
    let position = selection.index as usize + 1;

    if json {
        print_json(&ApiResponse::ok(DeleteResponse { position, removed }));
    } else {
        let job = removed.first().map(String::as_str).unwrap_or_default();
        println!("Deleted '{}'.", job);
    }
    Ok(())
}
