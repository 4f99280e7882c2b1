//! Subcommand handlers.
//!
//! Commands are organized by concern:
//! - `list`: record listing
//! - `form`: add, preview and update from form fields
//! - `delete`: positional removal
//! - `week`: ISO week helpers

pub mod delete;
pub mod form;
pub mod list;
pub mod week;

pub use delete::delete;
pub use form::{add, preview, update};
pub use list::list;
pub use week::week;

use jobweek::JobWeekError;
use serde::Serialize;

/// Response wrapper for `--json` output.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

pub fn print_json<T: Serialize>(response: &ApiResponse<T>) {
    match serde_json::to_string_pretty(response) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to encode JSON output: {}", e),
    }
}

/// 2 for configuration and disk problems, 1 for everything the user can fix
/// by changing their input.
pub fn exit_code(error: &JobWeekError) -> i32 {
    match error {
        JobWeekError::Config(_) | JobWeekError::Store(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobweek::{IndexError, StoreError};

    #[test]
    fn test_exit_codes() {
        let index = JobWeekError::Index(IndexError::NotANumber("x".into()));
        assert_eq!(exit_code(&index), 1);

        let store = JobWeekError::Store(StoreError::WriteFile {
            path: "todo_list.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        });
        assert_eq!(exit_code(&store), 2);
    }

    #[test]
    fn test_api_response_err_shape() {
        let json = serde_json::to_value(ApiResponse::<()>::err("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "nope");
        assert!(json.get("data").is_none());
    }
}
