use jobweek::{current_iso_week, parse_week, ValidationError};
use serde::Serialize;

use super::{print_json, ApiResponse};
use crate::cli::WeekArgs;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekResponse {
    pub week: String,
    pub current: bool,
}

pub fn week(args: &WeekArgs, json: bool) -> jobweek::Result<()> {
    let current = current_iso_week();
    let response = match &args.week {
        None => WeekResponse {
            week: current,
            current: true,
        },
        Some(value) => {
            let parsed = parse_week(value).map_err(|reason| ValidationError::InvalidWeek {
                field: "week",
                value: value.clone(),
                reason,
            })?;
            let week = parsed.to_string();
            WeekResponse {
                current: week == current,
                week,
            }
        }
    };

    if json {
        print_json(&ApiResponse::ok(response));
    } else {
        println!("{}", response.week);
    }
    Ok(())
}
