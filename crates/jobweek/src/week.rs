//! ISO year-week handling in the compact `yyyyww` encoding.
//!
//! Weeks are compared as strings throughout the crate. That ordering is only
//! sound because every week written by this crate is zero-padded to six
//! digits, so always go through [`YearWeek`]'s `Display` when storing one.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::WeekError;

pub const MIN_YEAR: u32 = 2000;
pub const MAX_YEAR: u32 = 9999;
pub const MIN_WEEK: u32 = 1;
/// Week 53 is accepted for every year, whether or not the ISO calendar has one.
pub const MAX_WEEK: u32 = 53;

/// A validated (year, week) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearWeek {
    pub year: u32,
    pub week: u32,
}

impl YearWeek {
    pub fn new(year: u32, week: u32) -> Result<Self, WeekError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(WeekError::YearOutOfRange(year));
        }
        if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
            return Err(WeekError::WeekOutOfRange(week));
        }
        Ok(Self { year, week })
    }
}

impl fmt::Display for YearWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}", self.year, self.week)
    }
}

impl std::str::FromStr for YearWeek {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_week(s)
    }
}

fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses `yyyyww`: the first four characters are the year, everything after
/// them is the week number.
pub fn parse_week(week: &str) -> Result<YearWeek, WeekError> {
    let len = week.chars().count();
    if len < 5 {
        return Err(WeekError::TooShort(len));
    }

    let (year_part, week_part) = match week.char_indices().nth(4) {
        Some((split, _)) => week.split_at(split),
        None => return Err(WeekError::TooShort(len)),
    };

    let year = parse_digits(year_part).ok_or(WeekError::NonNumericYear)?;
    let week_num = parse_digits(week_part).ok_or(WeekError::NonNumericWeek)?;

    YearWeek::new(year, week_num)
}

/// Returns true for a well-formed, in-range `yyyyww` string. Never panics.
pub fn validate_week(week: &str) -> bool {
    parse_week(week).is_ok()
}

/// The ISO week containing `date`, encoded as `yyyyww`.
pub fn iso_week_of(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{:04}{:02}", iso.year(), iso.week())
}

/// The ISO week of today's local date, encoded as `yyyyww`.
pub fn current_iso_week() -> String {
    iso_week_of(Local::now().date_naive())
}

/// True when `current` lies in `start..=end` under string comparison.
pub fn is_in_progress_at(start: &str, end: &str, current: &str) -> bool {
    start <= current && current <= end
}

/// True when the current ISO week lies in `start..=end`.
///
/// Depends on the wall clock, so recompute it on every render.
pub fn is_in_progress(start: &str, end: &str) -> bool {
    is_in_progress_at(start, end, &current_iso_week())
}
