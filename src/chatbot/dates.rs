//! Cycle date projections.
//!
//! Inputs are the stored `YYYY-MM-DD` strings. A string that does not parse
//! yields `None`, and callers omit whatever depended on it.

use chrono::{Duration, NaiveDate};

use crate::models::DATE_FORMAT;

/// Ovulation is modelled as this many days before the next period.
const LUTEAL_PHASE_DAYS: i64 = 14;

pub const MIN_CYCLE_LENGTH: i64 = 21;
pub const MAX_CYCLE_LENGTH: i64 = 45;

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn project_next_period(last_period_date: &str, cycle_length: i32) -> Option<NaiveDate> {
    let last = parse_date(last_period_date)?;
    last.checked_add_signed(Duration::days(i64::from(cycle_length)))
}

/// `cycle_length - 14` days after the last period. Short cycles give a date
/// before `last_period_date`, which is returned unchanged.
pub fn project_ovulation(last_period_date: &str, cycle_length: i32) -> Option<NaiveDate> {
    let last = parse_date(last_period_date)?;
    last.checked_add_signed(Duration::days(i64::from(cycle_length) - LUTEAL_PHASE_DAYS))
}

/// Inclusive range `[ovulation - 3d, ovulation + 1d]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FertileWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FertileWindow {
    pub fn around(ovulation: NaiveDate) -> Self {
        FertileWindow {
            start: ovulation - Duration::days(3),
            end: ovulation + Duration::days(1),
        }
    }
}

/// Whole days from `today` to `target`; negative once `target` has passed.
pub fn days_until(today: NaiveDate, target: NaiveDate) -> i64 {
    (target - today).num_days()
}

pub fn cycle_length_in_range(cycle_length: i64) -> bool {
    (MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH).contains(&cycle_length)
}
