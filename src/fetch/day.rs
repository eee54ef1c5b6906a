//! Per-day naming: release date, request URL and output file

use chrono::NaiveDate;

use crate::consts::{EVENT_MONTH, FIRST_DAY, LAST_DAY};
use crate::error::AppError;

/// Date on which `day`'s puzzle of `year` becomes available
pub(crate) fn release_date(year: i32, day: u32) -> Result<NaiveDate, AppError> {
    NaiveDate::from_ymd_opt(year, EVENT_MONTH, day).ok_or(AppError::InvalidYear { year, day })
}

/// Release dates of every puzzle day, in day order
pub(crate) fn release_schedule(year: i32) -> Result<Vec<(u32, NaiveDate)>, AppError> {
    (FIRST_DAY..=LAST_DAY)
        .map(|day| release_date(year, day).map(|date| (day, date)))
        .collect()
}

pub(crate) fn input_url(base_url: &str, year: i32, day: u32) -> String {
    format!("{}/{year}/day/{day}/input", base_url.trim_end_matches('/'))
}

pub(crate) fn output_file_name(day: u32) -> String {
    format!("input_{day:02}")
}
