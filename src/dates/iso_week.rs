//! ISO 8601 week dates
//!
//! ISO week 1 of a year is the week containing January 4th, and weeks start on
//! Monday. Converting `(year, week, weekday)` to a calendar date is then a walk
//! from the Monday of week 1.
//!
//! Week and weekday are not range-checked: week 53 of a 52-week year lands in
//! week 1 of the following year, and weekday 8 is the next Monday.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::errors::DateArgumentError;

/// Returns the Monday that starts ISO week 1 of `iso_year`
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use recordkit::iso_year_start;
///
/// // 4 January 2015 was a Sunday, so ISO 2015 starts in December 2014
/// assert_eq!(
///     iso_year_start(2015).unwrap(),
///     NaiveDate::from_ymd_opt(2014, 12, 29).unwrap()
/// );
/// ```
pub fn iso_year_start(iso_year: i32) -> Result<NaiveDate, DateArgumentError> {
    let fourth_jan = NaiveDate::from_ymd_opt(iso_year, 1, 4)
        .ok_or_else(|| DateArgumentError::out_of_range(format!("ISO year {iso_year}")))?;
    let back = i64::from(fourth_jan.weekday().number_from_monday()) - 1;

    fourth_jan
        .checked_sub_signed(TimeDelta::days(back))
        .ok_or_else(|| DateArgumentError::out_of_range(format!("start of ISO year {iso_year}")))
}

/// Converts an ISO week date into a calendar date
///
/// `iso_weekday` runs from 1 (Monday) to 7 (Sunday).
///
/// # Errors
///
/// Returns [`DateArgumentError::OutOfRange`] only if the result falls outside
/// the dates chrono can represent.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use recordkit::iso_to_date;
///
/// // Saturday of ISO week 6, 1993
/// assert_eq!(
///     iso_to_date(1993, 6, 6).unwrap(),
///     NaiveDate::from_ymd_opt(1993, 2, 13).unwrap()
/// );
/// ```
pub fn iso_to_date(
    iso_year: i32,
    iso_week: u32,
    iso_weekday: u32,
) -> Result<NaiveDate, DateArgumentError> {
    let year_start = iso_year_start(iso_year)?;
    let offset =
        TimeDelta::weeks(i64::from(iso_week) - 1) + TimeDelta::days(i64::from(iso_weekday) - 1);

    year_start.checked_add_signed(offset).ok_or_else(|| {
        DateArgumentError::out_of_range(format!(
            "ISO week date {iso_year}-W{iso_week}-{iso_weekday}"
        ))
    })
}
