/// Date normalization and leap adjustment (transport-agnostic)
use chrono::{Datelike, NaiveDate};

use crate::constants::{FEBRUARY_28TH_ORDINAL, REFERENCE_YEAR};
use crate::error::BotError;

/// Formats tried in preference order by the flexible parser. Day-first
/// numeric forms come before the month-first retry used to resolve
/// ambiguous input such as "01.31"; named-month forms are unambiguous.
const DAY_FIRST_FORMATS: &[&str] = &[
    "%d.%m",
    "%d/%m",
    "%d-%m",
    "%d.%m.%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B",
    "%d %B %Y",
    "%B %d",
    "%B %d %Y",
    "%B %d, %Y",
];

const MONTH_FIRST_RETRY_FORMATS: &[&str] = &[
    "%m.%d",
    "%m/%d",
    "%m-%d",
    "%m.%d.%Y",
    "%m/%d/%Y",
    "%m-%d-%Y",
];

/// Parse free-form birthday input into a date in the reference year.
///
/// The compact `day.month` form (e.g. "20.02") is tried on the first
/// token; failing that, all tokens are re-joined and run through the
/// flexible format list. Year digits in the input are discarded.
pub fn parse_birthday_input(tokens: &[&str]) -> Result<NaiveDate, BotError> {
    let first = tokens.first().ok_or(BotError::InvalidDateFormat)?;
    if let Some(date) = parse_with(first, "%d.%m") {
        return Ok(date);
    }

    let text = tokens.join(" ");
    DAY_FIRST_FORMATS
        .iter()
        .chain(MONTH_FIRST_RETRY_FORMATS)
        .find_map(|format| parse_with(&text, format))
        .ok_or(BotError::InvalidDateFormat)
}

fn parse_with(text: &str, format: &str) -> Option<NaiveDate> {
    let date = if format.contains("%Y") {
        NaiveDate::parse_from_str(text, format).ok()?
    } else {
        // Formats without a year are completed with the reference year
        // so February 29th stays parseable.
        NaiveDate::parse_from_str(
            &format!("{text} {REFERENCE_YEAR}"),
            &format!("{format} %Y"),
        )
        .ok()?
    };
    date.with_year(REFERENCE_YEAR)
}

/// Leap-invariant ordinal position of a calendar date in [1, 366].
///
/// Stored birthdays live in a leap reference year, so a date in a
/// non-leap year falling after February 28th must shift by one to line
/// up with the same month/day in the reference year.
pub fn adjusted_day_of_year(date: NaiveDate) -> u32 {
    let ordinal = date.ordinal();
    if !is_leap_year(date.year()) && ordinal > FEBRUARY_28TH_ORDINAL {
        ordinal + 1
    } else {
        ordinal
    }
}

/// Check if a given year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Format a date as "January 31st"
pub fn format_date_for_display(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {}{}", date.format("%B"), day, ordinal_suffix(day))
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}
