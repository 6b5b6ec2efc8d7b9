//! Conversions between serial day numbers and (year, month, day).
//!
//! Serial 2 is 1 January 1900 and each calendar day adds one. From
//! 1 March 1900 onwards the numbering coincides with the spreadsheet
//! 1900 date system.

use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_IN_WEEK, DAYS_IN_YEAR,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_SERIAL, MAX_YEAR, MIN_DAY,
    MIN_SERIAL, MIN_YEAR, WEEKDAY_ANCHOR,
};
use crate::types::{Month, Weekday};
use crate::DateError;

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of leap years after 1900 up to and including `year`.
///
/// `leap_year_count(1900) == 0`, `leap_year_count(1904) == 1`,
/// `leap_year_count(2000) == 25`. Years before 1900 count zero.
pub const fn leap_year_count(year: u16) -> i32 {
    if year < MIN_YEAR {
        0
    } else {
        leap_years_through(year as i32)
    }
}

/// Raw form of [`leap_year_count`], only meaningful for `year >= 1896`.
const fn leap_years_through(year: i32) -> i32 {
    let leap4 = (year - 1896) / 4;
    let leap100 = (year - 1800) / 100;
    let leap400 = (year - 1600) / 400;
    leap4 - leap100 + leap400
}

pub const fn last_day_of_month(month: Month, year: u16) -> u8 {
    if matches!(month, Month::February) && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month.ordinal() as usize]
    }
}

const fn days_before_month(month: Month, year: u16) -> i32 {
    let days = DAYS_BEFORE_MONTH[month.ordinal() as usize] as i32;
    if month.ordinal() > 2 && is_leap_year(year) {
        days + 1
    } else {
        days
    }
}

/// Serial of 1 January of `year`, without range checks.
const fn serial_of_new_year(year: i32) -> i32 {
    (year - MIN_YEAR as i32) * DAYS_IN_YEAR + leap_years_through(year - 1) + MIN_SERIAL
}

pub(crate) fn check_year(year: i32) -> Result<u16, DateError> {
    match u16::try_from(year) {
        Ok(y) if (MIN_YEAR..=MAX_YEAR).contains(&y) => Ok(y),
        _ => {
            tracing::debug!(year, "year outside supported range");
            Err(DateError::InvalidYear(year))
        }
    }
}

/// Converts a (year, month, day) triple to its serial number.
///
/// # Errors
/// Returns `DateError::InvalidYear` or `DateError::InvalidDay` if the year is
/// outside `MIN_YEAR..=MAX_YEAR` or the day does not exist in that month.
pub fn serial_from_ymd(year: u16, month: Month, day: u8) -> Result<i32, DateError> {
    let year = check_year(i32::from(year))?;
    let max_day = last_day_of_month(month, year);
    if !(MIN_DAY..=max_day).contains(&day) {
        tracing::debug!(year, month = month.ordinal(), day, "day outside month");
        return Err(DateError::InvalidDay {
            year,
            month: month.ordinal(),
            day,
        });
    }
    Ok(serial_of_new_year(i32::from(year)) + days_before_month(month, year) + i32::from(day) - 1)
}

/// Converts a serial number back to (year, month, day).
///
/// # Errors
/// Returns `DateError::InvalidSerial` if the serial is outside
/// `MIN_SERIAL..=MAX_SERIAL`.
pub fn ymd_from_serial(serial: i32) -> Result<(u16, Month, u8), DateError> {
    if !(MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
        tracing::debug!(serial, "serial outside supported range");
        return Err(DateError::InvalidSerial(serial));
    }

    let days = serial - MIN_SERIAL;
    // Guess high ignoring leap days, then pull back by the leap days up to the guess.
    // The result never overshoots, so only forward correction is needed.
    let overestimate = i32::from(MIN_YEAR) + days / DAYS_IN_YEAR;
    let non_leap_days = days - leap_years_through(overestimate);
    let mut year = i32::from(MIN_YEAR) + non_leap_days.max(0) / DAYS_IN_YEAR;
    while serial_of_new_year(year + 1) <= serial {
        year += 1;
    }
    let year = check_year(year)?;

    let mut remaining = serial - serial_of_new_year(i32::from(year)) + 1;
    for month in Month::ALL {
        let length = i32::from(last_day_of_month(month, year));
        if remaining <= length {
            let day = u8::try_from(remaining).map_err(|_| DateError::InvalidSerial(serial))?;
            return Ok((year, month, day));
        }
        remaining -= length;
    }
    Err(DateError::InvalidSerial(serial))
}

/// Day of the week for a serial number; serial 2 (1 January 1900) is a Monday.
pub fn day_of_week_from_serial(serial: i32) -> Weekday {
    match (serial + WEEKDAY_ANCHOR).rem_euclid(DAYS_IN_WEEK) {
        0 => Weekday::Monday,
        1 => Weekday::Tuesday,
        2 => Weekday::Wednesday,
        3 => Weekday::Thursday,
        4 => Weekday::Friday,
        5 => Weekday::Saturday,
        _ => Weekday::Sunday,
    }
}
