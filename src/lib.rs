mod arithmetic;
mod consts;
mod names;
mod prelude;
mod range;
mod serial;
mod types;

pub use consts::*;
pub use names::{ENGLISH, NameResolver, NameTable};
pub use range::{DateRange, DateRangeIter, RangeError};
pub use serial::{
    day_of_week_from_serial, is_leap_year, last_day_of_month, leap_year_count, serial_from_ymd,
    ymd_from_serial,
};
pub use types::{DateInterval, Month, WeekInMonth, Weekday, WeekdayRange};

use crate::prelude::*;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Sub;
use std::str::FromStr;

/// A single calendar day in the proleptic Gregorian calendar, 1900 through 9999.
///
/// Dates are identified by a serial day number where serial 2 is
/// 1 January 1900. The (year, month, day) view is derived from the serial
/// when the value is built and never drifts from it. Values are immutable:
/// arithmetic returns new dates.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.ordinal()", day)]
pub struct CalendarDate {
    serial: i32,
    year: u16,
    month: Month,
    day: u8,
}

/// Errors raised when building, converting or parsing dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Year outside `MIN_YEAR..=MAX_YEAR`.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month number outside 1-12.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },

    /// Serial number outside `MIN_SERIAL..=MAX_SERIAL`.
    #[error("Invalid serial number: {0} (must be {min}-{max})", min = MIN_SERIAL, max = MAX_SERIAL)]
    InvalidSerial(i32),

    /// Enum lookup with an ordinal that has no variant.
    #[error("Invalid {kind} ordinal: {ordinal}")]
    InvalidOrdinal { kind: &'static str, ordinal: i32 },

    /// Text that matches no known month or weekday name.
    #[error("Unrecognized {kind} name: {name:?}")]
    UnrecognizedName { kind: &'static str, name: String },

    /// Date text not in `YYYY-MM-DD` form.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Name table with a blank or repeated entry.
    #[error("Invalid name table: {0}")]
    InvalidNameTable(String),
}

impl DateError {
    /// True for the errors describing an out-of-range or inconsistent
    /// day, month, year or serial.
    pub const fn is_invalid_date_component(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_)
                | Self::InvalidMonth(_)
                | Self::InvalidDay { .. }
                | Self::InvalidSerial(_)
        )
    }
}

impl CalendarDate {
    /// Builds a date from day, month and year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` or `DateError::InvalidDay` if the
    /// components do not name a supported date (e.g. 30 February).
    pub fn from_ymd(day: u8, month: Month, year: u16) -> Result<Self, DateError> {
        let serial = serial_from_ymd(year, month, day)?;
        Ok(Self {
            serial,
            year,
            month,
            day,
        })
    }

    /// Builds a date from its serial number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidSerial` if the serial is outside
    /// `MIN_SERIAL..=MAX_SERIAL`.
    pub fn from_serial(serial: i32) -> Result<Self, DateError> {
        let (year, month, day) = ymd_from_serial(serial)?;
        Ok(Self {
            serial,
            year,
            month,
            day,
        })
    }

    /// Earliest supported date, 1 January 1900
    pub const MIN: Self = Self {
        serial: MIN_SERIAL,
        year: MIN_YEAR,
        month: Month::January,
        day: MIN_DAY,
    };

    /// Latest supported date, 31 December 9999
    pub const MAX: Self = Self {
        serial: MAX_SERIAL,
        year: MAX_YEAR,
        month: Month::December,
        day: DAYS_IN_MONTH[12],
    };

    /// Returns the serial day number
    #[inline]
    pub const fn serial(&self) -> i32 {
        self.serial
    }

    /// Returns the year
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month, starting at 1
    #[inline]
    pub const fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Day of the week, recomputed from the serial
    pub fn day_of_week(&self) -> Weekday {
        day_of_week_from_serial(self.serial)
    }

    /// Quarter of the year, 1-4
    pub const fn quarter(&self) -> u8 {
        self.month.quarter()
    }

    /// Whether this date's year is a leap year
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn last_day_of_month(&self) -> u8 {
        last_day_of_month(self.month, self.year)
    }

    /// Whether this is the last day of its month
    pub const fn is_end_of_month(&self) -> bool {
        self.day == self.last_day_of_month()
    }

    /// Signed number of days from `other` to `self`
    pub const fn days_since(&self, other: &Self) -> i32 {
        self.serial - other.serial
    }

    /// Whether this date lies between `d1` and `d2` (given in either order),
    /// with the ends included according to `interval`.
    pub fn is_in_range(&self, d1: &Self, d2: &Self, interval: DateInterval) -> bool {
        let low = d1.serial.min(d2.serial);
        let high = d1.serial.max(d2.serial);
        interval.admits(low, high, self.serial)
    }

    /// Shorthand for [`is_in_range`](Self::is_in_range) with both ends included.
    pub fn is_in_range_closed(&self, d1: &Self, d2: &Self) -> bool {
        self.is_in_range(d1, d2, DateInterval::Closed)
    }

    /// Formats as `day-MonthName-year` using the given name table,
    /// e.g. `1-January-1900` with the English table.
    pub fn format_with<N: NameResolver + ?Sized>(&self, names: &N) -> String {
        format!(
            "{}-{}-{}",
            self.day,
            names.month_name(self.month, false),
            self.year
        )
    }

    fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
        s.trim()
            .parse::<T>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        self.serial == other.serial
    }
}

impl Eq for CalendarDate {}

impl Hash for CalendarDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.serial.hash(state);
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.serial.cmp(&other.serial)
    }
}

impl Sub for CalendarDate {
    type Output = i32;

    fn sub(self, rhs: Self) -> i32 {
        self.days_since(&rhs)
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {trimmed:?}"
            )));
        };

        let year = Self::parse_component::<u16>(year)?;
        let month = Self::parse_component::<u8>(month)?;
        let day = Self::parse_component::<u8>(day)?;

        let month = Month::try_from(month)?;
        Self::from_ymd(day, month, year)
    }
}

impl TryFrom<i32> for CalendarDate {
    type Error = DateError;

    fn try_from(serial: i32) -> Result<Self, Self::Error> {
        Self::from_serial(serial)
    }
}

impl From<CalendarDate> for i32 {
    fn from(date: CalendarDate) -> Self {
        date.serial
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i32(self.serial)
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let serial = i32::deserialize(deserializer)?;
        Self::from_serial(serial).map_err(serde::de::Error::custom)
    }
}
