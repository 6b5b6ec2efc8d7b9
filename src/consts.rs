/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Latest supported year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Serial number of 1 January 1900 (serial 1 is reserved by the spreadsheet convention)
pub const MIN_SERIAL: i32 = 2;

/// Serial number of 31 December 9999
pub const MAX_SERIAL: i32 = 2_958_465;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Number of days in the week
pub const DAYS_IN_WEEK: i32 = 7;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a non-leap year before the first of each month (index 0 unused)
pub const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in a non-leap year
pub(crate) const DAYS_IN_YEAR: i32 = 365;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Added to a serial before reducing mod 7 so that serial 2 (Monday 1 January 1900) has residue 0;
/// residue `r` is weekday ordinal `r + 1`
pub(crate) const WEEKDAY_ANCHOR: i32 = 5;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
