use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};

/// A month of the Gregorian year, carrying its 1-based ordinal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Month {
    #[display(fmt = "January")]
    January,
    #[display(fmt = "February")]
    February,
    #[display(fmt = "March")]
    March,
    #[display(fmt = "April")]
    April,
    #[display(fmt = "May")]
    May,
    #[display(fmt = "June")]
    June,
    #[display(fmt = "July")]
    July,
    #[display(fmt = "August")]
    August,
    #[display(fmt = "September")]
    September,
    #[display(fmt = "October")]
    October,
    #[display(fmt = "November")]
    November,
    #[display(fmt = "December")]
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Looks up a month by its ordinal (January = 1)
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if the ordinal is outside `1..=12`.
    pub fn make(ordinal: i32) -> Result<Self, DateError> {
        match ordinal {
            1 => Ok(Self::January),
            2 => Ok(Self::February),
            3 => Ok(Self::March),
            4 => Ok(Self::April),
            5 => Ok(Self::May),
            6 => Ok(Self::June),
            7 => Ok(Self::July),
            8 => Ok(Self::August),
            9 => Ok(Self::September),
            10 => Ok(Self::October),
            11 => Ok(Self::November),
            12 => Ok(Self::December),
            _ => Err(DateError::InvalidOrdinal {
                kind: "month",
                ordinal,
            }),
        }
    }

    /// Returns the 1-based ordinal
    #[inline]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
            Self::July => 7,
            Self::August => 8,
            Self::September => 9,
            Self::October => 10,
            Self::November => 11,
            Self::December => 12,
        }
    }

    /// Quarter of the year (1..=4) this month falls in
    pub const fn quarter(self) -> u8 {
        1 + (self.ordinal() - 1) / 3
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::make(i32::from(value)).map_err(|_| DateError::InvalidMonth(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.ordinal()
    }
}

/// A day of the week. Ordinals run Monday = 1 through Sunday = 7.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    #[display(fmt = "Monday")]
    Monday,
    #[display(fmt = "Tuesday")]
    Tuesday,
    #[display(fmt = "Wednesday")]
    Wednesday,
    #[display(fmt = "Thursday")]
    Thursday,
    #[display(fmt = "Friday")]
    Friday,
    #[display(fmt = "Saturday")]
    Saturday,
    #[display(fmt = "Sunday")]
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Looks up a weekday by its ordinal (Monday = 1)
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` if the ordinal is outside `1..=7`.
    pub fn make(ordinal: i32) -> Result<Self, DateError> {
        match ordinal {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(DateError::InvalidOrdinal {
                kind: "weekday",
                ordinal,
            }),
        }
    }

    /// Returns the ordinal, Monday = 1
    #[inline]
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::make(i32::from(value))
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.ordinal()
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WeekInMonth {
    #[display(fmt = "First")]
    First,
    #[display(fmt = "Second")]
    Second,
    #[display(fmt = "Third")]
    Third,
    #[display(fmt = "Fourth")]
    Fourth,
    #[display(fmt = "Last")]
    Last,
}

impl WeekInMonth {
    /// Looks up a week-in-month code: 1..=4 for First..Fourth, 0 for Last
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for any other code.
    pub fn make(ordinal: i32) -> Result<Self, DateError> {
        match ordinal {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            4 => Ok(Self::Fourth),
            0 => Ok(Self::Last),
            _ => Err(DateError::InvalidOrdinal {
                kind: "week in month",
                ordinal,
            }),
        }
    }

    pub const fn ordinal(self) -> i32 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Last => 0,
        }
    }
}

/// Direction of a weekday search relative to a base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum WeekdayRange {
    #[display(fmt = "Preceding")]
    Preceding,
    #[display(fmt = "Nearest")]
    Nearest,
    #[display(fmt = "Following")]
    Following,
}

impl WeekdayRange {
    /// Looks up a search direction: -1 preceding, 0 nearest, 1 following
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for any other code.
    pub fn make(ordinal: i32) -> Result<Self, DateError> {
        match ordinal {
            -1 => Ok(Self::Preceding),
            0 => Ok(Self::Nearest),
            1 => Ok(Self::Following),
            _ => Err(DateError::InvalidOrdinal {
                kind: "weekday range",
                ordinal,
            }),
        }
    }

    pub const fn ordinal(self) -> i32 {
        match self {
            Self::Preceding => -1,
            Self::Nearest => 0,
            Self::Following => 1,
        }
    }
}

/// Which ends of a date interval are included in a range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateInterval {
    #[display(fmt = "Open")]
    Open,
    #[display(fmt = "ClosedLeft")]
    ClosedLeft,
    #[display(fmt = "ClosedRight")]
    ClosedRight,
    #[display(fmt = "Closed")]
    Closed,
}

impl DateInterval {
    /// Looks up an interval code: 0 open, 1 closed left, 2 closed right, 3 closed
    ///
    /// # Errors
    /// Returns `DateError::InvalidOrdinal` for any other code.
    pub fn make(ordinal: i32) -> Result<Self, DateError> {
        match ordinal {
            0 => Ok(Self::Open),
            1 => Ok(Self::ClosedLeft),
            2 => Ok(Self::ClosedRight),
            3 => Ok(Self::Closed),
            _ => Err(DateError::InvalidOrdinal {
                kind: "date interval",
                ordinal,
            }),
        }
    }

    /// Whether `serial` lies between `low` and `high` under this inclusion rule
    pub const fn admits(self, low: i32, high: i32, serial: i32) -> bool {
        match self {
            Self::Open => serial > low && serial < high,
            Self::ClosedLeft => serial >= low && serial < high,
            Self::ClosedRight => serial > low && serial <= high,
            Self::Closed => serial >= low && serial <= high,
        }
    }
}
