//! Date arithmetic on [`CalendarDate`].
//!
//! Every operation returns a new date built through one of the two
//! conversion paths, so results obey the same range checks as construction.

use crate::consts::{DAYS_IN_WEEK, MIN_DAY};
use crate::serial::{check_year, last_day_of_month};
use crate::types::{Month, WeekInMonth, Weekday, WeekdayRange};
use crate::{CalendarDate, DateError};

/// Clamps `day` to the last day of `month` in `year`.
fn clamp_day(day: u8, month: Month, year: u16) -> u8 {
    let last = last_day_of_month(month, year);
    if day > last {
        tracing::trace!(day, last, year, month = month.ordinal(), "clamped to end of month");
        last
    } else {
        day
    }
}

/// `target - current` in weekday ordinals, in `-6..=6`
fn weekday_delta(target: Weekday, current: Weekday) -> i32 {
    i32::from(target.ordinal()) - i32::from(current.ordinal())
}

impl CalendarDate {
    /// Moves `days` days forward (or backward when negative).
    ///
    /// # Errors
    /// Returns `DateError::InvalidSerial` if the result falls outside the
    /// supported range.
    pub fn add_days(&self, days: i32) -> Result<Self, DateError> {
        let serial = self
            .serial()
            .checked_add(days)
            .ok_or(DateError::InvalidSerial(self.serial()))?;
        Self::from_serial(serial)
    }

    /// Moves `months` calendar months, clamping the day to the end of the
    /// target month: 31 May plus one month is 30 June.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year is unsupported.
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let total = 12 * i32::from(self.year()) + i32::from(self.month().ordinal()) - 1;
        let total = total
            .checked_add(months)
            .ok_or(DateError::InvalidYear(i32::from(self.year())))?;
        let year = check_year(total.div_euclid(12))?;
        let month = Month::make(total.rem_euclid(12) + 1)?;
        let day = clamp_day(self.day_of_month(), month, year);
        Self::from_ymd(day, month, year)
    }

    /// Moves `years` years, clamping 29 February to the 28th in common years.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the target year is unsupported.
    pub fn add_years(&self, years: i32) -> Result<Self, DateError> {
        let target = i32::from(self.year())
            .checked_add(years)
            .ok_or(DateError::InvalidYear(i32::from(self.year())))?;
        let year = check_year(target)?;
        let day = clamp_day(self.day_of_month(), self.month(), year);
        Self::from_ymd(day, self.month(), year)
    }

    /// Latest date strictly before this one that falls on `target`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidSerial` if that date precedes 1 January 1900.
    pub fn previous_day_of_week(&self, target: Weekday) -> Result<Self, DateError> {
        let delta = weekday_delta(target, self.day_of_week());
        let adjust = if delta < 0 { delta } else { delta - DAYS_IN_WEEK };
        self.add_days(adjust)
    }

    /// Earliest date strictly after this one that falls on `target`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidSerial` if that date follows 31 December 9999.
    pub fn following_day_of_week(&self, target: Weekday) -> Result<Self, DateError> {
        let delta = weekday_delta(target, self.day_of_week());
        let adjust = if delta <= 0 { delta + DAYS_IN_WEEK } else { delta };
        self.add_days(adjust)
    }

    /// Date falling on `target` within three days either side of this one.
    /// Returns this date itself when it already falls on `target`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidSerial` if the result leaves the supported range.
    pub fn nearest_day_of_week(&self, target: Weekday) -> Result<Self, DateError> {
        let delta = weekday_delta(target, self.day_of_week());
        let mut adjust = (delta + DAYS_IN_WEEK).rem_euclid(DAYS_IN_WEEK);
        if adjust > 3 {
            adjust -= DAYS_IN_WEEK;
        }
        self.add_days(adjust)
    }

    /// Weekday search in the given direction.
    ///
    /// # Errors
    /// Propagates the range error of the underlying search.
    pub fn relative_day_of_week(
        &self,
        range: WeekdayRange,
        target: Weekday,
    ) -> Result<Self, DateError> {
        match range {
            WeekdayRange::Preceding => self.previous_day_of_week(target),
            WeekdayRange::Nearest => self.nearest_day_of_week(target),
            WeekdayRange::Following => self.following_day_of_week(target),
        }
    }

    /// Last day of this date's month.
    pub fn end_of_current_month(&self) -> Self {
        let last = self.last_day_of_month();
        let serial = self.serial() + i32::from(last) - i32::from(self.day_of_month());
        Self {
            serial,
            day: last,
            ..*self
        }
    }

    /// The given occurrence of `weekday` in `month` of `year`, e.g. the third
    /// Wednesday of March 2024, or the last Friday of a month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the year is unsupported.
    pub fn day_of_week_in_month(
        week: WeekInMonth,
        weekday: Weekday,
        month: Month,
        year: u16,
    ) -> Result<Self, DateError> {
        if week == WeekInMonth::Last {
            let end = Self::from_ymd(last_day_of_month(month, year), month, year)?;
            let back = weekday_delta(end.day_of_week(), weekday).rem_euclid(DAYS_IN_WEEK);
            return end.add_days(-back);
        }

        let first = Self::from_ymd(MIN_DAY, month, year)?;
        let skip = weekday_delta(weekday, first.day_of_week()).rem_euclid(DAYS_IN_WEEK);
        // every month has at least four of each weekday
        first.add_days(skip + DAYS_IN_WEEK * (week.ordinal() - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_SERIAL;

    fn d(day: u8, month: Month, year: u16) -> CalendarDate {
        CalendarDate::from_ymd(day, month, year).unwrap()
    }

    #[test]
    fn test_add_days() {
        let new_years = d(1, Month::January, 1900);
        assert_eq!(new_years.add_days(1).unwrap(), d(2, Month::January, 1900));
        assert_eq!(new_years.add_days(31).unwrap(), d(1, Month::February, 1900));
        assert_eq!(new_years.add_days(365).unwrap(), d(1, Month::January, 1901));
        assert_eq!(
            new_years.add_days(5 * 365).unwrap(),
            d(31, Month::December, 1904)
        );
        assert_eq!(
            d(1, Month::March, 2000).add_days(-1).unwrap(),
            d(29, Month::February, 2000)
        );
        assert_eq!(new_years.add_days(0).unwrap(), new_years);
    }

    #[test]
    fn test_add_days_out_of_range() {
        assert!(matches!(
            CalendarDate::MIN.add_days(-1),
            Err(DateError::InvalidSerial(1))
        ));
        assert!(matches!(
            CalendarDate::MAX.add_days(1),
            Err(DateError::InvalidSerial(s)) if s == MAX_SERIAL + 1
        ));
        assert!(CalendarDate::MAX.add_days(i32::MAX).is_err());
    }

    #[test]
    fn test_add_months() {
        struct TestCase {
            from: (u8, Month, u16),
            months: i32,
            expected: (u8, Month, u16),
        }

        let cases = [
            TestCase {
                from: (1, Month::January, 1900),
                months: 1,
                expected: (1, Month::February, 1900),
            },
            TestCase {
                from: (31, Month::January, 1900),
                months: 1,
                expected: (28, Month::February, 1900),
            },
            TestCase {
                from: (30, Month::January, 1900),
                months: 1,
                expected: (28, Month::February, 1900),
            },
            TestCase {
                from: (29, Month::January, 1900),
                months: 1,
                expected: (28, Month::February, 1900),
            },
            TestCase {
                from: (28, Month::January, 1900),
                months: 1,
                expected: (28, Month::February, 1900),
            },
            TestCase {
                from: (27, Month::January, 1900),
                months: 1,
                expected: (27, Month::February, 1900),
            },
            TestCase {
                from: (31, Month::January, 1900),
                months: 5,
                expected: (30, Month::June, 1900),
            },
            TestCase {
                from: (31, Month::January, 1900),
                months: 17,
                expected: (30, Month::June, 1901),
            },
            TestCase {
                from: (31, Month::January, 1900),
                months: 49,
                expected: (29, Month::February, 1904),
            },
            TestCase {
                from: (9, Month::November, 2001),
                months: 2,
                expected: (9, Month::January, 2002),
            },
            TestCase {
                from: (31, Month::May, 2004),
                months: 1,
                expected: (30, Month::June, 2004),
            },
            TestCase {
                from: (31, Month::May, 2004),
                months: 2,
                expected: (31, Month::July, 2004),
            },
            TestCase {
                from: (15, Month::March, 2004),
                months: -3,
                expected: (15, Month::December, 2003),
            },
            TestCase {
                from: (31, Month::March, 2004),
                months: -1,
                expected: (29, Month::February, 2004),
            },
        ];

        for case in &cases {
            let (day, month, year) = case.from;
            let (eday, emonth, eyear) = case.expected;
            assert_eq!(
                d(day, month, year).add_months(case.months).unwrap(),
                d(eday, emonth, eyear),
                "{day} {month} {year} + {} months",
                case.months
            );
        }
    }

    #[test]
    fn test_add_months_chained_keeps_clamped_day() {
        let d1 = d(31, Month::May, 2004);
        let d2 = d1.add_months(1).unwrap();
        let d3 = d2.add_months(1).unwrap();
        assert_eq!(d3, d(30, Month::July, 2004));
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(matches!(
            d(1, Month::January, 1900).add_months(-1),
            Err(DateError::InvalidYear(1899))
        ));
        assert!(matches!(
            d(1, Month::December, 9999).add_months(1),
            Err(DateError::InvalidYear(10000))
        ));
        assert!(d(1, Month::December, 9999).add_months(i32::MAX).is_err());
    }

    #[test]
    fn test_add_years() {
        assert_eq!(
            d(1, Month::January, 1900).add_years(1).unwrap(),
            d(1, Month::January, 1901)
        );
        assert_eq!(
            d(29, Month::February, 1904).add_years(1).unwrap(),
            d(28, Month::February, 1905)
        );
        assert_eq!(
            d(28, Month::February, 1904).add_years(1).unwrap(),
            d(28, Month::February, 1905)
        );
        assert_eq!(
            d(28, Month::February, 1903).add_years(1).unwrap(),
            d(28, Month::February, 1904)
        );
        assert_eq!(
            d(29, Month::February, 2000).add_years(-100).unwrap(),
            d(28, Month::February, 1900)
        );
        assert!(matches!(
            d(1, Month::January, 9999).add_years(1),
            Err(DateError::InvalidYear(10000))
        ));
    }

    #[test]
    fn test_previous_day_of_week() {
        assert_eq!(
            d(1, Month::March, 2006)
                .previous_day_of_week(Weekday::Friday)
                .unwrap(),
            d(24, Month::February, 2006)
        );
        assert_eq!(
            d(1, Month::March, 2006)
                .previous_day_of_week(Weekday::Wednesday)
                .unwrap(),
            d(22, Month::February, 2006)
        );
        assert_eq!(
            d(3, Month::March, 2004)
                .previous_day_of_week(Weekday::Sunday)
                .unwrap(),
            d(29, Month::February, 2004)
        );
        assert_eq!(
            d(5, Month::January, 2005)
                .previous_day_of_week(Weekday::Wednesday)
                .unwrap(),
            d(29, Month::December, 2004)
        );
        // Friday 9 November 2001
        assert_eq!(
            d(9, Month::November, 2001)
                .previous_day_of_week(Weekday::Monday)
                .unwrap()
                .day_of_month(),
            5
        );
    }

    #[test]
    fn test_following_day_of_week() {
        assert_eq!(
            d(25, Month::December, 2004)
                .following_day_of_week(Weekday::Saturday)
                .unwrap(),
            d(1, Month::January, 2005)
        );
        assert_eq!(
            d(26, Month::December, 2004)
                .following_day_of_week(Weekday::Saturday)
                .unwrap(),
            d(1, Month::January, 2005)
        );
        assert_eq!(
            d(28, Month::February, 2004)
                .following_day_of_week(Weekday::Wednesday)
                .unwrap(),
            d(3, Month::March, 2004)
        );
        assert_eq!(
            d(9, Month::November, 2001)
                .following_day_of_week(Weekday::Monday)
                .unwrap()
                .day_of_month(),
            12
        );
    }

    #[test]
    fn test_weekday_search_offsets() {
        let base = d(15, Month::June, 2010);
        for target in Weekday::ALL {
            let before = base.previous_day_of_week(target).unwrap();
            let after = base.following_day_of_week(target).unwrap();
            let nearest = base.nearest_day_of_week(target).unwrap();

            assert_eq!(before.day_of_week(), target);
            assert_eq!(after.day_of_week(), target);
            assert_eq!(nearest.day_of_week(), target);
            assert!((-7..0).contains(&(before - base)), "{target} before");
            assert!((1..=7).contains(&(after - base)), "{target} after");
            assert!((-3..=3).contains(&(nearest - base)), "{target} nearest");
        }
    }

    #[test]
    fn test_nearest_day_of_week() {
        // (target, [expected day of April 2006 for bases 16..=22])
        let table = [
            (Weekday::Sunday, [16, 16, 16, 16, 23, 23, 23]),
            (Weekday::Monday, [17, 17, 17, 17, 17, 24, 24]),
            (Weekday::Tuesday, [18, 18, 18, 18, 18, 18, 25]),
            (Weekday::Wednesday, [19, 19, 19, 19, 19, 19, 19]),
            (Weekday::Thursday, [13, 20, 20, 20, 20, 20, 20]),
            (Weekday::Friday, [14, 14, 21, 21, 21, 21, 21]),
            (Weekday::Saturday, [15, 15, 15, 22, 22, 22, 22]),
        ];

        for (target, expected) in table {
            for (base_day, expected_day) in (16..=22).zip(expected) {
                assert_eq!(
                    d(base_day, Month::April, 2006)
                        .nearest_day_of_week(target)
                        .unwrap(),
                    d(expected_day, Month::April, 2006),
                    "nearest {target} to {base_day} April 2006"
                );
            }
        }
    }

    #[test]
    fn test_nearest_day_of_week_other_dates() {
        // Friday 9 November 2001
        assert_eq!(
            d(9, Month::November, 2001)
                .nearest_day_of_week(Weekday::Monday)
                .unwrap()
                .day_of_month(),
            12
        );
        assert_eq!(
            d(22, Month::January, 1970)
                .nearest_day_of_week(Weekday::Monday)
                .unwrap()
                .day_of_month(),
            19
        );
    }

    #[test]
    fn test_relative_day_of_week() {
        let base = d(1, Month::March, 2006);
        assert_eq!(
            base.relative_day_of_week(WeekdayRange::Preceding, Weekday::Friday)
                .unwrap(),
            d(24, Month::February, 2006)
        );
        assert_eq!(
            base.relative_day_of_week(WeekdayRange::Following, Weekday::Friday)
                .unwrap(),
            d(3, Month::March, 2006)
        );
        assert_eq!(
            base.relative_day_of_week(WeekdayRange::Nearest, Weekday::Friday)
                .unwrap(),
            d(3, Month::March, 2006)
        );
    }

    #[test]
    fn test_weekday_search_at_range_edges() {
        // 1 January 1900 is a Monday
        assert!(
            CalendarDate::MIN
                .previous_day_of_week(Weekday::Sunday)
                .is_err()
        );
        assert!(CalendarDate::MAX.following_day_of_week(Weekday::Monday).is_err());
    }

    #[test]
    fn test_end_of_current_month() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (month, last) in Month::ALL.iter().zip(expected) {
            let end = d(1, *month, 2006).end_of_current_month();
            assert_eq!(end, d(last, *month, 2006));
            assert_eq!(end.day_of_month(), last);
            assert!(end.is_end_of_month());
        }
        assert_eq!(
            d(1, Month::February, 2008).end_of_current_month(),
            d(29, Month::February, 2008)
        );
        assert_eq!(CalendarDate::MAX.end_of_current_month(), CalendarDate::MAX);
    }

    #[test]
    fn test_day_of_week_in_month() {
        assert_eq!(
            CalendarDate::day_of_week_in_month(
                WeekInMonth::Third,
                Weekday::Wednesday,
                Month::March,
                2024
            )
            .unwrap(),
            d(20, Month::March, 2024)
        );
        assert_eq!(
            CalendarDate::day_of_week_in_month(
                WeekInMonth::First,
                Weekday::Monday,
                Month::January,
                1900
            )
            .unwrap(),
            d(1, Month::January, 1900)
        );
        assert_eq!(
            CalendarDate::day_of_week_in_month(
                WeekInMonth::Fourth,
                Weekday::Thursday,
                Month::November,
                2001
            )
            .unwrap(),
            d(22, Month::November, 2001)
        );
        assert_eq!(
            CalendarDate::day_of_week_in_month(
                WeekInMonth::Last,
                Weekday::Friday,
                Month::April,
                2006
            )
            .unwrap(),
            d(28, Month::April, 2006)
        );
        assert_eq!(
            CalendarDate::day_of_week_in_month(
                WeekInMonth::Last,
                Weekday::Sunday,
                Month::April,
                2006
            )
            .unwrap(),
            d(30, Month::April, 2006)
        );
        assert!(
            CalendarDate::day_of_week_in_month(
                WeekInMonth::First,
                Weekday::Monday,
                Month::January,
                1899
            )
            .is_err()
        );
    }
}
