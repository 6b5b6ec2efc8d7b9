//! Month and weekday names for formatting and parsing.
//!
//! Date arithmetic never touches names. Callers that format or parse pass a
//! [`NameResolver`] explicitly; [`ENGLISH`] is the built-in table.

use std::borrow::Cow;

use crate::DateError;
use crate::types::{Month, Weekday};

/// Maps months and weekdays to display names and parses them back.
///
/// Implementors supply the four lookups; parsing is provided on top of them
/// and is case-insensitive (Unicode lowercase), ignores surrounding whitespace
/// and accepts both the full and the abbreviated form.
pub trait NameResolver {
    fn month_name(&self, month: Month, abbreviated: bool) -> &str;

    fn weekday_name(&self, weekday: Weekday) -> &str;

    fn short_weekday_name(&self, weekday: Weekday) -> &str;

    /// Parses a month name, abbreviation, or number `1`..`12`.
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedName` if nothing matches.
    fn parse_month(&self, s: &str) -> Result<Month, DateError> {
        let trimmed = s.trim();
        let folded = trimmed.to_lowercase();
        let by_name = Month::ALL.into_iter().find(|&month| {
            folded == self.month_name(month, false).to_lowercase()
                || folded == self.month_name(month, true).to_lowercase()
        });
        if let Some(month) = by_name {
            return Ok(month);
        }

        trimmed
            .parse::<i32>()
            .ok()
            .and_then(|ordinal| Month::make(ordinal).ok())
            .ok_or_else(|| unrecognized("month", s))
    }

    /// Parses a weekday name or abbreviation.
    ///
    /// # Errors
    /// Returns `DateError::UnrecognizedName` if nothing matches.
    fn parse_weekday(&self, s: &str) -> Result<Weekday, DateError> {
        let folded = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|&weekday| {
                folded == self.weekday_name(weekday).to_lowercase()
                    || folded == self.short_weekday_name(weekday).to_lowercase()
            })
            .ok_or_else(|| unrecognized("weekday", s))
    }
}

fn unrecognized(kind: &'static str, name: &str) -> DateError {
    tracing::debug!(kind, name, "unrecognized name");
    DateError::UnrecognizedName {
        kind,
        name: name.to_owned(),
    }
}

/// A fixed table of month and weekday names.
///
/// Built once and only read afterwards. Weekday arrays are indexed Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameTable {
    months: [Cow<'static, str>; 12],
    short_months: [Cow<'static, str>; 12],
    weekdays: [Cow<'static, str>; 7],
    short_weekdays: [Cow<'static, str>; 7],
}

/// English month and weekday names.
pub static ENGLISH: NameTable = NameTable {
    months: [
        Cow::Borrowed("January"),
        Cow::Borrowed("February"),
        Cow::Borrowed("March"),
        Cow::Borrowed("April"),
        Cow::Borrowed("May"),
        Cow::Borrowed("June"),
        Cow::Borrowed("July"),
        Cow::Borrowed("August"),
        Cow::Borrowed("September"),
        Cow::Borrowed("October"),
        Cow::Borrowed("November"),
        Cow::Borrowed("December"),
    ],
    short_months: [
        Cow::Borrowed("Jan"),
        Cow::Borrowed("Feb"),
        Cow::Borrowed("Mar"),
        Cow::Borrowed("Apr"),
        Cow::Borrowed("May"),
        Cow::Borrowed("Jun"),
        Cow::Borrowed("Jul"),
        Cow::Borrowed("Aug"),
        Cow::Borrowed("Sep"),
        Cow::Borrowed("Oct"),
        Cow::Borrowed("Nov"),
        Cow::Borrowed("Dec"),
    ],
    weekdays: [
        Cow::Borrowed("Monday"),
        Cow::Borrowed("Tuesday"),
        Cow::Borrowed("Wednesday"),
        Cow::Borrowed("Thursday"),
        Cow::Borrowed("Friday"),
        Cow::Borrowed("Saturday"),
        Cow::Borrowed("Sunday"),
    ],
    short_weekdays: [
        Cow::Borrowed("Mon"),
        Cow::Borrowed("Tue"),
        Cow::Borrowed("Wed"),
        Cow::Borrowed("Thu"),
        Cow::Borrowed("Fri"),
        Cow::Borrowed("Sat"),
        Cow::Borrowed("Sun"),
    ],
};

impl NameTable {
    /// Builds a table for another locale.
    ///
    /// A month's full and short name may coincide, as may a weekday's.
    ///
    /// # Errors
    /// Returns `DateError::InvalidNameTable` if a name is blank or the same
    /// name (ignoring case) is used for two different months or weekdays.
    pub fn new(
        months: [String; 12],
        short_months: [String; 12],
        weekdays: [String; 7],
        short_weekdays: [String; 7],
    ) -> Result<Self, DateError> {
        check_names("month", &months, &short_months)?;
        check_names("weekday", &weekdays, &short_weekdays)?;
        Ok(Self {
            months: months.map(Cow::Owned),
            short_months: short_months.map(Cow::Owned),
            weekdays: weekdays.map(Cow::Owned),
            short_weekdays: short_weekdays.map(Cow::Owned),
        })
    }
}

/// Rejects blank names and names shared between two entries. `full[i]` and
/// `short[i]` name the same entry.
fn check_names(kind: &'static str, full: &[String], short: &[String]) -> Result<(), DateError> {
    let mut seen: Vec<(String, usize)> = Vec::with_capacity(full.len() + short.len());
    for (index, name) in full.iter().enumerate().chain(short.iter().enumerate()) {
        if name.trim().is_empty() {
            tracing::debug!(kind, index, "blank name in name table");
            return Err(DateError::InvalidNameTable(format!(
                "blank {kind} name at position {}",
                index + 1
            )));
        }
        let folded = name.trim().to_lowercase();
        if seen.iter().any(|(other, owner)| *other == folded && *owner != index) {
            tracing::debug!(kind, name = name.as_str(), "duplicate name in name table");
            return Err(DateError::InvalidNameTable(format!(
                "{kind} name {name:?} is used twice"
            )));
        }
        seen.push((folded, index));
    }
    Ok(())
}

impl Default for NameTable {
    fn default() -> Self {
        ENGLISH.clone()
    }
}

const fn month_index(month: Month) -> usize {
    month.ordinal() as usize - 1
}

const fn weekday_index(weekday: Weekday) -> usize {
    weekday.ordinal() as usize - 1
}

impl NameResolver for NameTable {
    fn month_name(&self, month: Month, abbreviated: bool) -> &str {
        let names = if abbreviated {
            &self.short_months
        } else {
            &self.months
        };
        &names[month_index(month)]
    }

    fn weekday_name(&self, weekday: Weekday) -> &str {
        &self.weekdays[weekday_index(weekday)]
    }

    fn short_weekday_name(&self, weekday: Weekday) -> &str {
        &self.short_weekdays[weekday_index(weekday)]
    }
}
