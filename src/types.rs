use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_PER_WEEK, DECEMBER, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MIN_DAY,
};
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A resolved calendar month, the content of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", year, month)]
pub struct CalendarMonth {
    pub year:  i32,
    pub month: u8,
}

impl CalendarMonth {
    pub const fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Number of days in this month
    pub const fn days(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// The month before this one, wrapping across the year boundary
    pub const fn previous(&self) -> Self {
        if self.month <= JANUARY {
            Self::new(self.year - 1, DECEMBER)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// The month after this one, wrapping across the year boundary
    pub const fn next(&self) -> Self {
        if self.month >= DECEMBER {
            Self::new(self.year + 1, JANUARY)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }
}

/// The day a user or caller picked. Pages bound while a selection is set mark
/// that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct SelectedDate {
    pub year:  i32,
    pub month: u8,
    pub day:   u8,
}

impl SelectedDate {
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Builds a selection only when every component is present.
    pub const fn from_parts(year: Option<i32>, month: Option<u8>, day: Option<u8>) -> Option<Self> {
        match (year, month, day) {
            (Some(year), Some(month), Some(day)) => Some(Self::new(year, month, day)),
            _ => None,
        }
    }

    /// The month containing this date
    pub const fn calendar_month(&self) -> CalendarMonth {
        CalendarMonth::new(self.year, self.month)
    }
}

fn split_date(s: &str, expected: usize) -> Result<Vec<&str>, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != expected {
        return Err(ParseError::InvalidFormat(format!(
            "expected {} {DATE_SEPARATOR} separators, found {}: {s}",
            expected - 1,
            parts.len() - 1
        )));
    }
    Ok(parts)
}

fn parse_year(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn parse_month(s: &str) -> Result<u8, ParseError> {
    let month = s.parse::<u8>().map_err(|_| ParseError::InvalidFormat(s.to_owned()))?;
    if !(JANUARY..=DECEMBER).contains(&month) {
        return Err(ParseError::InvalidMonth(month));
    }
    Ok(month)
}

impl FromStr for CalendarMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_date(s, 2)?;
        Ok(Self::new(parse_year(parts[0])?, parse_month(parts[1])?))
    }
}

impl FromStr for SelectedDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = split_date(s, 3)?;
        let year = parse_year(parts[0])?;
        let month = parse_month(parts[1])?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[2].to_owned()))?;
        if !(MIN_DAY..=days_in_month(year, month)).contains(&day) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self::new(year, month, day))
    }
}

impl Serialize for CalendarMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarMonth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for SelectedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SelectedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= DECEMBER);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Weekday column of a date, 0 = Sunday.
pub fn day_of_week(year: i32, month: u8, day: u8) -> usize {
    // Sakamoto's method
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let index = usize::from(month.saturating_sub(1)).min(OFFSETS.len() - 1);
    let raw = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[index] + i32::from(day);
    // rem_euclid keeps the value in 0..7
    usize::try_from(raw.rem_euclid(7)).unwrap_or(0) % DAYS_PER_WEEK
}
