use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarMonth, DECEMBER, JANUARY, MAX_YEAR, MIN_YEAR, ParseError, RANGE_SEPARATOR, prelude::*,
};

/// The inclusive window of months a calendar may ever show.
///
/// Years are clamped to `MIN_YEAR..=MAX_YEAR` and months to `1..=12` on
/// construction. Nothing else is validated: a range whose start lies after
/// its end is kept as given and collapses to a single page when counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:04}-{:02}/{:04}-{:02}", min_year, min_month, max_year, max_month)]
pub struct DateRange {
    min_year:  i32,
    min_month: u8,
    max_year:  i32,
    max_month: u8,
}

/// Error type for date range parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Error parsing one of the bounds.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a range, clamping years and months into their valid windows.
    pub fn new(min_year: i32, min_month: u8, max_year: i32, max_month: u8) -> Self {
        Self {
            min_year:  min_year.clamp(MIN_YEAR, MAX_YEAR),
            min_month: min_month.clamp(JANUARY, DECEMBER),
            max_year:  max_year.clamp(MIN_YEAR, MAX_YEAR),
            max_month: max_month.clamp(JANUARY, DECEMBER),
        }
    }

    pub const fn min_year(&self) -> i32 {
        self.min_year
    }

    pub const fn min_month(&self) -> u8 {
        self.min_month
    }

    pub const fn max_year(&self) -> i32 {
        self.max_year
    }

    pub const fn max_month(&self) -> u8 {
        self.max_month
    }

    /// First month of the range
    pub const fn start(&self) -> CalendarMonth {
        CalendarMonth::new(self.min_year, self.min_month)
    }

    /// Last month of the range (inclusive)
    pub const fn end(&self) -> CalendarMonth {
        CalendarMonth::new(self.max_year, self.max_month)
    }

    /// Whether both bounds fall in the same year
    pub const fn is_single_year(&self) -> bool {
        self.min_year == self.max_year
    }

    /// Checks if the range contains a given month
    pub fn contains(&self, month: CalendarMonth) -> bool {
        self.start() <= month && month <= self.end()
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::new(MIN_YEAR, JANUARY, MAX_YEAR, DECEMBER)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                let start = start_str.trim().parse::<CalendarMonth>()?;
                let end = end_str.trim().parse::<CalendarMonth>()?;

                Ok(Self::new(start.year, start.month, end.year, end.month))
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
