//! Conversions between a page position and the month it shows.
//!
//! Position 0 is the range's first month and every following position moves
//! one calendar month forward. The functions here are pure and do no bounds
//! checking; [`PageStore`](crate::PageStore) and the scroll helpers clamp
//! their inputs before calling in.
//!
//! Two formulas coexist on purpose. [`position_to_month`] is what binding
//! uses: it never resolves a December and reports `None` there, which leaves
//! that page unpopulated. [`page_month`] is what page-selection listeners
//! receive and resolves every position.

use crate::{CalendarMonth, DateRange, MONTHS_PER_YEAR};

/// Month bound at `position`, or `None` at the skip sentinel.
///
/// The sentinel appears whenever `position + min_month` is a multiple of 12.
pub fn position_to_month(position: usize, range: &DateRange) -> Option<CalendarMonth> {
    let offset = i64::try_from(position).ok()? + i64::from(range.min_month());
    let years = offset / i64::from(MONTHS_PER_YEAR);
    let month = offset % i64::from(MONTHS_PER_YEAR);
    if month == 0 {
        return None;
    }
    let year = i32::try_from(i64::from(range.min_year()) + years).ok()?;
    Some(CalendarMonth::new(year, u8::try_from(month).ok()?))
}

/// Month reported to listeners when the page at `position` settles.
pub fn page_month(position: usize, range: &DateRange) -> CalendarMonth {
    let months_per_year = i64::from(MONTHS_PER_YEAR);
    let offset = i64::try_from(position).unwrap_or(i64::MAX - months_per_year) + i64::from(range.min_month()) - 1;
    let year = i64::from(range.min_year()) + offset / months_per_year;
    let month = offset % months_per_year + 1;
    CalendarMonth::new(
        i32::try_from(year).unwrap_or(i32::MAX),
        u8::try_from(month).unwrap_or(crate::JANUARY),
    )
}

/// Page position holding `year`/`month`.
///
/// The first year only contributes `12 - min_month + 1` months, so later
/// years are shifted by that shortfall. Inputs before the range start give
/// negative positions.
pub fn month_to_position(year: i32, month: u8, range: &DateRange) -> i64 {
    let year = i64::from(year);
    let month = i64::from(month);
    let min_year = i64::from(range.min_year());
    let min_month = i64::from(range.min_month());
    let months_per_year = i64::from(MONTHS_PER_YEAR);

    if year == min_year {
        month - 1
    } else if min_month == 1 {
        months_per_year * (year - min_year - 1) + months_per_year + month - 1
    } else {
        months_per_year * (year - min_year - 1) + (months_per_year - min_month) + month - 1
    }
}

/// Number of pages in `range`.
///
/// A single-year range whose months are inverted, equal or adjacent is one
/// page; so is a range whose start year lies after its end year.
pub fn page_count(range: &DateRange) -> usize {
    let min_month = i64::from(range.min_month());
    let max_month = i64::from(range.max_month());

    let count = if range.is_single_year() {
        if min_month >= max_month || (max_month - min_month).abs() == 1 {
            1
        } else {
            max_month - min_month
        }
    } else {
        let months_per_year = i64::from(MONTHS_PER_YEAR);
        let full_years = i64::from(range.max_year()) - i64::from(range.min_year()) - 1;
        months_per_year * full_years + (months_per_year - min_month) + max_month
    };

    usize::try_from(count.max(1)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::range;

    #[test]
    fn test_position_to_month_from_january() {
        let range = range(2020, 1, 2022, 12);
        assert_eq!(position_to_month(0, &range), Some(CalendarMonth::new(2020, 1)));
        assert_eq!(position_to_month(10, &range), Some(CalendarMonth::new(2020, 11)));
        assert_eq!(position_to_month(11, &range), None);
        assert_eq!(position_to_month(12, &range), Some(CalendarMonth::new(2021, 1)));
        assert_eq!(position_to_month(25, &range), Some(CalendarMonth::new(2022, 2)));
    }

    #[test]
    fn test_position_to_month_mid_year_start() {
        let range = range(2020, 3, 2022, 12);
        assert_eq!(position_to_month(0, &range), Some(CalendarMonth::new(2020, 3)));
        assert_eq!(position_to_month(8, &range), Some(CalendarMonth::new(2020, 11)));
        assert_eq!(position_to_month(9, &range), None);
        assert_eq!(position_to_month(10, &range), Some(CalendarMonth::new(2021, 1)));
    }

    #[test]
    fn test_sentinel_only_hides_decembers() {
        for min_month in 1..=12 {
            let range = range(2000, min_month, 2010, 12);
            for position in 0..page_count(&range) {
                let listener_month = page_month(position, &range);
                match position_to_month(position, &range) {
                    Some(bound) => assert_eq!(bound, listener_month, "position {position}"),
                    None => assert_eq!(listener_month.month, 12, "position {position}"),
                }
            }
        }
    }

    #[test]
    fn test_page_month() {
        let range = range(2020, 3, 2022, 12);
        assert_eq!(page_month(0, &range), CalendarMonth::new(2020, 3));
        assert_eq!(page_month(9, &range), CalendarMonth::new(2020, 12));
        assert_eq!(page_month(10, &range), CalendarMonth::new(2021, 1));
    }

    #[test]
    fn test_month_to_position_branches() {
        struct TestCase {
            range:       DateRange,
            year:        i32,
            month:       u8,
            expected:    i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                range:       range(2020, 3, 2030, 12),
                year:        2020,
                month:       5,
                expected:    4,
                description: "first year uses month - 1",
            },
            TestCase {
                range:       range(2020, 1, 2030, 12),
                year:        2024,
                month:       3,
                expected:    50,
                description: "january start",
            },
            TestCase {
                range:       range(2020, 3, 2030, 12),
                year:        2024,
                month:       3,
                expected:    47,
                description: "short first year",
            },
            TestCase {
                range:       range(2020, 3, 2030, 12),
                year:        2021,
                month:       1,
                expected:    9,
                description: "january after short first year",
            },
        ];

        for case in &cases {
            assert_eq!(
                month_to_position(case.year, case.month, &case.range),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_round_trip_from_january() {
        let range = range(1990, 1, 2030, 6);
        for position in 0..page_count(&range) {
            if let Some(month) = position_to_month(position, &range) {
                let back = month_to_position(month.year, month.month, &range);
                assert_eq!(back, i64::try_from(position).unwrap(), "month {month}");
            }
        }
    }

    #[test]
    fn test_page_count_multi_year() {
        assert_eq!(page_count(&range(2020, 1, 2021, 12)), 23);
        assert_eq!(page_count(&range(2020, 3, 2024, 10)), 55);
        assert_eq!(page_count(&range(1900, 1, 2099, 12)), 2399);
    }

    #[test]
    fn test_page_count_single_year() {
        struct TestCase {
            min_month:   u8,
            max_month:   u8,
            expected:    usize,
            description: &'static str,
        }

        let cases = [
            TestCase {
                min_month:   6,
                max_month:   7,
                expected:    1,
                description: "adjacent months",
            },
            TestCase {
                min_month:   8,
                max_month:   3,
                expected:    1,
                description: "inverted months",
            },
            TestCase {
                min_month:   5,
                max_month:   5,
                expected:    1,
                description: "same month",
            },
            TestCase {
                min_month:   1,
                max_month:   12,
                expected:    11,
                description: "whole year",
            },
            TestCase {
                min_month:   3,
                max_month:   9,
                expected:    6,
                description: "sub-year window",
            },
        ];

        for case in &cases {
            assert_eq!(
                page_count(&range(2024, case.min_month, 2024, case.max_month)),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_page_count_inverted_years_collapse() {
        assert_eq!(page_count(&range(2025, 1, 2024, 12)), 1);
        assert_eq!(page_count(&range(2030, 6, 2020, 1)), 1);
    }

    #[test]
    fn test_counted_positions_stay_in_range() {
        for (min_month, max_month) in [(1, 12), (3, 10), (12, 1), (7, 7)] {
            let range = range(2018, min_month, 2023, max_month);
            let count = page_count(&range);
            for position in 0..count {
                let month = page_month(position, &range);
                assert!(range.contains(month), "{month} outside {range}");
            }
            // the final month of the range is never given a page
            assert_eq!(page_month(count, &range), range.end());
        }
    }
}
