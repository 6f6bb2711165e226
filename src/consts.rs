/// Earliest year a range may start at (inclusive)
pub const MIN_YEAR: i32 = 1900;

/// Latest year a range may end at (inclusive)
pub const MAX_YEAR: i32 = 2099;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Months in one calendar year, the period of the page sequence
pub const MONTHS_PER_YEAR: i32 = 12;

/// Columns in a month grid
pub const DAYS_PER_WEEK: usize = 7;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator, also used between the parts of a cell key
pub const DATE_SEPARATOR: char = '-';
/// Separator between the two bounds of a range (`2020-03/2024-12`)
pub const RANGE_SEPARATOR: char = '/';

/// Pages kept bound by default: the visible page and one neighbour on each side
pub const DEFAULT_POOL_SIZE: usize = 3;
