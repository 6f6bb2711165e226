//! Headless model of a horizontally paged month calendar.
//!
//! The crate maps a linear page position onto `(year, month)` pairs inside a
//! configurable [`DateRange`], binds pages lazily through a small fixed pool
//! ([`PageWindow`]), turns "show this date" requests into scroll instructions
//! and overlays caller-supplied [`SchemeEntry`] markers on the visible page.
//! Drawing is left to the host: every page exposes its [`CalendarCell`] list
//! and a dirty flag.

mod calendar;
mod config;
mod consts;
mod header;
pub mod mapper;
mod page;
mod prelude;
mod range;
mod scheme;
mod scroll;
mod store;
mod types;
mod window;

pub use calendar::{Calendar, CalendarChangeListener};
pub use config::{CalendarConfig, ConfigError};
pub use consts::*;
pub use header::{
    DefaultHeaderProvider, DefaultWeekHeader, HeaderError, HeaderProvider, HeaderStyle,
    WeekHeader,
};
pub use page::{CalendarCell, MonthPage};
pub use range::{DateRange, RangeError};
pub use scheme::{MergeError, SchemeEntry};
pub use scroll::{ScrollInstruction, scroll_target, scroll_to};
pub use store::{BoundPage, PageStore};
pub use types::{CalendarMonth, SelectedDate, day_of_week, days_in_month, is_leap_year};
pub use window::PageWindow;

use crate::prelude::*;

/// Errors from parsing `YYYY-MM` and `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", DECEMBER)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
