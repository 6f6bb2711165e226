use std::cell::OnceCell;

use crate::{CalendarMonth, DateRange, SelectedDate, mapper};

/// What a page shows once bound: its month and, when one is set, the
/// selected date to mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundPage {
    pub month:    CalendarMonth,
    pub selected: Option<SelectedDate>,
}

/// Owns the active range, the memoized page count and the selection.
///
/// Pages are never materialized here; the host's window asks for one
/// position at a time through [`PageStore::bind`].
#[derive(Debug, Default)]
pub struct PageStore {
    range:    DateRange,
    count:    OnceCell<usize>,
    selected: Option<SelectedDate>,
}

impl PageStore {
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            count: OnceCell::new(),
            selected: None,
        }
    }

    pub const fn range(&self) -> &DateRange {
        &self.range
    }

    /// Replaces the range. The cached count is always dropped, even when the
    /// new range equals the old one.
    pub fn set_range(&mut self, range: DateRange) {
        tracing::debug!(%range, "calendar range changed");
        self.range = range;
        self.invalidate();
    }

    /// Drops the cached page count.
    pub fn invalidate(&mut self) {
        self.count.take();
    }

    /// Total number of pages, computed on first use after a range change.
    pub fn count(&self) -> usize {
        *self.count.get_or_init(|| mapper::page_count(&self.range))
    }

    /// Whether a count is currently cached
    pub fn is_count_cached(&self) -> bool {
        self.count.get().is_some()
    }

    pub const fn selected(&self) -> Option<SelectedDate> {
        self.selected
    }

    pub const fn select(&mut self, date: SelectedDate) {
        self.selected = Some(date);
    }

    pub const fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Resolves the page at `position`.
    ///
    /// Returns `None` at the mapper's skip sentinel; the caller must leave
    /// that page unpopulated.
    pub fn bind(&self, position: usize) -> Option<BoundPage> {
        let Some(month) = mapper::position_to_month(position, &self.range) else {
            tracing::trace!(position, "skip sentinel, page left unpopulated");
            return None;
        };
        tracing::trace!(position, %month, "binding page");
        Some(BoundPage {
            month,
            selected: self.selected,
        })
    }
}
