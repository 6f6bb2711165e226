use std::fmt;

use crate::header::{self, DefaultHeaderProvider, HeaderProvider, WeekHeader};
use crate::{
    CalendarConfig, DateRange, MIN_DAY, MonthPage, PageStore, PageWindow, SchemeEntry,
    ScrollInstruction, SelectedDate, mapper, scheme, scroll,
};

/// Receives a `(year, month, day)` whenever the visible page settles
/// (`is_click == false`, day is always 1) or a day is tapped
/// (`is_click == true`).
pub trait CalendarChangeListener {
    fn on_calendar_change(&mut self, year: i32, month: u8, day: u8, is_click: bool);
}

impl<F> CalendarChangeListener for F
where
    F: FnMut(i32, u8, u8, bool),
{
    fn on_calendar_change(&mut self, year: i32, month: u8, day: u8, is_click: bool) {
        self(year, month, day, is_click);
    }
}

/// The calendar as the host application sees it.
///
/// All methods run synchronously on the caller's thread and never block.
pub struct Calendar {
    store:    PageStore,
    window:   PageWindow,
    header:   Box<dyn WeekHeader>,
    listener: Option<Box<dyn CalendarChangeListener>>,
}

impl Calendar {
    pub fn new(config: &CalendarConfig) -> Self {
        Self::with_header_provider(config, &DefaultHeaderProvider)
    }

    pub fn with_header_provider(config: &CalendarConfig, provider: &dyn HeaderProvider) -> Self {
        let mut store = PageStore::new(config.range());
        if let Some(date) = config.selected() {
            store.select(date);
        }
        let mut window = PageWindow::default();
        window.show(0, &store);

        Self {
            store,
            window,
            header: header::resolve(provider, &config.header),
            listener: None,
        }
    }

    pub fn set_listener(&mut self, listener: impl CalendarChangeListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Selects a date and scrolls its month into view.
    pub fn set_select_date(&mut self, year: i32, month: u8, day: u8) -> ScrollInstruction {
        let instruction = scroll::scroll_to(&mut self.store, year, month, day);
        self.window.apply_selection(SelectedDate::new(year, month, day));
        self.window.scroll_to(instruction, &self.store);
        instruction
    }

    /// Replaces the range and rebinds the window around the current page.
    pub fn set_range(&mut self, min_year: i32, min_year_month: u8, max_year: i32, max_year_month: u8) {
        self.store
            .set_range(DateRange::new(min_year, min_year_month, max_year, max_year_month));
        let current = self.window.first_visible().unwrap_or(0);
        self.window.clear();
        self.window.show(current, &self.store);
    }

    /// Overlays schemes on the visible page. Returns the number of cell
    /// assignments; failures are logged and count as zero.
    pub fn set_scheme(&mut self, schemes: &[SchemeEntry]) -> usize {
        scheme::merge(schemes, &mut self.window)
    }

    /// Called by the host when paging settles on `position`.
    pub fn page_selected(&mut self, position: usize) {
        let shown = self.window.show(position, &self.store);
        let month = mapper::page_month(shown, self.store.range());
        self.notify(month.year, month.month, MIN_DAY, false);
    }

    /// Called by the host when a day cell is tapped.
    pub fn tap_day(&mut self, year: i32, month: u8, day: u8) {
        let date = SelectedDate::new(year, month, day);
        self.store.select(date);
        self.window.apply_selection(date);
        self.notify(year, month, day, true);
    }

    fn notify(&mut self, year: i32, month: u8, day: u8, is_click: bool) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_calendar_change(year, month, day, is_click);
        }
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub const fn range(&self) -> &DateRange {
        self.store.range()
    }

    pub const fn selected(&self) -> Option<SelectedDate> {
        self.store.selected()
    }

    pub fn header(&self) -> &dyn WeekHeader {
        self.header.as_ref()
    }

    pub const fn window(&self) -> &PageWindow {
        &self.window
    }

    /// The host clears dirty flags through this after drawing.
    pub const fn window_mut(&mut self) -> &mut PageWindow {
        &mut self.window
    }

    pub fn visible_page(&self) -> Option<&MonthPage> {
        self.window.visible_page()
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(&CalendarConfig::default())
    }
}

impl fmt::Debug for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calendar")
            .field("store", &self.store)
            .field("window", &self.window)
            .field("header", &self.header)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
