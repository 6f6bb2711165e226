use serde::Serialize;

use crate::{
    BoundPage, CalendarMonth, DAYS_PER_WEEK, MIN_DAY, SchemeEntry, SelectedDate, day_of_week,
};

/// One day in a bound page's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub year:     i32,
    pub month:    u8,
    pub day:      u8,
    /// `YYYY-MM-DD`, matched as a prefix of scheme keys
    pub key:      String,
    /// False for the padding days borrowed from the neighbouring months
    pub in_month: bool,
    pub scheme:   Option<SchemeEntry>,
}

impl CalendarCell {
    pub fn new(year: i32, month: u8, day: u8, in_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            key: SelectedDate::new(year, month, day).to_string(),
            in_month,
            scheme: None,
        }
    }

    /// Whether a scheme keyed `key` belongs on this cell.
    pub fn accepts(&self, key: &str) -> bool {
        key.starts_with(&self.key)
    }

    pub fn is_selected(&self, selected: Option<SelectedDate>) -> bool {
        selected.is_some_and(|date| {
            date.year == self.year && date.month == self.month && date.day == self.day
        })
    }
}

/// A pooled page view.
///
/// A page is either free, bound to a position but unpopulated (the skip
/// sentinel), or bound and populated with a month's cells. Any change that
/// needs a redraw marks it dirty; the host clears the flag when it draws.
#[derive(Debug, Default)]
pub struct MonthPage {
    position:      Option<usize>,
    month:         Option<CalendarMonth>,
    selected:      Option<SelectedDate>,
    cells:         Vec<CalendarCell>,
    dirty:         bool,
    invalidations: u64,
}

impl MonthPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches this page to `position`. With `None` the page stays
    /// unpopulated.
    pub fn bind(&mut self, position: usize, bound: Option<BoundPage>) {
        self.unbind();
        self.position = Some(position);
        if let Some(bound) = bound {
            self.month = Some(bound.month);
            self.selected = bound.selected;
            fill_cells(&mut self.cells, bound.month);
        }
        self.invalidate();
    }

    /// Returns the page to the pool. Cell storage is kept for reuse.
    pub fn unbind(&mut self) {
        self.position = None;
        self.month = None;
        self.selected = None;
        self.cells.clear();
        self.dirty = false;
    }

    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    pub const fn is_bound(&self) -> bool {
        self.position.is_some()
    }

    pub const fn month(&self) -> Option<CalendarMonth> {
        self.month
    }

    pub const fn selected(&self) -> Option<SelectedDate> {
        self.selected
    }

    /// Marks `date` on this page and schedules a redraw.
    pub fn select(&mut self, date: SelectedDate) {
        self.selected = Some(date);
        self.invalidate();
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [CalendarCell] {
        &mut self.cells
    }

    pub fn cell(&self, key: &str) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.key == key)
    }

    /// Schedules a redraw.
    pub const fn invalidate(&mut self) {
        self.dirty = true;
        self.invalidations += 1;
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag, returning whether it was set.
    pub const fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    /// Redraw requests since this page was created
    pub const fn invalidation_count(&self) -> u64 {
        self.invalidations
    }
}

/// Lays out whole weeks, Sunday first, padding with the neighbouring months.
fn fill_cells(cells: &mut Vec<CalendarCell>, month: CalendarMonth) {
    let leading = day_of_week(month.year, month.month, MIN_DAY);
    let previous = month.previous();
    let previous_days = previous.days();

    for offset in (0..leading).rev() {
        // leading < 7 so the day stays within the previous month
        let day = previous_days - u8::try_from(offset).unwrap_or(0);
        cells.push(CalendarCell::new(previous.year, previous.month, day, false));
    }
    for day in MIN_DAY..=month.days() {
        cells.push(CalendarCell::new(month.year, month.month, day, true));
    }

    let next = month.next();
    let mut day = MIN_DAY;
    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(CalendarCell::new(next.year, next.month, day, false));
        day += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(year: i32, month: u8) -> BoundPage {
        BoundPage {
            month:    CalendarMonth::new(year, month),
            selected: None,
        }
    }

    #[test]
    fn test_cell_key_and_prefix_match() {
        let cell = CalendarCell::new(2024, 5, 10, true);
        assert_eq!(cell.key, "2024-05-10");
        assert!(cell.accepts("2024-05-10"));
        assert!(cell.accepts("2024-05-10-evt1"));
        assert!(!cell.accepts("2024-05-1"));
        assert!(!cell.accepts("2024-05-11"));
    }

    #[test]
    fn test_bind_builds_whole_weeks() {
        let mut page = MonthPage::new();
        // May 2024 starts on a Wednesday
        page.bind(4, Some(bound(2024, 5)));

        let cells = page.cells();
        assert_eq!(cells.len(), 35);
        assert_eq!(cells[0].key, "2024-04-28");
        assert!(!cells[0].in_month);
        assert_eq!(cells[3].key, "2024-05-01");
        assert!(cells[3].in_month);
        assert_eq!(cells[33].key, "2024-05-31");
        assert_eq!(cells[34].key, "2024-06-01");
        assert_eq!(cells.iter().filter(|cell| cell.in_month).count(), 31);
    }

    #[test]
    fn test_bind_wraps_across_year_boundary() {
        let mut page = MonthPage::new();
        // January 2021 starts on a Friday
        page.bind(0, Some(bound(2021, 1)));
        assert_eq!(page.cells()[0].key, "2020-12-27");
        assert_eq!(page.cells()[5].key, "2021-01-01");
        assert_eq!(page.cells().last().map(|cell| cell.key.as_str()), Some("2021-02-06"));
    }

    #[test]
    fn test_month_starting_on_sunday_has_no_leading_padding() {
        let mut page = MonthPage::new();
        // September 2024 starts on a Sunday
        page.bind(0, Some(bound(2024, 9)));
        assert_eq!(page.cells()[0].key, "2024-09-01");
        assert_eq!(page.cells().len() % DAYS_PER_WEEK, 0);
    }

    #[test]
    fn test_bind_sentinel_leaves_page_unpopulated() {
        let mut page = MonthPage::new();
        page.bind(3, Some(bound(2024, 5)));
        page.bind(9, None);

        assert_eq!(page.position(), Some(9));
        assert!(page.is_bound());
        assert_eq!(page.month(), None);
        assert!(page.cells().is_empty());
    }

    #[test]
    fn test_unbind_resets_page() {
        let mut page = MonthPage::new();
        page.bind(
            1,
            Some(BoundPage {
                month:    CalendarMonth::new(2024, 5),
                selected: Some(SelectedDate::new(2024, 5, 10)),
            }),
        );
        assert_eq!(page.selected(), Some(SelectedDate::new(2024, 5, 10)));

        page.unbind();
        assert!(!page.is_bound());
        assert_eq!(page.selected(), None);
        assert!(page.cells().is_empty());
        assert!(!page.is_dirty());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut page = MonthPage::new();
        assert!(!page.is_dirty());
        page.bind(0, Some(bound(2024, 5)));
        assert!(page.take_dirty());
        assert!(!page.is_dirty());

        page.select(SelectedDate::new(2024, 5, 3));
        assert!(page.is_dirty());
        assert_eq!(page.invalidation_count(), 2);
    }

    #[test]
    fn test_cell_selection() {
        let cell = CalendarCell::new(2024, 5, 10, true);
        assert!(cell.is_selected(Some(SelectedDate::new(2024, 5, 10))));
        assert!(!cell.is_selected(Some(SelectedDate::new(2024, 6, 10))));
        assert!(!cell.is_selected(None));
    }
}
