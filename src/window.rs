use std::ops::RangeInclusive;

use crate::{DEFAULT_POOL_SIZE, MonthPage, PageStore, ScrollInstruction, SelectedDate};

/// The slice of the page sequence that is actually materialized.
///
/// Holds a fixed pool of [`MonthPage`]s. Moving the window recycles pages
/// that fell out of view and binds only the positions around the visible
/// one, so a range of any length costs `pool_size` pages.
#[derive(Debug)]
pub struct PageWindow {
    pages:          Vec<MonthPage>,
    first_visible:  Option<usize>,
    stack_from_end: bool,
}

impl PageWindow {
    /// Creates a window with `pool_size` pages (at least one).
    pub fn new(pool_size: usize) -> Self {
        Self {
            pages:          (0..pool_size.max(1)).map(|_| MonthPage::new()).collect(),
            first_visible:  None,
            stack_from_end: false,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.pages.len()
    }

    pub const fn first_visible(&self) -> Option<usize> {
        self.first_visible
    }

    pub const fn stack_from_end(&self) -> bool {
        self.stack_from_end
    }

    pub fn pages(&self) -> &[MonthPage] {
        &self.pages
    }

    /// Positions currently bound, in ascending order
    pub fn bound_positions(&self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.pages.iter().filter_map(MonthPage::position).collect();
        positions.sort_unstable();
        positions
    }

    pub fn find_page(&self, position: usize) -> Option<&MonthPage> {
        self.pages.iter().find(|page| page.position() == Some(position))
    }

    pub fn find_page_mut(&mut self, position: usize) -> Option<&mut MonthPage> {
        self.pages.iter_mut().find(|page| page.position() == Some(position))
    }

    pub fn visible_page(&self) -> Option<&MonthPage> {
        self.find_page(self.first_visible?)
    }

    pub fn visible_page_mut(&mut self) -> Option<&mut MonthPage> {
        let position = self.first_visible?;
        self.find_page_mut(position)
    }

    /// Applies a scroll instruction: records the anchoring policy and moves
    /// the window to the target page.
    pub fn scroll_to(&mut self, instruction: ScrollInstruction, store: &PageStore) -> usize {
        self.stack_from_end = instruction.stack_from_end;
        self.show(instruction.position, store)
    }

    /// Makes `position` the visible page, clamped to the store's count, and
    /// binds its neighbours. Returns the position actually shown.
    pub fn show(&mut self, position: usize, store: &PageStore) -> usize {
        let last = store.count().saturating_sub(1);
        let position = position.min(last);
        let wanted = self.neighbourhood(position, last);

        for page in &mut self.pages {
            if page.position().is_some_and(|bound| !wanted.contains(&bound)) {
                page.unbind();
            }
        }

        for missing in wanted {
            if self.find_page(missing).is_some() {
                continue;
            }
            if let Some(page) = self.pages.iter_mut().find(|page| !page.is_bound()) {
                page.bind(missing, store.bind(missing));
            } else {
                tracing::trace!(position = missing, "page pool exhausted");
            }
        }

        self.first_visible = Some(position);
        position
    }

    /// Marks `date` on every populated page.
    pub fn apply_selection(&mut self, date: SelectedDate) {
        for page in self.pages.iter_mut().filter(|page| page.month().is_some()) {
            page.select(date);
        }
    }

    /// Unbinds every page and forgets the visible position.
    pub fn clear(&mut self) {
        for page in &mut self.pages {
            page.unbind();
        }
        self.first_visible = None;
    }

    fn neighbourhood(&self, position: usize, last: usize) -> RangeInclusive<usize> {
        let radius = (self.pages.len() - 1) / 2;
        position.saturating_sub(radius)..=position.saturating_add(radius).min(last)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(DEFAULT_POOL_SIZE)
    }
}
