use crate::{DateRange, PageStore, SelectedDate, mapper};

/// Where to scroll and how to anchor the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollInstruction {
    pub position:       usize,
    /// Pin short content to the trailing edge of the viewport. Always set by
    /// [`scroll_target`].
    pub stack_from_end: bool,
}

/// Page position for `year`/`month`.
///
/// Years before the range start are clamped to it. Positions that would be
/// negative become 0; positions past the end are left for the window to
/// clamp.
pub fn scroll_target(year: i32, month: u8, range: &DateRange) -> ScrollInstruction {
    let year = year.max(range.min_year());

    let position = if year == range.min_year() {
        i64::from(month) - 1
    } else {
        mapper::month_to_position(year, month, range)
    };

    ScrollInstruction {
        position:       usize::try_from(position).unwrap_or(0),
        stack_from_end: true,
    }
}

/// Selects `year-month-day` and returns the instruction that brings it into
/// view. The selection keeps the caller's year even when the target is
/// clamped.
pub fn scroll_to(store: &mut PageStore, year: i32, month: u8, day: u8) -> ScrollInstruction {
    store.select(SelectedDate::new(year, month, day));
    let instruction = scroll_target(year, month, store.range());
    tracing::debug!(year, month, day, position = instruction.position, "scroll target");
    instruction
}
