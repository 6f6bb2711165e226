use serde::{Deserialize, Serialize};

use crate::PageWindow;

/// A caller-supplied marker for a day.
///
/// `key` starts with the day's `YYYY-MM-DD` key and may carry a more specific
/// suffix (`2024-05-10-evt1`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeEntry {
    pub key:     String,
    #[serde(default)]
    pub payload: String,
}

impl SchemeEntry {
    pub fn new(key: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            key:     key.into(),
            payload: payload.into(),
        }
    }
}

/// Reasons a merge pass did nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    #[error("no page is visible")]
    NoVisiblePage,

    #[error("no page is bound at visible position {0}")]
    PageNotBound(usize),

    #[error("page at position {0} has no cells")]
    EmptyPage(usize),
}

/// Applies `schemes` to the visible page, returning how many cell
/// assignments were made.
///
/// Every scheme is tried against every cell, so when several schemes match
/// one cell the last in list order wins. The page is invalidated once after
/// the pass. Failures leave all cells untouched and are logged, never
/// returned.
pub fn merge(schemes: &[SchemeEntry], window: &mut PageWindow) -> usize {
    if schemes.is_empty() {
        return 0;
    }
    match try_merge(schemes, window) {
        Ok(assigned) => assigned,
        Err(err) => {
            tracing::debug!(error = %err, "scheme merge skipped");
            0
        },
    }
}

pub(crate) fn try_merge(schemes: &[SchemeEntry], window: &mut PageWindow) -> Result<usize, MergeError> {
    let position = window.first_visible().ok_or(MergeError::NoVisiblePage)?;
    let page = window
        .find_page_mut(position)
        .ok_or(MergeError::PageNotBound(position))?;
    if page.cells().is_empty() {
        return Err(MergeError::EmptyPage(position));
    }

    let mut assigned = 0;
    for scheme in schemes {
        for cell in page.cells_mut() {
            if cell.accepts(&scheme.key) {
                cell.scheme = Some(scheme.clone());
                assigned += 1;
            }
        }
    }

    page.invalidate();
    tracing::trace!(position, assigned, "schemes merged");
    Ok(assigned)
}
