//! The week header shown above the pages.
//!
//! Drawing belongs to the host. This module only decides which header
//! implementation is used and what style it receives. Callers may inject a
//! [`HeaderProvider`]; whatever it fails to build is replaced by the
//! built-in [`DefaultWeekHeader`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DAYS_PER_WEEK;

/// Visual parameters handed to the header.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeaderStyle {
    /// Height in density-independent pixels
    #[serde(default = "default_height")]
    pub height:           f32,
    /// ARGB
    #[serde(default = "default_background_color")]
    pub background_color: u32,
    /// ARGB
    #[serde(default = "default_text_color")]
    pub text_color:       u32,
    /// Text size in scale-independent pixels
    #[serde(default = "default_text_size")]
    pub text_size:        f32,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            height:           default_height(),
            background_color: default_background_color(),
            text_color:       default_text_color(),
            text_size:        default_text_size(),
        }
    }
}

impl HeaderStyle {
    /// Rejects sizes a header cannot be laid out with.
    ///
    /// # Errors
    /// Returns `HeaderError::InvalidStyle` when the height or text size is not
    /// a positive finite number.
    pub fn validate(&self) -> Result<(), HeaderError> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(HeaderError::InvalidStyle(format!("height {}", self.height)));
        }
        if !self.text_size.is_finite() || self.text_size <= 0.0 {
            return Err(HeaderError::InvalidStyle(format!("text size {}", self.text_size)));
        }
        Ok(())
    }
}

const fn default_height() -> f32 {
    40.0
}

const fn default_background_color() -> u32 {
    0x0000_0000
}

const fn default_text_color() -> u32 {
    0xFF00_0000
}

const fn default_text_size() -> f32 {
    16.0
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("invalid header style: {0}")]
    InvalidStyle(String),

    #[error("header unavailable: {0}")]
    Unavailable(String),
}

/// A week header: seven column labels, Sunday first, plus its style.
pub trait WeekHeader: fmt::Debug {
    fn labels(&self) -> [&str; DAYS_PER_WEEK];

    fn style(&self) -> &HeaderStyle;
}

/// Builds the header a calendar shows.
pub trait HeaderProvider {
    /// # Errors
    /// Any error makes the calendar fall back to [`DefaultWeekHeader`].
    fn create(&self, style: &HeaderStyle) -> Result<Box<dyn WeekHeader>, HeaderError>;
}

impl<F> HeaderProvider for F
where
    F: Fn(&HeaderStyle) -> Result<Box<dyn WeekHeader>, HeaderError>,
{
    fn create(&self, style: &HeaderStyle) -> Result<Box<dyn WeekHeader>, HeaderError> {
        self(style)
    }
}

const DEFAULT_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq)]
pub struct DefaultWeekHeader {
    style: HeaderStyle,
}

impl DefaultWeekHeader {
    pub const fn new(style: HeaderStyle) -> Self {
        Self { style }
    }
}

impl WeekHeader for DefaultWeekHeader {
    fn labels(&self) -> [&str; DAYS_PER_WEEK] {
        DEFAULT_LABELS
    }

    fn style(&self) -> &HeaderStyle {
        &self.style
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHeaderProvider;

impl HeaderProvider for DefaultHeaderProvider {
    fn create(&self, style: &HeaderStyle) -> Result<Box<dyn WeekHeader>, HeaderError> {
        style.validate()?;
        Ok(Box::new(DefaultWeekHeader::new(*style)))
    }
}

/// Builds the header with `provider`, falling back to the default header
/// (and, for an unusable style, the default style) on any error.
pub(crate) fn resolve(provider: &dyn HeaderProvider, style: &HeaderStyle) -> Box<dyn WeekHeader> {
    match provider.create(style) {
        Ok(header) => header,
        Err(err) => {
            tracing::warn!(error = %err, "header provider failed, using default header");
            let style = if style.validate().is_ok() { *style } else { HeaderStyle::default() };
            Box::new(DefaultWeekHeader::new(style))
        },
    }
}
