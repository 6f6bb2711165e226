use serde::{Deserialize, Serialize};

use crate::{DECEMBER, DateRange, HeaderStyle, JANUARY, MAX_YEAR, MIN_YEAR, SelectedDate};

/// Construction-time options. Every field is optional in the serialized form.
///
/// ```toml
/// select_year = 2024
/// select_month = 5
/// select_day = 10
/// min_year = 2020
/// min_year_month = 3
///
/// [header]
/// text_color = 0xFF333333
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarConfig {
    #[serde(default)]
    pub select_year:    Option<i32>,
    #[serde(default)]
    pub select_month:   Option<u8>,
    #[serde(default)]
    pub select_day:     Option<u8>,
    #[serde(default = "default_min_year")]
    pub min_year:       i32,
    #[serde(default = "default_max_year")]
    pub max_year:       i32,
    /// First month shown in `min_year`
    #[serde(default = "default_min_year_month")]
    pub min_year_month: u8,
    /// Last month shown in `max_year`
    #[serde(default = "default_max_year_month")]
    pub max_year_month: u8,
    #[serde(default)]
    pub header:         HeaderStyle,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            select_year:    None,
            select_month:   None,
            select_day:     None,
            min_year:       default_min_year(),
            max_year:       default_max_year(),
            min_year_month: default_min_year_month(),
            max_year_month: default_max_year_month(),
            header:         HeaderStyle::default(),
        }
    }
}

const fn default_min_year() -> i32 {
    MIN_YEAR
}

const fn default_max_year() -> i32 {
    MAX_YEAR
}

const fn default_min_year_month() -> u8 {
    JANUARY
}

const fn default_max_year_month() -> u8 {
    DECEMBER
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid calendar config: {0}")]
    Toml(#[from] toml::de::Error),
}

impl CalendarConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns `ConfigError::Toml` for malformed input or mistyped fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a TOML document, falling back to the defaults when it is
    /// malformed.
    pub fn parse_or_default(s: &str) -> Self {
        Self::from_toml_str(s).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default calendar config");
            Self::default()
        })
    }

    /// The configured range, clamped to the supported years
    pub fn range(&self) -> DateRange {
        DateRange::new(self.min_year, self.min_year_month, self.max_year, self.max_year_month)
    }

    /// The initial selection, present only when year, month and day all are
    pub const fn selected(&self) -> Option<SelectedDate> {
        SelectedDate::from_parts(self.select_year, self.select_month, self.select_day)
    }
}
