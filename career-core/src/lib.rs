//! Core model and layout math for the career timeline.
//!
//! Everything in this crate is a pure derivation over static experience
//! records plus a small [`ViewState`]; nothing is cached between renders.

use std::fmt;

use chrono::Datelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod clock;
pub mod detail;
pub mod format;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod view;

pub use clock::{Clock, ClockSubscription, FixedClock, SystemClock};
pub use detail::{DetailPanel, SkillGroup};
pub use format::{format_date_range, format_year_month};
pub use geometry::{BadgeCap, RowTable, TimeScale};
pub use layout::{BarLayout, MonthCell, RowLabel, TimelineLayout, YearHeader};
pub use palette::{ColorClasses, ColorConfig, Palette, SkillCategoryDef};
pub use view::ViewState;

/// Layout constants and zoom bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineConfig {
    /// Origin of the time axis.
    pub start_year: i32,
    /// Last year drawn, extended to the current year when time moves past it.
    pub end_year: i32,
    /// Initial pixels per year.
    pub default_zoom: u32,
    pub zoom_step: u32,
    pub min_zoom: u32,
    pub max_zoom: u32,
    /// Heights of the declared rows, top to bottom.
    pub row_heights: Vec<f64>,
    /// Height used for any row past the end of `row_heights`.
    pub fallback_row_height: f64,
    pub label_width: f64,
    /// Rows lower than this render bars in compact form.
    pub compact_row_threshold: f64,
    /// Approximate pixels taken by one badge.
    pub badge_slot_width: f64,
    pub badge_padding: f64,
    pub min_badges_per_line: usize,
    pub badge_lines: usize,
    /// How often the "Today" marker is refreshed.
    pub clock_refresh_secs: u64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            start_year: 2016,
            end_year: 2026,
            default_zoom: 320,
            zoom_step: 80,
            min_zoom: 160,
            max_zoom: 640,
            row_heights: vec![25.0, 25.0, 100.0, 100.0],
            fallback_row_height: 100.0,
            label_width: 80.0,
            compact_row_threshold: 50.0,
            badge_slot_width: 55.0,
            badge_padding: 20.0,
            min_badges_per_line: 2,
            badge_lines: 2,
            clock_refresh_secs: 60,
        }
    }
}

impl TimelineConfig {
    /// Rejects settings the layout cannot work with.
    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.min_zoom > self.max_zoom {
            return Err(TimelineError::InvalidConfig(format!(
                "min_zoom {} is above max_zoom {}",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.start_year > self.end_year {
            return Err(TimelineError::InvalidConfig(format!(
                "start_year {} is after end_year {}",
                self.start_year, self.end_year
            )));
        }
        Ok(())
    }

    /// Never panics; an inverted range resolves to `max_zoom`.
    pub fn clamp_zoom(&self, zoom: u32) -> u32 {
        zoom.max(self.min_zoom).min(self.max_zoom)
    }

    pub fn row_table(&self) -> RowTable {
        RowTable::new(self.row_heights.clone(), self.fallback_row_height)
    }

    pub fn badge_cap(&self) -> BadgeCap {
        BadgeCap {
            slot_width: self.badge_slot_width,
            padding: self.badge_padding,
            min_per_line: self.min_badges_per_line,
            lines: self.badge_lines,
        }
    }

    /// Years covered by the grid for a given "today".
    pub fn years(&self, today: CalendarDate) -> std::ops::RangeInclusive<i32> {
        self.start_year..=self.end_year.max(today.year)
    }
}

/// A calendar month, 1-based.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

/// Day-resolution wall-clock reading used for the "Today" marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn from_datelike<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year, self.month)
    }
}

/// Lane classifier of an experience.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceCategory {
    Company,
    Role,
    Project,
    Personal,
    #[serde(untagged)]
    Other(String),
}

/// Short tag shown on a bar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Badge {
    pub name: String,
    pub category: String,
}

/// One record on the timeline. Loaded once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub badges: Vec<Badge>,
    /// Skill names grouped by skill-category key, in declaration order.
    #[serde(default)]
    pub skills: IndexMap<String, Vec<String>>,
    pub start_year: i32,
    pub start_month: u32,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub end_month: Option<u32>,
    pub category: ExperienceCategory,
    pub color: String,
    #[serde(default)]
    pub link: Option<String>,
    pub row: usize,
}

impl Experience {
    pub fn start(&self) -> YearMonth {
        YearMonth::new(self.start_year, self.start_month)
    }

    /// Declared end. An end year without a month means December.
    pub fn end(&self) -> Option<YearMonth> {
        self.end_year
            .map(|year| YearMonth::new(year, self.end_month.unwrap_or(12)))
    }

    pub fn is_ongoing(&self) -> bool {
        self.end_year.is_none()
    }

    /// Declared end, or the current month for ongoing records.
    pub fn effective_end(&self, now: CalendarDate) -> YearMonth {
        self.end().unwrap_or_else(|| now.year_month())
    }
}

/// Static input of a timeline: records, lane labels and styling tables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CareerDataset {
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub row_labels: Vec<String>,
    #[serde(flatten)]
    pub palette: Palette,
}

impl CareerDataset {
    pub fn experience(&self, id: &str) -> Option<&Experience> {
        self.experiences.iter().find(|experience| experience.id == id)
    }
}

/// Errors raised while loading or bridging timeline data.
#[derive(Debug, thiserror::Error)]
pub enum TimelineError {
    #[error("input is missing required data")]
    MissingData,
    #[error("could not parse input: {0}")]
    Parse(String),
    #[error("invalid timeline config: {0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn experience(id: &str, start: (i32, u32), end: Option<(i32, u32)>) -> Experience {
        Experience {
            id: id.to_string(),
            company: format!("{id} company"),
            role: String::new(),
            description: String::new(),
            badges: Vec::new(),
            skills: IndexMap::new(),
            start_year: start.0,
            start_month: start.1,
            end_year: end.map(|(year, _)| year),
            end_month: end.map(|(_, month)| month),
            category: ExperienceCategory::Project,
            color: "blue".to_string(),
            link: None,
            row: 2,
        }
    }

    #[test]
    fn deserializes_camel_case_record_with_null_end() {
        let json = r#"{
            "id": "sioux",
            "company": "Sioux Technologies",
            "role": "Software Engineer",
            "description": "Embedded work",
            "startYear": 2022,
            "startMonth": 9,
            "endYear": null,
            "endMonth": null,
            "category": "company",
            "color": "orange",
            "row": 0
        }"#;
        let exp: Experience = serde_json::from_str(json).unwrap();
        assert_eq!(exp.start(), YearMonth::new(2022, 9));
        assert!(exp.is_ongoing());
        assert!(exp.badges.is_empty());
        assert_eq!(exp.category, ExperienceCategory::Company);
    }

    #[test]
    fn unknown_category_is_kept_verbatim() {
        let category: ExperienceCategory = serde_json::from_str(r#""volunteering""#).unwrap();
        assert_eq!(category, ExperienceCategory::Other("volunteering".into()));
    }

    #[test]
    fn end_year_without_month_means_december() {
        let mut exp = experience("a", (2019, 3), Some((2020, 6)));
        exp.end_month = None;
        assert_eq!(exp.end(), Some(YearMonth::new(2020, 12)));
    }

    #[test]
    fn effective_end_uses_clock_for_ongoing_records() {
        let exp = experience("a", (2022, 1), None);
        let now = CalendarDate::new(2024, 6, 15);
        assert_eq!(exp.effective_end(now), YearMonth::new(2024, 6));
    }

    #[test]
    fn year_months_order_lexicographically() {
        assert!(YearMonth::new(2019, 12) < YearMonth::new(2020, 1));
        assert!(YearMonth::new(2020, 1) < YearMonth::new(2020, 2));
    }

    #[test]
    fn inverted_zoom_bounds_are_rejected_without_panicking() {
        let config = TimelineConfig {
            min_zoom: 700,
            ..TimelineConfig::default()
        };
        assert!(matches!(config.validate(), Err(TimelineError::InvalidConfig(_))));
        assert_eq!(config.clamp_zoom(320), 640);
        assert!(TimelineConfig::default().validate().is_ok());
    }

    #[test]
    fn year_month_displays_zero_padded() {
        assert_eq!(YearMonth::new(2019, 9).to_string(), "2019-09");
    }

    #[test]
    fn grid_extends_to_current_year() {
        let config = TimelineConfig::default();
        assert_eq!(config.years(CalendarDate::new(2025, 1, 1)), 2016..=2026);
        assert_eq!(config.years(CalendarDate::new(2028, 1, 1)), 2016..=2028);
    }
}
