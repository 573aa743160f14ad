//! Full render derivation for one frame of the timeline.
//!
//! [`TimelineLayout::compute`] is called on every state change and starts
//! from scratch each time, so zooming or a clock tick can never leave a
//! stale position behind.

use serde::{Deserialize, Serialize};

use crate::format::month_initial;
use crate::{CalendarDate, CareerDataset, ColorClasses, TimelineConfig, ViewState};

/// Extra space below the last row so the bottom bar is not clipped.
pub const GRID_BOTTOM_PADDING: f64 = 20.0;

const COMPACT_INSET: f64 = 2.0;
const REGULAR_INSET: f64 = 4.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearHeader {
    pub year: i32,
    pub x: f64,
    pub width: f64,
    pub is_current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthCell {
    pub year: i32,
    pub month: u32,
    pub x: f64,
    pub width: f64,
    pub initial: String,
    /// First month of a quarter; drawn with a stronger grid line.
    pub quarter_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowLabel {
    pub label: String,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BadgeChip {
    pub name: String,
    pub classes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarLayout {
    pub id: String,
    pub title: String,
    pub role: String,
    pub link: Option<String>,
    pub left: f64,
    pub width: f64,
    pub top: f64,
    pub height: f64,
    pub compact: bool,
    pub ongoing: bool,
    pub selected: bool,
    pub colors: ColorClasses,
    pub badges: Vec<BadgeChip>,
    /// Badges hidden by the width cap.
    pub hidden_badges: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineLayout {
    pub year_width: f64,
    pub month_width: f64,
    pub total_width: f64,
    /// Height of all rows, without padding.
    pub rows_height: f64,
    pub label_width: f64,
    pub years: Vec<YearHeader>,
    pub months: Vec<MonthCell>,
    pub rows: Vec<RowLabel>,
    pub bars: Vec<BarLayout>,
    pub today_x: f64,
    pub today: CalendarDate,
}

impl TimelineLayout {
    pub fn compute(dataset: &CareerDataset, view: &ViewState, config: &TimelineConfig) -> Self {
        let scale = view.scale(config);
        let month_width = scale.month_width();
        let rows_table = config.row_table();
        let badge_cap = config.badge_cap();
        let now = view.current_time;

        let years: Vec<YearHeader> = config
            .years(now)
            .enumerate()
            .map(|(index, year)| YearHeader {
                year,
                x: index as f64 * scale.year_width,
                width: scale.year_width,
                is_current: year == now.year,
            })
            .collect();

        let months = years
            .iter()
            .flat_map(|header| {
                (1..=12u32).map(move |month| MonthCell {
                    year: header.year,
                    month,
                    x: header.x + f64::from(month - 1) * month_width,
                    width: month_width,
                    initial: month_initial(month).to_string(),
                    quarter_start: (month - 1) % 3 == 0,
                })
            })
            .collect();

        let rows = dataset
            .row_labels
            .iter()
            .enumerate()
            .map(|(index, label)| RowLabel {
                label: label.clone(),
                top: rows_table.top(index),
                height: rows_table.height(index),
            })
            .collect();

        let bars = dataset
            .experiences
            .iter()
            .map(|experience| {
                let width = scale.bar_width(experience, now);
                let row_height = rows_table.height(experience.row);
                let compact = row_height < config.compact_row_threshold;
                let inset = if compact { COMPACT_INSET } else { REGULAR_INSET };
                let selected = view.is_selected(&experience.id);
                let cap = badge_cap.visible(width);

                BarLayout {
                    id: experience.id.clone(),
                    title: experience.company.clone(),
                    role: experience.role.clone(),
                    link: experience.link.clone(),
                    left: scale.bar_left(experience),
                    width,
                    top: rows_table.top(experience.row) + inset,
                    height: row_height - 2.0 * inset,
                    compact,
                    ongoing: experience.is_ongoing(),
                    selected,
                    colors: dataset.palette.classes(&experience.color, selected),
                    badges: experience
                        .badges
                        .iter()
                        .take(cap)
                        .map(|badge| BadgeChip {
                            name: badge.name.clone(),
                            classes: dataset.palette.badge_classes(&badge.category),
                        })
                        .collect(),
                    hidden_badges: experience.badges.len().saturating_sub(cap),
                }
            })
            .collect();

        Self {
            year_width: scale.year_width,
            month_width,
            total_width: scale.total_width(years.len()),
            rows_height: rows_table.total_height(dataset.row_labels.len()),
            label_width: config.label_width,
            years,
            months,
            rows,
            bars,
            today_x: scale.today_position(now),
            today: now,
        }
    }

    /// Height of the drawing area including bottom padding.
    pub fn grid_height(&self) -> f64 {
        self.rows_height + GRID_BOTTOM_PADDING
    }

    pub fn bar(&self, id: &str) -> Option<&BarLayout> {
        self.bars.iter().find(|bar| bar.id == id)
    }
}
