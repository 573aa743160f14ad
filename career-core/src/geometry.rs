//! Date-to-pixel mapping and row placement.

use crate::{CalendarDate, Experience, YearMonth};

/// Days assumed per month when placing the "Today" marker inside a month.
pub const MARKER_DAYS_PER_MONTH: f64 = 30.0;

/// Horizontal scale at one zoom level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub start_year: i32,
    pub year_width: f64,
}

impl TimeScale {
    pub fn new(start_year: i32, year_width: f64) -> Self {
        Self {
            start_year,
            year_width,
        }
    }

    pub fn month_width(&self) -> f64 {
        self.year_width / 12.0
    }

    /// X offset of the first pixel of a month. Snaps to month boundaries.
    pub fn offset(&self, at: YearMonth) -> f64 {
        f64::from(at.year - self.start_year) * self.year_width
            + (f64::from(at.month) - 1.0) * self.month_width()
    }

    /// Span between two months. Not clamped: an inverted range is negative.
    pub fn span(&self, from: YearMonth, to: YearMonth) -> f64 {
        self.offset(to) - self.offset(from)
    }

    pub fn bar_left(&self, experience: &Experience) -> f64 {
        self.offset(experience.start())
    }

    pub fn bar_width(&self, experience: &Experience, now: CalendarDate) -> f64 {
        self.span(experience.start(), experience.effective_end(now))
    }

    /// Position of the "Today" marker. Days are spread linearly over a
    /// 30-day month whatever the real month length is.
    pub fn today_position(&self, now: CalendarDate) -> f64 {
        let day_offset = (f64::from(now.day) - 1.0) / MARKER_DAYS_PER_MONTH * self.month_width();
        self.offset(now.year_month()) + day_offset
    }

    pub fn total_width(&self, year_count: usize) -> f64 {
        year_count as f64 * self.year_width
    }
}

/// Fixed, ordered row heights.
#[derive(Debug, Clone, PartialEq)]
pub struct RowTable {
    heights: Vec<f64>,
    fallback: f64,
}

impl RowTable {
    pub fn new(heights: Vec<f64>, fallback: f64) -> Self {
        Self { heights, fallback }
    }

    pub fn height(&self, row: usize) -> f64 {
        self.heights.get(row).copied().unwrap_or(self.fallback)
    }

    /// Sum of the heights of every row above `row`.
    pub fn top(&self, row: usize) -> f64 {
        (0..row).map(|index| self.height(index)).sum()
    }

    pub fn total_height(&self, row_count: usize) -> f64 {
        self.top(row_count)
    }
}

/// How many badges fit on a bar of a given width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BadgeCap {
    pub slot_width: f64,
    pub padding: f64,
    pub min_per_line: usize,
    pub lines: usize,
}

impl BadgeCap {
    pub fn per_line(&self, bar_width: f64) -> usize {
        let fitting = ((bar_width - self.padding) / self.slot_width).floor();
        if fitting.is_finite() && fitting > 0.0 {
            (fitting as usize).max(self.min_per_line)
        } else {
            self.min_per_line
        }
    }

    pub fn visible(&self, bar_width: f64) -> usize {
        self.per_line(bar_width) * self.lines
    }
}
