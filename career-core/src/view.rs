//! Interactive state owned by one timeline instance.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, TimeScale, TimelineConfig};

/// Selection, zoom and clock reading for one mounted timeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub selected_id: Option<String>,
    /// Pixels per year.
    pub zoom_level: u32,
    pub current_time: CalendarDate,
    #[serde(skip)]
    scrolled: bool,
}

impl ViewState {
    pub fn new(config: &TimelineConfig, now: CalendarDate) -> Self {
        Self {
            selected_id: None,
            zoom_level: config.clamp_zoom(config.default_zoom),
            current_time: now,
            scrolled: false,
        }
    }

    /// Toggle selection: picking the selected id again clears it.
    pub fn select(&mut self, id: &str) {
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        } else {
            self.selected_id = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_id.as_deref() == Some(id)
    }

    pub fn zoom_in(&mut self, config: &TimelineConfig) {
        self.zoom_level = config.clamp_zoom(self.zoom_level.saturating_add(config.zoom_step));
    }

    pub fn zoom_out(&mut self, config: &TimelineConfig) {
        self.zoom_level = config.clamp_zoom(self.zoom_level.saturating_sub(config.zoom_step));
    }

    pub fn can_zoom_in(&self, config: &TimelineConfig) -> bool {
        self.zoom_level < config.max_zoom
    }

    pub fn can_zoom_out(&self, config: &TimelineConfig) -> bool {
        self.zoom_level > config.min_zoom
    }

    /// Returns `true` when the reading actually changed.
    pub fn set_current_time(&mut self, now: CalendarDate) -> bool {
        if self.current_time == now {
            return false;
        }
        self.current_time = now;
        true
    }

    pub fn scale(&self, config: &TimelineConfig) -> TimeScale {
        TimeScale::new(config.start_year, f64::from(self.zoom_level))
    }

    /// Scroll offset that puts the most recent time in view. Yields a value
    /// on the first call only; later renders and zoom changes leave the
    /// user's scroll position alone.
    pub fn initial_scroll(&mut self, scroll_width: f64, client_width: f64) -> Option<f64> {
        if self.scrolled {
            return None;
        }
        self.scrolled = true;
        Some((scroll_width - client_width).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> (TimelineConfig, ViewState) {
        let config = TimelineConfig::default();
        let view = ViewState::new(&config, CalendarDate::new(2026, 1, 30));
        (config, view)
    }

    #[test]
    fn starts_at_default_zoom_without_selection() {
        let (_, view) = view();
        assert_eq!(view.zoom_level, 320);
        assert_eq!(view.selected_id, None);
    }

    #[test]
    fn selecting_twice_clears() {
        let (_, mut view) = view();
        view.select("rofox");
        assert!(view.is_selected("rofox"));
        view.select("rofox");
        assert_eq!(view.selected_id, None);
    }

    #[test]
    fn selecting_another_replaces() {
        let (_, mut view) = view();
        view.select("rofox");
        view.select("sioux");
        assert_eq!(view.selected_id.as_deref(), Some("sioux"));
        view.clear_selection();
        assert_eq!(view.selected_id, None);
    }

    #[test]
    fn zoom_in_stops_at_max() {
        let (config, mut view) = view();
        for _ in 0..20 {
            view.zoom_in(&config);
            assert!(view.zoom_level <= config.max_zoom);
        }
        assert_eq!(view.zoom_level, 640);
        assert!(!view.can_zoom_in(&config));
    }

    #[test]
    fn zoom_out_stops_at_min() {
        let (config, mut view) = view();
        for _ in 0..20 {
            view.zoom_out(&config);
            assert!(view.zoom_level >= config.min_zoom);
        }
        assert_eq!(view.zoom_level, 160);
        assert!(!view.can_zoom_out(&config));
    }

    #[test]
    fn zoom_steps_by_configured_amount() {
        let (config, mut view) = view();
        view.zoom_in(&config);
        assert_eq!(view.zoom_level, 400);
        view.zoom_out(&config);
        view.zoom_out(&config);
        assert_eq!(view.zoom_level, 240);
    }

    #[test]
    fn clock_update_reports_changes() {
        let (_, mut view) = view();
        assert!(!view.set_current_time(CalendarDate::new(2026, 1, 30)));
        assert!(view.set_current_time(CalendarDate::new(2026, 1, 31)));
        assert_eq!(view.current_time.day, 31);
    }

    #[test]
    fn auto_scroll_fires_once() {
        let (config, mut view) = view();
        assert_eq!(view.initial_scroll(3520.0, 1000.0), Some(2520.0));
        view.zoom_in(&config);
        assert_eq!(view.initial_scroll(4400.0, 1000.0), None);
    }

    #[test]
    fn auto_scroll_never_negative() {
        let (_, mut view) = view();
        assert_eq!(view.initial_scroll(500.0, 1000.0), Some(0.0));
    }
}
