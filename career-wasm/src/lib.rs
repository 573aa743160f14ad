//! Framework-neutral WASM <-> JavaScript bridge for the career timeline.

use career_core::{
    format_date_range, CalendarDate, CareerDataset, Clock, DetailPanel, Experience, SystemClock,
    TimelineConfig, TimelineError, TimelineLayout, ViewState,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

#[derive(Deserialize, Default)]
struct JsTimelineConfig {
    #[serde(default)]
    start_year: Option<i32>,
    #[serde(default)]
    end_year: Option<i32>,
    #[serde(default)]
    min_zoom: Option<u32>,
    #[serde(default)]
    max_zoom: Option<u32>,
    #[serde(default)]
    zoom_step: Option<u32>,
    #[serde(default)]
    row_heights: Option<Vec<f64>>,
}

impl From<JsTimelineConfig> for TimelineConfig {
    fn from(cfg: JsTimelineConfig) -> Self {
        let mut base = TimelineConfig::default();
        if let Some(year) = cfg.start_year {
            base.start_year = year;
        }
        if let Some(year) = cfg.end_year {
            base.end_year = year;
        }
        if let Some(zoom) = cfg.min_zoom {
            base.min_zoom = zoom;
        }
        if let Some(zoom) = cfg.max_zoom {
            base.max_zoom = zoom;
        }
        if let Some(step) = cfg.zoom_step {
            base.zoom_step = step;
        }
        if let Some(heights) = cfg.row_heights {
            base.row_heights = heights;
        }
        base
    }
}

/// View as supplied by the host page; every field is optional.
#[derive(Deserialize, Default)]
struct JsViewState {
    #[serde(default)]
    selected_id: Option<String>,
    #[serde(default)]
    zoom_level: Option<u32>,
    #[serde(default)]
    today: Option<CalendarDate>,
}

impl JsViewState {
    fn into_view(self, config: &TimelineConfig) -> ViewState {
        let today = self.today.unwrap_or_else(|| SystemClock.today());
        let mut view = ViewState::new(config, today);
        if let Some(zoom) = self.zoom_level {
            view.zoom_level = config.clamp_zoom(zoom);
        }
        view.selected_id = self.selected_id;
        view
    }
}

#[derive(Serialize)]
struct LayoutResponse {
    layout: TimelineLayout,
    detail: Option<DetailPanel>,
}

fn decode<T: for<'de> Deserialize<'de> + Default>(
    value: Option<JsValue>,
    what: &str,
) -> Result<T, JsValue> {
    match value {
        Some(value) if !value.is_undefined() && !value.is_null() => from_value(value)
            .map_err(|err| JsValue::from_str(&format!("could not read {what}: {err}"))),
        _ => Ok(T::default()),
    }
}

fn read_dataset(dataset: JsValue) -> Result<CareerDataset, JsValue> {
    let value = from_value::<Value>(dataset)
        .map_err(|err| JsValue::from_str(&format!("could not read dataset JSON: {err}")))?;
    dataset_from_json(&value).map_err(|err| JsValue::from_str(&err))
}

fn dataset_from_json(value: &Value) -> Result<CareerDataset, String> {
    career_data::load_dataset_value(value).map_err(format_timeline_error)
}

fn build_layout(
    dataset: &CareerDataset,
    view: JsViewState,
    config: JsTimelineConfig,
) -> Result<LayoutResponse, String> {
    let config = TimelineConfig::from(config);
    config.validate().map_err(format_timeline_error)?;
    let view = view.into_view(&config);

    Ok(LayoutResponse {
        layout: TimelineLayout::compute(dataset, &view, &config),
        detail: DetailPanel::for_view(&dataset.experiences, &view, &dataset.palette),
    })
}

fn range_from_json(experience: Value) -> Result<String, String> {
    let experience: Experience = serde_json::from_value(experience)
        .map_err(|err| format!("could not read experience: {err}"))?;
    Ok(format_date_range(&experience))
}

/// Compute the layout and detail panel for one view of a dataset.
#[wasm_bindgen]
pub fn compute_layout(
    dataset: JsValue,
    view: Option<JsValue>,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let dataset = read_dataset(dataset)?;
    let config = decode::<JsTimelineConfig>(config, "config")?;
    let view = decode::<JsViewState>(view, "view")?;
    let response = build_layout(&dataset, view, config).map_err(|err| JsValue::from_str(&err))?;

    to_value(&response).map_err(|err| JsValue::from_str(&format!("could not serialize layout: {err}")))
}

/// `"Sep 2019 — Present"` for one experience record.
#[wasm_bindgen]
pub fn format_range(experience: JsValue) -> Result<String, JsValue> {
    let value: Value = from_value(experience)
        .map_err(|err| JsValue::from_str(&format!("could not read experience: {err}")))?;
    range_from_json(value).map_err(|err| JsValue::from_str(&err))
}

/// Data issues as `{ kind, id, ... }` objects.
#[wasm_bindgen]
pub fn check(dataset: JsValue) -> Result<JsValue, JsValue> {
    let dataset = read_dataset(dataset)?;
    let issues = career_data::check_dataset(&dataset);
    to_value(&issues).map_err(|err| JsValue::from_str(&format!("could not serialize issues: {err}")))
}

fn format_timeline_error(err: TimelineError) -> String {
    format!("Timeline error: {err}")
}
