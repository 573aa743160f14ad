//! Career timeline component for WebAssembly hosts.

#[cfg(target_arch = "wasm32")]
mod styles;

use career_core::{BarLayout, TimelineLayout};

/// Inline style for an absolutely positioned bar.
pub fn bar_style(bar: &BarLayout) -> String {
    format!(
        "left: {}px; width: {}px; top: {}px; height: {}px;",
        px(bar.left),
        px(bar.width),
        px(bar.top),
        px(bar.height)
    )
}

/// Inline style for the "Today" marker.
pub fn today_style(layout: &TimelineLayout) -> String {
    format!(
        "left: {}px; height: {}px;",
        px(layout.today_x),
        px(layout.grid_height())
    )
}

pub fn width_style(width: f64) -> String {
    format!("width: {}px;", px(width))
}

pub fn height_style(height: f64) -> String {
    format!("height: {}px;", px(height))
}

pub fn left_style(left: f64) -> String {
    format!("left: {}px;", px(left))
}

/// Browser timers take an `i32` of milliseconds; longer periods saturate.
pub fn interval_millis(interval: std::time::Duration) -> i32 {
    i32::try_from(interval.as_millis()).unwrap_or(i32::MAX)
}

/// Two decimals are plenty for CSS pixels and keep the DOM diff stable.
fn px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{rounded:.0}")
    } else {
        format!("{rounded}")
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::rc::Rc;
    use std::time::Duration;

    use crate::styles;
    use crate::{bar_style, height_style, interval_millis, left_style, today_style, width_style};
    use career_core::{
        BarLayout, CareerDataset, Clock, ClockSubscription, DetailPanel, SkillGroup, SystemClock,
        TimelineConfig, TimelineLayout, ViewState,
    };
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, Window};
    use yew::prelude::*;

    #[derive(Properties, PartialEq)]
    pub struct CareerTimelineProps {
        pub dataset: Rc<CareerDataset>,
        #[prop_or_default]
        pub config: Rc<TimelineConfig>,
    }

    #[function_component(CareerTimeline)]
    fn career_timeline(props: &CareerTimelineProps) -> Html {
        let config = props.config.clone();
        let view = {
            let config = config.clone();
            use_mut_ref(move || ViewState::new(&config, SystemClock.today()))
        };
        let clock = {
            let interval = Duration::from_secs(config.clock_refresh_secs);
            use_mut_ref(move || ClockSubscription::new(SystemClock, interval))
        };
        let trigger = use_force_update();
        let scroll_ref = use_node_ref();

        use_effect_with((), |_| {
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                if let Err(err) = styles::ensure_styles(&document) {
                    console::error_1(&err);
                }
            }
            || ()
        });

        {
            let view = view.clone();
            let clock = clock.clone();
            let trigger = trigger.clone();
            use_effect_with((), move |_| {
                if clock.borrow_mut().start(&mut view.borrow_mut()) {
                    trigger.force_update();
                }
                let interval_ms = interval_millis(clock.borrow().interval());
                let stopper = clock.clone();
                let tick = Closure::<dyn FnMut()>::new(move || {
                    if clock.borrow().tick(&mut view.borrow_mut()) {
                        trigger.force_update();
                    }
                });
                let window = web_sys::window();
                let handle = window.as_ref().and_then(|window| {
                    window
                        .set_interval_with_callback_and_timeout_and_arguments_0(
                            tick.as_ref().unchecked_ref(),
                            interval_ms,
                        )
                        .ok()
                });

                move || {
                    if let (Some(window), Some(handle)) = (window, handle) {
                        window.clear_interval_with_handle(handle);
                    }
                    stopper.borrow_mut().stop();
                    drop(tick);
                }
            });
        }

        {
            let view = view.clone();
            let scroll_ref = scroll_ref.clone();
            use_effect_with((), move |_| {
                if let Some(element) = scroll_ref.cast::<Element>() {
                    let offset = view.borrow_mut().initial_scroll(
                        f64::from(element.scroll_width()),
                        f64::from(element.client_width()),
                    );
                    if let Some(offset) = offset {
                        element.set_scroll_left(offset as i32);
                    }
                }
                || ()
            });
        }

        let on_zoom_in = {
            let view = view.clone();
            let config = config.clone();
            let trigger = trigger.clone();
            Callback::from(move |_: MouseEvent| {
                view.borrow_mut().zoom_in(&config);
                trigger.force_update();
            })
        };

        let on_zoom_out = {
            let view = view.clone();
            let config = config.clone();
            let trigger = trigger.clone();
            Callback::from(move |_: MouseEvent| {
                view.borrow_mut().zoom_out(&config);
                trigger.force_update();
            })
        };

        let on_select = {
            let view = view.clone();
            let trigger = trigger.clone();
            Callback::from(move |id: String| {
                view.borrow_mut().select(&id);
                trigger.force_update();
            })
        };

        let on_close = {
            let view = view.clone();
            let trigger = trigger.clone();
            Callback::from(move |_: MouseEvent| {
                view.borrow_mut().clear_selection();
                trigger.force_update();
            })
        };

        let current = view.borrow().clone();
        let layout = TimelineLayout::compute(&props.dataset, &current, &config);
        let detail = DetailPanel::for_view(&props.dataset.experiences, &current, &props.dataset.palette);

        html! {
            <div class="career-root">
                <div class="career-frame">
                    <div class="career-labels" style={width_style(layout.label_width)}>
                        <div class="career-zoom">
                            <button
                                type="button"
                                title="Zoom out"
                                disabled={!current.can_zoom_out(&config)}
                                onclick={on_zoom_out}
                            >
                                {"-"}
                            </button>
                            <button
                                type="button"
                                title="Zoom in"
                                disabled={!current.can_zoom_in(&config)}
                                onclick={on_zoom_in}
                            >
                                {"+"}
                            </button>
                        </div>
                        <div class="career-label-spacer" />
                        {
                            for layout.rows.iter().map(|row| html! {
                                <div class="career-row-label" style={height_style(row.height)}>
                                    { row.label.clone() }
                                </div>
                            })
                        }
                    </div>
                    <div ref={scroll_ref} class="career-scroll">
                        <div class="career-canvas" style={width_style(layout.total_width)}>
                            { render_headers(&layout) }
                            { render_grid(&layout) }
                            <div class="career-rows" style={height_style(layout.grid_height())}>
                                { for layout.bars.iter().map(|bar| render_bar(bar, on_select.clone())) }
                            </div>
                            <div class="career-today" style={today_style(&layout)}>
                                <div class="career-today-dot" />
                                <div class="career-today-label">{"Today"}</div>
                            </div>
                        </div>
                    </div>
                </div>
                { detail.map(|panel| render_detail(&panel, on_close)).unwrap_or_default() }
            </div>
        }
    }

    fn render_headers(layout: &TimelineLayout) -> Html {
        html! {
            <>
                <div class="career-years">
                    {
                        for layout.years.iter().map(|year| html! {
                            <div
                                class={classes!("career-year", year.is_current.then_some("is-current"))}
                                style={width_style(year.width)}
                            >
                                { year.year.to_string() }
                            </div>
                        })
                    }
                </div>
                <div class="career-months">
                    {
                        for layout.months.iter().map(|month| html! {
                            <div class="career-month" style={width_style(month.width)}>
                                { month.initial.clone() }
                            </div>
                        })
                    }
                </div>
            </>
        }
    }

    fn render_grid(layout: &TimelineLayout) -> Html {
        let row_lines = (0..=layout.rows.len()).map(|index| {
            layout
                .rows
                .get(index)
                .map_or(layout.rows_height, |row| row.top)
        });

        html! {
            <div class="career-grid" style={height_style(layout.grid_height())}>
                {
                    for layout.months.iter().map(|month| {
                        let class = if month.month == 1 {
                            "career-grid-line is-year"
                        } else if month.quarter_start {
                            "career-grid-line is-quarter"
                        } else {
                            "career-grid-line"
                        };
                        html! { <div class={class} style={left_style(month.x)} /> }
                    })
                }
                {
                    for row_lines.map(|top| html! {
                        <div class="career-grid-row" style={format!("top: {}px;", crate::px(top))} />
                    })
                }
            </div>
        }
    }

    fn render_bar(bar: &BarLayout, on_select: Callback<String>) -> Html {
        let onclick = {
            let id = bar.id.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
        };
        let live_dot = bar.ongoing.then(|| {
            html! { <span class={classes!("career-dot", "is-live", bar.colors.dot.clone())} /> }
        });

        html! {
            <div
                class={classes!(
                    "career-bar",
                    bar.compact.then_some("is-compact"),
                    bar.selected.then_some("is-selected"),
                    bar.colors.node.clone()
                )}
                style={bar_style(bar)}
                onclick={onclick}
            >
                <div class="career-bar-title">
                    <span class={classes!("career-dot", bar.colors.dot.clone())} />
                    <span class="career-bar-name">{ bar.title.clone() }</span>
                    { if bar.compact { Html::default() } else { render_link(bar.link.as_deref()) } }
                    { live_dot.unwrap_or_default() }
                </div>
                {
                    if bar.compact {
                        Html::default()
                    } else {
                        html! {
                            <>
                                if !bar.role.is_empty() {
                                    <div class="career-bar-role">{ bar.role.clone() }</div>
                                }
                                { render_badges(bar) }
                            </>
                        }
                    }
                }
            </div>
        }
    }

    fn render_link(link: Option<&str>) -> Html {
        let Some(link) = link else {
            return Html::default();
        };
        let stop = Callback::from(|event: MouseEvent| event.stop_propagation());
        html! {
            <a
                class="career-link"
                href={link.to_string()}
                target="_blank"
                rel="noopener noreferrer"
                onclick={stop}
            >
                {"↗"}
            </a>
        }
    }

    fn render_badges(bar: &BarLayout) -> Html {
        if bar.badges.is_empty() && bar.hidden_badges == 0 {
            return Html::default();
        }
        html! {
            <div class="career-badges">
                {
                    for bar.badges.iter().map(|badge| html! {
                        <span class={classes!("career-badge", badge.classes.clone())}>
                            { badge.name.clone() }
                        </span>
                    })
                }
                if bar.hidden_badges > 0 {
                    <span class="career-badge-more">{ format!("+{}", bar.hidden_badges) }</span>
                }
            </div>
        }
    }

    fn render_detail(panel: &DetailPanel, on_close: Callback<MouseEvent>) -> Html {
        html! {
            <section class={classes!("career-detail", panel.colors.border.clone())}>
                <div>
                    <h3>
                        { panel.company.clone() }
                        {
                            panel.link.as_ref().map(|link| html! {
                                <a
                                    class={classes!(panel.colors.text.clone())}
                                    href={link.clone()}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {" Visit website →"}
                                </a>
                            }).unwrap_or_default()
                        }
                    </h3>
                    <p class={classes!("career-detail-role", panel.colors.text.clone())}>{ panel.role.clone() }</p>
                    <p class="career-detail-range">{ panel.date_range.clone() }</p>
                    <p>{ panel.description.clone() }</p>
                    { for panel.skill_groups.iter().map(render_skill_group) }
                </div>
                <button type="button" class="career-detail-close" aria-label="Close" onclick={on_close}>
                    {"×"}
                </button>
            </section>
        }
    }

    fn render_skill_group(group: &SkillGroup) -> Html {
        html! {
            <div class="career-skill-group">
                <h4 class={classes!(group.title_class.clone())}>{ group.title.clone() }</h4>
                <div class="career-skills">
                    {
                        for group.skills.iter().map(|skill| html! {
                            <span class={classes!("career-skill", group.classes.clone())}>{ skill.clone() }</span>
                        })
                    }
                </div>
            </div>
        }
    }

    #[wasm_bindgen]
    pub fn mount_career_timeline(selector: &str, dataset: JsValue) -> Result<(), JsValue> {
        let window: Window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("bad selector: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("no element matches selector"))?;

        let value: serde_json::Value = from_value(dataset)?;
        let dataset = career_data::load_dataset_value(&value)
            .map_err(|err| JsValue::from_str(&format!("Timeline error: {err}")))?;
        for issue in career_data::check_dataset(&dataset) {
            console::warn_1(&JsValue::from_str(&issue.to_string()));
        }

        yew::Renderer::<CareerTimeline>::with_root_and_props(
            target,
            CareerTimelineProps {
                dataset: Rc::new(dataset),
                config: Rc::new(TimelineConfig::default()),
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_career_timeline;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_career_timeline(
    _: &str,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "career-ui only supports the wasm32 target",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use career_core::{CalendarDate, CareerDataset, TimelineConfig, ViewState};

    #[test]
    fn pixel_values_are_trimmed() {
        assert_eq!(px(80.0), "80");
        assert_eq!(px(1333.333333), "1333.33");
        assert_eq!(width_style(26.666_666), "width: 26.67px;");
    }

    #[test]
    fn long_refresh_periods_saturate() {
        use std::time::Duration;

        assert_eq!(interval_millis(Duration::from_secs(60)), 60_000);
        assert_eq!(interval_millis(Duration::from_secs(u64::from(u32::MAX))), i32::MAX);
    }

    #[test]
    fn today_marker_spans_grid() {
        let config = TimelineConfig::default();
        let dataset = CareerDataset {
            row_labels: vec!["Company".into(), "Role".into()],
            ..CareerDataset::default()
        };
        let view = ViewState::new(&config, CalendarDate::new(2016, 1, 1));
        let layout = TimelineLayout::compute(&dataset, &view, &config);
        assert_eq!(today_style(&layout), "left: 0px; height: 70px;");
    }
}
