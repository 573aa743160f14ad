#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-career-ui]";

/// Structural CSS for the timeline. Colors come from the dataset's class
/// tables; the tokens below cover everything else and can be overridden.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --career-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --career-border: rgba(148, 163, 184, 0.35);
  --career-border-soft: rgba(148, 163, 184, 0.18);
  --career-header-bg: rgba(255, 255, 255, 0.9);
  --career-text: #1f2933;
  --career-muted: #52606d;
  --career-accent: #6366f1;
  --career-accent-glow: rgba(99, 102, 241, 0.45);
  --career-panel-bg: rgba(255, 255, 255, 0.5);
  --career-radius: 8px;
}

.career-root {
  font-family: var(--career-font-family);
  color: var(--career-text);
  display: flex;
  flex-direction: column;
}

.career-frame {
  display: flex;
}

.career-labels {
  flex-shrink: 0;
  border-right: 1px solid var(--career-border-soft);
  padding-bottom: 4px;
}

.career-zoom {
  height: 44px;
  border-bottom: 1px solid var(--career-border);
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 4px;
}

.career-zoom button {
  width: 24px;
  height: 24px;
  border-radius: 4px;
  border: 1px solid var(--career-border);
  background: transparent;
  color: var(--career-muted);
  cursor: pointer;
  font-size: 14px;
}

.career-zoom button:hover:not(:disabled) {
  color: var(--career-text);
  border-color: var(--career-accent);
}

.career-zoom button:disabled {
  opacity: 0.4;
  cursor: default;
}

.career-label-spacer {
  height: 28px;
  border-bottom: 1px solid var(--career-border-soft);
}

.career-row-label {
  display: flex;
  align-items: center;
  justify-content: flex-end;
  padding-right: 16px;
  font-size: 12px;
  font-weight: 500;
  color: var(--career-muted);
  border-bottom: 1px solid var(--career-border-soft);
  box-sizing: border-box;
}

.career-scroll {
  position: relative;
  overflow-x: auto;
  scroll-behavior: smooth;
  flex: 1;
}

.career-canvas {
  position: relative;
  min-width: max-content;
}

.career-years,
.career-months {
  display: flex;
  position: sticky;
  z-index: 20;
  background: var(--career-header-bg);
  backdrop-filter: blur(4px);
}

.career-years {
  top: 0;
  border-bottom: 1px solid var(--career-border);
}

.career-months {
  top: 44px;
  border-bottom: 1px solid var(--career-border-soft);
}

.career-year {
  flex-shrink: 0;
  padding: 12px 0;
  text-align: center;
  font-size: 14px;
  font-weight: 600;
  color: var(--career-muted);
  border-left: 1px solid var(--career-border-soft);
  box-sizing: border-box;
}

.career-year.is-current {
  color: var(--career-accent);
}

.career-month {
  flex-shrink: 0;
  padding: 6px 0;
  text-align: center;
  font-size: 9px;
  color: var(--career-muted);
  border-left: 1px solid var(--career-border-soft);
  box-sizing: border-box;
}

.career-grid {
  position: absolute;
  top: 76px;
  left: 0;
  right: 0;
  pointer-events: none;
}

.career-grid-line {
  position: absolute;
  top: 0;
  bottom: 0;
  border-left: 1px solid var(--career-border-soft);
}

.career-grid-line.is-year {
  border-left-color: var(--career-border);
}

.career-grid-line.is-quarter {
  border-left-color: rgba(148, 163, 184, 0.3);
}

.career-grid-row {
  position: absolute;
  left: 0;
  right: 0;
  border-top: 1px solid var(--career-border-soft);
}

.career-rows {
  position: relative;
}

.career-bar {
  position: absolute;
  display: flex;
  flex-direction: column;
  gap: 4px;
  padding: 8px 12px;
  border: 1px solid;
  border-radius: var(--career-radius);
  cursor: pointer;
  z-index: 10;
  box-sizing: border-box;
  overflow: hidden;
  transition: all 0.2s ease;
}

.career-bar.is-compact {
  padding: 2px 12px;
}

.career-bar-title {
  display: flex;
  align-items: center;
  gap: 8px;
  font-size: 14px;
  font-weight: 600;
  white-space: nowrap;
}

.career-bar.is-compact .career-bar-title {
  height: 100%;
  gap: 6px;
  font-size: 12px;
  font-weight: 500;
}

.career-bar-name {
  overflow: hidden;
  text-overflow: ellipsis;
}

.career-bar-role {
  font-size: 12px;
  color: var(--career-muted);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.career-dot {
  width: 8px;
  height: 8px;
  border-radius: 999px;
  flex-shrink: 0;
}

.career-bar.is-compact .career-dot {
  width: 6px;
  height: 6px;
}

.career-dot.is-live {
  margin-left: auto;
  animation: career-pulse 2s ease-in-out infinite;
}

.career-link {
  margin-left: auto;
  flex-shrink: 0;
  color: var(--career-muted);
}

.career-link + .career-dot.is-live {
  margin-left: 0;
}

.career-badges {
  display: flex;
  flex-wrap: wrap;
  gap: 4px;
  margin-top: auto;
  max-height: 44px;
  overflow: hidden;
}

.career-badge {
  padding: 2px 6px;
  font-size: 9px;
  border-radius: 4px;
  max-width: 80px;
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
}

.career-badge-more {
  padding: 2px 6px;
  font-size: 9px;
  color: var(--career-muted);
}

.career-today {
  position: absolute;
  top: 76px;
  width: 2px;
  background: linear-gradient(to bottom, var(--career-accent), var(--career-accent), transparent);
  z-index: 30;
  pointer-events: none;
}

.career-today-dot {
  position: absolute;
  top: -4px;
  left: 50%;
  transform: translateX(-50%);
  width: 12px;
  height: 12px;
  border-radius: 999px;
  background: var(--career-accent);
  box-shadow: 0 0 12px var(--career-accent-glow);
}

.career-today-label {
  position: absolute;
  top: 16px;
  left: 50%;
  transform: translateX(-50%);
  padding: 4px 8px;
  background: var(--career-accent);
  color: #ffffff;
  font-size: 10px;
  font-weight: 500;
  border-radius: 4px;
  white-space: nowrap;
}

.career-detail {
  margin-top: 24px;
  padding: 24px;
  border: 1px solid;
  border-radius: 12px;
  background: var(--career-panel-bg);
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 16px;
}

.career-detail h3 {
  margin: 0 0 8px;
  font-size: 20px;
  font-weight: 700;
}

.career-detail-role {
  margin: 0 0 4px;
  font-size: 14px;
  font-weight: 500;
}

.career-detail-range {
  margin: 0 0 16px;
  font-size: 14px;
  color: var(--career-muted);
}

.career-skill-group h4 {
  margin: 24px 0 8px;
  font-size: 12px;
  font-weight: 600;
  text-transform: uppercase;
  letter-spacing: 0.05em;
}

.career-skills {
  display: flex;
  flex-wrap: wrap;
  gap: 8px;
}

.career-skill {
  padding: 4px 12px;
  font-size: 12px;
  border-radius: var(--career-radius);
}

.career-detail-close {
  flex-shrink: 0;
  padding: 8px;
  background: transparent;
  border: none;
  color: var(--career-muted);
  cursor: pointer;
}

@keyframes career-pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.4; }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-career-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
