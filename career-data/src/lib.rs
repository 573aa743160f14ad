//! `experiences.json` loader and data checks for the career timeline.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use career_core::{CareerDataset, Experience, TimelineError, YearMonth};
use serde::Serialize;
use serde_json::Value;

/// Load a dataset from a JSON string.
pub fn load_dataset_str(json: &str) -> Result<CareerDataset, TimelineError> {
    let value: Value =
        serde_json::from_str(json).map_err(|err| TimelineError::Parse(err.to_string()))?;
    load_dataset_value(&value)
}

/// Load a dataset from an already parsed `serde_json::Value`.
pub fn load_dataset_value(value: &Value) -> Result<CareerDataset, TimelineError> {
    let document = value
        .as_object()
        .ok_or_else(|| TimelineError::Parse("expected a JSON object".to_string()))?;

    if !document.get("experiences").is_some_and(Value::is_array) {
        return Err(TimelineError::MissingData);
    }

    let dataset: CareerDataset = serde_json::from_value(value.clone())
        .map_err(|err| TimelineError::Parse(err.to_string()))?;
    tracing::debug!(
        experiences = dataset.experiences.len(),
        rows = dataset.row_labels.len(),
        colors = dataset.palette.colors.len(),
        "loaded career dataset"
    );
    Ok(dataset)
}

/// Read and load a dataset file.
pub fn load_dataset_path(path: impl AsRef<Path>) -> Result<CareerDataset, TimelineError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .map_err(|err| TimelineError::Other(format!("cannot read {}: {err}", path.display())))?;
    load_dataset_str(&data)
}

/// Something wrong with the data that still renders, just oddly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    InvertedRange {
        id: String,
        start: YearMonth,
        end: YearMonth,
    },
    MonthOutOfRange { id: String, month: u32 },
    RowWithoutLabel { id: String, row: usize },
    UnknownColor { id: String, color: String },
    UnknownBadgeCategory { id: String, category: String },
    UnknownSkillCategory { id: String, category: String },
    DuplicateId { id: String },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange { id, start, end } => {
                write!(f, "{id}: ends {end} before it starts {start}")
            }
            Self::MonthOutOfRange { id, month } => {
                write!(f, "{id}: month {month} is outside 1..=12")
            }
            Self::RowWithoutLabel { id, row } => write!(f, "{id}: row {row} has no label"),
            Self::UnknownColor { id, color } => {
                write!(f, "{id}: unknown color \"{color}\", using neutral colors")
            }
            Self::UnknownBadgeCategory { id, category } => {
                write!(f, "{id}: badge category \"{category}\" is not defined")
            }
            Self::UnknownSkillCategory { id, category } => {
                write!(f, "{id}: skill category \"{category}\" is not defined and will be hidden")
            }
            Self::DuplicateId { id } => write!(f, "{id}: id is used more than once"),
        }
    }
}

/// Report data problems. None of them stop the timeline from rendering.
pub fn check_dataset(dataset: &CareerDataset) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for experience in &dataset.experiences {
        if !seen.insert(experience.id.as_str()) {
            issues.push(DataIssue::DuplicateId {
                id: experience.id.clone(),
            });
        }
        check_dates(experience, &mut issues);

        if experience.row >= dataset.row_labels.len() {
            issues.push(DataIssue::RowWithoutLabel {
                id: experience.id.clone(),
                row: experience.row,
            });
        }

        if !dataset.palette.colors.contains_key(&experience.color) {
            issues.push(DataIssue::UnknownColor {
                id: experience.id.clone(),
                color: experience.color.clone(),
            });
        }

        for badge in &experience.badges {
            if dataset.palette.skill_category(&badge.category).is_none() {
                issues.push(DataIssue::UnknownBadgeCategory {
                    id: experience.id.clone(),
                    category: badge.category.clone(),
                });
            }
        }

        for category in experience.skills.keys() {
            if dataset.palette.skill_category(category).is_none() {
                issues.push(DataIssue::UnknownSkillCategory {
                    id: experience.id.clone(),
                    category: category.clone(),
                });
            }
        }
    }

    for issue in &issues {
        tracing::warn!(%issue, "career data issue");
    }
    issues
}

fn check_dates(experience: &Experience, issues: &mut Vec<DataIssue>) {
    let months = std::iter::once(experience.start_month).chain(experience.end_month);
    for month in months {
        if !(1..=12).contains(&month) {
            issues.push(DataIssue::MonthOutOfRange {
                id: experience.id.clone(),
                month,
            });
        }
    }

    if let Some(end) = experience.end() {
        let start = experience.start();
        if end < start {
            issues.push(DataIssue::InvertedRange {
                id: experience.id.clone(),
                start,
                end,
            });
        }
    }
}
