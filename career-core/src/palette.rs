//! Color and skill-category lookup tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Class names for one color key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    #[serde(default)]
    pub label: String,
    pub bg: String,
    pub bg_hover: String,
    pub border: String,
    pub border_selected: String,
    pub ring: String,
    pub dot: String,
    pub text: String,
}

/// Display name and classes for one skill category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillCategoryDef {
    pub name: String,
    pub bg: String,
    pub border: String,
    pub text: String,
}

impl SkillCategoryDef {
    pub fn classes(&self) -> String {
        format!("{} {} {}", self.bg, self.border, self.text)
    }
}

/// Resolved classes for a bar or detail panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorClasses {
    pub node: String,
    pub dot: String,
    pub text: String,
    pub border: String,
}

impl ColorClasses {
    /// Neutral scheme for unknown color keys.
    pub fn neutral() -> Self {
        Self {
            node: "bg-gray-500/15 border-gray-500/50 hover:bg-gray-500/25".to_string(),
            dot: "bg-gray-500".to_string(),
            text: "text-gray-500".to_string(),
            border: "border-gray-500/50".to_string(),
        }
    }
}

pub const NEUTRAL_BADGE_CLASSES: &str = "bg-bg-primary/50 border border-border/40 text-text-tertiary";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(default)]
    pub colors: IndexMap<String, ColorConfig>,
    #[serde(default)]
    pub skill_categories: IndexMap<String, SkillCategoryDef>,
}

impl Palette {
    pub fn classes(&self, color_key: &str, selected: bool) -> ColorClasses {
        let Some(config) = self.colors.get(color_key) else {
            return ColorClasses::neutral();
        };

        let (node, border) = if selected {
            (
                format!("{} {} ring-2 {}", config.bg, config.border_selected, config.ring),
                config.border_selected.clone(),
            )
        } else {
            (
                format!("{} {} {}", config.bg, config.border, config.bg_hover),
                config.border.clone(),
            )
        };

        ColorClasses {
            node,
            dot: config.dot.clone(),
            text: config.text.clone(),
            border,
        }
    }

    pub fn skill_category(&self, key: &str) -> Option<&SkillCategoryDef> {
        self.skill_categories.get(key)
    }

    pub fn badge_classes(&self, category: &str) -> String {
        self.skill_category(category)
            .map(SkillCategoryDef::classes)
            .unwrap_or_else(|| NEUTRAL_BADGE_CLASSES.to_string())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn palette() -> Palette {
        let mut colors = IndexMap::new();
        colors.insert(
            "blue".to_string(),
            ColorConfig {
                label: "Company".to_string(),
                bg: "bg-blue-500/15".to_string(),
                bg_hover: "hover:bg-blue-500/25".to_string(),
                border: "border-blue-500/50".to_string(),
                border_selected: "border-blue-500".to_string(),
                ring: "ring-blue-500/30".to_string(),
                dot: "bg-blue-500".to_string(),
                text: "text-blue-500".to_string(),
            },
        );
        let mut skill_categories = IndexMap::new();
        skill_categories.insert(
            "lang".to_string(),
            SkillCategoryDef {
                name: "Languages".to_string(),
                bg: "bg-sky-500/10".to_string(),
                border: "border-sky-500/30".to_string(),
                text: "text-sky-400".to_string(),
            },
        );
        Palette {
            colors,
            skill_categories,
        }
    }

    #[test]
    fn unselected_classes_include_hover() {
        let classes = palette().classes("blue", false);
        assert_eq!(
            classes.node,
            "bg-blue-500/15 border-blue-500/50 hover:bg-blue-500/25"
        );
        assert_eq!(classes.border, "border-blue-500/50");
    }

    #[test]
    fn selected_classes_add_ring() {
        let classes = palette().classes("blue", true);
        assert_eq!(classes.node, "bg-blue-500/15 border-blue-500 ring-2 ring-blue-500/30");
        assert_eq!(classes.border, "border-blue-500");
    }

    #[test]
    fn unknown_color_falls_back_to_neutral() {
        assert_eq!(palette().classes("magenta", true), ColorClasses::neutral());
    }

    #[test]
    fn badge_classes_fall_back_for_unknown_category() {
        let palette = palette();
        assert_eq!(
            palette.badge_classes("lang"),
            "bg-sky-500/10 border-sky-500/30 text-sky-400"
        );
        assert_eq!(palette.badge_classes("cooking"), NEUTRAL_BADGE_CLASSES);
    }
}
