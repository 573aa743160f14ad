//! Projection of the selected experience into the detail panel.

use serde::{Deserialize, Serialize};

use crate::format::format_date_range;
use crate::{ColorClasses, Experience, Palette, ViewState};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillGroup {
    pub key: String,
    pub title: String,
    pub classes: String,
    pub title_class: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailPanel {
    pub id: String,
    pub company: String,
    pub role: String,
    pub date_range: String,
    pub description: String,
    pub link: Option<String>,
    pub colors: ColorClasses,
    pub skill_groups: Vec<SkillGroup>,
}

impl DetailPanel {
    /// Skill groups with an unknown category or no skills are left out.
    pub fn project(experience: &Experience, palette: &Palette) -> Self {
        let skill_groups = experience
            .skills
            .iter()
            .filter(|(_, skills)| !skills.is_empty())
            .filter_map(|(key, skills)| {
                let category = palette.skill_category(key)?;
                Some(SkillGroup {
                    key: key.clone(),
                    title: category.name.clone(),
                    classes: category.classes(),
                    title_class: category.text.clone(),
                    skills: skills.clone(),
                })
            })
            .collect();

        Self {
            id: experience.id.clone(),
            company: experience.company.clone(),
            role: experience.role.clone(),
            date_range: format_date_range(experience),
            description: experience.description.clone(),
            link: experience.link.clone(),
            colors: palette.classes(&experience.color, false),
            skill_groups,
        }
    }

    pub fn for_view(experiences: &[Experience], view: &ViewState, palette: &Palette) -> Option<Self> {
        let selected = view.selected_id.as_deref()?;
        experiences
            .iter()
            .find(|experience| experience.id == selected)
            .map(|experience| Self::project(experience, palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::tests::palette;
    use crate::tests::experience;
    use crate::{CalendarDate, TimelineConfig};

    fn skilled() -> Experience {
        let mut exp = experience("codegraph", (2024, 3), None);
        exp.role = "Founder".to_string();
        exp.link = Some("https://codegraph.rofox.be".to_string());
        exp.skills.insert("lang".into(), vec!["C#".into(), "TypeScript".into()]);
        exp.skills.insert("mystery".into(), vec!["Alchemy".into()]);
        exp.skills.insert("empty".into(), Vec::new());
        exp
    }

    #[test]
    fn projects_selected_record() {
        let panel = DetailPanel::project(&skilled(), &palette());
        assert_eq!(panel.company, "codegraph company");
        assert_eq!(panel.role, "Founder");
        assert_eq!(panel.date_range, "Mar 2024 — Present");
        assert_eq!(panel.colors.border, "border-blue-500/50");
    }

    #[test]
    fn unknown_and_empty_skill_groups_are_omitted() {
        let panel = DetailPanel::project(&skilled(), &palette());
        assert_eq!(panel.skill_groups.len(), 1);
        assert_eq!(panel.skill_groups[0].title, "Languages");
        assert_eq!(panel.skill_groups[0].skills, vec!["C#", "TypeScript"]);
    }

    #[test]
    fn follows_view_selection() {
        let experiences = vec![skilled(), experience("other", (2020, 1), Some((2021, 1)))];
        let mut view = ViewState::new(&TimelineConfig::default(), CalendarDate::new(2026, 1, 1));
        assert!(DetailPanel::for_view(&experiences, &view, &palette()).is_none());

        view.select("other");
        let panel = DetailPanel::for_view(&experiences, &view, &palette()).unwrap();
        assert_eq!(panel.id, "other");

        view.select("ghost");
        assert!(DetailPanel::for_view(&experiences, &view, &palette()).is_none());
    }
}
