use career_core::{
    format_date_range, CalendarDate, DetailPanel, TimelineConfig, TimelineLayout, ViewState,
    YearMonth,
};
use career_data::{check_dataset, load_dataset_path, DataIssue};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn fixture_loads_in_declared_order() {
    let dataset = load_dataset_path(fixture_path("experiences.json")).expect("fixture should load");

    let ids: Vec<&str> = dataset.experiences.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["sioux", "asml", "codegraph", "photography"]);
    assert_eq!(dataset.row_labels, vec!["Company", "Role", "Project", "Personal"]);

    let skill_keys: Vec<&str> = dataset.experiences[1]
        .skills
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(skill_keys, vec!["lang", "tools"]);
}

#[test]
fn fixture_issues_are_reported() {
    let dataset = load_dataset_path(fixture_path("experiences.json")).expect("fixture should load");

    assert_eq!(
        check_dataset(&dataset),
        vec![
            DataIssue::UnknownSkillCategory {
                id: "codegraph".into(),
                category: "cloud".into(),
            },
            DataIssue::UnknownColor {
                id: "photography".into(),
                color: "amber".into(),
            },
        ]
    );
}

#[test]
fn fixture_layout_at_fixed_date() {
    let dataset = load_dataset_path(fixture_path("experiences.json")).expect("fixture should load");
    let config = TimelineConfig::default();
    let view = ViewState::new(&config, CalendarDate::new(2024, 6, 15));
    let layout = TimelineLayout::compute(&dataset, &view, &config);

    let codegraph = layout.bar("codegraph").expect("codegraph bar");
    assert_close(codegraph.left, 8.0 * 320.0 + 5.0 * 320.0 / 12.0);
    assert_close(codegraph.width, 320.0);
    assert_eq!(codegraph.badges.len(), 5);
    assert_eq!(codegraph.hidden_badges, 0);

    let photography = layout.bar("photography").expect("photography bar");
    let scale = view.scale(&config);
    assert_close(
        photography.width,
        scale.offset(YearMonth::new(2024, 6)) - scale.offset(YearMonth::new(2019, 9)),
    );
    assert!(photography.colors.node.contains("gray"));

    assert_close(layout.today_x, scale.offset(YearMonth::new(2024, 6)) + 14.0 / 30.0 * 320.0 / 12.0);
}

#[test]
fn fixture_detail_panel_hides_unknown_skill_groups() {
    let dataset = load_dataset_path(fixture_path("experiences.json")).expect("fixture should load");
    let config = TimelineConfig::default();
    let mut view = ViewState::new(&config, CalendarDate::new(2024, 6, 15));
    view.select("codegraph");

    let panel = DetailPanel::for_view(&dataset.experiences, &view, &dataset.palette)
        .expect("selected record");
    assert_eq!(panel.date_range, "Jun 2024 — Jun 2025");
    let titles: Vec<&str> = panel.skill_groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Languages"]);

    let photography = dataset.experience("photography").expect("photography");
    assert_eq!(format_date_range(photography), "Sep 2019 — Present");
}

#[test]
fn missing_file_is_reported() {
    let err = load_dataset_path(fixture_path("nope.json")).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
