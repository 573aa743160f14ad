use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use career_core::{
    format_date_range, CalendarDate, Clock, DetailPanel, FixedClock, SystemClock, TimelineConfig,
    TimelineLayout, ViewState,
};
use career_data::{check_dataset, load_dataset_path};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "career-cli",
    about = "Inspect a career timeline dataset (experiences.json)."
)]
struct Args {
    /// Path to the experiences JSON file.
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Log more detail to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print bar positions, the "Today" marker and the selected detail panel.
    Layout {
        /// Pixels per year; clamped to the configured zoom range.
        #[arg(long)]
        zoom: Option<u32>,
        /// Render as of this date (YYYY-MM-DD) instead of the system clock.
        #[arg(long)]
        today: Option<NaiveDate>,
        /// Experience id to select.
        #[arg(long)]
        select: Option<String>,
        /// Emit the layout as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Report data issues.
    Check {
        /// Exit with an error when any issue is found.
        #[arg(long)]
        strict: bool,
    },
    /// Print the formatted date range of one experience.
    Range {
        #[arg(long)]
        id: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let input = args
        .input
        .ok_or_else(|| anyhow!("--input <FILE> is required"))?;
    let dataset = load_dataset_path(&input)
        .with_context(|| format!("could not load dataset {:?}", input))?;
    tracing::info!(experiences = dataset.experiences.len(), "dataset loaded");

    match args.command {
        Command::Layout {
            zoom,
            today,
            select,
            json,
        } => {
            let config = TimelineConfig::default();
            let now = match today {
                Some(date) => FixedClock(CalendarDate::from_datelike(&date)).today(),
                None => SystemClock.today(),
            };
            let mut view = ViewState::new(&config, now);
            if let Some(zoom) = zoom {
                view.zoom_level = config.clamp_zoom(zoom);
            }
            if let Some(id) = select.as_deref() {
                view.select(id);
            }

            let layout = TimelineLayout::compute(&dataset, &view, &config);
            let detail = DetailPanel::for_view(&dataset.experiences, &view, &dataset.palette);

            if json {
                let output = serde_json::json!({ "layout": layout, "detail": detail });
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            println!(
                "Zoom: {}px/year  Grid: {:.0}x{:.0}px  Today: {:.2}px",
                view.zoom_level,
                layout.total_width,
                layout.grid_height(),
                layout.today_x
            );
            for bar in &layout.bars {
                println!(
                    "{:<20} left {:>9.2}  width {:>8.2}  top {:>6.1}{}{}",
                    bar.id,
                    bar.left,
                    bar.width,
                    bar.top,
                    if bar.ongoing { "  (ongoing)" } else { "" },
                    if bar.hidden_badges > 0 {
                        format!("  +{} badges", bar.hidden_badges)
                    } else {
                        String::new()
                    }
                );
            }
            if let Some(panel) = detail {
                println!("\n{} — {}\n{}\n{}", panel.company, panel.role, panel.date_range, panel.description);
                for group in &panel.skill_groups {
                    println!("  {}: {}", group.title, group.skills.join(", "));
                }
            } else if let Some(id) = select {
                tracing::warn!(%id, "selected experience not found");
            }
        }
        Command::Check { strict } => {
            let issues = check_dataset(&dataset);
            if issues.is_empty() {
                println!("No issues found.");
            }
            for issue in &issues {
                println!("- {issue}");
            }
            if strict && !issues.is_empty() {
                bail!("{} data issue(s) found", issues.len());
            }
        }
        Command::Range { id } => {
            let experience = dataset
                .experience(&id)
                .ok_or_else(|| anyhow!("no experience with id {id:?}"))?;
            println!("{}", format_date_range(experience));
        }
    }

    Ok(())
}
