use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use tripboard_types::{FilterKind, Point, SortKind};

use crate::args::{Cli, Commands};
use crate::config::Config;
use crate::presentation::{console, tui};
use crate::sample;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing();
    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        None => {
            console::render_guidance();
            Ok(())
        }
        Some(Commands::Show { sort, filter }) => {
            let sort = pick_sort(sort.as_deref(), &config);
            let filter = pick_filter(filter.as_deref(), &config);
            let points = load_points(&cli, &config)?;

            let now = Utc::now();
            let mut visible = tripboard_engine::filter::apply(filter, &points, now);
            tripboard_engine::sort::sort_points(&mut visible, sort);

            console::render_list(&visible, sort, filter, use_color(&cli));
            Ok(())
        }
        Some(Commands::Board { sort, filter }) => {
            let sort = pick_sort(sort.as_deref(), &config);
            let filter = pick_filter(filter.as_deref(), &config);
            let points = load_points(&cli, &config)?;
            tui::run_board(points, sort, filter)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TRIPBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn pick_sort(tag: Option<&str>, config: &Config) -> SortKind {
    match tag {
        Some(tag) => SortKind::from_tag(tag),
        None => config.default_sort(),
    }
}

fn pick_filter(tag: Option<&str>, config: &Config) -> FilterKind {
    match tag {
        Some(tag) => FilterKind::from_tag(tag),
        None => config.default_filter(),
    }
}

fn use_color(cli: &Cli) -> bool {
    !cli.no_color && std::io::stdout().is_terminal()
}

fn load_points(cli: &Cli, config: &Config) -> Result<Vec<Point>> {
    let path: Option<PathBuf> = cli
        .points
        .clone()
        .or_else(|| config.board.points_file.clone());

    let Some(path) = path else {
        return Ok(sample::sample_board());
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read points file {}", path.display()))?;
    let points: Vec<Point> = serde_json::from_str(&content)
        .with_context(|| format!("parse points file {}", path.display()))?;
    for point in &points {
        point
            .validate()
            .with_context(|| format!("invalid point {}", point.id))?;
    }
    tracing::debug!(count = points.len(), path = %path.display(), "points loaded");
    Ok(points)
}
