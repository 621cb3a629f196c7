use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use glance_charts::fmt::format_kb;
use glance_charts::{
    ChartTheme, Scene, Tooltip, Vec2, histogram_chart, ratio_chart, scene_to_svg,
};
use glance_records::RecordSet;
use glance_stats::{
    compute_audit_stats, compute_level_histogram, compute_project_history, compute_xp_histogram,
    viewer_summary,
};

mod config;

use config::GlanceConfig;

#[derive(Debug, Parser)]
#[command(
    name = "glance",
    about = "Render profile statistics charts from a record-set snapshot"
)]
struct Args {
    /// Record-set snapshot (JSON) handed over by the fetch layer.
    snapshot: PathBuf,

    /// TOML config overriding the aggregation defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the rendered SVG charts.
    #[arg(long, default_value = "out")]
    out: PathBuf,

    /// Hit-test a chart-space point ("X,Y") against the level histogram
    /// and print its tooltip text.
    #[arg(long)]
    probe: Option<String>,
}

fn parse_probe(raw: &str) -> Result<Vec2, Box<dyn Error>> {
    let (x, y) = raw.split_once(',').ok_or("probe must be X,Y")?;
    Ok(Vec2::new(x.trim().parse()?, y.trim().parse()?))
}

fn write_chart(dir: &Path, name: &str, scene: &Scene) -> Result<(), Box<dyn Error>> {
    let path = dir.join(name);
    fs::write(&path, scene_to_svg(scene))?;
    log::info!(
        "wrote {} ({} primitives)",
        path.display(),
        scene.primitives.len()
    );
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = match &args.config {
        Some(path) => GlanceConfig::from_path(path)?,
        None => GlanceConfig::default(),
    };
    let records = RecordSet::from_json_file(&args.snapshot)?;
    log::info!(
        "snapshot: {} user rows, {} transactions, {} enrollments",
        records.user.len(),
        records.transaction.len(),
        records.event_user.len()
    );

    let audit = compute_audit_stats(&records);
    let xp = compute_xp_histogram(&records, &cfg.stats);
    let levels = compute_level_histogram(&records);
    let viewer = viewer_summary(&records);
    log::info!(
        "viewer: level {}, total xp {:.0}, audit ratio {:.2}",
        viewer.level,
        viewer.total_xp,
        audit.ratio
    );

    let theme = ChartTheme::default();
    let ratio_scene = ratio_chart(&audit, &theme);
    // Highlight the viewer's own bucket in each histogram.
    let width = cfg.stats.xp_bucket_width;
    let xp_highlight = if width > 0.0 {
        ((viewer.total_xp / width).floor() * width) as i64
    } else {
        0
    };
    let xp_scene = histogram_chart(&xp, xp_highlight, "XP", &theme);
    let level_scene = histogram_chart(&levels, viewer.level, "Level", &theme);

    fs::create_dir_all(&args.out)?;
    write_chart(&args.out, "audit_ratio.svg", &ratio_scene)?;
    write_chart(&args.out, "xp_histogram.svg", &xp_scene)?;
    write_chart(&args.out, "level_histogram.svg", &level_scene)?;
    if xp_scene.is_empty() {
        log::warn!("no XP data; xp_histogram.svg is empty");
    }
    if level_scene.is_empty() {
        log::warn!("no level data; level_histogram.svg is empty");
    }

    let history = compute_project_history(&records);
    if !history.is_empty() {
        println!("Project history ({} entries):", history.len());
        for entry in &history {
            println!(
                "  {:>10}  {:<24}  {}",
                format_kb(entry.amount),
                entry.name,
                entry.created_at
            );
        }
    }

    if let Some(raw) = &args.probe {
        let cursor = parse_probe(raw)?;
        let mut tip = Tooltip::new();
        tip.pointer_move(&level_scene, cursor);
        if tip.visible {
            println!("probe {raw}: {}", tip.content);
        } else {
            println!("probe {raw}: no target");
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
