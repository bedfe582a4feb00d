mod provenance;
mod render;
mod source;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use giftwrap::api::{
    convex_hull_with, draw_point_cloud, CloudCfg, CloudShape, ReplayToken, WrapCfg,
};
use provenance::{ensure_parent_dir, write_sidecar, Payload};
use render::{render_svg, HullDoc};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Gift-wrapping convex hulls for CSV point files")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a CSV with `x`,`y` columns and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Give up after this many hull vertices (default: number of points)
        #[arg(long)]
        max_steps: Option<usize>,
    },
    /// Render a hull JSON as an SVG figure
    Figure {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "Convex Hull")]
        title: String,
    },
    /// Write a reproducible random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Box)]
        shape: Shape,
        #[arg(long, default_value_t = 1.0)]
        half_extent: f64,
        /// Snap coordinates to multiples of this step
        #[arg(long)]
        grid: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Box,
    Disk,
}

impl From<Shape> for CloudShape {
    fn from(s: Shape) -> Self {
        match s {
            Shape::Box => CloudShape::Box,
            Shape::Disk => CloudShape::Disk,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            max_steps,
        } => hull(&input, &out, max_steps, cmd.tag),
        Action::Figure { from, out, title } => figure(&from, &out, &title, cmd.tag),
        Action::Sample {
            count,
            seed,
            index,
            shape,
            half_extent,
            grid,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.into(),
                half_extent,
                grid,
                ..CloudCfg::default()
            };
            sample(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: &Path, out: &Path, max_steps: Option<usize>, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "hull");
    let points = source::read_points_csv(input)?;
    let hull = convex_hull_with(&points, WrapCfg { max_steps })
        .with_context(|| format!("computing hull of {}", input.display()))?;
    tracing::info!(
        points = points.len(),
        hull_vertices = hull.len(),
        area = hull.signed_area(),
        "hull_done"
    );
    if !hull.is_polygon() {
        tracing::warn!(vertices = hull.len(), "hull is degenerate (not a polygon)");
    }
    println!("points: {}", points.len());
    println!("hull vertices: {}", hull.len());

    ensure_parent_dir(out)?;
    let doc = HullDoc::new(&points, &hull);
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "max_steps": max_steps,
        "points": points.len(),
        "hull_vertices": hull.len(),
    });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn figure(from: &Path, out: &Path, title: &str, tag: Option<String>) -> Result<()> {
    tracing::info!(from = %from.display(), out = %out.display(), "figure");
    let raw = std::fs::read(from).with_context(|| format!("reading {}", from.display()))?;
    let doc: HullDoc =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", from.display()))?;
    ensure_parent_dir(out)?;
    std::fs::write(out, render_svg(&doc, title))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({ "from": from.to_string_lossy(), "title": title });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, "sample");
    let points = draw_point_cloud(cfg, tok)?;
    ensure_parent_dir(out)?;
    source::write_points_csv(out, &points)?;
    let params = serde_json::json!({
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "half_extent": cfg.half_extent,
        "grid": cfg.grid,
        "seed": tok.seed,
        "index": tok.index,
    });
    write_sidecar(out, Payload::new(params, tag))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": giftwrap::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
