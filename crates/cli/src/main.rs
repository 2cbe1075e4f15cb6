use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use giftwrap::sample::{draw_points, CloudCfg, CloudShape, ReplayToken};
use giftwrap::{calculate, GiftWrap, Point, TurnRule};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{HullDoc, PointsDoc};
use provenance::Payload;

#[derive(Parser)]
#[command(name = "giftwrap-cli")]
#[command(about = "Convex hulls of integer point sets")]
struct Cmd {
    /// Optional run label; propagated to logs and provenance
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the hull of a .json, .csv or .parquet point file
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = TurnArg::Exact)]
        turn: TurnArg,
    },
    /// Write a reproducible random point cloud (hull input format)
    Sample {
        #[arg(long, default_value_t = 64)]
        count: usize,
        #[arg(long, default_value_t = 1000)]
        half_extent: i32,
        #[arg(long, value_enum, default_value_t = ShapeArg::Square)]
        shape: ShapeArg,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum TurnArg {
    Exact,
    Rotate,
}

impl From<TurnArg> for TurnRule {
    fn from(t: TurnArg) -> Self {
        match t {
            TurnArg::Exact => TurnRule::Exact,
            TurnArg::Rotate => TurnRule::Rotate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ShapeArg {
    Square,
    Disk,
}

impl From<ShapeArg> for CloudShape {
    fn from(s: ShapeArg) -> Self {
        match s {
            ShapeArg::Square => CloudShape::Square,
            ShapeArg::Disk => CloudShape::Disk,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, out, turn } => hull(&input, &out, turn, cmd.tag).map(|_| ()),
        Action::Sample {
            count,
            half_extent,
            shape,
            seed,
            index,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                half_extent,
                shape: shape.into(),
            };
            sample(cfg, ReplayToken { seed, index }, &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

fn hull(input: &Path, out: &Path, turn: TurnArg, tag: Option<String>) -> Result<HullDoc> {
    tracing::info!(input = %input.display(), out = %out.display(), ?turn, tag = ?tag, "hull");
    let points = io::read_points(input)?;
    tracing::debug!(n = points.as_ref().map(Vec::len), "points_read");

    let wrap = GiftWrap::with_turn(turn.into());
    let hull = calculate(&wrap, points.as_deref())
        .with_context(|| format!("hull of {}", input.display()))?;
    let doc = HullDoc::new(hull);
    tracing::info!(vertices = doc.vertices, closed = doc.closed, "hull_done");

    io::write_json(out, &doc)?;
    let payload = Payload::new(
        "hull",
        json!({
            "input": input.to_string_lossy(),
            "turn": format!("{turn:?}").to_lowercase(),
            "n": points.as_ref().map(Vec::len),
        }),
    )
    .tagged(tag);
    provenance::write_sidecar(out, &payload)?;
    Ok(doc)
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(?cfg, ?tok, out = %out.display(), tag = ?tag, "sample");
    let points: Vec<Point> = draw_points(cfg, tok)?;
    io::write_json(
        out,
        &PointsDoc {
            points: Some(points),
        },
    )?;
    let payload = Payload::new("sample", json!({ "cfg": cfg, "replay": tok })).tagged(tag);
    provenance::write_sidecar(out, &payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({})).tagged(tag);
    println!(
        "{}",
        serde_json::to_string_pretty(&provenance::block(&payload, &[]))?
    );
    Ok(())
}
