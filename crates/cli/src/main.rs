use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use whirlpool::{build_crease_grid, build_outline_grid, Grid, Params};

mod provenance;
mod viewport;

use viewport::Viewport;

#[derive(Parser)]
#[command(name = "whirlpool-cli")]
#[command(about = "Whirlpool twist-fold tessellation grid generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the crease-vertex grid and write it as a JSON artifact
    Crease(GridArgs),
    /// Compute the paper-outline grid and write it as a JSON artifact
    Outline(GridArgs),
}

#[derive(Args)]
struct GridArgs {
    /// Polygon order (number of radial spokes), at least 3
    #[arg(long, default_value_t = 6)]
    n: usize,
    /// Twist angle per spoke, degrees in (0, 180/n]
    #[arg(long, default_value_t = 20.0)]
    rho: f64,
    /// Diagonal fold angle, degrees in (0, (180 - 360/n)/2]
    #[arg(long, default_value_t = 30.0)]
    sigma: f64,
    /// Number of tessellation rows
    #[arg(long, default_value_t = 3)]
    rows: usize,
    /// Base unit length of the first triangle edge
    #[arg(long, default_value_t = 100.0)]
    size: f64,
    /// Output path for the JSON artifact
    #[arg(long)]
    out: String,
    /// Also emit pixel coordinates fitted to WIDTHxHEIGHT
    #[arg(long)]
    fit: Option<String>,
    /// Margin (pixels) around the fitted figure
    #[arg(long, default_value_t = 5.0)]
    margin: f64,
}

/// Which of the two engine grids to compute.
#[derive(Clone, Copy)]
enum GridKind {
    Crease,
    Outline,
}

impl GridKind {
    fn label(self) -> &'static str {
        match self {
            GridKind::Crease => "crease",
            GridKind::Outline => "outline",
        }
    }

    fn build(self, params: Params) -> Result<Grid, whirlpool::GridError> {
        match self {
            GridKind::Crease => build_crease_grid(params),
            GridKind::Outline => build_outline_grid(params),
        }
    }
}

/// Parameter record embedded in the artifact and provenance sidecar.
/// Angles stay in degrees here, matching the command line.
#[derive(Clone, Copy, Serialize)]
struct ParamsRecord {
    n: usize,
    rho_deg: f64,
    sigma_deg: f64,
    rows: usize,
    size: f64,
}

impl ParamsRecord {
    fn from_args(args: &GridArgs) -> Self {
        Self {
            n: args.n,
            rho_deg: args.rho,
            sigma_deg: args.sigma,
            rows: args.rows,
            size: args.size,
        }
    }

    /// Engine parameters: degrees convert to radians at this boundary.
    fn to_params(self) -> Params {
        Params::new(
            self.n,
            self.rho_deg.to_radians(),
            self.sigma_deg.to_radians(),
            self.rows,
            self.size,
        )
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Crease(args) => generate(GridKind::Crease, args),
        Action::Outline(args) => generate(GridKind::Outline, args),
    }
}

fn generate(kind: GridKind, args: GridArgs) -> Result<()> {
    let record = ParamsRecord::from_args(&args);
    tracing::info!(
        kind = kind.label(),
        n = record.n,
        rho_deg = record.rho_deg,
        sigma_deg = record.sigma_deg,
        rows = record.rows,
        "generate"
    );

    let grid = kind
        .build(record.to_params())
        .with_context(|| format!("building {} grid", kind.label()))?;

    let (rows, cols) = grid.shape();
    tracing::info!(rows, cols, "grid built");

    let mut doc = json!({
        "kind": kind.label(),
        "params": record,
        "shape": [rows, cols],
        "points": points_json(&grid),
    });

    if let Some(fit) = &args.fit {
        let (width, height) = parse_fit(fit)?;
        let vp = Viewport::fit(&grid, width, height, args.margin)
            .context("empty grid cannot be fitted")?;
        tracing::info!(zoom = vp.zoom, "viewport fitted");
        doc["viewport"] = json!({
            "width": width,
            "height": height,
            "center": [vp.center.x, vp.center.y],
            "zoom": vp.zoom,
        });
        doc["pixels"] = pixels_json(&grid, &vp);
    }

    write_artifact(&args.out, &doc)?;
    provenance::write_sidecar(&args.out, json!({ "kind": kind.label(), "params": record }))?;
    Ok(())
}

fn points_json(grid: &Grid) -> serde_json::Value {
    json!(grid
        .rows()
        .iter()
        .map(|row| row.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>())
        .collect::<Vec<_>>())
}

fn pixels_json(grid: &Grid, vp: &Viewport) -> serde_json::Value {
    json!(grid
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|p| {
                    let q = vp.apply(*p);
                    [q.x, q.y]
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>())
}

/// Parse a `WIDTHxHEIGHT` viewport spec, e.g. `600x600`.
fn parse_fit(spec: &str) -> Result<(f64, f64)> {
    let (w, h) = spec
        .split_once('x')
        .with_context(|| format!("--fit expects WIDTHxHEIGHT, got `{spec}`"))?;
    let width: f64 = w.trim().parse().context("viewport width")?;
    let height: f64 = h.trim().parse().context("viewport height")?;
    Ok((width, height))
}

fn write_artifact(out: &str, doc: &serde_json::Value) -> Result<()> {
    let path = Path::new(out);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
