use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use polysect::geom2::rand::{draw_pair, RadialCfg, ReplayToken, VertexCount};
use polysect::{intersects, GeomCfg, Plane, Polygon};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

#[derive(Parser)]
#[command(name = "polysect")]
#[command(about = "Test whether two planar polygons intersect")]
struct Cmd {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Project two point loops to 2D and print whether the polygons intersect
    Check {
        /// Polygon A as "x,y,z; x,y,z; ..." (z optional)
        #[arg(long, allow_hyphen_values = true)]
        a: Option<String>,
        /// Polygon B, same format as --a
        #[arg(long, allow_hyphen_values = true)]
        b: Option<String>,
        /// Read both polygons from a .json or .csv file instead
        #[arg(long, conflicts_with_all = ["a", "b"])]
        input: Option<PathBuf>,
        /// Plane to project onto (xy drops z)
        #[arg(long, default_value = "xy")]
        plane: Plane,
        /// Relative collinearity tolerance
        #[arg(long, default_value_t = GeomCfg::default().eps_orient)]
        eps: f64,
        /// Skip the bounding-box prefilter
        #[arg(long)]
        no_prefilter: bool,
        /// Also write a JSON result (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Draw random polygon pairs and count how many intersect
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 100)]
        pairs: u64,
        /// Max center offset of the second polygon
        #[arg(long, default_value_t = 2.5)]
        spread: f64,
        #[arg(long, default_value_t = 3)]
        min_vertices: usize,
        #[arg(long, default_value_t = 12)]
        max_vertices: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Check {
            a,
            b,
            input,
            plane,
            eps,
            no_prefilter,
            out,
        } => check(CheckArgs {
            a,
            b,
            input,
            plane,
            eps,
            no_prefilter,
            out,
        }),
        Action::Sample {
            seed,
            pairs,
            spread,
            min_vertices,
            max_vertices,
        } => sample(seed, pairs, spread, min_vertices, max_vertices),
        Action::Report => report(),
    }
}

struct CheckArgs {
    a: Option<String>,
    b: Option<String>,
    input: Option<PathBuf>,
    plane: Plane,
    eps: f64,
    no_prefilter: bool,
    out: Option<PathBuf>,
}

fn check(args: CheckArgs) -> Result<()> {
    if !args.eps.is_finite() || args.eps < 0.0 {
        bail!("--eps must be a finite, non-negative number");
    }
    let (pts_a, pts_b) = match (&args.input, &args.a, &args.b) {
        (Some(path), _, _) => input::read_pair(path)?,
        (None, Some(a), Some(b)) => (
            input::parse_inline(a).context("parsing --a")?,
            input::parse_inline(b).context("parsing --b")?,
        ),
        _ => bail!("provide --input FILE, or both --a and --b"),
    };
    let poly_a = Polygon::from_points3(&pts_a, args.plane).context("polygon A")?;
    let poly_b = Polygon::from_points3(&pts_b, args.plane).context("polygon B")?;
    tracing::debug!(%poly_a, %poly_b, "projected");

    let cfg = GeomCfg {
        bbox_prefilter: !args.no_prefilter,
        ..GeomCfg::default()
    }
    .with_eps(args.eps);
    let result = intersects(&poly_a, &poly_b, cfg);
    tracing::info!(
        vertices_a = poly_a.len(),
        vertices_b = poly_b.len(),
        plane = ?args.plane,
        eps = args.eps,
        result,
        "check"
    );
    println!("{result}");

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        let doc = serde_json::json!({
            "intersects": result,
            "a": poly_a.vertices().iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
            "b": poly_b.vertices().iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
        });
        std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({
            "input": args.input.as_ref().map(|p| p.to_string_lossy().into_owned()),
            "plane": format!("{:?}", args.plane),
            "eps": args.eps,
            "bbox_prefilter": cfg.bbox_prefilter,
        });
        let sidecar = provenance::write_sidecar(out, provenance::Payload::new("check", params))?;
        tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote");
    }
    Ok(())
}

fn sample(
    seed: u64,
    pairs: u64,
    spread: f64,
    min_vertices: usize,
    max_vertices: usize,
) -> Result<()> {
    if !spread.is_finite() || spread < 0.0 {
        bail!("--spread must be a finite, non-negative number");
    }
    if min_vertices > max_vertices {
        bail!("--min-vertices must not exceed --max-vertices");
    }
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform {
            min: min_vertices,
            max: max_vertices,
        },
        ..RadialCfg::default()
    };
    let mut hits = 0u64;
    for i in 0..pairs {
        let tok = ReplayToken::new(seed, i);
        let Some((a, b)) = draw_pair(cfg, tok, spread) else {
            bail!("sample {i}: degenerate draw");
        };
        let hit = a.intersects(&b);
        tracing::debug!(index = i, vertices_a = a.len(), vertices_b = b.len(), hit, "pair");
        if hit {
            hits += 1;
        }
    }
    tracing::info!(seed, pairs, hits, "sample");
    let summary = serde_json::json!({
        "seed": seed,
        "pairs": pairs,
        "spread": spread,
        "intersecting": hits,
        "disjoint": pairs - hits,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::describe("report", serde_json::json!({}), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
