use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bouba", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a shape and print its geometry as JSON.
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Integer seed for the random stream.
    #[arg(long, default_value_t = 0, conflicts_with = "hash")]
    seed: u64,

    /// Textual seed (e.g. a mint hash), folded into an integer seed.
    #[arg(long)]
    hash: Option<String>,

    /// Generation parameters JSON. Flags below override individual fields.
    #[arg(long)]
    params: Option<PathBuf>,

    /// Total circles in the loop, closing circle included.
    #[arg(long)]
    circles: Option<usize>,

    /// Lower bound for drawn radii.
    #[arg(long)]
    min_radius: Option<f64>,

    /// Upper bound for drawn radii.
    #[arg(long)]
    max_radius: Option<f64>,

    /// Keep fractional radii instead of truncating draws to integers.
    #[arg(long)]
    fractional_radii: bool,

    /// Whole-chain attempts before giving up.
    #[arg(long, default_value_t = bouba::DEFAULT_MAX_TRIES)]
    max_tries: u32,

    /// Traversal convention used to trace the outline.
    #[arg(long, value_enum, default_value_t = ConventionChoice::A)]
    convention: ConventionChoice,

    /// Canvas width used to compute a centering placement (requires --canvas-height).
    #[arg(long, requires = "canvas_height")]
    canvas_width: Option<u32>,

    /// Canvas height used to compute a centering placement (requires --canvas-width).
    #[arg(long, requires = "canvas_width")]
    canvas_height: Option<u32>,

    /// Output JSON path. Prints to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ConventionChoice {
    A,
    B,
}

#[derive(serde::Serialize)]
struct GeneratedShape<'a> {
    seed: u64,
    params: &'a bouba::GenerationParams,
    attempts: u64,
    convention: bouba::TraversalConvention,
    shape: &'a bouba::BoubaShape,
    contour: bouba::Contour,
    bounding_box: bouba::BoundingBox,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<bouba::Placement>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
    }
}

fn resolve_params(args: &GenerateArgs) -> anyhow::Result<bouba::GenerationParams> {
    let mut params = match &args.params {
        Some(path) => bouba::GenerationParams::from_path(path)?,
        None => bouba::GenerationParams::default(),
    };
    if let Some(n) = args.circles {
        params.circle_count = n;
    }
    if let Some(r) = args.min_radius {
        params.min_radius = r;
    }
    if let Some(r) = args.max_radius {
        params.max_radius = r;
    }
    if args.fractional_radii {
        params.integral_radii = false;
    }
    params.validate()?;
    Ok(params)
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args)?;
    let seed = match &args.hash {
        Some(hash) => bouba::seed_from_text(hash),
        None => args.seed,
    };
    let convention = match args.convention {
        ConventionChoice::A => bouba::TraversalConvention::A,
        ConventionChoice::B => bouba::TraversalConvention::B,
    };
    let opts = bouba::SessionOpts {
        max_tries: args.max_tries,
        convention,
        ..bouba::SessionOpts::default()
    };

    let mut session =
        bouba::ShapeSession::new(params, opts, bouba::SeededRandom::from_seed(seed))?;
    if session.resolve() != bouba::SessionStatus::Ready {
        let reason = session
            .last_rejection()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        anyhow::bail!(
            "no valid shape after {} tries (last rejection: {reason})",
            session.max_tries()
        );
    }

    let Some(shape) = session.shape() else {
        anyhow::bail!("ready session has no shape (bug)");
    };
    let placement = match (args.canvas_width, args.canvas_height) {
        (Some(w), Some(h)) => session.placement(bouba::Canvas::new(w, h)?),
        _ => None,
    };

    let doc = GeneratedShape {
        seed,
        params: session.params(),
        attempts: session.attempts(),
        convention: session.convention(),
        shape,
        contour: shape.contour(session.convention()),
        bounding_box: shape.bounding_box(),
        placement,
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &doc).with_context(|| "write shape JSON")?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &doc).with_context(|| "write shape JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}
