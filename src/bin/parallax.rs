use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parallax", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene snapshot for one scroll/time sample as JSON.
    Sample(SampleArgs),
    /// Write evenly spaced scroll frames as JSON.
    Sweep(SweepArgs),
    /// Plot every scroll channel over progress into a PNG.
    Chart(ChartArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Container scroll progress in [0, 1] (clamped).
    #[arg(long, allow_hyphen_values = true)]
    progress: f64,

    /// Page scroll progress for parallax layers; defaults to --progress.
    #[arg(long, allow_hyphen_values = true)]
    page_progress: Option<f64>,

    /// Seconds since mount.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Motion config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for decorations.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Sample the first (pre-hydration) render.
    #[arg(long)]
    initial: bool,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Number of intervals (at least 1); `steps + 1` frames are written.
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    steps: u32,

    /// Motion config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ChartArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Motion config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Chart(args) => cmd_chart(args),
    }
}

fn load_motion(path: Option<&Path>) -> anyhow::Result<parallax::MotionConfig> {
    match path {
        Some(p) => parallax::MotionConfig::from_path(p)
            .with_context(|| format!("load motion config '{}'", p.display())),
        None => Ok(parallax::MotionConfig::default()),
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let phase = if args.initial {
        parallax::RenderPhase::Initial
    } else {
        parallax::RenderPhase::Hydrated
    };
    let config = parallax::RenderConfig {
        phase,
        seed: args.seed,
        motion: load_motion(args.config.as_deref())?,
    };
    let scene = parallax::Scene::new(config)?;

    let input = parallax::SceneInput::new(args.progress)
        .page(args.page_progress.unwrap_or(args.progress))
        .elapsed(args.time);
    let snapshot = scene.sample(input);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &snapshot).context("write snapshot JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let mapper = parallax::ScrollProgressMapper::new(load_motion(args.config.as_deref())?)?;
    let mut driver = parallax::ScrollDriver::new(mapper);
    let updates = driver.drain(parallax::Progress::sweep(args.steps));

    match &args.out {
        Some(path) => {
            ensure_parent_dir(path)?;
            let f = File::create(path)
                .with_context(|| format!("create sweep output '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &updates).context("write sweep JSON")?;
            w.flush()?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            serde_json::to_writer_pretty(&mut out, &updates).context("write sweep JSON")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_chart(args: ChartArgs) -> anyhow::Result<()> {
    let mapper = parallax::ScrollProgressMapper::new(load_motion(args.config.as_deref())?)?;
    ensure_parent_dir(&args.out)?;
    parallax::chart::save_chart(&mapper, args.width, args.height, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}
