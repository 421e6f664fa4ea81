use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrollmorph", version)]
struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the crossfade frame at one or more progress values.
    Sample(SampleArgs),
    /// Print every channel at evenly spaced progress values.
    Table(TableArgs),
    /// Print the scroll progress of an element from its geometry.
    Progress(ProgressArgs),
    /// Print count-up labels at the given elapsed times.
    Count(CountArgs),
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Scene JSON (defaults to the built-in preset).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Progress values in [0, 1].
    #[arg(long, required = true, num_args = 1..)]
    progress: Vec<f64>,

    /// Hover weight (0 = rest, 1 = hovered).
    #[arg(long, default_value_t = 0.0)]
    hover: f64,
}

#[derive(Parser, Debug)]
struct TableArgs {
    /// Scene JSON (defaults to the built-in preset).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of intervals; prints steps + 1 rows.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

#[derive(Parser, Debug)]
struct ProgressArgs {
    /// Scene JSON providing the scroll window (defaults to "start end" .. "end start").
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Viewport height in px.
    #[arg(long)]
    viewport: f64,

    /// Element top relative to the viewport top, in px.
    #[arg(long, allow_hyphen_values = true)]
    top: f64,

    /// Element height in px.
    #[arg(long)]
    height: f64,
}

#[derive(Parser, Debug)]
struct CountArgs {
    /// Final value.
    #[arg(long)]
    end: u64,

    /// Animation length in ms.
    #[arg(long, default_value_t = scrollmorph::CountUp::DEFAULT_DURATION_MS)]
    duration_ms: f64,

    /// Suffix appended to the number.
    #[arg(long, default_value = "")]
    suffix: String,

    /// Elapsed times in ms.
    #[arg(long, required = true, num_args = 1..)]
    at: Vec<f64>,
}

#[derive(serde::Serialize)]
struct SampleRow<'a, T: serde::Serialize> {
    progress: f64,
    #[serde(flatten)]
    data: &'a T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Sample(args) => cmd_sample(args),
        Command::Table(args) => cmd_table(args),
        Command::Progress(args) => cmd_progress(args),
        Command::Count(args) => cmd_count(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: Option<&Path>) -> anyhow::Result<scrollmorph::Scene> {
    let cfg = match path {
        Some(path) => scrollmorph::SceneConfig::from_path(path)
            .with_context(|| format!("load scene '{}'", path.display()))?,
        None => scrollmorph::SceneConfig::default(),
    };
    cfg.resolve().context("resolve scene")
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_deref())?;
    for p in args.progress {
        let progress = scrollmorph::Progress::new(p);
        let frame = scene.section.frame(progress, args.hover);
        let row = SampleRow {
            progress: progress.get(),
            data: &frame,
        };
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}

fn cmd_table(args: TableArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_deref())?;
    for (p, out) in scene.section.channels.table(args.steps)? {
        let row = SampleRow {
            progress: p,
            data: &out,
        };
        println!("{}", serde_json::to_string(&row)?);
    }
    Ok(())
}

fn cmd_progress(args: ProgressArgs) -> anyhow::Result<()> {
    let scene = load_scene(args.in_path.as_deref())?;
    let mut tracker = scrollmorph::ScrollTracker::new(args.viewport)?;
    let id = scrollmorph::ElementId(0);
    tracker.observe(id, scene.window);

    let bounds = scrollmorph::Rect::new(0.0, args.top, 1.0, args.top + args.height);
    let progress = tracker
        .sample(id, bounds)
        .context("element is not observed (bug)")?;
    println!("{}", progress.get());
    Ok(())
}

fn cmd_count(args: CountArgs) -> anyhow::Result<()> {
    let counter = scrollmorph::CountUp::new(args.end)
        .with_duration_ms(args.duration_ms)
        .with_suffix(args.suffix);
    counter.validate()?;
    for ms in args.at {
        println!("{}", counter.label_at(ms));
    }
    Ok(())
}
