use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "paretoviz", version, about = "Render Pareto fronts into charts and animations")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one chart from a data file.
    Render(RenderArgs),
    /// Render every chart suited to each input's dimension.
    Batch(BatchArgs),
    /// Render one chart per input and join them into a looping GIF.
    Animate(AnimateArgs),
    /// Print the tick locations chosen for a value range.
    Ticks(TicksArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input data file (whitespace-delimited, one header line).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path. Camera-sweep charts write `<stem>_1.png` to `<stem>_5.png`.
    #[arg(long)]
    out: PathBuf,

    /// Chart kind (plot2d, plot3d, parallel, bubble, radar, heatmap, convergence).
    #[arg(long)]
    chart: String,

    /// JSON file with chart options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chart title; defaults to the output file stem.
    #[arg(long)]
    title: Option<String>,

    /// Chart subtitle.
    #[arg(long)]
    subtitle: Option<String>,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// Directory the charts are written to.
    #[arg(long)]
    out_dir: PathBuf,

    /// JSON file with chart options applied to every chart.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input data files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Chart kind drawn for every input.
    #[arg(long)]
    chart: String,

    /// Output GIF path.
    #[arg(long, default_value = paretoviz::DEFAULT_ANIMATION_FILE)]
    out: PathBuf,

    /// JSON file with chart options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input data files, one frame each (five for camera-sweep charts).
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

#[derive(Parser, Debug)]
struct TicksArgs {
    /// Lower end of the range.
    #[arg(long, allow_negative_numbers = true)]
    min: f64,

    /// Upper end of the range.
    #[arg(long, allow_negative_numbers = true)]
    max: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Batch(args) => cmd_batch(args),
        Command::Animate(args) => cmd_animate(args),
        Command::Ticks(args) => cmd_ticks(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn read_overrides(path: Option<&Path>) -> anyhow::Result<paretoviz::ChartOverrides> {
    Ok(match path {
        Some(p) => paretoviz::ChartOverrides::from_json_file(p)?,
        None => paretoviz::ChartOverrides::default(),
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let kind: paretoviz::ChartKind = args.chart.parse()?;
    let mut overrides = read_overrides(args.config.as_deref())?;
    if args.title.is_some() {
        overrides.common.title = args.title;
    }
    if args.subtitle.is_some() {
        overrides.common.subtitle = args.subtitle;
    }

    let config = paretoviz::ChartConfig::from_overrides(kind, &overrides);
    let written = paretoviz::render_chart_from_file(&config, &args.in_path, &args.out)?;
    for path in written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let overrides = read_overrides(args.config.as_deref())?;
    let report = paretoviz::render_batch(&args.inputs, &args.out_dir, &overrides);
    eprintln!(
        "rendered {} files, {} failures",
        report.rendered.len(),
        report.failures.len()
    );
    for (path, err) in &report.failures {
        eprintln!("  {}: {err}", path.display());
    }
    if !report.is_clean() {
        anyhow::bail!("{} of the batch charts failed", report.failures.len());
    }
    Ok(())
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let overrides = read_overrides(args.config.as_deref())?;
    let mut animator = paretoviz::Animator::new();
    let frames = animator.plot_to_animate(&args.inputs, &overrides, &args.chart)?;
    if frames == 0 {
        anyhow::bail!("no frames rendered for chart '{}'", args.chart);
    }
    let out = animator.animate(Some(&args.out))?;
    eprintln!("wrote {} ({frames} frames)", out.display());
    Ok(())
}

fn cmd_ticks(args: TicksArgs) -> anyhow::Result<()> {
    let ticks = paretoviz::locate_ticks(args.min, args.max);
    println!("step {}", ticks.step);
    for label in ticks.labels() {
        println!("{label}");
    }
    Ok(())
}
