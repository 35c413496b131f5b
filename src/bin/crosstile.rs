use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use crosstile::{
    Engine, EngineBuilder, EngineConfig, NoPacer, RasterSurface, RecordingSurface, SurfaceSize,
};

#[derive(Parser, Debug)]
#[command(name = "crosstile", version)]
struct Cli {
    /// Log engine events to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run whole passes without pacing and write the result as a PNG.
    Frame(FrameArgs),
    /// Run the paced animation for a while, stop it, and write the result as a PNG.
    Run(RunArgs),
    /// Run whole passes on a recording surface and print the draw calls as JSON.
    Trace(TraceArgs),
}

#[derive(Args, Debug)]
struct ParamArgs {
    /// JSON engine config. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Square surface size in pixels.
    #[arg(long)]
    size: Option<u32>,

    /// Side length of each square.
    #[arg(long, allow_negative_numbers = true)]
    side_length: Option<f64>,

    /// Delay between steps, in milliseconds.
    #[arg(long, allow_negative_numbers = true)]
    step_delay_ms: Option<f64>,

    /// Color seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Number of passes to run.
    #[arg(long, default_value_t = 1)]
    passes: usize,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// How long to let the animation run before stopping it.
    #[arg(long, default_value_t = 1000)]
    millis: u64,

    /// Clear the surface halfway through the run. The pass in flight keeps drawing.
    #[arg(long)]
    clear: bool,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Number of passes to run.
    #[arg(long, default_value_t = 1)]
    passes: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(params: &ParamArgs) -> anyhow::Result<EngineConfig> {
    let mut cfg = match &params.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => EngineConfig::default(),
    };
    if let Some(size) = params.size {
        cfg.surface = SurfaceSize {
            width: size,
            height: size,
        };
    }
    if let Some(side) = params.side_length {
        cfg.side_length = side;
    }
    if let Some(delay) = params.step_delay_ms {
        cfg.step_delay_ms = delay;
    }
    if params.seed.is_some() {
        cfg.seed = params.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn raster_builder(cfg: &EngineConfig) -> anyhow::Result<EngineBuilder<RasterSurface>> {
    let surface = RasterSurface::new(cfg.surface.width, cfg.surface.height)?;
    Ok(Engine::builder(surface).config(cfg))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.params)?;
    let engine = raster_builder(&cfg)?.pacer(NoPacer).build();

    let reports = engine.run_passes(args.passes)?;
    let crosses: u64 = reports.iter().map(|r| r.crosses).sum();
    tracing::info!(passes = reports.len(), crosses, "passes complete");

    write_png(&engine, &args.out)
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.params)?;
    let engine = raster_builder(&cfg)?.build();

    engine.start()?;
    if args.clear {
        let half = args.millis / 2;
        std::thread::sleep(Duration::from_millis(half));
        engine.clear();
        tracing::info!(after_ms = half, "surface cleared");
        std::thread::sleep(Duration::from_millis(args.millis - half));
    } else {
        std::thread::sleep(Duration::from_millis(args.millis));
    }
    engine.stop();
    tracing::info!("waiting for the pass in flight");
    engine.wait_idle()?;

    write_png(&engine, &args.out)
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.params)?;
    let surface = RecordingSurface::new(cfg.surface.width, cfg.surface.height);
    let engine = Engine::builder(surface).config(&cfg).pacer(NoPacer).build();

    engine.run_passes(args.passes)?;
    let calls = engine.with_surface(|s| s.take_calls());

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &calls).context("write draw calls")?;
    println!();
    Ok(())
}

fn write_png(engine: &Engine<RasterSurface>, out: &Path) -> anyhow::Result<()> {
    let frame = engine.with_surface(|s| s.snapshot())?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let data = unpremultiply(frame.data);
    image::save_buffer_with_format(
        out,
        &data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}

/// PNG stores straight alpha; the surface keeps premultiplied pixels.
fn unpremultiply(mut data: Vec<u8>) -> Vec<u8> {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    data
}

