use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arscreen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a script of button presses and write one PNG per redraw.
    Run(RunArgs),
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Print the default screen configuration as JSON.
    DefaultConfig,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Session script JSON.
    #[arg(long)]
    script: PathBuf,

    /// Screen configuration JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the PNG sequence.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Time of the frame, in ms since the screen appeared.
    #[arg(long, default_value_t = 0)]
    at_ms: u64,

    /// Session script JSON; presses up to `--at-ms` are applied first.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Screen configuration JSON (defaults when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Add this many objects before rendering (after the script's presses).
    #[arg(long, default_value_t = 0)]
    add: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(args),
        Command::Frame(args) => cmd_frame(args),
        Command::DefaultConfig => cmd_default_config(),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<arscreen::ScreenConfig> {
    match path {
        Some(p) => arscreen::ScreenConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(arscreen::ScreenConfig::default()),
    }
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let script = arscreen::SessionScript::from_path(&args.script)
        .with_context(|| format!("load script '{}'", args.script.display()))?;

    let mut sess = arscreen::ScreenSession::new(cfg)?;
    let mut sink = arscreen::PngSequenceSink::new(&args.out);
    let stats = sess.run(&script, &mut sink)?;

    eprintln!(
        "wrote {} frames to {} ({} ticks, {} skipped, {} presses, {} ui failures)",
        stats.frames_rendered,
        args.out.display(),
        stats.ticks_fired,
        stats.ticks_skipped,
        stats.events_dispatched,
        stats.ui_failures,
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let mut script = match &args.script {
        Some(p) => arscreen::SessionScript::from_path(p)
            .with_context(|| format!("load script '{}'", p.display()))?,
        None => arscreen::SessionScript::idle(args.at_ms),
    };
    script.duration_ms = script.duration_ms.max(args.at_ms);
    for _ in 0..args.add {
        script = script.press(args.at_ms, arscreen::UiEvent::Add);
    }

    let mut sess = arscreen::ScreenSession::new(cfg)?;
    let frame = sess.snapshot_at(&script, arscreen::Millis(args.at_ms))?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    arscreen::write_png(&args.out, &frame)?;

    eprintln!(
        "wrote {} ({} objects)",
        args.out.display(),
        sess.screen().objects().len()
    );
    Ok(())
}

fn cmd_default_config() -> anyhow::Result<()> {
    println!("{}", arscreen::ScreenConfig::default().to_json_pretty()?);
    Ok(())
}
