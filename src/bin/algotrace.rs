use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use algotrace::{
    AlgorithmInput, PlaybackController, PlaybackState, Scheduler as _, SessionConfig,
    SortAlgorithm, StepSequence, TextObserver,
};

#[derive(Parser, Debug)]
#[command(name = "algotrace", version)]
struct Cli {
    /// Session config JSON (playback speed bounds and input limits).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a trace and write it as JSON.
    Trace(TraceArgs),
    /// Print step descriptions up to an index.
    Transcript(TranscriptArgs),
    /// Trace a sort given on the command line and print every step.
    Sort(SortArgs),
    /// Play a trace in real time through the playback controller.
    Play(PlayArgs),
    /// Print the trace fingerprint and step count.
    Fingerprint(InputArgs),
}

#[derive(Parser, Debug)]
struct InputArgs {
    /// Input algorithm JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TranscriptArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Last step to include (0-based); the whole trace when omitted.
    #[arg(long)]
    upto: Option<usize>,
}

#[derive(Parser, Debug)]
struct SortArgs {
    /// bubble, selection, insertion, merge, quick, or heap.
    #[arg(long)]
    algorithm: SortAlgorithm,

    /// Comma or space separated integers, e.g. "5,2,8,1".
    #[arg(long)]
    array: String,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Delay between steps in milliseconds, clamped to the configured bounds.
    #[arg(long)]
    speed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args, &config),
        Command::Transcript(args) => cmd_transcript(args, &config),
        Command::Sort(args) => cmd_sort(args, &config),
        Command::Play(args) => cmd_play(args, &config),
        Command::Fingerprint(args) => cmd_fingerprint(args, &config),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SessionConfig> {
    match path {
        Some(p) => SessionConfig::from_path(p)
            .with_context(|| format!("load session config '{}'", p.display())),
        None => Ok(SessionConfig::default()),
    }
}

fn generate_from(args: &InputArgs, config: &SessionConfig) -> anyhow::Result<StepSequence> {
    let input = AlgorithmInput::from_path(&args.in_path)
        .with_context(|| format!("read input '{}'", args.in_path.display()))?;
    let steps = algotrace::generate(&input, &config.limits)
        .with_context(|| format!("generate {} trace", input.kind()))?;
    Ok(steps)
}

fn cmd_trace(args: TraceArgs, config: &SessionConfig) -> anyhow::Result<()> {
    let steps = generate_from(&args.input, config)?;
    let json = serde_json::to_string_pretty(&steps).context("serialize trace")?;
    match args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(&out, json)
                .with_context(|| format!("write trace '{}'", out.display()))?;
            eprintln!("wrote {} steps to {}", steps.len(), out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_transcript(args: TranscriptArgs, config: &SessionConfig) -> anyhow::Result<()> {
    let steps = generate_from(&args.input, config)?;
    let text = match args.upto {
        Some(upto) => steps.transcript(upto),
        None => steps.full_transcript(),
    };
    println!("{text}");
    Ok(())
}

fn cmd_sort(args: SortArgs, config: &SessionConfig) -> anyhow::Result<()> {
    let array = algotrace::parse_number_list(&args.array).context("parse --array")?;
    let input = AlgorithmInput::Sort {
        algorithm: args.algorithm,
        array,
    };
    let steps = algotrace::generate(&input, &config.limits)
        .with_context(|| format!("generate {} trace", args.algorithm.name()))?;
    for (i, step) in steps.iter().enumerate() {
        println!("-- step {}/{} --", i + 1, steps.len());
        print!("{}", algotrace::render_step(step));
    }
    Ok(())
}

fn cmd_play(args: PlayArgs, config: &SessionConfig) -> anyhow::Result<()> {
    let steps = generate_from(&args.input, config)?;
    let total = steps.len();

    let mut ctl = PlaybackController::new(config.playback)?;
    if let Some(ms) = args.speed {
        let speed = ctl.set_speed(ms);
        if speed.millis() != ms {
            tracing::warn!(requested_ms = ms, speed_ms = speed.millis(), "speed clamped");
        }
    }
    ctl.add_observer(Box::new(TextObserver::new(std::io::stdout()).with_total(total)));
    ctl.load(steps);
    ctl.play();

    // The controller's clock is virtual; advance it by exactly the time slept.
    while let Some(deadline) = ctl.next_deadline() {
        let wait = deadline.saturating_sub(ctl.scheduler().now());
        std::thread::sleep(wait);
        ctl.pump(wait);
    }

    if ctl.state() != PlaybackState::Complete {
        anyhow::bail!("playback stopped in state {:?}", ctl.state());
    }
    Ok(())
}

fn cmd_fingerprint(args: InputArgs, config: &SessionConfig) -> anyhow::Result<()> {
    let steps = generate_from(&args, config)?;
    println!("{} {}", steps.fingerprint(), steps.len());
    Ok(())
}
