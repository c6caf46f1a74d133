use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use deckflow::{DeckEvent, DeckManifest, DeckSession, FrameIndex, InputEvent};

#[derive(Parser, Debug)]
#[command(name = "deckflow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a deck manifest and print a summary.
    Validate(ValidateArgs),
    /// Play a scripted input timeline deterministically.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input deck manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input deck manifest JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback script JSON: a list of `{ "frame": n, "event": ... }`.
    #[arg(long)]
    script: PathBuf,

    /// Number of frames to play.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Print the final snapshot as JSON instead of a summary line.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(serde::Deserialize, Debug)]
struct ScriptEntry {
    frame: u64,
    event: InputEvent,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let manifest = DeckManifest::from_path(&args.in_path)
        .with_context(|| format!("load deck '{}'", args.in_path.display()))?;
    println!(
        "ok: '{}', {} slides at {}/{} fps",
        manifest.title,
        manifest.slide_count(),
        manifest.fps.num,
        manifest.fps.den
    );
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let manifest = DeckManifest::from_path(&args.in_path)
        .with_context(|| format!("load deck '{}'", args.in_path.display()))?;

    let script_json = std::fs::read_to_string(&args.script)
        .with_context(|| format!("read script '{}'", args.script.display()))?;
    let mut entries: Vec<ScriptEntry> = serde_json::from_str(&script_json)
        .with_context(|| format!("decode script '{}'", args.script.display()))?;
    entries.sort_by_key(|e| e.frame);

    let mut session = DeckSession::new(&manifest)?;
    report(&session.begin(FrameIndex(0)));

    let mut pending = entries.into_iter().peekable();
    for frame in 0..args.frames {
        let now = FrameIndex(frame);
        while pending.peek().is_some_and(|e| e.frame <= frame) {
            let entry = pending.next().unwrap();
            let events = session
                .input(entry.event, now)
                .with_context(|| format!("script event at frame {}", entry.frame))?;
            report(&events);
        }
        report(&session.tick(now));
    }

    let snapshot = session.snapshot();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!(
            "slide {}/{} progress {:.2}{}",
            snapshot.current + 1,
            snapshot.count,
            snapshot.progress,
            if snapshot.transitioning {
                " (transitioning)"
            } else {
                ""
            }
        );
    }
    eprintln!("played {} frames", args.frames);
    Ok(())
}

fn report(events: &[DeckEvent]) {
    for event in events {
        match event {
            DeckEvent::CounterTick { slide, key, text, .. } => {
                tracing::trace!(slide, key = %key, text = %text, "counter tick");
            }
            DeckEvent::CounterDone { slide, key, text, .. } => {
                tracing::info!(slide, key = %key, text = %text, "counter done");
            }
            DeckEvent::ChartBarRevealed { slide, bar } => {
                tracing::info!(slide, bar, "chart bar revealed");
            }
            other => {
                tracing::info!(event = ?other, "deck");
            }
        }
    }
}
