//! balanx-preview - play the landing page animations in a terminal.
//!
//! Useful for tuning: scroll windows print as tables, and the analysis
//! terminal plays through the same driver and cadence as the browser.

use std::io::Write;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result, bail};
use balanx_motion::runtime::{Playback, play};
use balanx_motion::{DelaySource, Frame, Jitter, LineStyle, Script, Sequencer, Timings, Tuning};
use balanx_motion::{fade_opacity, sentence_opacity};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "balanx-preview", version, about = "Preview Balanx scroll and typing animations")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    /// JSON tuning overrides
    #[arg(long, global = true)]
    tuning: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the analysis terminal script
    Type {
        /// Jitter seed (defaults to the tuning seed, then the clock)
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many full passes
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        loops: u64,
        /// Compress all delays to a few milliseconds
        #[arg(long)]
        fast: bool,
    },
    /// Print fade-out opacity across a scroll window
    Fade {
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        #[arg(long, default_value_t = 0.0)]
        floor: f64,
        #[arg(long, default_value_t = 50.0)]
        step: f64,
    },
    /// Print story sentence opacities per scroll offset
    Reveal {
        #[arg(long, default_value_t = 100.0)]
        step: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so tables on stdout stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("Failed to load tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    match args.command {
        Command::Type { seed, loops, fast } => run_type(&tuning, seed, loops, fast).await,
        Command::Fade {
            start,
            end,
            floor,
            step,
        } => print_fade(start, end, floor, step),
        Command::Reveal { step } => print_reveal(&tuning, step),
    }
}

async fn run_type(tuning: &Tuning, seed: Option<u64>, loops: u64, fast: bool) -> Result<()> {
    let seed = seed
        .or(tuning.terminal.seed)
        .unwrap_or_else(clock_seed);
    let timings = if fast {
        Timings {
            min_char_delay_ms: 1,
            max_char_delay_ms: 3,
            line_pause_ms: 20,
            cooldown_ms: 200,
        }
    } else {
        tuning.terminal.timings
    };
    info!(seed, ?timings, loops, "playing analysis script");

    let sequencer = Sequencer::new(Script::analysis_demo(), timings, Jitter::seeded(seed))
        .context("Invalid terminal timings")?;
    let (playback, mut rx) = stream_frames(sequencer);

    let mut stdout = std::io::stdout();
    let mut printed = 0;
    let mut passes = 0;
    while let Some(frame) = rx.recv().await {
        let completed = if frame.typing {
            frame.active_line
        } else {
            frame.lines.len()
        };
        while printed < completed {
            writeln!(stdout, "\r\x1b[2K{}", paint(&frame.lines[printed]))?;
            printed += 1;
        }

        if frame.typing {
            if let Some(partial) = frame.lines.get(frame.active_line) {
                write!(stdout, "\r\x1b[2K{}{}", paint(partial), "_".green())?;
            }
        } else {
            passes += 1;
            printed = 0;
            writeln!(stdout, "{}", format!("-- pass {passes} complete --").as_str().dimmed())?;
            debug!(passes, "typewriter pass finished");
            if passes >= loops {
                break;
            }
        }
        stdout.flush()?;
    }

    playback.cancel();
    Ok(())
}

/// Run `sequencer` on the tokio driver and forward every frame over a channel.
fn stream_frames<D>(sequencer: Sequencer<D>) -> (Playback, mpsc::UnboundedReceiver<Frame>)
where
    D: DelaySource + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel::<Frame>();
    let playback = play(sequencer, move |frame| {
        let _ = tx.send(frame);
    });
    (playback, rx)
}

fn paint(line: &str) -> colored::ColoredString {
    match LineStyle::classify(line) {
        LineStyle::Comment => line.bright_black(),
        LineStyle::Assignment => line.blue(),
        LineStyle::Keyword => line.purple(),
        LineStyle::Literal => line.yellow(),
        LineStyle::Plain => line.green(),
    }
}

fn print_fade(start: f64, end: f64, floor: f64, step: f64) -> Result<()> {
    let step = step.max(1.0);
    let rows = scan_offsets((start - 2.0 * step).max(0.0), end + 2.0 * step, step)?;
    println!("{:>10}  {:>8}", "scroll_y", "opacity");
    for y in rows {
        println!("{:>10.1}  {:>8.3}", y, fade_opacity(y, start, end, floor));
    }
    Ok(())
}

fn print_reveal(tuning: &Tuning, step: f64) -> Result<()> {
    let step = step.max(1.0);
    let thresholds = &tuning.story.sentence_thresholds;
    let last = thresholds.iter().map(|t| t.end()).fold(0.0, f64::max);
    let rows = scan_offsets(0.0, last + step, step)?;

    let header: Vec<String> = (0..thresholds.len()).map(|i| format!("s{}", i + 1)).collect();
    println!("{:>10}  {}", "scroll_y", header.join("      "));
    for y in rows {
        let row: Vec<String> = (0..thresholds.len())
            .map(|i| format!("{:.3}", sentence_opacity(i, y, thresholds)))
            .collect();
        println!("{:>10.1}  {}", y, row.join("   "));
    }
    Ok(())
}

/// Offsets from `from` to `to` inclusive, `step` apart.
fn scan_offsets(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !(from.is_finite() && to.is_finite() && step.is_finite()) {
        bail!("Scroll range must be finite (got {from}..{to}, step {step})");
    }
    let mut rows = Vec::new();
    let mut y = from;
    while y <= to {
        rows.push(y);
        let next = y + step;
        // Offsets this large no longer move by `step`
        if next <= y {
            break;
        }
        y = next;
    }
    Ok(rows)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_type_subcommand() {
        let args = Args::try_parse_from(["balanx-preview", "type", "--seed", "9", "--fast"]).unwrap();
        match args.command {
            Command::Type { seed, loops, fast } => {
                assert_eq!(seed, Some(9));
                assert_eq!(loops, 1);
                assert!(fast);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_zero_loops() {
        assert!(Args::try_parse_from(["balanx-preview", "type", "--loops", "0"]).is_err());
    }

    #[test]
    fn scan_offsets_is_bounded() {
        assert_eq!(scan_offsets(0.0, 100.0, 50.0).unwrap(), vec![0.0, 50.0, 100.0]);
        assert!(scan_offsets(0.0, f64::INFINITY, 50.0).is_err());
        assert!(scan_offsets(f64::NAN, 10.0, 1.0).is_err());
        // step vanishes against the offset; still terminates
        assert_eq!(scan_offsets(1e20, 1e20 + 1e6, 1.0).unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn stream_frames_forwards_each_step() {
        let sequencer = Sequencer::new(
            Script::new(["ab"]).unwrap(),
            Timings::default(),
            balanx_motion::FixedDelay(std::time::Duration::from_millis(10)),
        )
        .unwrap();
        let (playback, mut rx) = stream_frames(sequencer);

        let first = rx.recv().await.unwrap();
        assert_eq!(first.lines, vec!["a"]);
        let second = rx.recv().await.unwrap();
        assert_eq!(second.lines, vec!["ab"]);
        playback.cancel();
    }

    #[test]
    fn parses_global_tuning_after_subcommand() {
        let args =
            Args::try_parse_from(["balanx-preview", "reveal", "--tuning", "site.json"]).unwrap();
        assert_eq!(args.tuning, Some(PathBuf::from("site.json")));
    }
}
