//! `sleepcalc`: suggest bedtimes or wake times that end on a sleep-cycle boundary.
//!
//! Usage:
//! ```bash
//! # Going to bed at 23:30: when should I wake up?
//! sleepcalc bedtime 23:30
//!
//! # Need to be up at 7:00: when should I go to bed?
//! sleepcalc waketime 700
//!
//! # Going to bed right now, machine-readable output
//! sleepcalc bedtime --json
//!
//! # Pin "now" instead of reading the local clock
//! sleepcalc waketime 07:00 --now 21:15
//! ```

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sleep_engine::{calculate, MinuteOfDay, Mode, Recommendation};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sleepcalc",
    version,
    about = "Sleep-cycle calculator",
    long_about = "Recommends wake times for a given bedtime, or bedtimes for a given wake time, \
                  aligned to 90-minute sleep cycles plus 14 minutes to fall asleep."
)]
struct Cli {
    /// Whether TIME is when you go to bed or when you need to wake up
    #[arg(value_enum)]
    mode: ModeArg,

    /// Anchor time (HH:MM, H:MM, HHMM or HMM); defaults to the current local time
    time: Option<String>,

    /// Current time of day used for relative labels (defaults to the local clock)
    #[arg(long, value_name = "HH:MM")]
    now: Option<MinuteOfDay>,

    /// Print recommendations as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// TIME is a bedtime; suggest wake times
    #[value(alias = "bed")]
    Bedtime,
    /// TIME is a wake time; suggest bedtimes
    #[value(alias = "wake")]
    Waketime,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Bedtime => Mode::Bedtime,
            ModeArg::Waketime => Mode::WakeTime,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let clock = MinuteOfDay::from(chrono::Local::now().time());
    let now = cli.now.unwrap_or(clock);
    let anchor = cli.time.unwrap_or_else(|| clock.to_string());
    let mode = Mode::from(cli.mode);
    debug!(%anchor, %mode, %now, "calculating");

    let recommendations = calculate(&anchor, mode, now)?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut stdout, &recommendations)
            .context("failed to write JSON output")?;
        writeln!(stdout)?;
    } else {
        write!(stdout, "{}", render_text(mode, &recommendations))?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// One header line, then one line per recommendation in engine order.
fn render_text(mode: Mode, recommendations: &[Recommendation]) -> String {
    let header = match mode {
        Mode::Bedtime => "Wake up at:",
        Mode::WakeTime => "Go to bed at:",
    };

    let mut out = format!("{header}\n");
    for rec in recommendations {
        let day = match rec.day_offset {
            0 => String::new(),
            d if d > 0 => format!(" (+{d}d)"),
            d => format!(" ({d}d)"),
        };
        out.push_str(&format!(
            "  {} cycles  {}{:<6}  {} of sleep  {:<7}  ({})\n",
            rec.cycle_count,
            rec.result_time,
            day,
            rec.sleep_duration(),
            rec.quality,
            rec.relative_label,
        ));
    }
    out
}
