use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "SWINGTEMPO_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "swingtempo",
    version,
    about = "Swing phase timing, tempo scoring and playback simulation"
)]
pub struct Cli {
    /// Log at debug level unless SWINGTEMPO_LOG says otherwise.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the per-phase breakdown, tempo score and ratios.
    Report(ReportArgs),
    /// Play the swing on a simulated clock and print each phase change.
    Simulate(SimulateArgs),
    /// Print the phase active at a given time.
    PhaseAt(PhaseAtArgs),
    /// Print coaching priorities and recommendations for a metrics file.
    Coach(CoachArgs),
    /// Open the interactive tempo viewer.
    View(TableArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// JSON phase table; the built-in reference table is used when omitted.
    #[arg(long, value_name = "PATH")]
    pub phases: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub table: TableArgs,
    /// Emit the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub table: TableArgs,
    /// Wall-clock seconds per simulated tick.
    #[arg(long, default_value_t = 0.05)]
    pub step: f64,
    /// Playback speed multiplier.
    #[arg(long, default_value_t = 1.0)]
    pub rate: f64,
}

#[derive(Args, Debug, Clone)]
pub struct PhaseAtArgs {
    /// Elapsed seconds into the swing.
    #[arg(value_name = "TIME", allow_negative_numbers = true)]
    pub time: f64,
    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug, Clone)]
pub struct CoachArgs {
    /// JSON file with swing metrics (camelCase keys).
    #[arg(value_name = "METRICS")]
    pub metrics: PathBuf,
    /// Earlier swing to compare against.
    #[arg(long, value_name = "PATH")]
    pub previous: Option<PathBuf>,
    /// Also print the technique catalog and practice plan.
    #[arg(long)]
    pub plan: bool,
}

/// Installs the fmt subscriber on stderr; later calls are no-ops.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn report_defaults_to_builtin_table() {
        let cli = Cli::try_parse_from(["swingtempo", "report"]).unwrap();
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert!(args.table.phases.is_none());
        assert!(!args.json);
    }

    #[test]
    fn simulate_defaults() {
        let cli = Cli::try_parse_from(["swingtempo", "simulate", "--phases", "t.json"]).unwrap();
        let Command::Simulate(args) = cli.command else {
            panic!("expected simulate command");
        };
        assert_eq!(args.step, 0.05);
        assert_eq!(args.rate, 1.0);
        assert_eq!(args.table.phases.unwrap().to_str(), Some("t.json"));
    }

    #[test]
    fn phase_at_accepts_negative_time() {
        let cli = Cli::try_parse_from(["swingtempo", "phase-at", "-1.5"]).unwrap();
        let Command::PhaseAt(args) = cli.command else {
            panic!("expected phase-at command");
        };
        assert_eq!(args.time, -1.5);
    }

    #[test]
    fn coach_accepts_previous_swing() {
        let cli = Cli::try_parse_from(["swingtempo", "coach", "now.json", "--previous", "then.json"])
            .unwrap();
        let Command::Coach(args) = cli.command else {
            panic!("expected coach command");
        };
        assert_eq!(args.metrics.to_str(), Some("now.json"));
        assert_eq!(args.previous.unwrap().to_str(), Some("then.json"));
        assert!(!args.plan);
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["swingtempo", "report", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
