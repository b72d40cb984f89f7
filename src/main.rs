use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;

use swingtempo::cli::{init_tracing, Cli, CoachArgs, Command, PhaseAtArgs, ReportArgs, SimulateArgs, TableArgs};
use swingtempo::coaching::catalog::{
    DAILY_ROUTINE, DAILY_ROUTINE_TITLE, TECHNIQUE_CATALOG, WEEKLY_PLAN, WEEKLY_PLAN_TITLE,
};
use swingtempo::coaching::{compare, tempo_advice, CoachingReport, Priority, SwingComparison};
use swingtempo::config::{load_metrics, AppConfig};
use swingtempo::playback::{PlaybackDriver, PlaybackStatus, SimulatedClock};
use swingtempo::scoring::TempoSummary;
use swingtempo::types::{OPTIMAL_BACKSWING_RATIO, OPTIMAL_TOTAL_TEMPO};

/// Upper bound on simulated ticks for one run.
const MAX_SIMULATION_TICKS: f64 = 1_000_000.0;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::Report(args) => handle_report(&args),
        Command::Simulate(args) => handle_simulate(&args),
        Command::PhaseAt(args) => handle_phase_at(&args),
        Command::Coach(args) => handle_coach(&args),
        Command::View(args) => handle_view(&args),
    }
}

fn load_config(args: &TableArgs) -> Result<AppConfig> {
    AppConfig::from_override(args.phases.clone()).context("Failed to load phase table")
}

fn handle_report(args: &ReportArgs) -> Result<()> {
    let config = load_config(&args.table)?;
    let summary = TempoSummary::from_timeline(&config.timeline);

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "Tempo score: {}/100 ({})",
        summary.score, summary.rating.label
    );
    match summary.ratios.backswing_to_downswing {
        Some(ratio) => println!(
            "Backswing:Downswing {:.1}:1 (optimal {:.0}:1)",
            ratio, OPTIMAL_BACKSWING_RATIO
        ),
        None => println!("Backswing:Downswing n/a"),
    }
    let (low, high) = OPTIMAL_TOTAL_TEMPO;
    println!(
        "Total swing time {:.1}s (optimal {:.1}-{:.1}s)",
        summary.ratios.overall_tempo, low, high
    );

    println!("\nPhase breakdown:");
    for report in &summary.phases {
        println!(
            "   {:<16} {:.1}s - {:.1}s  {:.1}s / {:.1}s  {:>3.0}%  {}",
            report.name,
            report.start_time,
            report.end_time,
            report.duration,
            report.optimal,
            report.accuracy,
            report.grade.label()
        );
    }

    let advice = tempo_advice(&summary.ratios);
    if !advice.is_empty() {
        println!("\nTempo advice:");
        for line in advice {
            println!("   • {}", line);
        }
    }
    Ok(())
}

fn handle_simulate(args: &SimulateArgs) -> Result<()> {
    ensure!(
        args.step > 0.0 && args.step.is_finite(),
        "Step must be positive, got: {}",
        args.step
    );
    ensure!(
        args.rate > 0.0 && args.rate.is_finite(),
        "Rate must be positive, got: {}",
        args.rate
    );
    let config = load_config(&args.table)?;
    let total = config.timeline.total_duration();
    let clock = SimulatedClock::new(total).with_rate(args.rate);
    let mut driver = PlaybackDriver::new(config.timeline, clock);

    let needed = (total / (args.step * args.rate)).ceil();
    ensure!(
        needed.is_finite() && needed <= MAX_SIMULATION_TICKS,
        "Step {} at rate {} needs too many ticks to cover {:.2}s (limit {})",
        args.step,
        args.rate,
        total,
        MAX_SIMULATION_TICKS
    );
    let max_ticks = needed as usize + 2;
    info!(total, step = args.step, rate = args.rate, max_ticks, "simulating playback");

    let mut snapshot = driver.start();
    println!("{:>6.2}s  {}", snapshot.current_time, snapshot.current_phase);
    for _ in 0..max_ticks {
        driver.source_mut().advance(args.step);
        let next = driver.tick();
        if next.phase_index != snapshot.phase_index {
            println!("{:>6.2}s  {}", next.current_time, next.current_phase);
        }
        snapshot = next;
        if snapshot.status == PlaybackStatus::Stopped {
            break;
        }
    }
    println!(
        "Ended at {:.2}s in {}; tempo score {}/100 ({})",
        snapshot.current_time, snapshot.current_phase, snapshot.tempo_score, snapshot.rating.label
    );
    Ok(())
}

fn handle_phase_at(args: &PhaseAtArgs) -> Result<()> {
    let config = load_config(&args.table)?;
    println!("{}", config.timeline.phase_at(args.time).name);
    Ok(())
}

fn handle_coach(args: &CoachArgs) -> Result<()> {
    let metrics = load_metrics(&args.metrics)
        .with_context(|| format!("Failed to load swing metrics from {:?}", args.metrics))?;
    let report = CoachingReport::from_metrics(&metrics);

    println!(
        "{} critical, {} needs work, {} good",
        report.count(Priority::Critical),
        report.count(Priority::NeedsWork),
        report.count(Priority::Good)
    );
    for entry in &report.priorities {
        println!(
            "   {:<14} {:>8.2}  {}",
            entry.metric,
            entry.value,
            entry.priority.label()
        );
    }

    if !report.immediate.is_empty() {
        println!("\nImmediate:");
        for rec in &report.immediate {
            println!("   [{:?}] {}: {}", rec.urgency, rec.title, rec.description);
            println!("      → {}", rec.action);
        }
    }

    println!("\nEquipment:");
    for advice in &report.equipment {
        println!(
            "   {}: {} ({})",
            advice.category, advice.recommendation, advice.reason
        );
    }

    if let Some(previous_path) = &args.previous {
        let previous = load_metrics(previous_path).with_context(|| {
            format!("Failed to load previous swing metrics from {:?}", previous_path)
        })?;
        print_comparison(&compare(&metrics, &previous));
    }
    if args.plan {
        print_plan();
    }
    Ok(())
}

fn print_comparison(comparison: &SwingComparison) {
    println!("\nCompared with previous swing:");
    for change in &comparison.changes {
        let percentage = change
            .percentage
            .map_or_else(|| "n/a".to_string(), |p| format!("{:+.1}%", p));
        println!(
            "   {:<18} {:>8.1}{:<5} {:>+7.1}  {}",
            change.label, change.current, change.unit, change.diff, percentage
        );
    }
    println!("\nComparison advice:");
    for advice in &comparison.recommendations {
        println!(
            "   [{:?}] {}: {}",
            advice.priority, advice.category, advice.message
        );
        println!("      → {}", advice.action);
    }
}

fn print_plan() {
    println!("\nTechnique:");
    for area in &TECHNIQUE_CATALOG {
        println!("   {}", area.category);
        for tip in area.tips {
            println!(
                "      {} ({}, {}): {}",
                tip.title,
                tip.difficulty.label(),
                tip.time_to_improve,
                tip.description
            );
            println!("         drills: {}", tip.drills.join(", "));
        }
    }
    println!("\n{}:", DAILY_ROUTINE_TITLE);
    for exercise in &DAILY_ROUTINE {
        println!(
            "   {:<20} {:<10} {}",
            exercise.name, exercise.duration, exercise.reps
        );
    }
    println!("\n{}:", WEEKLY_PLAN_TITLE);
    for session in &WEEKLY_PLAN {
        println!(
            "   {:<10} {:<20} {}",
            session.day, session.focus, session.duration
        );
    }
}

fn handle_view(args: &TableArgs) -> Result<()> {
    let config = load_config(args)?;
    swingtempo::ui::launch_ui(&config).context("Tempo viewer failed")?;
    Ok(())
}
