use anyhow::Result;
use approx::assert_relative_eq;
use swingtempo::scoring::{phase_accuracy, tempo_rating, tempo_score, Grade, TempoSummary};
use swingtempo::timeline::SwingTimeline;
use swingtempo::types::SwingPhase;

const SWEEP_STEP: f64 = 0.001;

fn synthetic_table() -> Result<SwingTimeline> {
    Ok(SwingTimeline::new(vec![
        SwingPhase::new("Backswing", 0.0, 1.0, 1.0),
        SwingPhase::new("Downswing", 1.0, 1.5, 0.3),
        SwingPhase::new("Finish", 1.5, 3.0, 1.0),
    ])?)
}

fn sweep(timeline: &SwingTimeline) -> Vec<f64> {
    let steps = (timeline.total_duration() / SWEEP_STEP).round() as usize;
    (0..=steps)
        .map(|step| (step as f64 * SWEEP_STEP).min(timeline.total_duration()))
        .collect()
}

#[test]
fn every_time_in_range_maps_to_a_containing_phase() -> Result<()> {
    for timeline in [SwingTimeline::reference(), synthetic_table()?] {
        for time in sweep(&timeline) {
            let phase = timeline.phase_at(time);
            assert!(
                phase.contains(time),
                "{} not inside {} ({} - {})",
                time,
                phase.name,
                phase.start_time,
                phase.end_time
            );
        }
    }
    Ok(())
}

#[test]
fn phase_index_never_goes_backwards() -> Result<()> {
    for timeline in [SwingTimeline::reference(), synthetic_table()?] {
        let mut previous = 0;
        for time in sweep(&timeline) {
            let index = timeline.phase_index_at(time);
            assert!(index >= previous, "phase went backwards at {}", time);
            previous = index;
        }
        assert_eq!(previous, timeline.len() - 1);
    }
    Ok(())
}

#[test]
fn phases_partition_the_cycle_without_gaps() {
    let timeline = SwingTimeline::reference();
    let phases = timeline.phases();
    assert_eq!(phases[0].start_time, 0.0);
    for pair in phases.windows(2) {
        assert_eq!(pair[0].end_time, pair[1].start_time);
    }
    let covered: f64 = phases.iter().map(SwingPhase::duration).sum();
    assert_relative_eq!(covered, timeline.total_duration(), epsilon = 1e-9);
}

#[test]
fn accuracy_stays_within_bounds() {
    let durations = [0.01, 0.1, 0.4, 0.9, 1.0, 1.7, 3.0, 12.0];
    let optimals = [0.05, 0.4, 1.0, 2.5];
    for duration in durations {
        for optimal in optimals {
            let accuracy = phase_accuracy(&SwingPhase::new("P", 0.0, duration, optimal));
            assert!(
                (0.0..=100.0).contains(&accuracy),
                "accuracy {} out of range for {}/{}",
                accuracy,
                duration,
                optimal
            );
        }
    }
}

#[test]
fn tempo_score_is_rounded_mean_of_accuracies() -> Result<()> {
    let timeline = synthetic_table()?;
    let accuracies: Vec<f64> = timeline.phases().iter().map(phase_accuracy).collect();
    assert_relative_eq!(accuracies[0], 100.0, epsilon = 1e-9);
    assert_relative_eq!(accuracies[1], 80.0, epsilon = 1e-9);
    assert_relative_eq!(accuracies[2], 50.0, epsilon = 1e-9);
    assert_eq!(tempo_score(timeline.phases()), 77);
    Ok(())
}

#[test]
fn reference_table_summary() {
    let summary = TempoSummary::from_timeline(&SwingTimeline::reference());
    assert_eq!(summary.score, 89);
    assert_eq!(summary.rating.grade, Grade::Good);
    assert_eq!(summary.phases.len(), 7);
    let ratio = summary.ratios.backswing_to_downswing.unwrap_or_default();
    assert_relative_eq!(ratio, 1.6, epsilon = 1e-9);
    assert_relative_eq!(summary.ratios.overall_tempo, 4.0, epsilon = 1e-9);
    assert_relative_eq!(summary.phases[5].accuracy, 100.0, epsilon = 1e-9);
}

#[test]
fn rating_thresholds() {
    assert_eq!(tempo_rating(90.0).label, "Excellent");
    assert_eq!(tempo_rating(89.9).label, "Good");
    assert_eq!(tempo_rating(70.0).label, "Average");
    assert_eq!(tempo_rating(69.9).label, "Needs Work");
}
