use serde::Serialize;

use crate::timeline::SwingTimeline;
use crate::types::{SwingPhase, TempoRatios};

/// Accuracy points lost per second of duration error.
const ACCURACY_SENSITIVITY: f64 = 100.0;
const EXCELLENT_THRESHOLD: f64 = 90.0;
const GOOD_THRESHOLD: f64 = 80.0;
const AVERAGE_THRESHOLD: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    Good,
    Average,
    NeedsWork,
}

impl Grade {
    /// Inclusive lower bounds: 90, 80, 70. NaN falls through to `NeedsWork`.
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Grade::Excellent
        } else if score >= GOOD_THRESHOLD {
            Grade::Good
        } else if score >= AVERAGE_THRESHOLD {
            Grade::Average
        } else {
            Grade::NeedsWork
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent",
            Grade::Good => "Good",
            Grade::Average => "Average",
            Grade::NeedsWork => "Needs Work",
        }
    }

    pub fn style_class(self) -> &'static str {
        match self {
            Grade::Excellent => "rating-excellent",
            Grade::Good => "rating-good",
            Grade::Average => "rating-average",
            Grade::NeedsWork => "rating-needs-work",
        }
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Grade::Excellent => [34, 197, 94],
            Grade::Good => [59, 130, 246],
            Grade::Average => [234, 179, 8],
            Grade::NeedsWork => [239, 68, 68],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoRating {
    pub grade: Grade,
    pub label: &'static str,
    pub style_class: &'static str,
}

/// `max(0, 100 - |duration - optimal| * 100)`, kept within `[0, 100]`.
pub fn phase_accuracy(phase: &SwingPhase) -> f64 {
    let error = (phase.duration() - phase.optimal).abs();
    (100.0 - error * ACCURACY_SENSITIVITY).clamp(0.0, 100.0)
}

/// Rounded mean of per-phase accuracy; 0 for an empty slice.
pub fn tempo_score(phases: &[SwingPhase]) -> u32 {
    if phases.is_empty() {
        return 0;
    }
    let total: f64 = phases.iter().map(phase_accuracy).sum();
    (total / phases.len() as f64).round() as u32
}

/// Total over all reals: scores above 100 rate `Excellent`, NaN rates `Needs Work`.
pub fn tempo_rating(score: f64) -> TempoRating {
    let grade = Grade::from_score(score);
    TempoRating {
        grade,
        label: grade.label(),
        style_class: grade.style_class(),
    }
}

/// Per-phase line of the breakdown shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseReport {
    pub name: String,
    pub start_time: f64,
    pub end_time: f64,
    pub duration: f64,
    pub optimal: f64,
    pub accuracy: f64,
    pub grade: Grade,
}

impl PhaseReport {
    pub fn from_phase(phase: &SwingPhase) -> Self {
        let accuracy = phase_accuracy(phase);
        Self {
            name: phase.name.clone(),
            start_time: phase.start_time,
            end_time: phase.end_time,
            duration: phase.duration(),
            optimal: phase.optimal,
            accuracy,
            grade: Grade::from_score(accuracy),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoSummary {
    pub score: u32,
    pub rating: TempoRating,
    pub ratios: TempoRatios,
    pub phases: Vec<PhaseReport>,
}

impl TempoSummary {
    pub fn from_timeline(timeline: &SwingTimeline) -> Self {
        let score = tempo_score(timeline.phases());
        Self {
            score,
            rating: tempo_rating(score as f64),
            ratios: timeline.tempo_ratios(),
            phases: phase_reports(timeline),
        }
    }
}

pub fn phase_reports(timeline: &SwingTimeline) -> Vec<PhaseReport> {
    timeline
        .phases()
        .iter()
        .map(PhaseReport::from_phase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_is_perfect_at_optimum() {
        let phase = SwingPhase::new("Impact", 1.0, 1.5, 0.5);
        assert_eq!(phase_accuracy(&phase), 100.0);
    }

    #[test]
    fn accuracy_bottoms_out_after_one_second_error() {
        let long = SwingPhase::new("Finish", 0.0, 2.5, 1.0);
        assert_eq!(phase_accuracy(&long), 0.0);
        let short = SwingPhase::new("Finish", 0.0, 0.2, 1.4);
        assert_eq!(phase_accuracy(&short), 0.0);
    }

    #[test]
    fn rating_boundaries() {
        assert_eq!(tempo_rating(90.0).label, "Excellent");
        assert_eq!(tempo_rating(89.9).label, "Good");
        assert_eq!(tempo_rating(80.0).label, "Good");
        assert_eq!(tempo_rating(70.0).label, "Average");
        assert_eq!(tempo_rating(69.9).label, "Needs Work");
    }

    #[test]
    fn rating_out_of_range_inputs() {
        assert_eq!(tempo_rating(140.0).grade, Grade::Excellent);
        assert_eq!(tempo_rating(-5.0).grade, Grade::NeedsWork);
        assert_eq!(tempo_rating(f64::NAN).grade, Grade::NeedsWork);
        assert_eq!(tempo_rating(f64::NAN).style_class, "rating-needs-work");
    }

    #[test]
    fn empty_score_is_zero() {
        assert_eq!(tempo_score(&[]), 0);
    }
}
