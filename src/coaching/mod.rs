//! Threshold rules that turn swing metrics into coaching advice.

pub mod catalog;
pub mod comparison;

use serde::{Deserialize, Serialize};

use crate::types::{TempoRatios, OPTIMAL_BACKSWING_RATIO, OPTIMAL_TOTAL_TEMPO};

pub use comparison::{compare, ComparisonAdvice, ComparisonPriority, MetricChange, SwingComparison};

/// Distance outside the optimal range at which an issue becomes critical.
const CRITICAL_MARGIN: f64 = 10.0;
/// Allowed deviation from the 3:1 ratio before advising on it.
const RATIO_TOLERANCE: f64 = 0.5;

/// Per-swing measurements supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SwingMetrics {
    pub tempo: f64,
    pub posture: f64,
    pub follow_through: f64,
    pub ball_striking: f64,
    pub ball_spin: f64,
    pub ball_straightness: f64,
    pub attack_angle: f64,
    pub swing_path: f64,
    pub club_face_angle: f64,
    pub smash_factor: f64,
    pub club_head_speed: f64,
    pub carry_distance: f64,
    pub backswing_length: f64,
    pub weight_transfer: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    Good,
    NeedsWork,
    Critical,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Good => "good",
            Priority::NeedsWork => "needs-work",
            Priority::Critical => "critical",
        }
    }
}

pub fn improvement_priority(value: f64, optimal: (f64, f64)) -> Priority {
    let (min, max) = optimal;
    if value >= min && value <= max {
        Priority::Good
    } else if value < min - CRITICAL_MARGIN || value > max + CRITICAL_MARGIN {
        Priority::Critical
    } else {
        Priority::NeedsWork
    }
}

/// Optimal ranges for the metrics that get a priority badge.
pub const OPTIMAL_RANGES: [(&str, (f64, f64)); 8] = [
    ("tempo", (75.0, 90.0)),
    ("posture", (80.0, 95.0)),
    ("followThrough", (75.0, 90.0)),
    ("ballStriking", (80.0, 95.0)),
    ("attackAngle", (-4.0, 4.0)),
    ("swingPath", (-2.0, 2.0)),
    ("clubFaceAngle", (-2.0, 2.0)),
    ("smashFactor", (1.3, 1.5)),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricPriority {
    pub metric: &'static str,
    pub value: f64,
    pub priority: Priority,
}

impl SwingMetrics {
    /// Looks a metric up by its camelCase key.
    pub fn value_of(&self, metric: &str) -> Option<f64> {
        let value = match metric {
            "tempo" => self.tempo,
            "posture" => self.posture,
            "followThrough" => self.follow_through,
            "ballStriking" => self.ball_striking,
            "ballSpin" => self.ball_spin,
            "ballStraightness" => self.ball_straightness,
            "attackAngle" => self.attack_angle,
            "swingPath" => self.swing_path,
            "clubFaceAngle" => self.club_face_angle,
            "smashFactor" => self.smash_factor,
            "clubHeadSpeed" => self.club_head_speed,
            "carryDistance" => self.carry_distance,
            "backswingLength" => self.backswing_length,
            "weightTransfer" => self.weight_transfer,
            _ => return None,
        };
        Some(value)
    }

    pub fn priorities(&self) -> Vec<MetricPriority> {
        OPTIMAL_RANGES
            .into_iter()
            .filter_map(|(metric, range)| {
                self.value_of(metric).map(|value| MetricPriority {
                    metric,
                    value,
                    priority: improvement_priority(value, range),
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Urgency {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub urgency: Urgency,
    pub description: &'static str,
    pub action: &'static str,
}

pub fn immediate_recommendations(metrics: &SwingMetrics) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if metrics.tempo < 70.0 {
        out.push(Recommendation {
            title: "Slow Down Your Tempo",
            urgency: Urgency::Critical,
            description: "Your swing tempo is too fast. Focus on a smooth, controlled backswing.",
            action: "Practice counting '1-2-3' on backswing, '1' on downswing",
        });
    }
    if metrics.club_face_angle.abs() > 3.0 {
        out.push(Recommendation {
            title: "Club Face Control",
            urgency: Urgency::High,
            description: "Your club face is too open or closed at impact, causing directional issues.",
            action: "Check your grip: the V's should point between chin and right shoulder",
        });
    }
    if metrics.ball_striking < 75.0 {
        out.push(Recommendation {
            title: "Improve Ball Contact",
            urgency: Urgency::High,
            description: "Inconsistent ball striking is limiting your distance and accuracy.",
            action: "Focus on keeping your head steady and maintaining spine angle",
        });
    }
    if metrics.swing_path.abs() > 3.0 {
        let inside_out = metrics.swing_path > 0.0;
        out.push(Recommendation {
            title: "Swing Path Correction",
            urgency: Urgency::Medium,
            description: if inside_out {
                "You're swinging too much from inside-out"
            } else {
                "You're swinging too much from outside-in"
            },
            action: if inside_out {
                "Practice swinging more left through impact"
            } else {
                "Practice swinging more right through impact"
            },
        });
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentAdvice {
    pub category: &'static str,
    pub recommendation: &'static str,
    pub reason: &'static str,
    pub impact: &'static str,
}

pub fn equipment_recommendations(metrics: &SwingMetrics) -> Vec<EquipmentAdvice> {
    let mut out = Vec::new();
    if metrics.club_head_speed < 85.0 {
        out.push(EquipmentAdvice {
            category: "Club Selection",
            recommendation: "Consider a more flexible shaft",
            reason: "Your swing speed suggests a regular or senior flex shaft would help",
            impact: "Increased distance and better feel",
        });
    }
    if metrics.smash_factor < 1.3 {
        out.push(EquipmentAdvice {
            category: "Club Fitting",
            recommendation: "Professional club fitting recommended",
            reason: "Low smash factor indicates equipment optimization needed",
            impact: "Improved energy transfer and consistency",
        });
    }
    out.push(EquipmentAdvice {
        category: "Training Aids",
        recommendation: "Alignment sticks and impact bag",
        reason: "Based on your swing path and contact issues",
        impact: "Better swing plane and impact position",
    });
    out
}

/// Advice on swing rhythm derived from the phase table's ratios.
pub fn tempo_advice(ratios: &TempoRatios) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(ratio) = ratios.backswing_to_downswing {
        if (ratio - OPTIMAL_BACKSWING_RATIO).abs() > RATIO_TOLERANCE {
            out.push(format!(
                "Backswing:downswing is {:.1}:1; work toward {:.0}:1 for optimal power",
                ratio, OPTIMAL_BACKSWING_RATIO
            ));
        }
    }
    let (low, high) = OPTIMAL_TOTAL_TEMPO;
    if ratios.overall_tempo < low || ratios.overall_tempo > high {
        out.push(format!(
            "Total swing time is {:.1}s; keep it between {:.1}s and {:.1}s",
            ratios.overall_tempo, low, high
        ));
    }
    out
}

/// Everything the coach view shows for one swing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachingReport {
    pub priorities: Vec<MetricPriority>,
    pub immediate: Vec<Recommendation>,
    pub equipment: Vec<EquipmentAdvice>,
}

impl CoachingReport {
    pub fn from_metrics(metrics: &SwingMetrics) -> Self {
        Self {
            priorities: metrics.priorities(),
            immediate: immediate_recommendations(metrics),
            equipment: equipment_recommendations(metrics),
        }
    }

    pub fn count(&self, priority: Priority) -> usize {
        self.priorities
            .iter()
            .filter(|entry| entry.priority == priority)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_bands() {
        assert_eq!(improvement_priority(80.0, (75.0, 90.0)), Priority::Good);
        assert_eq!(improvement_priority(75.0, (75.0, 90.0)), Priority::Good);
        assert_eq!(improvement_priority(70.0, (75.0, 90.0)), Priority::NeedsWork);
        assert_eq!(improvement_priority(65.0, (75.0, 90.0)), Priority::NeedsWork);
        assert_eq!(improvement_priority(64.9, (75.0, 90.0)), Priority::Critical);
        assert_eq!(improvement_priority(100.1, (75.0, 90.0)), Priority::Critical);
    }

    #[test]
    fn swing_path_direction_text() {
        let metrics = SwingMetrics {
            tempo: 80.0,
            ball_striking: 85.0,
            swing_path: -4.0,
            ..SwingMetrics::default()
        };
        let recs = immediate_recommendations(&metrics);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].description.contains("outside-in"));
    }

    #[test]
    fn tempo_advice_for_reference_ratios() {
        let ratios = TempoRatios {
            backswing_to_downswing: Some(1.6),
            overall_tempo: 4.0,
        };
        let advice = tempo_advice(&ratios);
        assert_eq!(advice.len(), 1);
        assert!(advice[0].contains("1.6:1"));
    }
}
