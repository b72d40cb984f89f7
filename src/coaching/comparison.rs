//! Change report between two recorded swings.

use serde::Serialize;

use super::SwingMetrics;

/// Metrics listed in a comparison, as (key, label, unit).
pub const COMPARED_METRICS: [(&str, &str, &str); 12] = [
    ("tempo", "Tempo", "/100"),
    ("posture", "Posture", "/100"),
    ("followThrough", "Follow Through", "/100"),
    ("ballStriking", "Ball Striking", "/100"),
    ("ballSpin", "Ball Spin", " RPM"),
    ("ballStraightness", "Ball Straightness", "/100"),
    ("attackAngle", "Attack Angle", "°"),
    ("swingPath", "Swing Path", "°"),
    ("clubFaceAngle", "Club Face Angle", "°"),
    ("smashFactor", "Smash Factor", ""),
    ("clubHeadSpeed", "Club Head Speed", " mph"),
    ("carryDistance", "Carry Distance", " yds"),
];

const TEMPO_DROP: f64 = -5.0;
const STRIKING_DROP: f64 = -3.0;
const FACE_ANGLE_GROWTH: f64 = 1.0;
const CARRY_GAIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Difference rounded to one decimal, and the change relative to `previous`
/// in percent (`None` when `previous` is 0).
pub fn improvement(current: f64, previous: f64) -> (f64, Option<f64>) {
    let diff = current - previous;
    let percentage = (previous != 0.0).then(|| diff / previous * 100.0);
    ((diff * 10.0).round() / 10.0, percentage)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricChange {
    pub metric: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub current: f64,
    pub previous: f64,
    pub diff: f64,
    pub percentage: Option<f64>,
}

impl MetricChange {
    pub fn trend(&self) -> Trend {
        if self.diff > 0.0 {
            Trend::Up
        } else if self.diff < 0.0 {
            Trend::Down
        } else {
            Trend::Flat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonPriority {
    High,
    Medium,
    Positive,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonAdvice {
    pub category: &'static str,
    pub priority: ComparisonPriority,
    pub message: String,
    pub action: &'static str,
}

/// Rules over the change between two swings; never empty.
pub fn comparison_recommendations(
    current: &SwingMetrics,
    previous: &SwingMetrics,
) -> Vec<ComparisonAdvice> {
    let mut out = Vec::new();
    let (tempo, _) = improvement(current.tempo, previous.tempo);
    if tempo < TEMPO_DROP {
        out.push(ComparisonAdvice {
            category: "Tempo",
            priority: ComparisonPriority::High,
            message: "Your swing tempo has decreased. Focus on maintaining a smooth 3:1 backswing to downswing ratio.".into(),
            action: "Practice with a metronome or tempo trainer",
        });
    }
    let (striking, _) = improvement(current.ball_striking, previous.ball_striking);
    if striking < STRIKING_DROP {
        out.push(ComparisonAdvice {
            category: "Ball Striking",
            priority: ComparisonPriority::High,
            message: "Ball contact quality needs improvement. Focus on maintaining proper posture through impact.".into(),
            action: "Practice impact bag drills and alignment stick exercises",
        });
    }
    let (face, _) = improvement(
        current.club_face_angle.abs(),
        previous.club_face_angle.abs(),
    );
    if face > FACE_ANGLE_GROWTH {
        out.push(ComparisonAdvice {
            category: "Club Face Control",
            priority: ComparisonPriority::Medium,
            message: "Club face angle at impact is less consistent. Work on grip pressure and wrist position.".into(),
            action: "Practice slow-motion swings focusing on face control",
        });
    }
    let (carry, _) = improvement(current.carry_distance, previous.carry_distance);
    if carry > CARRY_GAIN {
        out.push(ComparisonAdvice {
            category: "Distance",
            priority: ComparisonPriority::Positive,
            message: format!(
                "Excellent improvement in carry distance (+{:.1} yards)! Your power generation is improving.",
                carry
            ),
            action: "Continue current training routine and focus on consistency",
        });
    }
    if out.is_empty() {
        out.push(ComparisonAdvice {
            category: "Overall",
            priority: ComparisonPriority::Positive,
            message: "Great consistency between swings! Focus on maintaining your current form.".into(),
            action: "Continue regular practice and consider working on advanced techniques",
        });
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwingComparison {
    pub changes: Vec<MetricChange>,
    pub recommendations: Vec<ComparisonAdvice>,
}

pub fn compare(current: &SwingMetrics, previous: &SwingMetrics) -> SwingComparison {
    let changes = COMPARED_METRICS
        .into_iter()
        .filter_map(|(metric, label, unit)| {
            let now = current.value_of(metric)?;
            let before = previous.value_of(metric)?;
            let (diff, percentage) = improvement(now, before);
            Some(MetricChange {
                metric,
                label,
                unit,
                current: now,
                previous: before,
                diff,
                percentage,
            })
        })
        .collect();
    SwingComparison {
        changes,
        recommendations: comparison_recommendations(current, previous),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_rounds_diff_and_guards_zero() {
        let (diff, percentage) = improvement(82.0, 80.0);
        assert_eq!(diff, 2.0);
        assert!((percentage.unwrap_or_default() - 2.5).abs() < 1e-9);
        assert_eq!(improvement(1.0, 0.0).1, None);
        // -5.04 rounds to -5.0, which does not cross the tempo rule
        assert_eq!(improvement(74.96, 80.0).0, -5.0);
    }

    #[test]
    fn face_angle_rule_uses_magnitudes() {
        let previous = SwingMetrics {
            club_face_angle: 2.0,
            ..SwingMetrics::default()
        };
        let flipped = SwingMetrics {
            club_face_angle: -2.5,
            ..SwingMetrics::default()
        };
        let recs = comparison_recommendations(&flipped, &previous);
        assert_eq!(recs[0].category, "Overall");

        let wider = SwingMetrics {
            club_face_angle: -3.5,
            ..SwingMetrics::default()
        };
        let recs = comparison_recommendations(&wider, &previous);
        assert_eq!(recs[0].category, "Club Face Control");
    }
}
