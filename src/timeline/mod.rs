//! Validated swing phase table and time → phase lookup.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Result, TimelineError};
use crate::types::{PhaseSpec, SwingPhase, TempoRatios};

/// Largest gap or overlap tolerated between adjacent phase boundaries.
pub const CONTIGUITY_EPSILON: f64 = 1e-9;

/// Read-only, ordered partition of one swing cycle into named phases.
///
/// Construction validates the table once; every lookup afterwards is total.
#[derive(Debug, Clone, PartialEq)]
pub struct SwingTimeline {
    phases: Vec<SwingPhase>,
}

impl SwingTimeline {
    pub fn new(phases: Vec<SwingPhase>) -> Result<Self> {
        validate_phases(&phases)?;
        debug!(
            phases = phases.len(),
            total_duration = phases.last().map_or(0.0, |phase| phase.end_time),
            "phase table validated"
        );
        Ok(Self { phases })
    }

    pub fn from_specs(specs: &[PhaseSpec]) -> Result<Self> {
        Self::new(specs.iter().map(PhaseSpec::to_phase).collect())
    }

    /// The built-in seven phase reference table.
    pub fn reference() -> Self {
        Self {
            phases: reference_phases(),
        }
    }

    pub fn phases(&self) -> &[SwingPhase] {
        &self.phases
    }

    pub fn phase(&self, index: usize) -> Option<&SwingPhase> {
        self.phases.get(index)
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    pub fn first(&self) -> &SwingPhase {
        &self.phases[0]
    }

    pub fn total_duration(&self) -> f64 {
        self.phases[self.phases.len() - 1].end_time
    }

    /// Case-insensitive lookup by phase name.
    pub fn phase_named(&self, name: &str) -> Option<&SwingPhase> {
        self.phases
            .iter()
            .find(|phase| phase.name.eq_ignore_ascii_case(name))
    }

    /// Index of the phase active at `time`.
    ///
    /// NaN and negative times count as 0; times past the end land in the last phase.
    pub fn phase_index_at(&self, time: f64) -> usize {
        let time = sanitize_time(time);
        // Phases are contiguous from 0, so the first phase ending at or after
        // `time` is also the first one whose range contains it.
        self.phases
            .iter()
            .position(|phase| time <= phase.end_time)
            .unwrap_or(self.phases.len() - 1)
    }

    pub fn phase_at(&self, time: f64) -> &SwingPhase {
        &self.phases[self.phase_index_at(time)]
    }

    /// Sanitized `time` limited to `[0, total_duration]`.
    pub fn clamp_time(&self, time: f64) -> f64 {
        sanitize_time(time).min(self.total_duration())
    }

    /// Normalized position within the cycle, in `[0, 1]`.
    pub fn progress_at(&self, time: f64) -> f64 {
        self.clamp_time(time) / self.total_duration()
    }

    pub fn tempo_ratios(&self) -> TempoRatios {
        let backswing_to_downswing = match (
            self.phase_named("backswing"),
            self.phase_named("downswing"),
        ) {
            (Some(back), Some(down)) => Some(back.duration() / down.duration()),
            _ => None,
        };
        TempoRatios {
            backswing_to_downswing,
            overall_tempo: self.phases.iter().map(SwingPhase::duration).sum(),
        }
    }
}

/// Maps NaN and negative inputs to 0; everything else passes through.
pub fn sanitize_time(time: f64) -> f64 {
    if time.is_nan() || time < 0.0 {
        0.0
    } else {
        time
    }
}

fn validate_phases(phases: &[SwingPhase]) -> Result<()> {
    if phases.is_empty() {
        return Err(TimelineError::config(
            "phase table must contain at least one phase",
        ));
    }

    let mut names = HashSet::new();
    for (idx, phase) in phases.iter().enumerate() {
        if phase.name.trim().is_empty() {
            return Err(TimelineError::config(format!(
                "phase {} has an empty name",
                idx
            )));
        }
        if !names.insert(phase.name.to_ascii_lowercase()) {
            return Err(TimelineError::config(format!(
                "phase name '{}' appears more than once",
                phase.name
            )));
        }
        if !(phase.start_time.is_finite() && phase.end_time.is_finite() && phase.optimal.is_finite())
        {
            return Err(TimelineError::config(format!(
                "phase '{}' has non-finite timing values",
                phase.name
            )));
        }
        if phase.start_time < 0.0 {
            return Err(TimelineError::config(format!(
                "phase '{}' starts before 0 ({:.3}s)",
                phase.name, phase.start_time
            )));
        }
        if phase.duration() <= 0.0 {
            return Err(TimelineError::config(format!(
                "phase '{}' must end after it starts ({:.3}s - {:.3}s)",
                phase.name, phase.start_time, phase.end_time
            )));
        }
        if phase.optimal <= 0.0 {
            return Err(TimelineError::config(format!(
                "phase '{}' optimal duration must be positive, got {:.3}",
                phase.name, phase.optimal
            )));
        }
    }

    if phases[0].start_time.abs() > CONTIGUITY_EPSILON {
        return Err(TimelineError::config(format!(
            "first phase '{}' must start at 0, got {:.3}s",
            phases[0].name, phases[0].start_time
        )));
    }

    for pair in phases.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let gap = next.start_time - prev.end_time;
        if gap > CONTIGUITY_EPSILON {
            return Err(TimelineError::config(format!(
                "gap of {:.3}s between '{}' and '{}'",
                gap, prev.name, next.name
            )));
        }
        if gap < -CONTIGUITY_EPSILON {
            return Err(TimelineError::config(format!(
                "'{}' overlaps '{}' by {:.3}s",
                prev.name, next.name, -gap
            )));
        }
    }

    Ok(())
}

fn reference_phases() -> Vec<SwingPhase> {
    vec![
        SwingPhase::new("Setup", 0.0, 0.5, 0.8),
        SwingPhase::new("Takeaway", 0.5, 1.2, 0.8),
        SwingPhase::new("Backswing", 1.2, 2.0, 0.9),
        SwingPhase::new("Top Position", 2.0, 2.3, 0.4),
        SwingPhase::new("Downswing", 2.3, 2.8, 0.4),
        SwingPhase::new("Impact", 2.8, 2.9, 0.1),
        SwingPhase::new("Follow Through", 2.9, 4.0, 1.2),
    ]
}
