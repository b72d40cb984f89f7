//! Core types shared by the timeline, scoring and playback layers

use serde::{Deserialize, Serialize};

/// One named, time-bounded segment of a golf swing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwingPhase {
    pub name: String,
    pub start_time: f64, // seconds
    pub end_time: f64,   // seconds
    /// Target duration used only for scoring, never for playback timing
    pub optimal: f64,
}

impl SwingPhase {
    pub fn new(name: impl Into<String>, start_time: f64, end_time: f64, optimal: f64) -> Self {
        Self {
            name: name.into(),
            start_time,
            end_time,
            optimal,
        }
    }

    /// Observed duration, `end_time - start_time`
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Inclusive containment test used by phase lookup
    pub fn contains(&self, time: f64) -> bool {
        self.start_time <= time && time <= self.end_time
    }
}

/// A phase row as it appears in a JSON phase table.
///
/// Recognized fields are exactly `name`, `startTime`, `endTime` and `optimal`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhaseSpec {
    pub name: String,
    pub start_time: f64,
    pub end_time: f64,
    pub optimal: f64,
}

impl PhaseSpec {
    pub fn to_phase(&self) -> SwingPhase {
        SwingPhase::new(self.name.clone(), self.start_time, self.end_time, self.optimal)
    }
}

/// Accepted shapes of a phase table document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PhaseTableDocument {
    Bare(Vec<PhaseSpec>),
    Wrapped { phases: Vec<PhaseSpec> },
}

impl PhaseTableDocument {
    pub fn into_specs(self) -> Vec<PhaseSpec> {
        match self {
            PhaseTableDocument::Bare(specs) => specs,
            PhaseTableDocument::Wrapped { phases } => phases,
        }
    }
}

/// Aggregate timing ratios derived from a phase table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoRatios {
    /// Backswing duration over downswing duration; `None` when the table lacks either phase
    pub backswing_to_downswing: Option<f64>,
    /// Total swing time in seconds
    pub overall_tempo: f64,
}

/// Reference backswing:downswing ratio shown alongside the measured one.
pub const OPTIMAL_BACKSWING_RATIO: f64 = 3.0;

/// Reference window for total swing time, in seconds.
pub const OPTIMAL_TOTAL_TEMPO: (f64, f64) = (3.5, 4.5);
