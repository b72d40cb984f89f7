use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::coaching::SwingMetrics;
use crate::error::{ErrorKind, Result, TimelineError};
use crate::timeline::SwingTimeline;
use crate::types::PhaseTableDocument;

/// Where the phase table came from, plus the validated table itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub phases_path: Option<PathBuf>,
    pub timeline: SwingTimeline,
}

impl AppConfig {
    /// Loads the phase table from `path`, or uses the built-in reference table.
    pub fn from_override(path: Option<PathBuf>) -> Result<Self> {
        let timeline = match path.as_deref() {
            Some(custom) => load_timeline(custom)?,
            None => SwingTimeline::reference(),
        };
        info!(
            source = %path.as_deref().map_or("built-in".into(), |p| p.display().to_string()),
            phases = timeline.len(),
            total_duration = timeline.total_duration(),
            "phase table loaded"
        );
        Ok(Self {
            phases_path: path,
            timeline,
        })
    }
}

pub fn load_timeline(path: &Path) -> Result<SwingTimeline> {
    let raw = fs::read_to_string(path).map_err(|err| {
        TimelineError::new(
            ErrorKind::Io,
            format!("failed to read phase table {:?}: {}", path, err),
        )
    })?;
    parse_timeline(&raw)
}

/// Accepts either a bare array of phases or `{ "phases": [...] }`.
pub fn parse_timeline(raw: &str) -> Result<SwingTimeline> {
    let document: PhaseTableDocument = serde_json::from_str(raw)?;
    SwingTimeline::from_specs(&document.into_specs())
}

pub fn load_metrics(path: &Path) -> Result<SwingMetrics> {
    let raw = fs::read_to_string(path).map_err(|err| {
        TimelineError::new(
            ErrorKind::Io,
            format!("failed to read swing metrics {:?}: {}", path, err),
        )
    })?;
    Ok(serde_json::from_str(&raw)?)
}
