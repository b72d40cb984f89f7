//! Playback machine driven by an injected time source.

pub mod clock;
pub mod state;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::scoring::{tempo_rating, tempo_score, TempoRating};
use crate::timeline::SwingTimeline;

pub use clock::{ScriptedClock, SimulatedClock, TimeSource};
pub use state::{reduce, PlaybackEvent, PlaybackState, PlaybackStatus};

/// What a rendering layer reads once per tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub status: PlaybackStatus,
    pub current_time: f64,
    pub current_phase: String,
    pub phase_index: usize,
    pub progress: f64,
    pub tempo_score: u32,
    pub rating: TempoRating,
}

/// Owns the time source for the lifetime of a playback session.
///
/// Dropping the driver pauses the source.
pub struct PlaybackDriver<S: TimeSource> {
    timeline: SwingTimeline,
    source: S,
    state: PlaybackState,
    tempo_score: u32,
    /// Set when the last stop came from the source's end-of-media.
    source_ended: bool,
}

impl<S: TimeSource> PlaybackDriver<S> {
    pub fn new(timeline: SwingTimeline, source: S) -> Self {
        let tempo_score = tempo_score(timeline.phases());
        Self {
            timeline,
            source,
            state: PlaybackState::default(),
            tempo_score,
            source_ended: false,
        }
    }

    pub fn timeline(&self) -> &SwingTimeline {
        &self.timeline
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn start(&mut self) -> PlaybackSnapshot {
        if !self.state.is_playing() {
            let finished = self.source_ended
                || self.state.current_time >= self.timeline.total_duration();
            if finished {
                // A finished cycle rewinds before playing again.
                self.apply(PlaybackEvent::Reset);
                self.source.seek(0.0);
            } else {
                let position = self.source.poll();
                if position < self.state.current_time {
                    debug!(
                        position,
                        current_time = self.state.current_time,
                        "source moved back while paused"
                    );
                    self.apply(PlaybackEvent::Reset);
                }
            }
            self.source_ended = false;
            self.source.play();
            self.apply(PlaybackEvent::Start);
        }
        self.snapshot()
    }

    pub fn pause(&mut self) -> PlaybackSnapshot {
        if self.state.is_playing() {
            self.source.pause();
            self.apply(PlaybackEvent::Pause);
        }
        self.snapshot()
    }

    pub fn toggle(&mut self) -> PlaybackSnapshot {
        if self.state.is_playing() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> PlaybackSnapshot {
        self.source.pause();
        self.source.seek(0.0);
        self.source_ended = false;
        self.apply(PlaybackEvent::Reset);
        self.snapshot()
    }

    /// Reads the time source once and applies the resulting events.
    pub fn tick(&mut self) -> PlaybackSnapshot {
        if self.state.is_playing() {
            let time = self.source.poll();
            if self.timeline.clamp_time(time) < self.state.current_time {
                warn!(
                    time,
                    current_time = self.state.current_time,
                    "dropping backward tick"
                );
            }
            self.apply(PlaybackEvent::Tick(time));
            if self.source.take_ended() {
                info!(current_time = self.state.current_time, "source reached end of media");
                self.source_ended = true;
                self.apply(PlaybackEvent::Ended);
            }
        }
        self.snapshot()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: self.state.status,
            current_time: self.state.current_time,
            current_phase: self.state.phase_name(&self.timeline).to_string(),
            phase_index: self.state.current_phase,
            progress: self.timeline.progress_at(self.state.current_time),
            tempo_score: self.tempo_score,
            rating: tempo_rating(self.tempo_score as f64),
        }
    }

    fn apply(&mut self, event: PlaybackEvent) {
        let previous = self.state;
        self.state = reduce(&self.timeline, previous, event);
        if previous.status != self.state.status {
            info!(
                ?event,
                from = ?previous.status,
                to = ?self.state.status,
                current_time = self.state.current_time,
                "playback status changed"
            );
        }
        if previous.current_phase != self.state.current_phase {
            debug!(
                phase = self.state.phase_name(&self.timeline),
                current_time = self.state.current_time,
                "entered phase"
            );
        }
    }
}

impl<S: TimeSource> Drop for PlaybackDriver<S> {
    fn drop(&mut self) {
        if self.state.is_playing() {
            self.source.pause();
        }
    }
}
