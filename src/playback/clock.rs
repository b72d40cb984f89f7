use std::collections::VecDeque;

use crate::timeline::sanitize_time;

/// External clock that drives playback, e.g. a media player's position.
pub trait TimeSource {
    fn play(&mut self);
    fn pause(&mut self);
    fn seek(&mut self, seconds: f64);
    /// Current position in seconds.
    fn poll(&mut self) -> f64;
    /// Returns `true` once per end-of-media, then resets.
    fn take_ended(&mut self) -> bool;
}

/// Media-like clock advanced explicitly by elapsed wall time.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    position: f64,
    duration: f64,
    rate: f64,
    playing: bool,
    ended: bool,
}

impl SimulatedClock {
    pub fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration: sanitize_time(duration),
            rate: 1.0,
            playing: false,
            ended: false,
        }
    }

    /// Playback speed multiplier; non-positive or NaN rates fall back to 1.0.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = if rate > 0.0 && rate.is_finite() { rate } else { 1.0 };
        self
    }

    pub fn advance(&mut self, elapsed_secs: f64) {
        if !self.playing {
            return;
        }
        self.position += sanitize_time(elapsed_secs) * self.rate;
        if self.position >= self.duration {
            self.position = self.duration;
            self.playing = false;
            self.ended = true;
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl TimeSource for SimulatedClock {
    fn play(&mut self) {
        // Like a media element, playing from the end restarts from the top.
        if self.position >= self.duration {
            self.position = 0.0;
        }
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.position = sanitize_time(seconds).min(self.duration);
        self.ended = false;
    }

    fn poll(&mut self) -> f64 {
        self.position
    }

    fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

/// Replays a fixed list of readings, one per poll while playing, and
/// signals end-of-media after the last one.
#[derive(Debug, Clone)]
pub struct ScriptedClock {
    readings: VecDeque<f64>,
    last: f64,
    playing: bool,
    ended: bool,
}

impl ScriptedClock {
    pub fn new(readings: impl IntoIterator<Item = f64>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
            last: 0.0,
            playing: false,
            ended: false,
        }
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

impl TimeSource for ScriptedClock {
    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, seconds: f64) {
        self.last = seconds;
        self.ended = false;
    }

    fn poll(&mut self) -> f64 {
        if self.playing {
            if let Some(next) = self.readings.pop_front() {
                self.last = next;
                if self.readings.is_empty() {
                    self.playing = false;
                    self.ended = true;
                }
            }
        }
        self.last
    }

    fn take_ended(&mut self) -> bool {
        std::mem::take(&mut self.ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulated_clock_only_moves_while_playing() {
        let mut clock = SimulatedClock::new(4.0);
        clock.advance(1.0);
        assert_eq!(clock.poll(), 0.0);
        clock.play();
        clock.advance(1.0);
        assert_eq!(clock.poll(), 1.0);
    }

    #[test]
    fn simulated_clock_signals_end_once() {
        let mut clock = SimulatedClock::new(1.0).with_rate(2.0);
        clock.play();
        clock.advance(0.75);
        assert_eq!(clock.poll(), 1.0);
        assert!(!clock.is_playing());
        assert!(clock.take_ended());
        assert!(!clock.take_ended());
    }

    #[test]
    fn simulated_clock_restarts_when_played_at_end() {
        let mut clock = SimulatedClock::new(1.0);
        clock.play();
        clock.advance(2.0);
        clock.play();
        assert_eq!(clock.poll(), 0.0);
    }

    #[test]
    fn scripted_clock_ends_after_last_reading() {
        let mut clock = ScriptedClock::new([0.5, 1.0]);
        assert_eq!(clock.poll(), 0.0);
        clock.play();
        assert_eq!(clock.poll(), 0.5);
        assert!(!clock.take_ended());
        assert_eq!(clock.poll(), 1.0);
        assert!(clock.take_ended());
        assert_eq!(clock.poll(), 1.0);
    }

    #[test]
    fn scripted_clock_seek_clears_pending_end() {
        let mut clock = ScriptedClock::new([0.5]);
        clock.play();
        assert_eq!(clock.poll(), 0.5);
        clock.seek(0.0);
        assert!(!clock.take_ended());
        assert_eq!(clock.poll(), 0.0);
    }
}
