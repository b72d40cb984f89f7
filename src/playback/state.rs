use serde::Serialize;

use crate::timeline::SwingTimeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
}

/// Everything the playback machine remembers between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    /// Elapsed seconds into the swing, within `[0, total_duration]`
    pub current_time: f64,
    /// Index into the phase table
    pub current_phase: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    Start,
    Pause,
    Toggle,
    Reset,
    /// A reading from the external time source, in seconds
    Tick(f64),
    /// The time source reached end-of-media
    Ended,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn phase_name<'a>(&self, timeline: &'a SwingTimeline) -> &'a str {
        timeline
            .phase(self.current_phase)
            .map_or(timeline.first().name.as_str(), |phase| phase.name.as_str())
    }
}

/// Pure transition function of the playback machine.
///
/// Ticks are ignored while stopped, and ticks that would move time backwards
/// are ignored while playing, so `current_time` only grows within a run.
pub fn reduce(
    timeline: &SwingTimeline,
    state: PlaybackState,
    event: PlaybackEvent,
) -> PlaybackState {
    match (state.status, event) {
        (_, PlaybackEvent::Reset) => PlaybackState::default(),
        (PlaybackStatus::Stopped, PlaybackEvent::Start | PlaybackEvent::Toggle) => PlaybackState {
            status: PlaybackStatus::Playing,
            ..state
        },
        (
            PlaybackStatus::Playing,
            PlaybackEvent::Pause | PlaybackEvent::Toggle | PlaybackEvent::Ended,
        ) => PlaybackState {
            status: PlaybackStatus::Stopped,
            ..state
        },
        (PlaybackStatus::Playing, PlaybackEvent::Tick(time)) => {
            let time = timeline.clamp_time(time);
            if time < state.current_time {
                return state;
            }
            PlaybackState {
                current_time: time,
                current_phase: timeline.phase_index_at(time),
                ..state
            }
        }
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_at(timeline: &SwingTimeline, time: f64) -> PlaybackState {
        let state = reduce(timeline, PlaybackState::default(), PlaybackEvent::Start);
        reduce(timeline, state, PlaybackEvent::Tick(time))
    }

    #[test]
    fn start_and_pause_toggle_status() {
        let timeline = SwingTimeline::reference();
        let playing = reduce(&timeline, PlaybackState::default(), PlaybackEvent::Start);
        assert!(playing.is_playing());
        let paused = reduce(&timeline, playing, PlaybackEvent::Pause);
        assert_eq!(paused.status, PlaybackStatus::Stopped);
        let toggled = reduce(&timeline, paused, PlaybackEvent::Toggle);
        assert!(toggled.is_playing());
    }

    #[test]
    fn ticks_are_ignored_while_stopped() {
        let timeline = SwingTimeline::reference();
        let state = reduce(&timeline, PlaybackState::default(), PlaybackEvent::Tick(1.5));
        assert_eq!(state, PlaybackState::default());
    }

    #[test]
    fn tick_updates_phase() {
        let timeline = SwingTimeline::reference();
        let state = playing_at(&timeline, 1.5);
        assert_eq!(state.phase_name(&timeline), "Backswing");
        assert_eq!(state.current_time, 1.5);
    }

    #[test]
    fn backward_tick_is_ignored() {
        let timeline = SwingTimeline::reference();
        let state = playing_at(&timeline, 2.0);
        let next = reduce(&timeline, state, PlaybackEvent::Tick(1.0));
        assert_eq!(next, state);
    }

    #[test]
    fn tick_past_end_clamps_to_total() {
        let timeline = SwingTimeline::reference();
        let state = playing_at(&timeline, 9.0);
        assert!((state.current_time - 4.0).abs() < 1e-9);
        assert_eq!(state.current_phase, timeline.len() - 1);
    }

    #[test]
    fn nan_tick_counts_as_zero() {
        let timeline = SwingTimeline::reference();
        let state = playing_at(&timeline, f64::NAN);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.current_phase, 0);
    }

    #[test]
    fn reset_from_playing() {
        let timeline = SwingTimeline::reference();
        let state = playing_at(&timeline, 2.5);
        let reset = reduce(&timeline, state, PlaybackEvent::Reset);
        assert_eq!(reset.status, PlaybackStatus::Stopped);
        assert_eq!(reset.current_time, 0.0);
        assert_eq!(reset.phase_name(&timeline), timeline.phases()[0].name);
    }

    #[test]
    fn ended_stops_without_moving_time() {
        let timeline = SwingTimeline::reference();
        let state = playing_at(&timeline, 2.5);
        let ended = reduce(&timeline, state, PlaybackEvent::Ended);
        assert_eq!(ended.status, PlaybackStatus::Stopped);
        assert_eq!(ended.current_time, 2.5);
        assert_eq!(ended.current_phase, state.current_phase);
    }
}
