//! Keyframed golfer pose for the swing canvas.
//!
//! Pure presentation math: nothing here feeds back into timing or scoring.

use std::f32::consts::FRAC_PI_2;

use serde::Serialize;

/// Frames in one animated swing cycle (two seconds at 60 fps).
pub const TOTAL_FRAMES: u32 = 120;
/// Frames skipped by the step controls.
pub const FRAME_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CameraView {
    Front,
    #[default]
    Side,
    Top,
    Behind,
}

impl CameraView {
    pub const ALL: [CameraView; 4] = [
        CameraView::Front,
        CameraView::Side,
        CameraView::Top,
        CameraView::Behind,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CameraView::Front => "Front View",
            CameraView::Side => "Side View",
            CameraView::Top => "Top View",
            CameraView::Behind => "Behind View",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnimationStage {
    Address,
    Backswing,
    Transition,
    Downswing,
    Impact,
    FollowThrough,
}

impl AnimationStage {
    pub fn label(self) -> &'static str {
        match self {
            AnimationStage::Address => "Address",
            AnimationStage::Backswing => "Backswing",
            AnimationStage::Transition => "Transition",
            AnimationStage::Downswing => "Downswing",
            AnimationStage::Impact => "Impact",
            AnimationStage::FollowThrough => "Follow-through",
        }
    }
}

/// Cycle progress range of every stage before the follow-through.
const STAGE_BOUNDS: [(AnimationStage, f32, f32); 5] = [
    (AnimationStage::Address, 0.0, 0.1),
    (AnimationStage::Backswing, 0.1, 0.3),
    (AnimationStage::Transition, 0.3, 0.35),
    (AnimationStage::Downswing, 0.35, 0.5),
    (AnimationStage::Impact, 0.5, 0.52),
];
const FOLLOW_THROUGH_START: f32 = 0.52;

/// Stage active at a normalized cycle position, with progress through it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StagePosition {
    pub stage: AnimationStage,
    /// Position within the stage, in `[0, 1]`
    pub progress: f32,
}

impl StagePosition {
    pub fn at(cycle_progress: f32) -> Self {
        let cycle_progress = if cycle_progress.is_nan() {
            0.0
        } else {
            cycle_progress.clamp(0.0, 1.0)
        };
        for (stage, start, end) in STAGE_BOUNDS {
            if cycle_progress < end {
                return Self {
                    stage,
                    progress: (cycle_progress - start) / (end - start),
                };
            }
        }
        Self {
            stage: AnimationStage::FollowThrough,
            progress: (cycle_progress - FOLLOW_THROUGH_START) / (1.0 - FOLLOW_THROUGH_START),
        }
    }
}

/// Joint angles of the stick golfer, degrees unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub body_tilt: f32,
    pub club_angle: f32,
    pub shoulder_rotation: f32,
    /// Club position on the top-view arc, radians from straight up
    pub arc_angle: f32,
}

impl Pose {
    pub fn at(position: StagePosition) -> Self {
        let p = position.progress;
        let (body_tilt, club_angle, shoulder_rotation, arc_fraction) = match position.stage {
            AnimationStage::Address => (0.0, -10.0, 0.0, 0.0),
            AnimationStage::Backswing => (-5.0 * p, -10.0 - 120.0 * p, 45.0 * p, p),
            AnimationStage::Transition => (0.0, -130.0, 0.0, 0.0),
            AnimationStage::Downswing => (5.0 * p, -130.0 + 140.0 * p, 45.0 - 90.0 * p, 1.0 - p),
            AnimationStage::Impact => (10.0, 10.0, 0.0, 0.0),
            AnimationStage::FollowThrough => (-10.0 * p, 10.0 + 100.0 * p, -45.0 * p, 1.0 + p),
        };
        let start = -FRAC_PI_2;
        let end = FRAC_PI_2;
        Self {
            body_tilt,
            club_angle,
            shoulder_rotation,
            arc_angle: start + (end - start) * arc_fraction,
        }
    }

    pub fn at_progress(cycle_progress: f32) -> Self {
        Self::at(StagePosition::at(cycle_progress))
    }
}

/// Frame counter behind the canvas play, step and scrub controls.
#[derive(Debug, Clone, Default)]
pub struct SwingAnimator {
    frame: u32,
    playing: bool,
    view: CameraView,
}

impl SwingAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn view(&self) -> CameraView {
        self.view
    }

    pub fn set_view(&mut self, view: CameraView) {
        self.view = view;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn reset(&mut self) {
        self.playing = false;
        self.frame = 0;
    }

    /// Advances one frame while playing, wrapping at the end of the cycle.
    pub fn next_frame(&mut self) {
        if self.playing {
            self.frame = (self.frame + 1) % TOTAL_FRAMES;
        }
    }

    pub fn step_back(&mut self) {
        self.frame = self.frame.saturating_sub(FRAME_STEP);
    }

    pub fn step_forward(&mut self) {
        self.frame = (self.frame + FRAME_STEP).min(TOTAL_FRAMES - 1);
    }

    pub fn set_frame(&mut self, frame: u32) {
        self.frame = frame.min(TOTAL_FRAMES - 1);
    }

    pub fn progress(&self) -> f32 {
        self.frame as f32 / TOTAL_FRAMES as f32
    }

    pub fn position(&self) -> StagePosition {
        StagePosition::at(self.progress())
    }

    pub fn pose(&self) -> Pose {
        Pose::at(self.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn stage_boundaries() {
        assert_eq!(StagePosition::at(0.0).stage, AnimationStage::Address);
        assert_eq!(StagePosition::at(0.1).stage, AnimationStage::Backswing);
        assert_eq!(StagePosition::at(0.32).stage, AnimationStage::Transition);
        assert_eq!(StagePosition::at(0.4).stage, AnimationStage::Downswing);
        assert_eq!(StagePosition::at(0.51).stage, AnimationStage::Impact);
        assert_eq!(StagePosition::at(0.52).stage, AnimationStage::FollowThrough);
        assert_eq!(StagePosition::at(1.0).progress, 1.0);
    }

    #[test]
    fn stage_progress_is_local() {
        let position = StagePosition::at(0.2);
        assert_eq!(position.stage, AnimationStage::Backswing);
        assert_relative_eq!(position.progress, 0.5, epsilon = 1e-5);
    }

    #[test]
    fn club_reaches_top_at_end_of_backswing() {
        let pose = Pose::at(StagePosition {
            stage: AnimationStage::Backswing,
            progress: 1.0,
        });
        assert_relative_eq!(pose.club_angle, -130.0);
        assert_relative_eq!(pose.shoulder_rotation, 45.0);
        assert_relative_eq!(pose.arc_angle, FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn downswing_returns_club_to_impact() {
        let pose = Pose::at(StagePosition {
            stage: AnimationStage::Downswing,
            progress: 1.0,
        });
        assert_relative_eq!(pose.club_angle, 10.0);
        assert_relative_eq!(pose.body_tilt, 5.0);
    }

    #[test]
    fn animator_wraps_and_clamps() {
        let mut animator = SwingAnimator::new();
        animator.next_frame();
        assert_eq!(animator.frame(), 0, "paused animator must not advance");

        animator.set_frame(TOTAL_FRAMES - 1);
        animator.toggle();
        animator.next_frame();
        assert_eq!(animator.frame(), 0);

        animator.step_back();
        assert_eq!(animator.frame(), 0);
        animator.set_frame(117);
        animator.step_forward();
        assert_eq!(animator.frame(), TOTAL_FRAMES - 1);

        animator.reset();
        assert!(!animator.is_playing());
        assert_eq!(animator.frame(), 0);
    }
}
