use approx::assert_relative_eq;
use eframe::egui::vec2;
use swingtempo::playback::PlaybackStatus;
use swingtempo::scoring::PhaseReport;
use swingtempo::types::SwingPhase;
use swingtempo::ui::components::control_strip::play_label;
use swingtempo::ui::components::phase_breakdown::{accuracy_caption, timing_caption};
use swingtempo::ui::components::swing_canvas::rotate;

#[test]
fn play_button_label_follows_status() {
    assert_eq!(play_label(PlaybackStatus::Stopped), "Play Analysis");
    assert_eq!(play_label(PlaybackStatus::Playing), "Pause Analysis");
}

#[test]
fn phase_card_captions() {
    let report = PhaseReport::from_phase(&SwingPhase::new("Backswing", 1.2, 2.0, 0.9));
    assert_eq!(timing_caption(&report), "0.8s / 0.9s  (1.2s - 2.0s)");
    assert_eq!(accuracy_caption(&report), "90% accuracy");
}

#[test]
fn rotate_quarter_turn() {
    let turned = rotate(vec2(0.0, 10.0), 90.0);
    assert_relative_eq!(turned.x, -10.0, epsilon = 1e-4);
    assert_relative_eq!(turned.y, 0.0, epsilon = 1e-4);
}
