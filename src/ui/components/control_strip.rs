use eframe::egui;

use crate::playback::{PlaybackSnapshot, PlaybackStatus};
use crate::scoring::Grade;

#[derive(Default, Debug)]
pub struct ControlStripOutput {
    pub toggle_playback: bool,
    pub reset: bool,
}

pub struct ControlStrip<'a> {
    pub snapshot: &'a PlaybackSnapshot,
}

impl<'a> ControlStrip<'a> {
    pub fn show(&self, ui: &mut egui::Ui) -> ControlStripOutput {
        let mut output = ControlStripOutput::default();
        ui.horizontal(|ui| {
            if ui
                .button(play_label(self.snapshot.status))
                .on_hover_text("Space toggles playback.")
                .clicked()
            {
                output.toggle_playback = true;
            }
            if ui.button("Reset").clicked() {
                output.reset = true;
            }
            ui.separator();
            rating_badge(ui, self.snapshot.rating.grade, self.snapshot.tempo_score);
            ui.separator();
            ui.label(format!(
                "{} at {:.1}s",
                self.snapshot.current_phase, self.snapshot.current_time
            ));
        });
        output
    }
}

pub fn play_label(status: PlaybackStatus) -> &'static str {
    match status {
        PlaybackStatus::Playing => "Pause Analysis",
        PlaybackStatus::Stopped => "Play Analysis",
    }
}

pub fn grade_color(grade: Grade) -> egui::Color32 {
    let [r, g, b] = grade.rgb();
    egui::Color32::from_rgb(r, g, b)
}

fn rating_badge(ui: &mut egui::Ui, grade: Grade, score: u32) {
    let text = format!("{} ({}/100)", grade.label(), score);
    ui.colored_label(grade_color(grade), text)
        .on_hover_text("Mean timing accuracy across all swing phases.");
}
