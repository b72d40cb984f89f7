use eframe::egui;

use crate::scoring::PhaseReport;
use crate::ui::components::control_strip::grade_color;

pub struct PhaseBreakdown<'a> {
    pub reports: &'a [PhaseReport],
    pub active: usize,
}

impl<'a> PhaseBreakdown<'a> {
    pub fn show(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, report) in self.reports.iter().enumerate() {
                let active = index == self.active;
                let stroke = if active {
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(59, 130, 246))
                } else {
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY)
                };
                egui::Frame::none()
                    .stroke(stroke)
                    .rounding(4.0)
                    .inner_margin(6.0)
                    .show(ui, |ui| show_report(ui, report, active));
                ui.add_space(4.0);
            }
        });
    }
}

fn show_report(ui: &mut egui::Ui, report: &PhaseReport, active: bool) {
    ui.horizontal(|ui| {
        ui.strong(&report.name);
        if active {
            ui.colored_label(egui::Color32::from_rgb(59, 130, 246), "Active");
        }
    });
    ui.label(timing_caption(report));
    ui.add(
        egui::ProgressBar::new((report.accuracy / 100.0) as f32)
            .desired_width(220.0)
            .text(accuracy_caption(report)),
    );
    ui.colored_label(grade_color(report.grade), report.grade.label());
}

/// "0.8s / 0.9s  (1.2s - 2.0s)"
pub fn timing_caption(report: &PhaseReport) -> String {
    format!(
        "{:.1}s / {:.1}s  ({:.1}s - {:.1}s)",
        report.duration, report.optimal, report.start_time, report.end_time
    )
}

pub fn accuracy_caption(report: &PhaseReport) -> String {
    format!("{:.0}% accuracy", report.accuracy)
}
