use eframe::egui;

use crate::animation::SwingAnimator;
use crate::playback::{PlaybackDriver, PlaybackSnapshot, PlaybackStatus, SimulatedClock};
use crate::scoring::TempoSummary;
use crate::timeline::SwingTimeline;
use crate::types::{OPTIMAL_BACKSWING_RATIO, OPTIMAL_TOTAL_TEMPO};
use crate::ui::components::control_strip::ControlStrip;
use crate::ui::components::phase_breakdown::PhaseBreakdown;
use crate::ui::components::swing_canvas::SwingCanvas;

pub struct TempoApp {
    driver: PlaybackDriver<SimulatedClock>,
    summary: TempoSummary,
    animator: SwingAnimator,
    snapshot: PlaybackSnapshot,
}

impl TempoApp {
    pub fn new(timeline: SwingTimeline) -> Self {
        let clock = SimulatedClock::new(timeline.total_duration());
        let summary = TempoSummary::from_timeline(&timeline);
        let driver = PlaybackDriver::new(timeline, clock);
        let snapshot = driver.snapshot();
        Self {
            driver,
            summary,
            animator: SwingAnimator::new(),
            snapshot,
        }
    }

    fn advance(&mut self, ctx: &egui::Context) {
        let dt = ctx.input(|input| input.stable_dt) as f64;
        self.driver.source_mut().advance(dt);
        self.snapshot = self.driver.tick();
        self.animator.next_frame();
        if ctx.input(|input| input.key_pressed(egui::Key::Space)) {
            self.snapshot = self.driver.toggle();
        }
    }

    fn show_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            let output = ControlStrip {
                snapshot: &self.snapshot,
            }
            .show(ui);
            if output.toggle_playback {
                self.snapshot = self.driver.toggle();
            }
            if output.reset {
                self.snapshot = self.driver.reset();
            }
            ui.add(
                egui::ProgressBar::new(self.snapshot.progress as f32)
                    .text(format!("{:.1}s", self.snapshot.current_time)),
            );
        });
    }

    fn show_breakdown(&self, ctx: &egui::Context) {
        egui::SidePanel::left("phases")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Swing Phase Breakdown");
                show_ratios(ui, &self.summary);
                ui.separator();
                PhaseBreakdown {
                    reports: &self.summary.phases,
                    active: self.snapshot.phase_index,
                }
                .show(ui);
            });
    }

    fn show_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            SwingCanvas {
                animator: &mut self.animator,
                club_face_angle: 0.0,
            }
            .show(ui);
        });
    }
}

impl eframe::App for TempoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(ctx);
        self.show_top_panel(ctx);
        self.show_breakdown(ctx);
        self.show_canvas(ctx);
        if self.snapshot.status == PlaybackStatus::Playing
            || self.animator.is_playing()
        {
            ctx.request_repaint();
        }
    }
}

fn show_ratios(ui: &mut egui::Ui, summary: &TempoSummary) {
    let ratio = summary
        .ratios
        .backswing_to_downswing
        .map_or_else(|| "n/a".to_string(), |ratio| format!("{:.1}:1", ratio));
    ui.label(format!(
        "Backswing:Downswing {} (optimal {:.0}:1)",
        ratio, OPTIMAL_BACKSWING_RATIO
    ));
    let (low, high) = OPTIMAL_TOTAL_TEMPO;
    ui.label(format!(
        "Total swing time {:.1}s (optimal {:.1}-{:.1}s)",
        summary.ratios.overall_tempo, low, high
    ));
}
