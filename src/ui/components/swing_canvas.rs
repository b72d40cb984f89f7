use eframe::egui::{self, Color32, Pos2, Stroke, Vec2};

use crate::animation::{CameraView, Pose, SwingAnimator, TOTAL_FRAMES};

const BODY: Color32 = Color32::from_rgb(55, 65, 81);
const CLUB: Color32 = Color32::from_rgb(139, 92, 246);
const PLANE: Color32 = Color32::from_rgb(34, 197, 94);
const TARGET: Color32 = Color32::from_rgb(239, 68, 68);
const GRID: Color32 = Color32::from_rgb(229, 231, 235);
const CLUB_LENGTH: f32 = 100.0;
const ARC_RADIUS: f32 = 80.0;

/// Animated stick golfer with view selection and frame controls.
pub struct SwingCanvas<'a> {
    pub animator: &'a mut SwingAnimator,
    pub club_face_angle: f32,
}

impl<'a> SwingCanvas<'a> {
    pub fn show(self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for view in CameraView::ALL {
                if ui
                    .selectable_label(self.animator.view() == view, view.label())
                    .clicked()
                {
                    self.animator.set_view(view);
                }
            }
        });

        let size = egui::vec2(ui.available_width().min(600.0), 400.0);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        draw_grid(&painter, rect);
        let center = rect.center();
        let pose = self.animator.pose();
        match self.animator.view() {
            CameraView::Side => draw_side(&painter, center, &pose, self.club_face_angle),
            CameraView::Front => draw_front(&painter, center, &pose),
            CameraView::Top => draw_top(&painter, center, &pose),
            CameraView::Behind => {
                draw_side(&painter, center, &pose, self.club_face_angle);
                painter.extend(egui::Shape::dashed_line(
                    &[center + egui::vec2(0.0, 120.0), egui::pos2(center.x, rect.top())],
                    Stroke::new(2.0, TARGET),
                    5.0,
                    5.0,
                ));
            }
        }
        if self.animator.view() == CameraView::Side {
            painter.extend(egui::Shape::dashed_line(
                &[center + egui::vec2(-100.0, 50.0), center + egui::vec2(50.0, -100.0)],
                Stroke::new(2.0, PLANE),
                3.0,
                3.0,
            ));
        }
        painter.circle_filled(center + egui::vec2(30.0, 100.0), 4.0, Color32::WHITE);
        painter.text(
            rect.left_top() + egui::vec2(20.0, 20.0),
            egui::Align2::LEFT_TOP,
            format!("Phase: {}", self.animator.position().stage.label()),
            egui::FontId::proportional(16.0),
            BODY,
        );

        ui.horizontal(|ui| {
            if ui.button("Reset").clicked() {
                self.animator.reset();
            }
            if ui.button("<<").clicked() {
                self.animator.step_back();
            }
            let label = if self.animator.is_playing() { "Pause" } else { "Play" };
            if ui.button(label).clicked() {
                self.animator.toggle();
            }
            if ui.button(">>").clicked() {
                self.animator.step_forward();
            }
            let mut frame = self.animator.frame();
            if ui
                .add(egui::Slider::new(&mut frame, 0..=TOTAL_FRAMES - 1).text("Frame"))
                .changed()
            {
                self.animator.set_frame(frame);
            }
        });
    }
}

/// `offset` rotated clockwise on screen by `degrees`.
pub fn rotate(offset: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    egui::vec2(offset.x * cos - offset.y * sin, offset.x * sin + offset.y * cos)
}

fn draw_grid(painter: &egui::Painter, rect: egui::Rect) {
    let stroke = Stroke::new(1.0, GRID);
    let mut x = rect.left();
    while x <= rect.right() {
        painter.line_segment([egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())], stroke);
        x += 40.0;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        painter.line_segment([egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)], stroke);
        y += 40.0;
    }
    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::DARK_GRAY));
}

fn draw_side(painter: &egui::Painter, center: Pos2, pose: &Pose, face_angle: f32) {
    let stroke = Stroke::new(4.0, BODY);
    painter.circle_stroke(center + egui::vec2(-20.0, -120.0), 15.0, stroke);

    let hips = center + egui::vec2(0.0, -80.0);
    let spine = rotate(egui::vec2(0.0, 40.0), pose.body_tilt);
    painter.line_segment([hips - spine, hips + spine], stroke);

    let grip = center + egui::vec2(-10.0, -40.0);
    let head = grip + rotate(egui::vec2(0.0, CLUB_LENGTH), pose.club_angle);
    painter.line_segment([grip, head], Stroke::new(3.0, CLUB));
    let face = rotate(egui::vec2(8.0, 0.0), pose.club_angle + face_angle);
    painter.line_segment([head - face, head + face], Stroke::new(6.0, BODY));

    for side in [-1.0, 1.0] {
        painter.line_segment(
            [
                center + egui::vec2(5.0 * side, 40.0),
                center + egui::vec2(15.0 * side, 100.0),
            ],
            stroke,
        );
    }
}

fn draw_front(painter: &egui::Painter, center: Pos2, pose: &Pose) {
    let stroke = Stroke::new(4.0, BODY);
    painter.circle_stroke(center + egui::vec2(0.0, -120.0), 15.0, stroke);
    let shoulders = center + egui::vec2(0.0, -80.0);
    let half = rotate(egui::vec2(30.0, 0.0), pose.shoulder_rotation);
    painter.line_segment([shoulders - half, shoulders + half], stroke);
    painter.line_segment([shoulders, center + egui::vec2(0.0, 40.0)], stroke);
}

fn draw_top(painter: &egui::Painter, center: Pos2, pose: &Pose) {
    painter.circle_stroke(center, 20.0, Stroke::new(3.0, BODY));
    let arc: Vec<Pos2> = (0..=32)
        .map(|step| {
            let angle = -std::f32::consts::FRAC_PI_2 + std::f32::consts::PI * step as f32 / 32.0;
            center + egui::vec2(angle.cos(), angle.sin()) * ARC_RADIUS
        })
        .collect();
    painter.add(egui::Shape::line(arc, Stroke::new(2.0, PLANE)));
    let club = center + egui::vec2(pose.arc_angle.cos(), pose.arc_angle.sin()) * ARC_RADIUS;
    painter.line_segment([center, club], Stroke::new(4.0, Color32::from_rgb(245, 158, 11)));
}
