//! 3D viewport panel - orbit input and draw list painting

use arm_renderer::{DrawList, ScreenLine, Viewport};
use egui::{Color32, Pos2, Rect, Sense, Stroke};

use crate::panels::Panel;
use crate::state::SharedAppState;

const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 22);

/// Convert an egui scroll delta to a wheel `delta_y`.
///
/// egui reports scrolling up as positive y; wheel `delta_y` is positive when
/// scrolling down, which moves the camera away.
pub fn wheel_delta_y(scroll: egui::Vec2, scale: f32) -> f32 {
    -scroll.y * scale
}

/// Central viewport showing the arm
pub struct ViewportPanel {
    wheel_scale: f32,
}

impl ViewportPanel {
    pub fn new(wheel_scale: f32) -> Self {
        Self { wheel_scale }
    }

    fn handle_input(&self, ui: &egui::Ui, response: &egui::Response, app_state: &SharedAppState) {
        let mut state = app_state.lock();

        if response.drag_started_by(egui::PointerButton::Primary) {
            state.pointer_down(true);
        }

        if response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                state.pointer_moved(delta.x, delta.y);
            }
        }

        if response.drag_stopped() {
            state.pointer_up();
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.raw_scroll_delta);
            if scroll.y != 0.0 {
                state.wheel(wheel_delta_y(scroll, self.wheel_scale));
            }
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Panel for ViewportPanel {
    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let rect = ui.available_rect_before_wrap();
        let response = ui.allocate_rect(rect, Sense::click_and_drag());

        self.handle_input(ui, &response, app_state);

        let draw_list = app_state
            .lock()
            .render(Viewport::new(rect.width(), rect.height()));

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND);
        paint_draw_list(&painter, rect, &draw_list);
    }
}

fn color32(color: [f32; 4]) -> Color32 {
    egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]).into()
}

fn paint_lines(painter: &egui::Painter, origin: Pos2, lines: &[ScreenLine]) {
    for line in lines {
        painter.line_segment(
            [
                origin + egui::vec2(line.from.x, line.from.y),
                origin + egui::vec2(line.to.x, line.to.y),
            ],
            Stroke::new(1.0, color32(line.color)),
        );
    }
}

/// Paint grid, then sorted triangles as one mesh, then lines on top
fn paint_draw_list(painter: &egui::Painter, rect: Rect, draw_list: &DrawList) {
    let origin = rect.min;

    paint_lines(painter, origin, &draw_list.grid);

    if !draw_list.triangles.is_empty() {
        let mut mesh = egui::Mesh::default();
        for triangle in &draw_list.triangles {
            let color = color32(triangle.color);
            let base = mesh.vertices.len() as u32;
            for point in triangle.points {
                mesh.colored_vertex(origin + egui::vec2(point.x, point.y), color);
            }
            mesh.add_triangle(base, base + 1, base + 2);
        }
        painter.add(egui::Shape::mesh(mesh));
    }

    paint_lines(painter, origin, &draw_list.lines);
}
