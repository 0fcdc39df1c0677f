use egui::{Color32, Rect, pos2};

use crate::DrawingBoardApp;
use crate::input::CanvasMapping;

/// Shown through transparent canvas pixels.
const CANVAS_BACKGROUND: Color32 = Color32::WHITE;

pub fn central_panel(app: &mut DrawingBoardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(CANVAS_BACKGROUND))
        .show(ctx, |ui| {
            let size = app.board().canvas().size_vec2();
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

            // Pointer positions are window-relative; the mapping comes from
            // wherever the layout actually placed the canvas this frame.
            let mapping = CanvasMapping::new(rect, size);
            app.handle_canvas_input(ctx, &response, mapping);

            let texture_id = app.canvas_texture_id(ctx);
            let painter = ui.painter_at(rect);
            painter.rect_filled(rect, 0.0, CANVAS_BACKGROUND);
            painter.image(
                texture_id,
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        });
}
