use egui::color_picker::{self, Alpha};

use crate::DrawingBoardApp;
use crate::brush::{BrushMode, MAX_WIDTH, MIN_WIDTH};
use crate::command::Command;

/// Height of the options bar above the canvas.
const TOOLBAR_HEIGHT: f32 = 60.0;

pub fn toolbar(app: &mut DrawingBoardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("toolbar")
        .exact_height(TOOLBAR_HEIGHT)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.spacing_mut().item_spacing.x = 10.0;
                let brush = *app.board().brush();

                let mut color = brush.color();
                if color_picker::color_edit_button_srgba(ui, &mut color, Alpha::Opaque).changed() {
                    app.execute(Command::SetColor(color));
                }

                let mut width = brush.width() as f32;
                let slider = egui::Slider::new(&mut width, MIN_WIDTH as f32..=MAX_WIDTH as f32)
                    .integer()
                    .show_value(false);
                if ui.add(slider).changed() {
                    app.execute(Command::SetWidth(width));
                }
                ui.add_sized([30.0, 20.0], egui::Label::new(app.board().brush().width_label()));

                ui.separator();

                // Radio semantics: exactly one of the two is ever selected.
                let mut mode = brush.mode();
                let draw = ui.radio_value(&mut mode, BrushMode::Draw, BrushMode::Draw.label());
                let erase = ui.radio_value(&mut mode, BrushMode::Erase, BrushMode::Erase.label());
                if draw.changed() || erase.changed() {
                    app.execute(Command::SetMode(mode));
                }

                ui.separator();

                if ui.button("Clear").clicked() {
                    app.execute(Command::Clear);
                }
                if ui.button("Fill").clicked() {
                    app.execute(Command::Fill);
                }

                ui.separator();

                if ui.button("Save").clicked() {
                    let path = rfd::FileDialog::new()
                        .add_filter("png files (*.png)", &["png"])
                        .set_file_name("drawing.png")
                        .save_file();
                    app.execute(Command::Save(path));
                }
            });
        });
}
