use crate::board::DrawingBoard;
use crate::command::Command;
use crate::input::{CanvasMapping, InputHandler};
use crate::panels;
use crate::texture::CanvasTexture;

pub const WINDOW_TITLE: &str = "Drawing Board";
pub const WINDOW_POSITION: [f32; 2] = [100.0, 100.0];
pub const WINDOW_SIZE: [f32; 2] = [800.0, 800.0];

#[derive(Debug, Default)]
pub struct DrawingBoardApp {
    board: DrawingBoard,
    input: InputHandler,
    texture: CanvasTexture,
}

impl DrawingBoardApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    pub fn board(&self) -> &DrawingBoard {
        &self.board
    }

    /// Run a toolbar command.
    ///
    /// Failures are logged only; the toolbar gives no feedback either way.
    pub fn execute(&mut self, command: Command) {
        let name = command.name();
        if let Err(err) = self.board.execute(command) {
            log::error!("{} failed: {}", name, err);
        }
    }

    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, response: &egui::Response, mapping: CanvasMapping) {
        for event in self.input.process_input(ctx, response, mapping) {
            self.board.handle_input(&event);
        }
    }

    pub fn canvas_texture_id(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.texture.texture_id(ctx, self.board.canvas())
    }
}

impl eframe::App for DrawingBoardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::toolbar(self, ctx);
        panels::central_panel(self, ctx);
    }
}
