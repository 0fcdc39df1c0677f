use std::path::PathBuf;

use egui::Color32;

use crate::board::DrawingBoard;
use crate::brush::BrushMode;
use crate::error::CommandResult;
use crate::export;

/// Actions emitted by the toolbar controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Color used by later draw stamps and by `Fill`.
    SetColor(Color32),
    /// Raw slider value; snapped to an integer width on execution.
    SetWidth(f32),
    SetMode(BrushMode),
    Clear,
    Fill,
    /// Export the canvas. `None` means the save dialog was cancelled.
    Save(Option<PathBuf>),
}

impl Command {
    pub fn execute(self, board: &mut DrawingBoard) -> CommandResult {
        match self {
            Command::SetColor(color) => {
                log::info!("Brush color set to {:?}", color);
                board.brush_mut().set_color(color);
            }
            Command::SetWidth(value) => {
                let width = board.brush_mut().set_width(value);
                log::debug!("Brush width set to {}", width);
            }
            Command::SetMode(mode) => {
                log::info!("Brush mode set to {}", mode.label());
                board.brush_mut().set_mode(mode);
            }
            Command::Clear => {
                log::info!("Clearing canvas");
                board.canvas_mut().clear();
            }
            Command::Fill => {
                let color = board.brush().color();
                log::info!("Filling canvas with {:?}", color);
                board.canvas_mut().fill(color);
            }
            Command::Save(None) => {
                log::debug!("Save cancelled");
            }
            Command::Save(Some(path)) => {
                export::save_png(board.canvas(), &path)?;
            }
        }
        Ok(())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::SetColor(_) => "Set Color",
            Command::SetWidth(_) => "Set Width",
            Command::SetMode(_) => "Set Mode",
            Command::Clear => "Clear",
            Command::Fill => "Fill",
            Command::Save(_) => "Save",
        }
    }
}
