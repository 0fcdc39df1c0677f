#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod brush;
pub mod canvas;
pub mod command;
pub mod error;
pub mod export;
pub mod input;
pub mod panels;
pub mod stamp;
pub mod stroke;
pub mod texture;

pub use app::DrawingBoardApp;
pub use board::DrawingBoard;
pub use brush::{BrushMode, BrushState};
pub use canvas::Canvas;
pub use command::Command;
pub use error::{CommandError, ExportError};
pub use input::{CanvasMapping, InputEvent, InputHandler};
pub use stroke::{GestureState, StrokeRenderer, StrokeSegment};
