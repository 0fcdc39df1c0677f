use crate::brush::BrushState;
use crate::canvas::Canvas;
use crate::command::Command;
use crate::error::CommandResult;
use crate::input::InputEvent;
use crate::stroke::{GestureState, StrokeRenderer, StrokeSegment};

/// Everything the drawing board knows, independent of the UI toolkit.
///
/// Toolbar actions arrive as [`Command`]s and pointer activity as
/// canvas-space [`InputEvent`]s, both on the UI thread.
#[derive(Debug, Default)]
pub struct DrawingBoard {
    brush: BrushState,
    canvas: Canvas,
    stroke: StrokeRenderer,
}

impl DrawingBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn gesture_state(&self) -> GestureState {
        self.stroke.state()
    }

    pub fn execute(&mut self, command: Command) -> CommandResult {
        command.execute(self)
    }

    /// Feed one pointer event to the stroke renderer.
    ///
    /// Returns the segment painted by a move event, if any.
    pub fn handle_input(&mut self, event: &InputEvent) -> Option<StrokeSegment> {
        match *event {
            InputEvent::PointerDown { position } => {
                self.stroke.press(position);
                None
            }
            InputEvent::PointerMove { position } => {
                self.stroke.drag(position, &self.brush, &mut self.canvas)
            }
            InputEvent::PointerUp { .. } => {
                self.stroke.release();
                None
            }
        }
    }
}
