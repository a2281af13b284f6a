use super::DrawError;
use crate::document::Document;
use crate::stroke::{MutableStroke, StrokeRef};
use egui::Pos2;

/// Turns pointer presses and drags into strokes
#[derive(Debug, Default)]
pub struct DrawStrokeTool {
    // The stroke being drawn while the pointer is held
    current_stroke: Option<MutableStroke>,
}

impl DrawStrokeTool {
    pub fn new() -> Self {
        Self { current_stroke: None }
    }

    pub fn is_drawing(&self) -> bool {
        self.current_stroke.is_some()
    }

    /// The unfinished stroke, for preview rendering
    pub fn preview(&self) -> Option<&MutableStroke> {
        self.current_stroke.as_ref()
    }

    pub fn on_pointer_down(&mut self, pos: Pos2) {
        // A press without a matching release discards the stale stroke
        self.current_stroke = Some(MutableStroke::ink(pos));
    }

    /// Extend the active stroke.
    ///
    /// Drags that began outside the canvas arrive without a press, which
    /// is reported as [`DrawError::NoActiveStroke`].
    pub fn on_pointer_move(&mut self, pos: Pos2) -> Result<(), DrawError> {
        let stroke = self.current_stroke.as_mut().ok_or(DrawError::NoActiveStroke)?;
        stroke.add_point(pos);
        Ok(())
    }

    /// Finish the stroke and commit it to `doc`
    pub fn on_pointer_up(&mut self, doc: &mut Document) -> Result<StrokeRef, DrawError> {
        let stroke = self.current_stroke.take().ok_or(DrawError::NoActiveStroke)?;
        let stroke = stroke.into_stroke_ref();
        doc.add_stroke(stroke.clone());
        Ok(stroke)
    }

    /// Forget any stroke in progress
    pub fn cancel(&mut self) {
        self.current_stroke = None;
    }
}
