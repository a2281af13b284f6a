use crate::stroke::StrokeRef;
use egui::Vec2;

/// The finished strokes of the sample currently being drawn.
///
/// Points are stored relative to the canvas' top-left corner so the
/// drawing can be rasterized independently of where the canvas sits on
/// screen.
#[derive(Debug, Clone, Default)]
pub struct Document {
    strokes: Vec<StrokeRef>,
    canvas_size: Vec2,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stroke(&mut self, stroke: StrokeRef) {
        self.strokes.push(stroke);
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Size of the on-screen canvas, used as the raster size
    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn set_canvas_size(&mut self, size: Vec2) {
        self.canvas_size = size;
    }
}
