use crate::document::Document;
use crate::stroke::MutableStroke;
use eframe::egui::{self, Color32, Pos2, Rect, Shape};

/// Paints the drawing canvas. Stroke points are canvas-relative and are
/// offset by the canvas rectangle when drawn.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    border: egui::Stroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
            border: egui::Stroke::new(1.0, Color32::from_gray(160)),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the committed strokes of `doc` and the stroke still in progress
    pub fn render(
        &self,
        painter: &egui::Painter,
        rect: Rect,
        doc: &Document,
        preview: Option<&MutableStroke>,
    ) {
        painter.rect_filled(rect, 0.0, self.background);
        painter.rect_stroke(rect, 0.0, self.border);

        for stroke in doc.strokes() {
            let (width, color) = (stroke.thickness(), stroke.color());
            Self::paint_polyline(painter, rect.min, stroke.points(), width, color);
        }
        if let Some(stroke) = preview {
            let (width, color) = (stroke.thickness(), stroke.color());
            Self::paint_polyline(painter, rect.min, stroke.points(), width, color);
        }
    }

    fn paint_polyline(
        painter: &egui::Painter,
        origin: Pos2,
        points: &[Pos2],
        thickness: f32,
        color: Color32,
    ) {
        let screen_points: Vec<Pos2> = points.iter().map(|p| origin + p.to_vec2()).collect();
        match screen_points.as_slice() {
            [] => {}
            [dot] => {
                painter.circle_filled(*dot, thickness / 2.0, color);
            }
            _ => {
                painter.add(Shape::line(screen_points, egui::Stroke::new(thickness, color)));
            }
        }
    }
}
