use thiserror::Error;

mod draw_stroke_tool;
pub use draw_stroke_tool::DrawStrokeTool;

/// Pointer input the canvas cannot apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// A drag or release arrived while no stroke was started
    #[error("no active stroke")]
    NoActiveStroke,
}
