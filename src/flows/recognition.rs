use crate::api::{ApiRequest, FilePart};
use crate::request::{dispatch, Notice};
use crate::state::AppContext;
use std::path::Path;

/// Result text shown before anything was recognized
pub const PLACEHOLDER: &str = "Load an image or take a picture to begin recognition...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionMode {
    Printed,
    Handwritten,
}

impl RecognitionMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Printed => "Text recognition",
            Self::Handwritten => "Handwriting recognition",
        }
    }
}

/// Collapse every run of whitespace into one space and trim both ends
pub fn format_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upload the image at `path` and return the recognized, normalized text
pub fn recognize(ctx: &AppContext, mode: RecognitionMode, path: &Path) -> Result<String, Notice> {
    let image = FilePart::from_path("img", path).map_err(Notice::from)?;
    let request = match mode {
        RecognitionMode::Printed => ApiRequest::recognize_printed(image),
        RecognitionMode::Handwritten => {
            ApiRequest::recognize_handwritten(ctx.token().as_form_value(), image)
        }
    };
    dispatch(ctx.api(), request, |body| Ok(format_text(&body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_text_collapses_whitespace() {
        assert_eq!(format_text("  a\t\tb\n c "), "a b c");
    }

    #[test]
    fn test_format_text_edge_cases() {
        assert_eq!(format_text(""), "");
        assert_eq!(format_text(" \n\t "), "");
        assert_eq!(format_text("single"), "single");
        assert_eq!(format_text("line one\r\nline two"), "line one line two");
    }
}
