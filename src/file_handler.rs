use eframe::egui;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "bmp", "tiff"];

/// Picks up image files dropped onto the window so they can be sent for
/// recognition.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect files dropped this frame. Returns true if there were any.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return false;
        }
        self.dropped_files = dropped;
        true
    }

    /// Path of the first dropped image, clearing the queue
    pub fn take_dropped_image(&mut self) -> Option<PathBuf> {
        let files = std::mem::take(&mut self.dropped_files);
        for file in files {
            match file.path {
                Some(path) if is_image_file(&path, &file.mime) => return Some(path),
                Some(path) => {
                    log::warn!("Dropped file is not a supported image: {}", path.display());
                }
                None => {
                    log::warn!("Dropped file has no accessible path: {}", file.name);
                }
            }
        }
        None
    }

    /// Overlay listing the files being dragged over the window
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, FontId, Id, LayerId, Order};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop an image to recognize:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let layer = LayerId::new(Order::Foreground, Id::new("file_drop_target"));
        let painter = ctx.layer_painter(layer);
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            FontId::proportional(20.0),
            Color32::WHITE,
        );
    }
}

/// Check if a file is an image based on MIME type or extension
pub fn is_image_file(path: &Path, mime: &str) -> bool {
    if !mime.is_empty() {
        return mime.starts_with("image/");
    }
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_detection() {
        assert!(is_image_file(Path::new("scan.PNG"), ""));
        assert!(is_image_file(Path::new("photo"), "image/jpeg"));
        assert!(!is_image_file(Path::new("notes.txt"), ""));
        assert!(!is_image_file(Path::new("scan.png"), "text/plain"));
    }

    #[test]
    fn test_take_dropped_image_skips_non_images() {
        let mut handler = FileHandler::new();
        handler.dropped_files = vec![
            egui::DroppedFile {
                path: Some(PathBuf::from("notes.txt")),
                ..Default::default()
            },
            egui::DroppedFile {
                path: Some(PathBuf::from("page.jpg")),
                ..Default::default()
            },
        ];

        assert_eq!(handler.take_dropped_image(), Some(PathBuf::from("page.jpg")));
        assert_eq!(handler.take_dropped_image(), None);
    }
}
