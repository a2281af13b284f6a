use crate::document::Document;
use crate::stroke::Stroke;
use egui::Pos2;
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use thiserror::Error;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("canvas has no area ({width}x{height})")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Paint every stroke of `doc` onto a white image the size of the canvas
pub fn rasterize(doc: &Document) -> Result<RgbaImage, RasterError> {
    let size = doc.canvas_size();
    if !(size.x >= 1.0 && size.y >= 1.0) {
        return Err(RasterError::InvalidDimensions {
            width: size.x,
            height: size.y,
        });
    }

    let mut img = RgbaImage::from_pixel(size.x.round() as u32, size.y.round() as u32, BACKGROUND);
    for stroke in doc.strokes() {
        draw_stroke(&mut img, stroke);
    }
    Ok(img)
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Rasterize `doc`, write it to `path` as PNG and return the encoded bytes
pub fn export_png(doc: &Document, path: &Path) -> Result<Vec<u8>, RasterError> {
    let bytes = encode_png(&rasterize(doc)?)?;

    let write_err = |source| RasterError::Write {
        path: path.display().to_string(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, &bytes).map_err(write_err)?;

    log::debug!("Exported {} ({} bytes)", path.display(), bytes.len());
    Ok(bytes)
}

fn draw_stroke(img: &mut RgbaImage, stroke: &Stroke) {
    let c = stroke.color();
    let color = Rgba([c.r(), c.g(), c.b(), c.a()]);
    let radius = (stroke.thickness() / 2.0).max(0.5);

    match stroke.points() {
        [] => {}
        [single] => stamp(img, *single, radius, color),
        points => {
            for pair in points.windows(2) {
                draw_segment(img, pair[0], pair[1], radius, color);
            }
        }
    }
}

fn draw_segment(img: &mut RgbaImage, from: Pos2, to: Pos2, radius: f32, color: Rgba<u8>) {
    let delta = to - from;
    let steps = (delta.length() * 2.0).ceil().max(1.0) as i32;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(img, from + delta * t, radius, color);
    }
}

// Filled disc centred on `center`
fn stamp(img: &mut RgbaImage, center: Pos2, radius: f32, color: Rgba<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    let r = radius.ceil() as i32;
    let (cx, cy) = (center.x.round() as i32, center.y.round() as i32);

    for oy in -r..=r {
        for ox in -r..=r {
            if (ox * ox + oy * oy) as f32 > radius * radius {
                continue;
            }
            let (px, py) = (cx + ox, cy + oy);
            if px >= 0 && px < w && py >= 0 && py < h {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{Stroke, INK_COLOR, INK_THICKNESS};
    use egui::{pos2, vec2};

    fn doc_with_line() -> Document {
        let mut doc = Document::new();
        doc.set_canvas_size(vec2(40.0, 20.0));
        doc.add_stroke(Stroke::new_ref(
            INK_COLOR,
            INK_THICKNESS,
            vec![pos2(5.0, 10.0), pos2(35.0, 10.0)],
        ));
        doc
    }

    #[test]
    fn test_rasterize_draws_ink() {
        let img = rasterize(&doc_with_line()).unwrap();
        assert_eq!(img.dimensions(), (40, 20));
        assert_eq!(*img.get_pixel(20, 10), Rgba([0, 0, 0, 255]));
        assert_eq!(*img.get_pixel(20, 1), BACKGROUND);
    }

    #[test]
    fn test_zero_sized_canvas_rejected() {
        let doc = Document::new();
        assert!(matches!(rasterize(&doc), Err(RasterError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_export_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbol_images").join("img-1.png");

        let bytes = export_png(&doc_with_line(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), bytes);

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 20));
    }
}
