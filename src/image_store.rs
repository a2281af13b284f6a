use base64::Engine;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveImageError {
    #[error("invalid base64 image data: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to write image: {0}")]
    Write(#[from] std::io::Error),
}

/// Decode a base64 string and write the raw bytes to `path`, replacing any
/// existing file. Surrounding whitespace and line breaks are tolerated.
pub fn save_image_from_base64(encoded: &str, path: &Path) -> Result<usize, SaveImageError> {
    let compact: String = encoded.split_whitespace().collect();
    let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;

    log::debug!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbol_images").join("img-1.png");

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"old contents").unwrap();

        let written = save_image_from_base64("aGVs\nbG8=", &path).unwrap();
        assert_eq!(written, 5);
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img-1.png");
        assert!(matches!(
            save_image_from_base64("not base64!", &path),
            Err(SaveImageError::Decode(_))
        ));
        assert!(!path.exists());
    }
}
