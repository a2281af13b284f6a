use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while turning an image file into a texture
#[derive(Error, Debug)]
pub enum TextureGenerationError {
    #[error("image file is missing")]
    Missing,
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an image file into an egui image
pub fn load_color_image(path: &Path) -> Result<ColorImage, TextureGenerationError> {
    if !path.exists() {
        return Err(TextureGenerationError::Missing);
    }
    let img = image::open(path)?.to_rgba8();
    let size = [img.width() as usize, img.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, img.as_raw()))
}

/// Caches one texture per image slot. Bumping the version with
/// [`TextureManager::reload`] makes the next lookup re-read the file.
#[derive(Default)]
pub struct TextureManager {
    /// Texture by (slot, version)
    texture_cache: HashMap<(usize, u64), TextureHandle>,
    /// Slots whose current version failed to load, so they are not retried every frame
    failed: HashSet<(usize, u64)>,
    version: u64,
}

impl std::fmt::Debug for TextureManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureManager")
            .field("cached", &self.texture_cache.len())
            .field("version", &self.version)
            .finish()
    }
}

impl TextureManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all textures; the files changed on disk
    pub fn reload(&mut self) {
        self.version += 1;
        self.texture_cache.clear();
        self.failed.clear();
    }

    /// Gets or creates the texture for `slot`
    pub fn get_or_create_texture<F>(
        &mut self,
        slot: usize,
        generator: F,
        ctx: &Context,
    ) -> Result<TextureId, TextureGenerationError>
    where
        F: FnOnce() -> Result<ColorImage, TextureGenerationError>,
    {
        let cache_key = (slot, self.version);

        if let Some(handle) = self.texture_cache.get(&cache_key) {
            return Ok(handle.id());
        }

        let image = generator()?;
        let name = format!("sample_{}_v{}", slot, self.version);
        let handle = ctx.load_texture(&name, image, TextureOptions::LINEAR);
        let id = handle.id();
        self.texture_cache.insert(cache_key, handle);
        Ok(id)
    }

    /// Texture for the image file of `slot`, or `None` when it cannot be shown
    pub fn slot_texture(&mut self, slot: usize, path: &Path, ctx: &Context) -> Option<TextureId> {
        let key = (slot, self.version);
        if self.failed.contains(&key) {
            return None;
        }
        match self.get_or_create_texture(slot, || load_color_image(path), ctx) {
            Ok(id) => Some(id),
            Err(e) => {
                if !matches!(e, TextureGenerationError::Missing) {
                    log::warn!("Cannot show {}: {}", path.display(), e);
                }
                self.failed.insert(key);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_texture_generator() -> Result<ColorImage, TextureGenerationError> {
        Ok(ColorImage::new([10, 10], egui::Color32::WHITE))
    }

    #[test]
    fn test_cache_hit() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();

        let first = manager.get_or_create_texture(1, mock_texture_generator, &ctx).unwrap();
        let second = manager.get_or_create_texture(1, mock_texture_generator, &ctx).unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.texture_cache.len(), 1);
    }

    #[test]
    fn test_reload_drops_textures() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        manager.get_or_create_texture(1, mock_texture_generator, &ctx).unwrap();

        manager.reload();

        assert_eq!(manager.texture_cache.len(), 0);
        assert_eq!(manager.version, 1);
    }

    #[test]
    fn test_missing_file_gives_no_texture() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let dir = tempfile::tempdir().unwrap();
        assert!(manager.slot_texture(1, &dir.path().join("img-1.png"), &ctx).is_none());
        assert_eq!(manager.texture_cache.len(), 0);
    }

    #[test]
    fn test_slot_texture_from_png() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img-2.png");
        image::RgbaImage::new(4, 3).save(&path).unwrap();

        assert!(manager.slot_texture(2, &path, &ctx).is_some());
        assert_eq!(manager.texture_cache.len(), 1);
    }

    #[test]
    fn test_failed_slot_waits_for_reload() {
        let ctx = Context::default();
        let mut manager = TextureManager::new();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("img-3.png");

        assert!(manager.slot_texture(3, &path, &ctx).is_none());
        image::RgbaImage::new(2, 2).save(&path).unwrap();
        assert!(manager.slot_texture(3, &path, &ctx).is_none());

        manager.reload();
        assert!(manager.slot_texture(3, &path, &ctx).is_some());
        assert_eq!(manager.version, 1);
    }
}
