//! Texture loading
//!
//! Sprites are decoded with `image` and uploaded as nearest-filtered
//! macroquad textures. Entities never hold a texture directly, only the
//! `TextureId` handed out here, so the simulation stays free of GPU state.
//!
//! Load failures are reported as `AssetError`; the caller decides that they
//! are fatal.

use macroquad::logging::info;
use macroquad::prelude::{FilterMode, Texture2D};
use image::RgbaImage;

/// Opaque handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(usize);

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// File could not be read
    Io(String),
    /// Bytes were read but are not a decodable image
    Decode { path: String, source: image::ImageError },
    /// Image is larger than a texture can hold
    TooLarge { path: String, width: u32, height: u32 },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path, source)
            }
            AssetError::TooLarge { path, width, height } => {
                write!(f, "{} is too large ({}x{})", path, width, height)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Decode image bytes into RGBA8, checking the dimensions fit a texture
pub fn decode_rgba(path: &str, bytes: &[u8]) -> Result<RgbaImage, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|source| AssetError::Decode {
        path: path.to_string(),
        source,
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(AssetError::TooLarge {
            path: path.to_string(),
            width,
            height,
        });
    }
    Ok(rgba)
}

/// Owns every texture for the lifetime of the game
#[derive(Default)]
pub struct TextureStore {
    textures: Vec<Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read, decode and upload one sprite
    pub async fn load(&mut self, path: &str) -> Result<TextureId, AssetError> {
        let bytes = macroquad::file::load_file(path)
            .await
            .map_err(|e| AssetError::Io(format!("{}: {}", path, e)))?;
        let rgba = decode_rgba(path, &bytes)?;

        let texture = Texture2D::from_rgba8(rgba.width() as u16, rgba.height() as u16, rgba.as_raw());
        texture.set_filter(FilterMode::Nearest);

        let id = TextureId(self.textures.len());
        self.textures.push(texture);
        info!("Loaded texture {} ({}x{}) as #{}", path, rgba.width(), rgba.height(), id.0);
        Ok(id)
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture2D> {
        self.textures.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 128]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let rgba = decode_rgba("cloud.png", &png_bytes(3, 2)).unwrap();
        assert_eq!(rgba.dimensions(), (3, 2));
        assert_eq!(rgba.get_pixel(0, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = decode_rgba("eagle.png", b"definitely not a png").unwrap_err();
        assert!(err.to_string().contains("eagle.png"));
    }

    #[test]
    fn test_empty_store() {
        let store = TextureStore::new();
        assert!(store.is_empty());
        assert!(store.get(TextureId::default()).is_none());
    }
}
