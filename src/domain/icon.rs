//! Token Icon
//!
//! Decoded, fixed-size token icon. Raw image bytes (PNG/JPEG, format
//! auto-detected) are decoded, converted to RGBA8, and downsampled to a
//! fixed 64x64 so every icon renders at the same size.

use std::io::Cursor;

use image::imageops::FilterType;
use image::{ImageFormat, RgbaImage};
use thiserror::Error;

/// Fixed icon edge length in pixels.
pub const ICON_SIZE: u32 = 64;

/// Icon decode/encode errors.
#[derive(Debug, Error)]
pub enum IconDecodeError {
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    #[error("pixel buffer has wrong dimensions")]
    BadBuffer,
}

/// A renderable 64x64 RGBA icon for one token mint.
#[derive(Debug, Clone)]
pub struct TokenIcon {
    /// Mint address the icon belongs to.
    pub mint: String,
    /// Edge length in pixels (always [`ICON_SIZE`]).
    pub size: u32,
    /// RGBA8 pixel data, `size * size * 4` bytes.
    pub rgba: Vec<u8>,
}

impl TokenIcon {
    /// Decode raw image bytes and resize to the fixed icon dimensions.
    pub fn from_bytes(mint: &str, bytes: &[u8]) -> Result<Self, IconDecodeError> {
        let decoded = image::load_from_memory(bytes)?;
        let resized = decoded
            .resize_exact(ICON_SIZE, ICON_SIZE, FilterType::Lanczos3)
            .to_rgba8();

        Ok(Self {
            mint: mint.to_string(),
            size: ICON_SIZE,
            rgba: resized.into_raw(),
        })
    }

    /// Re-encode the icon as PNG bytes for writing to disk.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, IconDecodeError> {
        let img = RgbaImage::from_raw(self.size, self.size, self.rgba.clone())
            .ok_or(IconDecodeError::BadBuffer)?;

        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn test_decode_and_resize_small_image() {
        let bytes = png_fixture(2, 2);
        let icon = TokenIcon::from_bytes("Mint111", &bytes).unwrap();
        assert_eq!(icon.mint, "Mint111");
        assert_eq!(icon.size, ICON_SIZE);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn test_decode_and_resize_large_image() {
        let bytes = png_fixture(200, 100);
        let icon = TokenIcon::from_bytes("Mint222", &bytes).unwrap();
        assert_eq!(icon.size, ICON_SIZE);
        assert_eq!(icon.rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
    }

    #[test]
    fn test_invalid_bytes_fail() {
        let result = TokenIcon::from_bytes("Mint333", b"not an image");
        assert!(matches!(result, Err(IconDecodeError::Decode(_))));
    }

    #[test]
    fn test_png_round_trip() {
        let bytes = png_fixture(8, 8);
        let icon = TokenIcon::from_bytes("Mint444", &bytes).unwrap();

        let png = icon.to_png_bytes().unwrap();
        let reloaded = TokenIcon::from_bytes("Mint444", &png).unwrap();
        assert_eq!(reloaded.rgba.len(), icon.rgba.len());
    }
}
