//! Pixel format definitions (Wayland wl_shm compatible)

use crate::draw::{Color32, EncodedPixel};

/// Pixel format of a framebuffer or client buffer.
///
/// These values match the Wayland wl_shm format constants. The compositor
/// only moves opaque pixels, so alpha-carrying formats are copied as-is.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 32-bit ARGB (alpha in high byte, red in bits 16-23)
    /// Memory layout: [B, G, R, A] (little-endian)
    #[default]
    Argb8888 = 0,
    /// 32-bit XRGB (alpha ignored, red in bits 16-23)
    /// Memory layout: [B, G, R, X] (little-endian)
    Xrgb8888 = 1,
    /// 24-bit RGB (no alpha)
    /// Memory layout: [B, G, R] (little-endian)
    Rgb888 = 2,
    /// 24-bit BGR (no alpha)
    /// Memory layout: [R, G, B] (little-endian)
    Bgr888 = 3,
}

impl PixelFormat {
    /// Whether buffers in the two formats hold the same bytes for the same
    /// colour. Argb8888 and Xrgb8888 differ only in the alpha byte, which
    /// scanout ignores, so they count as the same layout.
    #[inline]
    pub fn same_layout(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Argb8888 | Self::Xrgb8888, Self::Argb8888 | Self::Xrgb8888)
        ) || self == other
    }

    #[inline]
    pub fn bytes_per_pixel(self) -> u8 {
        match self {
            Self::Argb8888 | Self::Xrgb8888 => 4,
            Self::Rgb888 | Self::Bgr888 => 3,
        }
    }

    /// Encode a `Color32` (0xAARRGGBB) into this pixel format.
    #[inline]
    pub fn encode(self, color: Color32) -> EncodedPixel {
        let v = color.0;
        let a = (v >> 24) & 0xFF;
        let r = (v >> 16) & 0xFF;
        let g = (v >> 8) & 0xFF;
        let b = v & 0xFF;

        EncodedPixel(match self {
            Self::Argb8888 => (a << 24) | (r << 16) | (g << 8) | b,
            Self::Xrgb8888 => (0xFF << 24) | (r << 16) | (g << 8) | b,
            Self::Rgb888 => (r << 16) | (g << 8) | b,
            Self::Bgr888 => (b << 16) | (g << 8) | r,
        })
    }
}
