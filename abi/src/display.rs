use crate::pixel::PixelFormat;
use crate::rect::Rect;

/// Hardware framebuffer descriptor as reported by the display device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayInfo {
    pub width: u32,
    pub height: u32,
    /// Row stride in bytes.
    pub pitch: u32,
    pub format: PixelFormat,
}

impl DisplayInfo {
    pub const MAX_DIMENSION: u32 = 16384;

    #[inline]
    pub const fn new(width: u32, height: u32, pitch: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            pitch,
            format,
        }
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> u8 {
        self.format.bytes_per_pixel()
    }

    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.pitch as usize * self.height as usize
    }

    /// Whether the descriptor can back a shadow framebuffer.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width <= Self::MAX_DIMENSION
            && self.height <= Self::MAX_DIMENSION
            && self.pitch as u64 >= self.width as u64 * self.bytes_per_pixel() as u64
    }

    /// The whole screen, inclusive of the last row and column.
    #[inline]
    pub fn screen_rect(&self) -> Option<Rect> {
        Rect::from_origin_size(0, 0, self.width, self.height)
    }
}
