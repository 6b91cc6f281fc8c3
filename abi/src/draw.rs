/// Canonical color representation: 0xAARRGGBB.
///
/// Use `PixelFormat::encode()` to convert to an `EncodedPixel` for
/// writing to a specific framebuffer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct Color32(pub u32);

impl Color32 {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF000000);

    /// Construct from individual RGBA components.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Construct an opaque color from RGB.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Construct an opaque color from a 0xRRGGBB value; the alpha byte is forced.
    #[inline]
    pub const fn opaque(rgb: u32) -> Self {
        Self(0xFF00_0000 | (rgb & 0x00FF_FFFF))
    }
}

/// A color value already encoded for a specific `PixelFormat`.
///
/// Produced by `PixelFormat::encode()`. The low `bytes_per_pixel` bytes,
/// little-endian, are what lands in pixel memory.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct EncodedPixel(pub u32);

impl EncodedPixel {
    #[inline]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Little-endian byte image of this pixel.
    #[inline]
    pub const fn to_le_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}
