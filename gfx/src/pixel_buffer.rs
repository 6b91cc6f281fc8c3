use alloc::boxed::Box;

use vitrine_abi::draw::EncodedPixel;
use vitrine_abi::pixel::PixelFormat;
use vitrine_abi::rect::Rect;

/// Owned pixel storage: a window's kernel copy or the shadow framebuffer.
///
/// Every write is clamped to the buffer's own bounds; callers hand in
/// screen-space rectangles and never index bytes themselves.
pub struct PixelBuffer {
    data: Box<[u8]>,
    width: u32,
    height: u32,
    pitch: usize,
    format: PixelFormat,
    bounds: Rect,
}

impl PixelBuffer {
    /// Wrap `data` as a `width` x `height` image with the given row stride.
    ///
    /// Returns `None` when a row does not fit in `pitch` or the storage is
    /// shorter than `pitch * height`.
    pub fn new(
        data: Box<[u8]>,
        width: u32,
        height: u32,
        pitch: usize,
        format: PixelFormat,
    ) -> Option<Self> {
        let bounds = Rect::from_origin_size(0, 0, width, height)?;
        let row_bytes = (width as usize).checked_mul(format.bytes_per_pixel() as usize)?;
        if pitch < row_bytes {
            return None;
        }
        let required = pitch.checked_mul(height as usize)?;
        if data.len() < required {
            return None;
        }

        Some(Self {
            data,
            width,
            height,
            pitch,
            format,
            bounds,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn bytes_pp(&self) -> u8 {
        self.format.bytes_per_pixel()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Give the storage back, e.g. to return it to the allocator.
    pub fn into_data(self) -> Box<[u8]> {
        self.data
    }

    /// The buffer's extent with its top-left pixel at the origin.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Read one pixel back, little-endian.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.bytes_pp() as usize;
        let offset = y as usize * self.pitch + x as usize * bpp;
        let mut bytes = [0u8; 4];
        bytes[..bpp].copy_from_slice(&self.data[offset..offset + bpp]);
        Some(u32::from_le_bytes(bytes))
    }

    /// Fill `rect`, clamped to the buffer, with one encoded pixel.
    /// Returns the number of pixels written.
    pub fn fill_rect(&mut self, rect: &Rect, pixel: EncodedPixel) -> u64 {
        let Some(area) = rect.intersection(&self.bounds()) else {
            return 0;
        };

        let bpp = self.bytes_pp() as usize;
        let bytes = pixel.to_le_bytes();
        for y in area.top()..=area.bottom() {
            let start = y as usize * self.pitch + area.left() as usize * bpp;
            let end = start + area.width() as usize * bpp;
            for px in self.data[start..end].chunks_exact_mut(bpp) {
                px.copy_from_slice(&bytes[..bpp]);
            }
        }
        area.area()
    }

    /// Copy the part of `area` that `src` covers when its top-left pixel
    /// sits at `(src_x, src_y)` in this buffer's coordinates.
    ///
    /// The copy is clamped to both buffers, so an `area` reaching past
    /// either edge is trimmed rather than read or written out of bounds.
    /// Buffers of different pixel size are never mixed. Returns the number
    /// of pixels copied.
    pub fn copy_rect_from(&mut self, src: &PixelBuffer, src_x: u32, src_y: u32, area: &Rect) -> u64 {
        let bpp = self.bytes_pp() as usize;
        if src.bytes_pp() as usize != bpp {
            return 0;
        }
        let Some(src_rect) = Rect::from_origin_size(src_x, src_y, src.width, src.height) else {
            return 0;
        };
        let Some(clipped) = area
            .intersection(&src_rect)
            .and_then(|rect| rect.intersection(&self.bounds()))
        else {
            return 0;
        };

        let row_bytes = clipped.width() as usize * bpp;
        let src_col = (clipped.left() - src_x) as usize * bpp;
        let dst_col = clipped.left() as usize * bpp;

        for y in clipped.top()..=clipped.bottom() {
            let s = (y - src_y) as usize * src.pitch + src_col;
            let d = y as usize * self.pitch + dst_col;
            self.data[d..d + row_bytes].copy_from_slice(&src.data[s..s + row_bytes]);
        }
        clipped.area()
    }
}
