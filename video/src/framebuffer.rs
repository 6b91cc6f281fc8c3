use vitrine_abi::draw::Color32;
use vitrine_abi::rect::Rect;
use vitrine_abi::{CompositorError, CompositorResult, DisplayInfo};
use vitrine_gfx::PixelBuffer;
use vitrine_lib::{klog_debug, klog_warn};

use crate::memory::{MemoryService, alloc_or_die};

const MIN_FRAMEBUFFER_WIDTH: u32 = 8;
const MIN_FRAMEBUFFER_HEIGHT: u32 = 8;
const MAX_BUFFER_SIZE: usize = 64 * 1024 * 1024;

/// The physical screen, as far as the compositor is concerned.
pub trait DisplayDevice: Send {
    /// Framebuffer descriptor query. Must not change after init.
    fn info(&self) -> DisplayInfo;

    /// Push a fully composited frame to the screen.
    fn flush(&mut self, frame: &PixelBuffer) -> CompositorResult;
}

/// Display with no scanout: reports a fixed mode and accepts every flush.
#[derive(Clone, Copy, Debug)]
pub struct HeadlessDisplay {
    info: DisplayInfo,
}

impl HeadlessDisplay {
    pub const fn new(info: DisplayInfo) -> Self {
        Self { info }
    }
}

impl DisplayDevice for HeadlessDisplay {
    fn info(&self) -> DisplayInfo {
        self.info
    }

    fn flush(&mut self, _frame: &PixelBuffer) -> CompositorResult {
        Ok(())
    }
}

fn validate(info: &DisplayInfo) -> CompositorResult {
    if info.width < MIN_FRAMEBUFFER_WIDTH || info.height < MIN_FRAMEBUFFER_HEIGHT {
        return Err(CompositorError::NoFramebuffer);
    }
    if !info.is_valid() || info.buffer_size() > MAX_BUFFER_SIZE {
        return Err(CompositorError::NoFramebuffer);
    }
    Ok(())
}

/// Kernel-side copy of the screen. Every composited pixel lands here
/// before the display device sees it; it is never resized.
pub struct ShadowFramebuffer {
    info: DisplayInfo,
    pixels: PixelBuffer,
    screen: Rect,
}

impl ShadowFramebuffer {
    /// Allocate shadow storage matching `info`.
    pub fn new(info: DisplayInfo, memory: &mut dyn MemoryService) -> CompositorResult<Self> {
        if let Err(err) = validate(&info) {
            klog_warn!(
                "Framebuffer init failed: {}x{} pitch={} bpp={}",
                info.width,
                info.height,
                info.pitch,
                info.bytes_per_pixel() * 8
            );
            return Err(err);
        }

        let storage = alloc_or_die(memory, info.buffer_size(), "shadow framebuffer");
        let pixels = PixelBuffer::new(
            storage,
            info.width,
            info.height,
            info.pitch as usize,
            info.format,
        )
        .ok_or(CompositorError::NoFramebuffer)?;
        let screen = info.screen_rect().ok_or(CompositorError::NoFramebuffer)?;

        klog_debug!(
            "Framebuffer init: {}x{} pitch={} bpp={}",
            info.width,
            info.height,
            info.pitch,
            info.bytes_per_pixel() * 8
        );

        Ok(Self {
            info,
            pixels,
            screen,
        })
    }

    #[inline]
    pub fn info(&self) -> DisplayInfo {
        self.info
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.info.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.info.height
    }

    /// Whole screen, last row and column included.
    #[inline]
    pub fn screen_rect(&self) -> Rect {
        self.screen
    }

    #[inline]
    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Copy `clip` of a window's kernel buffer, placed at `(x, y)`, to the
    /// screen. The copy is clamped to the window and to the screen.
    #[inline]
    pub fn blit(&mut self, src: &PixelBuffer, x: u32, y: u32, clip: &Rect) -> u64 {
        self.pixels.copy_rect_from(src, x, y, clip)
    }

    pub fn fill(&mut self, rect: &Rect, color: Color32) -> u64 {
        let pixel = self.info.format.encode(color);
        self.pixels.fill_rect(rect, pixel)
    }

    pub fn flush(&self, display: &mut dyn DisplayDevice) -> CompositorResult {
        display.flush(&self.pixels)
    }
}
