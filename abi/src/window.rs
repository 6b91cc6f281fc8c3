use core::fmt;

use bitflags::bitflags;

use crate::pixel::PixelFormat;

/// Identifier handed to the client on open. Assigned monotonically and
/// never reused while the compositor runs.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u32);

impl WindowId {
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
    /// Stacking placement requested when a window is opened.
    ///
    /// With neither flag set the window stacks normally and moves to the
    /// front when raised.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        /// Pinned to the farthest-back slot. At most one window holds it.
        const BACKGROUND = 1 << 0;
        /// Pinned above every normal window.
        const FOREGROUND = 1 << 1;
    }
}

impl WindowFlags {
    #[inline]
    pub fn is_background(self) -> bool {
        self.contains(WindowFlags::BACKGROUND)
    }

    #[inline]
    pub fn is_foreground(self) -> bool {
        self.contains(WindowFlags::FOREGROUND) && !self.is_background()
    }
}

/// Shape of a client pixel buffer. The bytes themselves stay with the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferDescriptor {
    pub width: u32,
    pub height: u32,
    /// Row stride in bytes.
    pub pitch: u32,
    pub format: PixelFormat,
}

impl BufferDescriptor {
    #[inline]
    pub const fn new(width: u32, height: u32, pitch: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            pitch,
            format,
        }
    }

    /// Tightly packed descriptor: pitch equals one row of pixels.
    #[inline]
    pub fn packed(width: u32, height: u32, format: PixelFormat) -> Self {
        Self::new(
            width,
            height,
            width.saturating_mul(format.bytes_per_pixel() as u32),
            format,
        )
    }

    #[inline]
    pub fn bytes_per_pixel(&self) -> u8 {
        self.format.bytes_per_pixel()
    }

    #[inline]
    pub fn size_bytes(&self) -> usize {
        self.pitch as usize * self.height as usize
    }

    /// Non-empty and every row fits inside the pitch.
    pub fn is_valid(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.pitch as u64 >= self.width as u64 * self.bytes_per_pixel() as u64
    }
}

/// Snapshot of one window for enumeration by the syscall layer.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowInfo {
    pub id: WindowId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub flags: WindowFlags,
}
