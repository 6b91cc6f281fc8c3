use core::fmt;

/// Failure conditions reported by compositor entry points.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompositorError {
    /// No live window carries the requested id.
    WindowNotFound = 1,
    /// A rectangle with inverted bounds reached the rectangle algebra.
    InvalidGeometry = 2,
    /// A client buffer descriptor cannot back a window.
    InvalidBuffer = 3,
    /// The display device reported no usable framebuffer.
    NoFramebuffer = 4,
    /// An entry point ran before `init`.
    NotInitialized = 5,
    /// `init` ran twice.
    AlreadyInitialized = 6,
    /// The display device rejected a flush.
    FlushFailed = 7,
}

impl CompositorError {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompositorError::WindowNotFound => "window not found",
            CompositorError::InvalidGeometry => "invalid geometry",
            CompositorError::InvalidBuffer => "invalid buffer descriptor",
            CompositorError::NoFramebuffer => "no framebuffer",
            CompositorError::NotInitialized => "compositor not initialized",
            CompositorError::AlreadyInitialized => "compositor already initialized",
            CompositorError::FlushFailed => "display flush failed",
        }
    }

    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for CompositorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type CompositorResult<T = ()> = Result<T, CompositorError>;
