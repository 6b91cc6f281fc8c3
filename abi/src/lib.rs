//! Vitrine window compositor shared types.
//!
//! Value types passed between the compositor, the syscall layer and the
//! collaborators that supply memory and scanout. Nothing in here owns
//! kernel state; every type is `Copy` and cheap to hand across the
//! lock boundary.

#![no_std]
#![forbid(unsafe_code)]

pub mod display;
pub mod draw;
pub mod error;
pub mod pixel;
pub mod rect;
pub mod window;

pub use display::DisplayInfo;
pub use draw::{Color32, EncodedPixel};
pub use error::{CompositorError, CompositorResult};
pub use pixel::PixelFormat;
pub use rect::{Rect, RectSplit};
pub use window::{BufferDescriptor, WindowFlags, WindowId, WindowInfo};
