#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod clip;
pub mod pixel_buffer;

pub use clip::ClipRegion;
pub use pixel_buffer::PixelBuffer;
