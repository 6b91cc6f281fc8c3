//! Client-owned pixel sources.
//!
//! The compositor only ever reads a client buffer, and only inside
//! `render`, where the whole image is copied into the window's kernel
//! buffer. Nothing here keeps a borrow of client memory past that copy.

use alloc::boxed::Box;
use alloc::sync::Arc;

use vitrine_abi::{BufferDescriptor, CompositorError, CompositorResult};
use vitrine_lib::IrqMutex;

pub trait UserBuffer: Send {
    fn descriptor(&self) -> BufferDescriptor;

    /// Copy the first `descriptor().size_bytes()` bytes into `dst`.
    ///
    /// Either the whole image is copied or nothing is.
    fn copy_into(&self, dst: &mut [u8]) -> CompositorResult;
}

/// A buffer shared between a client and the compositor through a
/// reference-counted, lock-protected byte store. Clones are handles to the
/// same pixels.
#[derive(Clone)]
pub struct SharedUserBuffer {
    desc: BufferDescriptor,
    bytes: Arc<IrqMutex<Box<[u8]>>>,
}

impl SharedUserBuffer {
    /// Zero-filled buffer shaped by `desc`.
    pub fn new(desc: BufferDescriptor) -> Self {
        Self::from_bytes(desc, alloc::vec![0u8; desc.size_bytes()].into_boxed_slice())
    }

    pub fn from_bytes(desc: BufferDescriptor, bytes: Box<[u8]>) -> Self {
        Self {
            desc,
            bytes: Arc::new(IrqMutex::new(bytes)),
        }
    }

    /// Let the client draw into its pixels.
    pub fn with_pixels<R>(&self, f: impl FnOnce(&mut [u8]) -> R) -> R {
        let mut bytes = self.bytes.lock();
        f(&mut bytes[..])
    }

    /// Fill the whole image with one little-endian pixel value.
    pub fn fill(&self, pixel: u32) {
        let bpp = self.desc.bytes_per_pixel() as usize;
        let row_bytes = self.desc.width as usize * bpp;
        let pitch = self.desc.pitch as usize;
        let bytes = pixel.to_le_bytes();
        self.with_pixels(|pixels| {
            for row in pixels.chunks_mut(pitch).take(self.desc.height as usize) {
                let end = row_bytes.min(row.len());
                for px in row[..end].chunks_exact_mut(bpp) {
                    px.copy_from_slice(&bytes[..bpp]);
                }
            }
        });
    }
}

impl UserBuffer for SharedUserBuffer {
    fn descriptor(&self) -> BufferDescriptor {
        self.desc
    }

    fn copy_into(&self, dst: &mut [u8]) -> CompositorResult {
        let len = self.desc.size_bytes();
        let bytes = self.bytes.lock();
        if bytes.len() < len || dst.len() < len {
            return Err(CompositorError::InvalidBuffer);
        }
        dst[..len].copy_from_slice(&bytes[..len]);
        Ok(())
    }
}

/// A client buffer mapped into the kernel's view of user space.
pub struct UserPtrBuffer {
    ptr: *const u8,
    desc: BufferDescriptor,
}

// SAFETY: the pointer is only dereferenced under the compositor lock, and
// the constructor's contract keeps the mapping alive for the window's life.
unsafe impl Send for UserPtrBuffer {}

impl UserPtrBuffer {
    /// # Safety
    /// `ptr` must be non-null and valid for reads of `desc.size_bytes()`
    /// bytes for as long as the window it backs stays open. The syscall
    /// layer is expected to have validated the range against user space.
    pub unsafe fn new(ptr: *const u8, desc: BufferDescriptor) -> Self {
        Self { ptr, desc }
    }
}

impl UserBuffer for UserPtrBuffer {
    fn descriptor(&self) -> BufferDescriptor {
        self.desc
    }

    fn copy_into(&self, dst: &mut [u8]) -> CompositorResult {
        let len = self.desc.size_bytes();
        if self.ptr.is_null() || dst.len() < len {
            return Err(CompositorError::InvalidBuffer);
        }
        // SAFETY: `new`'s contract guarantees `len` readable bytes at `ptr`;
        // `dst` was just checked to hold them and cannot alias user memory.
        unsafe {
            core::ptr::copy_nonoverlapping(self.ptr, dst.as_mut_ptr(), len);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use vitrine_abi::PixelFormat;

    #[test]
    fn shared_buffer_handles_alias() {
        let desc = BufferDescriptor::packed(2, 2, PixelFormat::Xrgb8888);
        let client = SharedUserBuffer::new(desc);
        let compositor_side = client.clone();
        client.fill(0x0102_0304);

        let mut dst = vec![0u8; 16];
        compositor_side.copy_into(&mut dst).unwrap();
        assert_eq!(&dst[..4], &[4, 3, 2, 1]);
        assert_eq!(&dst[12..], &[4, 3, 2, 1]);
    }

    #[test]
    fn short_destination_copies_nothing() {
        let desc = BufferDescriptor::packed(2, 2, PixelFormat::Xrgb8888);
        let client = SharedUserBuffer::new(desc);
        client.fill(0xFFFF_FFFF);
        let mut dst = vec![0u8; 8];
        assert_eq!(client.copy_into(&mut dst), Err(CompositorError::InvalidBuffer));
        assert!(dst.iter().all(|&b| b == 0));
    }

    #[test]
    fn raw_user_pointer_copy() {
        let desc = BufferDescriptor::packed(1, 2, PixelFormat::Rgb888);
        let src = [1u8, 2, 3, 4, 5, 6];
        // SAFETY: `src` outlives `buffer`.
        let buffer = unsafe { UserPtrBuffer::new(src.as_ptr(), desc) };
        let mut dst = [0u8; 6];
        buffer.copy_into(&mut dst).unwrap();
        assert_eq!(dst, src);
    }
}
