//! Kernel memory collaborator.

use alloc::boxed::Box;
use alloc::vec::Vec;

use vitrine_lib::klog_error;

/// Source of kernel-side pixel storage: window copies and the shadow
/// framebuffer.
pub trait MemoryService: Send {
    /// Zeroed block of exactly `size` bytes, or `None` when memory is exhausted.
    fn alloc(&mut self, size: usize) -> Option<Box<[u8]>>;

    /// Hand a block obtained from `alloc` back.
    fn free(&mut self, block: Box<[u8]>);
}

/// Backed by the kernel's global allocator.
#[derive(Clone, Copy, Debug, Default)]
pub struct KernelHeap;

impl MemoryService for KernelHeap {
    fn alloc(&mut self, size: usize) -> Option<Box<[u8]>> {
        let mut block = Vec::new();
        block.try_reserve_exact(size).ok()?;
        block.resize(size, 0);
        Some(block.into_boxed_slice())
    }

    fn free(&mut self, block: Box<[u8]>) {
        drop(block);
    }
}

/// Allocate or bring the kernel down: running out of memory for pixel
/// storage is not a recoverable condition.
pub(crate) fn alloc_or_die(memory: &mut dyn MemoryService, size: usize, what: &str) -> Box<[u8]> {
    match memory.alloc(size) {
        Some(block) => block,
        None => {
            klog_error!("WM: out of memory allocating {} bytes for {}", size, what);
            panic!("window manager: allocation of {} bytes for {} failed", size, what);
        }
    }
}
