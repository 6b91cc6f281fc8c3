//! Live windows and their stacking order.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use vitrine_abi::rect::Rect;
use vitrine_abi::{CompositorError, CompositorResult, WindowFlags, WindowId, WindowInfo};
use vitrine_gfx::PixelBuffer;
use vitrine_lib::klog_error;

use crate::user_buffer::UserBuffer;
use crate::zorder::ZStack;

/// One client surface: the client's buffer plus the compositor's copy.
pub struct Window {
    id: WindowId,
    x: u32,
    y: u32,
    rect: Rect,
    flags: WindowFlags,
    user: Box<dyn UserBuffer>,
    kernel: PixelBuffer,
}

impl Window {
    /// `kernel` must already match the user buffer's shape.
    pub(crate) fn new(
        id: WindowId,
        x: u32,
        y: u32,
        flags: WindowFlags,
        user: Box<dyn UserBuffer>,
        kernel: PixelBuffer,
    ) -> CompositorResult<Self> {
        let rect = Rect::from_origin_size(x, y, kernel.width(), kernel.height())
            .ok_or(CompositorError::InvalidGeometry)?;
        Ok(Self {
            id,
            x,
            y,
            rect,
            flags,
            user,
            kernel,
        })
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    /// Screen-space rectangle covered by the window.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn flags(&self) -> WindowFlags {
        self.flags
    }

    #[inline]
    pub fn kernel_buffer(&self) -> &PixelBuffer {
        &self.kernel
    }

    pub fn info(&self) -> WindowInfo {
        WindowInfo {
            id: self.id,
            x: self.x,
            y: self.y,
            width: self.kernel.width(),
            height: self.kernel.height(),
            flags: self.flags,
        }
    }

    /// Drop the background pin; the window becomes a normal one.
    pub(crate) fn demote_background(&mut self) {
        self.flags.remove(WindowFlags::BACKGROUND);
    }

    /// Take a fresh copy of the client's pixels.
    pub(crate) fn sync_from_user(&mut self) -> CompositorResult {
        self.user.copy_into(self.kernel.data_mut())
    }

    /// Release the kernel copy so its storage can go back to the allocator.
    pub(crate) fn into_kernel_storage(self) -> Box<[u8]> {
        self.kernel.into_data()
    }
}

/// Arena of windows keyed by id, with the z-stack as a separate index list.
pub struct WindowRegistry {
    windows: BTreeMap<WindowId, Window>,
    stack: ZStack,
    next_id: u32,
}

impl WindowRegistry {
    pub const fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            stack: ZStack::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Reserve the next identifier. Ids are never handed out twice, so
    /// running out of them is fatal.
    pub(crate) fn allocate_id(&mut self) -> WindowId {
        let id = WindowId(self.next_id);
        match self.next_id.checked_add(1) {
            Some(next) => self.next_id = next,
            None => {
                klog_error!("WM: window ids exhausted after {}", self.next_id);
                panic!("window manager: window ids exhausted");
            }
        }
        id
    }

    /// Insert at the front of the stack. Call [`reassign`](Self::reassign)
    /// afterwards to restore the pins.
    pub(crate) fn insert(&mut self, window: Window) {
        let id = window.id();
        self.windows.insert(id, window);
        self.stack.push(id);
    }

    pub(crate) fn remove(&mut self, id: WindowId) -> Option<Window> {
        let window = self.windows.remove(&id)?;
        self.stack.remove(id);
        Some(window)
    }

    pub fn get(&self, id: WindowId) -> CompositorResult<&Window> {
        self.windows.get(&id).ok_or(CompositorError::WindowNotFound)
    }

    pub(crate) fn get_mut(&mut self, id: WindowId) -> CompositorResult<&mut Window> {
        self.windows
            .get_mut(&id)
            .ok_or(CompositorError::WindowNotFound)
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Index of `id` in the stack, 0 being farthest back.
    pub fn z_index(&self, id: WindowId) -> Option<usize> {
        self.stack.position(id)
    }

    /// Every background-pinned window other than `keep`.
    pub(crate) fn backgrounds_except(&self, keep: WindowId) -> Vec<WindowId> {
        self.windows
            .values()
            .filter(|w| w.id() != keep && w.flags().is_background())
            .map(Window::id)
            .collect()
    }

    /// Windows from farthest back to frontmost.
    pub fn back_to_front(&self) -> impl DoubleEndedIterator<Item = &Window> + '_ {
        self.stack
            .back_to_front()
            .iter()
            .filter_map(|id| self.windows.get(id))
    }

    /// Windows from frontmost to farthest back, as of this call.
    pub fn list(&self) -> impl Iterator<Item = &Window> + '_ {
        self.back_to_front().rev()
    }

    /// Windows stacked in front of `id`, nearest first.
    pub fn windows_above(&self, id: WindowId) -> impl Iterator<Item = &Window> + '_ {
        self.stack
            .above(id)
            .iter()
            .filter_map(|above| self.windows.get(above))
    }

    pub(crate) fn raise(&mut self, id: WindowId) -> CompositorResult {
        if !self.stack.raise(id) {
            return Err(CompositorError::WindowNotFound);
        }
        Ok(())
    }

    /// Restore the stacking pins after any structural change.
    pub(crate) fn reassign(&mut self) -> bool {
        let windows = &self.windows;
        self.stack.reassign(|id| {
            windows
                .get(&id)
                .map(Window::flags)
                .unwrap_or(WindowFlags::empty())
        })
    }

    /// Stack ids from farthest back to frontmost.
    pub fn stack_ids(&self) -> &[WindowId] {
        self.stack.back_to_front()
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
