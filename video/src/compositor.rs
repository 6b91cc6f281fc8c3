//! Damage-driven compositing over the window stack.
//!
//! Every repaint works the same way: seed a [`ClipRegion`] with the damaged
//! rectangle, subtract every window stacked in front, and blit only what is
//! left. No pixel is written that a window in front would cover.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use vitrine_abi::draw::Color32;
use vitrine_abi::rect::Rect;
use vitrine_abi::{
    BufferDescriptor, CompositorError, CompositorResult, DisplayInfo, WindowFlags, WindowId,
    WindowInfo,
};
use vitrine_gfx::{ClipRegion, PixelBuffer};
use vitrine_lib::{RandomSource, WmConfig, klog_debug, klog_warn};

use crate::framebuffer::{DisplayDevice, ShadowFramebuffer};
use crate::hit_test;
use crate::memory::{MemoryService, alloc_or_die};
use crate::placement::assign_position;
use crate::registry::{Window, WindowRegistry};
use crate::user_buffer::UserBuffer;

/// The whole compositor: windows, stacking, and the shadow framebuffer.
///
/// Constructed once the framebuffer descriptor is known. Methods run to
/// completion; callers serialize them (see `compositor_context`).
pub struct WindowManager {
    display: Box<dyn DisplayDevice>,
    memory: Box<dyn MemoryService>,
    rng: Box<dyn RandomSource>,
    config: WmConfig,
    clear: Color32,
    framebuffer: ShadowFramebuffer,
    registry: WindowRegistry,
}

impl WindowManager {
    pub fn new(
        display: Box<dyn DisplayDevice>,
        mut memory: Box<dyn MemoryService>,
        rng: Box<dyn RandomSource>,
        config: WmConfig,
    ) -> CompositorResult<Self> {
        let framebuffer = ShadowFramebuffer::new(display.info(), memory.as_mut())?;
        Ok(Self {
            display,
            memory,
            rng,
            config,
            clear: Color32::opaque(config.clear_rgb),
            framebuffer,
            registry: WindowRegistry::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &WmConfig {
        &self.config
    }

    #[inline]
    pub fn framebuffer(&self) -> &ShadowFramebuffer {
        &self.framebuffer
    }

    #[inline]
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    fn check_descriptor(&self, desc: &BufferDescriptor) -> CompositorResult {
        let screen = self.framebuffer.info();
        if !desc.is_valid()
            || desc.width > DisplayInfo::MAX_DIMENSION
            || desc.height > DisplayInfo::MAX_DIMENSION
            || !desc.format.same_layout(screen.format)
        {
            klog_warn!(
                "WM: rejecting buffer {}x{} pitch={} format={:?} (screen {:?})",
                desc.width,
                desc.height,
                desc.pitch,
                desc.format,
                screen.format
            );
            return Err(CompositorError::InvalidBuffer);
        }
        Ok(())
    }

    /// Register a client buffer as a new window.
    ///
    /// The window gets a zeroed kernel copy, a position, and the front of
    /// its stacking layer. Nothing is painted until the client renders.
    pub fn open_window(
        &mut self,
        user: Box<dyn UserBuffer>,
        flags: WindowFlags,
    ) -> CompositorResult<WindowId> {
        let desc = user.descriptor();
        self.check_descriptor(&desc)?;

        let storage = alloc_or_die(self.memory.as_mut(), desc.size_bytes(), "window buffer");
        let kernel = PixelBuffer::new(
            storage,
            desc.width,
            desc.height,
            desc.pitch as usize,
            desc.format,
        )
        .ok_or(CompositorError::InvalidBuffer)?;

        let (x, y) = assign_position(&desc, &self.framebuffer.info(), self.rng.as_mut());
        let id = self.registry.allocate_id();
        let window = Window::new(id, x, y, flags, user, kernel)?;

        if flags.is_background() {
            for previous in self.registry.backgrounds_except(id) {
                klog_warn!(
                    "WM: window {} replaces window {} as background",
                    id,
                    previous
                );
                if let Ok(win) = self.registry.get_mut(previous) {
                    win.demote_background();
                }
            }
        }

        self.registry.insert(window);
        self.registry.reassign();

        klog_debug!(
            "WM: open window {} {}x{} at ({}, {}) flags={:#x}",
            id,
            desc.width,
            desc.height,
            x,
            y,
            flags.bits()
        );
        Ok(id)
    }

    /// Destroy a window and repaint the whole screen without it.
    pub fn close_window(&mut self, id: WindowId) -> CompositorResult {
        let Some(window) = self.registry.remove(id) else {
            klog_warn!("WM: close: no window with id {}", id);
            return Err(CompositorError::WindowNotFound);
        };

        self.memory.free(window.into_kernel_storage());
        self.registry.reassign();
        klog_debug!("WM: closed window {}", id);

        self.refresh_screen();
        Ok(())
    }

    /// Copy the client's pixels in and repaint the window's area.
    pub fn render_window(&mut self, id: WindowId) -> CompositorResult {
        let window = match self.registry.get_mut(id) {
            Ok(window) => window,
            Err(err) => {
                klog_warn!("WM: render called for unknown window {}", id);
                return Err(err);
            }
        };
        window.sync_from_user()?;
        let rect = window.rect();

        self.refresh_partial(&rect);
        Ok(())
    }

    /// Bring a window to the front of its stacking layer.
    pub fn raise_window(&mut self, id: WindowId) -> CompositorResult {
        if let Err(err) = self.registry.raise(id) {
            klog_warn!("WM: raise: no window with id {}", id);
            return Err(err);
        }
        self.registry.reassign();
        let rect = self.registry.get(id)?.rect();
        klog_debug!("WM: raised window {}", id);

        self.refresh_partial(&rect);
        Ok(())
    }

    #[inline]
    pub fn window_at(&self, x: u32, y: u32) -> Option<WindowId> {
        hit_test::window_at(&self.registry, x, y)
    }

    pub fn get(&self, id: WindowId) -> CompositorResult<&Window> {
        self.registry.get(id)
    }

    /// Snapshot of every window, frontmost first.
    pub fn windows(&self) -> Vec<WindowInfo> {
        self.registry.list().map(Window::info).collect()
    }

    /// The parts of `damage` where window `id` is not hidden.
    pub fn visible_region(&self, id: WindowId, damage: &Rect) -> CompositorResult<ClipRegion> {
        let window = self.registry.get(id)?;
        Ok(visible_region(&self.registry, window, damage))
    }

    /// Paint the unoccluded part of window `id` inside `damage`. Returns
    /// the number of pixels written.
    pub fn draw_window(&mut self, id: WindowId, damage: &Rect) -> CompositorResult<u64> {
        let window = self.registry.get(id)?;
        Ok(paint_window(&mut self.framebuffer, &self.registry, window, damage))
    }

    /// Repaint everything inside `damage` and push the frame out. Returns
    /// the number of window pixels written.
    ///
    /// Damage entirely off screen paints nothing but still flushes.
    pub fn refresh_partial(&mut self, damage: &Rect) -> u64 {
        let painted = match damage.intersection(&self.framebuffer.screen_rect()) {
            Some(damage) => self.repaint(&damage),
            None => 0,
        };

        if self.config.flush {
            if let Err(err) = self.framebuffer.flush(self.display.as_mut()) {
                klog_warn!("WM: display flush failed: {}", err);
            }
        }
        painted
    }

    /// Desktop fill plus every window, for `damage` already clamped to the
    /// screen.
    fn repaint(&mut self, damage: &Rect) -> u64 {
        let damage = *damage;
        let mut desktop = ClipRegion::from_rect(damage);
        for window in self.registry.back_to_front() {
            desktop.subtract(&window.rect());
        }
        for rect in &desktop {
            self.framebuffer.fill(rect, self.clear);
        }

        let mut painted = 0;
        for window in self.registry.back_to_front() {
            if window.rect().intersects(&damage) {
                painted += paint_window(&mut self.framebuffer, &self.registry, window, &damage);
            }
        }
        painted
    }

    pub fn refresh_screen(&mut self) -> u64 {
        let screen = self.framebuffer.screen_rect();
        self.refresh_partial(&screen)
    }

    /// Log the stack from the back, e.g. `2 -> 0 -> 5 -> none`.
    pub fn dump_windows(&self) {
        let mut line = String::new();
        for id in self.registry.stack_ids() {
            let _ = write!(line, "{} -> ", id);
        }
        line.push_str("none");
        klog_debug!("WM: stack {}", line);
    }
}

fn visible_region(registry: &WindowRegistry, window: &Window, damage: &Rect) -> ClipRegion {
    let rect = window.rect();
    if !rect.intersects(damage) {
        return ClipRegion::new();
    }

    let mut region = ClipRegion::new();
    region.add(*damage);
    for above in registry.windows_above(window.id()) {
        region.subtract(&above.rect());
    }
    region.intersect(&rect);
    region
}

fn paint_window(
    framebuffer: &mut ShadowFramebuffer,
    registry: &WindowRegistry,
    window: &Window,
    damage: &Rect,
) -> u64 {
    let (x, y) = window.position();
    let region = visible_region(registry, window, damage);
    region
        .iter()
        .map(|clip| framebuffer.blit(window.kernel_buffer(), x, y, clip))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::HeadlessDisplay;
    use crate::memory::KernelHeap;
    use crate::user_buffer::SharedUserBuffer;
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicUsize, Ordering};
    use vitrine_abi::PixelFormat;

    const SCREEN: DisplayInfo = DisplayInfo::new(64, 64, 64 * 4, PixelFormat::Xrgb8888);

    #[derive(Clone, Default)]
    struct Counters {
        allocs: Arc<AtomicUsize>,
        frees: Arc<AtomicUsize>,
        flushes: Arc<AtomicUsize>,
    }

    struct CountingHeap(Counters);

    impl MemoryService for CountingHeap {
        fn alloc(&mut self, size: usize) -> Option<Box<[u8]>> {
            self.0.allocs.fetch_add(1, Ordering::Relaxed);
            KernelHeap.alloc(size)
        }

        fn free(&mut self, block: Box<[u8]>) {
            self.0.frees.fetch_add(1, Ordering::Relaxed);
            KernelHeap.free(block);
        }
    }

    struct RecordingDisplay {
        inner: HeadlessDisplay,
        counters: Counters,
        fail: bool,
    }

    impl DisplayDevice for RecordingDisplay {
        fn info(&self) -> DisplayInfo {
            self.inner.info()
        }

        fn flush(&mut self, _frame: &PixelBuffer) -> CompositorResult {
            self.counters.flushes.fetch_add(1, Ordering::Relaxed);
            if self.fail {
                return Err(CompositorError::FlushFailed);
            }
            Ok(())
        }
    }

    /// Hands out scripted values so placement is fully predictable.
    struct Scripted(Vec<u32>);

    impl RandomSource for Scripted {
        fn next_u32(&mut self) -> u32 {
            if self.0.is_empty() { 0 } else { self.0.remove(0) }
        }
    }

    fn manager_with(script: &[u32], config: WmConfig, fail_flush: bool) -> (WindowManager, Counters) {
        let counters = Counters::default();
        let display = RecordingDisplay {
            inner: HeadlessDisplay::new(SCREEN),
            counters: counters.clone(),
            fail: fail_flush,
        };
        let wm = WindowManager::new(
            Box::new(display),
            Box::new(CountingHeap(counters.clone())),
            Box::new(Scripted(script.to_vec())),
            config,
        )
        .unwrap();
        (wm, counters)
    }

    fn manager(script: &[u32]) -> (WindowManager, Counters) {
        manager_with(script, WmConfig::default(), false)
    }

    fn open(wm: &mut WindowManager, w: u32, h: u32, flags: WindowFlags, pixel: u32) -> WindowId {
        let client = SharedUserBuffer::new(BufferDescriptor::packed(w, h, PixelFormat::Xrgb8888));
        client.fill(pixel);
        wm.open_window(Box::new(client), flags).unwrap()
    }

    fn r(top: u32, left: u32, bottom: u32, right: u32) -> Rect {
        Rect::new(top, left, bottom, right).unwrap()
    }

    fn pixel(wm: &WindowManager, x: u32, y: u32) -> u32 {
        wm.framebuffer().pixels().pixel_at(x, y).unwrap()
    }

    const RED: u32 = 0x00AA_0000;
    const GREEN: u32 = 0x0000_BB00;

    #[test]
    fn occluded_window_paints_a_ring() {
        // A at (0,0) 20x20, B at (5,5) 10x10 in front of it.
        let (mut wm, _) = manager(&[0, 0, 5, 5]);
        let a = open(&mut wm, 20, 20, WindowFlags::empty(), RED);
        let b = open(&mut wm, 10, 10, WindowFlags::empty(), GREEN);
        assert_eq!(wm.get(b).unwrap().rect(), r(5, 5, 14, 14));

        let a_rect = wm.get(a).unwrap().rect();
        let region = wm.visible_region(a, &a_rect).unwrap();
        assert_eq!(region.len(), 4);
        assert_eq!(region.area(), 400 - 100);
        for clip in &region {
            assert!(!clip.intersects(&r(5, 5, 14, 14)));
        }

        wm.render_window(a).unwrap();
        wm.render_window(b).unwrap();
        assert_eq!(pixel(&wm, 0, 0), RED);
        assert_eq!(pixel(&wm, 7, 7), GREEN);

        // Redrawing A must leave B's pixels alone.
        assert_eq!(wm.draw_window(a, &a_rect).unwrap(), 300);
        assert_eq!(pixel(&wm, 5, 5), GREEN);
        assert_eq!(pixel(&wm, 14, 14), GREEN);
        assert_eq!(pixel(&wm, 15, 15), RED);
    }

    #[test]
    fn corner_occluder_leaves_two_strips() {
        let (mut wm, _) = manager(&[0, 0, 0, 0]);
        let a = open(&mut wm, 20, 20, WindowFlags::empty(), RED);
        let _b = open(&mut wm, 10, 10, WindowFlags::empty(), GREEN);
        let a_rect = wm.get(a).unwrap().rect();
        let region = wm.visible_region(a, &a_rect).unwrap();
        assert_eq!(region.len(), 2);
        assert_eq!(region.area(), 300);
    }

    #[test]
    fn fully_covered_window_paints_nothing() {
        let (mut wm, _) = manager(&[3, 3, 0, 0]);
        let a = open(&mut wm, 10, 10, WindowFlags::empty(), RED);
        let _b = open(&mut wm, 30, 30, WindowFlags::empty(), GREEN);
        let a_rect = wm.get(a).unwrap().rect();
        assert!(wm.visible_region(a, &a_rect).unwrap().is_empty());
        assert_eq!(wm.draw_window(a, &a_rect).unwrap(), 0);
    }

    #[test]
    fn damage_outside_window_is_a_no_op() {
        let (mut wm, _) = manager(&[0, 0]);
        let a = open(&mut wm, 10, 10, WindowFlags::empty(), RED);
        assert_eq!(wm.draw_window(a, &r(40, 40, 50, 50)).unwrap(), 0);
        assert_eq!(
            wm.draw_window(WindowId(99), &r(0, 0, 1, 1)),
            Err(CompositorError::WindowNotFound)
        );
    }

    #[test]
    fn hit_test_prefers_later_window() {
        let (mut wm, _) = manager(&[0, 0, 5, 5]);
        let a = open(&mut wm, 20, 20, WindowFlags::empty(), RED);
        let b = open(&mut wm, 10, 10, WindowFlags::empty(), GREEN);
        assert_eq!(wm.window_at(7, 7), Some(b));
        assert_eq!(wm.window_at(1, 1), Some(a));
        assert_eq!(wm.window_at(19, 19), Some(a));
        assert_eq!(wm.window_at(40, 40), None);
    }

    #[test]
    fn raise_repaints_raised_window() {
        let (mut wm, _) = manager(&[0, 0, 5, 5]);
        let a = open(&mut wm, 20, 20, WindowFlags::empty(), RED);
        let b = open(&mut wm, 10, 10, WindowFlags::empty(), GREEN);
        wm.render_window(a).unwrap();
        wm.render_window(b).unwrap();
        assert_eq!(pixel(&wm, 7, 7), GREEN);

        wm.raise_window(a).unwrap();
        assert_eq!(wm.window_at(7, 7), Some(a));
        assert_eq!(pixel(&wm, 7, 7), RED);
        assert_eq!(wm.raise_window(WindowId(42)), Err(CompositorError::WindowNotFound));
    }

    #[test]
    fn close_frees_and_excludes() {
        let (mut wm, counters) = manager(&[0, 0, 5, 5]);
        let a = open(&mut wm, 20, 20, WindowFlags::empty(), RED);
        let b = open(&mut wm, 10, 10, WindowFlags::empty(), GREEN);
        wm.render_window(a).unwrap();
        wm.render_window(b).unwrap();
        // Shadow framebuffer plus two windows.
        assert_eq!(counters.allocs.load(Ordering::Relaxed), 3);

        wm.close_window(b).unwrap();
        assert_eq!(counters.frees.load(Ordering::Relaxed), 1);
        assert_eq!(wm.get(b).err(), Some(CompositorError::WindowNotFound));
        assert_eq!(wm.window_at(7, 7), Some(a));
        assert!(wm.windows().iter().all(|info| info.id != b));
        // The full refresh uncovered A where B used to be.
        assert_eq!(pixel(&wm, 7, 7), RED);

        assert_eq!(wm.close_window(b), Err(CompositorError::WindowNotFound));
        assert_eq!(counters.frees.load(Ordering::Relaxed), 1);
        assert_eq!(wm.windows().len(), 1);
    }

    #[test]
    fn closing_last_window_clears_its_area() {
        let (mut wm, _) = manager(&[2, 2]);
        let a = open(&mut wm, 8, 8, WindowFlags::empty(), RED);
        wm.render_window(a).unwrap();
        assert_eq!(pixel(&wm, 3, 3), RED);
        wm.close_window(a).unwrap();
        assert_eq!(pixel(&wm, 3, 3), Color32::BLACK.0);
    }

    #[test]
    fn render_unknown_window_changes_nothing() {
        let (mut wm, counters) = manager(&[]);
        assert_eq!(
            wm.render_window(WindowId(7)),
            Err(CompositorError::WindowNotFound)
        );
        assert_eq!(counters.flushes.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn background_stays_at_the_back() {
        let (mut wm, _) = manager(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let n1 = open(&mut wm, 8, 8, WindowFlags::empty(), RED);
        let bg = open(&mut wm, 64, 64, WindowFlags::BACKGROUND, GREEN);
        let n2 = open(&mut wm, 8, 8, WindowFlags::empty(), RED);
        assert_eq!(wm.registry().z_index(bg), Some(0));

        wm.raise_window(bg).unwrap();
        assert_eq!(wm.registry().z_index(bg), Some(0));
        wm.raise_window(n1).unwrap();
        wm.close_window(n2).unwrap();
        let fg = open(&mut wm, 8, 8, WindowFlags::FOREGROUND, RED);
        open(&mut wm, 8, 8, WindowFlags::empty(), RED);
        assert_eq!(wm.registry().z_index(bg), Some(0));
        assert_eq!(wm.windows().first().map(|info| info.id), Some(fg));
        assert_eq!(wm.get(bg).unwrap().position(), (0, 0));
    }

    #[test]
    fn new_background_displaces_old_one() {
        let (mut wm, _) = manager(&[]);
        let first = open(&mut wm, 64, 64, WindowFlags::BACKGROUND, RED);
        let second = open(&mut wm, 64, 64, WindowFlags::BACKGROUND, GREEN);
        assert_eq!(wm.registry().z_index(second), Some(0));
        assert!(!wm.get(first).unwrap().flags().is_background());
        assert_eq!(wm.windows().first().map(|info| info.id), Some(first));
    }

    #[test]
    fn windows_snapshot_is_front_to_back() {
        let (mut wm, _) = manager(&[1, 1, 2, 2]);
        let a = open(&mut wm, 4, 4, WindowFlags::empty(), RED);
        let b = open(&mut wm, 6, 6, WindowFlags::empty(), RED);
        let infos = wm.windows();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[0].id, b);
        assert_eq!((infos[0].x, infos[0].y, infos[0].width), (2, 2, 6));
        assert_eq!(infos[1].id, a);
        wm.dump_windows();
    }

    #[test]
    fn rejects_mismatched_descriptor_before_allocating() {
        let (mut wm, counters) = manager(&[]);
        let rgb = SharedUserBuffer::new(BufferDescriptor::packed(4, 4, PixelFormat::Rgb888));
        assert_eq!(
            wm.open_window(Box::new(rgb), WindowFlags::empty()),
            Err(CompositorError::InvalidBuffer)
        );
        let short = SharedUserBuffer::new(BufferDescriptor::new(4, 4, 8, PixelFormat::Xrgb8888));
        assert_eq!(
            wm.open_window(Box::new(short), WindowFlags::empty()),
            Err(CompositorError::InvalidBuffer)
        );
        assert_eq!(counters.allocs.load(Ordering::Relaxed), 1);
        assert!(wm.windows().is_empty());
    }

    #[test]
    fn rejects_format_with_swapped_channels() {
        let rgb_screen = DisplayInfo::new(16, 16, 16 * 3, PixelFormat::Rgb888);
        let mut wm = WindowManager::new(
            Box::new(HeadlessDisplay::new(rgb_screen)),
            Box::new(KernelHeap),
            Box::new(Scripted(Vec::new())),
            WmConfig::default(),
        )
        .unwrap();

        let bgr = SharedUserBuffer::new(BufferDescriptor::packed(4, 4, PixelFormat::Bgr888));
        assert_eq!(
            wm.open_window(Box::new(bgr), WindowFlags::empty()),
            Err(CompositorError::InvalidBuffer)
        );
        assert!(wm.windows().is_empty());

        let rgb = SharedUserBuffer::new(BufferDescriptor::packed(4, 4, PixelFormat::Rgb888));
        assert!(wm.open_window(Box::new(rgb), WindowFlags::empty()).is_ok());
    }

    #[test]
    fn argb_client_opens_on_xrgb_screen() {
        let (mut wm, _) = manager(&[0, 0]);
        let client = SharedUserBuffer::new(BufferDescriptor::packed(4, 4, PixelFormat::Argb8888));
        client.fill(0x8000_00FF);
        let id = wm.open_window(Box::new(client), WindowFlags::empty()).unwrap();
        wm.render_window(id).unwrap();
        assert_eq!(pixel(&wm, 0, 0), 0x8000_00FF);
    }

    #[test]
    fn refresh_fills_desktop_with_clear_colour() {
        let config = WmConfig {
            clear_rgb: 0x12_3456,
            ..WmConfig::default()
        };
        let (mut wm, counters) = manager_with(&[0, 0], config, false);
        let a = open(&mut wm, 10, 10, WindowFlags::empty(), RED);
        wm.render_window(a).unwrap();
        let painted = wm.refresh_screen();
        assert_eq!(painted, 100);
        assert_eq!(pixel(&wm, 5, 5), RED);
        assert_eq!(pixel(&wm, 63, 63), 0xFF12_3456);
        assert_eq!(pixel(&wm, 10, 0), 0xFF12_3456);
        assert_eq!(counters.flushes.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn flush_can_be_disabled_and_failures_are_tolerated() {
        let quiet = WmConfig {
            flush: false,
            ..WmConfig::default()
        };
        let (mut wm, counters) = manager_with(&[], quiet, false);
        wm.refresh_screen();
        assert_eq!(counters.flushes.load(Ordering::Relaxed), 0);

        let (mut wm, counters) = manager_with(&[0, 0], WmConfig::default(), true);
        let a = open(&mut wm, 4, 4, WindowFlags::empty(), RED);
        assert_eq!(wm.render_window(a), Ok(()));
        assert_eq!(pixel(&wm, 0, 0), RED);
        assert_eq!(counters.flushes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn partial_refresh_is_clamped_to_screen() {
        let (mut wm, counters) = manager(&[]);
        assert_eq!(wm.refresh_partial(&r(100, 100, 200, 200)), 0);
        // Nothing to paint, but the frame still goes out.
        assert_eq!(counters.flushes.load(Ordering::Relaxed), 1);
        let (mut wm, _) = manager(&[0, 0]);
        let a = open(&mut wm, 64, 64, WindowFlags::empty(), RED);
        wm.render_window(a).unwrap();
        assert_eq!(wm.refresh_partial(&r(60, 60, 500, 500)), 16);
    }
}
