//! Kernel-facing compositor entry points.
//!
//! A single lock protects the whole window manager. Every entry point takes
//! it once, runs to completion, and releases it, so no caller ever sees a
//! half-updated stack:
//! - open / close / render / raise mutate and repaint immediately
//! - window_at / enumerate read a consistent snapshot
//!
//! Buffer ownership:
//! - The client owns its pixel buffer and draws into it freely
//! - `wm_render_window` is the only point where the compositor reads it
//! - The compositor's per-window copy is private and freed on close

use alloc::boxed::Box;

use vitrine_abi::{CompositorError, CompositorResult, WindowFlags, WindowId, WindowInfo};
use vitrine_lib::IrqMutex;

use crate::compositor::WindowManager;
use crate::user_buffer::UserBuffer;

static CONTEXT: IrqMutex<Option<WindowManager>> = IrqMutex::new(None);

fn with_manager<R>(f: impl FnOnce(&mut WindowManager) -> CompositorResult<R>) -> CompositorResult<R> {
    let mut ctx = CONTEXT.lock();
    match ctx.as_mut() {
        Some(wm) => f(wm),
        None => Err(CompositorError::NotInitialized),
    }
}

/// Hand the constructed manager to the kernel. Only the first call wins.
pub fn install(wm: WindowManager) -> CompositorResult {
    let mut ctx = CONTEXT.lock();
    if ctx.is_some() {
        return Err(CompositorError::AlreadyInitialized);
    }
    *ctx = Some(wm);
    Ok(())
}

pub fn wm_is_initialized() -> bool {
    CONTEXT.lock().is_some()
}

pub fn wm_open_window(
    user: Box<dyn UserBuffer>,
    flags: WindowFlags,
) -> CompositorResult<WindowId> {
    with_manager(|wm| wm.open_window(user, flags))
}

pub fn wm_close_window(id: WindowId) -> CompositorResult {
    with_manager(|wm| wm.close_window(id))
}

pub fn wm_render_window(id: WindowId) -> CompositorResult {
    with_manager(|wm| wm.render_window(id))
}

pub fn wm_raise_window(id: WindowId) -> CompositorResult {
    with_manager(|wm| wm.raise_window(id))
}

/// Topmost window under the pointer, for input dispatch.
pub fn wm_window_at(x: u32, y: u32) -> Option<WindowId> {
    with_manager(|wm| Ok(wm.window_at(x, y))).ok().flatten()
}

pub fn wm_refresh_screen() -> CompositorResult {
    with_manager(|wm| {
        wm.refresh_screen();
        Ok(())
    })
}

/// Copy up to `out.len()` windows, frontmost first. Returns how many were
/// written; 0 before init.
pub fn wm_enumerate_windows(out: &mut [WindowInfo]) -> usize {
    let ctx = CONTEXT.lock();
    let Some(wm) = ctx.as_ref() else {
        return 0;
    };

    let mut count = 0;
    for (slot, window) in out.iter_mut().zip(wm.registry().list()) {
        *slot = window.info();
        count += 1;
    }
    count
}

pub fn wm_dump_windows() {
    if let Some(wm) = CONTEXT.lock().as_ref() {
        wm.dump_windows();
    }
}
