#![no_std]
#![forbid(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::boxed::Box;

use vitrine_abi::CompositorResult;
use vitrine_lib::{XorShift32, config_from_cmdline, klog_info, klog_set_level, klog_warn};

pub mod compositor;
pub mod compositor_context;
pub mod framebuffer;
pub mod memory;
pub mod placement;
pub mod registry;
pub mod user_buffer;
pub mod zorder;

pub use compositor::WindowManager;
pub use framebuffer::{DisplayDevice, HeadlessDisplay, ShadowFramebuffer};
pub use memory::{KernelHeap, MemoryService};
pub use registry::{Window, WindowRegistry};
pub use user_buffer::{SharedUserBuffer, UserBuffer, UserPtrBuffer};

// =============================================================================
// Initialization
// =============================================================================

/// Bring the compositor up on `display`.
///
/// The framebuffer descriptor is queried first, then the shadow buffer is
/// allocated and the manager installed; the first frame is the clear colour.
pub fn init(
    display: Box<dyn DisplayDevice>,
    memory: Box<dyn MemoryService>,
    cmdline: Option<&str>,
) -> CompositorResult {
    let config = config_from_cmdline(cmdline);
    klog_set_level(config.log_level);

    let info = display.info();
    let rng = Box::new(XorShift32::from_seed64(config.seed));
    let wm = match WindowManager::new(display, memory, rng, config) {
        Ok(wm) => wm,
        Err(err) => {
            klog_warn!("Framebuffer init failed ({}); compositor disabled.", err);
            return Err(err);
        }
    };
    klog_info!(
        "Framebuffer online: {}x{} pitch {} bpp {}",
        info.width,
        info.height,
        info.pitch,
        info.bytes_per_pixel() as u32 * 8
    );

    compositor_context::install(wm)?;
    compositor_context::wm_refresh_screen()
}
