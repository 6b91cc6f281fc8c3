#![no_std]

pub mod config;
pub mod klog;
pub mod random;
pub mod spinlock;

pub use config::{WmConfig, config_from_cmdline};
pub use klog::{KlogLevel, klog_get_level, klog_register_backend, klog_set_level};
pub use random::{RandomSource, XorShift32};
pub use spinlock::{IrqHooks, IrqMutex, IrqMutexGuard, register_irq_hooks};
