use core::mem::ManuallyDrop;
use core::ops::{Deref, DerefMut};

use spin::Once;

/// Interrupt masking primitives supplied by the platform layer.
///
/// `save_and_disable` masks local interrupts and returns the previous flag
/// state; `restore` puts that state back.
#[derive(Clone, Copy)]
pub struct IrqHooks {
    pub save_and_disable: fn() -> u64,
    pub restore: fn(u64),
}

static IRQ_HOOKS: Once<IrqHooks> = Once::new();

/// Install the platform's interrupt masking hooks. Only the first call wins.
pub fn register_irq_hooks(hooks: IrqHooks) {
    IRQ_HOOKS.call_once(|| hooks);
}

#[inline]
fn irq_save() -> Option<u64> {
    IRQ_HOOKS.get().map(|hooks| (hooks.save_and_disable)())
}

#[inline]
fn irq_restore(saved: Option<u64>) {
    if let (Some(flags), Some(hooks)) = (saved, IRQ_HOOKS.get()) {
        (hooks.restore)(flags);
    }
}

/// Spin mutex that masks interrupts while held.
///
/// Kernel state reachable from interrupt context must sit behind one of
/// these so a handler cannot spin on a lock its own CPU already holds.
/// Before the platform registers [`IrqHooks`] it behaves as a plain spin
/// lock.
pub struct IrqMutex<T> {
    inner: spin::Mutex<T>,
}

pub struct IrqMutexGuard<'a, T> {
    guard: ManuallyDrop<spin::MutexGuard<'a, T>>,
    saved_flags: Option<u64>,
}

impl<T> IrqMutex<T> {
    #[inline]
    pub const fn new(data: T) -> Self {
        Self {
            inner: spin::Mutex::new(data),
        }
    }

    /// Check if the lock is currently held.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    #[inline]
    pub fn lock(&self) -> IrqMutexGuard<'_, T> {
        let saved_flags = irq_save();
        let guard = self.inner.lock();
        IrqMutexGuard {
            guard: ManuallyDrop::new(guard),
            saved_flags,
        }
    }

    #[inline]
    pub fn try_lock(&self) -> Option<IrqMutexGuard<'_, T>> {
        let saved_flags = irq_save();
        match self.inner.try_lock() {
            Some(guard) => Some(IrqMutexGuard {
                guard: ManuallyDrop::new(guard),
                saved_flags,
            }),
            None => {
                irq_restore(saved_flags);
                None
            }
        }
    }
}

impl<T> Deref for IrqMutexGuard<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T> DerefMut for IrqMutexGuard<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T> Drop for IrqMutexGuard<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // Release the lock before interrupts come back on.
        // SAFETY: the guard is dropped exactly once, here, and never touched again.
        unsafe { ManuallyDrop::drop(&mut self.guard) };
        irq_restore(self.saved_flags);
    }
}
