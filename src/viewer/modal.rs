//! Page scroll locking for the full-screen viewer.

use log::debug;

/// Scroll behaviour of the page behind the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Auto,
    Scroll,
    Hidden,
}

/// Something whose scrolling can be switched off while a modal is open.
pub trait ScrollLock {
    fn overflow(&self) -> Overflow;
    fn set_overflow(&mut self, overflow: Overflow);
}

/// Holds the page scroll lock for as long as the modal is open.
///
/// Acquiring hides overflow; releasing, explicitly or on drop, restores whatever
/// overflow was set before. Releasing twice is a no-op.
pub struct ModalGuard<'a, L: ScrollLock + ?Sized> {
    lock: &'a mut L,
    previous: Overflow,
    released: bool,
}

impl<'a, L: ScrollLock + ?Sized> ModalGuard<'a, L> {
    /// Remembers the current overflow and hides it.
    pub fn acquire(lock: &'a mut L) -> Self {
        let previous = lock.overflow();
        lock.set_overflow(Overflow::Hidden);
        debug!("Scroll locked (was {:?})", previous);
        Self {
            lock,
            previous,
            released: false,
        }
    }

    /// The overflow that will be restored.
    pub fn previous(&self) -> Overflow {
        self.previous
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Restores the remembered overflow. Later calls, and the drop, do nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.lock.set_overflow(self.previous);
            self.released = true;
            debug!("Scroll restored to {:?}", self.previous);
        }
    }
}

impl<L: ScrollLock + ?Sized> Drop for ModalGuard<'_, L> {
    fn drop(&mut self) {
        self.release();
    }
}
