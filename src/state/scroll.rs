//! Page scroll lock with offset restoration.
//!
//! Both overlays (lightbox and mobile menu) pin the page while open. The
//! offset captured at lock time is the token for restoring the position at
//! unlock time and must not be overwritten while locked.

use log::warn;

/// Captures the page offset on lock and hands it back on unlock.
#[derive(Debug, Default)]
pub struct ScrollLock {
    saved: Option<f32>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `offset`. A second lock while already locked is rejected so
    /// the captured offset stays immutable for the lifetime of the lock.
    pub fn lock(&mut self, offset: f32) {
        if self.saved.is_some() {
            warn!("Scroll already locked; keeping the captured offset");
            return;
        }
        self.saved = Some(offset);
    }

    /// Releases the lock and returns the offset to restore. `None` when not
    /// locked (unlocking twice is a no-op).
    pub fn unlock(&mut self) -> Option<f32> {
        self.saved.take()
    }

    pub fn is_locked(&self) -> bool {
        self.saved.is_some()
    }

    /// The captured offset, without releasing the lock.
    pub fn saved_offset(&self) -> Option<f32> {
        self.saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_restores_exact_offset() {
        for offset in [0.0, 1.5, 240.0, 99999.25] {
            let mut lock = ScrollLock::new();
            lock.lock(offset);
            assert!(lock.is_locked());
            assert_eq!(lock.unlock(), Some(offset));
            assert!(!lock.is_locked());
        }
    }

    #[test]
    fn captured_offset_is_immutable_while_locked() {
        let mut lock = ScrollLock::new();
        lock.lock(120.0);
        lock.lock(500.0);
        assert_eq!(lock.saved_offset(), Some(120.0));
        assert_eq!(lock.unlock(), Some(120.0));
    }

    #[test]
    fn unlock_without_lock_is_a_noop() {
        let mut lock = ScrollLock::new();
        assert_eq!(lock.unlock(), None);
        assert_eq!(lock.unlock(), None);
    }
}
