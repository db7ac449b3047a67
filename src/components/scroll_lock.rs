use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

/// Something whose scrolling can be switched off and back on.
pub trait ScrollTarget {
    fn lock(&self);
    /// Returns the target to its unset state.
    fn unlock(&self);
}

/// Reference-counted scroll lock. The target stays locked while at least one
/// guard is alive.
pub struct ScrollLock<T: ScrollTarget> {
    target: T,
    holders: Cell<usize>,
}

impl<T: ScrollTarget> ScrollLock<T> {
    pub fn new(target: T) -> Rc<Self> {
        Rc::new(Self {
            target,
            holders: Cell::new(0),
        })
    }

    pub fn acquire(self: &Rc<Self>) -> ScrollLockGuard<T> {
        let holders = self.holders.get();
        if holders == 0 {
            debug!("Locking page scroll");
            self.target.lock();
        }
        self.holders.set(holders + 1);
        ScrollLockGuard { lock: Rc::clone(self) }
    }

    fn release(&self) {
        match self.holders.get() {
            0 => warn!("Scroll lock released more times than acquired"),
            1 => {
                self.holders.set(0);
                debug!("Unlocking page scroll");
                self.target.unlock();
            }
            n => self.holders.set(n - 1),
        }
    }

    #[cfg(test)]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }
}

/// Releases its hold on drop.
pub struct ScrollLockGuard<T: ScrollTarget> {
    lock: Rc<ScrollLock<T>>,
}

impl<T: ScrollTarget> Drop for ScrollLockGuard<T> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// `overflow: hidden` on the document body.
pub struct DocumentBody;

impl DocumentBody {
    fn body() -> Option<web_sys::HtmlElement> {
        web_sys::window()?.document()?.body()
    }
}

impl ScrollTarget for DocumentBody {
    fn lock(&self) {
        let Some(body) = Self::body() else {
            warn!("No document body to lock");
            return;
        };
        if let Err(e) = body.style().set_property("overflow", "hidden") {
            warn!("Failed to lock body scroll: {:?}", e);
        }
    }

    fn unlock(&self) {
        let Some(body) = Self::body() else {
            return;
        };
        if let Err(e) = body.style().remove_property("overflow") {
            warn!("Failed to unlock body scroll: {:?}", e);
        }
    }
}

thread_local! {
    static BODY_SCROLL_LOCK: Rc<ScrollLock<DocumentBody>> = ScrollLock::new(DocumentBody);
}

/// The page-wide lock shared by every dialog.
pub fn body_scroll_lock() -> Rc<ScrollLock<DocumentBody>> {
    BODY_SCROLL_LOCK.with(Rc::clone)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[derive(Default)]
    pub(crate) struct FakeBody {
        pub locked: Cell<bool>,
        pub lock_calls: Cell<usize>,
        pub unlock_calls: Cell<usize>,
    }

    impl ScrollTarget for FakeBody {
        fn lock(&self) {
            self.locked.set(true);
            self.lock_calls.set(self.lock_calls.get() + 1);
        }

        fn unlock(&self) {
            self.locked.set(false);
            self.unlock_calls.set(self.unlock_calls.get() + 1);
        }
    }

    impl ScrollLock<FakeBody> {
        pub(crate) fn target(&self) -> &FakeBody {
            &self.target
        }
    }

    #[test]
    fn single_guard_locks_and_unlocks() {
        let lock = ScrollLock::new(FakeBody::default());
        let guard = lock.acquire();
        assert!(lock.target().locked.get());
        assert!(lock.is_locked());

        drop(guard);
        assert!(!lock.target().locked.get());
        assert!(!lock.is_locked());
    }

    #[test]
    fn nested_guards_hold_until_last_release() {
        let lock = ScrollLock::new(FakeBody::default());
        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);
        assert_eq!(lock.target().lock_calls.get(), 1);

        drop(first);
        assert!(lock.target().locked.get());

        drop(second);
        assert!(!lock.target().locked.get());
        assert_eq!(lock.target().unlock_calls.get(), 1);
    }

    #[test]
    fn release_order_does_not_matter() {
        let lock = ScrollLock::new(FakeBody::default());
        let first = lock.acquire();
        let second = lock.acquire();

        drop(second);
        assert!(lock.is_locked());
        drop(first);
        assert!(!lock.is_locked());
    }

    #[test]
    fn repeated_cycles_end_unlocked() {
        let lock = ScrollLock::new(FakeBody::default());
        for _ in 0..5 {
            let guard = lock.acquire();
            assert!(lock.target().locked.get());
            drop(guard);
        }
        assert_eq!(lock.holders(), 0);
        assert_eq!(lock.target().lock_calls.get(), 5);
        assert_eq!(lock.target().unlock_calls.get(), 5);
    }
}
