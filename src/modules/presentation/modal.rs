use std::sync::{Arc, Mutex, PoisonError};

use super::store::Store;

struct LockState {
    holders: Mutex<usize>,
    locked: Store<bool>,
}

/// Page-wide background scroll lock, held while at least one guard lives.
#[derive(Clone)]
pub struct ScrollLock {
    state: Arc<LockState>,
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self {
            state: Arc::new(LockState {
                holders: Mutex::new(0),
                locked: Store::new(false),
            }),
        }
    }
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut holders = self
            .state
            .holders
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *holders += 1;
        self.state.locked.set(true);

        ScrollLockGuard {
            state: Arc::clone(&self.state),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.state.locked.get()
    }

    pub fn holders(&self) -> usize {
        *self
            .state
            .holders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Observable locked flag, the "overflow: hidden" of the page body.
    pub fn locked(&self) -> &Store<bool> {
        &self.state.locked
    }
}

#[must_use = "the scroll lock is released when the guard is dropped"]
pub struct ScrollLockGuard {
    state: Arc<LockState>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut holders = self
            .state
            .holders
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *holders = holders.saturating_sub(1);
        self.state.locked.set(*holders > 0);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    CloseButton,
    Backdrop,
    Body,
}

/// Quick-peek overlay for one card. While open it holds the scroll lock;
/// dropping the modal releases it even if it was never closed.
pub struct Modal {
    lock: ScrollLock,
    guard: Option<ScrollLockGuard>,
}

impl Modal {
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, guard: None }
    }

    pub fn is_open(&self) -> bool {
        self.guard.is_some()
    }

    pub fn open(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(self.lock.acquire());
        }
    }

    pub fn close(&mut self) {
        self.guard = None;
    }

    /// Clicks inside the body do not reach the backdrop.
    pub fn handle_click(&mut self, click: ModalClick) {
        match click {
            ModalClick::CloseButton | ModalClick::Backdrop => self.close(),
            ModalClick::Body => {}
        }
    }
}
