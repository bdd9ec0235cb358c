//! Edit lock authority
//!
//! While the project is locked, nothing may change the model: cut and paste
//! refuse, copy still works.

/// Reports whether the model may be changed
pub trait EditLock {
    fn is_locked(&self) -> bool;
}

/// Lock state held as a plain flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditLockFlag {
    locked: bool,
}

impl EditLockFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locked() -> Self {
        Self { locked: true }
    }

    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn unlock(&mut self) {
        self.locked = false;
    }
}

impl EditLock for EditLockFlag {
    fn is_locked(&self) -> bool {
        self.locked
    }
}
