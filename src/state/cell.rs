//! Writable state cells.

#[cfg(test)]
#[path = "cell_test.rs"]
mod cell_test;

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::{GetUntracked, RwSignal, Update};

/// A clonable handle to one piece of state, written only by its owner.
pub trait StateCell<T>: Clone {
    /// Copy of the current value, without subscribing to changes.
    fn snapshot(&self) -> T;

    /// Mutate the value in place and notify observers, if any.
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Clone + Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn snapshot(&self) -> T {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

/// Mutex-backed cell for use outside a reactive runtime.
#[derive(Debug, Default)]
pub struct MemoryCell<T>(Arc<Mutex<T>>);

impl<T> MemoryCell<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(Mutex::new(value)))
    }
}

impl<T> Clone for MemoryCell<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Clone> StateCell<T> for MemoryCell<T> {
    fn snapshot(&self) -> T {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        let mut guard = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}
