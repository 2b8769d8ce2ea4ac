//! Shared fixtures for the `strand-core` integration tests.

use std::cell::RefCell;

/// Records every value handed to it, for counting effect-only links.
#[derive(Debug, Default)]
pub struct EffectLog<T> {
    entries: RefCell<Vec<T>>,
}

impl<T: Clone> EffectLog<T> {
    pub fn new() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }

    /// Returns a closure that appends its argument to the log.
    pub fn recorder(&self) -> impl FnOnce(&T) + '_ {
        move |value: &T| self.entries.borrow_mut().push(value.clone())
    }

    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

/// A payload that is neither `Clone` nor `Default`.
#[derive(Debug, PartialEq, Eq)]
pub struct Reading {
    pub sensor: &'static str,
    pub millivolts: u32,
}
