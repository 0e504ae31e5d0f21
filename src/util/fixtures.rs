#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZeroSizedType;

/// A shared tally of how many [`Tracked`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track(&self, id: usize) -> Tracked {
        Tracked {
            id,
            drops: self.clone(),
        }
    }

    pub fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// A value with an identity that reports to its [`DropCounter`] when dropped. Equality only
/// considers the id.
#[derive(Debug, Clone)]
pub struct Tracked {
    pub id: usize,
    drops: DropCounter,
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.0.set(self.drops.0.get() + 1);
    }
}
