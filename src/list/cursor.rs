use std::cell::RefCell;
use std::rc::Rc;

use super::node::{Chain, NodeId};
use super::Comparator;

/// A cursor over a `SortedList`, yielding clones of its payloads from greatest to least.
///
/// The cursor holds a reference on the node it is positioned on, so the list's owner may
/// keep mutating the list in between calls to `next`. Removing the element the cursor sits
/// on leaves the node behind until the cursor moves off it, and the cursor then resumes
/// with the element that followed it when it was removed, even if that element has been
/// removed since.
///
/// Once the list is destroyed the cursor is exhausted.
pub struct Cursor<T, C> {
    pub(super) chain: Rc<RefCell<Chain<T, C>>>,
    epoch: u64,
    started: bool,
    pub(super) current: Option<NodeId>,
}

impl<T, C: Comparator<T>> Cursor<T, C> {
    pub(super) fn new(chain: Rc<RefCell<Chain<T, C>>>) -> Cursor<T, C> {
        let epoch = chain.borrow().epoch;
        Cursor {
            chain: chain,
            epoch: epoch,
            started: false,
            current: None,
        }
    }

    /// Returns whether a call to `next` would yield an element.
    pub fn has_next(&self) -> bool {
        let chain = self.chain.borrow();
        if chain.epoch != self.epoch {
            return false;
        }
        if !self.started {
            return chain.len > 0;
        }
        match self.current {
            Some(id) => chain.successor(id).is_some(),
            None => false,
        }
    }

    fn advance(&mut self) -> Option<NodeId> {
        let mut chain = self.chain.borrow_mut();
        if chain.epoch != self.epoch {
            // The nodes went away with the list; there is nothing left to release.
            self.started = true;
            self.current = None;
            return None;
        }
        let target = if self.started {
            self.current.and_then(|id| chain.successor(id))
        } else {
            self.started = true;
            chain.head
        };
        if let Some(target) = target {
            chain.retain(target);
        }
        if let Some(previous) = self.current.take() {
            chain.release(previous);
        }
        self.current = target;
        target
    }
}

impl<T: Clone, C: Comparator<T>> Iterator for Cursor<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let id = self.advance()?;
        let chain = self.chain.borrow();
        Some(chain.node(id).payload.clone())
    }
}

impl<T, C> Drop for Cursor<T, C> {
    fn drop(&mut self) {
        let current = match self.current.take() {
            Some(current) => current,
            None => return,
        };
        if let Ok(mut chain) = self.chain.try_borrow_mut() {
            if chain.epoch == self.epoch {
                chain.release(current);
            }
        }
    }
}
