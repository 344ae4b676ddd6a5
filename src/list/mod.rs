//! A comparator-ordered, doubly-linked list whose cursors survive removals.
//!
//! Every index structure in the crate is built on `SortedList`: a term's postings ranked by
//! occurrence count, and the ordered set of all terms.

mod compare;
mod cursor;
mod node;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Error, Result};
use self::node::Chain;

pub use self::compare::{Comparator, Natural, Reverse};
pub use self::cursor::Cursor;

/// A list that keeps its payloads sorted from greatest to least under a `Comparator`.
///
/// A payload inserted next to payloads it compares equal to goes ahead of all of them.
///
/// Cursors obtained from `iter` do not borrow the list, so the list can be changed while
/// they are live; see `Cursor` for what they observe. Dropping the list (or calling
/// `destroy`) frees every node, and any cursor still around is exhausted from then on.
pub struct SortedList<T, C> {
    chain: Rc<RefCell<Chain<T, C>>>,
}

impl<T, C: Comparator<T>> SortedList<T, C> {
    /// Creates an empty list ordered by `compare`.
    pub fn new(compare: C) -> SortedList<T, C> {
        SortedList { chain: Rc::new(RefCell::new(Chain::new(compare))) }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.chain.borrow().len
    }

    /// Returns true if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of nodes still allocated, including removed nodes that a cursor
    /// is keeping alive.
    pub fn allocated(&self) -> usize {
        self.chain.borrow().allocated()
    }

    /// Inserts `payload` ahead of the first element it compares greater than or equal to.
    ///
    /// Fails with `AllocationFailure` if node storage could not grow, in which case the
    /// list is unchanged.
    pub fn insert(&mut self, payload: T) -> Result<()> {
        self.chain.borrow_mut().insert(payload).map(|_| ())
    }

    /// Removes the element equal to `payload`.
    ///
    /// The scan stops as soon as it passes the place where `payload` would sit. If a cursor
    /// is positioned on the element its node is kept until the cursor moves on.
    pub fn remove(&mut self, payload: &T) -> Result<()>
        where T: PartialEq
    {
        let mut chain = self.chain.borrow_mut();
        let id = chain.locate(payload).ok_or(Error::NotFound)?;
        chain.unlink(id);
        Ok(())
    }

    /// Finds the first element satisfying `matches`, applies `change` to it in place and
    /// moves it to wherever its new value belongs.
    ///
    /// The element only travels as far as it has to, walking toward the head when it grew
    /// and toward the tail when it shrank. The resulting order is the one `remove` followed
    /// by `insert` would produce.
    pub fn rerank<P, F>(&mut self, matches: P, change: F) -> Result<()>
        where P: FnMut(&T) -> bool,
              F: FnOnce(&mut T)
    {
        let mut chain = self.chain.borrow_mut();
        let id = chain.position(matches).ok_or(Error::NotFound)?;
        change(&mut chain.node_mut(id).payload);
        chain.rehome(id);
        Ok(())
    }

    /// Returns true if an element equal to `payload` is in the list.
    pub fn contains(&self, payload: &T) -> bool
        where T: PartialEq
    {
        self.chain.borrow().locate(payload).is_some()
    }

    /// Returns a clone of the first element satisfying `matches`.
    pub fn find<P>(&self, matches: P) -> Option<T>
        where P: FnMut(&T) -> bool,
              T: Clone
    {
        let chain = self.chain.borrow();
        chain.position(matches).map(|id| chain.node(id).payload.clone())
    }

    /// Returns a cursor over the list, starting at the head.
    pub fn iter(&self) -> Cursor<T, C> {
        Cursor::new(self.chain.clone())
    }

    /// Collects the elements, greatest first.
    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        let chain = self.chain.borrow();
        chain.walk().map(|id| chain.node(id).payload.clone()).collect()
    }

    /// Frees every node and the list itself.
    pub fn destroy(self) {}
}

impl<T, C> Drop for SortedList<T, C> {
    fn drop(&mut self) {
        if let Ok(mut chain) = self.chain.try_borrow_mut() {
            chain.clear();
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedList<T, C> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let chain = self.chain.borrow();
        fmt.debug_list().entries(chain.walk().map(|id| &chain.node(id).payload)).finish()
    }
}

impl<'a, T: Clone, C: Comparator<T>> IntoIterator for &'a SortedList<T, C> {
    type Item = T;
    type IntoIter = Cursor<T, C>;

    fn into_iter(self) -> Cursor<T, C> {
        self.iter()
    }
}
