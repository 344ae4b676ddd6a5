use std::cmp::Ordering;
use std::iter;

use crate::{Error, Result};
use super::Comparator;

/// Address of a node slot in a `Chain`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(usize);

/// One link of the chain.
///
/// `refs` counts every reference to the node: the head pointer, each neighbor's `prev` or
/// `next` link (including the frozen links of removed neighbors) and each cursor positioned
/// on it. A node is freed once it is unlinked and `refs` drops to zero.
#[derive(Debug)]
pub struct Node<T> {
    pub payload: T,
    refs: usize,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    linked: bool,
}

impl<T> Node<T> {
    pub fn is_linked(&self) -> bool {
        self.linked
    }

    #[cfg(test)]
    pub fn refs(&self) -> usize {
        self.refs
    }
}

/// A reference slot that can be pointed at a node.
#[derive(Clone, Copy, Debug)]
enum Link {
    Head,
    Prev(NodeId),
    Next(NodeId),
}

/// The node arena behind a `SortedList` and its cursors.
#[derive(Debug)]
pub struct Chain<T, C> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<usize>,
    pub head: Option<NodeId>,
    pub len: usize,
    // Bumped by `clear`, so cursors can tell their node ids went stale.
    pub epoch: u64,
    compare: C,
}

impl<T, C> Chain<T, C> {
    pub fn new(compare: C) -> Chain<T, C> {
        Chain {
            slots: Vec::new(),
            vacant: Vec::new(),
            head: None,
            len: 0,
            epoch: 0,
            compare: compare,
        }
    }

    pub fn node(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("node {} was freed while still referenced", id.0),
        }
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => unreachable!("node {} was freed while still referenced", id.0),
        }
    }

    /// Number of occupied slots, removed-but-referenced nodes included.
    pub fn allocated(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    /// Visits the linked nodes from head to tail.
    pub fn walk(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.head, move |&id| self.node(id).next)
    }

    /// The node `id` links to next. For a removed node this is the link frozen at removal,
    /// whose target is kept allocated by that link.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).next
    }

    pub fn position<P>(&self, mut matches: P) -> Option<NodeId>
        where P: FnMut(&T) -> bool
    {
        self.walk().find(|&id| matches(&self.node(id).payload))
    }

    fn alloc(&mut self, payload: T) -> Result<NodeId> {
        let node = Node {
            payload: payload,
            refs: 0,
            prev: None,
            next: None,
            linked: true,
        };
        match self.vacant.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                Ok(NodeId(slot))
            }
            None => {
                self.slots.try_reserve(1).map_err(|_| Error::AllocationFailure)?;
                self.slots.push(Some(node));
                Ok(NodeId(self.slots.len() - 1))
            }
        }
    }

    pub fn retain(&mut self, id: NodeId) {
        self.node_mut(id).refs += 1;
    }

    pub fn release(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        node.refs -= 1;
        if node.refs == 0 && !node.linked {
            self.free(id);
        }
    }

    // Frees `id` and every removed neighbor left unreferenced by its frozen links.
    fn free(&mut self, id: NodeId) {
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            let node = match self.slots[id.0].take() {
                Some(node) => node,
                None => continue,
            };
            self.vacant.push(id.0);
            for neighbor in node.prev.into_iter().chain(node.next) {
                let neighbor_node = self.node_mut(neighbor);
                neighbor_node.refs -= 1;
                if neighbor_node.refs == 0 && !neighbor_node.linked {
                    pending.push(neighbor);
                }
            }
        }
    }

    fn target(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Head => self.head,
            Link::Prev(id) => self.node(id).prev,
            Link::Next(id) => self.node(id).next,
        }
    }

    // Points `link` at `to`. The new target is retained before the old one is released.
    fn set(&mut self, link: Link, to: Option<NodeId>) {
        let old = self.target(link);
        if old == to {
            return;
        }
        if let Some(to) = to {
            self.retain(to);
        }
        match link {
            Link::Head => self.head = to,
            Link::Prev(id) => self.node_mut(id).prev = to,
            Link::Next(id) => self.node_mut(id).next = to,
        }
        if let Some(old) = old {
            self.release(old);
        }
    }

    // Links `id` between `prev` and `next`, which must be adjacent (or the ends).
    fn splice(&mut self, id: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
        self.set(Link::Prev(id), prev);
        self.set(Link::Next(id), next);
        match prev {
            Some(prev) => self.set(Link::Next(prev), Some(id)),
            None => self.set(Link::Head, Some(id)),
        }
        if let Some(next) = next {
            self.set(Link::Prev(next), Some(id));
        }
    }

    // Bridges the neighbors of `id` around it. The node's own links are left as they are.
    fn bridge(&mut self, id: NodeId) {
        let (prev, next) = {
            let node = self.node(id);
            (node.prev, node.next)
        };
        match prev {
            Some(prev) => self.set(Link::Next(prev), next),
            None => self.set(Link::Head, next),
        }
        if let Some(next) = next {
            self.set(Link::Prev(next), prev);
        }
    }

    /// Unlinks `id`. The node is freed right away unless something still references it,
    /// in which case it stays behind with its links frozen.
    pub fn unlink(&mut self, id: NodeId) {
        self.bridge(id);
        self.len -= 1;
        let node = self.node_mut(id);
        node.linked = false;
        if node.refs == 0 {
            self.free(id);
        }
    }

    /// Drops every node at once, whatever still references them.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.head = None;
        self.len = 0;
        self.epoch += 1;
    }

    /// Checks each node's count against the links pointing at it, plus `held` cursor
    /// references. Returns the first slot that disagrees.
    #[cfg(test)]
    pub fn audit(&self, held: &[NodeId]) -> Option<usize> {
        let mut expected = vec![0; self.slots.len()];
        if let Some(head) = self.head {
            expected[head.0] += 1;
        }
        for node in self.slots.iter().flatten() {
            for neighbor in node.prev.into_iter().chain(node.next) {
                expected[neighbor.0] += 1;
            }
        }
        for id in held {
            expected[id.0] += 1;
        }
        self.slots.iter().enumerate().position(|(slot, node)| match *node {
            Some(ref node) => node.refs != expected[slot],
            None => false,
        })
    }
}

impl<T, C: Comparator<T>> Chain<T, C> {
    fn cmp(&self, a: NodeId, b: NodeId) -> Ordering {
        self.compare.compare(&self.node(a).payload, &self.node(b).payload)
    }

    /// Finds the node holding `payload`, giving up as soon as the scan passes the place
    /// where it would have been.
    pub fn locate(&self, payload: &T) -> Option<NodeId>
        where T: PartialEq
    {
        for id in self.walk() {
            let node = self.node(id);
            match self.compare.compare(payload, &node.payload) {
                Ordering::Greater => return None,
                Ordering::Equal if *payload == node.payload => return Some(id),
                _ => {}
            }
        }
        None
    }

    /// Links a new node ahead of the first node it compares greater than or equal to.
    pub fn insert(&mut self, payload: T) -> Result<NodeId> {
        let id = self.alloc(payload)?;
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(curr) = cursor {
            if self.cmp(id, curr) != Ordering::Less {
                break;
            }
            prev = Some(curr);
            cursor = self.node(curr).next;
        }
        self.splice(id, prev, cursor);
        self.len += 1;
        Ok(id)
    }

    /// Moves `id` to where its changed payload belongs. Walks backward while the node
    /// compares greater than or equal to its predecessor, otherwise forward while it
    /// compares less than its successor. Lands exactly where a fresh insert would.
    pub fn rehome(&mut self, id: NodeId) {
        let mut ahead_of = None;
        let mut cursor = self.node(id).prev;
        while let Some(prev) = cursor {
            if self.cmp(id, prev) == Ordering::Less {
                break;
            }
            ahead_of = Some(prev);
            cursor = self.node(prev).prev;
        }
        if let Some(target) = ahead_of {
            self.bridge(id);
            let prev = self.node(target).prev;
            self.splice(id, prev, Some(target));
            return;
        }

        let mut behind = None;
        let mut cursor = self.node(id).next;
        while let Some(next) = cursor {
            if self.cmp(id, next) != Ordering::Less {
                break;
            }
            behind = Some(next);
            cursor = self.node(next).next;
        }
        if let Some(target) = behind {
            self.bridge(id);
            let next = self.node(target).next;
            self.splice(id, Some(target), next);
        }
    }
}
