//! Node storage shared by the linked containers.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Removed slots
//! are threaded onto a free list and reused by later insertions, so ids stay
//! stable for as long as the node they name is alive.

use std::{mem, ops};

pub(crate) type Link = Option<NodeId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) struct SinglyNode<T> {
    pub element: T,
    pub next: Link,
}

impl<T> SinglyNode<T> {
    pub fn new(element: T, next: Link) -> Self {
        Self { element, next }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DoublyNode<T> {
    pub element: T,
    pub next: Link,
    pub previous: Link,
}

impl<T> DoublyNode<T> {
    pub fn new(element: T, previous: Link, next: Link) -> Self {
        Self {
            element,
            next,
            previous,
        }
    }
}

#[derive(Debug, Clone)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug, Clone)]
pub(crate) struct NodeArena<N> {
    slots: Vec<Slot<N>>,
    free: Option<usize>,
    len: usize,
}

impl<N> NodeArena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn alloc(&mut self, node: N) -> NodeId {
        self.len += 1;

        match self.free {
            Some(idx) => {
                let slot = mem::replace(&mut self.slots[idx], Slot::Occupied(node));
                if let Slot::Vacant { next_free } = slot {
                    self.free = next_free;
                }
                NodeId(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Takes the node out of its slot and puts the slot on the free list.
    ///
    /// # Panics
    /// If `id` does not name a live node.
    pub fn release(&mut self, id: NodeId) -> N {
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        match mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free = Some(id.0);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("node {} released twice", id.0),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&N> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => Some(node),
            _ => None,
        }
    }

    /// Drops every node at once, without following any links.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> ops::Index<NodeId> for NodeArena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.get(id).expect("dangling node id")
    }
}

impl<N> ops::IndexMut<NodeId> for NodeArena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.get_mut(id).expect("dangling node id")
    }
}
