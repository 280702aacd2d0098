//! Doubly linked list with positional and value-keyed access.
//!
//! Positions are 1-based. Every operation validates its input before touching
//! any link, so a failed call leaves the list exactly as it was.
//!
//! Operations that take an element accept anything convertible into
//! `Option<T>`: a bare `T` is always present, while `None` stands for a
//! missing element and is rejected with [`ContainerError::NullElement`].

use std::{fmt, iter, iter::FusedIterator, mem};

use super::{
    node::{DoublyNode, Link, NodeArena, NodeId},
    ContainerError, ContainerKind,
};

#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: NodeArena<DoublyNode<T>>,
    head: Link,
    tail: Link,
    size: usize,
}

fn present<T>(element: impl Into<Option<T>>) -> Result<T, ContainerError> {
    element.into().ok_or(ContainerError::NullElement)
}

impl<T> LinkedList<T> {
    const EMPTY: ContainerError = ContainerError::Empty(ContainerKind::List);

    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    pub fn get_first(&self) -> Result<&T, ContainerError> {
        self.head
            .map(|id| &self.nodes[id].element)
            .ok_or(Self::EMPTY)
    }

    pub fn get_last(&self) -> Result<&T, ContainerError> {
        self.tail
            .map(|id| &self.nodes[id].element)
            .ok_or(Self::EMPTY)
    }

    /// Replaces the first element, returning the old one.
    pub fn set_first(&mut self, element: impl Into<Option<T>>) -> Result<T, ContainerError> {
        let element = present(element)?;
        let id = self.head.ok_or(Self::EMPTY)?;
        Ok(mem::replace(&mut self.nodes[id].element, element))
    }

    /// Replaces the last element, returning the old one.
    pub fn set_last(&mut self, element: impl Into<Option<T>>) -> Result<T, ContainerError> {
        let element = present(element)?;
        let id = self.tail.ok_or(Self::EMPTY)?;
        Ok(mem::replace(&mut self.nodes[id].element, element))
    }

    pub fn add_first(&mut self, element: impl Into<Option<T>>) -> Result<(), ContainerError> {
        let element = present(element)?;
        self.push_front(element);
        Ok(())
    }

    pub fn add_last(&mut self, element: impl Into<Option<T>>) -> Result<(), ContainerError> {
        let element = present(element)?;
        self.push_back(element);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T, ContainerError> {
        let id = self.head.ok_or(Self::EMPTY)?;
        Ok(self.unlink(id))
    }

    pub fn remove_last(&mut self) -> Result<T, ContainerError> {
        let id = self.tail.ok_or(Self::EMPTY)?;
        Ok(self.unlink(id))
    }

    pub fn get(&self, position: usize) -> Result<&T, ContainerError> {
        let id = self.locate(position)?;
        Ok(&self.nodes[id].element)
    }

    /// Replaces the element at `position`, returning the old one.
    pub fn set(
        &mut self,
        position: usize,
        element: impl Into<Option<T>>,
    ) -> Result<T, ContainerError> {
        let element = present(element)?;
        let id = self.locate(position)?;
        Ok(mem::replace(&mut self.nodes[id].element, element))
    }

    pub fn remove(&mut self, position: usize) -> Result<T, ContainerError> {
        let id = self.locate(position)?;
        Ok(self.unlink(id))
    }

    /// Inserts `element` so that it ends up at `position`.
    pub fn add_before(
        &mut self,
        element: impl Into<Option<T>>,
        position: usize,
    ) -> Result<(), ContainerError> {
        let element = present(element)?;
        let id = self.locate(position)?;
        if position == 1 {
            self.push_front(element);
        } else {
            self.link_before(id, element);
        }
        Ok(())
    }

    /// Inserts `element` so that it ends up at `position + 1`.
    pub fn add_after(
        &mut self,
        element: impl Into<Option<T>>,
        position: usize,
    ) -> Result<(), ContainerError> {
        let element = present(element)?;
        let id = self.locate(position)?;
        if position == self.size {
            self.push_back(element);
        } else {
            self.link_after(id, element);
        }
        Ok(())
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.size,
        }
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(self.head, move |&id| self.nodes[id].next)
    }

    fn locate(&self, position: usize) -> Result<NodeId, ContainerError> {
        let invalid = ContainerError::InvalidPosition {
            position,
            size: self.size,
        };

        if self.is_empty() {
            return Err(Self::EMPTY);
        }
        if position == 0 || position > self.size {
            return Err(invalid);
        }

        self.node_at(position).ok_or(invalid)
    }

    /// Walks from whichever end is closer to `position`.
    fn node_at(&self, position: usize) -> Option<NodeId> {
        if position - 1 <= self.size - position {
            (1..position).try_fold(self.head?, |id, _| self.nodes[id].next)
        } else {
            (position..self.size).try_fold(self.tail?, |id, _| self.nodes[id].previous)
        }
    }

    fn push_front(&mut self, element: T) {
        let id = self.nodes.alloc(DoublyNode::new(element, None, self.head));
        match self.head {
            Some(head) => self.nodes[head].previous = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.size += 1;
    }

    fn push_back(&mut self, element: T) {
        let id = self.nodes.alloc(DoublyNode::new(element, self.tail, None));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
    }

    fn link_before(&mut self, anchor: NodeId, element: T) {
        let previous = self.nodes[anchor].previous;
        let id = self
            .nodes
            .alloc(DoublyNode::new(element, previous, Some(anchor)));
        self.nodes[anchor].previous = Some(id);
        match previous {
            Some(previous) => self.nodes[previous].next = Some(id),
            None => self.head = Some(id),
        }
        self.size += 1;
    }

    fn link_after(&mut self, anchor: NodeId, element: T) {
        let next = self.nodes[anchor].next;
        let id = self.nodes.alloc(DoublyNode::new(element, Some(anchor), next));
        self.nodes[anchor].next = Some(id);
        match next {
            Some(next) => self.nodes[next].previous = Some(id),
            None => self.tail = Some(id),
        }
        self.size += 1;
    }

    fn unlink(&mut self, id: NodeId) -> T {
        let node = self.nodes.release(id);
        match node.previous {
            Some(previous) => self.nodes[previous].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].previous = node.previous,
            None => self.tail = node.previous,
        }
        self.size -= 1;
        node.element
    }
}

impl<T: Ord> LinkedList<T> {
    /// Returns the first element equal to `target`.
    pub fn get_value(&self, target: &T) -> Result<&T, ContainerError> {
        let id = self.find(target).ok_or(ContainerError::NotFound)?;
        Ok(&self.nodes[id].element)
    }

    /// Replaces the first element equal to `target`, returning the old one.
    pub fn set_value(
        &mut self,
        target: &T,
        element: impl Into<Option<T>>,
    ) -> Result<T, ContainerError> {
        let element = present(element)?;
        let id = self.find(target).ok_or(ContainerError::NotFound)?;
        Ok(mem::replace(&mut self.nodes[id].element, element))
    }

    pub fn remove_value(&mut self, target: &T) -> Result<T, ContainerError> {
        let id = self.find(target).ok_or(ContainerError::NotFound)?;
        Ok(self.unlink(id))
    }

    pub fn add_before_value(
        &mut self,
        element: impl Into<Option<T>>,
        anchor: &T,
    ) -> Result<(), ContainerError> {
        let element = present(element)?;
        let id = self.find(anchor).ok_or(ContainerError::NotFound)?;
        if Some(id) == self.head {
            self.push_front(element);
        } else {
            self.link_before(id, element);
        }
        Ok(())
    }

    pub fn add_after_value(
        &mut self,
        element: impl Into<Option<T>>,
        anchor: &T,
    ) -> Result<(), ContainerError> {
        let element = present(element)?;
        let id = self.find(anchor).ok_or(ContainerError::NotFound)?;
        if Some(id) == self.tail {
            self.push_back(element);
        } else {
            self.link_after(id, element);
        }
        Ok(())
    }

    /// Inserts into a list that is already in ascending order, keeping it so.
    pub fn insert(&mut self, element: impl Into<Option<T>>) -> Result<(), ContainerError> {
        let element = present(element)?;
        self.insert_sorted(element);
        Ok(())
    }

    /// Sorts by rebuilding the list one [`insert`](Self::insert) at a time.
    ///
    /// Quadratic. Equal elements may not keep their relative order.
    pub fn sort_ascending(&mut self) {
        let unsorted = mem::take(self);
        for element in unsorted {
            self.insert_sorted(element);
        }
    }

    fn insert_sorted(&mut self, element: T) {
        let greater = self.ids().find(|&id| self.nodes[id].element > element);
        match greater {
            Some(id) if Some(id) == self.head => self.push_front(element),
            Some(id) => self.link_before(id, element),
            None => self.push_back(element),
        }
    }

    fn find(&self, target: &T) -> Option<NodeId> {
        self.ids()
            .find(|&id| self.nodes[id].element.cmp(target).is_eq())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

pub struct Iter<'a, T> {
    nodes: &'a NodeArena<DoublyNode<T>>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let nodes = self.nodes;
        let node = &nodes[self.back?];
        self.back = node.previous;
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.0.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
