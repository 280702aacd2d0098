use std::{fmt, iter};

use super::{
    node::{Link, NodeArena, SinglyNode},
    ContainerError, ContainerKind,
};

/// Last in, first out, over singly linked nodes.
#[derive(Clone)]
pub struct Stack<T> {
    nodes: NodeArena<SinglyNode<T>>,
    head: Link,
}

impl<T> Stack<T> {
    const EMPTY: ContainerError = ContainerError::Empty(ContainerKind::Stack);

    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
        }
    }

    pub fn push(&mut self, element: T) {
        let id = self.nodes.alloc(SinglyNode::new(element, self.head));
        self.head = Some(id);
    }

    pub fn top(&self) -> Result<&T, ContainerError> {
        self.head
            .map(|id| &self.nodes[id].element)
            .ok_or(Self::EMPTY)
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let id = self.head.ok_or(Self::EMPTY)?;
        let node = self.nodes.release(id);
        self.head = node.next;
        Ok(node.element)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates from the top of the stack down to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.head, move |&id| self.nodes[id].next)
            .map(move |id| &self.nodes[id].element)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
