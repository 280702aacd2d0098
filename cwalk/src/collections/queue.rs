use std::{fmt, iter};

use super::{
    node::{Link, NodeArena, SinglyNode},
    ContainerError, ContainerKind,
};

/// First in, first out, over singly linked nodes.
///
/// Elements are enqueued at the tail and dequeued from the head.
#[derive(Clone)]
pub struct Queue<T> {
    nodes: NodeArena<SinglyNode<T>>,
    head: Link,
    tail: Link,
}

impl<T> Queue<T> {
    const EMPTY: ContainerError = ContainerError::Empty(ContainerKind::Queue);

    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
        }
    }

    pub fn enqueue(&mut self, element: T) {
        let id = self.nodes.alloc(SinglyNode::new(element, None));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
    }

    pub fn front(&self) -> Result<&T, ContainerError> {
        self.head
            .map(|id| &self.nodes[id].element)
            .ok_or(Self::EMPTY)
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let id = self.head.ok_or(Self::EMPTY)?;
        let node = self.nodes.release(id);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.element)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        iter::successors(self.head, move |&id| self.nodes[id].next)
            .map(move |id| &self.nodes[id].element)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut queue = Queue::new();
        for i in 0..10 {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), 10);

        let drained: Vec<_> = iter::from_fn(|| queue.dequeue().ok()).collect();
        assert_eq!(drained, (0..10).collect::<Vec<_>>());
        assert!(queue.is_empty());
    }

    #[test]
    fn interleaved_operations_stay_fifo() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(queue.dequeue(), Ok("a"));
        queue.enqueue("c");
        assert_eq!(queue.front(), Ok(&"b"));
        assert_eq!(queue.dequeue(), Ok("b"));
        assert_eq!(queue.dequeue(), Ok("c"));

        // draining to empty must also forget the tail
        queue.enqueue("d");
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["d"]);
        assert_eq!(queue.dequeue(), Ok("d"));
    }

    #[test]
    fn empty_queue_errors() {
        let mut queue = Queue::<u8>::new();
        let empty = ContainerError::Empty(ContainerKind::Queue);
        assert_eq!(queue.front(), Err(empty.clone()));
        assert_eq!(queue.dequeue(), Err(empty));
    }

    #[test]
    fn clear_resets() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.front().is_err());

        queue.enqueue(3);
        queue.enqueue(4);
        assert_eq!(queue.dequeue(), Ok(3));
        assert_eq!(queue.dequeue(), Ok(4));
    }
}
