use std::fmt::{self, Display};

use crate::linked_list::{Iter, LinkedList};

/// FIFO queue: values enter at the tail of the list and leave from the head.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Queue<T> {
        Queue {
            list: LinkedList::new(),
        }
    }

    pub fn get_size(&self) -> usize {
        self.list.get_size()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn enqueue(&mut self, value: T) {
        self.list.add(value);
    }

    /// Removes the oldest value, or `None` once the queue is drained.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Oldest-enqueued first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }
}

impl<T: Clone> Queue<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.list.to_vec()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            list: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_in_enqueue_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut queue: Queue<&str> = Queue::new();
        assert_eq!(queue.peek(), None);
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(queue.peek(), Some(&"a"));
        assert_eq!(queue.get_size(), 2);
    }

    #[test]
    fn enqueue_after_drain_reuses_tail() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(2);
        queue.enqueue(3);
        assert_eq!(queue.to_vec(), vec![2, 3]);
    }

    #[test]
    fn to_vec_is_oldest_first_and_clear_empties() {
        let mut queue: Queue<i32> = (1..=4).collect();
        assert_eq!(queue.to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(queue.to_string(), "1 2 3 4");
        queue.clear();
        assert_eq!(queue.get_size(), 0);
        assert_eq!(queue.dequeue(), None);
    }
}
