use std::fmt::{self, Display};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::ListError;
use crate::index::ListIndex;

/// Singly-linked list with O(1) append at the tail and O(1) insertion and
/// removal at the head.
///
/// Every node is allocated with `Box::leak` and only ever reached through raw
/// links, so `head`, `tail` and the `next` pointers are all plain `NonNull`s
/// into the same allocation. A node is freed exactly once, by `Box::from_raw`,
/// when it is unlinked.
pub struct LinkedList<T> {
    head: Link<T>,
    tail: Link<T>,
    size: usize,
    marker: PhantomData<Box<Node<T>>>,
}

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    value: T,
    next: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T, next: Link<T>) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node { value, next })))
    }
}

// The list exclusively owns its nodes, like a `Box` would.
unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    pub fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            size: 0,
            marker: PhantomData,
        }
    }

    pub fn get_size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.get_size() == 0
    }

    /// Appends `value` after the current tail.
    pub fn add(&mut self, value: T) {
        let node = Node::new(value, None);
        match self.tail {
            // SAFETY: `tail` is the last live node of this list.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;
    }

    /// Inserts `value` before the current head.
    pub fn push_front(&mut self, value: T) {
        let node = Node::new(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.size += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| {
            // SAFETY: `head` came from `Box::leak` and is unlinked here, so
            // ownership is reclaimed exactly once.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
            if self.head.is_none() {
                self.tail = None;
            }
            self.size -= 1;
            node.value
        })
    }

    pub fn front(&self) -> Option<&T> {
        // SAFETY: live nodes outlive the shared borrow of `self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `&mut self` makes this the only reference into the chain.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value })
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn get<I: ListIndex>(&self, index: I) -> Result<&T, ListError> {
        let index = self.check_index(index)?;
        let size = self.size;
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).value })
            .ok_or_else(|| ListError::OutOfRange {
                index: index as i64,
                size,
            })
    }

    pub fn get_mut<I: ListIndex>(&mut self, index: I) -> Result<&mut T, ListError> {
        let index = self.check_index(index)?;
        let size = self.size;
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).value })
            .ok_or_else(|| ListError::OutOfRange {
                index: index as i64,
                size,
            })
    }

    /// Removes and returns the value at `index`, relinking its neighbours.
    pub fn delete<I: ListIndex>(&mut self, index: I) -> Result<T, ListError> {
        let index = self.check_index(index)?;
        log::trace!("deleting index {} of {}", index, self.size);
        let size = self.size;
        let out_of_range = move || ListError::OutOfRange {
            index: index as i64,
            size,
        };
        if index == 0 {
            return self.pop_front().ok_or_else(out_of_range);
        }

        let prev = self.node_at(index - 1).ok_or_else(out_of_range)?;
        // SAFETY: `prev` and its successor are live nodes of this list; the
        // successor is unlinked before its box is reclaimed.
        unsafe {
            let removed = (*prev.as_ptr()).next.ok_or_else(out_of_range)?;
            let node = Box::from_raw(removed.as_ptr());
            (*prev.as_ptr()).next = node.next;
            if node.next.is_none() {
                self.tail = Some(prev);
            }
            self.size -= 1;
            Ok(node.value)
        }
    }

    pub fn clear(&mut self) {
        log::trace!("clearing {} nodes", self.size);
        while self.pop_front().is_some() {}
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            remaining: self.size,
            marker: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head,
            remaining: self.size,
            marker: PhantomData,
        }
    }

    fn check_index<I: ListIndex>(&self, index: I) -> Result<usize, ListError> {
        index.to_index(self.size).map_err(|err| {
            log::debug!("rejected index: {}", err);
            err
        })
    }

    fn node_at(&self, index: usize) -> Link<T> {
        let mut current = self.head;
        for _ in 0..index {
            // SAFETY: every link reachable from `head` is a live node.
            current = unsafe { (*current?.as_ptr()).next };
        }
        current
    }
}

impl<T: Clone> LinkedList<T> {
    /// Snapshot of the values, head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            // SAFETY: each node is reached once and freed once.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            current = node.next;
        }
    }
}

impl<T: Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

pub struct Iter<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>,
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            // SAFETY: the list is borrowed for 'a, so its nodes stay alive.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            next: self.next,
            remaining: self.remaining,
            marker: PhantomData,
        }
    }
}

pub struct IterMut<'a, T> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            let node = node.as_ptr();
            // SAFETY: the list is mutably borrowed for 'a and each value is
            // handed out once; `next` is read through the raw pointer so no
            // reference to the whole node is created.
            unsafe {
                self.next = (*node).next;
                self.remaining -= 1;
                &mut (*node).value
            }
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
