//! A singly linked list whose nodes live in an index-addressed arena.
//!
//! The list owns a `Vec` of slots. A slot either holds a live node or sits on
//! the free-list waiting to be reused by the next append/prepend. Links are
//! slot indices, so `tail` can point at the last node without owning it.

use std::fmt;
use std::iter::FusedIterator;

struct Node<T> {
    value: T,
    next: Option<usize>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Free { next_free: Option<usize> },
}

pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl<T> LinkedList<T> {
    /// Creates a list holding a single `value`.
    pub fn new(value: T) -> LinkedList<T> {
        let mut list = LinkedList::empty();
        list.append(value);
        list
    }

    fn empty() -> LinkedList<T> {
        LinkedList {
            slots: Vec::new(),
            free: None,
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value stored in the first node, or `None` once the list has been emptied.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    /// Value stored in the last node, or `None` once the list has been emptied.
    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    /// Links a new node after the current tail. O(1).
    pub fn append(&mut self, value: T) {
        let new_node = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(new_node),
            None => self.head = Some(new_node),
        }
        self.tail = Some(new_node);
        self.size += 1;
    }

    /// Links a new node in front of the current head. O(1).
    pub fn prepend(&mut self, value: T) {
        let new_node = self.alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(new_node);
        }
        self.head = Some(new_node);
        self.size += 1;
    }

    /// Unlinks the head and hands back its value. Does nothing on an empty list.
    pub fn delete_first(&mut self) -> Option<T> {
        let head = match self.head {
            Some(head) => head,
            None => {
                log::trace!("delete_first on an empty list");
                return None;
            }
        };
        let node = self.release(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        Some(node.value)
    }

    /// Unlinks the tail and hands back its value. Does nothing on an empty list.
    ///
    /// Nodes only know their successor, so finding the new tail means walking
    /// from the head: this is O(n).
    pub fn delete_last(&mut self) -> Option<T> {
        let tail = match self.tail {
            Some(tail) => tail,
            None => {
                log::trace!("delete_last on an empty list");
                return None;
            }
        };
        match self.predecessor(tail) {
            Some(new_tail) => {
                self.node_mut(new_tail).next = None;
                self.tail = Some(new_tail);
            }
            None => {
                self.head = None;
                self.tail = None;
            }
        }
        self.size -= 1;
        Some(self.release(tail).value)
    }

    /// Removes the `n`-th node counting back from the tail (`n == 1` is the
    /// tail itself). Returns `None` without touching the list when `n` is 0
    /// or larger than the length.
    pub fn remove_nth_from_end(&mut self, n: usize) -> Option<T> {
        if n == 0 || n > self.size {
            log::trace!("remove_nth_from_end({}) out of range for length {}", n, self.size);
            return None;
        }
        let head = self.head?;

        // Put the leader n nodes ahead of the follower, then move both until
        // the leader sits on the tail.
        let mut ahead = self.head;
        for _ in 0..n {
            ahead = ahead.and_then(|idx| self.node(idx).next);
        }
        let mut leader = match ahead {
            Some(leader) => leader,
            None => return self.delete_first(),
        };
        let mut follower = head;
        while let Some(next) = self.node(leader).next {
            leader = next;
            follower = self.node(follower).next?;
        }

        let target = self.node(follower).next?;
        let after = self.node(target).next;
        self.node_mut(follower).next = after;
        if self.tail == Some(target) {
            self.tail = Some(follower);
        }
        self.size -= 1;
        Some(self.release(target).value)
    }

    /// Releases every node, head first.
    pub fn clear(&mut self) {
        while self.delete_first().is_some() {}
        self.slots.clear();
        self.free = None;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.size,
        }
    }

    fn predecessor(&self, target: usize) -> Option<usize> {
        let mut current = self.head?;
        loop {
            let next = self.node(current).next?;
            if next == target {
                return Some(current);
            }
            current = next;
        }
    }

    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let node = Slot::Occupied(Node { value, next });
        match self.free {
            Some(idx) => {
                match std::mem::replace(&mut self.slots[idx], node) {
                    Slot::Free { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("free-list points at a live node"),
                }
                log::trace!("reusing slot {}", idx);
                idx
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        let free = Slot::Free { next_free: self.free };
        self.free = Some(idx);
        match std::mem::replace(&mut self.slots[idx], free) {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("slot {} released twice", idx),
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("link to free slot {}", idx),
        }
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Free { .. } => unreachable!("link to free slot {}", idx),
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self {
            writeln!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::empty();
        list.extend(self.iter().cloned());
        list
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
        for value in iter {
            self.append(value);
        }
    }
}

/// Borrowing iterator from head to tail.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let list = self.list;
        let node = list.node(self.current?);
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator; every step releases the current head.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.delete_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
