use core::fmt;
use log::{debug, trace};
use std::fmt::{Debug, Display};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/*
 * Singly linked list owning its chain of nodes.
 * The only way nodes get in is push, which links at the front.
 */
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    /*
     * Build a list whose head-to-tail order is <values>.
     */
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        values.into_iter().rev().collect()
    }

    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /*
     * Walk both lists in lockstep and stop at the first differing value.
     * Identical only if both walks run out at the same position.
     */
    pub fn are_identical(&self, other: &LinkedList<T>) -> bool {
        let mut a = &self.head;
        let mut b = &other.head;
        let mut position = 0usize;
        while let (Some(node_a), Some(node_b)) = (a, b) {
            if node_a.value != node_b.value {
                debug!("Lists differ at position {}", position);
                return false;
            }
            trace!("Position {} matches", position);
            a = &node_a.next;
            b = &node_b.next;
            position += 1;
        }

        let identical = a.is_none() && b.is_none();
        if !identical {
            debug!("Lists differ in length after {} nodes", position);
        }
        identical
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink one node at a time, the default recursive drop overflows on long chains
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.next.take();
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.are_identical(other)
    }
}

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
            self.push(value);
        }
    }
}

/*
 * Arrow notation, head first : 3->2->1->NULL
 */
impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        for value in self.iter() {
            write!(f, "{}->", value)?;
        }
        write!(f, "NULL")
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}
