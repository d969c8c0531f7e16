//! Singly linked list of `i32` values built from owning links.
//!
//! Every node is owned by the link in front of it (the list handle owns the
//! head). The only ways to change the shape of a [`List`] are building it from
//! a sequence, prepending, and unlinking, so a chain can never contain a cycle.

use std::fmt;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    value: i32,
    next: Link,
}

/// Handle to the first node of a chain, or nothing for the empty list.
#[derive(Default)]
pub struct List {
    head: Link,
}

impl List {
    pub fn new() -> Self {
        List { head: None }
    }

    /// Builds a list holding `values` in order; the first value becomes the head.
    pub fn from_values<I: IntoIterator<Item = i32>>(values: I) -> Self {
        values.into_iter().collect()
    }

    pub fn push_front(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value, next }));
    }

    pub fn pop_front(&mut self) -> Option<i32> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            value
        })
    }

    pub fn front(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.value)
    }

    /// Number of nodes, counted by walking the chain.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Unlinks the node just before the tail and returns its value.
    ///
    /// Lists with fewer than two nodes have no such node and are left alone.
    /// Single forward pass, no extra allocation.
    pub fn remove_second_last(&mut self) -> Option<i32> {
        if self.head.as_ref().is_none_or(|head| head.next.is_none()) {
            return None;
        }

        // Advance while the node after the current one still has a successor.
        // Stops on the link that owns the second-to-last node.
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .and_then(|node| node.next.as_ref())
            .is_some_and(|next| next.next.is_some())
        {
            cursor = &mut cursor.as_mut()?.next;
        }

        let Node { value, next } = *cursor.take()?;
        *cursor = next;
        Some(value)
    }
}

impl FromIterator<i32> for List {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = List::new();
        let mut tail = &mut list.head;
        for value in iter {
            tail = &mut tail.insert(Box::new(Node { value, next: None })).next;
        }
        list
    }
}

impl Clone for List {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for List {}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Bracketed, comma separated rendering: `[3, 1, 2]`, or `[]` when empty.
impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_values(f, self.iter())
    }
}

/// Writes `values` in the same bracketed form as `List`'s `Display`.
pub(crate) fn write_values<W, I>(out: &mut W, values: I) -> fmt::Result
where
    W: fmt::Write + ?Sized,
    I: IntoIterator<Item = i32>,
{
    out.write_str("[")?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{value}")?;
    }
    out.write_str("]")
}

// Release nodes one at a time; the default recursive drop would use one
// stack frame per node.
impl Drop for List {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
