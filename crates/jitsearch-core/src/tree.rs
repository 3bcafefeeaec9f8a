//! Height-balanced decision trees over sorted keys.
//!
//! Trees are built by always splitting the current `[left, right)` range at
//! its median index, so the shape depends only on the number of keys and the
//! in-order traversal reproduces the input order. The builder never sorts:
//! callers hand it strictly increasing, duplicate-free sequences.
//!
//! A tree is build-time scaffolding. Codegen walks it once and drops it.

use std::num::NonZeroUsize;

/// Largest key count a tree may hold. Return identifiers are emitted as `i32`.
pub const MAX_KEYS: usize = i32::MAX as usize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("cannot build a decision tree from an empty key sequence")]
    Empty,

    #[error("too many keys: {0} (max {MAX_KEYS})")]
    TooManyKeys(usize),
}

/// Interval tree item: a breakpoint and its position in the sorted input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub value: f32,
    pub index: u32,
}

/// Pair each breakpoint with its input position.
pub fn breakpoints(values: &[f32]) -> Vec<Breakpoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| Breakpoint {
            value,
            index: index as u32,
        })
        .collect()
}

/// Table tree item: a key and its payload.
///
/// The payload is never zero, which leaves zero free as the miss marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entry {
    pub key: i32,
    pub value: NonZeroUsize,
}

/// A decision tree node. Each node exclusively owns its children.
#[derive(Debug)]
pub struct Node<T> {
    item: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// The four child configurations a node can have.
///
/// Codegen dispatches on this instead of probing `left`/`right` separately.
#[derive(Debug)]
pub enum Shape<'a, T> {
    Leaf,
    LeftOnly(&'a Node<T>),
    RightOnly(&'a Node<T>),
    Both(&'a Node<T>, &'a Node<T>),
}

impl<T> Node<T> {
    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn shape(&self) -> Shape<'_, T> {
        match (self.left(), self.right()) {
            (None, None) => Shape::Leaf,
            (Some(left), None) => Shape::LeftOnly(left),
            (None, Some(right)) => Shape::RightOnly(right),
            (Some(left), Some(right)) => Shape::Both(left, right),
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        1 + left.max(right)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        1 + self.left().map_or(0, Node::len) + self.right().map_or(0, Node::len)
    }

    /// A tree always holds at least one node.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate items in key order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(Some(self));
        iter
    }
}

/// In-order iterator over a tree's items.
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.item)
    }
}

/// Build a balanced tree over `items`, which must already be sorted.
pub fn build_tree<T: Clone>(items: &[T]) -> Result<Node<T>, TreeError> {
    if items.len() > MAX_KEYS {
        return Err(TreeError::TooManyKeys(items.len()));
    }
    build_range(items, 0, items.len())
        .map(|root| *root)
        .ok_or(TreeError::Empty)
}

fn build_range<T: Clone>(items: &[T], left: usize, right: usize) -> Option<Box<Node<T>>> {
    if left >= right {
        return None;
    }
    let mid = left + (right - left) / 2;
    Some(Box::new(Node {
        item: items[mid].clone(),
        left: build_range(items, left, mid),
        right: build_range(items, mid + 1, right),
    }))
}
