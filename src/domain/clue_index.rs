//! The detective's notebook: a binary search tree of discovered clues.
//!
//! Clues are kept unique and in lexicographic order, so an in-order walk of
//! the tree is the alphabetical clue list.

use std::cmp::Ordering;

use tracing::instrument;

use crate::domain::text::ClueText;

type Link = Option<Box<ClueNode>>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ClueNode {
    text: ClueText,
    left: Link,
    right: Link,
}

impl ClueNode {
    const fn leaf(text: ClueText) -> Self {
        Self {
            text,
            left: None,
            right: None,
        }
    }
}

/// An ordered set of unique clue texts backed by an unbalanced BST.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClueIndex {
    root: Link,
    len: usize,
}

impl ClueIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Records a clue.
    ///
    /// Returns `true` if the clue was new. Inserting a clue that is already
    /// present leaves the tree untouched.
    #[instrument(level = "trace", skip_all, fields(clue = %text))]
    pub fn insert(&mut self, text: ClueText) -> bool {
        let inserted = insert_into(&mut self.root, text);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Returns `true` if the clue has been recorded.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            node = match text.cmp(current.text.as_str()) {
                Ordering::Less => current.left.as_deref(),
                Ordering::Greater => current.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// The number of distinct clues recorded.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no clue has been recorded yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree; zero when empty.
    #[must_use]
    pub fn depth(&self) -> usize {
        fn depth(node: Option<&ClueNode>) -> usize {
            node.map_or(0, |n| 1 + depth(n.left.as_deref()).max(depth(n.right.as_deref())))
        }
        depth(self.root.as_deref())
    }

    /// Iterates over the clues in alphabetical order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref())
    }

    /// Releases every node children-first and returns how many there were.
    #[must_use]
    pub fn teardown(mut self) -> usize {
        teardown(self.root.take())
    }
}

fn insert_into(slot: &mut Link, text: ClueText) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(ClueNode::leaf(text)));
            true
        }
        Some(node) => match text.cmp(&node.text) {
            Ordering::Less => insert_into(&mut node.left, text),
            Ordering::Greater => insert_into(&mut node.right, text),
            Ordering::Equal => false,
        },
    }
}

fn teardown(link: Link) -> usize {
    let Some(mut node) = link else {
        return 0;
    };
    let released = teardown(node.left.take()) + teardown(node.right.take());
    drop(node);
    released + 1
}

/// In-order iterator over a [`ClueIndex`].
#[derive(Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a ClueNode>,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a ClueNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut node: Option<&'a ClueNode>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ClueText;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.text)
    }
}

impl<'a> IntoIterator for &'a ClueIndex {
    type Item = &'a ClueText;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ClueText> for ClueIndex {
    fn extend<T: IntoIterator<Item = ClueText>>(&mut self, iter: T) {
        for text in iter {
            self.insert(text);
        }
    }
}

impl FromIterator<ClueText> for ClueIndex {
    fn from_iter<T: IntoIterator<Item = ClueText>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
