//! Detached traversal handles and borrowing iterators.
//!
//! A [`Cursor`] does not borrow its tree: it remembers the tree's identity
//! and a generational arena [`Index`], so it can be handed back to
//! [`RbTree::erase`] while the tree is mutably borrowed. Every access
//! re-validates the handle against the tree.

use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::{Arena, Index};

use crate::comparator::Compare;
use crate::error::CursorError;
use crate::node::RbNode;
use crate::tree::RbTree;
use crate::util::{next, prev};

/// Process-unique identity of a tree instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TreeId(u64);

impl TreeId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TreeId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Position in a tree's ordered sequence, or the end sentinel one past the
/// largest value.
///
/// Equality is by identity: two end sentinels are always equal, and two node
/// cursors are equal when they name the same node of the same tree.
#[derive(Clone, Copy, Debug)]
pub struct Cursor {
    pub(crate) tree: TreeId,
    pub(crate) node: Option<Index>,
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => self.tree == other.tree && a == b,
            _ => false,
        }
    }
}

impl Eq for Cursor {}

impl Cursor {
    pub(crate) fn end(tree: TreeId) -> Self {
        Self { tree, node: None }
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Identity of the tree that produced this cursor.
    pub fn tree_id(&self) -> TreeId {
        self.tree
    }

    /// Dereferences the cursor.
    pub fn get<'a, T, C>(&self, tree: &'a RbTree<T, C>) -> Result<&'a T, CursorError> {
        tree.get(self)
    }

    /// Steps to the in-order successor. Fails on the end sentinel.
    pub fn move_next<T, C>(&mut self, tree: &RbTree<T, C>) -> Result<(), CursorError> {
        *self = tree.successor(*self)?;
        Ok(())
    }

    /// Steps to the in-order predecessor. From the end sentinel this moves
    /// to the largest value; from the smallest value it yields the end
    /// sentinel.
    pub fn move_prev<T, C>(&mut self, tree: &RbTree<T, C>) -> Result<(), CursorError> {
        *self = tree.predecessor(*self)?;
        Ok(())
    }

    /// Moves to the position of `value` in `tree`, or to the end sentinel.
    pub fn seek<T, C: Compare<T>>(&mut self, tree: &RbTree<T, C>, value: &T) {
        *self = tree.find(value);
    }
}

/// In-order iterator over a tree's values.
pub struct Iter<'a, T> {
    arena: &'a Arena<RbNode<T>>,
    front: Option<Index>,
    back: Option<Index>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        arena: &'a Arena<RbNode<T>>,
        front: Option<Index>,
        back: Option<Index>,
        remaining: usize,
    ) -> Self {
        Self {
            arena,
            front,
            back,
            remaining,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.front?;
        self.remaining -= 1;
        self.front = next(self.arena, i);
        Some(&self.arena[i].v)
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
        let i = self.back?;
        self.remaining -= 1;
        self.back = prev(self.arena, i);
        Some(&self.arena[i].v)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Owning in-order iterator returned by `RbTree::into_iter`.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: Vec<T>) -> Self {
        Self {
            inner: values.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
