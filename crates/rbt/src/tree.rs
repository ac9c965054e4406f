use std::fmt::{self, Display};

use generational_arena::{Arena, Index};
use log::debug;

use crate::comparator::{Compare, Less};
use crate::cursor::{Cursor, IntoIter, Iter, TreeId};
use crate::error::{CursorError, InvariantError};
use crate::node::{Color, RbNode};
use crate::print::{print_binary, render_diagram, PrintChild, Printable};
use crate::red_black::{descend, insert, remove, verify, Descent};
use crate::util::{first, last, next, prev};

/// Ordered set of unique values kept in a red-black tree.
///
/// Nodes live in a generational arena and link to each other by index.
/// Ordering is decided by the comparator `C`, a strict weak order fixed at
/// construction ([`Less`] by default). Values that compare equal are
/// duplicates: the second insert is ignored.
///
/// Positions are exposed through detached [`Cursor`] handles produced by
/// [`begin`](Self::begin), [`end`](Self::end), [`largest`](Self::largest)
/// and [`find`](Self::find), and consumed by [`erase`](Self::erase).
pub struct RbTree<T, C = Less> {
    id: TreeId,
    root: Option<Index>,
    len: usize,
    comparator: C,
    arena: Arena<RbNode<T>>,
}

impl<T: PartialOrd> RbTree<T, Less> {
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T, C: Default> Default for RbTree<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> RbTree<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            id: TreeId::fresh(),
            root: None,
            len: 0,
            comparator,
            arena: Arena::new(),
        }
    }

    pub fn id(&self) -> TreeId {
        self.id
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn cursor_at(&self, node: Option<Index>) -> Cursor {
        Cursor {
            tree: self.id,
            node,
        }
    }

    /// Maps a cursor back to a live node, `Ok(None)` for the end sentinel.
    fn resolve(&self, cursor: &Cursor) -> Result<Option<Index>, CursorError> {
        if cursor.tree != self.id {
            return Err(CursorError::ForeignTree);
        }
        match cursor.node {
            None => Ok(None),
            Some(i) if self.arena.contains(i) => Ok(Some(i)),
            Some(_) => Err(CursorError::Stale),
        }
    }

    /// Cursor to the smallest value, or the end sentinel when empty.
    pub fn begin(&self) -> Cursor {
        self.cursor_at(first(&self.arena, self.root))
    }

    /// The end sentinel, one past the largest value.
    pub fn end(&self) -> Cursor {
        Cursor::end(self.id)
    }

    /// Cursor to the largest value, or the end sentinel when empty.
    pub fn largest(&self) -> Cursor {
        self.cursor_at(last(&self.arena, self.root))
    }

    pub fn get(&self, cursor: &Cursor) -> Result<&T, CursorError> {
        match self.resolve(cursor)? {
            Some(i) => Ok(&self.arena[i].v),
            None => Err(CursorError::End),
        }
    }

    pub fn successor(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        match self.resolve(&cursor)? {
            Some(i) => Ok(self.cursor_at(next(&self.arena, i))),
            None => Err(CursorError::End),
        }
    }

    pub fn predecessor(&self, cursor: Cursor) -> Result<Cursor, CursorError> {
        match self.resolve(&cursor)? {
            Some(i) => Ok(self.cursor_at(prev(&self.arena, i))),
            None => Ok(self.largest()),
        }
    }

    pub fn first(&self) -> Option<&T> {
        first(&self.arena, self.root).map(|i| &self.arena[i].v)
    }

    pub fn last(&self) -> Option<&T> {
        last(&self.arena, self.root).map(|i| &self.arena[i].v)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(
            &self.arena,
            first(&self.arena, self.root),
            last(&self.arena, self.root),
            self.len,
        )
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        let mut best = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((i, d)) = stack.pop() {
            best = best.max(d);
            let node = &self.arena[i];
            stack.extend(node.l.map(|c| (c, d + 1)));
            stack.extend(node.r.map(|c| (c, d + 1)));
        }
        best
    }

    /// Black nodes on the leftmost root-to-leaf path, root included.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut curr = self.root;
        while let Some(i) = curr {
            if self.arena[i].color == Color::Black {
                count += 1;
            }
            curr = self.arena[i].l;
        }
        count
    }

    /// Drops every value.
    ///
    /// The tree takes a fresh identity, so cursors handed out before the
    /// call are rejected as foreign afterwards.
    pub fn clear(&mut self) {
        debug!("clearing tree {:?} with {} values", self.id, self.len);
        self.id = TreeId::fresh();
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Moves the contents out in O(1), leaving `self` empty.
    ///
    /// The returned tree keeps this tree's identity, so outstanding cursors
    /// stay valid against it; `self` gets a fresh identity.
    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        debug!("taking {} values out of tree {:?}", self.len, self.id);
        let empty = Self::with_comparator(self.comparator.clone());
        std::mem::replace(self, empty)
    }

    /// Exchanges the contents, comparators and identities of two trees in
    /// O(1). Cursors follow their nodes.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    /// Sideways diagram of the tree, largest value first.
    pub fn render(&self) -> String
    where
        T: Display,
    {
        render_diagram(&self.arena, self.root)
    }

    /// Writes [`render`](Self::render) to standard output.
    pub fn print(&self)
    where
        T: Display,
    {
        print!("{}", self.render());
    }
}

impl<T, C: Compare<T>> RbTree<T, C> {
    /// Inserts `value` unless an equal value is already present.
    ///
    /// Returns `false` (dropping `value`) for a duplicate.
    pub fn insert(&mut self, value: T) -> bool {
        let (parent, side) = match descend(&self.arena, self.root, &value, &self.comparator) {
            Descent::Found(_) => return false,
            Descent::Vacant { parent, side } => (parent, side),
        };
        let node = self.arena.insert(RbNode::new(value, Color::Red));
        self.root = insert(&mut self.arena, self.root, node, parent, side);
        self.len += 1;
        true
    }

    /// Builds the value from `args` and inserts it.
    pub fn emplace<A>(&mut self, args: A) -> bool
    where
        T: From<A>,
    {
        self.insert(T::from(args))
    }

    /// Builds the value with `make` and inserts it.
    pub fn emplace_with<F>(&mut self, make: F) -> bool
    where
        F: FnOnce() -> T,
    {
        self.insert(make())
    }

    /// Cursor to the value equal to `value`, or the end sentinel.
    pub fn find(&self, value: &T) -> Cursor {
        match descend(&self.arena, self.root, value, &self.comparator) {
            Descent::Found(i) => self.cursor_at(Some(i)),
            Descent::Vacant { .. } => self.end(),
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        !self.find(value).is_end()
    }

    /// Removes the value at `cursor` and returns it.
    ///
    /// The end sentinel, cursors of other trees and cursors to already erased
    /// nodes are ignored and yield `None`. Erasing a node with two children
    /// moves its successor's value into it, so a cursor to that node now
    /// reads the successor's value and a cursor to the successor goes stale.
    pub fn erase(&mut self, cursor: Cursor) -> Option<T> {
        match self.try_erase(cursor) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!("erase ignored on tree {:?}: {err}", self.id);
                None
            }
        }
    }

    /// Like [`erase`](Self::erase), but reports why nothing was removed.
    pub fn try_erase(&mut self, cursor: Cursor) -> Result<T, CursorError> {
        let node = self.resolve(&cursor)?.ok_or(CursorError::End)?;
        let (root, unlinked) = remove(&mut self.arena, self.root, node);
        self.root = root;
        self.len -= 1;
        let removed = self.arena.remove(unlinked).expect("unlinked node is still stored");
        Ok(removed.v)
    }

    /// Removes and returns the value equal to `value`.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        self.try_erase(self.find(value)).ok()
    }

    pub fn pop_first(&mut self) -> Option<T> {
        self.try_erase(self.begin()).ok()
    }

    pub fn pop_last(&mut self) -> Option<T> {
        self.try_erase(self.largest()).ok()
    }

    /// Checks every red-black and ordering invariant.
    pub fn assert_valid(&self) -> Result<(), InvariantError> {
        verify(&self.arena, self.root, self.len, &self.comparator)?;
        Ok(())
    }
}

impl<T: Clone, C: Clone> Clone for RbTree<T, C> {
    /// Copies the structure node for node under a fresh identity.
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            root: self.root,
            len: self.len,
            comparator: self.comparator.clone(),
            arena: self.arena.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for RbTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, C> PartialEq for RbTree<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C> Eq for RbTree<T, C> {}

impl<T, C: Compare<T>> Extend<T> for RbTree<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for RbTree<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a RbTree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for RbTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let mut order = Vec::with_capacity(self.len);
        let mut curr = first(&self.arena, self.root);
        while let Some(i) = curr {
            order.push(i);
            curr = next(&self.arena, i);
        }
        let values = order
            .into_iter()
            .filter_map(|i| self.arena.remove(i))
            .map(|node| node.v)
            .collect();
        IntoIter::new(values)
    }
}

impl<T: Display, C> Printable for RbTree<T, C> {
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        fn node<T: Display>(arena: &Arena<RbNode<T>>, i: Option<Index>, tab: &str) -> String {
            let Some(i) = i else {
                return "∅".to_string();
            };
            let n = &arena[i];
            let label = format!("{}({})", n.v, n.color.tag());
            if n.l.is_none() && n.r.is_none() {
                return label;
            }
            let left: &PrintChild<'_> = &|tab: &str| node(arena, n.l, tab);
            let right: &PrintChild<'_> = &|tab: &str| node(arena, n.r, tab);
            label + &print_binary(tab, [Some(left), Some(right)])
        }

        let tab = tab.unwrap_or("");
        let root: &PrintChild<'_> = &|tab: &str| node(&self.arena, self.root, tab);
        format!("RbTree(len={}){}", self.len, print_binary(tab, [Some(root), None]))
    }
}

/// Exchanges two trees in O(1).
pub fn swap<T, C>(a: &mut RbTree<T, C>, b: &mut RbTree<T, C>) {
    a.swap(b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::Greater;

    fn tree_of(values: &[i32]) -> RbTree<i32> {
        values.iter().copied().collect()
    }

    fn values<C>(tree: &RbTree<i32, C>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn insert_ignores_duplicates() {
        let mut tree = RbTree::new();
        assert!(tree.insert(5));
        assert!(tree.insert(3));
        assert!(!tree.insert(5));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.size(), 2);
        tree.assert_valid().unwrap();
    }

    #[test]
    fn empty_tree_positions() {
        let tree: RbTree<i32> = RbTree::new();
        assert!(tree.is_empty());
        assert!(tree.begin().is_end());
        assert!(tree.largest().is_end());
        assert_eq!(tree.begin(), tree.end());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.black_height(), 0);
        assert_eq!(tree.get(&tree.end()), Err(CursorError::End));
    }

    #[test]
    fn find_and_get() {
        let tree = tree_of(&[5, 3, 8, 1]);
        let c = tree.find(&3);
        assert_eq!(tree.get(&c), Ok(&3));
        assert!(tree.find(&4).is_end());
        assert!(tree.contains(&8));
        assert!(!tree.contains(&9));
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&8));
    }

    #[test]
    fn erase_returns_value_and_shrinks() {
        let mut tree = tree_of(&[5, 3, 8, 1]);
        let c = tree.find(&3);
        assert_eq!(tree.erase(c), Some(3));
        assert!(tree.find(&3).is_end());
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(&c), Err(CursorError::Stale));
        assert_eq!(tree.try_erase(c), Err(CursorError::Stale));
        tree.assert_valid().unwrap();
    }

    #[test]
    fn erase_of_end_or_foreign_cursor_is_ignored() {
        let mut tree = tree_of(&[2, 1, 3]);
        let other = tree_of(&[2]);
        let before = tree.render();
        assert_eq!(tree.erase(tree.end()), None);
        assert_eq!(tree.erase(other.find(&2)), None);
        assert_eq!(tree.try_erase(other.find(&2)), Err(CursorError::ForeignTree));
        assert_eq!(tree.try_erase(tree.end()), Err(CursorError::End));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.render(), before);
    }

    #[test]
    fn erase_of_two_child_node_moves_successor_value() {
        let mut tree = tree_of(&[2, 1, 3]);
        let two = tree.find(&2);
        let three = tree.find(&3);
        assert_eq!(tree.erase(two), Some(2));
        assert_eq!(tree.get(&two), Ok(&3));
        assert_eq!(tree.get(&three), Err(CursorError::Stale));
        assert_eq!(values(&tree), vec![1, 3]);
    }

    #[test]
    fn remove_and_pop() {
        let mut tree = tree_of(&[4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(tree.remove(&4), Some(4));
        assert_eq!(tree.remove(&4), None);
        assert_eq!(tree.pop_first(), Some(1));
        assert_eq!(tree.pop_last(), Some(7));
        assert_eq!(values(&tree), vec![2, 3, 5, 6]);
        tree.assert_valid().unwrap();
        while tree.pop_first().is_some() {}
        assert!(tree.is_empty());
        assert_eq!(tree.pop_last(), None);
    }

    #[test]
    fn clear_invalidates_cursors() {
        let mut tree = tree_of(&[1, 2, 3]);
        let c = tree.find(&1);
        tree.clear();
        assert!(tree.is_empty());
        tree.insert(1);
        assert_eq!(tree.get(&c), Err(CursorError::ForeignTree));
        assert_eq!(tree.get(&tree.find(&1)), Ok(&1));
    }

    #[test]
    fn take_moves_contents_and_cursors() {
        let mut tree = tree_of(&[1, 2, 3]);
        let c = tree.find(&2);
        let moved = tree.take();
        assert_eq!(tree.len(), 0);
        assert!(tree.find(&2).is_end());
        assert_eq!(moved.get(&c), Ok(&2));
        assert_eq!(tree.get(&c), Err(CursorError::ForeignTree));
        tree.insert(9);
        assert_eq!(values(&tree), vec![9]);
        assert_eq!(values(&moved), vec![1, 2, 3]);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a = tree_of(&[1, 2]);
        let mut b = tree_of(&[7]);
        let ca = a.find(&1);
        swap(&mut a, &mut b);
        assert_eq!(values(&a), vec![7]);
        assert_eq!(values(&b), vec![1, 2]);
        assert_eq!(b.get(&ca), Ok(&1));
        a.swap(&mut b);
        assert_eq!(a.get(&ca), Ok(&1));
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = tree_of(&[5, 3, 8]);
        let copy = tree.clone();
        assert_eq!(tree, copy);
        assert_ne!(tree.id(), copy.id());
        assert_eq!(copy.get(&tree.find(&5)), Err(CursorError::ForeignTree));
        tree.remove(&5);
        assert_eq!(values(&copy), vec![3, 5, 8]);
        assert_ne!(tree, copy);
    }

    #[test]
    fn custom_comparators() {
        let mut desc = RbTree::with_comparator(Greater);
        desc.extend([1, 5, 3]);
        assert_eq!(values(&desc), vec![5, 3, 1]);
        desc.assert_valid().unwrap();

        let mut by_len = RbTree::with_comparator(|a: &String, b: &String| a.len() < b.len());
        assert!(by_len.insert("ab".to_string()));
        assert!(!by_len.insert("cd".to_string()));
        assert!(by_len.contains(&"zz".to_string()));
    }

    #[test]
    fn emplace_variants() {
        let mut tree: RbTree<i64> = RbTree::new();
        assert!(tree.emplace(3i32));
        assert!(tree.emplace_with(i64::default));
        assert!(!tree.emplace(0u8));
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn iterators_run_both_ways() {
        let tree = tree_of(&[4, 2, 6, 1, 3]);
        let mut it = tree.iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&6));
        assert_eq!(it.collect::<Vec<_>>(), vec![&2, &3, &4]);
        assert_eq!((&tree).into_iter().rev().count(), 5);
        assert_eq!(tree.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 6]);
    }

    #[test]
    fn heights_stay_logarithmic() {
        let tree: RbTree<u32> = (0..1000).collect();
        tree.assert_valid().unwrap();
        assert!(tree.height() <= 2 * 10);
        assert!(tree.black_height() >= 5);
    }

    #[test]
    fn debug_lists_values() {
        let tree = tree_of(&[2, 1, 3]);
        assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    }

    #[test]
    fn render_diagram_of_three() {
        let tree = tree_of(&[2, 1, 3]);
        let pad = "          ";
        assert_eq!(tree.render(), format!("{pad}/3(r)\n-2(b)\n{pad}\\1(r)\n"));
    }

    #[test]
    fn printable_dump() {
        let tree = tree_of(&[2, 1, 3]);
        assert_eq!(
            tree.to_string_with_tab(None),
            "RbTree(len=3)\n← 2(b)\n  ← 1(r)\n  → 3(r)"
        );
        let single = tree_of(&[1]);
        assert_eq!(single.to_string_with_tab(Some("> ")), "RbTree(len=1)\n> ← 1(b)");
        let lopsided = tree_of(&[2, 1]);
        assert_eq!(
            lopsided.to_string_with_tab(None),
            "RbTree(len=2)\n← 2(b)\n  ← 1(r)\n  → ∅"
        );
    }
}
