use generational_arena::{Arena, Index};

use crate::types::Node;

/// Leftmost node in the tree.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<Index>) -> Option<Index> {
    let mut curr = root;
    while let Some(idx) = curr {
        match arena[idx].l() {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node in the tree.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<Index>) -> Option<Index> {
    let mut curr = root;
    while let Some(idx) = curr {
        match arena[idx].r() {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}
