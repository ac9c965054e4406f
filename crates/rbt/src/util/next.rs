use generational_arena::{Arena, Index};

use crate::types::Node;

use super::first::{first, last};

/// In-order successor.
pub fn next<N: Node>(arena: &Arena<N>, mut curr: Index) -> Option<Index> {
    if let Some(r) = arena[curr].r() {
        return first(arena, Some(r));
    }

    let mut p = arena[curr].p();
    while let Some(pi) = p {
        if arena[pi].r() == Some(curr) {
            curr = pi;
            p = arena[pi].p();
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &Arena<N>, mut curr: Index) -> Option<Index> {
    if let Some(l) = arena[curr].l() {
        return last(arena, Some(l));
    }

    let mut p = arena[curr].p();
    while let Some(pi) = p {
        if arena[pi].l() == Some(curr) {
            curr = pi;
            p = arena[pi].p();
        } else {
            return Some(pi);
        }
    }
    None
}
