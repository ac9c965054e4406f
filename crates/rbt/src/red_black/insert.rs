use generational_arena::{Arena, Index};
use log::trace;

use crate::comparator::Compare;
use crate::node::{child, color_of, position, rotate, set_child, sibling, Color, Side};
use crate::types::RbNodeLike;

/// Outcome of a search descent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Descent {
    /// A node comparing equal to the probe.
    Found(Index),
    /// Where the probe would be attached. `parent` is `None` for an empty tree.
    Vacant { parent: Option<Index>, side: Side },
}

/// Walks down from `root` comparing `value` against each visited node.
pub fn descend<N, C>(arena: &Arena<N>, root: Option<Index>, value: &N::Value, cmp: &C) -> Descent
where
    N: RbNodeLike,
    C: Compare<N::Value>,
{
    let mut parent = None;
    let mut side = Side::Left;
    let mut curr = root;
    while let Some(i) = curr {
        let key = arena[i].value();
        side = if cmp.less(value, key) {
            Side::Left
        } else if cmp.less(key, value) {
            Side::Right
        } else {
            return Descent::Found(i);
        };
        parent = Some(i);
        curr = child(arena, i, side);
    }
    Descent::Vacant { parent, side }
}

/// Links the detached `node` into the tree at the position found by
/// [`descend`] and rebalances. Returns the new root.
pub fn insert<N: RbNodeLike>(
    arena: &mut Arena<N>,
    root: Option<Index>,
    node: Index,
    parent: Option<Index>,
    side: Side,
) -> Option<Index> {
    match parent {
        None => {
            debug_assert!(root.is_none(), "only an empty tree has no attach point");
            arena[node].set_p(None);
            arena[node].set_color(Color::Black);
            Some(node)
        }
        Some(p) => {
            set_child(arena, p, side, Some(node));
            arena[node].set_p(Some(p));
            arena[node].set_color(Color::Red);
            insert_fixup(arena, root, node)
        }
    }
}

/// Restores the red-black properties after `n` was linked in red.
pub fn insert_fixup<N: RbNodeLike>(
    arena: &mut Arena<N>,
    mut root: Option<Index>,
    mut n: Index,
) -> Option<Index> {
    loop {
        let Some(p) = arena[n].p() else {
            break;
        };
        if arena[p].is_black() {
            break;
        }
        let g = arena[p].p().expect("red parent is never the root");
        let parent_side = position(arena, p)
            .side()
            .expect("non-root node hangs on a side");
        let uncle = sibling(arena, p);

        if color_of(arena, uncle) == Color::Red {
            trace!("insert fixup: recolor {p:?} and uncle, continue at {g:?}");
            arena[p].set_color(Color::Black);
            if let Some(u) = uncle {
                arena[u].set_color(Color::Black);
            }
            arena[g].set_color(Color::Red);
            n = g;
            continue;
        }

        let mut p = p;
        if position(arena, n).side() != Some(parent_side) {
            trace!("insert fixup: zigzag at {p:?}");
            root = rotate(arena, root, p, parent_side);
            p = n;
        }
        trace!("insert fixup: line rotation at {g:?}");
        arena[p].set_color(Color::Black);
        arena[g].set_color(Color::Red);
        root = rotate(arena, root, g, parent_side.opposite());
        break;
    }

    if let Some(r) = root {
        arena[r].set_color(Color::Black);
    }
    root
}
