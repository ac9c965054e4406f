use generational_arena::{Arena, Index};
use log::trace;

use crate::node::{
    child, child_shape, color_of, position, rotate, set_child, ChildShape, Color, Side,
};
use crate::types::RbNodeLike;
use crate::util::first;

/// A position one black node short of its sibling subtree: the transient
/// "double-black" marker. It only lives for the duration of the fixup.
#[derive(Clone, Copy, Debug)]
struct Deficit {
    /// Node at the short position, `None` when it is an absent child.
    node: Option<Index>,
    parent: Index,
    side: Side,
}

/// Unlinks `node` from the tree and rebalances.
///
/// A node with two children keeps its slot: its value is swapped with the
/// value of its in-order successor and the successor's slot is unlinked
/// instead. Returns the new root and the unlinked node, which still holds
/// the value originally stored at `node`. The node is not freed.
pub fn remove<N: RbNodeLike>(
    arena: &mut Arena<N>,
    root: Option<Index>,
    node: Index,
) -> (Option<Index>, Index) {
    let target = match child_shape(arena, node) {
        ChildShape::Both => {
            let succ = first(arena, arena[node].r()).expect("right subtree is not empty");
            if let (Some(a), Some(b)) = arena.get2_mut(node, succ) {
                std::mem::swap(a.value_mut(), b.value_mut());
            }
            succ
        }
        _ => node,
    };
    (unlink(arena, root, target), target)
}

/// Splices out a node with at most one child.
fn unlink<N: RbNodeLike>(arena: &mut Arena<N>, mut root: Option<Index>, n: Index) -> Option<Index> {
    let replacement = arena[n].l().or(arena[n].r());
    let parent = arena[n].p();
    let side = position(arena, n).side();

    if let Some(c) = replacement {
        arena[c].set_p(parent);
    }
    match (parent, side) {
        (Some(p), Some(s)) => set_child(arena, p, s, replacement),
        _ => root = replacement,
    }
    arena[n].set_p(None);
    arena[n].set_l(None);
    arena[n].set_r(None);

    if arena[n].is_black() {
        match replacement {
            Some(c) if arena[c].is_red() => arena[c].set_color(Color::Black),
            _ => {
                if let (Some(p), Some(s)) = (parent, side) {
                    root = remove_fixup(
                        arena,
                        root,
                        Deficit {
                            node: replacement,
                            parent: p,
                            side: s,
                        },
                    );
                }
            }
        }
    }

    if let Some(r) = root {
        arena[r].set_color(Color::Black);
    }
    root
}

fn remove_fixup<N: RbNodeLike>(
    arena: &mut Arena<N>,
    mut root: Option<Index>,
    mut d: Deficit,
) -> Option<Index> {
    loop {
        let Deficit { node, parent: p, side } = d;
        let s = child(arena, p, side.opposite())
            .expect("a position short of black height has a sibling");

        if arena[s].is_red() {
            trace!("remove fixup: red sibling {s:?} of {node:?}, rotate {p:?}");
            arena[s].set_color(Color::Black);
            arena[p].set_color(Color::Red);
            root = rotate(arena, root, p, side);
            continue;
        }

        let near = child(arena, s, side);
        let far = child(arena, s, side.opposite());

        if color_of(arena, far) == Color::Red {
            trace!("remove fixup: far nephew of {node:?} is red, rotate {p:?}");
            let parent_color = arena[p].color();
            arena[s].set_color(parent_color);
            arena[p].set_color(Color::Black);
            if let Some(f) = far {
                arena[f].set_color(Color::Black);
            }
            root = rotate(arena, root, p, side);
            break;
        }

        if let Some(nr) = near.filter(|&i| arena[i].is_red()) {
            trace!("remove fixup: near nephew {nr:?} is red, rotate {s:?}");
            arena[nr].set_color(Color::Black);
            arena[s].set_color(Color::Red);
            root = rotate(arena, root, s, side.opposite());
            continue;
        }

        arena[s].set_color(Color::Red);
        if arena[p].is_red() {
            trace!("remove fixup: absorbed by red parent {p:?}");
            arena[p].set_color(Color::Black);
            break;
        }
        let Some(gp) = arena[p].p() else {
            trace!("remove fixup: deficit reached the root");
            break;
        };
        trace!("remove fixup: deficit moves up to {p:?}");
        d = Deficit {
            node: Some(p),
            parent: gp,
            side: position(arena, p).side().expect("non-root node hangs on a side"),
        };
    }
    root
}
