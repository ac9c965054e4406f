use std::collections::HashMap;

use generational_arena::{Arena, Index};

use crate::comparator::Compare;
use crate::error::InvariantError;
use crate::types::RbNodeLike;
use crate::util::{first, next, subtree_post_order};

/// Checks every red-black and search-tree invariant of the tree at `root`.
///
/// On success returns the black height of the tree: the number of black
/// nodes on any path from the root down to an absent child, counting the
/// root itself (`0` for an empty tree).
pub fn verify<N, C>(
    arena: &Arena<N>,
    root: Option<Index>,
    len: usize,
    cmp: &C,
) -> Result<usize, InvariantError>
where
    N: RbNodeLike,
    C: Compare<N::Value>,
{
    let Some(r) = root else {
        if len != 0 {
            return Err(InvariantError::Size {
                counted: len,
                reachable: 0,
            });
        }
        return Ok(0);
    };
    if arena[r].p().is_some() {
        return Err(InvariantError::ParentLink {
            parent: None,
            child: r,
        });
    }
    if arena[r].is_red() {
        return Err(InvariantError::RedRoot(r));
    }

    let order = subtree_post_order(arena, root);
    if order.len() != len {
        return Err(InvariantError::Size {
            counted: len,
            reachable: order.len(),
        });
    }

    // Black height below each node, excluding the node itself. Post-order
    // fills in children before their parent reads them.
    let mut heights: HashMap<Index, usize> = HashMap::with_capacity(order.len());
    for &i in &order {
        let node = &arena[i];
        let mut below = [0usize; 2];
        for (slot, c) in below.iter_mut().zip([node.l(), node.r()]) {
            let Some(c) = c else {
                continue;
            };
            if arena[c].p() != Some(i) {
                return Err(InvariantError::ParentLink {
                    parent: Some(i),
                    child: c,
                });
            }
            if node.is_red() && arena[c].is_red() {
                return Err(InvariantError::RedRed {
                    parent: i,
                    child: c,
                });
            }
            *slot = heights.get(&c).copied().unwrap_or(0) + usize::from(arena[c].is_black());
        }
        if below[0] != below[1] {
            return Err(InvariantError::BlackHeight {
                node: i,
                left: below[0],
                right: below[1],
            });
        }
        heights.insert(i, below[0]);
    }

    let mut curr = first(arena, root);
    while let Some(i) = curr {
        let succ = next(arena, i);
        if let Some(j) = succ {
            if !cmp.less(arena[i].value(), arena[j].value()) {
                return Err(InvariantError::Order {
                    node: i,
                    successor: j,
                });
            }
        }
        curr = succ;
    }

    Ok(heights.get(&r).copied().unwrap_or(0) + 1)
}
