use generational_arena::{Arena, Index};

use crate::types::Node;

/// Number of parent hops from `node` up to the root.
pub fn depth<N: Node>(arena: &Arena<N>, node: Index) -> usize {
    let mut depth = 0;
    let mut curr = arena[node].p();
    while let Some(p) = curr {
        depth += 1;
        curr = arena[p].p();
    }
    depth
}

/// Count of nodes reachable from `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<Index>) -> usize {
    let mut count = 0;
    let mut stack: Vec<Index> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        count += 1;
        stack.extend(arena[i].l());
        stack.extend(arena[i].r());
    }
    count
}

/// Indices of the subtree at `root` in post-order (children before parents).
pub fn subtree_post_order<N: Node>(arena: &Arena<N>, root: Option<Index>) -> Vec<Index> {
    let mut out = Vec::new();
    let mut stack: Vec<Index> = root.into_iter().collect();
    while let Some(i) = stack.pop() {
        out.push(i);
        stack.extend(arena[i].l());
        stack.extend(arena[i].r());
    }
    out.reverse();
    out
}
