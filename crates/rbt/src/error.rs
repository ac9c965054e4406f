use generational_arena::Index;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor is at the end position and holds no value")]
    End,
    #[error("cursor belongs to a different tree")]
    ForeignTree,
    #[error("cursor refers to an erased node")]
    Stale,
}

/// A violated red-black or binary-search-tree property, reported by
/// [`RbTree::assert_valid`](crate::RbTree::assert_valid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {0:?} is red")]
    RedRoot(Index),
    #[error("red node {parent:?} has red child {child:?}")]
    RedRed { parent: Index, child: Index },
    #[error("node {node:?} has black height {left} on the left and {right} on the right")]
    BlackHeight { node: Index, left: usize, right: usize },
    #[error("node {node:?} does not sort strictly before its successor {successor:?}")]
    Order { node: Index, successor: Index },
    #[error("node {child:?} does not link back to parent {parent:?}")]
    ParentLink { parent: Option<Index>, child: Index },
    #[error("size counter is {counted} but {reachable} nodes are reachable")]
    Size { counted: usize, reachable: usize },
}
