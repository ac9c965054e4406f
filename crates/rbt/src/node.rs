use generational_arena::{Arena, Index};

use crate::types::{Node, RbNodeLike};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Short tag used by the tree diagram: `r` or `b`.
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Black => 'b',
        }
    }
}

/// Which children of a node are present.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChildShape {
    None,
    LeftOnly,
    RightOnly,
    Both,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Where a node hangs relative to its parent.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    Root,
    Left,
    Right,
}

impl Position {
    pub fn side(self) -> Option<Side> {
        match self {
            Position::Root => None,
            Position::Left => Some(Side::Left),
            Position::Right => Some(Side::Right),
        }
    }
}

/// Red-black tree node.
#[derive(Clone, Debug)]
pub struct RbNode<T> {
    pub p: Option<Index>,
    pub l: Option<Index>,
    pub r: Option<Index>,
    pub v: T,
    pub color: Color,
}

impl<T> RbNode<T> {
    pub fn new(v: T, color: Color) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
            color,
        }
    }
}

impl<T> Node for RbNode<T> {
    fn p(&self) -> Option<Index> {
        self.p
    }

    fn l(&self) -> Option<Index> {
        self.l
    }

    fn r(&self) -> Option<Index> {
        self.r
    }

    fn set_p(&mut self, v: Option<Index>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<Index>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<Index>) {
        self.r = v;
    }
}

impl<T> RbNodeLike for RbNode<T> {
    type Value = T;

    fn value(&self) -> &T {
        &self.v
    }

    fn value_mut(&mut self) -> &mut T {
        &mut self.v
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

pub fn child<N: Node>(arena: &Arena<N>, n: Index, side: Side) -> Option<Index> {
    match side {
        Side::Left => arena[n].l(),
        Side::Right => arena[n].r(),
    }
}

pub fn set_child<N: Node>(arena: &mut Arena<N>, n: Index, side: Side, c: Option<Index>) {
    match side {
        Side::Left => arena[n].set_l(c),
        Side::Right => arena[n].set_r(c),
    }
}

pub fn child_shape<N: Node>(arena: &Arena<N>, n: Index) -> ChildShape {
    match (arena[n].l(), arena[n].r()) {
        (None, None) => ChildShape::None,
        (Some(_), None) => ChildShape::LeftOnly,
        (None, Some(_)) => ChildShape::RightOnly,
        (Some(_), Some(_)) => ChildShape::Both,
    }
}

pub fn position<N: Node>(arena: &Arena<N>, n: Index) -> Position {
    match arena[n].p() {
        None => Position::Root,
        Some(p) if arena[p].l() == Some(n) => Position::Left,
        Some(_) => Position::Right,
    }
}

/// The other child of `n`'s parent. The root has no sibling.
pub fn sibling<N: Node>(arena: &Arena<N>, n: Index) -> Option<Index> {
    let p = arena[n].p()?;
    match position(arena, n) {
        Position::Left => arena[p].r(),
        _ => arena[p].l(),
    }
}

/// Color of an optional node; absent children count as black.
pub fn color_of<N: RbNodeLike>(arena: &Arena<N>, n: Option<Index>) -> Color {
    n.map_or(Color::Black, |i| arena[i].color())
}

/// Replaces `old` with `new` in the link coming from `old`'s parent and
/// returns the updated tree root.
fn replace_in_parent<N: Node>(
    arena: &mut Arena<N>,
    root: Option<Index>,
    old: Index,
    new: Index,
) -> Option<Index> {
    let parent = arena[old].p();
    arena[new].set_p(parent);
    match parent {
        None => Some(new),
        Some(p) => {
            if arena[p].l() == Some(old) {
                arena[p].set_l(Some(new));
            } else {
                arena[p].set_r(Some(new));
            }
            root
        }
    }
}

/// Rotates the subtree at `n` so that `n` moves down toward `side`.
///
/// The child on the opposite side becomes the subtree root. Colors are not
/// touched. Panics if that child is absent.
pub fn rotate<N: Node>(
    arena: &mut Arena<N>,
    root: Option<Index>,
    n: Index,
    side: Side,
) -> Option<Index> {
    let up_side = side.opposite();
    let pivot =
        child(arena, n, up_side).expect("rotation requires a child on the opposite side");
    let inner = child(arena, pivot, side);

    set_child(arena, n, up_side, inner);
    if let Some(inner) = inner {
        arena[inner].set_p(Some(n));
    }
    let root = replace_in_parent(arena, root, n, pivot);
    set_child(arena, pivot, side, Some(n));
    arena[n].set_p(Some(pivot));
    root
}

pub fn rotate_left<N: Node>(arena: &mut Arena<N>, root: Option<Index>, n: Index) -> Option<Index> {
    rotate(arena, root, n, Side::Left)
}

pub fn rotate_right<N: Node>(arena: &mut Arena<N>, root: Option<Index>, n: Index) -> Option<Index> {
    rotate(arena, root, n, Side::Right)
}
