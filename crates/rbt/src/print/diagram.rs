use std::fmt::{Display, Write};

use generational_arena::{Arena, Index};

use crate::node::{position, Position, RbNode};
use crate::util::{depth, last, prev};

/// Indentation added per level of depth.
pub const PADDING_PER_DEPTH: &str = "          ";

/// Renders the tree sideways: one line per node from the largest value to
/// the smallest, indented by depth. Each line carries a marker (`-` root,
/// `\` left child, `/` right child), the value and its color tag.
///
/// ```text
///           /3(r)
/// -2(b)
///           \1(r)
/// ```
pub fn render_diagram<T: Display>(arena: &Arena<RbNode<T>>, root: Option<Index>) -> String {
    let mut out = String::new();
    let mut curr = last(arena, root);
    while let Some(i) = curr {
        let marker = match position(arena, i) {
            Position::Root => '-',
            Position::Left => '\\',
            Position::Right => '/',
        };
        let node = &arena[i];
        let padding = PADDING_PER_DEPTH.repeat(depth(arena, i));
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{padding}{marker}{}({})", node.v, node.color.tag());
        curr = prev(arena, i);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{set_child, Color, Side};

    #[test]
    fn empty_tree_renders_nothing() {
        let arena: Arena<RbNode<i32>> = Arena::new();
        assert_eq!(render_diagram(&arena, None), "");
    }

    #[test]
    fn indents_by_depth() {
        let mut arena = Arena::new();
        let root = arena.insert(RbNode::new(1, Color::Black));
        let right = arena.insert(RbNode::new(2, Color::Red));
        set_child(&mut arena, root, Side::Right, Some(right));
        arena[right].p = Some(root);
        assert_eq!(
            render_diagram(&arena, Some(root)),
            format!("{PADDING_PER_DEPTH}/2(r)\n-1(b)\n")
        );
    }
}
