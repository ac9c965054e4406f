use generational_arena::Index;

use crate::node::Color;

/// Parent/child links of an arena-resident binary tree node.
///
/// All "pointers" are `Option<Index>` handles into the owning
/// [`Arena`](generational_arena::Arena).
pub trait Node {
    fn p(&self) -> Option<Index>;
    fn l(&self) -> Option<Index>;
    fn r(&self) -> Option<Index>;
    fn set_p(&mut self, v: Option<Index>);
    fn set_l(&mut self, v: Option<Index>);
    fn set_r(&mut self, v: Option<Index>);
}

/// Red-black specific node behavior.
pub trait RbNodeLike: Node {
    type Value;

    fn value(&self) -> &Self::Value;
    fn value_mut(&mut self) -> &mut Self::Value;
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }
}
