//! Arena-backed red-black tree set.
//!
//! Values are kept unique and ordered by a comparator chosen at construction.
//! Insertion, lookup and erasure are O(log n).
//!
//! # Overview
//!
//! - [`RbTree`] - the ordered set
//! - [`Cursor`] - detached position handle, consumed by [`RbTree::erase`]
//! - [`Compare`] - strict weak order; [`Less`] (default) and [`Greater`]
//! - [`red_black`] - insert/remove engines over a generational [`Arena`]
//! - [`print`] - diagram and structural dumps for debugging
//!
//! # Example
//!
//! ```
//! use rbt::RbTree;
//!
//! let mut tree = RbTree::new();
//! for v in [5, 3, 8, 1] {
//!     tree.insert(v);
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5, 8]);
//!
//! let three = tree.find(&3);
//! assert_eq!(tree.erase(three), Some(3));
//! assert!(tree.find(&3).is_end());
//! assert_eq!(tree.len(), 3);
//! ```

pub mod comparator;
pub mod cursor;
pub mod error;
pub mod node;
pub mod print;
pub mod red_black;
pub mod tree;
pub mod types;
pub mod util;

pub use comparator::{Compare, Greater, Less};
pub use cursor::{Cursor, IntoIter, Iter, TreeId};
pub use error::{CursorError, InvariantError};
pub use generational_arena::{Arena, Index};
pub use node::{Color, RbNode, Side};
pub use print::Printable;
pub use tree::{swap, RbTree};
pub use types::{Node, RbNodeLike};
