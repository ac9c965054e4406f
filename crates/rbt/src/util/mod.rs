//! Arena walks shared by the tree, its cursors and the verifier.

mod first;
mod next;
mod size;

pub use first::{first, last};
pub use next::{next, prev};
pub use size::{depth, size, subtree_post_order};
