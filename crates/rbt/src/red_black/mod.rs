//! Red-black rebalancing engine over an [`Arena`](generational_arena::Arena).
//!
//! Every routine takes the current root and returns the (possibly new) root,
//! so the owner only has to store what comes back.

mod insert;
mod remove;
mod verify;

pub use insert::{descend, insert, insert_fixup, Descent};
pub use remove::remove;
pub use verify::verify;
