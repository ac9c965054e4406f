//! Human-readable renderings of a tree. Debugging aids, not a stable format.

mod diagram;
mod print_binary;
mod types;

pub use diagram::{render_diagram, PADDING_PER_DEPTH};
pub use print_binary::print_binary;
pub use types::{PrintChild, Printable};
