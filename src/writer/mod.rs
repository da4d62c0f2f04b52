//! Plain-text outline of a node tree, for inspecting output on a terminal.

pub mod text;
pub mod traits;

pub use text::{inline_text, to_text};
pub use traits::*;
