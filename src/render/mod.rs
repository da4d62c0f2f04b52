//! Doxygen XML to documentation nodes.
//!
//! Every element is dispatched by tag through a [`Registry`]. Tags that
//! carry a `kind` attribute (`memberdef`, `compounddef`, `simplesect`,
//! `parameterlist`) select their renderer again by kind.

pub mod compounds;
pub mod context;
pub mod fields;
pub mod inline;
pub mod lists;
pub mod members;
pub mod registry;
pub mod simplesect;

pub use context::RenderContext;
pub use registry::{ElementRenderer, KindDispatch, Registry, Rendered, UnhandledTag};
