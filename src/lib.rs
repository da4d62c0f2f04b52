//! # doxtree
//!
//! Turns Doxygen XML describing C sources into a tree of documentation
//! nodes (sections, object descriptions, field lists, admonitions) for a
//! host documentation renderer.
//!
//! ```no_run
//! use doxtree::{Config, DoxygenFile, Environment, SourceLocation};
//!
//! let env = Environment::new(Config::default().with_doxygen_xml("build/doxygen"));
//! let rendering = DoxygenFile::new("sum.h", SourceLocation::new("index.rst", 3)).run(&env)?;
//! println!("{}", doxtree::writer::to_text(&rendering.nodes));
//! # Ok::<(), doxtree::Error>(())
//! ```

pub mod config;
pub mod diagnostics;
pub mod directive;
pub mod document;
pub mod domain;
pub mod error;
pub mod render;
pub mod writer;
pub mod xml;

#[cfg(test)]
mod tests;

pub use config::{Config, VisibilityPolicy};
pub use diagnostics::{Diagnostics, SourceLocation, Warning};
pub use directive::{DoxygenFile, Environment, Rendering};
pub use document::Node;
pub use domain::{CDomain, Domain};
pub use error::{Error, Result};
pub use render::{Registry, RenderContext};
