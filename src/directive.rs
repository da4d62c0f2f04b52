//! The `doxygenfile` entry operation and the host environment it runs in.

use crate::config::Config;
use crate::diagnostics::{SourceLocation, Warning};
use crate::document::Node;
use crate::domain::{CDomain, Domain};
use crate::error::{Error, Result};
use crate::render::{Registry, RenderContext};
use crate::xml::{self, XmlDocument, XmlLoader, XmlNode};
use serde::Serialize;

/// Configuration, domain and renderers shared by every invocation.
pub struct Environment {
    config: Config,
    domain: Box<dyn Domain>,
    registry: Registry,
}

impl Environment {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            domain: Box::new(CDomain),
            registry: Registry::new(),
        }
    }

    pub fn with_domain(mut self, domain: impl Domain + 'static) -> Self {
        self.domain = Box::new(domain);
        self
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn context(&self, location: SourceLocation) -> RenderContext<'_> {
        RenderContext::new(&self.registry, self.domain.as_ref(), &self.config, location)
    }
}

/// Output of one invocation.
#[derive(Debug, Serialize)]
pub struct Rendering {
    pub nodes: Vec<Node>,
    pub warnings: Vec<Warning>,
}

/// Index entries of kind `file` named exactly `filename`.
pub fn file_compounds<'a, 'input>(
    index: &'a XmlDocument<'input>,
    filename: &str,
) -> Vec<XmlNode<'a, 'input>> {
    xml::children_named(index.root_element(), "compound")
        .filter(|compound| compound.attribute("kind") == Some("file"))
        .filter(|compound| xml::child_text(*compound, "name").as_deref() == Some(filename))
        .collect()
}

/// Renders the documentation of one source file.
#[derive(Debug, Clone)]
pub struct DoxygenFile {
    pub filename: String,
    pub location: SourceLocation,
}

impl DoxygenFile {
    pub const NAME: &'static str = "doxygenfile";

    pub fn new(filename: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            filename: filename.into(),
            location,
        }
    }

    pub fn run(&self, env: &Environment) -> Result<Rendering> {
        let root = env
            .config()
            .doxygen_xml
            .as_ref()
            .ok_or(Error::MissingConfig("doxygen_xml"))?;
        let source = XmlLoader::new(root).read_index()?;
        let index = source.parse()?;

        let mut cx = env.context(self.location.clone());
        let compounds = file_compounds(&index, &self.filename);
        tracing::debug!(
            filename = %self.filename,
            matches = compounds.len(),
            "Looked up file compound"
        );
        if compounds.is_empty() && env.config().warn_unmatched {
            cx.warn(format!(
                "doxtree: no doxygen file compound named '{}'",
                self.filename
            ));
        }

        let mut nodes = Vec::new();
        for compound in compounds {
            nodes.extend(cx.render(compound)?);
        }
        Ok(Rendering {
            nodes,
            warnings: cx.into_diagnostics().into_warnings(),
        })
    }
}
