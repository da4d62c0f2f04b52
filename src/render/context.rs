use crate::config::Config;
use crate::diagnostics::{Diagnostics, SourceLocation};
use crate::document::Node;
use crate::domain::Domain;
use crate::error::{Error, Result};
use crate::render::registry::Registry;
use crate::xml::{self, XmlLoader, XmlNode};
use roxmltree::NodeId;
use std::collections::HashSet;

/// State carried through one top-level rendering invocation.
pub struct RenderContext<'r> {
    registry: &'r Registry,
    domain: &'r dyn Domain,
    config: &'r Config,
    location: SourceLocation,
    diagnostics: Diagnostics,
    excluded: HashSet<NodeId>,
}

impl<'r> RenderContext<'r> {
    pub fn new(
        registry: &'r Registry,
        domain: &'r dyn Domain,
        config: &'r Config,
        location: SourceLocation,
    ) -> Self {
        Self {
            registry,
            domain,
            config,
            location,
            diagnostics: Diagnostics::new(),
            excluded: HashSet::new(),
        }
    }

    /// Dispatch `node` to its renderer.
    pub fn render(&mut self, node: XmlNode<'_, '_>) -> Result<Vec<Node>> {
        let registry = self.registry;
        registry.render(node, self)
    }

    /// Render every child element of `node`, concatenating the output.
    pub fn render_children(&mut self, node: XmlNode<'_, '_>) -> Result<Vec<Node>> {
        let mut output = Vec::new();
        for child in xml::elements(node) {
            output.extend(self.render(child)?);
        }
        Ok(output)
    }

    /// Like `render_children`, skipping child elements named in `skip`.
    pub fn render_children_except(
        &mut self,
        node: XmlNode<'_, '_>,
        skip: &[&str],
    ) -> Result<Vec<Node>> {
        let mut output = Vec::new();
        for child in xml::elements(node).filter(|c| !skip.contains(&xml::tag(*c))) {
            output.extend(self.render(child)?);
        }
        Ok(output)
    }

    /// Run `f` with `nodes` treated as already rendered.
    pub fn excluding<T>(
        &mut self,
        nodes: impl IntoIterator<Item = NodeId>,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let added: Vec<NodeId> = nodes
            .into_iter()
            .filter(|id| self.excluded.insert(*id))
            .collect();
        let result = f(self);
        for id in added {
            self.excluded.remove(&id);
        }
        result
    }

    pub fn is_excluded(&self, node: XmlNode<'_, '_>) -> bool {
        self.excluded.contains(&node.id())
    }

    pub fn domain(&self) -> &'r dyn Domain {
        self.domain
    }

    pub fn config(&self) -> &'r Config {
        self.config
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn loader(&self) -> Result<XmlLoader> {
        self.config
            .doxygen_xml
            .as_ref()
            .map(XmlLoader::new)
            .ok_or(Error::MissingConfig("doxygen_xml"))
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.diagnostics.warn(&self.location, message);
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}
