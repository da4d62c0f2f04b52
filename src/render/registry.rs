use crate::document::{builders, Node};
use crate::error::{Error, Result};
use crate::render::context::RenderContext;
use crate::render::{compounds, fields, inline, lists, members, simplesect};
use crate::xml::{self, XmlNode};
use std::collections::HashMap;

/// Renders one kind of Doxygen element into output nodes.
pub trait ElementRenderer {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>>;
}

/// Outcome of dispatching a node by tag.
#[derive(Debug)]
pub enum Rendered {
    Nodes(Vec<Node>),
    Unhandled(UnhandledTag),
}

/// A tag nobody registered a renderer for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnhandledTag {
    pub tag: String,
    pub dump: String,
}

impl UnhandledTag {
    pub fn message(&self) -> String {
        format!("doxtree: No renderer found for doxygen tag '{}'", self.tag)
    }

    /// Inline warning box standing in for the unrendered subtree.
    pub fn into_node(self) -> Node {
        let mut node = builders::warning(self.message());
        if let Node::Admonition(admonition) = &mut node {
            if !self.dump.is_empty() {
                admonition.children.push(Node::LiteralBlock(self.dump));
            }
        }
        node
    }
}

/// Maps tag names to renderers.
pub struct Registry {
    renderers: HashMap<&'static str, Box<dyn ElementRenderer>>,
}

impl Registry {
    /// A registry with no renderers at all.
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// The standard renderers for C-oriented Doxygen output.
    pub fn new() -> Self {
        Self::empty()
            .register("para", inline::Para)
            .register("ref", inline::Ref)
            .register("computeroutput", inline::ComputerOutput)
            .register("emphasis", inline::Emphasis)
            .register("bold", inline::Bold)
            .register("ulink", inline::Ulink)
            .register("itemizedlist", lists::ItemizedList)
            .register("listitem", lists::ListItem)
            .register(
                "simplesect",
                KindDispatch::new("simplesect")
                    .with("warning", simplesect::Warning)
                    .with("note", simplesect::Note)
                    .with("pre", simplesect::Labeled("Precondition"))
                    .with("post", simplesect::Labeled("Postcondition"))
                    .with("see", simplesect::SeeAlso)
                    .with("par", simplesect::Paragraph)
                    .with("return", fields::ReturnList),
            )
            .register(
                "parameterlist",
                KindDispatch::new("parameterlist").with("param", fields::ParameterList),
            )
            .register(
                "memberdef",
                KindDispatch::new("memberdef")
                    .with("function", members::Function)
                    .with("define", members::Define)
                    .with("typedef", members::Typedef)
                    .with("variable", members::Variable),
            )
            .register(
                "compounddef",
                KindDispatch::new("compounddef")
                    .with("file", compounds::FileCompound)
                    .with("struct", compounds::StructCompound),
            )
            .register("sectiondef", compounds::SectionDef)
            .register("compound", compounds::Compound)
            .register("innerclass", compounds::InnerClass)
    }

    /// Add or replace the renderer for `tag`.
    pub fn register(mut self, tag: &'static str, renderer: impl ElementRenderer + 'static) -> Self {
        self.renderers.insert(tag, Box::new(renderer));
        self
    }

    pub fn handles(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    pub fn dispatch(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Rendered> {
        let tag = xml::tag(node);
        tracing::debug!(tag, "Rendering");
        if cx.is_excluded(node) {
            tracing::trace!(tag, "Already rendered, skipping");
            return Ok(Rendered::Nodes(Vec::new()));
        }
        match self.renderers.get(tag) {
            Some(renderer) => renderer.render(node, cx).map(Rendered::Nodes),
            None => Ok(Rendered::Unhandled(UnhandledTag {
                tag: tag.to_string(),
                dump: xml::dump(node),
            })),
        }
    }

    /// Dispatch `node`, turning an unhandled tag into a diagnostic node
    /// plus a build warning.
    pub fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        match self.dispatch(node, cx)? {
            Rendered::Nodes(nodes) => Ok(nodes),
            Rendered::Unhandled(unhandled) => {
                cx.warn(unhandled.message());
                Ok(vec![unhandled.into_node()])
            }
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Selects a renderer by the `kind` attribute.
///
/// A miss is fatal: the tag is known, so an unknown kind means the
/// schema coverage is incomplete.
pub struct KindDispatch {
    tag: &'static str,
    kinds: HashMap<&'static str, Box<dyn ElementRenderer>>,
}

impl KindDispatch {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            kinds: HashMap::new(),
        }
    }

    pub fn with(mut self, kind: &'static str, renderer: impl ElementRenderer + 'static) -> Self {
        self.kinds.insert(kind, Box::new(renderer));
        self
    }
}

impl ElementRenderer for KindDispatch {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let kind = node.attribute("kind");
        match kind.and_then(|kind| self.kinds.get(kind)) {
            Some(renderer) => renderer.render(node, cx),
            None => Err(Error::unknown_kind(self.tag, kind)),
        }
    }
}
