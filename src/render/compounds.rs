//! Compounds, section groupings, and the cross-file loader.

use crate::document::{Node, ObjectType, Section};
use crate::error::{Error, Result};
use crate::render::context::RenderContext;
use crate::render::members::{check_protection, descriptions};
use crate::render::registry::ElementRenderer;
use crate::xml::{self, XmlNode};

/// Children already covered by the compound itself. `listofallmembers`
/// duplicates the `sectiondef > memberdef` entries.
const COMPOUND_SKIP: &[&str] = &[
    "compoundname",
    "includes",
    "includedby",
    "briefdescription",
    "detaileddescription",
    "location",
    "listofallmembers",
];

/// Load the document for `refid` and render its top-level elements.
///
/// A missing or malformed document is fatal.
pub fn resolve_and_render(refid: &str, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
    let source = cx.loader()?.read_refid(refid)?;
    let document = source.parse()?;
    cx.render_children(document.root_element())
}

fn required_refid<'a>(node: XmlNode<'a, '_>) -> Result<&'a str> {
    node.attribute("refid")
        .ok_or_else(|| Error::schema(xml::tag(node), "missing refid attribute"))
}

/// Index entry of a file compound.
pub struct Compound;

impl ElementRenderer for Compound {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let kind = node.attribute("kind");
        if kind != Some("file") {
            return Err(Error::unknown_kind("compound", kind));
        }
        resolve_and_render(required_refid(node)?, cx)
    }
}

/// Reference to a struct documented in its own file.
pub struct InnerClass;

impl ElementRenderer for InnerClass {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        resolve_and_render(required_refid(node)?, cx)
    }
}

/// Files are transparent: their children render in place.
pub struct FileCompound;

impl ElementRenderer for FileCompound {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        cx.render_children_except(node, COMPOUND_SKIP)
    }
}

pub struct StructCompound;

impl ElementRenderer for StructCompound {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        if let Some(prot) = node.attribute("prot") {
            if !check_protection(node, Some(prot), cx)? {
                return Ok(Vec::new());
            }
        }
        let name = xml::child_text(node, "compoundname")
            .ok_or_else(|| Error::schema("compounddef", "missing compoundname"))?;
        let title = format!("Struct {}", name);

        let content = descriptions(node, cx)?;
        let mut children = vec![cx.domain().describe(
            ObjectType::Type,
            format!("struct {}", name),
            content,
        )];
        children.extend(cx.render_children_except(node, COMPOUND_SKIP)?);

        Ok(vec![Node::Section(Section {
            id: slug::slugify(&title),
            title,
            children,
        })])
    }
}

/// A titled group of members of one kind.
pub struct SectionDef;

impl SectionDef {
    pub fn title(kind: &str) -> Option<&'static str> {
        match kind {
            "func" => Some("Functions"),
            "define" => Some("Defines"),
            "typedef" => Some("Types"),
            "public-attrib" => Some("Members"),
            _ => None,
        }
    }
}

impl ElementRenderer for SectionDef {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let kind = node.attribute("kind");
        let title = kind
            .and_then(Self::title)
            .ok_or_else(|| Error::unknown_kind("sectiondef", kind))?;
        let children = cx.render_children_except(node, &["location"])?;
        Ok(vec![Node::Section(Section {
            id: kind.unwrap_or_default().to_string(),
            title: title.to_string(),
            children,
        })])
    }
}
