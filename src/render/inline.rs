use crate::document::{builders, Link, Node};
use crate::domain::RoleKind;
use crate::error::{Error, Result};
use crate::render::context::RenderContext;
use crate::render::registry::ElementRenderer;
use crate::xml::{self, XmlNode};

/// Leading text, then each child's output followed by its stripped tail.
///
/// The leading text is only stripped when `node` has no child elements,
/// since otherwise its edges sit against inline markup.
fn gather(node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
    let mut output = Vec::new();
    let has_elements = xml::elements(node).next().is_some();
    if let Some(text) = node.text() {
        if !text.trim().is_empty() {
            let text = if has_elements { text } else { text.trim() };
            output.push(builders::text(text));
        }
    }
    for child in xml::elements(node) {
        output.extend(cx.render(child)?);
        if let Some(tail) = child.tail().map(str::trim) {
            if !tail.is_empty() {
                output.push(builders::text(tail));
            }
        }
    }
    Ok(output)
}

/// Close the paragraph gathered so far.
///
/// Only the paragraph's outer edges are trimmed; interior runs keep
/// their whitespace.
fn flush(blocks: &mut Vec<Node>, inlines: &mut Vec<Node>) {
    if let Some(Node::Text(first)) = inlines.first_mut() {
        *first = first.trim_start().to_string();
    }
    if let Some(Node::Text(last)) = inlines.last_mut() {
        *last = last.trim_end().to_string();
    }
    inlines.retain(|node| !matches!(node, Node::Text(text) if text.is_empty()));
    if !inlines.is_empty() {
        blocks.push(builders::paragraph(std::mem::take(inlines)));
    }
}

/// `para`. Block-level output of a child splits the paragraph around it.
pub struct Para;

impl ElementRenderer for Para {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let mut blocks = Vec::new();
        let mut inlines = Vec::new();
        for rendered in gather(node, cx)? {
            if rendered.is_inline() {
                inlines.push(rendered);
            } else {
                flush(&mut blocks, &mut inlines);
                blocks.push(rendered);
            }
        }
        flush(&mut blocks, &mut inlines);
        Ok(blocks)
    }
}

/// `ref`, resolved through the domain's reference roles.
pub struct Ref;

impl ElementRenderer for Ref {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let kind = match node.attribute("kindref") {
            Some("member") => RoleKind::Function,
            Some("compound") => RoleKind::Data,
            other => return Err(Error::unknown_kind("ref", other)),
        };
        let text = xml::text_content(node).trim().to_string();
        Ok(vec![cx.domain().role(kind, text)])
    }
}

pub struct ComputerOutput;

impl ElementRenderer for ComputerOutput {
    fn render(&self, node: XmlNode<'_, '_>, _cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        Ok(vec![Node::Literal(xml::text_content(node))])
    }
}

pub struct Emphasis;

impl ElementRenderer for Emphasis {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        Ok(vec![Node::Emphasis(gather(node, cx)?)])
    }
}

pub struct Bold;

impl ElementRenderer for Bold {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        Ok(vec![Node::Strong(gather(node, cx)?)])
    }
}

pub struct Ulink;

impl ElementRenderer for Ulink {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let url = node
            .attribute("url")
            .ok_or_else(|| Error::schema("ulink", "missing url attribute"))?;
        let mut children = gather(node, cx)?;
        if children.is_empty() {
            children.push(builders::text(url));
        }
        Ok(vec![Node::Link(Link {
            url: url.to_string(),
            children,
        })])
    }
}
