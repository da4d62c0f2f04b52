//! `simplesect` asides rendered as admonitions.

use crate::document::{builders, AdmonitionKind, Node};
use crate::error::Result;
use crate::render::context::RenderContext;
use crate::render::registry::ElementRenderer;
use crate::xml::{self, XmlNode};

pub struct Warning;

impl ElementRenderer for Warning {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let children = cx.render_children(node)?;
        Ok(vec![builders::admonition(AdmonitionKind::Warning, children)])
    }
}

pub struct Note;

impl ElementRenderer for Note {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let children = cx.render_children(node)?;
        Ok(vec![builders::admonition(AdmonitionKind::Note, children)])
    }
}

pub struct SeeAlso;

impl ElementRenderer for SeeAlso {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let children = cx.render_children(node)?;
        Ok(vec![builders::admonition(AdmonitionKind::SeeAlso, children)])
    }
}

/// Custom admonition with a fixed title, e.g. `Precondition`.
pub struct Labeled(pub &'static str);

impl ElementRenderer for Labeled {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let children = cx.render_children(node)?;
        Ok(vec![builders::custom_admonition(self.0, children)])
    }
}

/// `@par` sections, titled by their `title` child.
pub struct Paragraph;

impl ElementRenderer for Paragraph {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        let title = xml::child_text(node, "title").unwrap_or_default();
        let children = cx.render_children_except(node, &["title"])?;
        if title.is_empty() {
            return Ok(vec![builders::admonition(AdmonitionKind::Note, children)]);
        }
        Ok(vec![builders::custom_admonition(&title, children)])
    }
}
