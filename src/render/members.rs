//! `memberdef` renderers: functions, defines, typedefs and struct members.

use crate::config::VisibilityPolicy;
use crate::document::{Node, ObjectType};
use crate::error::{Error, Result};
use crate::render::context::RenderContext;
use crate::render::fields::FieldNodes;
use crate::render::registry::ElementRenderer;
use crate::xml::{self, XmlNode};

/// Whether a node with protection `prot` should be rendered, per the
/// configured policy.
pub(crate) fn check_protection(
    node: XmlNode<'_, '_>,
    prot: Option<&str>,
    cx: &RenderContext<'_>,
) -> Result<bool> {
    if prot == Some("public") {
        return Ok(true);
    }
    let tag = xml::tag(node);
    let kind = node.attribute("kind").unwrap_or("None");
    let prot = prot.unwrap_or("None");
    match cx.config().non_public {
        VisibilityPolicy::Reject => Err(Error::NonPublic {
            tag: tag.to_string(),
            kind: kind.to_string(),
            prot: prot.to_string(),
        }),
        VisibilityPolicy::Skip => {
            tracing::debug!(tag, kind, prot, "Skipping non-public");
            Ok(false)
        }
    }
}

fn required_text(node: XmlNode<'_, '_>, name: &str) -> Result<String> {
    xml::child_text(node, name)
        .ok_or_else(|| Error::schema(xml::tag(node), format!("missing {}", name)))
}

/// Rendered `briefdescription` followed by rendered `detaileddescription`.
pub(crate) fn descriptions(node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
    let mut content = Vec::new();
    for name in ["briefdescription", "detaileddescription"] {
        if let Some(description) = xml::child(node, name) {
            content.extend(cx.render_children(description)?);
        }
    }
    Ok(content)
}

fn describe(
    cx: &RenderContext<'_>,
    objtype: ObjectType,
    signature: String,
    content: Vec<Node>,
) -> Vec<Node> {
    vec![cx.domain().describe(objtype, signature, content)]
}

pub struct Function;

impl ElementRenderer for Function {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        if !check_protection(node, node.attribute("prot"), cx)? {
            return Ok(Vec::new());
        }
        let usage = format!(
            "{} {}{}",
            xml::child_text(node, "type").unwrap_or_default(),
            required_text(node, "name")?,
            xml::child_text(node, "argsstring").unwrap_or_default(),
        );

        let mut content = match xml::child(node, "briefdescription") {
            Some(brief) => cx.render_children(brief)?,
            None => Vec::new(),
        };
        let mut fields = Vec::new();
        if let Some(detailed) = xml::child(node, "detaileddescription") {
            // fields first, so the paragraphs below never render them again
            let found = FieldNodes::find(detailed);
            fields = found.render(cx)?;
            let paragraphs = cx.excluding(found.ids(), |cx| cx.render_children(detailed))?;
            content.extend(paragraphs);
        }
        if !fields.is_empty() {
            content.push(Node::FieldList(fields));
        }
        Ok(describe(cx, ObjectType::Function, usage, content))
    }
}

/// Macros render by name only; arguments and body are not shown.
pub struct Define;

impl ElementRenderer for Define {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        if !check_protection(node, node.attribute("prot"), cx)? {
            return Ok(Vec::new());
        }
        let usage = required_text(node, "name")?;
        let content = descriptions(node, cx)?;
        Ok(describe(cx, ObjectType::Macro, usage, content))
    }
}

pub struct Typedef;

impl ElementRenderer for Typedef {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        if !check_protection(node, node.attribute("prot"), cx)? {
            return Ok(Vec::new());
        }
        let usage = required_text(node, "name")?;
        let content = descriptions(node, cx)?;
        Ok(describe(cx, ObjectType::Type, usage, content))
    }
}

/// Struct members. Free variables are not supported.
pub struct Variable;

impl ElementRenderer for Variable {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        if !check_protection(node, node.attribute("prot"), cx)? {
            return Ok(Vec::new());
        }
        let usage = format!(
            "{} {}",
            xml::child_text(node, "type").unwrap_or_default(),
            required_text(node, "name")?,
        );
        let content = descriptions(node, cx)?;
        Ok(describe(cx, ObjectType::Member, usage, content))
    }
}
