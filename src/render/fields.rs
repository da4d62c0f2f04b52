//! Parameter and return-value descriptions as field list entries.

use crate::document::{builders, Field, Node};
use crate::domain::FieldKind;
use crate::error::{Error, Result};
use crate::render::context::RenderContext;
use crate::render::registry::ElementRenderer;
use crate::xml::{self, XmlNode};

fn is_parameter_list(node: XmlNode<'_, '_>) -> bool {
    xml::is_tag(node, "parameterlist") && node.attribute("kind") == Some("param")
}

fn is_return_section(node: XmlNode<'_, '_>) -> bool {
    xml::is_tag(node, "simplesect") && node.attribute("kind") == Some("return")
}

/// Parameter lists and return sections found anywhere below `detailed`.
#[derive(Debug, Default)]
pub struct FieldNodes<'a, 'input> {
    pub parameters: Vec<XmlNode<'a, 'input>>,
    pub returns: Vec<XmlNode<'a, 'input>>,
}

impl<'a, 'input> FieldNodes<'a, 'input> {
    /// Lists nested inside an already found node stay part of its body.
    pub fn find(detailed: XmlNode<'a, 'input>) -> Self {
        let mut found = Self::default();
        for node in detailed.descendants() {
            if found.contains_ancestor_of(node) {
                continue;
            }
            if is_parameter_list(node) {
                found.parameters.push(node);
            } else if is_return_section(node) {
                found.returns.push(node);
            }
        }
        found
    }

    fn contains_ancestor_of(&self, node: XmlNode<'_, '_>) -> bool {
        node.ancestors()
            .skip(1)
            .any(|ancestor| self.parameters.contains(&ancestor) || self.returns.contains(&ancestor))
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.returns.is_empty()
    }

    pub fn ids(&self) -> Vec<roxmltree::NodeId> {
        self.parameters
            .iter()
            .chain(&self.returns)
            .map(|node| node.id())
            .collect()
    }

    /// Parameters in document order, then the return value.
    pub fn render(&self, cx: &mut RenderContext<'_>) -> Result<Vec<Field>> {
        let mut fields = Vec::new();
        for list in &self.parameters {
            fields.extend(parameter_fields(*list, cx)?);
        }
        for section in &self.returns {
            fields.push(return_field(*section, cx)?);
        }
        Ok(fields)
    }
}

fn parameter_name(item: XmlNode<'_, '_>) -> Result<String> {
    let names: Vec<XmlNode<'_, '_>> = xml::children_named(item, "parameternamelist")
        .flat_map(|list| xml::children_named(list, "parametername").collect::<Vec<_>>())
        .collect();
    match names.as_slice() {
        [name] => Ok(xml::text_content(*name).trim().to_string()),
        [] => Err(Error::schema("parameteritem", "missing parametername")),
        _ => Err(Error::schema(
            "parameteritem",
            format!(
                "{} parameternames, only one is supported",
                names.len()
            ),
        )),
    }
}

/// One field per `parameteritem` of a `parameterlist[kind=param]`.
pub fn parameter_fields(list: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Field>> {
    let mut fields = Vec::new();
    for item in xml::children_named(list, "parameteritem") {
        let name = parameter_name(item)?;
        let content = match xml::child(item, "parameterdescription") {
            Some(description) => cx.render_children(description)?,
            None => Vec::new(),
        };
        let body = builders::collapse(content);
        fields.push(cx.domain().make_field(FieldKind::Parameter, Some(name), body));
    }
    Ok(fields)
}

/// The unnamed field of a `simplesect[kind=return]`.
pub fn return_field(section: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Field> {
    let body = builders::collapse(cx.render_children(section)?);
    Ok(cx.domain().make_field(FieldKind::ReturnValue, None, body))
}

/// `parameterlist[kind=param]` outside of a function description.
pub struct ParameterList;

impl ElementRenderer for ParameterList {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        Ok(vec![Node::FieldList(parameter_fields(node, cx)?)])
    }
}

/// `simplesect[kind=return]` outside of a function description.
pub struct ReturnList;

impl ElementRenderer for ReturnList {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        Ok(vec![Node::FieldList(vec![return_field(node, cx)?])])
    }
}
