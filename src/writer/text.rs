use crate::document::{AdmonitionKind, Field, Node};
use crate::writer::traits::*;

/// Outline of a whole node sequence, starting at depth zero.
pub fn to_text(nodes: &[Node]) -> String {
    nodes.outline(&WriteContext::new())
}

fn inline_piece(node: &Node) -> String {
    match node {
        Node::Text(text) => text.clone(),
        Node::Literal(text) => format!("`{}`", text),
        Node::Emphasis(children) => format!("*{}*", inline_text(children)),
        Node::Strong(children) => format!("**{}**", inline_text(children)),
        Node::Reference(reference) => reference.text.clone(),
        Node::Link(link) => format!("{} <{}>", inline_text(&link.children), link.url),
        other => other.astext(),
    }
}

// Tails are stripped when rendering, so a word following inline markup
// arrives without its separating space.
fn needs_space(before: &str, after: &str) -> bool {
    match (before.chars().last(), after.chars().next()) {
        (Some(b), Some(a)) => {
            !b.is_whitespace() && b != '(' && (a.is_alphanumeric() || a == '`' || a == '*')
        }
        _ => false,
    }
}

/// Join inline nodes into one line of text.
pub fn inline_text(nodes: &[Node]) -> String {
    let mut output = String::new();
    let mut previous_plain = true;
    for node in nodes {
        let piece = inline_piece(node);
        let plain = matches!(node, Node::Text(_));
        if !(previous_plain && plain) && needs_space(&output, &piece) {
            output.push(' ');
        }
        output.push_str(&piece);
        previous_plain = plain;
    }
    output.trim().to_string()
}

fn admonition_label(kind: &AdmonitionKind) -> &'static str {
    match kind {
        AdmonitionKind::Note => "Note",
        AdmonitionKind::Warning => "Warning",
        AdmonitionKind::SeeAlso => "See also",
        AdmonitionKind::Custom => "Admonition",
    }
}

impl Outline for [Node] {
    fn outline(&self, context: &WriteContext) -> String {
        self.iter().map(|node| node.outline(context)).collect()
    }
}

impl Outline for Field {
    fn outline(&self, context: &WriteContext) -> String {
        let indent = context.indent();
        let mut header = format!(":{}", self.name);
        if let Some(arg) = &self.arg {
            header.push(' ');
            header.push_str(arg);
        }
        header.push(':');

        match &self.body {
            body if body.is_inline() => {
                format!("{}{} {}\n", indent, header, inline_text(std::slice::from_ref(body)))
            }
            Node::Paragraph(children) => {
                format!("{}{} {}\n", indent, header, inline_text(children))
            }
            Node::Container(children) => {
                format!("{}{}\n{}", indent, header, children.outline(&context.nested()))
            }
            body => format!("{}{}\n{}", indent, header, body.outline(&context.nested())),
        }
    }
}

impl Outline for Node {
    fn outline(&self, context: &WriteContext) -> String {
        let indent = context.indent();
        match self {
            Node::Section(section) => format!(
                "{}== {} ==\n{}",
                indent,
                section.title,
                section.children.outline(&context.nested())
            ),
            Node::Paragraph(children) => format!("{}{}\n", indent, inline_text(children)),
            Node::BulletList(items) => items.outline(context),
            Node::ListItem(children) => {
                let nested = context.nested();
                let body = children.outline(&nested);
                match body.strip_prefix(&nested.indent()) {
                    Some(rest) => format!("{}- {}", indent, rest),
                    None => format!("{}-\n{}", indent, body),
                }
            }
            Node::FieldList(fields) => fields.iter().map(|field| field.outline(context)).collect(),
            Node::Admonition(admonition) => {
                let label = admonition
                    .title
                    .as_deref()
                    .unwrap_or_else(|| admonition_label(&admonition.kind));
                format!(
                    "{}[{}]\n{}",
                    indent,
                    label,
                    admonition.children.outline(&context.nested())
                )
            }
            Node::Description(description) => format!(
                "{}.. {}:{}:: {}\n{}",
                indent,
                description.domain,
                description.objtype.as_str(),
                description.signature,
                description.content.outline(&context.nested())
            ),
            Node::LiteralBlock(text) => text
                .lines()
                .map(|line| format!("{}| {}", indent, line).trim_end().to_string() + "\n")
                .collect(),
            Node::Container(children) => children.outline(context),
            inline => format!("{}{}\n", indent, inline_text(std::slice::from_ref(inline))),
        }
    }
}
