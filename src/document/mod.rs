//! The documentation node tree handed to the host renderer.

pub mod builders;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", content = "value", rename_all = "snake_case")]
pub enum Node {
    // block level
    Section(Section),
    Paragraph(Vec<Node>),
    BulletList(Vec<Node>),
    ListItem(Vec<Node>),
    FieldList(Vec<Field>),
    Admonition(Admonition),
    Description(Description),
    LiteralBlock(String),
    /// Scratch grouping; collapsed away when it holds a single child.
    Container(Vec<Node>),
    // inline
    Text(String),
    Literal(String),
    Emphasis(Vec<Node>),
    Strong(Vec<Node>),
    Link(Link),
    Reference(Reference),
}

impl Node {
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Node::Text(_)
                | Node::Literal(_)
                | Node::Emphasis(_)
                | Node::Strong(_)
                | Node::Link(_)
                | Node::Reference(_)
        )
    }

    /// Concatenated plain text of this node and its descendants.
    pub fn astext(&self) -> String {
        match self {
            Node::Text(text) | Node::Literal(text) | Node::LiteralBlock(text) => text.clone(),
            Node::Reference(reference) => reference.text.clone(),
            Node::Link(link) => join_text(&link.children),
            Node::Section(section) => join_text(&section.children),
            Node::Admonition(admonition) => join_text(&admonition.children),
            Node::Description(description) => join_text(&description.content),
            Node::FieldList(fields) => fields
                .iter()
                .map(|field| field.body.astext())
                .collect::<Vec<_>>()
                .join(" "),
            Node::Paragraph(children)
            | Node::BulletList(children)
            | Node::ListItem(children)
            | Node::Container(children)
            | Node::Emphasis(children)
            | Node::Strong(children) => join_text(children),
        }
    }
}

fn join_text(nodes: &[Node]) -> String {
    nodes.iter().map(Node::astext).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmonitionKind {
    Note,
    Warning,
    SeeAlso,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Admonition {
    pub kind: AdmonitionKind,
    /// Style class, e.g. `admonition-precondition`.
    pub class: Option<String>,
    pub title: Option<String>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Function,
    Macro,
    Type,
    Member,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Function => "function",
            ObjectType::Macro => "macro",
            ObjectType::Type => "type",
            ObjectType::Member => "member",
        }
    }
}

/// A documented object as laid out by a documentation domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub domain: String,
    pub objtype: ObjectType,
    pub signature: String,
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Label of the field type, e.g. `Parameters`.
    pub name: String,
    pub arg: Option<String>,
    pub body: Node,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub url: String,
    pub children: Vec<Node>,
}

/// An unresolved cross-reference, resolved by the host's domain role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub domain: String,
    pub role: String,
    pub target: String,
    pub text: String,
}
