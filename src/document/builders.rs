//! Constructors for primitive output nodes.

use super::{Admonition, AdmonitionKind, Node};

pub fn text(text: impl Into<String>) -> Node {
    Node::Text(text.into())
}

pub fn paragraph(children: Vec<Node>) -> Node {
    Node::Paragraph(children)
}

pub fn bullet_list(items: Vec<Node>) -> Node {
    Node::BulletList(items)
}

pub fn list_item(children: Vec<Node>) -> Node {
    Node::ListItem(children)
}

pub fn admonition(kind: AdmonitionKind, children: Vec<Node>) -> Node {
    Node::Admonition(Admonition {
        kind,
        class: None,
        title: None,
        children,
    })
}

/// Titled admonition with a class derived from the title.
pub fn custom_admonition(title: &str, children: Vec<Node>) -> Node {
    Node::Admonition(Admonition {
        kind: AdmonitionKind::Custom,
        class: Some(format!("admonition-{}", slug::slugify(title))),
        title: Some(title.to_string()),
        children,
    })
}

/// Warning box holding a single line of text.
pub fn warning(message: impl Into<String>) -> Node {
    admonition(AdmonitionKind::Warning, vec![paragraph(vec![text(message)])])
}

/// Reduce rendered content to a single node.
///
/// One child is unwrapped; a lone paragraph holding a lone text run is
/// unwrapped down to the text run. Anything else stays in a container.
pub fn collapse(children: Vec<Node>) -> Node {
    match <[Node; 1]>::try_from(children) {
        Ok([Node::Paragraph(inlines)]) => match <[Node; 1]>::try_from(inlines) {
            Ok([run @ Node::Text(_)]) => run,
            Ok([other]) => Node::Paragraph(vec![other]),
            Err(inlines) => Node::Paragraph(inlines),
        },
        Ok([only]) => only,
        Err(children) => Node::Container(children),
    }
}
