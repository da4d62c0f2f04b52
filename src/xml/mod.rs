//! Access to Doxygen XML output.
//!
//! Documents are parsed with `roxmltree`; a node's leading text is
//! `Node::text()` and the text following it is `Node::tail()`.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub type XmlNode<'a, 'input> = roxmltree::Node<'a, 'input>;
pub type XmlDocument<'input> = roxmltree::Document<'input>;

const INDEX_FILE: &str = "index.xml";

/// Resolves index and per-refid documents under `<root>/xml/`.
#[derive(Debug, Clone)]
pub struct XmlLoader {
    xml_dir: PathBuf,
}

impl XmlLoader {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            xml_dir: root.as_ref().join("xml"),
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.xml_dir.join(INDEX_FILE)
    }

    pub fn refid_path(&self, refid: &str) -> Result<PathBuf> {
        let valid = !refid.is_empty()
            && !refid.contains(['/', '\\'])
            && refid != "."
            && refid != "..";
        if !valid {
            return Err(Error::InvalidReference {
                refid: refid.to_string(),
            });
        }
        Ok(self.xml_dir.join(format!("{}.xml", refid)))
    }

    pub fn read_index(&self) -> Result<XmlSource> {
        XmlSource::read(self.index_path())
    }

    pub fn read_refid(&self, refid: &str) -> Result<XmlSource> {
        XmlSource::read(self.refid_path(refid)?)
    }
}

/// The text of one XML document, kept alive while its parse is in use.
#[derive(Debug)]
pub struct XmlSource {
    pub path: PathBuf,
    pub text: String,
}

impl XmlSource {
    pub fn read(path: PathBuf) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Parsing doxygen xml");
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Self { path, text }),
            Err(source) => Err(Error::Unreadable { path, source }),
        }
    }

    pub fn parse(&self) -> Result<XmlDocument<'_>> {
        parse(&self.text).map_err(|source| Error::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

pub fn parse(text: &str) -> std::result::Result<XmlDocument<'_>, roxmltree::Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    roxmltree::Document::parse_with_options(text, options)
}

pub fn tag<'a>(node: XmlNode<'a, '_>) -> &'a str {
    node.tag_name().name()
}

pub fn is_tag(node: XmlNode<'_, '_>, name: &str) -> bool {
    node.is_element() && tag(node) == name
}

pub fn elements<'a, 'input>(
    node: XmlNode<'a, 'input>,
) -> impl Iterator<Item = XmlNode<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

pub fn child<'a, 'input>(node: XmlNode<'a, 'input>, name: &str) -> Option<XmlNode<'a, 'input>> {
    node.children().find(|child| is_tag(*child, name))
}

pub fn children_named<'a, 'input, 'n>(
    node: XmlNode<'a, 'input>,
    name: &'n str,
) -> impl Iterator<Item = XmlNode<'a, 'input>> + 'n
where
    'a: 'n,
    'input: 'n,
{
    node.children().filter(move |child| is_tag(*child, name))
}

/// All descendant text, in document order.
pub fn text_content(node: XmlNode<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Trimmed text content of the first child element called `name`.
pub fn child_text(node: XmlNode<'_, '_>, name: &str) -> Option<String> {
    child(node, name).map(|c| text_content(c).trim().to_string())
}

/// Verbatim source text of the subtree rooted at `node`.
pub fn dump(node: XmlNode<'_, '_>) -> String {
    let input = node.document().input_text();
    input
        .get(node.range())
        .map(str::to_string)
        .unwrap_or_default()
}

/// Non-blank text appearing directly inside `node`, outside child elements.
pub fn stray_text<'a>(node: XmlNode<'a, '_>) -> Option<&'a str> {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .map(str::trim)
        .find(|text| !text.is_empty())
}
