use crate::document::{builders, Node};
use crate::error::{Error, Result};
use crate::render::context::RenderContext;
use crate::render::registry::ElementRenderer;
use crate::xml::{self, XmlNode};

/// List containers never carry text of their own in Doxygen output.
fn ensure_no_text(node: XmlNode<'_, '_>) -> Result<()> {
    match xml::stray_text(node) {
        Some(text) => Err(Error::schema(
            xml::tag(node),
            format!("unexpected text {:?}", text),
        )),
        None => Ok(()),
    }
}

pub struct ItemizedList;

impl ElementRenderer for ItemizedList {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        ensure_no_text(node)?;
        let items = cx.render_children(node)?;
        Ok(vec![builders::bullet_list(items)])
    }
}

pub struct ListItem;

impl ElementRenderer for ListItem {
    fn render(&self, node: XmlNode<'_, '_>, cx: &mut RenderContext<'_>) -> Result<Vec<Node>> {
        ensure_no_text(node)?;
        let children = cx.render_children(node)?;
        Ok(vec![builders::list_item(children)])
    }
}
