//! The host documentation domain.
//!
//! Renderers never format object descriptions, fields or references
//! themselves; they ask the domain, so generated output matches what
//! hand-written documentation in the same domain looks like.

use crate::document::{Description, Field, Node, ObjectType, Reference};

#[cfg(test)]
use mockall::automock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Parameter,
    ReturnValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Function,
    Data,
}

/// A field type declared by the domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldType {
    pub name: &'static str,
    pub label: &'static str,
    pub has_arg: bool,
}

#[cfg_attr(test, automock)]
pub trait Domain {
    fn describe(&self, objtype: ObjectType, signature: String, content: Vec<Node>) -> Node;

    fn make_field(&self, kind: FieldKind, arg: Option<String>, body: Node) -> Field;

    fn role(&self, kind: RoleKind, text: String) -> Node;
}

/// The C domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct CDomain;

impl CDomain {
    pub const NAME: &'static str = "c";

    pub const PARAMETER: FieldType = FieldType {
        name: "parameter",
        label: "Parameters",
        has_arg: true,
    };

    pub const RETURN_VALUE: FieldType = FieldType {
        name: "returnvalue",
        label: "Returns",
        has_arg: false,
    };

    pub fn field_type(kind: FieldKind) -> &'static FieldType {
        match kind {
            FieldKind::Parameter => &Self::PARAMETER,
            FieldKind::ReturnValue => &Self::RETURN_VALUE,
        }
    }

    pub fn role_name(kind: RoleKind) -> &'static str {
        match kind {
            RoleKind::Function => "func",
            RoleKind::Data => "data",
        }
    }
}

impl Domain for CDomain {
    fn describe(&self, objtype: ObjectType, signature: String, content: Vec<Node>) -> Node {
        Node::Description(Description {
            domain: Self::NAME.to_string(),
            objtype,
            signature: signature.trim().to_string(),
            content,
        })
    }

    fn make_field(&self, kind: FieldKind, arg: Option<String>, body: Node) -> Field {
        let field_type = Self::field_type(kind);
        Field {
            name: field_type.label.to_string(),
            arg: arg.filter(|_| field_type.has_arg),
            body,
        }
    }

    fn role(&self, kind: RoleKind, text: String) -> Node {
        let target = match kind {
            RoleKind::Function => text.trim_end_matches("()").to_string(),
            RoleKind::Data => text.clone(),
        };
        Node::Reference(Reference {
            domain: Self::NAME.to_string(),
            role: Self::role_name(kind).to_string(),
            target,
            text,
        })
    }
}
