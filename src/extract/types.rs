//! Field-type inference over declaration type expressions.

use crate::model::FieldKind;
use tree_sitter::Node;

/// One parsed field declaration, the unit persistence classification and
/// field emission work from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Declared names; empty for an embedded field.
    pub names: Vec<String>,
    pub kind: FieldKind,
    /// Raw annotation text, delimiters included.
    pub tag: Option<String>,
}

/// Infer the kind of a single type expression node.
///
/// Total and pure: every node maps to exactly one kind, unrecognized shapes
/// (pointers, maps, functions, channels, anonymous structs) come back as
/// [`FieldKind::Unknown`], never an error.
pub fn infer(node: Node, source: &str) -> FieldKind {
    match node.kind() {
        "type_identifier" => FieldKind::Scalar(node_text(node, source)),
        "qualified_type" => infer_qualified(node, source),
        "slice_type" | "array_type" => node
            .child_by_field_name("element")
            .map(|element| FieldKind::Array(Box::new(infer(element, source))))
            .unwrap_or(FieldKind::Unknown),
        _ => FieldKind::Unknown,
    }
}

/// Qualified references: the final selector decides. `UUID` is the unique
/// identifier convention, `gorm.Model` is the ORM marker, anything else is
/// conventionally a point-in-time value.
fn infer_qualified(node: Node, source: &str) -> FieldKind {
    let package = node.child_by_field_name("package").map(|n| node_text(n, source));
    let name = node.child_by_field_name("name").map(|n| node_text(n, source));
    match (package.as_deref(), name.as_deref()) {
        (_, Some("UUID")) => FieldKind::Id,
        (Some("gorm"), Some("Model")) => FieldKind::OrmMarker,
        (_, Some(_)) => FieldKind::Timestamp,
        _ => FieldKind::Unknown,
    }
}

pub(crate) fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or_default().to_string()
}
