//! Entity extraction from a service's declaration file.
//!
//! Declarations are processed as singleton-or-paired groups. A struct whose
//! name ends with the companion suffix (case-folded) is a storage-shape
//! companion: immediately after a domain struct it pairs with it, lending
//! the entity its fields and persistence classification while the domain
//! struct lends its name. A domain struct on its own is emitted with its own
//! fields and the default persistence. A companion with no preceding domain
//! struct is emitted standalone under its suffix-stripped name; this keeps
//! trees that only declare storage shapes extractable.

use crate::errors::{Error, Result};
use crate::extract::persistence;
use crate::extract::types::{self, node_text, FieldDecl};
use crate::model::{Entity, Field, FieldKind, PersistenceKind};
use std::path::Path;
use tree_sitter::{Node, Parser};

/// Case-folded suffix marking a storage-shape companion declaration.
const COMPANION_SUFFIX: &str = "data";

/// Extract entities from declaration source, in declaration order.
///
/// `path` is used for error context only; the content is read by the caller.
pub fn extract(
    path: &Path,
    source: &str,
    default_persistence: PersistenceKind,
) -> Result<Vec<Entity>> {
    let structs = parse_structs(path, source)?;
    Ok(pair_structs(&structs, default_persistence))
}

/// A top-level struct declaration in file order.
#[derive(Debug)]
struct StructDecl {
    name: String,
    fields: Vec<FieldDecl>,
}

fn parse_structs(path: &Path, source: &str) -> Result<Vec<StructDecl>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_go::LANGUAGE.into())
        .map_err(|e| Error::parse(path, format!("failed to load declaration grammar: {e}")))?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::parse(path, "parser produced no syntax tree"))?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(Error::parse(path, "invalid declaration syntax"));
    }

    let mut structs = Vec::new();
    for decl in root.children(&mut root.walk()) {
        if decl.kind() != "type_declaration" {
            continue;
        }
        // Grouped `type (...)` blocks carry several specs; singles carry one.
        for spec in decl.children(&mut decl.walk()) {
            if spec.kind() != "type_spec" {
                continue;
            }
            let Some(name) = spec.child_by_field_name("name") else {
                continue;
            };
            let Some(type_node) = spec.child_by_field_name("type") else {
                continue;
            };
            if type_node.kind() != "struct_type" {
                continue;
            }
            structs.push(StructDecl {
                name: node_text(name, source),
                fields: struct_fields(type_node, source),
            });
        }
    }
    Ok(structs)
}

fn struct_fields(struct_node: Node, source: &str) -> Vec<FieldDecl> {
    let mut fields = Vec::new();
    let Some(list) = struct_node
        .children(&mut struct_node.walk())
        .find(|child| child.kind() == "field_declaration_list")
    else {
        return fields;
    };
    for decl in list.children(&mut list.walk()) {
        if decl.kind() != "field_declaration" {
            continue;
        }
        let names = decl
            .children_by_field_name("name", &mut decl.walk())
            .map(|name| node_text(name, source))
            .collect();
        let kind = decl
            .child_by_field_name("type")
            .map(|type_node| types::infer(type_node, source))
            .unwrap_or(FieldKind::Unknown);
        let tag = decl
            .child_by_field_name("tag")
            .map(|tag| node_text(tag, source));
        fields.push(FieldDecl { names, kind, tag });
    }
    fields
}

fn pair_structs(structs: &[StructDecl], default_persistence: PersistenceKind) -> Vec<Entity> {
    let mut entities = Vec::new();
    let mut idx = 0;
    while idx < structs.len() {
        let current = &structs[idx];
        match companion_base(&current.name) {
            // Bare companion: nothing precedes it to pair with, so it stands
            // in for the domain declaration under its stripped name.
            Some(base) => {
                entities.push(build_entity(base, &current.fields, default_persistence));
                idx += 1;
            }
            None => match structs.get(idx + 1) {
                Some(next) if companion_base(&next.name).is_some() => {
                    entities.push(build_entity(
                        current.name.clone(),
                        &next.fields,
                        default_persistence,
                    ));
                    idx += 2;
                }
                _ => {
                    entities.push(build_entity(
                        current.name.clone(),
                        &current.fields,
                        default_persistence,
                    ));
                    idx += 1;
                }
            },
        }
    }
    entities
}

/// If `name` is a storage-shape companion, return it with the suffix
/// stripped.
fn companion_base(name: &str) -> Option<String> {
    let split = name.len().checked_sub(COMPANION_SUFFIX.len())?;
    let (base, suffix) = name.split_at_checked(split)?;
    suffix
        .eq_ignore_ascii_case(COMPANION_SUFFIX)
        .then(|| base.to_string())
}

fn build_entity(
    name: impl Into<String>,
    fields: &[FieldDecl],
    default_persistence: PersistenceKind,
) -> Entity {
    Entity {
        name: name.into(),
        persistence: persistence::classify(fields, default_persistence),
        fields: emit_fields(fields),
    }
}

/// The visible field list: named, non-marker declarations only. A
/// declaration listing several names contributes one field under its last
/// name.
fn emit_fields(fields: &[FieldDecl]) -> Vec<Field> {
    fields
        .iter()
        .filter(|decl| decl.kind != FieldKind::OrmMarker)
        .filter_map(|decl| {
            decl.names
                .last()
                .map(|name| Field::new(name.clone(), decl.kind.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn extract_source(source: &str) -> Vec<Entity> {
        extract(Path::new("models/models.go"), source, PersistenceKind::Memory).unwrap()
    }

    #[test]
    fn paired_companion_lends_fields_and_persistence() {
        let source = indoc! {r#"
            package models

            import (
                "github.com/google/uuid"
                "gorm.io/gorm"
            )

            type Invoice struct {
                ID     uuid.UUID
                Amount string
            }

            type InvoiceData struct {
                gorm.Model
                ID     uuid.UUID `gorm:"primaryKey"`
                Amount string
                Tags   []string
            }
        "#};

        let entities = extract_source(source);
        assert_eq!(
            entities,
            vec![Entity {
                name: "Invoice".into(),
                persistence: PersistenceKind::Db,
                fields: vec![
                    Field::new("ID", FieldKind::Id),
                    Field::new("Amount", FieldKind::Scalar("string".into())),
                    Field::new(
                        "Tags",
                        FieldKind::Array(Box::new(FieldKind::Scalar("string".into())))
                    ),
                ],
            }]
        );
    }

    #[test]
    fn unpaired_domain_struct_keeps_its_own_fields() {
        let source = indoc! {"
            package models

            type Receipt struct {
                Number string
            }
        "};

        let entities = extract_source(source);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Receipt");
        assert_eq!(entities[0].persistence, PersistenceKind::Memory);
        assert_eq!(
            entities[0].fields,
            vec![Field::new("Number", FieldKind::Scalar("string".into()))]
        );
    }

    #[test]
    fn bare_companion_is_emitted_standalone_with_suffix_stripped() {
        let source = indoc! {r#"
            package models

            type ReceiptData struct {
                Number string `gorm:"index"`
            }
        "#};

        let entities = extract_source(source);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Receipt");
        assert_eq!(entities[0].persistence, PersistenceKind::Db);
    }

    #[test]
    fn companion_suffix_is_case_folded() {
        let source = indoc! {"
            package models

            type Receiptdata struct {
                Number string
            }
        "};

        let entities = extract_source(source);
        assert_eq!(entities[0].name, "Receipt");
    }

    #[test]
    fn two_companions_in_a_row_are_both_standalone() {
        let source = indoc! {"
            package models

            type InvoiceData struct {
                Amount string
            }

            type PaymentData struct {
                Total string
            }
        "};

        let entities = extract_source(source);
        let names: Vec<_> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Invoice", "Payment"]);
    }

    #[test]
    fn grouped_type_blocks_contribute_each_spec_in_order() {
        let source = indoc! {"
            package models

            type (
                Invoice struct {
                    Amount string
                }
                InvoiceData struct {
                    Total string
                }
            )
        "};

        let entities = extract_source(source);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Invoice");
        assert_eq!(
            entities[0].fields,
            vec![Field::new("Total", FieldKind::Scalar("string".into()))]
        );
    }

    #[test]
    fn non_struct_declarations_are_invisible_to_adjacency() {
        let source = indoc! {"
            package models

            type Invoice struct {
                Amount string
            }

            type Currency string

            type InvoiceData struct {
                Total string
            }
        "};

        // The alias sits between the two structs in the file but the struct
        // sequence still pairs Invoice with InvoiceData.
        let entities = extract_source(source);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].name, "Invoice");
    }

    #[test]
    fn last_name_wins_for_grouped_field_names() {
        let source = indoc! {"
            package models

            type Pair struct {
                A, B string
            }
        "};

        let entities = extract_source(source);
        assert_eq!(
            entities[0].fields,
            vec![Field::new("B", FieldKind::Scalar("string".into()))]
        );
    }

    #[test]
    fn marker_fields_are_consumed_not_emitted() {
        let source = indoc! {"
            package models

            import \"gorm.io/gorm\"

            type AuditData struct {
                gorm.Model
                Reason string
            }
        "};

        let entities = extract_source(source);
        assert_eq!(entities[0].persistence, PersistenceKind::Db);
        assert_eq!(
            entities[0].fields,
            vec![Field::new("Reason", FieldKind::Scalar("string".into()))]
        );
    }

    #[test]
    fn embedded_non_marker_fields_are_skipped() {
        let source = indoc! {"
            package models

            import \"time\"

            type Stamp struct {
                time.Time
                Label string
            }
        "};

        let entities = extract_source(source);
        assert_eq!(
            entities[0].fields,
            vec![Field::new("Label", FieldKind::Scalar("string".into()))]
        );
    }

    #[test]
    fn field_order_is_preserved() {
        let source = indoc! {"
            package models

            type Wide struct {
                C string
                A string
                B string
            }
        "};

        let entities = extract_source(source);
        let names: Vec<_> = entities[0].fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn invalid_syntax_is_a_parse_error() {
        let err = extract(
            Path::new("models/models.go"),
            "package models\n\ntype Broken struct {",
            PersistenceKind::Memory,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("models/models.go"));
    }

    #[test]
    fn empty_file_has_no_entities() {
        assert!(extract_source("package models\n").is_empty());
    }
}
