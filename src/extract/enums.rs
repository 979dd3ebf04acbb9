//! Enumeration extraction from a service's protocol file.

use crate::errors::{Error, Result};
use crate::model::Enum;
use pest::Parser as PestParser;
use pest_derive::Parser;
use std::path::Path;

#[derive(Parser)]
#[grammar = "extract/protocol.pest"]
struct ProtocolParser;

/// Extract top-level enums from protocol source, in declaration order.
///
/// Numeric assignments, per-value options and `option`/`reserved` entries
/// are ignored, as is everything inside `message` and `service` blocks.
/// `path` is used for error context only; the content is read by the caller.
pub fn extract(path: &Path, source: &str) -> Result<Vec<Enum>> {
    let mut pairs = ProtocolParser::parse(Rule::proto, source)
        .map_err(|e| Error::parse(path, e.to_string()))?;
    let proto = pairs
        .next()
        .ok_or_else(|| Error::parse(path, "empty protocol parse"))?;

    let mut enums = Vec::new();
    for node in proto.into_inner() {
        if node.as_rule() != Rule::enum_def {
            continue;
        }
        let mut inner = node.into_inner();
        let name = inner
            .find(|pair| pair.as_rule() == Rule::ident)
            .map(|pair| pair.as_str().to_string())
            .ok_or_else(|| Error::parse(path, "enum block without a name"))?;
        let values = inner
            .filter(|pair| pair.as_rule() == Rule::enum_value)
            .filter_map(|value| {
                value
                    .into_inner()
                    .find(|pair| pair.as_rule() == Rule::ident)
                    .map(|pair| pair.as_str().to_string())
            })
            .collect();
        enums.push(Enum { name, values });
    }
    Ok(enums)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn extract_source(source: &str) -> Vec<Enum> {
        extract(Path::new("billing_v1_invoices.proto"), source).unwrap()
    }

    #[test]
    fn enum_order_and_value_order_are_preserved() {
        let source = indoc! {"
            syntax = \"proto3\";

            enum Status {
                A = 0;
                B = 1;
                C = 2;
            }

            enum Kind {
                X = 0;
                Y = 1;
            }
        "};

        assert_eq!(
            extract_source(source),
            vec![
                Enum {
                    name: "Status".into(),
                    values: vec!["A".into(), "B".into(), "C".into()],
                },
                Enum {
                    name: "Kind".into(),
                    values: vec!["X".into(), "Y".into()],
                },
            ]
        );
    }

    #[test]
    fn numeric_and_option_metadata_is_ignored() {
        let source = indoc! {"
            syntax = \"proto3\";

            enum InvoiceState {
                option allow_alias = true;
                DRAFT = 0;
                SENT = 1 [deprecated = true];
                reserved 4, 5;
                ARCHIVED = -2;
            }
        "};

        assert_eq!(
            extract_source(source),
            vec![Enum {
                name: "InvoiceState".into(),
                values: vec!["DRAFT".into(), "SENT".into(), "ARCHIVED".into()],
            }]
        );
    }

    #[test]
    fn message_and_service_blocks_are_invisible() {
        let source = indoc! {"
            syntax = \"proto3\";
            package billing.v1;

            import \"google/protobuf/timestamp.proto\";

            message Invoice {
                string id = 1;
                enum Inner {
                    NESTED = 0;
                }
            }

            service Invoices {
                rpc Get (GetRequest) returns (GetResponse);
            }

            enum InvoiceState {
                DRAFT = 0;
                SENT = 1;
            }
        "};

        let enums = extract_source(source);
        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].name, "InvoiceState");
    }

    #[test]
    fn braces_inside_strings_do_not_confuse_the_scan() {
        let source = indoc! {"
            syntax = \"proto3\";
            option java_doc = \"weird { brace; in a string\";

            enum Kind {
                X = 0;
            }
        "};

        assert_eq!(extract_source(source).len(), 1);
    }

    #[test]
    fn empty_protocol_file_has_no_enums() {
        assert!(extract_source("syntax = \"proto3\";\n").is_empty());
        assert!(extract_source("").is_empty());
    }

    #[test]
    fn malformed_enum_block_is_a_parse_error() {
        let err = extract(
            Path::new("billing_v1_invoices.proto"),
            "enum Broken { DRAFT SENT }",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("billing_v1_invoices.proto"));
    }

    #[test]
    fn values_named_like_keywords_are_kept() {
        let source = indoc! {"
            enum Kind {
                option_x = 0;
                reserved_y = 1;
            }
        "};

        assert_eq!(
            extract_source(source),
            vec![Enum {
                name: "Kind".into(),
                values: vec!["option_x".into(), "reserved_y".into()],
            }]
        );
    }
}
