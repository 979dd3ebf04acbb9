//! Persistence classification from field annotations.

use crate::extract::types::FieldDecl;
use crate::model::{FieldKind, PersistenceKind};

/// Marker looked for in raw annotation text.
const ORM_TAG_MARKER: &str = "gorm:";

/// Classify a declaration from its full field list.
///
/// `db` as soon as any field carries the ORM marker, either in its raw tag
/// text or as a marker-kinded type (named or embedded). Otherwise the
/// caller-supplied default. Absence of any annotation is not an error.
pub fn classify(fields: &[FieldDecl], default: PersistenceKind) -> PersistenceKind {
    let has_marker = fields.iter().any(|field| {
        field.kind == FieldKind::OrmMarker
            || field
                .tag
                .as_deref()
                .is_some_and(|tag| tag.contains(ORM_TAG_MARKER))
    });
    if has_marker {
        PersistenceKind::Db
    } else {
        default
    }
}
