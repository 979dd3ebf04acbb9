//! Data model for the extracted project structure.
//!
//! The model is a plain tree: a [`Project`] owns [`Module`]s, a module owns
//! [`Service`]s, and a service owns [`Enum`]s and [`Entity`]s. Wire names
//! (JSON and the YAML descriptor) are camelCase, matching the generator
//! toolchain this model feeds.

pub mod dump;

use serde::{Deserialize, Serialize};

/// A whole project as described by its descriptor file or assembled by the
/// extractor.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A versioned module, resolved from a `<name>.<version>` directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,
    pub api_version: String,
    #[serde(default)]
    pub services: Vec<Service>,
}

impl Module {
    /// The directory name the module lives under, e.g. `billing.v1`.
    pub fn dir_name(&self) -> String {
        format!("{}.{}", self.name, self.api_version)
    }
}

/// A service directory inside a module.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub name: String,
    #[serde(default)]
    pub enums: Vec<Enum>,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

/// A domain entity extracted from a service's declaration file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub name: String,
    pub persistence: PersistenceKind,
    #[serde(default)]
    pub fields: Vec<Field>,
}

/// A single entity field.
///
/// `is_nullable` and `is_searchable` are not inferred at extraction time and
/// are always `false` in extractor output; they exist so descriptors written
/// by hand can carry them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    /// Inferred kind, serialized under the `type` key as a flat type name.
    /// Arrays contribute their element's name; `isArray` carries the shape.
    #[serde(rename = "type", with = "field_kind_wire")]
    pub kind: FieldKind,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_searchable: bool,
}

impl Field {
    /// Create a field from its inferred kind. `is_array` follows the kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        let is_array = matches!(kind, FieldKind::Array(_));
        Self {
            name: name.into(),
            kind,
            is_array,
            is_nullable: false,
            is_searchable: false,
        }
    }
}

/// The closed set of inferred field kinds.
///
/// `OrmMarker` only ever exists between inference and persistence
/// classification; it never appears in an emitted [`Field`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain named type, carried verbatim (`string`, `int64`, ...).
    Scalar(String),
    /// A sequence of the element kind.
    Array(Box<FieldKind>),
    /// A unique-identifier type.
    Id,
    /// A qualified non-identifier type, conventionally a time value.
    Timestamp,
    /// The ORM annotation marker consumed by persistence classification.
    OrmMarker,
    /// Anything the inferencer has no rule for.
    Unknown,
}

impl FieldKind {
    /// Flat wire name. Arrays resolve to their element's name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Scalar(name) => name,
            Self::Array(element) => element.type_name(),
            Self::Id => "id",
            Self::Timestamp => "timestamp",
            Self::OrmMarker => "marker",
            Self::Unknown => "unknown",
        }
    }

    fn from_type_name(name: &str) -> Self {
        match name {
            "id" => Self::Id,
            "timestamp" => Self::Timestamp,
            "marker" => Self::OrmMarker,
            "unknown" => Self::Unknown,
            other => Self::Scalar(other.to_string()),
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

mod field_kind_wire {
    use super::FieldKind;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(kind: &FieldKind, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(kind.type_name())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FieldKind, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(FieldKind::from_type_name(&name))
    }
}

/// Where an entity is persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PersistenceKind {
    Db,
    Memory,
    None,
}

impl std::fmt::Display for PersistenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Db => "db",
            Self::Memory => "memory",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}

/// An enumeration extracted from a service's protocol file.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}
