//! Human-readable dump of the extracted model.
//!
//! Produces the indented label/value listing the `extract --format text`
//! command prints. Labels and their order follow the model declarations;
//! nesting is two spaces per level.

use super::{Entity, Enum, Field, Module, Service};

/// Render a list of modules, one after another.
pub fn modules(modules: &[Module]) -> String {
    let mut out = String::new();
    for module in modules {
        write_module(&mut out, module, 0);
    }
    out
}

fn write_module(out: &mut String, module: &Module, indent: usize) {
    line(out, indent, "ApiVersion", &module.api_version);
    line(out, indent, "Name", &module.name);
    header(out, indent, "Services");
    for service in &module.services {
        write_service(out, service, indent + 1);
    }
}

fn write_service(out: &mut String, service: &Service, indent: usize) {
    line(out, indent, "Name", &service.name);
    header(out, indent, "Enums");
    for an_enum in &service.enums {
        write_enum(out, an_enum, indent + 1);
    }
    header(out, indent, "Entities");
    for entity in &service.entities {
        write_entity(out, entity, indent + 1);
    }
}

fn write_enum(out: &mut String, an_enum: &Enum, indent: usize) {
    line(out, indent, "Name", &an_enum.name);
    header(out, indent, "Values");
    for value in &an_enum.values {
        push_indent(out, indent + 1);
        out.push_str(value);
        out.push('\n');
    }
}

fn write_entity(out: &mut String, entity: &Entity, indent: usize) {
    line(out, indent, "Name", &entity.name);
    line(out, indent, "Persistence", &entity.persistence.to_string());
    header(out, indent, "Fields");
    for field in &entity.fields {
        write_field(out, field, indent + 1);
    }
}

fn write_field(out: &mut String, field: &Field, indent: usize) {
    line(out, indent, "Name", &field.name);
    line(out, indent, "Type", field.kind.type_name());
    line(out, indent, "IsArray", bool_str(field.is_array));
    line(out, indent, "IsNullable", bool_str(field.is_nullable));
    line(out, indent, "IsSearchable", bool_str(field.is_searchable));
}

fn line(out: &mut String, indent: usize, label: &str, value: &str) {
    push_indent(out, indent);
    out.push_str(label);
    out.push_str(": ");
    out.push_str(value);
    out.push('\n');
}

fn header(out: &mut String, indent: usize, label: &str) {
    push_indent(out, indent);
    out.push_str(label);
    out.push_str(":\n");
}

fn push_indent(out: &mut String, indent: usize) {
    for _ in 0..indent {
        out.push_str("  ");
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
