//! Parses the schema, validates it, runs the analyzer (which runs the
//! bool-pack layout pass) over every message, assigns sequential
//! type-ids, and renders the resulting analysis as a `static`
//! `MessageDescriptor` table — Rust source text grown in a `String`
//! buffer with `writeln!`.
use std::collections::HashSet;
use std::fmt::Write as _;

use crate::build_core::analyzer::{self, MessageAnalysis};
use crate::build_core::conf::FIRST_TYPE_ID;
use crate::build_core::domain::Schema;
use crate::build_core::errors::BuildError;
use crate::build_core::name_helpers::to_snake_case;

/// Parses and validates `schema`, then renders the full `generated.rs`
/// source text: one `MessageDescriptor` const (plus its backing
/// `FieldDescriptor`/`BoolPackEntry` arrays) per declared message.
pub(crate) fn generate(schema: &Schema) -> Result<String, BuildError> {
    let mut seen_names = HashSet::new();
    for message in &schema.messages {
        if !seen_names.insert(message.name.as_str()) {
            return Err(BuildError::DuplicateMessageName {
                name: message.name.clone(),
            });
        }
        let mut seen_fields = HashSet::new();
        for field in &message.fields {
            if !seen_fields.insert(field.name.as_str()) {
                return Err(BuildError::DuplicateFieldName {
                    message: message.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    let type_id_budget = u32::from(u16::MAX) - 1;
    if schema.messages.len() as u32 > type_id_budget {
        return Err(BuildError::TooManyMessageTypes {
            count: schema.messages.len(),
        });
    }

    let mut buffer = String::new();
    writeln!(buffer, "// @generated by build.rs from the message schema. Do not edit.")?;
    writeln!(buffer)?;

    for (i, message) in schema.messages.iter().enumerate() {
        let type_id = FIRST_TYPE_ID + i as u16;
        let analysis = analyzer::analyze_message(message, type_id)?;
        render_message(&mut buffer, message, &analysis)?;
    }

    Ok(buffer)
}

fn const_name(message_name: &str) -> String {
    to_snake_case(message_name, "msg").to_ascii_uppercase()
}

fn render_message(
    buffer: &mut String,
    message: &crate::build_core::domain::MessageDef,
    analysis: &MessageAnalysis,
) -> Result<(), BuildError> {
    let base = const_name(&message.name);

    writeln!(buffer, "pub static {base}_FIELDS: &[crate::core::FieldDescriptor] = &[")?;
    for (index, field) in message.fields.iter().enumerate() {
        let kind = match field.field_type.as_str() {
            "byte" => "Byte",
            "int" => "Int",
            "bool" => "Bool",
            "float" => "Float",
            "string" => "String",
            "bytes" => "Bytes",
            other => unreachable!("unknown field type {other} should have failed validation"),
        };
        writeln!(
            buffer,
            "\tcrate::core::FieldDescriptor {{ name: {:?}, kind: crate::core::FieldKind::{kind}, index: {index} }},",
            field.name
        )?;
    }
    writeln!(buffer, "];")?;

    writeln!(buffer, "pub static {base}_BOOL_PACKS: &[crate::core::BoolPackEntry] = &[")?;
    for entry in &analysis.bool_packs {
        writeln!(
            buffer,
            "\tcrate::core::BoolPackEntry {{ field_index: {}, bit_index: {}, byte_index: {}, last: {}, boundary: {} }},",
            entry.field_index, entry.bit_index, entry.byte_index, entry.last, entry.boundary
        )?;
    }
    writeln!(buffer, "];")?;

    writeln!(buffer, "pub static {base}_DESCRIPTOR: crate::core::MessageDescriptor = crate::core::MessageDescriptor {{")?;
    writeln!(buffer, "\tname: {:?},", message.name)?;
    writeln!(buffer, "\ttype_id: {},", analysis.type_id)?;
    writeln!(buffer, "\tfields: {base}_FIELDS,")?;
    writeln!(buffer, "\tbool_packs: {base}_BOOL_PACKS,")?;
    writeln!(buffer, "\ttotal_pack_bytes: {},", analysis.total_pack_bytes)?;
    writeln!(buffer, "\thas_static_size: {},", analysis.has_static_size)?;
    writeln!(buffer, "\tstatic_size: {},", analysis.static_size)?;
    writeln!(buffer, "\tstatic_part: {},", analysis.static_part)?;
    writeln!(buffer, "\talways_single_part: {},", analysis.always_single_part)?;
    writeln!(buffer, "\thas_float_fields: {},", analysis.has_float_fields)?;
    writeln!(buffer, "\thas_string_fields: {},", analysis.has_string_fields)?;
    writeln!(buffer, "\thas_bytes_fields: {},", analysis.has_bytes_fields)?;
    writeln!(buffer, "}};")?;
    writeln!(buffer)?;

    Ok(())
}
