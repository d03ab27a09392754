//! Message analyzer. Classifies each message's wire-size shape (fully
//! static vs. dynamic), derives the static prefix size, and caches the
//! per-kind field predicates the generated code needs.
use crate::build_core::boolpack::{self, BoolPackEntry};
use crate::build_core::domain::MessageDef;
use crate::build_core::errors::BuildError;

const HEADER_SIZE: usize = 4;
const PACKET_SIZE: usize = 255;
const DYNAMIC_FIELD_HEADER_SIZE: usize = 1;

/// Static wire size of a field kind, or `None` for the three dynamic kinds.
fn static_size_of(field_type: &str) -> Option<usize> {
    match field_type {
        "byte" | "bool" => Some(1),
        "int" => Some(4),
        "float" | "string" | "bytes" => None,
        _ => unreachable!("validated by the caller"),
    }
}

pub(crate) struct MessageAnalysis {
    pub(crate) type_id: u16,
    pub(crate) bool_packs: Vec<BoolPackEntry>,
    pub(crate) total_pack_bytes: usize,
    pub(crate) has_static_size: bool,
    pub(crate) static_size: usize,
    pub(crate) static_part: usize,
    pub(crate) always_single_part: bool,
    pub(crate) has_float_fields: bool,
    pub(crate) has_string_fields: bool,
    pub(crate) has_bytes_fields: bool,
}

/// Validates a message's field types against the closed set and produces
/// its bool-pack and size analysis. `type_id` has already been assigned by the caller
/// (sequential, starting at 1).
pub(crate) fn analyze_message(message: &MessageDef, type_id: u16) -> Result<MessageAnalysis, BuildError> {
    const FIELD_TYPES: &[&str] = &["byte", "int", "bool", "float", "string", "bytes"];
    for field in &message.fields {
        if !FIELD_TYPES.contains(&field.field_type.as_str()) {
            return Err(BuildError::UnknownFieldType {
                message: message.name.clone(),
                field: field.name.clone(),
                field_type: field.field_type.clone(),
            });
        }
    }

    let (bool_packs, total_pack_bytes) = boolpack::analyze_bool_packs(&message.fields);

    let has_static_size = message.fields.iter().all(|f| static_size_of(&f.field_type).is_some());

    let mut static_size = HEADER_SIZE + total_pack_bytes;
    for field in &message.fields {
        if field.field_type != "bool" {
            if let Some(size) = static_size_of(&field.field_type) {
                static_size += size;
            }
        }
    }

    let (static_size, static_part) = if has_static_size {
        (static_size, 0)
    } else {
        let mut static_part = static_size;
        for field in &message.fields {
            if static_size_of(&field.field_type).is_none() {
                static_part += DYNAMIC_FIELD_HEADER_SIZE;
            }
        }
        (0, static_part)
    };

    let always_single_part = has_static_size && static_size <= PACKET_SIZE;

    let has_float_fields = message.fields.iter().any(|f| f.field_type == "float");
    let has_string_fields = message.fields.iter().any(|f| f.field_type == "string");
    let has_bytes_fields = message.fields.iter().any(|f| f.field_type == "bytes");

    Ok(MessageAnalysis {
        type_id,
        bool_packs,
        total_pack_bytes,
        has_static_size,
        static_size,
        static_part,
        always_single_part,
        has_float_fields,
        has_string_fields,
        has_bytes_fields,
    })
}
