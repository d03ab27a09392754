//! Bool-pack layout. Walks a message's fields in order, grouping
//! consecutive `bool` fields into packed bytes and tracking the byte
//! lone/packed booleans occupy overall.
//!
//! Transliterated from `analyze_message`'s bool-handling loop in the
//! reference implementation, with one deliberate deviation: the source
//! only drops a length-1 run when a later non-bool field triggers the
//! pop, so a message that *ends* on a lone boolean keeps a stray entry.
//! That's a loop-structure artifact, not a stated rule, so here every
//! length-1 run is dropped uniformly, trailing or not.
use crate::build_core::domain::FieldDef;

pub(crate) const BOOLS_PER_BYTE: usize = 8;

#[derive(Debug, Clone, Copy)]
pub(crate) struct BoolPackEntry {
    pub(crate) field_index: usize,
    pub(crate) bit_index: u8,
    pub(crate) byte_index: u8,
    pub(crate) last: bool,
    pub(crate) boundary: bool,
}

/// Returns the packed-byte layout table (lone booleans absent) and the
/// total number of bytes consumed by packed + lone-bool fields combined.
///
/// `packed_byte_counter` is the authoritative byte count: it advances by
/// `ceil(run_length / 8)` on every closed run, including singleton runs
/// that get dropped from the returned table. A message ending on (or
/// consisting solely of) a lone boolean still costs one byte on the wire,
/// even though no `BoolPackEntry` survives to say so.
pub(crate) fn analyze_bool_packs(fields: &[FieldDef]) -> (Vec<BoolPackEntry>, usize) {
    let mut bool_packs: Vec<BoolPackEntry> = Vec::new();
    let mut consecutive: usize = 0;
    let mut packed_byte_counter: usize = 0;

    for (field_index, field) in fields.iter().enumerate() {
        if field.field_type == "bool" {
            let byte_index = (packed_byte_counter + consecutive / BOOLS_PER_BYTE) as u8;
            let bit_index = (consecutive % BOOLS_PER_BYTE) as u8;
            let entry = BoolPackEntry {
                field_index,
                bit_index,
                byte_index,
                last: false,
                boundary: bit_index == (BOOLS_PER_BYTE - 1) as u8,
            };
            consecutive += 1;
            bool_packs.push(entry);
        } else {
            packed_byte_counter += close_run(&mut bool_packs, consecutive);
            consecutive = 0;
        }
    }
    packed_byte_counter += close_run(&mut bool_packs, consecutive);

    (bool_packs, packed_byte_counter)
}

/// Finalizes a just-ended run: drops it if it was a singleton (still
/// returning the one byte it costs), otherwise marks its last entry as
/// the run's final boolean and returns how many bytes the run spanned.
fn close_run(bool_packs: &mut Vec<BoolPackEntry>, consecutive: usize) -> usize {
    match consecutive {
        0 => 0,
        1 => {
            bool_packs.pop();
            1
        }
        n => {
            if let Some(last) = bool_packs.last_mut() {
                last.last = true;
            }
            (n + BOOLS_PER_BYTE - 1) / BOOLS_PER_BYTE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_core::domain::FieldDef;

    fn field(name: &str, field_type: &str) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            field_type: field_type.to_string(),
        }
    }

    #[test]
    fn singleton_bools_are_dropped() {
        let fields = [field("f", "bool")];
        let (packs, total) = analyze_bool_packs(&fields);
        assert!(packs.is_empty());
        assert_eq!(total, 1);
    }

    #[test]
    fn two_bool_runs_split_by_an_int_field_pack_separately() {
        let fields = [
            field("a", "bool"),
            field("b", "bool"),
            field("c", "bool"),
            field("d", "int"),
            field("e", "bool"),
            field("f", "bool"),
        ];
        let (packs, total) = analyze_bool_packs(&fields);
        assert_eq!(total, 2);
        assert_eq!(packs.len(), 5);
        assert_eq!(packs[0].byte_index, 0);
        assert_eq!(packs[2].byte_index, 0);
        assert!(packs[2].last);
        assert_eq!(packs[3].field_index, 4);
        assert_eq!(packs[3].byte_index, 1);
        assert!(packs[4].last);
    }

    #[test]
    fn nine_bools_spill_into_a_second_byte() {
        let names = ["b0", "b1", "b2", "b3", "b4", "b5", "b6", "b7", "b8"];
        let fields: Vec<FieldDef> = names.iter().map(|n| field(n, "bool")).collect();
        let (packs, total) = analyze_bool_packs(&fields);
        assert_eq!(total, 2);
        assert!(packs[7].boundary);
        assert_eq!(packs[8].byte_index, 1);
        assert!(packs[8].last);
    }
}
