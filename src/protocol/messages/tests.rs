//! Reflection-layer tests: generic over whatever messages the schema
//! declares, so they keep passing as the schema grows.
use super::*;

#[test]
fn registry_covers_every_declared_type_id() {
    assert!(!ALL_TYPE_IDS.is_empty());
    for &type_id in ALL_TYPE_IDS {
        assert_ne!(type_id, 0, "0 is reserved for \"no message\"");
        let any = new_by_type_id(type_id).expect("factory must cover every declared type-id");
        assert_eq!(any.type_id(), type_id);
        let d = descriptor_for(type_id).expect("descriptor must be registered");
        assert_eq!(d.type_id, type_id);
    }
}

#[test]
fn unknown_type_id_returns_none() {
    assert!(new_by_type_id(0).is_none());
    assert!(ALL_TYPE_IDS.iter().all(|&id| id != u16::MAX));
    assert!(new_by_type_id(u16::MAX).is_none());
}

#[test]
fn every_message_round_trips_its_zero_value_through_the_wire_form() {
    for &type_id in ALL_TYPE_IDS {
        let any = new_by_type_id(type_id).unwrap();
        let size = any.serialized_size();
        let mut buf = [0u8; crate::core::MAX_REASSEMBLY_BUFFER];
        any.to_bytes(&mut buf[..size]).expect("fresh instance must encode");

        let mut decoded = new_by_type_id(type_id).unwrap();
        assert!(decoded.from_bytes(&buf[..size]), "round trip must parse back");
        assert!(any.messages_equal(&decoded));
    }
}

#[test]
fn field_list_matches_descriptor() {
    for &type_id in ALL_TYPE_IDS {
        let any = new_by_type_id(type_id).unwrap();
        for field in any.fields() {
            assert!(any.field(field.name).is_some(), "every declared field must be readable");
        }
    }
}
