use seqrpc::protocol::{
    BinaryInputProtocol, BinaryOutputProtocol, BinaryProtocolConfig, FieldType, InputProtocol,
    ListHeader, MapHeader, MessageHeader, MessageType, OutputProtocol, ProtocolError,
};
use std::io::{self, Cursor};

fn input(bytes: Vec<u8>) -> BinaryInputProtocol<Cursor<Vec<u8>>> {
    BinaryInputProtocol::new(Cursor::new(bytes))
}

fn strict_input(bytes: Vec<u8>) -> BinaryInputProtocol<Cursor<Vec<u8>>> {
    BinaryInputProtocol::with_config(
        Cursor::new(bytes),
        BinaryProtocolConfig {
            strict_read: true,
            ..Default::default()
        },
    )
}

#[test]
fn strict_header_layout() {
    let mut oprot = BinaryOutputProtocol::new(Vec::new());
    oprot
        .write_message_begin("add", MessageType::Call, 7)
        .unwrap();

    assert_eq!(
        oprot.into_inner(),
        vec![
            0x80, 0x01, 0x00, 0x01, // version | CALL
            0x00, 0x00, 0x00, 0x03, b'a', b'd', b'd', // name
            0x00, 0x00, 0x00, 0x07, // seq id
        ]
    );
}

#[test]
fn old_header_form_is_accepted_by_default() {
    let mut oprot = BinaryOutputProtocol::with_config(
        Vec::new(),
        BinaryProtocolConfig {
            strict_write: false,
            ..Default::default()
        },
    );
    oprot
        .write_message_begin("echo", MessageType::Reply, -3)
        .unwrap();
    let bytes = oprot.into_inner();
    assert_eq!(&bytes[..4], &[0, 0, 0, 4]);

    let header = input(bytes.clone()).read_message_begin().unwrap();
    assert_eq!(header, MessageHeader::new("echo", MessageType::Reply, -3));

    match strict_input(bytes).read_message_begin() {
        Err(ProtocolError::BadVersion(word)) => assert_eq!(word, 4),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn unsupported_version_is_rejected() {
    let bytes = vec![0x80, 0x02, 0x00, 0x02, 0, 0, 0, 0, 0, 0, 0, 1];
    assert!(matches!(
        input(bytes).read_message_begin(),
        Err(ProtocolError::BadVersion(_))
    ));
}

#[test]
fn unknown_message_type_is_invalid_data() {
    let bytes = vec![0x80, 0x01, 0x00, 0x09, 0, 0, 0, 0, 0, 0, 0, 1];
    assert!(matches!(
        input(bytes).read_message_begin(),
        Err(ProtocolError::InvalidData(_))
    ));
}

#[test]
fn oversized_string_is_rejected_before_reading() {
    let mut iprot = BinaryInputProtocol::with_config(
        Cursor::new(vec![0x00, 0x00, 0x10, 0x00]),
        BinaryProtocolConfig {
            max_string_length: 1024,
            ..Default::default()
        },
    );

    match iprot.read_string() {
        Err(ProtocolError::SizeLimit { size, max }) => {
            assert_eq!(size, 4096);
            assert_eq!(max, 1024);
        }
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn negative_lengths_are_rejected() {
    let mut iprot = input(vec![0xff, 0xff, 0xff, 0xfe]);
    assert!(matches!(
        iprot.read_binary(),
        Err(ProtocolError::NegativeSize(-2))
    ));

    let mut iprot = input(vec![u8::from(FieldType::I32), 0xff, 0xff, 0xff, 0xff]);
    assert!(matches!(
        iprot.read_list_begin(),
        Err(ProtocolError::NegativeSize(-1))
    ));
}

#[test]
fn invalid_utf8_string_is_invalid_data() {
    let mut iprot = input(vec![0, 0, 0, 2, 0xc3, 0x28]);
    assert!(matches!(
        iprot.read_string(),
        Err(ProtocolError::InvalidData(_))
    ));
}

#[test]
fn truncated_input_is_unexpected_eof() {
    let mut iprot = input(vec![0x00, 0x01]);
    match iprot.read_i32() {
        Err(ProtocolError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
        other => panic!("Unexpected result: {:?}", other),
    }
}

#[test]
fn primitives_are_big_endian() {
    let mut oprot = BinaryOutputProtocol::new(Vec::new());
    oprot.write_bool(true).unwrap();
    oprot.write_byte(-1).unwrap();
    oprot.write_i16(0x0102).unwrap();
    oprot.write_i64(-2).unwrap();
    oprot.write_double(1.5).unwrap();
    let bytes = oprot.into_inner();

    assert_eq!(&bytes[..4], &[0x01, 0xff, 0x01, 0x02]);
    assert_eq!(&bytes[4..12], &[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe]);

    let mut iprot = input(bytes);
    assert!(iprot.read_bool().unwrap());
    assert_eq!(iprot.read_byte().unwrap(), -1);
    assert_eq!(iprot.read_i16().unwrap(), 0x0102);
    assert_eq!(iprot.read_i64().unwrap(), -2);
    assert_eq!(iprot.read_double().unwrap(), 1.5);
}

/// Writes a struct holding every container kind plus a nested struct,
/// followed by a sentinel i32.
fn nested_struct_then_sentinel() -> Vec<u8> {
    let mut oprot = BinaryOutputProtocol::new(Vec::new());

    oprot.write_struct_begin("outer").unwrap();

    oprot.write_field_begin("names", FieldType::List, 1).unwrap();
    oprot
        .write_list_begin(ListHeader {
            element_type: FieldType::String,
            size: 2,
        })
        .unwrap();
    oprot.write_string("a").unwrap();
    oprot.write_string("bc").unwrap();
    oprot.write_list_end().unwrap();
    oprot.write_field_end().unwrap();

    oprot.write_field_begin("scores", FieldType::Map, 2).unwrap();
    oprot
        .write_map_begin(MapHeader {
            key_type: FieldType::I16,
            value_type: FieldType::Double,
            size: 1,
        })
        .unwrap();
    oprot.write_i16(3).unwrap();
    oprot.write_double(0.25).unwrap();
    oprot.write_map_end().unwrap();
    oprot.write_field_end().unwrap();

    oprot.write_field_begin("tags", FieldType::Set, 3).unwrap();
    oprot
        .write_set_begin(ListHeader {
            element_type: FieldType::I64,
            size: 1,
        })
        .unwrap();
    oprot.write_i64(9).unwrap();
    oprot.write_set_end().unwrap();
    oprot.write_field_end().unwrap();

    oprot.write_field_begin("inner", FieldType::Struct, 4).unwrap();
    oprot.write_struct_begin("inner").unwrap();
    oprot.write_field_begin("flag", FieldType::Bool, 1).unwrap();
    oprot.write_bool(false).unwrap();
    oprot.write_field_end().unwrap();
    oprot.write_field_stop().unwrap();
    oprot.write_struct_end().unwrap();
    oprot.write_field_end().unwrap();

    oprot.write_field_stop().unwrap();
    oprot.write_struct_end().unwrap();

    oprot.write_i32(0x5eed).unwrap();
    oprot.into_inner()
}

#[test]
fn skip_discards_nested_values_exactly() {
    let mut iprot = input(nested_struct_then_sentinel());
    iprot.skip(FieldType::Struct).unwrap();
    assert_eq!(iprot.read_i32().unwrap(), 0x5eed);
}

#[test]
fn skip_respects_depth_limit() {
    let mut iprot = input(nested_struct_then_sentinel());
    assert!(matches!(
        seqrpc::protocol::skip_field(&mut iprot, FieldType::Struct, 1),
        Err(ProtocolError::DepthLimit)
    ));
}

#[test]
fn skip_rejects_stop_and_void() {
    let mut iprot = input(Vec::new());
    assert!(matches!(
        iprot.skip(FieldType::Stop),
        Err(ProtocolError::InvalidData(_))
    ));
    assert!(matches!(
        iprot.skip(FieldType::Void),
        Err(ProtocolError::InvalidData(_))
    ));
}

#[test]
fn field_stop_carries_no_id() {
    let mut oprot = BinaryOutputProtocol::new(Vec::new());
    oprot.write_field_stop().unwrap();
    oprot.write_field_begin("x", FieldType::I32, 5).unwrap();
    let bytes = oprot.into_inner();
    assert_eq!(bytes, vec![0x00, 0x08, 0x00, 0x05]);

    let mut iprot = input(bytes);
    assert!(iprot.read_field_begin().unwrap().is_stop());
    let field = iprot.read_field_begin().unwrap();
    assert_eq!((field.field_type, field.id), (FieldType::I32, 5));
}

#[test]
fn unknown_field_type_is_invalid_data() {
    let mut iprot = input(vec![0x07, 0x00, 0x01]);
    assert!(matches!(
        iprot.read_field_begin(),
        Err(ProtocolError::InvalidData(_))
    ));
}
