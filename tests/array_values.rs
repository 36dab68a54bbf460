//! End-to-end scenarios for array values through the public surface.

use burrowdb::{
    ArrayType, ArrayValue, ByteReader, CodecError, DataBuffer, ElementType, StorageDataType,
    Value, TAG_BYTE_ARRAY_0_15, TYPE_ARRAY,
};
use std::cmp::Ordering;

fn encode(codec: &ArrayType, v: &ArrayValue) -> Vec<u8> {
    let mut buf = DataBuffer::new();
    codec.write(&mut buf, v).unwrap();
    buf.into_bytes()
}

fn decode(codec: &ArrayType, bytes: &[u8]) -> ArrayValue {
    let mut r = ByteReader::new(bytes);
    let v = codec.read(&mut r).unwrap();
    assert_eq!(r.remaining(), 0);
    v
}

#[test]
fn int_array_wire_layout_and_roundtrip() {
    let codec = ArrayType::default();
    let v = ArrayValue::I32(vec![1, 2, 3]);
    let bytes = encode(&codec, &v);
    assert_eq!(
        bytes,
        vec![TYPE_ARRAY, 4, 3, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3]
    );
    assert_eq!(decode(&codec, &bytes), v);
}

#[test]
fn empty_byte_array_is_one_byte() {
    let codec = ArrayType::default();
    let bytes = encode(&codec, &ArrayValue::I8(vec![]));
    assert_eq!(bytes, vec![TAG_BYTE_ARRAY_0_15]);
    assert_eq!(decode(&codec, &bytes), ArrayValue::I8(vec![]));
}

#[test]
fn prefix_compares_less() {
    let codec = ArrayType::default();
    let short = ArrayValue::I8(vec![1, 2]);
    let long = ArrayValue::I8(vec![1, 2, 3]);
    assert_eq!(codec.compare(&short, &long), Ordering::Less);
}

#[test]
fn signed_bytes_order_signed() {
    let codec = ArrayType::default();
    assert_eq!(
        codec.compare(&ArrayValue::I8(vec![-1]), &ArrayValue::I8(vec![1])),
        Ordering::Greater
    );
}

#[test]
fn cross_type_order_ignores_content() {
    let codec = ArrayType::default();
    let ints = ArrayValue::I32(vec![1_000_000]);
    let longs = ArrayValue::I64(vec![-1_000_000]);
    assert_eq!(codec.compare(&ints, &longs), Ordering::Less);

    // Unregistered component types sort after every registered one.
    let named = ArrayValue::Object {
        component: ElementType::Named("ext.Point".into()),
        elements: vec![],
    };
    assert_eq!(codec.compare(&longs, &named), Ordering::Less);
}

#[test]
fn memory_grows_with_length() {
    let codec = ArrayType::default();
    let small = codec.memory(&ArrayValue::I64(vec![0; 100]));
    let large = codec.memory(&ArrayValue::I64(vec![0; 200]));
    assert!(small < large);
    // Doubling content roughly doubles the size, modulo base overhead.
    assert_eq!(large - small, 100 * 8 * 2);
}

#[test]
fn object_arrays_roundtrip_through_element_codec() {
    let codec = ArrayType::default();
    let v = ArrayValue::Object {
        component: ElementType::Any,
        elements: vec![
            Value::Null,
            Value::I32(7),
            Value::Str("k".into()),
            Value::Array(ArrayValue::Bool(vec![true])),
        ],
    };
    let bytes = encode(&codec, &v);
    assert_eq!(decode(&codec, &bytes), v);
}

#[test]
fn scalar_write_entry_point_is_rejected() {
    let codec = ArrayType::default();
    let mut buf = DataBuffer::new();
    let err = codec.write_scalar(&mut buf, &Value::Str("x".into())).unwrap_err();
    assert!(matches!(err, CodecError::UnsupportedOperation(_)));
}
