//! Property tests for the array total order and codec round-trip.

use burrowdb::{
    ArrayType, ArrayValue, ByteReader, DataBuffer, ElementType, StorageDataType, Value,
    TYPE_ARRAY,
};
use proptest::prelude::*;
use std::cmp::Ordering;

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i8>().prop_map(Value::I8),
        any::<i16>().prop_map(Value::I16),
        any::<u16>().prop_map(Value::Char),
        any::<i32>().prop_map(Value::I32),
        any::<i64>().prop_map(Value::I64),
        any::<f32>().prop_map(Value::F32),
        any::<f64>().prop_map(Value::F64),
        "[a-z]{0,8}".prop_map(Value::Str),
    ]
}

fn array_value() -> impl Strategy<Value = ArrayValue> {
    prop_oneof![
        prop::collection::vec(any::<bool>(), 0..6).prop_map(ArrayValue::Bool),
        prop::collection::vec(any::<i8>(), 0..6).prop_map(ArrayValue::I8),
        prop::collection::vec(any::<i16>(), 0..6).prop_map(ArrayValue::I16),
        prop::collection::vec(any::<u16>(), 0..6).prop_map(ArrayValue::Char),
        prop::collection::vec(any::<i32>(), 0..6).prop_map(ArrayValue::I32),
        prop::collection::vec(any::<i64>(), 0..6).prop_map(ArrayValue::I64),
        prop::collection::vec(any::<f32>(), 0..6).prop_map(ArrayValue::F32),
        prop::collection::vec(any::<f64>(), 0..6).prop_map(ArrayValue::F64),
        prop::collection::vec(scalar_value(), 0..5).prop_map(|elements| ArrayValue::Object {
            component: ElementType::Any,
            elements,
        }),
    ]
}

fn encode(codec: &ArrayType, v: &ArrayValue) -> Vec<u8> {
    let mut buf = DataBuffer::new();
    codec.write(&mut buf, v).unwrap();
    buf.into_bytes()
}

proptest! {
    /// decode(encode(v)) compares equal to v, and re-encodes to the
    /// same bytes. (Comparator equality rather than `==` so that NaN
    /// payloads, which round-trip bit-exactly, do not trip IEEE
    /// inequality.)
    #[test]
    fn roundtrip_is_lossless(v in array_value()) {
        let codec = ArrayType::default();
        let bytes = encode(&codec, &v);
        let back = codec.read(&mut ByteReader::new(&bytes)).unwrap();
        prop_assert_eq!(codec.compare(&v, &back), Ordering::Equal);
        prop_assert_eq!(encode(&codec, &back), bytes);
    }

    /// cmp(a,a) == Equal for a distinct but identical instance.
    #[test]
    fn order_is_reflexive(v in array_value()) {
        let codec = ArrayType::default();
        let w = v.clone();
        prop_assert_eq!(codec.compare(&v, &w), Ordering::Equal);
    }

    /// cmp(a,b) is the reverse of cmp(b,a).
    #[test]
    fn order_is_antisymmetric(a in array_value(), b in array_value()) {
        let codec = ArrayType::default();
        prop_assert_eq!(codec.compare(&a, &b), codec.compare(&b, &a).reverse());
    }

    /// a <= b and b <= c imply a <= c.
    #[test]
    fn order_is_transitive(a in array_value(), b in array_value(), c in array_value()) {
        let codec = ArrayType::default();
        if codec.compare(&a, &b) != Ordering::Greater
            && codec.compare(&b, &c) != Ordering::Greater
        {
            prop_assert_ne!(codec.compare(&a, &c), Ordering::Greater);
        }
    }

    /// A short byte array decodes to the same value from the compact
    /// form and from a hand-built general form, and the two decoded
    /// instances compare equal.
    #[test]
    fn order_ignores_encoded_form(data in prop::collection::vec(any::<i8>(), 0..=15)) {
        let codec = ArrayType::default();
        let compact = encode(&codec, &ArrayValue::I8(data.clone()));

        let mut buf = DataBuffer::new();
        buf.put_u8(TYPE_ARRAY);
        buf.put_u8(1); // registry id of i8
        buf.put_var_u32(data.len() as u32);
        for b in &data {
            buf.put_i8(*b);
        }
        let general = buf.into_bytes();

        let x = codec.read(&mut ByteReader::new(&compact)).unwrap();
        let y = codec.read(&mut ByteReader::new(&general)).unwrap();
        prop_assert_eq!(&x, &y);
        prop_assert_eq!(codec.compare(&x, &y), Ordering::Equal);
        prop_assert_eq!(x, ArrayValue::I8(data));
    }
}
