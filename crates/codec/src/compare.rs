//! Total order over array values.
//!
//! This order is used directly as the storage engine's key order, so
//! it must agree with the codec: two values compare the same way no
//! matter which encoded form (compact or general) produced them.
//!
//! Order, in precedence:
//! 1. pointer identity — the exact same instance is equal without a
//!    content scan (distinct but value-equal instances still get one);
//! 2. component type — registry ids ascending; any registered type
//!    before any named type; named types by descriptor name;
//! 3. element-wise comparison up to the shorter length;
//! 4. length — the shorter array sorts first.

use crate::element::{ElementCodec, ScalarCodec};
use crate::registry::TypeRegistry;
use burrow_core::value::{ArrayValue, ElementType};
use std::cmp::Ordering;

/// Compare two array values under the engine's total order.
pub fn compare_arrays(codec: &ScalarCodec, a: &ArrayValue, b: &ArrayValue) -> Ordering {
    if std::ptr::eq(a, b) {
        return Ordering::Equal;
    }

    let ta = a.component_type();
    let tb = b.component_type();
    if ta != tb {
        return compare_component_types(codec.registry(), &ta, &tb);
    }

    match (a, b) {
        // Signed lexicographic byte compare, then length.
        (ArrayValue::I8(x), ArrayValue::I8(y)) => x.as_slice().cmp(y.as_slice()),
        // false < true.
        (ArrayValue::Bool(x), ArrayValue::Bool(y)) => x.as_slice().cmp(y.as_slice()),
        (ArrayValue::I16(x), ArrayValue::I16(y)) => x.as_slice().cmp(y.as_slice()),
        // char is unsigned.
        (ArrayValue::Char(x), ArrayValue::Char(y)) => x.as_slice().cmp(y.as_slice()),
        (ArrayValue::I32(x), ArrayValue::I32(y)) => x.as_slice().cmp(y.as_slice()),
        (ArrayValue::I64(x), ArrayValue::I64(y)) => x.as_slice().cmp(y.as_slice()),
        (ArrayValue::F32(x), ArrayValue::F32(y)) => compare_f32(x, y),
        (ArrayValue::F64(x), ArrayValue::F64(y)) => compare_f64(x, y),
        (
            ArrayValue::Object { elements: x, .. },
            ArrayValue::Object { elements: y, .. },
        ) => compare_elements(codec, x, y),
        // Equal component types but mismatched backing variants is a
        // malformed value; keep the order total with a stable fallback.
        _ => {
            let a_object = matches!(a, ArrayValue::Object { .. });
            let b_object = matches!(b, ArrayValue::Object { .. });
            a_object.cmp(&b_object)
        }
    }
}

/// Order between two differing component types.
fn compare_component_types(registry: &TypeRegistry, a: &ElementType, b: &ElementType) -> Ordering {
    match (registry.id_of(a), registry.id_of(b)) {
        (Some(ia), Some(ib)) => ia.cmp(&ib),
        // A registered type always sorts before an unregistered one.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => match (a, b) {
            (ElementType::Named(na), ElementType::Named(nb)) => na.cmp(nb),
            // Only Named descriptors lack registry ids.
            _ => Ordering::Equal,
        },
    }
}

fn compare_f32(x: &[f32], y: &[f32]) -> Ordering {
    for (a, b) in x.iter().zip(y) {
        let ord = a.total_cmp(b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    x.len().cmp(&y.len())
}

fn compare_f64(x: &[f64], y: &[f64]) -> Ordering {
    for (a, b) in x.iter().zip(y) {
        let ord = a.total_cmp(b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    x.len().cmp(&y.len())
}

fn compare_elements(
    codec: &ScalarCodec,
    x: &[burrow_core::value::Value],
    y: &[burrow_core::value::Value],
) -> Ordering {
    for (a, b) in x.iter().zip(y) {
        let ord = codec.compare(a, b);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    x.len().cmp(&y.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use burrow_core::value::Value;

    fn cmp(a: &ArrayValue, b: &ArrayValue) -> Ordering {
        compare_arrays(&ScalarCodec::default(), a, b)
    }

    #[test]
    fn test_identity_shortcut_is_pointer_based() {
        let codec = ScalarCodec::default();
        let a = ArrayValue::F64(vec![f64::NAN]);
        // Same instance: equal even though NaN != NaN structurally.
        assert_eq!(compare_arrays(&codec, &a, &a), Ordering::Equal);
        // Distinct instances still get a content comparison (and
        // total_cmp makes equal NaNs compare equal too).
        let b = a.clone();
        assert_eq!(compare_arrays(&codec, &a, &b), Ordering::Equal);
    }

    #[test]
    fn test_signed_byte_ordering() {
        // -1 sorts above 1: bytes are signed, not unsigned.
        let neg = ArrayValue::I8(vec![-1]);
        let pos = ArrayValue::I8(vec![1]);
        assert_eq!(cmp(&neg, &pos), Ordering::Greater);
        assert_eq!(cmp(&pos, &neg), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        let short = ArrayValue::I8(vec![1, 2]);
        let long = ArrayValue::I8(vec![1, 2, 3]);
        assert_eq!(cmp(&short, &long), Ordering::Less);
        assert_eq!(cmp(&long, &short), Ordering::Greater);

        let short = ArrayValue::I64(vec![9]);
        let long = ArrayValue::I64(vec![9, 0]);
        assert_eq!(cmp(&short, &long), Ordering::Less);
    }

    #[test]
    fn test_bool_false_before_true() {
        let f = ArrayValue::Bool(vec![false]);
        let t = ArrayValue::Bool(vec![true]);
        assert_eq!(cmp(&f, &t), Ordering::Less);
    }

    #[test]
    fn test_char_is_unsigned() {
        let low = ArrayValue::Char(vec![0x0041]);
        let high = ArrayValue::Char(vec![0xFFFF]);
        assert_eq!(cmp(&low, &high), Ordering::Less);
    }

    #[test]
    fn test_cross_type_orders_by_registry_id() {
        // i32 (id 4) before i64 (id 5), regardless of content.
        let ints = ArrayValue::I32(vec![i32::MAX]);
        let longs = ArrayValue::I64(vec![i64::MIN]);
        assert_eq!(cmp(&ints, &longs), Ordering::Less);
        assert_eq!(cmp(&longs, &ints), Ordering::Greater);
    }

    #[test]
    fn test_registered_before_named() {
        let registered = ArrayValue::Object {
            component: ElementType::Str,
            elements: vec![],
        };
        let named = ArrayValue::Object {
            component: ElementType::Named("a.A".into()),
            elements: vec![],
        };
        assert_eq!(cmp(&registered, &named), Ordering::Less);
        assert_eq!(cmp(&named, &registered), Ordering::Greater);
    }

    #[test]
    fn test_named_order_is_lexicographic() {
        let a = ArrayValue::Object {
            component: ElementType::Named("com.example.Alpha".into()),
            elements: vec![Value::I64(99)],
        };
        let b = ArrayValue::Object {
            component: ElementType::Named("com.example.Beta".into()),
            elements: vec![Value::I64(0)],
        };
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_float_total_order_in_arrays() {
        let neg_zero = ArrayValue::F64(vec![-0.0]);
        let pos_zero = ArrayValue::F64(vec![0.0]);
        assert_eq!(cmp(&neg_zero, &pos_zero), Ordering::Less);

        let nan = ArrayValue::F32(vec![f32::NAN]);
        let inf = ArrayValue::F32(vec![f32::INFINITY]);
        assert_eq!(cmp(&nan, &inf), Ordering::Greater);
    }

    #[test]
    fn test_object_elements_compared_in_order() {
        let a = ArrayValue::Object {
            component: ElementType::Any,
            elements: vec![Value::I64(1), Value::Str("a".into())],
        };
        let b = ArrayValue::Object {
            component: ElementType::Any,
            elements: vec![Value::I64(1), Value::Str("b".into())],
        };
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_nested_array_elements_recurse() {
        let a = ArrayValue::Object {
            component: ElementType::Array,
            elements: vec![Value::Array(ArrayValue::I8(vec![1, 2]))],
        };
        let b = ArrayValue::Object {
            component: ElementType::Array,
            elements: vec![Value::Array(ArrayValue::I8(vec![1, 2, 3]))],
        };
        assert_eq!(cmp(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_equal_content_equal_length_is_equal() {
        let a = ArrayValue::I16(vec![3, 1, 4]);
        let b = ArrayValue::I16(vec![3, 1, 4]);
        assert_eq!(cmp(&a, &b), Ordering::Equal);
    }
}
