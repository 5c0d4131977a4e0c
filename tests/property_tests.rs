//! Property-based tests - round-trip guarantees across generated inputs.
//!
//! These complement the golden-text and integration tests by checking the
//! write-then-read law on a wide range of values.

use std::collections::BTreeMap;

use proptest::prelude::*;
use yamlet::{from_str, to_string, Deserialize, Serialize};

fn roundtrip<T: Serialize + Deserialize + PartialEq + std::fmt::Debug>(value: &T) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

proptest! {
    // Primitive types
    #[test]
    fn prop_i32(n in any::<i32>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_i64(n in any::<i64>()) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_u64(n in any::<u64>()) {
        prop_assert!(roundtrip(&n));
    }

    // every float class except NaN, which is not equal to itself
    #[test]
    fn prop_f64(n in prop::num::f64::POSITIVE | prop::num::f64::NEGATIVE
        | prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL
        | prop::num::f64::ZERO | prop::num::f64::INFINITE) {
        prop_assert!(roundtrip(&n));
    }

    #[test]
    fn prop_bool(b in any::<bool>()) {
        prop_assert!(roundtrip(&b));
    }

    #[test]
    fn prop_char(c in any::<char>()) {
        prop_assert!(roundtrip(&c));
    }

    #[test]
    fn prop_string(s in any::<String>()) {
        prop_assert!(roundtrip(&s));
    }

    // Collections
    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_string(v in prop::collection::vec(any::<String>(), 0..10)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_nested_vec(v in prop::collection::vec(prop::collection::vec(any::<i16>(), 0..5), 0..5)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_vec_option(v in prop::collection::vec(proptest::option::of(any::<u8>()), 0..10)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_tuple(t in (any::<i32>(), any::<bool>(), any::<String>())) {
        prop_assert!(roundtrip(&t));
    }

    #[test]
    fn prop_btree_map(m in prop::collection::btree_map(any::<String>(), any::<i64>(), 0..10)) {
        prop_assert!(roundtrip(&m));
    }

    // Idempotence: writing the same value twice yields identical text
    #[test]
    fn prop_writer_idempotent(m in prop::collection::btree_map(any::<String>(), prop::collection::vec(any::<i32>(), 0..5), 0..8)) {
        let first = to_string(&m).unwrap();
        let second = to_string(&m).unwrap();
        prop_assert_eq!(first, second);
    }

    // Reparsing emitted text and re-emitting it is a fixed point
    #[test]
    fn prop_text_fixed_point(v in prop::collection::vec(any::<String>(), 1..8)) {
        let text = to_string(&v).unwrap();
        let tree = yamlet::parse_str(&text).unwrap();
        prop_assert_eq!(to_string(&tree).unwrap(), text);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Order independence: a two-field document reads the same either way
    #[test]
    fn prop_field_order_independent(a in any::<i32>(), b in any::<i32>()) {
        let forward = format!("a: {a}\nb: {b}\n");
        let reversed = format!("b: {b}\na: {a}\n");
        let from_forward: BTreeMap<String, i32> = from_str(&forward).unwrap();
        let from_reversed: BTreeMap<String, i32> = from_str(&reversed).unwrap();
        prop_assert_eq!(from_forward, from_reversed);
    }
}
