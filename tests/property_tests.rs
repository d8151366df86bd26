//! Property-based tests - pragmatic checks of the extraction guarantees
//! across generated inputs: coercion totality, prefix isolation, and
//! order-independence of the output.

use attrson::{coerce, extract, AttrMap, Number, Result, Value};
use proptest::prelude::*;

fn extract_pairs(pairs: &[(String, String)], prefix: &str) -> Result<AttrMap> {
    extract(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str())), prefix)
}

proptest! {
    // Coercion is total and only ever yields number, boolean, or string
    #[test]
    fn prop_coercion_total(s in ".*") {
        let value = coerce(&s);
        prop_assert!(matches!(
            value,
            Value::Number(_) | Value::Bool(_) | Value::String(_)
        ));
    }

    // Whenever coercion falls through to a string, it is the input unchanged
    #[test]
    fn prop_string_fallthrough_is_identity(s in ".*") {
        if let Value::String(back) = coerce(&s) {
            prop_assert_eq!(back, s);
        }
    }

    // "true"/"false" in any casing always coerce to the boolean
    #[test]
    fn prop_bool_roundtrip(b in any::<bool>(), mask in any::<u8>()) {
        let word = if b { "true" } else { "false" };
        let cased: String = word
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask >> (i % 8) & 1 == 1 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        prop_assert_eq!(coerce(&cased), Value::Bool(b));
    }

    #[test]
    fn prop_integer_roundtrip(n in any::<i64>()) {
        prop_assert_eq!(coerce(&n.to_string()), Value::Number(Number::Integer(n)));
    }

    // A rendered float always coerces back to the same numeric value
    // (whole-number floats render without a fraction and come back integer)
    #[test]
    fn prop_float_roundtrip(f in proptest::num::f64::NORMAL) {
        match coerce(&f.to_string()) {
            Value::Number(n) => prop_assert_eq!(n.as_f64(), f),
            other => prop_assert!(false, "expected number, got {:?}", other),
        }
    }

    // Pairs under a different prefix never influence the output
    #[test]
    fn prop_noise_pairs_ignored(
        scoped in prop::collection::vec(("[a-z.]{1,8}", "[a-z0-9]{0,8}"), 0..8),
        noise in prop::collection::vec(("[a-z.]{1,8}", "[a-z0-9]{0,8}"), 0..8),
    ) {
        let scoped_only: Vec<(String, String)> = scoped
            .iter()
            .map(|(n, v)| (format!("p:{}", n), v.clone()))
            .collect();
        let mut with_noise = scoped_only.clone();
        with_noise.extend(noise.iter().map(|(n, v)| (format!("q:{}", n), v.clone())));

        prop_assert_eq!(
            extract_pairs(&scoped_only, "p"),
            extract_pairs(&with_noise, "p")
        );
    }

    // Input order never matters for distinct names; the sorter fixes the
    // processing order (equal names keep unspecified relative order, so the
    // generator keys by name)
    #[test]
    fn prop_input_order_irrelevant(
        pairs in prop::collection::hash_map("[a-z.]{1,8}", "[a-z0-9]{0,8}", 0..8)
    ) {
        let forward: Vec<(String, String)> = pairs
            .iter()
            .map(|(n, v)| (format!("p:{}", n), v.clone()))
            .collect();
        let mut reversed = forward.clone();
        reversed.reverse();

        prop_assert_eq!(extract_pairs(&forward, "p"), extract_pairs(&reversed, "p"));
    }

    // Terminal markers compact densely, ordered by their numeric value
    #[test]
    fn prop_terminal_indices_order_by_value(
        indices in prop::collection::vec(0usize..1000, 1..10)
    ) {
        let pairs: Vec<(String, String)> = indices
            .iter()
            .map(|i| (format!("p:n[{}]", i), i.to_string()))
            .collect();
        let tree = extract_pairs(&pairs, "p").unwrap();

        let mut expected = indices.clone();
        expected.sort_unstable();
        let expected: Vec<Value> = expected
            .into_iter()
            .map(|i| Value::from(i as i64))
            .collect();

        prop_assert_eq!(tree.get("n").and_then(Value::as_array), Some(&expected));
    }
}
