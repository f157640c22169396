//! Property-based tests for literal fidelity and layout insensitivity.

use proptest::prelude::*;
use serde_tson::{decode, Value};

/// Writes `s` as a TSON string literal using only the escapes the decoder knows.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_$][a-zA-Z0-9_$.-]{0,12}"
}

fn layout_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(" ".to_string()),
            Just("\t".to_string()),
            Just("\r\n".to_string()),
            Just("/* c */".to_string()),
            Just("// c\n".to_string()),
        ],
        0..4,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_int_literal(n in any::<i64>()) {
        prop_assert_eq!(decode(&format!("#{}", n)).unwrap(), Value::Int(n));
    }

    #[test]
    fn prop_double_literal(whole in -1_000_000i64..1_000_000, frac in 0u32..1000) {
        let text = format!("{}.{:03}", whole, frac);
        let expected: f64 = text.parse().unwrap();
        prop_assert_eq!(decode(&format!("={}", text)).unwrap(), Value::Double(expected));
    }

    #[test]
    fn prop_string_literal(s in any::<String>()) {
        prop_assert_eq!(decode(&quote(&s)).unwrap(), Value::String(s));
    }

    #[test]
    fn prop_bool_literal(b in any::<bool>()) {
        prop_assert_eq!(decode(&format!("?{}", b)).unwrap(), Value::Bool(b));
    }

    #[test]
    fn prop_named_values_wrap(name in name_strategy(), n in any::<i64>()) {
        prop_assert_eq!(
            decode(&format!("{}#{}", name, n)).unwrap(),
            Value::named(name, Value::Int(n))
        );
    }

    #[test]
    fn prop_layout_is_insignificant(
        a in layout_strategy(),
        b in layout_strategy(),
        c in layout_strategy(),
        d in layout_strategy(),
        n in any::<i32>(),
    ) {
        let compact = decode(&format!("list[#{},x?true]", n)).unwrap();
        let spaced = decode(&format!("{}list{}[{}#{}{},x?true]{}", a, b, c, n, d, a)).unwrap();
        prop_assert_eq!(compact, spaced);
    }

    #[test]
    fn prop_decode_never_panics(s in "\\PC{0,40}") {
        let _ = decode(&s);
    }
}
