/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// Arrays built this way carry no type tag. Any other expression is
/// converted with `Value::from`.
///
/// ```rust
/// use serde_tson::{decode, tson};
///
/// let expected = tson!({ "user": { "name": "John", "age": 30, "tags": ["a", null] } });
/// assert_eq!(decode("user{name\"John\", age#30, tags[\"a\", -]}").unwrap(), expected);
/// ```
#[macro_export]
macro_rules! tson {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::array(vec![$($crate::tson!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::TsonMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::TsonMap::new();
        $(
            object.insert($key.to_string(), $crate::tson!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{TsonMap, Value};

    #[test]
    fn test_tson_macro_primitives() {
        assert_eq!(tson!(null), Value::Null);
        assert_eq!(tson!(true), Value::Bool(true));
        assert_eq!(tson!(42), Value::Int(42));
        assert_eq!(tson!(3.5), Value::Double(3.5));
        assert_eq!(tson!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_tson_macro_nested() {
        assert_eq!(tson!([]), Value::array(vec![]));
        assert_eq!(tson!({}), Value::Object(TsonMap::new()));

        let value = tson!({ "a": [1, { "b": false }], "c": null });
        let a = value.get("a").and_then(Value::as_array).unwrap();
        assert_eq!(a[0], Value::Int(1));
        assert_eq!(a[1].get("b"), Some(&Value::Bool(false)));
        assert_eq!(value.get("c"), Some(&Value::Null));
    }
}
