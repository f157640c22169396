use serde_tson::{decode, tson, TsonMap, Value};

#[test]
fn test_tson_macro_scalars() {
    assert_eq!(tson!(null), Value::Null);
    assert_eq!(tson!(true), Value::Bool(true));
    assert_eq!(tson!(false), Value::Bool(false));
    assert_eq!(tson!(-123), Value::Int(-123));
    assert_eq!(tson!(2.5), Value::Double(2.5));
    assert_eq!(tson!(""), Value::String(String::new()));
}

#[test]
fn test_tson_macro_collections() {
    assert_eq!(tson!([]), Value::array(vec![]));
    assert_eq!(tson!({}), Value::Object(TsonMap::new()));
    assert_eq!(
        tson!([1, "hello", true, null]),
        Value::array(vec![
            Value::Int(1),
            Value::from("hello"),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_tson_macro_matches_decoded_documents() {
    assert_eq!(
        decode(r#"server{host"localhost", port#8080, features["auth", "logging"], debug?true}"#)
            .unwrap(),
        tson!({
            "server": {
                "host": "localhost",
                "port": 8080,
                "features": ["auth", "logging"],
                "debug": true
            }
        })
    );
}

#[test]
fn test_tson_macro_accepts_expressions() {
    let name = String::from("dynamic");
    let count: i64 = 7;
    assert_eq!(
        tson!({ "name": name, "count": count }),
        decode("{name\"dynamic\", count#7}").unwrap()
    );
}
