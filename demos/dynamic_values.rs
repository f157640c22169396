//! Working with decoded values dynamically.
//!
//! Run with: cargo run --example dynamic_values

use serde::Deserialize;
use serde_tson::{decode, from_value, tson, Value};
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Config {
    host: String,
    port: u16,
    features: Vec<String>,
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let value = decode(
        r#"config{host"localhost", port#8080, features<">["auth", "logging", "metrics"], debug?true}"#,
    )?;

    // Access values dynamically
    if let Some(config) = value.get("config") {
        if let Some(host) = config.get("host").and_then(Value::as_str) {
            println!("Accessing field 'host': {}", host);
        }

        if let Some(port) = config.get("port").and_then(Value::as_i64) {
            println!("Accessing field 'port': {}", port);
        }

        if let Some(features) = config.get("features") {
            println!(
                "Accessing field 'features': {} items tagged {:?}\n",
                features.as_array().map_or(0, <[Value]>::len),
                features.type_tag()
            );
        }
    }

    // Compare against a tree built in code
    let expected = tson!({
        "config": {
            "host": "localhost",
            "port": 8080,
            "features": ["auth", "logging", "metrics"],
            "debug": true
        }
    });
    // the decoded array carries a type tag, the macro-built one does not
    println!("Equal to macro-built tree: {}\n", value == expected);

    // Convert the tree into a typed struct
    let config: Config = match value {
        Value::Object(mut root) => match root.get_mut("config") {
            Some(inner) => from_value(std::mem::take(inner))?,
            None => return Err("missing config".into()),
        },
        other => return Err(format!("expected object, found {}", other.kind_name()).into()),
    };
    println!("Typed config: {:?}", config);

    Ok(())
}
