//! Decoding a TSON document and reporting errors.
//!
//! Run with: RUST_LOG=serde_tson=trace cargo run --example decode_user

use serde_tson::decode;
use std::error::Error;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let text = r#"
        // a named top-level object
        user {
            name "John",
            age #30,
            isActive ?true,
            roles <">["admin", "dev"]
        }
    "#;

    let value = decode(text)?;
    println!("Decoded:\n{}\n", value);
    println!("As JSON:\n{}\n", serde_json::to_string_pretty(&value)?);

    // Errors carry the line and column where decoding stopped
    let broken = "user {\n    name \"John\",\n    age #30\n";
    match decode(broken) {
        Ok(value) => println!("Unexpectedly decoded: {}", value),
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}
