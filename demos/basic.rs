//! Decoding STC into a dynamic value and into typed structs.
//!
//! Run with: cargo run --example basic

use serde::Deserialize;
use serde_stc::{decode_with_options, from_value, DecodeOptions, Engine, ErrorKind};
use std::error::Error;

#[derive(Debug, Deserialize, PartialEq)]
struct Listener {
    port: u16,
    #[serde(default)]
    tls: bool,
}

#[derive(Debug, Deserialize)]
struct Config {
    name: String,
    listen: Vec<Listener>,
    motd: String,
}

const CONFIG: &str = "\
name: ```
edge-proxy
```
listen.$1.port: 443
listen.$1.tls: `true`
listen.$0.port: 80
motd: ````
Welcome!
```
fenced text is fine inside a longer fence
```
````";

fn main() -> Result<(), Box<dyn Error>> {
    // The primary engine needs the `native` feature
    let options = if Engine::Primary.is_available() {
        DecodeOptions::new()
    } else {
        DecodeOptions::fallback()
    };
    println!("Using the {} engine\n", options.engine.as_str());

    // Dynamic access
    let value = decode_with_options(CONFIG, &options)?;
    println!("Decoded value:\n{}\n", serde_json::to_string_pretty(&value)?);

    // Typed access
    let config: Config = from_value(value)?;
    assert_eq!(config.listen[0], Listener { port: 80, tls: false });
    println!("{} listens on {} ports", config.name, config.listen.len());
    println!("motd:\n{}\n", config.motd);

    // Errors point at the offending line
    let err = decode_with_options("a.$0: 1\na.$0: 2", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DuplicateLeafAssignment);
    println!("Rejected duplicate: {}", err);

    Ok(())
}
