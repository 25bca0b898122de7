//! Helpers shared by the integration tests.
//!
//! The primary engine only exists with the `native` feature. These helpers decode
//! with the fallback engine always, and cross-check against the primary engine
//! whenever it is compiled in.

#![allow(dead_code)]

use serde::de::DeserializeOwned;
use serde_stc::{decode_with_options, from_value, DecodeOptions, Engine, Error, Result, Value};

/// Options for the best engine this build offers.
pub fn options() -> DecodeOptions {
    if Engine::Primary.is_available() {
        DecodeOptions::new()
    } else {
        DecodeOptions::fallback()
    }
}

/// Decodes with every available engine and checks that they agree.
pub fn decode(doc: &str) -> Result<Value> {
    let fallback = decode_with_options(doc, &DecodeOptions::fallback());
    if Engine::Primary.is_available() {
        let primary = decode_with_options(doc, &DecodeOptions::new());
        assert_eq!(
            primary.is_ok(),
            fallback.is_ok(),
            "engines disagree on {:?}",
            doc
        );
        if let (Ok(primary), Ok(fallback)) = (&primary, &fallback) {
            assert_eq!(primary, fallback, "engines disagree on {:?}", doc);
        }
    }
    fallback
}

/// Like [`decode`], but for single-violation documents the errors must match too.
pub fn decode_err(doc: &str) -> Error {
    let fallback = decode_with_options(doc, &DecodeOptions::fallback()).unwrap_err();
    if Engine::Primary.is_available() {
        let primary = decode_with_options(doc, &DecodeOptions::new()).unwrap_err();
        assert_eq!(primary, fallback, "engines disagree on {:?}", doc);
    }
    fallback
}

/// Decodes into `T` through the available engines.
pub fn parse<T: DeserializeOwned>(doc: &str) -> Result<T> {
    from_value(decode(doc)?)
}
